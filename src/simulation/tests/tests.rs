use super::*;
use crate::elements::{
    EL_EMPTY, EL_FIRE, EL_ICE, EL_LAVA, EL_SAND, EL_STEAM, EL_STONE, EL_WALL, EL_WATER, EL_WOOD,
    TOOL_COOL, TOOL_HEAT,
};

/// Constant random source: 0 makes every roll succeed, 1 makes none succeed
struct Fixed(u32);

impl RandomSource for Fixed {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

fn scripted(width: u32, height: u32, value: u32) -> WorldCore<Fixed> {
    WorldCore::with_random(width, height, &Settings::default(), Fixed(value))
}

#[test]
fn new_world_is_empty_at_ambient() {
    let world = WorldCore::new(8, 4);
    assert_eq!(world.size(), 32);
    assert!(world.grid_data().iter().all(|&t| t == EL_EMPTY));
    assert!(world.temp_data().iter().all(|&t| t == 22.0));
    assert_eq!(world.current, world.next);
}

#[test]
fn boundary_calls_degrade_on_bad_indices() {
    let mut world = WorldCore::new(4, 4);
    assert!(!world.is_valid(-1));
    assert!(!world.is_valid(16));
    assert_eq!(world.get_cell(-1), EL_EMPTY);
    assert_eq!(world.get_temp(99), 22.0);

    world.set_cell(-3, EL_SAND);
    world.set_cell(16, EL_SAND);
    world.set_temp(-1, 500.0);
    assert_eq!(world.count(EL_EMPTY), 16);

    // tool ids and unknown ids never reach the grid
    world.set_cell(5, TOOL_HEAT);
    world.set_cell(5, 200);
    assert_eq!(world.get_cell(5), EL_EMPTY);
}

#[test]
fn set_cell_writes_both_buffers_at_base_temperature() {
    let mut world = WorldCore::new(4, 4);
    world.set_cell(6, EL_LAVA);
    assert_eq!(world.get_cell(6), EL_LAVA);
    assert_eq!(world.get_temp(6), 1200.0);
    assert_eq!(world.next.types[6], EL_LAVA);
    assert_eq!(world.next.temperature[6], 1200.0);

    world.set_temp(6, 900.0);
    assert_eq!(world.next.temperature[6], 900.0);
    world.set_temp(6, f32::NAN);
    assert_eq!(world.get_temp(6), 900.0);
}

#[test]
fn reset_is_idempotent() {
    let mut world = WorldCore::new(6, 6);
    for i in 0..36 {
        world.set_cell(i, (i % 14) as u8 + 1);
    }
    world.update();
    world.reset();
    let once = (world.grid_data().to_vec(), world.temp_data().to_vec());
    world.reset();
    assert_eq!(world.grid_data(), &once.0[..]);
    assert_eq!(world.temp_data(), &once.1[..]);
    assert_eq!(world.count(EL_EMPTY), 36);
}

#[test]
fn temperatures_are_clamped_after_update() {
    let mut world = WorldCore::new(3, 3);
    world.set_cell(0, EL_WALL);
    world.set_cell(8, EL_WALL);
    world.set_temp(0, 1.0e6);
    world.set_temp(8, -1.0e6);
    world.update();
    assert_eq!(world.get_temp(0), 5000.0);
    assert_eq!(world.get_temp(8), -273.0);
    assert!(world.temp_data().iter().all(|t| (-273.0..=5000.0).contains(t)));
}

#[test]
fn melting_keeps_heat() {
    let mut world = scripted(1, 1, 0);
    world.set_cell(0, EL_ICE);
    world.set_temp(0, 60.0);
    world.update();
    assert_eq!(world.get_cell(0), EL_WATER);
    // 60 minus half-rate cooling toward 22
    assert!((world.get_temp(0) - 59.81).abs() < 1e-3, "got {}", world.get_temp(0));
}

#[test]
fn freezing_lands_at_base_temperature() {
    let mut world = scripted(1, 1, 0);
    world.set_cell(0, EL_WATER);
    world.set_temp(0, -50.0);
    world.update();
    assert_eq!(world.get_cell(0), EL_ICE);
    assert_eq!(world.get_temp(0), -10.0);
}

#[test]
fn hot_wood_ignites_then_rises() {
    let mut world = scripted(1, 2, 0);
    world.set_cell(1, EL_WOOD);
    world.set_temp(1, 400.0);
    world.update();
    assert_eq!(world.get_cell(0), EL_FIRE);
    assert_eq!(world.get_temp(0), 800.0);
    assert_eq!(world.get_cell(1), EL_EMPTY);
    assert_eq!(world.get_temp(1), 22.0);
}

#[test]
fn unlucky_world_has_no_phase_changes() {
    let mut world = scripted(1, 1, 1);
    world.set_cell(0, EL_ICE);
    world.set_temp(0, 60.0);
    world.update();
    assert_eq!(world.get_cell(0), EL_ICE);
}

#[test]
fn interact_applies_reaction_outside_a_frame() {
    let mut world = scripted(2, 1, 1);
    world.set_cell(0, EL_LAVA);
    world.set_cell(1, EL_WATER);
    assert!(!world.interact(0, 5));
    assert!(!world.interact(-1, 0));
    assert!(world.interact(0, 1));
    assert_eq!(world.get_cell(0), EL_STONE);
    assert_eq!(world.get_cell(1), EL_STEAM);
    assert_eq!(world.get_temp(1), 150.0);
    assert_eq!(world.current, world.next);
}

#[test]
fn tool_ids_map_to_tools() {
    assert_eq!(Tool::from_id(TOOL_HEAT), Some(Tool::Heat));
    assert_eq!(Tool::from_id(TOOL_COOL), Some(Tool::Cool));
    assert_eq!(Tool::from_id(EL_SAND), Some(Tool::Paint(EL_SAND)));
    assert_eq!(Tool::from_id(EL_EMPTY), Some(Tool::Paint(EL_EMPTY)));
    assert_eq!(Tool::from_id(50), None);
}

#[test]
fn brush_paints_a_clipped_square() {
    let mut world = WorldCore::new(5, 5);
    // radius 0 still paints 3x3; the corner stroke is clipped, not wrapped
    world.apply_brush(0, 0, 0, Tool::Paint(EL_SAND));
    assert_eq!(world.count(EL_SAND), 4);
    assert_eq!(world.get_cell(4), EL_EMPTY);
    assert_eq!(world.get_cell(20), EL_EMPTY);

    world.apply_brush(2, 2, 2, Tool::Paint(EL_SAND));
    assert_eq!(world.count(EL_SAND), 25);
}

#[test]
fn paint_respects_walls_but_erase_does_not() {
    let mut world = WorldCore::new(3, 1);
    world.set_cell(1, EL_WALL);
    world.apply_brush(1, 0, 1, Tool::Paint(EL_WATER));
    assert_eq!(world.get_cell(1), EL_WALL);
    assert_eq!(world.count(EL_WATER), 2);

    world.apply_brush(1, 0, 1, Tool::Paint(EL_EMPTY));
    assert_eq!(world.count(EL_EMPTY), 3);
}

#[test]
fn heat_brush_scales_by_resistance_and_skips_air() {
    let mut world = WorldCore::new(4, 1);
    world.set_cell(0, EL_SAND);
    world.set_cell(1, EL_WALL);
    world.set_cell(2, EL_STEAM);
    world.apply_brush(1, 0, 1, Tool::Heat);
    world.apply_brush(3, 0, 1, Tool::Heat);

    assert_eq!(world.get_temp(0), 42.0);
    assert_eq!(world.get_temp(1), 32.0);
    // steam is under both strokes
    assert_eq!(world.get_temp(2), 350.0);
    assert_eq!(world.get_temp(3), 22.0);
}

#[test]
fn heat_and_cool_brushes_saturate() {
    let mut world = WorldCore::new(1, 1);
    world.set_cell(0, EL_STEAM);
    world.set_temp(0, 8950.0);
    world.apply_brush(0, 0, 1, Tool::Heat);
    assert_eq!(world.get_temp(0), 9000.0);

    world.set_temp(0, -250.0);
    world.apply_brush(0, 0, 1, Tool::Cool);
    assert_eq!(world.get_temp(0), -273.0);
}

#[test]
fn same_seed_same_world() {
    let settings = Settings { seed: 4242, ..Settings::default() };
    let mut a = WorldCore::with_settings(24, 24, &settings);
    let mut b = WorldCore::with_settings(24, 24, &settings);
    for world in [&mut a, &mut b] {
        world.apply_brush(6, 4, 3, Tool::Paint(EL_WATER));
        world.apply_brush(16, 4, 3, Tool::Paint(EL_SAND));
        world.apply_brush(12, 20, 2, Tool::Paint(EL_LAVA));
    }
    for _ in 0..60 {
        a.update();
        b.update();
    }
    assert_eq!(a.grid_data(), b.grid_data());
    assert_eq!(a.temp_data(), b.temp_data());
    assert_eq!(a.rng().state(), b.rng().state());
}

#[test]
fn ambient_setter_clamps_and_feeds_reset() {
    let mut world = WorldCore::new(2, 2);
    world.set_ambient_temperature(f32::INFINITY);
    assert_eq!(world.ambient_temperature(), 22.0);
    world.set_ambient_temperature(9000.0);
    assert_eq!(world.ambient_temperature(), 5000.0);
    world.set_ambient_temperature(-40.0);
    world.reset();
    assert!(world.temp_data().iter().all(|&t| t == -40.0));
    assert_eq!(world.get_temp(-1), -40.0);
}

#[test]
fn perf_stats_track_the_last_step() {
    let mut world = scripted(1, 1, 0);
    world.set_cell(0, EL_ICE);
    world.set_temp(0, 60.0);
    world.update();
    assert_eq!(world.perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.set_cell(0, EL_ICE);
    world.set_temp(0, 60.0);
    world.update();
    let stats = world.perf_stats();
    assert_eq!(stats.phase_changes(), 1);
    assert_eq!(stats.grid_size(), 1);
    assert_eq!(stats.non_empty_cells(), 1);
    assert!(stats.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.perf_stats(), PerfStats::default());
}

#[test]
fn perf_counts_moves_and_reactions() {
    let settings = Settings { perf_enabled: true, ..Settings::default() };
    let mut world = WorldCore::with_random(2, 2, &settings, Fixed(1));
    world.set_cell(0, EL_LAVA);
    world.set_cell(1, EL_WATER);
    world.set_cell(2, EL_WALL);
    world.set_cell(3, EL_WALL);
    world.update();
    let stats = world.perf_stats();
    assert_eq!(stats.reactions_applied(), 1);
    assert_eq!(stats.particles_moved(), 0);
    assert_eq!(world.frame(), 1);
}

#[test]
fn extreme_temperatures_never_escape_the_clamp() {
    let mut world = WorldCore::new(2, 1);
    world.set_cell(0, EL_WALL);
    world.set_cell(1, EL_WALL);
    world.set_temp(0, f32::MAX);
    world.set_temp(1, -f32::MAX);
    assert_eq!(world.get_temp(0), 9000.0);
    assert_eq!(world.get_temp(1), -273.0);

    for _ in 0..3 {
        world.update();
        assert!(
            world.temp_data().iter().all(|t| (-273.0..=5000.0).contains(t)),
            "temps after update: {:?}",
            world.temp_data()
        );
    }
}

#[test]
fn bad_ambient_settings_are_repaired_at_construction() {
    let settings = Settings { ambient_temperature: f32::NAN, ..Settings::default() };
    assert!(settings.validate().is_err());
    let mut world = WorldCore::with_settings(3, 3, &settings);
    assert_eq!(world.ambient_temperature(), 22.0);
    world.update();
    assert!(world.temp_data().iter().all(|&t| t == 22.0));
    assert_eq!(world.get_temp(-1), 22.0);

    let hot = Settings { ambient_temperature: 9000.0, ..Settings::default() };
    let world = WorldCore::with_random(2, 2, &hot, Fixed(1));
    assert_eq!(world.ambient_temperature(), 5000.0);
    assert!(world.temp_data().iter().all(|&t| t == 5000.0));
}

#[test]
fn phase_changes_are_counted_per_world() {
    let mut quiet = scripted(1, 1, 0);
    quiet.set_cell(0, EL_ICE);
    quiet.set_temp(0, 60.0);

    let mut watched = scripted(1, 1, 0);
    watched.enable_perf_metrics(true);
    watched.set_cell(0, EL_SAND);

    // a conversion in an unmetered world must not leak into another world's stats
    quiet.update();
    watched.update();
    assert_eq!(quiet.get_cell(0), EL_WATER);
    assert_eq!(watched.perf_stats().phase_changes(), 0);
    assert_eq!(quiet.perf_stats(), PerfStats::default());
}
