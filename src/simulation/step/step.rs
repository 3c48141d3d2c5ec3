use crate::behaviors::resolve_movement;
use crate::core::grid::Frame;
use crate::core::random::RandomSource;
use crate::temperature::{process_temperature_grid, TEMP_MAX, TEMP_MIN};

use super::{PerfTimer, WorldCore};

pub(super) fn step<R: RandomSource>(world: &mut WorldCore<R>) {
    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
    }
    let step_start = PerfTimer::start_if(perf_on);
    let ambient = world.ambient_temperature;

    // === THERMAL PASS ===
    // Conversions land in `next` and are committed before anything moves,
    // so movement sees the new materials.
    let t0 = PerfTimer::start_if(perf_on);
    let phase_changes = {
        let mut frame = Frame::begin(&mut world.current, &mut world.next, ambient);
        process_temperature_grid(&mut frame, &mut world.rng);
        let count = frame.phase_changes;
        frame.commit();
        count
    };
    if let Some(t0) = t0 {
        world.perf_stats.thermal_ms = t0.elapsed_ms();
    }

    // === MOVEMENT ===
    // Pass A (powders, liquids) bottom-up, then pass B (gases) top-down
    let t0 = PerfTimer::start_if(perf_on);
    let (moves, reactions) = {
        let mut frame = Frame::resume(&mut world.current, &mut world.next, ambient);
        resolve_movement(&mut frame, &mut world.rng);
        let counts = (frame.moves, frame.reactions);
        frame.commit_clamped(TEMP_MIN, TEMP_MAX);
        counts
    };
    if let Some(t0) = t0 {
        world.perf_stats.movement_ms = t0.elapsed_ms();
    }

    world.frame += 1;

    if let Some(step_start) = step_start {
        let stats = &mut world.perf_stats;
        stats.phase_changes = phase_changes;
        stats.reactions_applied = reactions;
        stats.particles_moved = moves;
        stats.non_empty_cells = world.current.non_empty() as u32;
        stats.grid_size = world.current.size() as u32;
        stats.step_ms = step_start.elapsed_ms();

        log::trace!(
            "frame {}: {:.3}ms (thermal {:.3}ms, movement {:.3}ms), moved {}, reactions {}, phase changes {}",
            world.frame,
            stats.step_ms,
            stats.thermal_ms,
            stats.movement_ms,
            stats.particles_moved,
            stats.reactions_applied,
            stats.phase_changes
        );
    }
}
