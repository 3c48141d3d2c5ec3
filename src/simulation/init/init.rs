use crate::core::grid::CellBuffers;
use crate::core::random::{RandomSource, Xorshift32};

use super::perf_stats::PerfStats;
use super::settings::Settings;
use super::WorldCore;

pub(super) fn create_world_core(width: u32, height: u32, settings: &Settings) -> WorldCore<Xorshift32> {
    create_world_core_with_random(width, height, settings, Xorshift32::new(settings.seed))
}

pub(super) fn create_world_core_with_random<R: RandomSource>(
    width: u32,
    height: u32,
    settings: &Settings,
    rng: R,
) -> WorldCore<R> {
    let ambient = settings.effective_ambient();
    log::debug!(
        "creating world {}x{} ({} cells), ambient {}°C",
        width,
        height,
        (width as usize) * (height as usize),
        ambient
    );

    WorldCore {
        current: CellBuffers::new(width, height, ambient),
        next: CellBuffers::new(width, height, ambient),
        rng,
        ambient_temperature: ambient,
        frame: 0,
        perf_enabled: settings.perf_enabled,
        perf_stats: PerfStats::default(),
    }
}
