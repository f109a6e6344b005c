#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::state::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::core::components::{Chicken, ChickenBody};

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut state: ResMut<DebugState>,
    stats: Res<DebugStats>,
    q_chicken: Query<&ChickenBody, With<Chicken>>,
) {
    state.time_accum += time.delta_secs();
    if state.time_accum < state.log_interval {
        return;
    }
    state.time_accum = 0.0;
    let Ok(body) = q_chicken.single() else {
        return;
    };
    info!(
        "CHICKEN frame={} t={:.3}s fps={:.1} x={:.1} y={:.1} vy={:.2} facing={:?}",
        state.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        body.x,
        body.y,
        body.vy,
        body.facing
    );
}
