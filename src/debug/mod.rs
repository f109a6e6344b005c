//! Debug module: feature gated runtime state overlay & periodic logging.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys; // pub for testing
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod overlay;
#[cfg(feature = "debug")]
mod state;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use state::*;

#[cfg(feature = "debug")]
use crate::core::system::system_order::PresentationSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;
#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use overlay::{debug_overlay_spawn, debug_overlay_update};
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugState>()
            .init_resource::<DebugStats>()
            .add_systems(Startup, debug_overlay_spawn)
            .add_systems(
                Update,
                (
                    debug_stats_collect_system,
                    debug_key_input_system,
                    debug_logging_system,
                    debug_overlay_update,
                )
                    .chain()
                    .after(PresentationSet),
            );
        info!("DebugPlugin active (F1 toggles the state overlay)");
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;
#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
