use bevy::prelude::*;

/// High-level app lifecycle state.
/// Loading -> Playing (a failed image load exits the app instead).
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Waiting for every image the scene needs.
    #[default]
    Loading,
    /// Scene spawned, simulation ticking.
    Playing,
}
