#[cfg(feature = "debug")]
use super::state::DebugState;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::types::InputMap;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub const ACTION_TOGGLE_OVERLAY: &str = "ToggleOverlay";

#[cfg(feature = "debug")]
pub fn debug_key_input_system(input_map: Option<Res<InputMap>>, mut state: ResMut<DebugState>) {
    let Some(input_map) = input_map else {
        return;
    };
    if input_map.just_pressed(ACTION_TOGGLE_OVERLAY) {
        state.overlay_visible = !state.overlay_visible;
        info!("OVERLAY visible={} frame={}", state.overlay_visible, state.frame_counter);
    }
}
