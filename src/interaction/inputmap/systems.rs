//! Systems for input action evaluation.
use bevy::prelude::*;
use super::types::*;

/// Recompute every action from the current keyboard state. Transitions are derived from the
/// previous frame's action state, so they stay correct even when no input plugin clears
/// `ButtonInput` edges.
pub fn system_evaluate_bindings(keyboard: Res<ButtonInput<KeyCode>>, mut input_map: ResMut<InputMap>) {
    input_map.frame_counter += 1;
    let mut now_pressed = vec![false; input_map.states.len()];
    for binding in &input_map.bindings {
        if binding.keys.iter().all(|k| keyboard.pressed(*k)) {
            if let Some(slot) = now_pressed.get_mut(binding.action.0 as usize) {
                *slot = true;
            }
        }
    }
    for (state, pressed) in input_map.states.iter_mut().zip(now_pressed) {
        state.clear_transitions();
        if pressed && !state.pressed {
            state.just_pressed = true;
        } else if !pressed && state.pressed {
            state.just_released = true;
        }
        state.pressed = pressed;
    }
}
