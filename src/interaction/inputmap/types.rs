use bevy::prelude::*;
use smallvec::SmallVec;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub u16); // internal index (array position)

#[derive(Debug, Clone)]
pub struct ActionMeta {
    pub name: String,
    pub description: String,
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionState {
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}
impl ActionState {
    pub fn clear_transitions(&mut self) {
        self.just_pressed = false;
        self.just_released = false;
    }
}

/// A chord of keys that must all be held together.
pub type Chord = SmallVec<[KeyCode; 2]>;

#[derive(Debug, Clone)]
pub struct Binding {
    pub action: ActionId,
    pub keys: Chord,
}

/// Named, rebindable keyboard actions evaluated once per frame.
#[derive(Resource, Debug, Default)]
pub struct InputMap {
    pub actions: Vec<ActionMeta>,
    pub name_to_id: HashMap<String, ActionId>,
    pub bindings: Vec<Binding>,
    pub states: Vec<ActionState>,
    pub frame_counter: u64,
}

impl InputMap {
    pub fn get_state(&self, name: &str) -> Option<&ActionState> {
        self.name_to_id.get(name).and_then(|id| self.states.get(id.0 as usize))
    }
    pub fn pressed(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(|s| s.pressed)
    }
    pub fn just_pressed(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(|s| s.just_pressed)
    }
    pub fn just_released(&self, name: &str) -> bool {
        self.get_state(name).is_some_and(|s| s.just_released)
    }
    pub fn bindings_for(&self, name: &str) -> impl Iterator<Item = &Binding> {
        let id = self.name_to_id.get(name).copied();
        self.bindings.iter().filter(move |b| Some(b.action) == id)
    }

    /// One line per action, e.g. `Jump [Space] Jump`: name, bound chords, description.
    pub fn help_lines(&self) -> Vec<String> {
        self.actions
            .iter()
            .map(|meta| {
                let chords: Vec<String> = self
                    .bindings_for(&meta.name)
                    .map(|b| b.keys.iter().map(|k| format!("{k:?}")).collect::<Vec<_>>().join("+"))
                    .collect();
                format!("{} [{}] {}", meta.name, chords.join(", "), meta.description)
            })
            .collect()
    }
}
