use bevy::prelude::*;

use super::parse::parse_input_toml;
use super::systems::system_evaluate_bindings;
use super::types::InputMap;

pub const DEFAULT_INPUT_CONFIG: &str = "assets/config/input.toml";

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub struct InputActionUpdateSet;

/// Path of the input TOML, `INPUT_CONFIG_PATH` wins over the default location.
pub fn input_config_path() -> String {
    std::env::var("INPUT_CONFIG_PATH").unwrap_or_else(|_| DEFAULT_INPUT_CONFIG.into())
}

pub struct InputActionsPlugin;
impl Plugin for InputActionsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputMap>()
            .configure_sets(PreUpdate, InputActionUpdateSet)
            .add_systems(PreStartup, load_initial_input_map)
            .add_systems(PreUpdate, system_evaluate_bindings.in_set(InputActionUpdateSet));
    }
}

fn load_initial_input_map(mut commands: Commands) {
    let path = input_config_path();
    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            error!("INPUT MAP ERROR: cannot read {path}: {e}");
            return;
        }
    };
    let parsed = parse_input_toml(&raw, cfg!(feature = "debug"));
    for e in &parsed.errors {
        error!("INPUT MAP ERROR: {e}");
    }
    info!(
        "Input map loaded from {path}: {} actions, {} bindings",
        parsed.input_map.actions.len(),
        parsed.input_map.bindings.len()
    );
    commands.insert_resource(parsed.input_map);
}
