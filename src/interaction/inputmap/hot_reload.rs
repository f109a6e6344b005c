use bevy::prelude::*;
use std::{path::PathBuf, time::SystemTime};

use super::parse::parse_input_toml;
use super::plugin::input_config_path;
use super::types::InputMap;

#[derive(Resource, Debug)]
struct InputReloadState {
    last_modified: Option<SystemTime>,
    timer: Timer,
    path: PathBuf,
}
impl FromWorld for InputReloadState {
    fn from_world(_: &mut World) -> Self {
        let path = PathBuf::from(input_config_path());
        // Startup already read the current file; only later edits trigger a reload.
        let last_modified = std::fs::metadata(&path).and_then(|m| m.modified()).ok();
        Self { last_modified, timer: Timer::from_seconds(0.5, TimerMode::Repeating), path }
    }
}

/// Debug builds re-read the input TOML whenever it changes on disk.
pub struct InputMapHotReloadPlugin;
impl Plugin for InputMapHotReloadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputReloadState>().add_systems(Update, poll_input_map_reload);
    }
}

fn poll_input_map_reload(time: Res<Time>, mut state: ResMut<InputReloadState>, mut input_map: ResMut<InputMap>) {
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let Ok(mod_time) = std::fs::metadata(&state.path).and_then(|m| m.modified()) else {
        return;
    };
    if state.last_modified.is_some_and(|prev| mod_time <= prev) {
        return;
    }
    state.last_modified = Some(mod_time);
    let raw = match std::fs::read_to_string(&state.path) {
        Ok(raw) => raw,
        Err(e) => {
            warn!("INPUT HOT-RELOAD read error: {e}");
            return;
        }
    };
    let parsed = parse_input_toml(&raw, true);
    if !parsed.errors.is_empty() {
        for e in parsed.errors {
            warn!("INPUT HOT-RELOAD parse error: {e}");
        }
        return;
    }
    *input_map = parsed.input_map;
    info!("Input map hot-reloaded");
}
