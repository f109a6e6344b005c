use bevy::prelude::*;
use std::{collections::HashMap, path::PathBuf, time::SystemTime};

use crate::core::config::{GameConfig, DEFAULT_CONFIG_LAYERS, OPTIONAL_CONFIG_LAYERS};

/// Config layers to watch. `main` replaces this with the layers actually requested on the CLI.
#[derive(Resource, Debug, Clone)]
pub struct ConfigReloadSettings {
    pub paths: Vec<PathBuf>,
    /// Layers in `paths` that may be missing without a warning.
    pub optional: Vec<PathBuf>,
    pub interval_secs: f32,
}
impl Default for ConfigReloadSettings {
    fn default() -> Self {
        Self {
            paths: DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect(),
            optional: OPTIONAL_CONFIG_LAYERS.iter().map(PathBuf::from).collect(),
            interval_secs: 0.5,
        }
    }
}

#[derive(Resource, Debug)]
struct ConfigReloadState {
    last_mod: HashMap<PathBuf, SystemTime>,
    timer: Timer,
}
impl FromWorld for ConfigReloadState {
    fn from_world(world: &mut World) -> Self {
        // Seed with current mtimes so the already-loaded config is not re-applied on the first poll.
        let mut last_mod = HashMap::new();
        if let Some(settings) = world.get_resource::<ConfigReloadSettings>() {
            for path in &settings.paths {
                if let Ok(t) = std::fs::metadata(path).and_then(|m| m.modified()) {
                    last_mod.insert(path.clone(), t);
                }
            }
        }
        Self { last_mod, timer: Timer::from_seconds(0.5, TimerMode::Repeating) }
    }
}

/// Polls the RON layers and swaps in a fresh `GameConfig` when any of them changes.
pub struct ConfigHotReloadPlugin;
impl Plugin for ConfigHotReloadPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ConfigReloadSettings>()
            .init_resource::<ConfigReloadState>()
            .add_systems(Update, (poll_and_reload_config, apply_config_to_window).chain());
    }
}

fn poll_and_reload_config(
    time: Res<Time>,
    settings: Res<ConfigReloadSettings>,
    mut state: ResMut<ConfigReloadState>,
    mut cfg_res: ResMut<GameConfig>,
) {
    let interval = settings.interval_secs.max(0.05);
    if (state.timer.duration().as_secs_f32() - interval).abs() > f32::EPSILON {
        state.timer.set_duration(std::time::Duration::from_secs_f32(interval));
    }
    if !state.timer.tick(time.delta()).finished() {
        return;
    }
    let mut dirty = false;
    for path in &settings.paths {
        let Ok(mod_time) = std::fs::metadata(path).and_then(|m| m.modified()) else {
            continue;
        };
        let entry = state.last_mod.entry(path.clone()).or_insert(SystemTime::UNIX_EPOCH);
        if mod_time > *entry {
            *entry = mod_time;
            dirty = true;
        }
    }
    if !dirty {
        return;
    }
    let (new_cfg, _used, errors) = GameConfig::load_layered_with_optional(settings.paths.iter(), &settings.optional);
    for e in errors {
        warn!("CONFIG HOT-RELOAD issue: {e}");
    }
    if *cfg_res == new_cfg {
        return;
    }
    for w in new_cfg.validate() {
        warn!("CONFIG WARNING: {w}");
    }
    info!("Config hot-reload applied");
    *cfg_res = new_cfg;
}

/// Push window-level settings (title, size, clear colour) whenever the config resource changes.
pub fn apply_config_to_window(
    cfg: Res<GameConfig>,
    mut windows: Query<&mut Window>,
    mut clear: Option<ResMut<ClearColor>>,
) {
    if !cfg.is_changed() || cfg.is_added() {
        return;
    }
    if let Ok(mut window) = windows.single_mut() {
        if window.width() != cfg.window.width || window.height() != cfg.window.height {
            window.resolution.set(cfg.window.width, cfg.window.height);
        }
        if window.title != cfg.window.title {
            window.title = cfg.window.title.clone();
        }
    }
    if let Some(clear) = clear.as_deref_mut() {
        clear.0 = cfg.background.clear_color();
    }
}
