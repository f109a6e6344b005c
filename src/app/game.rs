// This file is part of Chicken Run.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use super::assets::AssetLoadingPlugin;
use super::state::AppState;
use crate::core::system::system_order::{IntentSet, PresentationSet, SimulationSet};
use crate::debug::DebugPlugin;
use crate::gameplay::ChickenPlugin;
#[cfg(feature = "debug")]
use crate::interaction::inputmap::hot_reload::InputMapHotReloadPlugin;
use crate::interaction::inputmap::{InputActionUpdateSet, InputActionsPlugin};
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::rendering::{BackgroundPlugin, CameraPlugin};

/// Outcome of the startup config layering, logged once the log subscriber exists.
#[derive(Resource, Debug, Default, Clone)]
pub struct ConfigLoadReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .init_resource::<ConfigLoadReport>()
            .configure_sets(FixedUpdate, SimulationSet)
            .configure_sets(PreUpdate, IntentSet.after(InputActionUpdateSet))
            .configure_sets(Update, PresentationSet)
            .add_systems(PreStartup, log_config_report)
            .add_plugins((
                CameraPlugin,
                AssetLoadingPlugin,
                InputActionsPlugin,
                ChickenPlugin,
                BackgroundPlugin,
                DebugPlugin,
                ConfigHotReloadPlugin,
                AutoClosePlugin,
                #[cfg(feature = "debug")]
                InputMapHotReloadPlugin,
            ));
    }
}

fn log_config_report(report: Res<ConfigLoadReport>) {
    if report.used.is_empty() {
        info!("No config layers found; using built-in defaults");
    } else {
        info!("Config layers used: {}", report.used.join(", "));
    }
    for e in &report.errors {
        warn!("CONFIG issue: {e}");
    }
    for w in &report.warnings {
        warn!("CONFIG WARNING: {w}");
    }
}
