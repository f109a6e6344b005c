use std::path::PathBuf;

use bevy::prelude::*;
use clap::Parser;

use chicken_run::interaction::session::config_hot_reload::ConfigReloadSettings;
use chicken_run::{ConfigLoadReport, GameConfig, GamePlugin, DEFAULT_CONFIG_LAYERS, OPTIONAL_CONFIG_LAYERS};

#[derive(Parser, Debug)]
#[command(about = "A chicken that walks, wraps around and jumps over a scrolling background", version)]
struct Args {
    /// RON config layer; repeat to stack overrides. Defaults to assets/config/game.ron + game.local.ron.
    #[arg(long = "config")]
    config: Vec<PathBuf>,
    /// Exit after this many seconds (overrides window.autoClose).
    #[arg(long)]
    auto_close: Option<f32>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(secs) = args.auto_close {
        if !secs.is_finite() || secs < 0.0 {
            anyhow::bail!("--auto-close must be a non-negative number of seconds (got {secs})");
        }
    }

    let explicit = !args.config.is_empty();
    let layers: Vec<PathBuf> = if explicit {
        args.config.clone()
    } else {
        DEFAULT_CONFIG_LAYERS.iter().map(PathBuf::from).collect()
    };
    // Missing requested layers are reported; only the default local override may be absent.
    let optional: Vec<PathBuf> = if explicit {
        Vec::new()
    } else {
        OPTIONAL_CONFIG_LAYERS.iter().map(PathBuf::from).collect()
    };
    let (mut cfg, used, errors) = GameConfig::load_layered_with_optional(&layers, &optional);
    if explicit && used.is_empty() {
        anyhow::bail!("none of the requested config layers could be loaded: {}", errors.join("; "));
    }
    if let Some(secs) = args.auto_close {
        cfg.window.auto_close = secs;
    }
    let report = ConfigLoadReport { used, errors, warnings: cfg.validate() };

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .insert_resource(ConfigReloadSettings { paths: layers, optional, ..default() })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: cfg.window.title.clone(),
                        resolution: (cfg.window.width, cfg.window.height).into(),
                        resizable: false,
                        ..default()
                    }),
                    ..default()
                })
                .set(ImagePlugin::default_nearest()),
        )
        .add_plugins(GamePlugin)
        .run();

    if let AppExit::Error(code) = exit {
        anyhow::bail!("game exited with error code {code}");
    }
    Ok(())
}
