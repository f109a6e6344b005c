use bevy::prelude::*;
use bevy::render::camera::ScalingMode;

use crate::core::config::GameConfig;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(Update, follow_config_viewport);
    }
}

/// Orthographic projection showing exactly `width x height` logical pixels whatever the
/// physical window size is.
pub fn logical_projection(width: f32, height: f32) -> Projection {
    Projection::from(OrthographicProjection {
        scaling_mode: ScalingMode::Fixed { width, height },
        ..OrthographicProjection::default_2d()
    })
}

fn setup_camera(mut commands: Commands, cfg: Res<GameConfig>) {
    commands.insert_resource(ClearColor(cfg.background.clear_color()));
    commands.spawn((Camera2d, logical_projection(cfg.window.width, cfg.window.height)));
}

fn follow_config_viewport(cfg: Res<GameConfig>, mut q_cam: Query<&mut Projection, With<Camera2d>>) {
    if !cfg.is_changed() {
        return;
    }
    for mut projection in &mut q_cam {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scaling_mode = ScalingMode::Fixed { width: cfg.window.width, height: cfg.window.height };
        }
    }
}
