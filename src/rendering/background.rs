//! Horizontally scrolling parallax layers drawn behind the chicken.
//!
//! Each layer stretches its image over the whole viewport and keeps two copies side by side,
//! so shifting the pair by `offset` (wrapped into `[0, width)`) always covers the screen.
use bevy::prelude::*;

use crate::app::assets::GameImages;
use crate::app::state::AppState;
use crate::core::components::{Chicken, ChickenBody, ParallaxLayer, ParallaxTile};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{PresentationSet, SimulationSet};
use crate::gameplay::motion::Playfield;

pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::Playing), spawn_parallax_layers)
            .add_systems(
                FixedUpdate,
                scroll_parallax_layers
                    .after(SimulationSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, sync_parallax_layers.in_set(PresentationSet));
    }
}

impl ParallaxLayer {
    /// Scroll against a horizontal step of the chicken.
    pub fn scroll(&mut self, dx: f32) {
        if self.width <= 0.0 {
            return;
        }
        self.offset = wrap_offset(self.offset - dx * self.scroll_factor, self.width);
    }

    /// Adopt a new layer width, keeping the offset inside it.
    pub fn resize(&mut self, width: f32) {
        self.width = width;
        self.offset = if width > 0.0 { wrap_offset(self.offset, width) } else { 0.0 };
    }
}

fn wrap_offset(offset: f32, width: f32) -> f32 {
    let wrapped = offset.rem_euclid(width);
    // rem_euclid rounds tiny negative inputs up to exactly `width`.
    if wrapped >= width {
        0.0
    } else {
        wrapped
    }
}

fn spawn_parallax_layers(mut commands: Commands, cfg: Res<GameConfig>, images: Res<GameImages>) {
    let field = Playfield::from_config(&cfg);
    let tile_size = Vec2::new(field.width, field.height);
    for (layer_cfg, image) in cfg.background.layers.iter().zip(images.layers.iter()) {
        let layer = ParallaxLayer { scroll_factor: layer_cfg.scroll_factor, offset: 0.0, width: field.width };
        let origin = field.box_center_world(layer.offset - layer.width, 0.0, tile_size);
        commands
            .spawn((layer, Transform::from_translation(origin.extend(layer_cfg.z)), Visibility::default()))
            .with_children(|parent| {
                for slot in 0..2u8 {
                    parent.spawn((
                        ParallaxTile { slot },
                        Sprite {
                            image: image.clone(),
                            custom_size: Some(tile_size),
                            ..default()
                        },
                        Transform::from_xyz(f32::from(slot) * tile_size.x, 0.0, 0.0),
                    ));
                }
            });
    }
    info!("Spawned {} parallax layers", cfg.background.layers.len());
}

pub fn scroll_parallax_layers(
    q_chicken: Query<&ChickenBody, With<Chicken>>,
    mut q_layers: Query<&mut ParallaxLayer>,
) {
    let Ok(body) = q_chicken.single() else {
        return;
    };
    if body.last_dx == 0.0 {
        return;
    }
    for mut layer in &mut q_layers {
        layer.scroll(body.last_dx);
    }
}

/// Place each layer's tile pair at `offset - width` (left copy) in world space.
/// A config change re-fits layers and tiles to the current viewport.
pub fn sync_parallax_layers(
    cfg: Res<GameConfig>,
    mut q_layers: Query<(&mut ParallaxLayer, &mut Transform, Option<&Children>)>,
    mut q_tiles: Query<(&ParallaxTile, &mut Sprite, &mut Transform), Without<ParallaxLayer>>,
) {
    let field = Playfield::from_config(&cfg);
    let tile_size = Vec2::new(field.width, field.height);
    for (mut layer, mut transform, children) in &mut q_layers {
        if cfg.is_changed() {
            if layer.width != field.width {
                layer.resize(field.width);
            }
            for &child in children.map_or(&[][..], |c| &c[..]) {
                let Ok((tile, mut sprite, mut tile_transform)) = q_tiles.get_mut(child) else {
                    continue;
                };
                if sprite.custom_size != Some(tile_size) {
                    sprite.custom_size = Some(tile_size);
                }
                tile_transform.translation.x = f32::from(tile.slot) * tile_size.x;
            }
        }
        let origin = field.box_center_world(layer.offset - layer.width, 0.0, tile_size);
        transform.translation.x = origin.x;
        transform.translation.y = origin.y;
    }
}
