use bevy::prelude::*;

use crate::app::assets::GameImages;
use crate::app::state::AppState;
use crate::core::components::{Chicken, ChickenBody};
use crate::core::config::GameConfig;
use crate::core::system::system_order::{IntentSet, PresentationSet, SimulationSet};
use crate::gameplay::motion::{Playfield, WalkInput};
use crate::interaction::inputmap::{InputActionUpdateSet, InputMap};

pub const ACTION_MOVE_LEFT: &str = "MoveLeft";
pub const ACTION_MOVE_RIGHT: &str = "MoveRight";
pub const ACTION_JUMP: &str = "Jump";

/// Chicken sprites draw above every background layer.
const CHICKEN_Z: f32 = 10.0;

/// Input latched between render frames and fixed ticks. Held keys are sampled,
/// a jump press is queued until the next tick consumes it.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ChickenIntent {
    pub walk: WalkInput,
    pub jump_queued: bool,
}

pub struct ChickenPlugin;

impl Plugin for ChickenPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChickenIntent>()
            .add_systems(OnEnter(AppState::Playing), spawn_chicken)
            .add_systems(Update, apply_tick_rate)
            // Latch before `RunFixedMainLoop` so this frame's ticks see this frame's keys.
            .add_systems(PreUpdate, read_chicken_intent.in_set(IntentSet).after(InputActionUpdateSet))
            .add_systems(
                FixedUpdate,
                simulate_chicken
                    .in_set(SimulationSet)
                    .run_if(in_state(AppState::Playing)),
            )
            .add_systems(Update, sync_chicken_sprite.in_set(PresentationSet));
    }
}

fn spawn_chicken(
    mut commands: Commands,
    cfg: Res<GameConfig>,
    images: Res<GameImages>,
    mut intent: ResMut<ChickenIntent>,
) {
    let body = ChickenBody::spawn(&cfg);
    let size = Vec2::splat(cfg.chicken.size);
    let center = Playfield::from_config(&cfg).box_center_world(body.x, body.y, size);
    *intent = ChickenIntent::default();
    commands.spawn((
        Chicken,
        body,
        Sprite {
            image: images.chicken.clone(),
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(CHICKEN_Z)),
    ));
    info!(x = body.x, y = body.y, "Chicken spawned on the ground");
}

/// Keep the fixed timestep in line with `physics.tick_hz` (including after a hot reload).
fn apply_tick_rate(cfg: Res<GameConfig>, mut fixed: ResMut<Time<Fixed>>) {
    if !cfg.is_changed() {
        return;
    }
    let hz = cfg.physics.tick_hz.clamp(1.0, 1000.0);
    fixed.set_timestep_hz(hz);
    info!("Simulation tick rate set to {hz} Hz");
}

pub fn read_chicken_intent(input: Res<InputMap>, mut intent: ResMut<ChickenIntent>) {
    intent.walk = WalkInput {
        left: input.pressed(ACTION_MOVE_LEFT),
        right: input.pressed(ACTION_MOVE_RIGHT),
    };
    if input.just_pressed(ACTION_JUMP) {
        intent.jump_queued = true;
    }
}

/// One tick: walk, then jump, then gravity.
pub fn simulate_chicken(
    cfg: Res<GameConfig>,
    mut intent: ResMut<ChickenIntent>,
    mut q_chicken: Query<&mut ChickenBody, With<Chicken>>,
) {
    let field = Playfield::from_config(&cfg);
    let ground = field.ground_y();
    let jump = std::mem::take(&mut intent.jump_queued);
    for mut body in &mut q_chicken {
        body.walk(intent.walk, cfg.chicken.walk_speed, &field);
        if jump && !body.jump(cfg.physics.jump_velocity, cfg.physics.air_jump, ground) {
            debug!("Jump ignored while airborne");
        }
        body.fall(cfg.physics.gravity, ground);
    }
}

/// Copy simulation state into the drawn sprite: position, size and horizontal mirror.
pub fn sync_chicken_sprite(
    cfg: Res<GameConfig>,
    mut q_chicken: Query<(&ChickenBody, &mut Transform, &mut Sprite), With<Chicken>>,
) {
    let field = Playfield::from_config(&cfg);
    let size = Vec2::splat(cfg.chicken.size);
    for (body, mut transform, mut sprite) in &mut q_chicken {
        let center = field.box_center_world(body.x, body.y, size);
        transform.translation.x = center.x;
        transform.translation.y = center.y;
        sprite.flip_x = body.facing.flip_x();
        if sprite.custom_size != Some(size) {
            sprite.custom_size = Some(size);
        }
    }
}
