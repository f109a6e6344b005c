//! Kinematics of the chicken, kept free of ECS types so it can be reasoned about (and tested) in isolation.
//!
//! Everything here works in screen space: origin at the top-left of the logical viewport,
//! `y` grows downward, velocities are in pixels per tick.
use bevy::math::Vec2;

use crate::core::components::{ChickenBody, Facing};
use crate::core::config::GameConfig;

/// Logical viewport plus the size of the square sprite box moving inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
    pub sprite_size: f32,
}

impl Playfield {
    pub fn from_config(cfg: &GameConfig) -> Self {
        Self {
            width: cfg.window.width,
            height: cfg.window.height,
            sprite_size: cfg.chicken.size,
        }
    }

    pub fn ground_y(&self) -> f32 {
        self.height - self.sprite_size
    }

    /// Map the top-left corner of a `size` box to the world-space center Bevy draws at
    /// (origin at viewport center, y up).
    pub fn box_center_world(&self, x: f32, y: f32, size: Vec2) -> Vec2 {
        Vec2::new(
            x - self.width * 0.5 + size.x * 0.5,
            self.height * 0.5 - y - size.y * 0.5,
        )
    }
}

/// Walk one step left, reappearing at the right edge once fully off-screen.
pub fn step_left(x: f32, speed: f32, field: &Playfield) -> f32 {
    let x = x - speed;
    if x < -field.sprite_size {
        field.width
    } else {
        x
    }
}

/// Walk one step right, reappearing left of the viewport once past the right edge.
pub fn step_right(x: f32, speed: f32, field: &Playfield) -> f32 {
    let x = x + speed;
    if x > field.width {
        -field.sprite_size
    } else {
        x
    }
}

/// One explicit Euler step under gravity with ground clamping. Returns the new `(y, vy)`.
pub fn integrate_vertical(y: f32, vy: f32, gravity: f32, ground_y: f32) -> (f32, f32) {
    let vy = vy + gravity;
    let y = y + vy;
    if y > ground_y {
        (ground_y, 0.0)
    } else {
        (y, vy)
    }
}

/// Held movement keys for one tick.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WalkInput {
    pub left: bool,
    pub right: bool,
}

impl ChickenBody {
    /// Body at rest on the ground, at the configured start column.
    pub fn spawn(cfg: &GameConfig) -> Self {
        Self {
            x: cfg.chicken.start_x,
            y: cfg.ground_y(),
            ..Default::default()
        }
    }

    /// Apply held movement. Left is processed before right, so holding both nets zero
    /// movement while leaving the chicken facing right.
    pub fn walk(&mut self, input: WalkInput, speed: f32, field: &Playfield) {
        self.last_dx = 0.0;
        if input.left {
            self.x = step_left(self.x, speed, field);
            self.last_dx -= speed;
            self.facing = Facing::Left;
        }
        if input.right {
            self.x = step_right(self.x, speed, field);
            self.last_dx += speed;
            self.facing = Facing::Right;
        }
    }

    /// Start a jump. Returns false when jumping is not allowed right now.
    pub fn jump(&mut self, velocity: f32, air_jump: bool, ground_y: f32) -> bool {
        if !air_jump && !self.on_ground(ground_y) {
            return false;
        }
        self.vy = -velocity;
        true
    }

    pub fn fall(&mut self, gravity: f32, ground_y: f32) {
        (self.y, self.vy) = integrate_vertical(self.y, self.vy, gravity, ground_y);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field() -> Playfield {
        Playfield { width: 640.0, height: 480.0, sprite_size: 50.0 }
    }

    #[test]
    fn left_wraps_to_right_edge_only_when_fully_off_screen() {
        let f = field();
        assert_eq!(step_left(-48.0, 2.0, &f), -50.0);
        assert_eq!(step_left(-49.0, 2.0, &f), 640.0);
    }

    #[test]
    fn right_wraps_to_left_of_viewport() {
        let f = field();
        assert_eq!(step_right(638.0, 2.0, &f), 640.0);
        assert_eq!(step_right(639.0, 2.0, &f), -50.0);
    }

    #[test]
    fn x_stays_in_bounds_over_many_steps() {
        let f = field();
        let mut l = 0.0;
        let mut r = 0.0;
        for _ in 0..2000 {
            l = step_left(l, 3.0, &f);
            r = step_right(r, 3.0, &f);
            assert!((-f.sprite_size..=f.width).contains(&l), "left walk escaped: {l}");
            assert!((-f.sprite_size..=f.width).contains(&r), "right walk escaped: {r}");
        }
    }

    #[test]
    fn gravity_accumulates_then_clamps_to_ground() {
        let (y, vy) = integrate_vertical(100.0, 0.0, 0.2, 430.0);
        assert!((vy - 0.2).abs() < 1e-6);
        assert!((y - 100.2).abs() < 1e-4);
        let (y, vy) = integrate_vertical(429.9, 1.0, 0.2, 430.0);
        assert_eq!((y, vy), (430.0, 0.0));
    }

    #[test]
    fn jump_arc_returns_to_ground() {
        let cfg = GameConfig::default();
        let ground = cfg.ground_y();
        let mut body = ChickenBody::spawn(&cfg);
        assert!(body.jump(cfg.physics.jump_velocity, true, ground));
        let mut apex = body.y;
        let mut ticks = 0;
        loop {
            body.fall(cfg.physics.gravity, ground);
            ticks += 1;
            apex = apex.min(body.y);
            assert!(body.y <= ground);
            if body.y == ground && body.vy == 0.0 {
                break;
            }
            assert!(ticks < 1000, "chicken never landed");
        }
        // v0 = 4, g = 0.2: about 20 ticks up, 20 down, peak 38px above ground.
        assert!((38..=42).contains(&ticks), "unexpected airtime {ticks}");
        assert!(ground - apex > 30.0 && ground - apex < 45.0, "apex {apex}");
        assert_eq!(body.vy, 0.0);
    }

    #[test]
    fn grounded_only_jump_refuses_midair() {
        let cfg = GameConfig::default();
        let ground = cfg.ground_y();
        let mut body = ChickenBody::spawn(&cfg);
        assert!(body.jump(4.0, false, ground));
        body.fall(0.2, ground);
        let vy = body.vy;
        assert!(!body.jump(4.0, false, ground));
        assert_eq!(body.vy, vy);
        assert!(body.jump(4.0, true, ground));
        assert_eq!(body.vy, -4.0);
    }

    #[test]
    fn both_keys_cancel_but_face_right() {
        let f = field();
        let mut body = ChickenBody { x: 100.0, ..Default::default() };
        body.walk(WalkInput { left: true, right: true }, 2.0, &f);
        assert_eq!(body.x, 100.0);
        assert_eq!(body.last_dx, 0.0);
        assert_eq!(body.facing, Facing::Right);
        body.walk(WalkInput { left: true, right: false }, 2.0, &f);
        assert_eq!(body.x, 98.0);
        assert_eq!(body.last_dx, -2.0);
        assert_eq!(body.facing, Facing::Left);
    }

    #[test]
    fn idle_walk_keeps_facing_and_clears_step() {
        let f = field();
        let mut body = ChickenBody { x: 10.0, facing: Facing::Right, last_dx: 2.0, ..Default::default() };
        body.walk(WalkInput::default(), 2.0, &f);
        assert_eq!(body.facing, Facing::Right);
        assert_eq!(body.last_dx, 0.0);
    }

    #[test]
    fn screen_box_maps_to_world_center() {
        let f = field();
        let size = Vec2::splat(50.0);
        // Resting at the bottom-left corner.
        assert_eq!(f.box_center_world(0.0, 430.0, size), Vec2::new(-295.0, -215.0));
        // Full-screen tile at the origin sits at the world origin.
        assert_eq!(f.box_center_world(0.0, 0.0, Vec2::new(640.0, 480.0)), Vec2::ZERO);
    }
}
