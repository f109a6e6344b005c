use bevy::prelude::*;

/// Marker component identifying the player-controlled chicken sprite.
#[derive(Component)]
pub struct Chicken;

/// Which way the chicken looks. The source art faces left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

impl Facing {
    /// Whether the sprite must be mirrored horizontally for this facing.
    pub fn flip_x(self) -> bool {
        matches!(self, Facing::Right)
    }
}

/// Simulation state of the chicken in screen space (origin top-left, y down, pixels per tick).
/// `x`/`y` address the top-left corner of the sprite box.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct ChickenBody {
    pub x: f32,
    pub y: f32,
    pub vy: f32,
    pub facing: Facing,
    /// Signed horizontal step applied during the last tick (wrap teleports excluded).
    pub last_dx: f32,
}

impl ChickenBody {
    pub fn on_ground(&self, ground_y: f32) -> bool {
        self.y >= ground_y
    }
}

/// One horizontally scrolling background layer. Children carry the tiled sprites.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ParallaxLayer {
    pub scroll_factor: f32,
    /// Current offset in `[0, width)`.
    pub offset: f32,
    pub width: f32,
}

/// Tile sprite belonging to a parallax layer (slot 0 = left copy, 1 = right copy).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallaxTile {
    pub slot: u8,
}
