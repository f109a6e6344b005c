pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod rendering;

// Curated re-exports
pub use app::game::{ConfigLoadReport, GamePlugin};
pub use app::state::AppState;
pub use core::components::{Chicken, ChickenBody, Facing, ParallaxLayer};
pub use core::config::{GameConfig, WindowConfig, DEFAULT_CONFIG_LAYERS, OPTIONAL_CONFIG_LAYERS};
