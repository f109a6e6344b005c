pub mod config;

pub use config::{
    BackgroundConfig, ChickenConfig, GameConfig, ParallaxLayerConfig, PhysicsConfig, WindowConfig,
    DEFAULT_CONFIG_LAYERS, OPTIONAL_CONFIG_LAYERS,
};
