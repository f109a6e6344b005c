pub mod parse;
pub mod plugin;
pub mod systems;
pub mod types;
#[cfg(feature = "debug")]
pub mod hot_reload;

pub use plugin::{InputActionUpdateSet, InputActionsPlugin};
pub use types::InputMap;
