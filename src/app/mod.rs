pub mod assets;
pub mod game;
pub mod state;
