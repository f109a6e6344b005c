pub mod chicken;
pub mod motion;

pub use chicken::{ChickenIntent, ChickenPlugin};
