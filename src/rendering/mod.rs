pub mod background;
pub mod camera;

pub use background::BackgroundPlugin;
pub use camera::CameraPlugin;
