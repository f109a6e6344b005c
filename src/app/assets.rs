use bevy::asset::LoadState;
use bevy::prelude::*;

use super::state::AppState;
use crate::core::config::GameConfig;

/// Handles for every image the scene draws, requested once at startup.
#[derive(Resource, Debug, Clone)]
pub struct GameImages {
    pub chicken: Handle<Image>,
    pub layers: Vec<Handle<Image>>,
}

/// Aggregate progress over a set of image loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadProgress {
    Pending,
    Ready,
    /// Index of the first failed handle.
    Failed(usize),
}

pub fn load_progress<'a>(states: impl IntoIterator<Item = &'a LoadState>) -> LoadProgress {
    let mut pending = false;
    for (i, state) in states.into_iter().enumerate() {
        match state {
            LoadState::Failed(_) => return LoadProgress::Failed(i),
            LoadState::Loaded => {}
            _ => pending = true,
        }
    }
    if pending {
        LoadProgress::Pending
    } else {
        LoadProgress::Ready
    }
}

pub struct AssetLoadingPlugin;

impl Plugin for AssetLoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, request_images)
            .add_systems(Update, watch_image_loads.run_if(in_state(AppState::Loading)));
    }
}

fn request_images(mut commands: Commands, asset_server: Res<AssetServer>, cfg: Res<GameConfig>) {
    let chicken = asset_server.load(cfg.chicken.image.clone());
    let layers = cfg
        .background
        .layers
        .iter()
        .map(|layer| asset_server.load(layer.image.clone()))
        .collect::<Vec<Handle<Image>>>();
    info!("Requested {} images", layers.len() + 1);
    commands.insert_resource(GameImages { chicken, layers });
}

/// Move to `Playing` once everything is in; a failed load is fatal.
fn watch_image_loads(
    asset_server: Res<AssetServer>,
    images: Res<GameImages>,
    cfg: Res<GameConfig>,
    mut next_state: ResMut<NextState<AppState>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let handles: Vec<&Handle<Image>> = std::iter::once(&images.chicken).chain(images.layers.iter()).collect();
    let states: Vec<LoadState> = handles.iter().map(|h| asset_server.load_state(h.id())).collect();
    match load_progress(&states) {
        LoadProgress::Pending => {}
        LoadProgress::Ready => {
            info!("All {} images loaded", states.len());
            next_state.set(AppState::Playing);
        }
        LoadProgress::Failed(i) => {
            let (what, path) = if i == 0 {
                ("chicken".to_string(), cfg.chicken.image.as_str())
            } else {
                let path = cfg.background.layers.get(i - 1).map_or("?", |l| l.image.as_str());
                (format!("background layer {}", i - 1), path)
            };
            if let LoadState::Failed(err) = &states[i] {
                error!("Failed to load {what} image '{path}': {err}");
            }
            ev_exit.write(AppExit::error());
        }
    }
}
