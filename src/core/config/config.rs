use bevy::prelude::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config layers, later entries override earlier ones.
pub const DEFAULT_CONFIG_LAYERS: [&str; 2] = ["assets/config/game.ron", "assets/config/game.local.ron"];

/// Default layers that may be absent without being reported.
pub const OPTIONAL_CONFIG_LAYERS: [&str; 1] = ["assets/config/game.local.ron"];

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    /// Automatically close the app after this many seconds. 0.0 (or omitted) = run indefinitely.
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            title: "Chicken Game".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ChickenConfig {
    /// Asset path (relative to `assets/`). The art is expected to face left.
    pub image: String,
    /// Edge length of the square sprite box in logical pixels.
    pub size: f32,
    /// Horizontal step per tick while a move key is held.
    pub walk_speed: f32,
    pub start_x: f32,
}
impl Default for ChickenConfig {
    fn default() -> Self {
        Self {
            image: "chicken.png".into(),
            size: 50.0,
            walk_speed: 2.0,
            start_x: 0.0,
        }
    }
}

/// Per-tick physics tuning. Velocities are in pixels per tick, screen space (y down).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub jump_velocity: f32,
    /// Allow starting a new jump while airborne.
    pub air_jump: bool,
    pub tick_hz: f64,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.2,
            jump_velocity: 4.0,
            air_jump: true,
            tick_hz: 60.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParallaxLayerConfig {
    pub image: String,
    /// Fraction of the chicken's horizontal step the layer scrolls by (opposite direction).
    pub scroll_factor: f32,
    pub z: f32,
}
impl Default for ParallaxLayerConfig {
    fn default() -> Self {
        Self {
            image: "background.png".into(),
            scroll_factor: 0.5,
            z: -10.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BackgroundConfig {
    pub clear_color: (f32, f32, f32),
    pub layers: Vec<ParallaxLayerConfig>,
}
impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            clear_color: (1.0, 1.0, 1.0),
            layers: vec![ParallaxLayerConfig::default()],
        }
    }
}

impl BackgroundConfig {
    pub fn clear_color(&self) -> Color {
        let (r, g, b) = self.clear_color;
        Color::srgb(r, g, b)
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub chicken: ChickenConfig,
    pub physics: PhysicsConfig,
    pub background: BackgroundConfig,
}

impl GameConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, String> {
        let data = fs::read_to_string(&path).map_err(|e| format!("read config: {e}"))?;
        ron::from_str(&data).map_err(|e| format!("parse RON: {e}"))
    }

    pub fn load_or_default(path: impl AsRef<Path>) -> (Self, Option<String>) {
        match Self::load_from_file(&path) {
            Ok(cfg) => (cfg, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }

    /// Load multiple config layers, later files overriding earlier ones (deep merge on maps).
    /// Missing, unreadable or unparseable layers are reported and skipped.
    /// Returns (config, list_of_layer_paths_used, list_of_errors).
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        Self::load_layered_with_optional(paths, &[])
    }

    /// Like [`GameConfig::load_layered`], but a layer listed in `optional` that does not exist
    /// is skipped without an error.
    pub fn load_layered_with_optional<P, I>(paths: I, optional: &[PathBuf]) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();

        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        let mut incoming = Some(v);
                        for (ek, ev) in bm.iter_mut() {
                            if *ek == k {
                                if let Some(val) = incoming.take() {
                                    merge_value(ev, val);
                                }
                                break;
                            }
                        }
                        if let Some(val) = incoming {
                            bm.insert(k, val);
                        }
                    }
                }
                (b, o) => *b = o,
            }
        }

        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.to_string_lossy().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    if !optional.iter().any(|o| o.as_path() == path_ref) {
                        errors.push(format!("{}: not found", path_ref.display()));
                    }
                }
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }

        let Some(val) = merged else {
            return (GameConfig::default(), used, errors);
        };
        match val.into_rust::<GameConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!("failed to deserialize merged config; using defaults: {e}"));
                (GameConfig::default(), used, errors)
            }
        }
    }

    /// Ground level: the largest `y` (screen space, top of sprite box) the chicken may rest at.
    pub fn ground_y(&self) -> f32 {
        self.window.height - self.chicken.size
    }

    /// Validate the configuration returning a list of human‑readable warning strings.
    /// These are suspicious values, not hard errors. Log each with `warn!`.
    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        let win = &self.window;
        if win.width <= 0.0 || win.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if win.auto_close < 0.0 {
            w.push(format!("window.autoClose {} negative -> treated as disabled (should be >= 0)", win.auto_close));
        } else if win.auto_close > 0.0 && win.auto_close < 0.01 {
            w.push(format!("window.autoClose {} very small; closes almost immediately", win.auto_close));
        }

        let ch = &self.chicken;
        if ch.image.trim().is_empty() {
            w.push("chicken.image is empty".into());
        }
        if ch.size <= 0.0 {
            w.push(format!("chicken.size {} must be > 0", ch.size));
        } else if ch.size >= win.height || ch.size >= win.width {
            w.push(format!(
                "chicken.size {} does not fit a {}x{} window",
                ch.size, win.width, win.height
            ));
        }
        if ch.walk_speed <= 0.0 {
            w.push(format!("chicken.walk_speed {} must be > 0; chicken cannot move", ch.walk_speed));
        } else if ch.walk_speed > win.width {
            w.push(format!(
                "chicken.walk_speed {} exceeds window width; wrap-around will skip the screen",
                ch.walk_speed
            ));
        }
        if ch.start_x < -ch.size || ch.start_x > win.width {
            w.push(format!("chicken.start_x {} outside -size..=width", ch.start_x));
        }

        let ph = &self.physics;
        if ph.gravity <= 0.0 {
            w.push(format!("physics.gravity {} must be > 0 (screen space, y down); chicken never lands", ph.gravity));
        }
        if ph.jump_velocity <= ph.gravity {
            w.push(format!(
                "physics.jump_velocity {} not above gravity {}; jumps cannot leave the ground",
                ph.jump_velocity, ph.gravity
            ));
        }
        if !(1.0..=1000.0).contains(&ph.tick_hz) {
            w.push(format!("physics.tick_hz {} outside 1..=1000", ph.tick_hz));
        }

        let (r, g, b) = self.background.clear_color;
        if [r, g, b].iter().any(|c| !(0.0..=1.0).contains(c)) {
            w.push(format!("background.clear_color ({r}, {g}, {b}) outside 0..=1"));
        }
        for (i, layer) in self.background.layers.iter().enumerate() {
            if layer.image.trim().is_empty() {
                w.push(format!("background.layers[{i}].image is empty"));
            }
            if layer.scroll_factor < 0.0 {
                w.push(format!(
                    "background.layers[{i}].scroll_factor {} negative -> scrolls with the chicken",
                    layer.scroll_factor
                ));
            }
        }
        w
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parse_sample_config() {
        let sample = r#"(
            window: (width: 800.0, height: 600.0, title: "Test"),
            chicken: (image: "hen.png", size: 40.0, walk_speed: 3.0),
            physics: (gravity: 0.25, jump_velocity: 5.0, air_jump: false, tick_hz: 120.0),
            background: (
                clear_color: (0.9, 0.95, 1.0),
                layers: [
                    (image: "hills.png", scroll_factor: 0.25, z: -20.0),
                    (image: "trees.png", scroll_factor: 0.6, z: -10.0),
                ],
            ),
        )"#;
        let mut file = tempfile::NamedTempFile::new().expect("tmp file");
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert_eq!(cfg.window.width, 800.0);
        assert_eq!(cfg.chicken.image, "hen.png");
        assert!(!cfg.physics.air_jump);
        assert_eq!(cfg.background.layers.len(), 2);
        assert_eq!(cfg.background.layers[1].image, "trees.png");
        assert_eq!(cfg.ground_y(), 560.0);
        assert!(cfg.validate().is_empty(), "unexpected warnings: {:?}", cfg.validate());
    }

    #[test]
    fn defaults_match_classic_demo() {
        let cfg = GameConfig::default();
        assert_eq!((cfg.window.width, cfg.window.height), (640.0, 480.0));
        assert_eq!(cfg.window.title, "Chicken Game");
        assert_eq!(cfg.chicken.size, 50.0);
        assert_eq!(cfg.ground_y(), 430.0);
        assert!(cfg.validate().is_empty());
    }

    #[test]
    fn validate_detects_warnings() {
        let bad = GameConfig {
            window: WindowConfig {
                width: -100.0,
                height: 0.0,
                title: "Bad".into(),
                auto_close: -1.0,
            },
            chicken: ChickenConfig {
                image: " ".into(),
                size: 0.0,
                walk_speed: 0.0,
                start_x: 0.0,
            },
            physics: PhysicsConfig {
                gravity: -0.2,
                jump_velocity: -1.0,
                air_jump: true,
                tick_hz: 0.0,
            },
            background: BackgroundConfig {
                clear_color: (2.0, 0.0, 0.0),
                layers: vec![ParallaxLayerConfig {
                    image: String::new(),
                    scroll_factor: -0.5,
                    z: 0.0,
                }],
            },
        };
        let warnings = bad.validate();
        let joined = warnings.join(" | ");
        assert!(joined.contains("window dimensions must be > 0"));
        assert!(joined.contains("window.autoClose"));
        assert!(joined.contains("chicken.image is empty"));
        assert!(joined.contains("chicken.size 0 must be > 0"));
        assert!(joined.contains("chicken.walk_speed"));
        assert!(joined.contains("physics.gravity"));
        assert!(joined.contains("physics.jump_velocity"));
        assert!(joined.contains("physics.tick_hz"));
        assert!(joined.contains("background.clear_color"));
        assert!(joined.contains("background.layers[0].image is empty"));
        assert!(joined.contains("background.layers[0].scroll_factor"));
        assert!(warnings.len() >= 11, "expected many warnings, got {}: {joined}", warnings.len());
    }

    #[test]
    fn load_or_default_missing_file() {
        let (cfg, err) = GameConfig::load_or_default("this/file/does/not/exist.ron");
        assert!(err.is_some());
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn layered_merge_overrides() {
        let base = r"(
            window: (width: 900.0),
            physics: (gravity: 0.3),
        )";
        let override_one = r#"(
            window: (title: "Custom Title"),
            physics: (jump_velocity: 6.0),
            background: (layers: []),
        )"#;
        let mut f1 = tempfile::NamedTempFile::new().unwrap();
        let mut f2 = tempfile::NamedTempFile::new().unwrap();
        f1.write_all(base.as_bytes()).unwrap();
        f2.write_all(override_one.as_bytes()).unwrap();
        let (cfg, used, errors) = GameConfig::load_layered([f1.path(), f2.path()]);
        assert!(errors.is_empty(), "unexpected errors: {errors:?}");
        assert_eq!(used.len(), 2);
        assert_eq!(cfg.window.width, 900.0);
        assert_eq!(cfg.window.title, "Custom Title");
        assert_eq!(cfg.window.height, WindowConfig::default().height);
        assert_eq!(cfg.physics.gravity, 0.3);
        assert_eq!(cfg.physics.jump_velocity, 6.0);
        assert!(cfg.background.layers.is_empty());
    }

    #[test]
    fn layered_skips_missing_and_broken_layers() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        good.write_all(br"(chicken: (size: 32.0))").unwrap();
        broken.write_all(b"(chicken: (size: ").unwrap();
        let missing = std::env::temp_dir().join("chicken_run_missing_layer.ron");
        let (cfg, used, errors) = GameConfig::load_layered([good.path(), broken.path(), missing.as_path()]);
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 2, "{errors:?}");
        assert!(errors[0].contains("parse error"));
        assert!(errors[1].ends_with("not found"), "{errors:?}");
        assert_eq!(cfg.chicken.size, 32.0);
    }

    #[test]
    fn missing_only_layer_is_reported() {
        let missing = std::env::temp_dir().join("chicken_run_missing_only_layer.ron");
        let (cfg, used, errors) = GameConfig::load_layered([missing.as_path()]);
        assert!(used.is_empty());
        assert_eq!(errors, vec![format!("{}: not found", missing.display())]);
        assert_eq!(cfg, GameConfig::default());
    }

    #[test]
    fn optional_layer_may_be_absent() {
        let mut good = tempfile::NamedTempFile::new().unwrap();
        good.write_all(br"(physics: (gravity: 0.5))").unwrap();
        let local = std::env::temp_dir().join("chicken_run_absent_local.ron");
        let other = std::env::temp_dir().join("chicken_run_absent_other.ron");
        let (cfg, used, errors) = GameConfig::load_layered_with_optional(
            [good.path(), local.as_path(), other.as_path()],
            &[local.clone()],
        );
        assert_eq!(used.len(), 1);
        assert_eq!(errors.len(), 1, "only the non-optional layer is reported: {errors:?}");
        assert!(errors[0].contains("chicken_run_absent_other.ron"));
        assert_eq!(cfg.physics.gravity, 0.5);
    }

    #[test]
    fn parse_autoclose_and_validate() {
        let sample = r"(window: (autoClose: 3.25))";
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(sample.as_bytes()).unwrap();
        let cfg = GameConfig::load_from_file(file.path()).expect("parse config");
        assert!((cfg.window.auto_close - 3.25).abs() < 1e-6);

        let tiny = GameConfig {
            window: WindowConfig { auto_close: 0.001, ..Default::default() },
            ..Default::default()
        };
        assert!(tiny.validate().iter().any(|w| w.contains("very small")));
    }
}
