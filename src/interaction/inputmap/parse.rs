use super::types::*;
use bevy::prelude::*;
use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Default)]
pub struct ParsedInputConfig {
    pub input_map: InputMap,
    pub errors: Vec<String>,
}

#[derive(Debug, serde::Deserialize)]
struct ActionDecl {
    description: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
struct DebugToml {
    bindings: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, serde::Deserialize)]
struct RootToml {
    actions: Option<BTreeMap<String, ActionDecl>>,
    bindings: Option<BTreeMap<String, Vec<String>>>,
    debug: Option<DebugToml>,
}

/// Parse an input TOML document. Errors are collected; whatever parsed cleanly is kept.
/// `[debug.bindings]` entries are merged only when `debug_layer` is set.
pub fn parse_input_toml(raw: &str, debug_layer: bool) -> ParsedInputConfig {
    let mut result = ParsedInputConfig::default();
    let root: RootToml = match toml::from_str(raw) {
        Ok(r) => r,
        Err(e) => {
            result.errors.push(format!("Top-level parse: {e}"));
            return result;
        }
    };

    let mut input_map = InputMap::default();
    for (name, decl) in root.actions.unwrap_or_default() {
        if !validate_action_name(&name) {
            result.errors.push(format!("Invalid action name '{name}': must be PascalCase"));
            continue;
        }
        let id = ActionId(input_map.actions.len() as u16);
        input_map.actions.push(ActionMeta {
            name: name.clone(),
            description: decl.description.unwrap_or_default(),
        });
        input_map.name_to_id.insert(name, id);
    }
    input_map.states = vec![ActionState::default(); input_map.actions.len()];

    let mut all_bindings: BTreeMap<String, Vec<String>> = root.bindings.unwrap_or_default();
    if debug_layer {
        if let Some(db) = root.debug.and_then(|d| d.bindings) {
            for (k, v) in db {
                all_bindings.entry(k).or_default().extend(v);
            }
        }
    }

    let mut seen_chords: HashMap<Chord, String> = HashMap::new();
    for (action_name, list) in all_bindings {
        let Some(aid) = input_map.name_to_id.get(&action_name).copied() else {
            result.errors.push(format!("Binding references unknown action '{action_name}'"));
            continue;
        };
        for spec in &list {
            match parse_chord(spec) {
                Ok(keys) => {
                    if let Some(owner) = seen_chords.get(&keys) {
                        result
                            .errors
                            .push(format!("[binding {action_name} '{spec}'] chord already bound to {owner}"));
                        continue;
                    }
                    seen_chords.insert(keys.clone(), action_name.clone());
                    input_map.bindings.push(Binding { action: aid, keys });
                }
                Err(err) => result.errors.push(format!("[binding {action_name} '{spec}'] {err}")),
            }
        }
    }

    result.input_map = input_map;
    result
}

fn validate_action_name(name: &str) -> bool {
    let Some(first) = name.chars().next() else {
        return false;
    };
    first.is_ascii_uppercase() && name.chars().all(|c| c.is_ascii_alphanumeric())
}

/// `"Key:ControlLeft+Key:KeyD"` -> sorted, de-duplicated key chord.
fn parse_chord(spec: &str) -> Result<Chord, String> {
    let mut keys = Chord::new();
    let mut seen = HashSet::new();
    for part in spec.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        let Some(name) = part.strip_prefix("Key:") else {
            return Err(format!("Unrecognized token '{part}' (expected Key:<name>)"));
        };
        let key = parse_keycode(name)?;
        if !seen.insert(key) {
            return Err(format!("Duplicate token in chord: {key:?}"));
        }
        keys.push(key);
    }
    if keys.is_empty() {
        return Err("Empty binding".into());
    }
    keys.sort_by_key(|k| format!("{k:?}"));
    Ok(keys)
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let kc = match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
        "ArrowRight" | "Right" => KeyCode::ArrowRight,
        "ArrowUp" | "Up" => KeyCode::ArrowUp,
        "ArrowDown" | "Down" => KeyCode::ArrowDown,
        "A" | "KeyA" => KeyCode::KeyA,
        "D" | "KeyD" => KeyCode::KeyD,
        "W" | "KeyW" => KeyCode::KeyW,
        "S" | "KeyS" => KeyCode::KeyS,
        "R" | "KeyR" => KeyCode::KeyR,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ControlLeft" => KeyCode::ControlLeft,
        "F1" => KeyCode::F1,
        "F2" => KeyCode::F2,
        other => return Err(format!("Unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(kc)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [actions]
        MoveLeft = { description = "Walk left" }
        MoveRight = { description = "Walk right" }
        Jump = {}
        ToggleOverlay = {}

        [bindings]
        MoveLeft = ["Key:ArrowLeft", "Key:A"]
        MoveRight = ["Key:ArrowRight", "Key:D"]
        Jump = ["Key:Space"]

        [debug.bindings]
        ToggleOverlay = ["Key:F1"]
    "#;

    #[test]
    fn parses_actions_and_bindings() {
        let parsed = parse_input_toml(SAMPLE, false);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        let map = parsed.input_map;
        assert_eq!(map.actions.len(), 4);
        assert_eq!(map.states.len(), 4);
        assert_eq!(map.bindings_for("MoveLeft").count(), 2);
        assert_eq!(map.bindings_for("ToggleOverlay").count(), 0);
        let jump = map.bindings_for("Jump").next().expect("jump binding");
        assert_eq!(jump.keys.as_slice(), &[KeyCode::Space]);
    }

    #[test]
    fn help_lines_show_keys_and_descriptions() {
        let help = parse_input_toml(SAMPLE, false).input_map.help_lines();
        assert_eq!(help.len(), 4);
        assert!(help.contains(&"MoveLeft [ArrowLeft, KeyA] Walk left".to_string()), "{help:?}");
        assert!(help.contains(&"ToggleOverlay [] ".to_string()), "{help:?}");
    }

    #[test]
    fn debug_layer_adds_bindings() {
        let parsed = parse_input_toml(SAMPLE, true);
        assert!(parsed.errors.is_empty(), "{:?}", parsed.errors);
        assert_eq!(parsed.input_map.bindings_for("ToggleOverlay").count(), 1);
    }

    #[test]
    fn collects_errors_without_aborting() {
        let raw = r#"
            [actions]
            jump = {}
            Jump = {}
            [bindings]
            Jump = ["Key:Space", "Key:Nope", "Mouse:Left", "Key:Space+Key:Space"]
            Fly = ["Key:W"]
        "#;
        let parsed = parse_input_toml(raw, false);
        let joined = parsed.errors.join(" | ");
        assert!(joined.contains("Invalid action name 'jump'"));
        assert!(joined.contains("Unsupported KeyCode 'Nope'"));
        assert!(joined.contains("Unrecognized token 'Mouse:Left'"));
        assert!(joined.contains("Duplicate token"));
        assert!(joined.contains("unknown action 'Fly'"));
        assert_eq!(parsed.input_map.bindings_for("Jump").count(), 1);
    }

    #[test]
    fn chords_are_order_independent() {
        let a = parse_chord("Key:ControlLeft+Key:KeyD").unwrap();
        let b = parse_chord("Key:D + Key:ControlLeft").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rejects_chord_bound_twice() {
        let raw = r#"
            [actions]
            MoveLeft = {}
            Jump = {}
            [bindings]
            MoveLeft = ["Key:Space"]
            Jump = ["Key:Space"]
        "#;
        let parsed = parse_input_toml(raw, false);
        assert_eq!(parsed.errors.len(), 1, "{:?}", parsed.errors);
        assert!(parsed.errors[0].contains("already bound to"));
    }

    #[test]
    fn malformed_document_reports_top_level_error() {
        let parsed = parse_input_toml("[actions", false);
        assert!(parsed.errors[0].starts_with("Top-level parse"));
        assert!(parsed.input_map.actions.is_empty());
    }
}
