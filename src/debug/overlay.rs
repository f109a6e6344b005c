#[cfg(feature = "debug")]
use bevy::prelude::*;
#[cfg(feature = "debug")]
use super::state::{DebugState, DebugStats};
#[cfg(feature = "debug")]
use crate::core::components::{Chicken, ChickenBody, ParallaxLayer};
#[cfg(feature = "debug")]
use crate::interaction::inputmap::InputMap;

#[cfg(feature = "debug")]
#[derive(Component)]
pub struct DebugOverlayText;

#[cfg(feature = "debug")]
pub fn debug_overlay_spawn(mut commands: Commands) {
    commands.spawn((
        Text::new(String::new()),
        TextFont { font_size: 14.0, ..Default::default() },
        TextColor(Color::srgb(0.1, 0.1, 0.1)),
        bevy::ui::Node {
            position_type: bevy::ui::PositionType::Absolute,
            top: Val::Px(4.0),
            left: Val::Px(6.0),
            ..Default::default()
        },
        DebugOverlayText,
    ));
}

#[cfg(feature = "debug")]
pub fn format_overlay(
    body: Option<&ChickenBody>,
    layer_offsets: &[f32],
    key_help: &[String],
    state: &DebugState,
    stats: &DebugStats,
) -> String {
    let mut out = format!("frame {}  {:.0} fps ({:.1} ms)", state.frame_counter, stats.fps, stats.frame_time_ms);
    match body {
        Some(b) => out.push_str(&format!(
            "\nx {:.1}  y {:.1}  vy {:.2}  facing {:?}",
            b.x, b.y, b.vy, b.facing
        )),
        None => out.push_str("\n(no chicken yet)"),
    }
    for (i, offset) in layer_offsets.iter().enumerate() {
        out.push_str(&format!("\nlayer {i} offset {offset:.1}"));
    }
    for line in key_help {
        out.push('\n');
        out.push_str(line);
    }
    out
}

#[cfg(feature = "debug")]
pub fn debug_overlay_update(
    state: Res<DebugState>,
    stats: Res<DebugStats>,
    q_chicken: Query<&ChickenBody, With<Chicken>>,
    q_layers: Query<&ParallaxLayer>,
    input_map: Option<Res<InputMap>>,
    mut q_text: Query<(&mut Text, &mut Visibility), With<DebugOverlayText>>,
) {
    let Ok((mut text, mut vis)) = q_text.single_mut() else {
        return;
    };
    vis.set_if_neq(if state.overlay_visible { Visibility::Inherited } else { Visibility::Hidden });
    if !state.overlay_visible {
        return;
    }
    let offsets: Vec<f32> = q_layers.iter().map(|l| l.offset).collect();
    let key_help = input_map.map(|m| m.help_lines()).unwrap_or_default();
    text.0 = format_overlay(q_chicken.single().ok(), &offsets, &key_help, &state, &stats);
}
