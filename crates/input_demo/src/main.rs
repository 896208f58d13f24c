// crates/input_demo/src/main.rs
//! Drives the resolver through a scripted run of frames and logs every edge.

use glam::{Affine2, Vec2};
use input_core::{ButtonBinding, FrameSnapshot, InputConfig, InputResolver};
use input_shared::{GamepadAxis, GamepadButton, GamepadId, KeyCode, Sign};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const PAD: GamepadId = GamepadId(0);

fn script() -> Vec<FrameSnapshot> {
    vec![
        FrameSnapshot::focused(),
        FrameSnapshot::focused(),
        FrameSnapshot::focused().with_key(KeyCode::Space),
        FrameSnapshot::focused().with_key(KeyCode::Space).with_repeat(KeyCode::Space),
        FrameSnapshot::focused().with_button(PAD, GamepadButton::A),
        FrameSnapshot::focused().with_axis(PAD, GamepadAxis::LeftX, 0.6),
        FrameSnapshot::focused().with_scroll(0.0, 1.0),
        FrameSnapshot::default(),
    ]
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut input = match InputResolver::from_config(InputConfig::movement_defaults()) {
        Ok(input) => input,
        Err(err) => {
            error!(%err, "invalid input configuration");
            return;
        }
    };

    let extra = [
        ("Jump", ButtonBinding::with_buttons(KeyCode::Space, GamepadButton::A)),
        ("ZoomIn", ButtonBinding::joyless(KeyCode::Equal).add_scroll(Sign::Positive)),
    ];
    for (name, binding) in extra {
        if let Err(err) = input.register_binding(name, binding) {
            error!(%err, "failed to register binding");
            return;
        }
    }

    // World space is scaled 2x and offset in the window.
    let view = Affine2::from_scale_angle_translation(Vec2::splat(2.0), 0.0, Vec2::new(64.0, 32.0));

    let names = ["MoveUp", "MoveDown", "MoveLeft", "MoveRight", "Jump", "ZoomIn"];
    for (frame, snapshot) in script().iter().enumerate() {
        input.resolve(snapshot, view);
        for name in names {
            let binding = input.get(name);
            if binding.just_pressed() {
                info!(frame, name, mode = %binding.last_mode(), label = %input.first_display_label(name), "pressed");
            } else if binding.just_released() {
                info!(frame, name, "released");
            } else if binding.repeated() {
                info!(frame, name, "repeat");
            }
        }
        if let Some(hit) = input.any_just_pressed(false) {
            info!(frame, action = hit.action, mode = %hit.mode, "first press this frame");
        }
        info!(frame, focus = ?input.focus_state(), move_x = input.axis("MoveX"), "frame done");
    }
}
