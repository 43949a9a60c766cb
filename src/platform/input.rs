//! Input mapping
//!
//! DOM handlers translate raw events into [`Command`]s and apply them to the
//! pending [`TickInput`]. Handlers never touch the simulation directly; the
//! next frame picks the intents up.

use crate::sim::TickInput;

/// A player intent decoded from a key, pointer or button event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Jump,
    /// Duck pressed (`true`) or released (`false`)
    Duck(bool),
    /// Enter: restart, but only once the run is over
    Acknowledge,
    TogglePause,
    Restart,
    ToggleAutopilot,
}

impl Command {
    /// Record this intent for the next frame
    pub fn apply(self, input: &mut TickInput) {
        match self {
            Command::Jump => input.jump = true,
            Command::Duck(held) => input.duck = held,
            Command::Acknowledge => input.acknowledge = true,
            Command::TogglePause => input.pause = true,
            Command::Restart => input.restart = true,
            Command::ToggleAutopilot => {
                input.autopilot = !input.autopilot;
                log::info!("Autopilot: {}", input.autopilot);
            }
        }
    }
}

/// Map a `keydown` event's `key` value
pub fn key_down(key: &str) -> Option<Command> {
    match key {
        "ArrowUp" | " " | "Spacebar" => Some(Command::Jump),
        "ArrowDown" => Some(Command::Duck(true)),
        "Enter" => Some(Command::Acknowledge),
        "Escape" | "p" | "P" => Some(Command::TogglePause),
        "i" | "I" => Some(Command::ToggleAutopilot),
        _ => None,
    }
}

/// Map a `keyup` event's `key` value
pub fn key_up(key: &str) -> Option<Command> {
    match key {
        "ArrowDown" => Some(Command::Duck(false)),
        _ => None,
    }
}

/// Keys whose default browser action (page scrolling) is suppressed
pub fn suppresses_default(key: &str) -> bool {
    matches!(key, "ArrowUp" | "ArrowDown" | " " | "Spacebar")
}

/// Pointer press at `x` on a surface `width` wide (both in CSS pixels).
/// Left half ducks, right half jumps.
pub fn pointer_down(x: f32, width: f32) -> Command {
    if x < width / 2.0 {
        Command::Duck(true)
    } else {
        Command::Jump
    }
}

/// Any pointer release ends a pointer duck
pub fn pointer_up() -> Command {
    Command::Duck(false)
}

/// Clear the one-shot intents once a frame has consumed them.
///
/// A jump pressed while `paused` stays pending and fires on resume.
pub fn end_frame(input: &mut TickInput, paused: bool) {
    if !paused {
        input.jump = false;
    }
    input.pause = false;
    input.restart = false;
    input.acknowledge = false;
}
