// Per-frame input snapshot

use std::collections::HashSet;

use winit::keyboard::KeyCode;

use super::action::LogicalAction;
use super::event::Directions;

/// Engine-level commands triggered by Ctrl key combinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetaCommand {
    /// Ctrl+F
    ToggleFullscreen,
    /// Ctrl+S
    Screenshot,
}

/// Immutable view of the logical input for one frame.
///
/// Built by the edge reducer at the end of a poll and replaced wholesale
/// by the next one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInputState {
    /// Actions currently held
    pub(crate) held: HashSet<LogicalAction>,

    /// Actions that became held this frame
    pub(crate) pressed: HashSet<LogicalAction>,

    /// Actions that stopped being held this frame (never Pause or Quit)
    pub(crate) released: HashSet<LogicalAction>,

    /// Position reported by the joystick hat
    pub(crate) hat: Directions,

    /// Any keyboard key went down, bound or not
    pub(crate) any_keyboard_key_press: bool,

    /// Any button on the active joystick went down, bound or not
    pub(crate) any_joystick_button_press: bool,

    /// A bound key or button went down
    pub(crate) registered_key_press: bool,

    /// A bound key or button went up
    pub(crate) registered_key_release: bool,

    /// Last key that went down this frame
    pub(crate) last_key: Option<KeyCode>,

    /// Last joystick button that went down this frame
    pub(crate) last_button: Option<u8>,

    pub(crate) meta_commands: Vec<MetaCommand>,
}

impl FrameInputState {
    /// Check if an action is held
    pub fn state(&self, action: LogicalAction) -> bool {
        self.held.contains(&action)
    }

    /// Check if an action was pressed this frame
    pub fn press(&self, action: LogicalAction) -> bool {
        self.pressed.contains(&action)
    }

    /// Check if an action was released this frame
    pub fn release(&self, action: LogicalAction) -> bool {
        self.released.contains(&action)
    }

    /// Check if any direction was pressed this frame
    pub fn arrow_press(&self) -> bool {
        self.pressed.iter().any(|a| a.is_direction())
    }

    pub fn held(&self) -> &HashSet<LogicalAction> {
        &self.held
    }

    pub fn pressed(&self) -> &HashSet<LogicalAction> {
        &self.pressed
    }

    pub fn released(&self) -> &HashSet<LogicalAction> {
        &self.released
    }

    pub fn hat(&self) -> Directions {
        self.hat
    }

    pub fn any_keyboard_key_press(&self) -> bool {
        self.any_keyboard_key_press
    }

    pub fn any_joystick_button_press(&self) -> bool {
        self.any_joystick_button_press
    }

    pub fn any_registered_key_press(&self) -> bool {
        self.registered_key_press
    }

    pub fn any_registered_key_release(&self) -> bool {
        self.registered_key_release
    }

    pub fn last_key(&self) -> Option<KeyCode> {
        self.last_key
    }

    pub fn last_button(&self) -> Option<u8> {
        self.last_button
    }

    pub fn meta_commands(&self) -> &[MetaCommand] {
        &self.meta_commands
    }

    /// Held actions as a (horizontal, vertical) vector in -1.0..=1.0.
    /// Opposite directions cancel out.
    pub fn direction(&self) -> (f32, f32) {
        let mut horizontal = 0.0;
        let mut vertical = 0.0;

        if self.state(LogicalAction::Left) {
            horizontal -= 1.0;
        }
        if self.state(LogicalAction::Right) {
            horizontal += 1.0;
        }
        if self.state(LogicalAction::Down) {
            vertical -= 1.0;
        }
        if self.state(LogicalAction::Up) {
            vertical += 1.0;
        }

        (horizontal, vertical)
    }
}
