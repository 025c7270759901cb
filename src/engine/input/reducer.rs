// Edge reduction: raw key/button/hat events -> held, pressed, released

use std::collections::{HashMap, HashSet};

use winit::keyboard::KeyCode;

use super::action::LogicalAction;
use super::bindings::BindingTable;
use super::event::{Directions, RawEvent};
use super::state::{FrameInputState, MetaCommand};

/// Things that happened during the current frame only
#[derive(Debug, Default)]
struct FrameActivity {
    any_keyboard_key_press: bool,
    any_joystick_button_press: bool,
    registered_key_press: bool,
    registered_key_release: bool,
    last_key: Option<KeyCode>,
    last_button: Option<u8>,
    /// Actions held for this frame only (window close, Ctrl+Q)
    momentary: HashSet<LogicalAction>,
    meta_commands: Vec<MetaCommand>,
}

/// Folds one frame of raw events into the next input snapshot.
///
/// Key/button-derived held state persists across frames. Hat and axis
/// directions are OR'd on top when the snapshot is built.
#[derive(Debug, Default)]
pub struct EdgeReducer {
    /// Actions held through a bound key or button
    held: HashSet<LogicalAction>,

    /// Subset of `held` that a joystick button put there
    button_held: HashSet<LogicalAction>,

    /// Last position reported by each of the active joystick's hats
    hats: HashMap<u8, Directions>,

    left_ctrl: bool,
    right_ctrl: bool,

    /// Keys whose key-down was eaten by a Ctrl combination
    consumed_keys: HashSet<KeyCode>,

    frame: FrameActivity,
}

impl EdgeReducer {
    /// Create a reducer with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new frame, dropping the previous frame's one-shot activity
    pub fn begin_frame(&mut self) {
        self.frame = FrameActivity::default();
    }

    /// Apply one raw event.
    ///
    /// Joystick events are accepted only from `active_joystick`; axis
    /// events are ignored here and handled by the axis tracker.
    pub fn apply(
        &mut self,
        event: &RawEvent,
        bindings: &BindingTable,
        active_joystick: Option<i32>,
    ) {
        let from_active = |joystick: i32| active_joystick == Some(joystick);

        match *event {
            RawEvent::KeyDown(key) => self.key_down(key, bindings),
            RawEvent::KeyUp(key) => self.key_up(key, bindings),
            RawEvent::JoyButtonDown { joystick, button } if from_active(joystick) => {
                self.frame.any_joystick_button_press = true;
                self.frame.last_button = Some(button);
                if let Some(action) = bindings.action_for_button(button) {
                    self.frame.registered_key_press = true;
                    self.held.insert(action);
                    self.button_held.insert(action);
                }
            }
            RawEvent::JoyButtonUp { joystick, button } if from_active(joystick) => {
                if let Some(action) = bindings.action_for_button(button) {
                    self.frame.registered_key_release = true;
                    self.held.remove(&action);
                    self.button_held.remove(&action);
                }
            }
            RawEvent::JoyHat {
                joystick,
                hat,
                position,
            } if from_active(joystick) => {
                self.hats.insert(hat, position);
            }
            RawEvent::WindowClosed => {
                log::info!("Window close requested");
                self.frame.momentary.insert(LogicalAction::Quit);
            }
            RawEvent::JoyButtonDown { .. }
            | RawEvent::JoyButtonUp { .. }
            | RawEvent::JoyHat { .. }
            | RawEvent::JoyAxis { .. } => {}
        }
    }

    fn ctrl_held(&self) -> bool {
        self.left_ctrl || self.right_ctrl
    }

    fn key_down(&mut self, key: KeyCode, bindings: &BindingTable) {
        self.frame.any_keyboard_key_press = true;
        self.frame.last_key = Some(key);

        match key {
            KeyCode::ControlLeft => self.left_ctrl = true,
            KeyCode::ControlRight => self.right_ctrl = true,
            _ => {}
        }

        // Ctrl combinations are consumed before the binding lookup
        if self.ctrl_held() {
            let consumed = match key {
                KeyCode::KeyF => {
                    self.frame.meta_commands.push(MetaCommand::ToggleFullscreen);
                    true
                }
                KeyCode::KeyS => {
                    self.frame.meta_commands.push(MetaCommand::Screenshot);
                    true
                }
                KeyCode::KeyQ => {
                    self.frame.momentary.insert(LogicalAction::Quit);
                    true
                }
                _ => false,
            };
            if consumed {
                log::info!("Ctrl+{:?} triggered", key);
                self.consumed_keys.insert(key);
                return;
            }
        }

        if let Some(action) = bindings.action_for_key(key) {
            self.frame.registered_key_press = true;
            self.held.insert(action);
        }
    }

    fn key_up(&mut self, key: KeyCode, bindings: &BindingTable) {
        match key {
            KeyCode::ControlLeft => self.left_ctrl = false,
            KeyCode::ControlRight => self.right_ctrl = false,
            _ => {}
        }

        if self.consumed_keys.remove(&key) {
            return;
        }

        if let Some(action) = bindings.action_for_key(key) {
            self.frame.registered_key_release = true;
            self.held.remove(&action);
            self.button_held.remove(&action);
        }
    }

    /// Combined position of every hat on the active joystick
    fn hat(&self) -> Directions {
        self.hats
            .values()
            .fold(Directions::CENTERED, |all, hat| all.union(*hat))
    }

    /// Build the snapshot for this frame.
    ///
    /// `axes` is the directional contribution of the analog stick.
    pub fn finish(&self, previous: &FrameInputState, axes: Directions) -> FrameInputState {
        let hat = self.hat();
        let mut held = self.held.clone();
        held.extend(hat.actions());
        held.extend(axes.actions());
        held.extend(self.frame.momentary.iter().copied());

        let pressed: HashSet<LogicalAction> = held.difference(&previous.held).copied().collect();
        let released: HashSet<LogicalAction> = previous
            .held
            .difference(&held)
            .copied()
            .filter(|action| !action.is_press_only())
            .collect();

        debug_assert!(pressed.is_disjoint(&released));

        FrameInputState {
            held,
            pressed,
            released,
            hat,
            any_keyboard_key_press: self.frame.any_keyboard_key_press,
            any_joystick_button_press: self.frame.any_joystick_button_press,
            registered_key_press: self.frame.registered_key_press,
            registered_key_release: self.frame.registered_key_release,
            last_key: self.frame.last_key,
            last_button: self.frame.last_button,
            meta_commands: self.frame.meta_commands.clone(),
        }
    }

    /// Forget everything the active joystick contributed: hat positions and
    /// actions held through its buttons (device switched, detached or
    /// disabled)
    pub fn release_joystick(&mut self) {
        self.hats.clear();
        for action in self.button_held.drain() {
            self.held.remove(&action);
        }
    }

    /// Stop holding the given actions until their control is pressed again.
    /// Used when a rebind moves the control that was holding them.
    pub fn release_actions(&mut self, actions: &[LogicalAction]) {
        for action in actions {
            self.held.remove(action);
            self.button_held.remove(action);
        }
    }

    /// Drop all held state
    pub fn reset(&mut self) {
        self.held.clear();
        self.button_held.clear();
        self.hats.clear();
        self.left_ctrl = false;
        self.right_ctrl = false;
        self.consumed_keys.clear();
        self.frame = FrameActivity::default();
    }
}
