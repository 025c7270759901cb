// Binding table: logical action <-> physical control assignments

use winit::keyboard::KeyCode;

use super::action::{fixed_key_action, key_name, LogicalAction, PhysicalControl};
use super::config::{BindingDefaults, JoystickDefaults, KeyDefaults};
use super::InputError;
use crate::core::BiMap;

/// Current key and joystick assignments.
///
/// Keyboard keys and joystick buttons live in separate namespaces, so a key
/// code and a button index never conflict. Within a namespace every control
/// belongs to at most one action.
#[derive(Debug, Clone)]
pub struct BindingTable {
    /// Remappable keyboard bindings
    keys: BiMap<LogicalAction, KeyCode>,

    /// Remappable joystick button bindings
    buttons: BiMap<LogicalAction, u8>,

    /// Joystick buttons for Help and Quit, set only from defaults
    fixed_buttons: BiMap<LogicalAction, u8>,

    /// Index of the joystick whose events are accepted
    joystick_index: i32,

    x_axis: i32,
    y_axis: i32,

    /// Analog values at or beyond +/- threshold count as a direction
    threshold: u16,
}

impl BindingTable {
    /// Create an empty table (no keys or buttons bound)
    pub fn new() -> Self {
        Self {
            keys: BiMap::new(),
            buttons: BiMap::new(),
            fixed_buttons: BiMap::new(),
            joystick_index: 0,
            x_axis: 0,
            y_axis: 1,
            threshold: 8192,
        }
    }

    /// Create a table holding the given defaults
    pub fn from_defaults(defaults: &BindingDefaults) -> Result<Self, InputError> {
        let mut table = Self::new();
        table.apply_defaults(defaults)?;
        Ok(table)
    }

    /// Action bound to a keyboard key, including the fixed keys
    pub fn action_for_key(&self, key: KeyCode) -> Option<LogicalAction> {
        fixed_key_action(key).or_else(|| self.keys.owner(key))
    }

    /// Action bound to a joystick button, including Help and Quit
    pub fn action_for_button(&self, button: u8) -> Option<LogicalAction> {
        self.fixed_buttons
            .owner(button)
            .or_else(|| self.buttons.owner(button))
    }

    /// Key currently bound to an action.
    ///
    /// Help and Quit report their permanent keys.
    pub fn key(&self, action: LogicalAction) -> Option<KeyCode> {
        match action {
            LogicalAction::Help => Some(KeyCode::F1),
            LogicalAction::Quit => Some(KeyCode::Escape),
            _ => self.keys.get(action),
        }
    }

    /// Joystick button currently bound to an action
    pub fn button(&self, action: LogicalAction) -> Option<u8> {
        self.fixed_buttons
            .get(action)
            .or_else(|| self.buttons.get(action))
    }

    /// Readable name of the key bound to an action
    pub fn key_name(&self, action: LogicalAction) -> Option<String> {
        self.key(action).map(key_name)
    }

    /// Bind a control to an action.
    ///
    /// If the control already belongs to another action in the same
    /// namespace, the two actions trade controls. Rebinding an action to its
    /// current control does nothing. Returns the action that received the
    /// old control, if a swap happened.
    ///
    /// An action with no control in the namespace (the directions have no
    /// joystick button by default) may only take a free control.
    pub fn rebind(
        &mut self,
        action: LogicalAction,
        control: PhysicalControl,
    ) -> Result<Option<LogicalAction>, InputError> {
        if !action.is_remappable() {
            return Err(InputError::NotRemappable(action));
        }

        let assigned = match control {
            PhysicalControl::KeyboardKey(key) => {
                if fixed_key_action(key).is_some() {
                    return Err(InputError::ReservedControl(control));
                }
                self.keys.assign(action, key)
            }
            PhysicalControl::JoystickButton(button) => {
                if self.fixed_buttons.owner(button).is_some() {
                    return Err(InputError::ReservedControl(control));
                }
                self.buttons.assign(action, button)
            }
            PhysicalControl::JoystickHatDirection(_) => {
                return Err(InputError::IncompatibleControl { action, control });
            }
        };

        // An action with nothing to hand back cannot take an owned control
        let swapped = assigned.map_err(|_| InputError::IncompatibleControl { action, control })?;

        if let Some(other) = swapped {
            log::debug!("{:?} took {:?} from {:?}, bindings swapped", action, control, other);
        }

        Ok(swapped)
    }

    /// Rebind a keyboard key
    pub fn set_key(
        &mut self,
        action: LogicalAction,
        key: KeyCode,
    ) -> Result<Option<LogicalAction>, InputError> {
        self.rebind(action, PhysicalControl::KeyboardKey(key))
    }

    /// Rebind a joystick button
    pub fn set_button(
        &mut self,
        action: LogicalAction,
        button: u8,
    ) -> Result<Option<LogicalAction>, InputError> {
        self.rebind(action, PhysicalControl::JoystickButton(button))
    }

    /// Replace the keyboard bindings with the given defaults.
    /// Leaves the table untouched on error.
    pub fn apply_key_defaults(&mut self, defaults: &KeyDefaults) -> Result<(), InputError> {
        let pairs = defaults.pairs();
        if let Some((action, key)) = pairs.iter().find(|(_, k)| fixed_key_action(*k).is_some()) {
            return Err(InputError::DuplicateDefault {
                action: *action,
                control: PhysicalControl::KeyboardKey(*key),
            });
        }

        let keys = BiMap::from_pairs(pairs).map_err(|(action, key)| {
            InputError::DuplicateDefault {
                action,
                control: PhysicalControl::KeyboardKey(key),
            }
        })?;

        self.keys = keys;
        Ok(())
    }

    /// Replace the joystick buttons, axes, threshold and device index with
    /// the given defaults. Leaves the table untouched on error.
    pub fn apply_joystick_defaults(
        &mut self,
        defaults: &JoystickDefaults,
    ) -> Result<(), InputError> {
        let duplicate = |(action, button): (LogicalAction, u8)| InputError::DuplicateDefault {
            action,
            control: PhysicalControl::JoystickButton(button),
        };

        let fixed_buttons = BiMap::from_pairs(defaults.fixed_pairs()).map_err(duplicate)?;
        let remappable = defaults.remappable_pairs();
        if let Some(pair) = remappable
            .iter()
            .find(|(_, button)| fixed_buttons.owner(*button).is_some())
        {
            return Err(duplicate(*pair));
        }
        let buttons = BiMap::from_pairs(remappable).map_err(duplicate)?;

        self.buttons = buttons;
        self.fixed_buttons = fixed_buttons;
        self.joystick_index = defaults.index;
        self.x_axis = defaults.x_axis;
        self.y_axis = defaults.y_axis;
        self.threshold = defaults.threshold;
        Ok(())
    }

    /// Replace the whole table with the given defaults.
    /// Both halves are validated before anything is written.
    pub fn apply_defaults(&mut self, defaults: &BindingDefaults) -> Result<(), InputError> {
        let mut staged = self.clone();
        staged.apply_key_defaults(&defaults.keys)?;
        staged.apply_joystick_defaults(&defaults.joystick)?;
        *self = staged;
        Ok(())
    }

    /// All remappable keyboard bindings
    pub fn key_bindings(&self) -> Vec<(LogicalAction, KeyCode)> {
        self.keys.iter().collect()
    }

    /// All remappable joystick button bindings
    pub fn button_bindings(&self) -> Vec<(LogicalAction, u8)> {
        self.buttons.iter().collect()
    }

    pub fn joystick_index(&self) -> i32 {
        self.joystick_index
    }

    pub fn set_joystick_index(&mut self, index: i32) {
        self.joystick_index = index;
    }

    pub fn x_axis(&self) -> i32 {
        self.x_axis
    }

    pub fn set_x_axis(&mut self, axis: i32) {
        self.x_axis = axis;
    }

    pub fn y_axis(&self) -> i32 {
        self.y_axis
    }

    pub fn set_y_axis(&mut self, axis: i32) {
        self.y_axis = axis;
    }

    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    pub fn set_threshold(&mut self, threshold: u16) {
        self.threshold = threshold;
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::new()
    }
}
