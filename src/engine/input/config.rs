// Default bindings: the TOML file format and where defaults come from

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use winit::keyboard::KeyCode;

use super::action::LogicalAction;
use super::InputError;

/// Default keyboard keys, one per remappable action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyDefaults {
    pub up: KeyCode,
    pub down: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub confirm: KeyCode,
    pub cancel: KeyCode,
    pub menu: KeyCode,
    pub minimap: KeyCode,
    pub pause: KeyCode,
}

impl KeyDefaults {
    /// (action, key) pairs in a stable order
    pub fn pairs(&self) -> Vec<(LogicalAction, KeyCode)> {
        vec![
            (LogicalAction::Up, self.up),
            (LogicalAction::Down, self.down),
            (LogicalAction::Left, self.left),
            (LogicalAction::Right, self.right),
            (LogicalAction::Confirm, self.confirm),
            (LogicalAction::Cancel, self.cancel),
            (LogicalAction::Menu, self.menu),
            (LogicalAction::Minimap, self.minimap),
            (LogicalAction::Pause, self.pause),
        ]
    }
}

fn default_y_axis() -> i32 {
    1
}

fn default_threshold() -> u16 {
    8192
}

/// Default joystick settings.
///
/// Directional buttons are optional: most pads drive the directions
/// from the hat and the analog stick instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoystickDefaults {
    #[serde(default)]
    pub index: i32,

    pub confirm: u8,
    pub cancel: u8,
    pub menu: u8,
    pub minimap: u8,
    pub pause: u8,
    pub help: u8,
    pub quit: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub up: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub down: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<u8>,

    #[serde(default)]
    pub x_axis: i32,
    #[serde(default = "default_y_axis")]
    pub y_axis: i32,
    #[serde(default = "default_threshold")]
    pub threshold: u16,
}

impl JoystickDefaults {
    /// (action, button) pairs for the remappable actions that have a button
    pub fn remappable_pairs(&self) -> Vec<(LogicalAction, u8)> {
        let directional = [
            (LogicalAction::Up, self.up),
            (LogicalAction::Down, self.down),
            (LogicalAction::Left, self.left),
            (LogicalAction::Right, self.right),
        ];

        directional
            .into_iter()
            .filter_map(|(action, button)| button.map(|b| (action, b)))
            .chain([
                (LogicalAction::Confirm, self.confirm),
                (LogicalAction::Cancel, self.cancel),
                (LogicalAction::Menu, self.menu),
                (LogicalAction::Minimap, self.minimap),
                (LogicalAction::Pause, self.pause),
            ])
            .collect()
    }

    /// (action, button) pairs for the permanently bound actions
    pub fn fixed_pairs(&self) -> Vec<(LogicalAction, u8)> {
        vec![
            (LogicalAction::Help, self.help),
            (LogicalAction::Quit, self.quit),
        ]
    }
}

/// Complete set of default bindings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingDefaults {
    pub keys: KeyDefaults,
    pub joystick: JoystickDefaults,
}

impl BindingDefaults {
    /// The mapping compiled into the engine
    pub fn builtin() -> Self {
        Self {
            keys: KeyDefaults {
                up: KeyCode::ArrowUp,
                down: KeyCode::ArrowDown,
                left: KeyCode::ArrowLeft,
                right: KeyCode::ArrowRight,
                confirm: KeyCode::KeyF,
                cancel: KeyCode::KeyD,
                menu: KeyCode::KeyS,
                minimap: KeyCode::Tab,
                pause: KeyCode::Space,
            },
            joystick: JoystickDefaults {
                index: 0,
                confirm: 0,
                cancel: 1,
                menu: 2,
                minimap: 3,
                pause: 9,
                help: 4,
                quit: 8,
                up: None,
                down: None,
                left: None,
                right: None,
                x_axis: 0,
                y_axis: default_y_axis(),
                threshold: default_threshold(),
            },
        }
    }

    /// Parse defaults from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, InputError> {
        toml::from_str(content).map_err(|e| InputError::MalformedDefaults(e.to_string()))
    }

    /// Load defaults from a TOML file
    pub fn load(path: &Path) -> Result<Self, InputError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Serialize to pretty TOML
    pub fn to_toml_string(&self) -> Result<String, InputError> {
        toml::to_string_pretty(self).map_err(|e| InputError::MalformedDefaults(e.to_string()))
    }
}

impl Default for BindingDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Where the engine reads its default bindings from.
///
/// Consulted at startup and on every restore-defaults request.
pub trait DefaultsSource {
    fn load_defaults(&self) -> Result<BindingDefaults, InputError>;
}

/// Defaults compiled into the binary; never fails
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinDefaults;

impl DefaultsSource for BuiltinDefaults {
    fn load_defaults(&self) -> Result<BindingDefaults, InputError> {
        Ok(BindingDefaults::builtin())
    }
}

/// Defaults read from a TOML file on every request
#[derive(Debug, Clone)]
pub struct TomlDefaults {
    path: PathBuf,
}

impl TomlDefaults {
    /// Create a source backed by the file at `path`
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DefaultsSource for TomlDefaults {
    fn load_defaults(&self) -> Result<BindingDefaults, InputError> {
        BindingDefaults::load(&self.path)
    }
}
