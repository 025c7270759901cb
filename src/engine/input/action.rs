// Logical actions, physical controls and the fixed key table

use winit::keyboard::KeyCode;

/// Represents every logical input the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicalAction {
    // Directions
    Up,
    Down,
    Left,
    Right,

    // Menu navigation
    Confirm,
    Cancel,
    Menu,
    Minimap,

    // Meta actions
    Pause,
    Help,
    Quit,
}

impl LogicalAction {
    /// All actions, in declaration order
    pub const ALL: [LogicalAction; 11] = [
        LogicalAction::Up,
        LogicalAction::Down,
        LogicalAction::Left,
        LogicalAction::Right,
        LogicalAction::Confirm,
        LogicalAction::Cancel,
        LogicalAction::Menu,
        LogicalAction::Minimap,
        LogicalAction::Pause,
        LogicalAction::Help,
        LogicalAction::Quit,
    ];

    /// Actions the player may rebind (Help and Quit are permanent)
    pub const REMAPPABLE: [LogicalAction; 9] = [
        LogicalAction::Up,
        LogicalAction::Down,
        LogicalAction::Left,
        LogicalAction::Right,
        LogicalAction::Confirm,
        LogicalAction::Cancel,
        LogicalAction::Menu,
        LogicalAction::Minimap,
        LogicalAction::Pause,
    ];

    /// Check if this action can be rebound
    pub fn is_remappable(self) -> bool {
        !matches!(self, LogicalAction::Help | LogicalAction::Quit)
    }

    /// Press-only actions never publish a release edge
    pub fn is_press_only(self) -> bool {
        matches!(self, LogicalAction::Pause | LogicalAction::Quit)
    }

    /// Check if this is one of the four directions
    pub fn is_direction(self) -> bool {
        matches!(
            self,
            LogicalAction::Up | LogicalAction::Down | LogicalAction::Left | LogicalAction::Right
        )
    }
}

/// One of the four directions a joystick hat (d-pad) can report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HatDirection {
    Up,
    Down,
    Left,
    Right,
}

impl HatDirection {
    /// The logical action this hat direction feeds
    pub fn action(self) -> LogicalAction {
        match self {
            HatDirection::Up => LogicalAction::Up,
            HatDirection::Down => LogicalAction::Down,
            HatDirection::Left => LogicalAction::Left,
            HatDirection::Right => LogicalAction::Right,
        }
    }
}

/// A concrete hardware control that can trigger a logical action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalControl {
    KeyboardKey(KeyCode),
    JoystickButton(u8),
    JoystickHatDirection(HatDirection),
}

impl PhysicalControl {
    /// Create a keyboard control
    pub fn key(code: KeyCode) -> Self {
        Self::KeyboardKey(code)
    }

    /// Create a joystick button control
    pub fn button(index: u8) -> Self {
        Self::JoystickButton(index)
    }
}

/// Keys that are permanently bound and can never be rebound
pub const FIXED_KEYS: [(KeyCode, LogicalAction); 4] = [
    (KeyCode::Escape, LogicalAction::Quit),
    (KeyCode::F1, LogicalAction::Help),
    (KeyCode::Enter, LogicalAction::Confirm),
    (KeyCode::NumpadEnter, LogicalAction::Confirm),
];

/// Look up the action a fixed key triggers
pub fn fixed_key_action(key: KeyCode) -> Option<LogicalAction> {
    FIXED_KEYS
        .iter()
        .find(|(fixed, _)| *fixed == key)
        .map(|(_, action)| *action)
}

/// Human-readable key name ("KeyA" becomes "A", "Digit1" becomes "1")
pub fn key_name(key: KeyCode) -> String {
    let raw = format!("{:?}", key);
    let short = raw
        .strip_prefix("Key")
        .or_else(|| raw.strip_prefix("Digit"))
        .filter(|rest| rest.len() == 1)
        .map(str::to_string);

    short.unwrap_or(raw)
}
