// Input handling system
//
// This module turns raw keyboard and joystick events into a per-frame snapshot
// of logical game actions, with press/release edges derived from held state,
// and owns the remappable key and joystick bindings.
//
// ## Architecture
//
// - `action`: Logical actions, physical controls and the permanent keys
// - `event`: Raw hardware events and the pull-based event source
// - `gamepad`: gilrs backend that feeds joystick events into the queue
// - `bindings`: Action <-> control table with swap-on-conflict rebinding
// - `config`: Default bindings and the TOML file they are loaded from
// - `reducer`: Folds key/button/hat events into held, pressed and released sets
// - `axis`: Three-region discretization of analog axes
// - `state`: The published per-frame snapshot
// - `manager`: `InputEngine`, the facade the game loop talks to
//
// ## Usage Example
//
// ```rust
// use engine::input::{EventQueue, InputEngine, LogicalAction};
//
// let mut input = InputEngine::with_builtin_defaults();
// let mut queue = EventQueue::new();
//
// // In the window event handler
// queue.push_window_event(&window_event);
//
// // Once per frame, before anything reads input
// input.poll(&mut queue);
//
// if input.press(LogicalAction::Confirm) {
//     // Confirm was pressed this frame
// }
// ```

// Public API; the demo binary does not call every query and setter
#[allow(dead_code)]
pub mod action;
#[allow(dead_code)]
pub mod axis;
#[allow(dead_code)]
pub mod bindings;
#[allow(dead_code)]
pub mod config;
#[allow(dead_code)]
pub mod event;
pub mod gamepad;
#[allow(dead_code)]
pub mod manager;
#[allow(dead_code)]
pub mod reducer;
#[allow(dead_code)]
pub mod state;

// Re-export commonly used types
pub use config::{BuiltinDefaults, DefaultsSource, TomlDefaults};
pub use event::EventQueue;
pub use gamepad::GamepadEvents;
pub use manager::InputEngine;
pub use state::MetaCommand;
pub use action::LogicalAction;

// Re-export for engine subsystems that read snapshots or feed raw events
#[allow(unused_imports)]
pub use action::{HatDirection, PhysicalControl};
#[allow(unused_imports)]
pub use axis::{AxisRegion, AxisRegionTracker};
#[allow(unused_imports)]
pub use bindings::BindingTable;
#[allow(unused_imports)]
pub use config::BindingDefaults;
#[allow(unused_imports)]
pub use event::{Directions, RawEvent, RawEventSource};
#[allow(unused_imports)]
pub use state::FrameInputState;

/// Input configuration and binding errors
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read default bindings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed default bindings: {0}")]
    MalformedDefaults(String),

    #[error("Default bindings give {control:?} to more than one action (at {action:?})")]
    DuplicateDefault {
        action: LogicalAction,
        control: PhysicalControl,
    },

    #[error("{0:?} cannot be remapped")]
    NotRemappable(LogicalAction),

    #[error("{control:?} cannot be bound to {action:?}")]
    IncompatibleControl {
        action: LogicalAction,
        control: PhysicalControl,
    },

    #[error("{0:?} is permanently bound")]
    ReservedControl(PhysicalControl),
}
