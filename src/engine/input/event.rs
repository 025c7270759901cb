// Raw hardware events and the pull-based event source

use std::collections::VecDeque;

use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::action::{HatDirection, LogicalAction};

/// Four independent direction flags.
///
/// Used both for the position a joystick hat reports and for the
/// directional contribution of the analog axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Directions {
    pub const CENTERED: Directions = Directions {
        up: false,
        down: false,
        left: false,
        right: false,
    };
    pub const UP: Directions = Directions {
        up: true,
        ..Directions::CENTERED
    };
    pub const DOWN: Directions = Directions {
        down: true,
        ..Directions::CENTERED
    };
    pub const LEFT: Directions = Directions {
        left: true,
        ..Directions::CENTERED
    };
    pub const RIGHT: Directions = Directions {
        right: true,
        ..Directions::CENTERED
    };

    /// Combine two positions, e.g. `UP.union(RIGHT)` for a diagonal
    pub fn union(self, other: Directions) -> Directions {
        Directions {
            up: self.up || other.up,
            down: self.down || other.down,
            left: self.left || other.left,
            right: self.right || other.right,
        }
    }

    /// Check a single direction
    pub fn contains(&self, direction: HatDirection) -> bool {
        match direction {
            HatDirection::Up => self.up,
            HatDirection::Down => self.down,
            HatDirection::Left => self.left,
            HatDirection::Right => self.right,
        }
    }

    /// Directional actions that are set
    pub fn actions(&self) -> impl Iterator<Item = LogicalAction> + '_ {
        [
            HatDirection::Up,
            HatDirection::Down,
            HatDirection::Left,
            HatDirection::Right,
        ]
        .into_iter()
        .filter(|d| self.contains(*d))
        .map(HatDirection::action)
    }
}

/// A raw, device-specific input event as delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),
    JoyButtonDown { joystick: i32, button: u8 },
    JoyButtonUp { joystick: i32, button: u8 },
    JoyAxis { joystick: i32, axis: i32, value: i16 },
    JoyHat { joystick: i32, hat: u8, position: Directions },
    WindowClosed,
}

impl RawEvent {
    /// Translate a winit window event.
    ///
    /// Key repeats and keys winit cannot identify are dropped.
    pub fn from_window_event(event: &WindowEvent) -> Option<RawEvent> {
        match event {
            WindowEvent::CloseRequested => Some(RawEvent::WindowClosed),
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(key_code) = event.physical_key else {
                    return None;
                };
                match event.state {
                    ElementState::Pressed if event.repeat => None,
                    ElementState::Pressed => Some(RawEvent::KeyDown(key_code)),
                    ElementState::Released => Some(RawEvent::KeyUp(key_code)),
                }
            }
            _ => None,
        }
    }

    /// Joystick the event came from, if it is a joystick event
    pub fn joystick(&self) -> Option<i32> {
        match self {
            RawEvent::JoyButtonDown { joystick, .. }
            | RawEvent::JoyButtonUp { joystick, .. }
            | RawEvent::JoyAxis { joystick, .. }
            | RawEvent::JoyHat { joystick, .. } => Some(*joystick),
            _ => None,
        }
    }
}

/// A pull source of raw events, drained once per frame.
///
/// `drain_pending` must hand over exactly the events queued before the call
/// started. Anything arriving afterwards belongs to the next drain.
pub trait RawEventSource {
    fn drain_pending(&mut self) -> Vec<RawEvent>;
}

/// FIFO queue filled by the platform event loop and drained by the input engine
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<RawEvent>,
}

impl EventQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue a raw event
    pub fn push(&mut self, event: RawEvent) {
        self.pending.push_back(event);
    }

    /// Enqueue a winit window event if it carries input.
    /// Returns true if the event was queued.
    pub fn push_window_event(&mut self, event: &WindowEvent) -> bool {
        match RawEvent::from_window_event(event) {
            Some(raw) => {
                self.push(raw);
                true
            }
            None => false,
        }
    }

    /// Number of queued events
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl RawEventSource for EventQueue {
    fn drain_pending(&mut self) -> Vec<RawEvent> {
        std::mem::take(&mut self.pending).into()
    }
}

impl Extend<RawEvent> for EventQueue {
    fn extend<T: IntoIterator<Item = RawEvent>>(&mut self, iter: T) {
        self.pending.extend(iter);
    }
}
