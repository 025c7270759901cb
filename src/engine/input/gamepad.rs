// Gamepad backend: gilrs events translated into raw joystick events

use std::collections::HashMap;

use gilrs::{Axis, Button, EventType, GamepadId, Gilrs};

use super::action::HatDirection;
use super::event::{Directions, EventQueue, RawEvent};

/// Button index used for bindings, in the usual SDL layout
pub fn button_index(button: Button) -> Option<u8> {
    let index = match button {
        Button::South => 0,
        Button::East => 1,
        Button::West => 2,
        Button::North => 3,
        Button::LeftTrigger => 4,
        Button::RightTrigger => 5,
        Button::LeftTrigger2 => 6,
        Button::RightTrigger2 => 7,
        Button::Select => 8,
        Button::Start => 9,
        Button::LeftThumb => 10,
        Button::RightThumb => 11,
        Button::Mode => 12,
        Button::C => 13,
        Button::Z => 14,
        _ => return None,
    };
    Some(index)
}

/// Hat direction for a d-pad button
pub fn dpad_direction(button: Button) -> Option<HatDirection> {
    match button {
        Button::DPadUp => Some(HatDirection::Up),
        Button::DPadDown => Some(HatDirection::Down),
        Button::DPadLeft => Some(HatDirection::Left),
        Button::DPadRight => Some(HatDirection::Right),
        _ => None,
    }
}

/// Axis index and signed 16-bit value for an analog axis.
///
/// gilrs reports stick Y as positive-up; raw axes are negative-up, so Y is
/// flipped.
pub fn axis_sample(axis: Axis, value: f32) -> Option<(i32, i16)> {
    let (index, flip) = match axis {
        Axis::LeftStickX => (0, false),
        Axis::LeftStickY => (1, true),
        Axis::RightStickX => (2, false),
        Axis::RightStickY => (3, true),
        Axis::LeftZ => (4, false),
        Axis::RightZ => (5, false),
        _ => return None,
    };

    let value = if flip { -value } else { value };
    let scaled = (value.clamp(-1.0, 1.0) * i16::MAX as f32).round() as i16;
    Some((index, scaled))
}

fn set_direction(position: &mut Directions, direction: HatDirection, on: bool) {
    match direction {
        HatDirection::Up => position.up = on,
        HatDirection::Down => position.down = on,
        HatDirection::Left => position.left = on,
        HatDirection::Right => position.right = on,
    }
}

/// Per-device d-pad positions, reported to the engine as hat 0
#[derive(Debug, Default)]
struct DpadTracker {
    positions: HashMap<i32, Directions>,
}

impl DpadTracker {
    fn update(&mut self, joystick: i32, direction: HatDirection, pressed: bool) -> RawEvent {
        let position = self.positions.entry(joystick).or_default();
        set_direction(position, direction, pressed);
        RawEvent::JoyHat {
            joystick,
            hat: 0,
            position: *position,
        }
    }

    fn forget(&mut self, joystick: i32) -> Option<RawEvent> {
        self.positions
            .remove(&joystick)
            .filter(|position| *position != Directions::CENTERED)
            .map(|_| RawEvent::JoyHat {
                joystick,
                hat: 0,
                position: Directions::CENTERED,
            })
    }
}

fn joystick_index(id: GamepadId) -> i32 {
    usize::from(id) as i32
}

/// Reads connected gamepads through gilrs and feeds the event queue
pub struct GamepadEvents {
    gilrs: Gilrs,
    dpads: DpadTracker,
}

impl GamepadEvents {
    /// Open the platform gamepad backend.
    /// Returns None (and logs why) when it is unavailable.
    pub fn new() -> Option<Self> {
        match Gilrs::new() {
            Ok(gilrs) => {
                for (id, gamepad) in gilrs.gamepads() {
                    log::info!("Gamepad {} connected: {}", joystick_index(id), gamepad.name());
                }
                Some(Self {
                    gilrs,
                    dpads: DpadTracker::default(),
                })
            }
            Err(e) => {
                log::warn!("Gamepad support unavailable: {}", e);
                None
            }
        }
    }

    /// Move every pending gamepad event into `queue`, in arrival order
    pub fn pump(&mut self, queue: &mut EventQueue) {
        while let Some(gilrs::Event { id, event, .. }) = self.gilrs.next_event() {
            let joystick = joystick_index(id);
            match event {
                EventType::ButtonPressed(button, _) => self.button(queue, joystick, button, true),
                EventType::ButtonReleased(button, _) => self.button(queue, joystick, button, false),
                EventType::AxisChanged(axis, value, _) => {
                    if let Some((axis, value)) = axis_sample(axis, value) {
                        queue.push(RawEvent::JoyAxis {
                            joystick,
                            axis,
                            value,
                        });
                    }
                }
                EventType::Connected => log::info!("Gamepad {} connected", joystick),
                EventType::Disconnected => {
                    log::info!("Gamepad {} disconnected", joystick);
                    queue.extend(self.dpads.forget(joystick));
                }
                _ => {}
            }
        }
    }

    fn button(&mut self, queue: &mut EventQueue, joystick: i32, button: Button, pressed: bool) {
        if let Some(direction) = dpad_direction(button) {
            queue.push(self.dpads.update(joystick, direction, pressed));
        } else if let Some(button) = button_index(button) {
            queue.push(if pressed {
                RawEvent::JoyButtonDown { joystick, button }
            } else {
                RawEvent::JoyButtonUp { joystick, button }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::config::BindingDefaults;

    #[test]
    fn test_default_buttons_match_layout() {
        let joystick = BindingDefaults::builtin().joystick;
        assert_eq!(button_index(Button::South), Some(joystick.confirm));
        assert_eq!(button_index(Button::East), Some(joystick.cancel));
        assert_eq!(button_index(Button::Start), Some(joystick.pause));
        assert_eq!(button_index(Button::Select), Some(joystick.quit));
        assert_eq!(button_index(Button::DPadUp), None);
    }

    #[test]
    fn test_dpad_buttons_become_hat() {
        assert_eq!(dpad_direction(Button::DPadLeft), Some(HatDirection::Left));
        assert_eq!(dpad_direction(Button::South), None);

        let mut dpads = DpadTracker::default();
        dpads.update(2, HatDirection::Up, true);
        let event = dpads.update(2, HatDirection::Right, true);
        assert_eq!(
            event,
            RawEvent::JoyHat {
                joystick: 2,
                hat: 0,
                position: Directions::UP.union(Directions::RIGHT),
            }
        );

        let event = dpads.update(2, HatDirection::Up, false);
        assert_eq!(
            event,
            RawEvent::JoyHat {
                joystick: 2,
                hat: 0,
                position: Directions::RIGHT,
            }
        );
    }

    #[test]
    fn test_disconnect_centres_held_dpad() {
        let mut dpads = DpadTracker::default();
        dpads.update(0, HatDirection::Down, true);
        assert_eq!(
            dpads.forget(0),
            Some(RawEvent::JoyHat {
                joystick: 0,
                hat: 0,
                position: Directions::CENTERED,
            })
        );
        assert_eq!(dpads.forget(0), None);
    }

    #[test]
    fn test_axis_sample_scaling_and_sign() {
        assert_eq!(axis_sample(Axis::LeftStickX, 1.0), Some((0, 32767)));
        assert_eq!(axis_sample(Axis::LeftStickX, -1.0), Some((0, -32767)));
        assert_eq!(axis_sample(Axis::LeftStickX, 0.0), Some((0, 0)));
        // Stick pushed up reads negative, which the engine maps to Up
        assert_eq!(axis_sample(Axis::LeftStickY, 1.0), Some((1, -32767)));
        assert_eq!(axis_sample(Axis::RightStickX, 2.0), Some((2, 32767)));
        assert_eq!(axis_sample(Axis::DPadX, 1.0), None);
    }
}
