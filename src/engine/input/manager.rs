// Input engine - owns the bindings and publishes one snapshot per frame

use winit::keyboard::KeyCode;

use super::action::{LogicalAction, PhysicalControl};
use super::axis::AxisRegionTracker;
use super::bindings::BindingTable;
use super::config::{BuiltinDefaults, DefaultsSource};
use super::event::{RawEvent, RawEventSource};
use super::reducer::EdgeReducer;
use super::state::{FrameInputState, MetaCommand};
use super::InputError;

/// Converts raw hardware events into per-frame logical input.
///
/// Call [`InputEngine::poll`] exactly once per game-loop iteration, before
/// anything reads input for that frame. Rebinding may happen at any time and
/// is picked up by the next poll.
pub struct InputEngine {
    /// Current key/button/axis assignments
    bindings: BindingTable,

    /// Where restore-defaults requests read from
    defaults: Box<dyn DefaultsSource>,

    /// Last published snapshot
    state: FrameInputState,

    reducer: EdgeReducer,
    axes: AxisRegionTracker,

    /// Game option: whether joysticks may be initialized at all
    joysticks_enabled: bool,

    /// Joystick events are accepted only while initialized
    joysticks_initialized: bool,

    /// Number of completed polls
    frame: u64,
}

impl InputEngine {
    /// Create an engine and load its bindings from `defaults`.
    ///
    /// If the defaults cannot be loaded the engine starts with only the
    /// permanent keys bound; the caller can retry with `restore_defaults`.
    pub fn new(defaults: Box<dyn DefaultsSource>) -> Self {
        let mut engine = Self {
            bindings: BindingTable::new(),
            defaults,
            state: FrameInputState::default(),
            reducer: EdgeReducer::new(),
            axes: AxisRegionTracker::new(),
            joysticks_enabled: true,
            joysticks_initialized: false,
            frame: 0,
        };

        if let Err(e) = engine.restore_defaults() {
            log::warn!("Starting with empty bindings: {}", e);
        }

        engine
    }

    /// Create an engine using the compiled-in defaults
    pub fn with_builtin_defaults() -> Self {
        Self::new(Box::new(BuiltinDefaults))
    }

    /// Drain the event source and publish the snapshot for this frame
    pub fn poll<S: RawEventSource + ?Sized>(&mut self, source: &mut S) {
        let events = source.drain_pending();
        let active_joystick = self.active_joystick();
        let threshold = self.bindings.threshold();

        self.reducer.begin_frame();
        for event in &events {
            match *event {
                RawEvent::JoyAxis {
                    joystick,
                    axis,
                    value,
                } => {
                    if active_joystick != Some(joystick) {
                        continue;
                    }
                    if let Some(transition) = self.axes.sample(axis, value, threshold) {
                        log::trace!(
                            "Axis {} moved {:?} -> {:?}",
                            transition.axis,
                            transition.from,
                            transition.to
                        );
                    }
                }
                _ => self.reducer.apply(event, &self.bindings, active_joystick),
            }
        }

        let axis_directions = self
            .axes
            .directions(self.bindings.x_axis(), self.bindings.y_axis());
        let next = self.reducer.finish(&self.state, axis_directions);

        for command in next.meta_commands() {
            log::info!("Meta command: {:?}", command);
        }

        self.state = next;
        self.frame += 1;
    }

    fn active_joystick(&self) -> Option<i32> {
        self.joysticks_initialized
            .then(|| self.bindings.joystick_index())
    }

    /// The snapshot published by the last poll
    pub fn snapshot(&self) -> &FrameInputState {
        &self.state
    }

    /// Number of polls completed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Check if an action is held
    pub fn state(&self, action: LogicalAction) -> bool {
        self.state.state(action)
    }

    /// Check if an action was pressed this frame
    pub fn press(&self, action: LogicalAction) -> bool {
        self.state.press(action)
    }

    /// Check if an action was released this frame
    pub fn release(&self, action: LogicalAction) -> bool {
        self.state.release(action)
    }

    /// Check if any direction was pressed this frame
    pub fn arrow_press(&self) -> bool {
        self.state.arrow_press()
    }

    pub fn any_registered_key_press(&self) -> bool {
        self.state.any_registered_key_press()
    }

    pub fn any_registered_key_release(&self) -> bool {
        self.state.any_registered_key_release()
    }

    pub fn any_keyboard_key_press(&self) -> bool {
        self.state.any_keyboard_key_press()
    }

    pub fn any_joystick_button_press(&self) -> bool {
        self.state.any_joystick_button_press()
    }

    pub fn meta_commands(&self) -> &[MetaCommand] {
        self.state.meta_commands()
    }

    /// Axis that most recently crossed a region boundary
    pub fn last_axis_moved(&self) -> Option<i32> {
        self.axes.last_axis_moved()
    }

    pub fn reset_last_axis_moved(&mut self) {
        self.axes.reset_last_axis_moved();
    }

    /// Read-only access to the bindings
    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    /// Bind a control to an action, swapping with any action that held it.
    ///
    /// Both actions stop being held until their new controls are pressed,
    /// so a key that is down during the rebind cannot leave one stuck.
    pub fn rebind(
        &mut self,
        action: LogicalAction,
        control: PhysicalControl,
    ) -> Result<Option<LogicalAction>, InputError> {
        let unchanged = match control {
            PhysicalControl::KeyboardKey(key) => self.bindings.key(action) == Some(key),
            PhysicalControl::JoystickButton(button) => self.bindings.button(action) == Some(button),
            PhysicalControl::JoystickHatDirection(_) => false,
        };

        let swapped = self.bindings.rebind(action, control)?;
        if !unchanged {
            let mut released = vec![action];
            released.extend(swapped);
            self.reducer.release_actions(&released);
        }

        Ok(swapped)
    }

    pub fn set_key(
        &mut self,
        action: LogicalAction,
        key: KeyCode,
    ) -> Result<Option<LogicalAction>, InputError> {
        self.rebind(action, PhysicalControl::KeyboardKey(key))
    }

    pub fn set_joy_button(
        &mut self,
        action: LogicalAction,
        button: u8,
    ) -> Result<Option<LogicalAction>, InputError> {
        self.rebind(action, PhysicalControl::JoystickButton(button))
    }

    pub fn key(&self, action: LogicalAction) -> Option<KeyCode> {
        self.bindings.key(action)
    }

    pub fn joy_button(&self, action: LogicalAction) -> Option<u8> {
        self.bindings.button(action)
    }

    /// Readable name of the key bound to an action
    pub fn key_name(&self, action: LogicalAction) -> Option<String> {
        self.bindings.key_name(action)
    }

    pub fn joy_index(&self) -> i32 {
        self.bindings.joystick_index()
    }

    /// Switch the joystick whose events are accepted.
    /// Anything the previous device was holding is let go.
    pub fn set_joy_index(&mut self, index: i32) {
        if index == self.bindings.joystick_index() {
            return;
        }

        self.bindings.set_joystick_index(index);
        self.reducer.release_joystick();
        self.axes.reset();
        log::info!("Joystick {} selected", index);
    }

    pub fn x_axis(&self) -> i32 {
        self.bindings.x_axis()
    }

    pub fn set_x_axis(&mut self, axis: i32) {
        self.bindings.set_x_axis(axis);
    }

    pub fn y_axis(&self) -> i32 {
        self.bindings.y_axis()
    }

    pub fn set_y_axis(&mut self, axis: i32) {
        self.bindings.set_y_axis(axis);
    }

    pub fn threshold(&self) -> u16 {
        self.bindings.threshold()
    }

    pub fn set_threshold(&mut self, threshold: u16) {
        self.bindings.set_threshold(threshold);
    }

    /// Reload every binding from the defaults source.
    /// On error the current bindings are kept.
    pub fn restore_defaults(&mut self) -> Result<(), InputError> {
        let defaults = self.defaults.load_defaults()?;
        self.bindings.apply_defaults(&defaults)?;
        log::info!("Restored default key and joystick bindings");
        Ok(())
    }

    /// Reload only the keyboard bindings from the defaults source
    pub fn restore_default_keys(&mut self) -> Result<(), InputError> {
        let defaults = self.defaults.load_defaults()?;
        self.bindings.apply_key_defaults(&defaults.keys)?;
        log::info!("Restored default key bindings");
        Ok(())
    }

    /// Reload only the joystick bindings from the defaults source
    pub fn restore_default_joy_buttons(&mut self) -> Result<(), InputError> {
        let defaults = self.defaults.load_defaults()?;
        self.bindings.apply_joystick_defaults(&defaults.joystick)?;
        log::info!("Restored default joystick bindings");
        Ok(())
    }

    /// Whether joysticks may be initialized.
    /// This is a game option, not the platform subsystem state.
    pub fn joysticks_enabled(&self) -> bool {
        self.joysticks_enabled
    }

    pub fn set_joysticks_enabled(&mut self, enabled: bool) {
        self.joysticks_enabled = enabled;
    }

    /// Start accepting joystick events, unless joysticks are disabled.
    /// Returns whether joystick input is now active.
    pub fn initialize_joysticks(&mut self) -> bool {
        if !self.joysticks_enabled {
            log::info!("Joysticks disabled, skipping initialization");
            return false;
        }

        if !self.joysticks_initialized {
            self.joysticks_initialized = true;
            log::info!("Joystick {} active", self.bindings.joystick_index());
        }
        true
    }

    /// Stop accepting joystick events and forget hat, axis and button state
    pub fn deinitialize_joysticks(&mut self) {
        if self.joysticks_initialized {
            self.joysticks_initialized = false;
            self.reducer.release_joystick();
            self.axes.reset();
            log::info!("Joysticks deinitialized");
        }
    }

    pub fn joysticks_initialized(&self) -> bool {
        self.joysticks_initialized
    }
}

impl Default for InputEngine {
    fn default() -> Self {
        Self::with_builtin_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::input::config::{BindingDefaults, TomlDefaults};
    use crate::engine::input::event::{Directions, EventQueue};
    use std::io::Write;

    fn engine_with_joystick() -> InputEngine {
        let mut engine = InputEngine::with_builtin_defaults();
        assert!(engine.initialize_joysticks());
        engine
    }

    fn poll_with(engine: &mut InputEngine, events: &[RawEvent]) {
        let mut queue = EventQueue::new();
        queue.extend(events.iter().copied());
        engine.poll(&mut queue);
    }

    fn axis(axis: i32, value: i16) -> RawEvent {
        RawEvent::JoyAxis {
            joystick: 0,
            axis,
            value,
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = InputEngine::with_builtin_defaults();
        assert_eq!(engine.frame(), 0);
        assert_eq!(engine.key(LogicalAction::Confirm), Some(KeyCode::KeyF));
        assert!(engine.joysticks_enabled());
        assert!(!engine.joysticks_initialized());
    }

    #[test]
    fn test_confirm_scenario() {
        let mut engine = InputEngine::with_builtin_defaults();
        let confirm_key = engine.key(LogicalAction::Confirm).unwrap();

        poll_with(&mut engine, &[RawEvent::KeyDown(confirm_key)]);
        assert!(engine.press(LogicalAction::Confirm));
        assert!(engine.state(LogicalAction::Confirm));

        poll_with(&mut engine, &[]);
        assert!(!engine.press(LogicalAction::Confirm));
        assert!(engine.state(LogicalAction::Confirm));

        poll_with(&mut engine, &[RawEvent::KeyUp(confirm_key)]);
        assert!(engine.release(LogicalAction::Confirm));
        assert!(!engine.state(LogicalAction::Confirm));

        assert_eq!(engine.frame(), 3);
    }

    #[test]
    fn test_rebind_affects_next_poll_only() {
        let mut engine = InputEngine::with_builtin_defaults();
        poll_with(&mut engine, &[RawEvent::KeyDown(KeyCode::KeyF)]);
        assert!(engine.press(LogicalAction::Confirm));

        // Snapshot is untouched by the rebind
        engine.set_key(LogicalAction::Cancel, KeyCode::KeyF).unwrap();
        assert!(engine.press(LogicalAction::Confirm));
        assert!(!engine.state(LogicalAction::Cancel));

        poll_with(&mut engine, &[RawEvent::KeyDown(KeyCode::KeyD)]);
        // D now belongs to Confirm after the swap
        assert_eq!(engine.key(LogicalAction::Confirm), Some(KeyCode::KeyD));
        assert!(engine.state(LogicalAction::Confirm));
    }

    #[test]
    fn test_swap_through_engine() {
        let mut engine = InputEngine::with_builtin_defaults();
        let x = engine.key(LogicalAction::Menu).unwrap();
        let y = engine.key(LogicalAction::Minimap).unwrap();

        let swapped = engine.set_key(LogicalAction::Menu, y).unwrap();
        assert_eq!(swapped, Some(LogicalAction::Minimap));
        assert_eq!(engine.key(LogicalAction::Menu), Some(y));
        assert_eq!(engine.key(LogicalAction::Minimap), Some(x));
    }

    #[test]
    fn test_events_queued_after_poll_wait_for_next_frame() {
        let mut engine = InputEngine::with_builtin_defaults();
        let mut queue = EventQueue::new();

        queue.push(RawEvent::KeyDown(KeyCode::ArrowLeft));
        engine.poll(&mut queue);
        queue.push(RawEvent::KeyDown(KeyCode::ArrowRight));

        assert!(engine.press(LogicalAction::Left));
        assert!(!engine.state(LogicalAction::Right));

        engine.poll(&mut queue);
        assert!(engine.press(LogicalAction::Right));
        assert!(!engine.press(LogicalAction::Left));
    }

    #[test]
    fn test_up_contributors_each_toggle_held() {
        let mut engine = engine_with_joystick();
        engine.set_joy_button(LogicalAction::Up, 12).unwrap();

        let contributors: [(RawEvent, RawEvent); 4] = [
            (RawEvent::KeyDown(KeyCode::ArrowUp), RawEvent::KeyUp(KeyCode::ArrowUp)),
            (
                RawEvent::JoyButtonDown {
                    joystick: 0,
                    button: 12,
                },
                RawEvent::JoyButtonUp {
                    joystick: 0,
                    button: 12,
                },
            ),
            (
                RawEvent::JoyHat {
                    joystick: 0,
                    hat: 0,
                    position: Directions::UP,
                },
                RawEvent::JoyHat {
                    joystick: 0,
                    hat: 0,
                    position: Directions::CENTERED,
                },
            ),
            (axis(1, -20000), axis(1, 0)),
        ];

        for (on, off) in contributors {
            poll_with(&mut engine, &[on]);
            assert!(engine.state(LogicalAction::Up), "{:?} should hold Up", on);
            assert!(engine.press(LogicalAction::Up));

            poll_with(&mut engine, &[off]);
            assert!(!engine.state(LogicalAction::Up), "{:?} should free Up", off);
            assert!(engine.release(LogicalAction::Up));
        }
    }

    #[test]
    fn test_axis_directions_and_debounce() {
        let mut engine = engine_with_joystick();
        engine.set_threshold(16000);

        poll_with(&mut engine, &[axis(0, 20000)]);
        assert!(engine.press(LogicalAction::Right));
        assert_eq!(engine.last_axis_moved(), Some(0));

        engine.reset_last_axis_moved();
        poll_with(&mut engine, &[axis(0, 25000), axis(0, 30000)]);
        assert!(engine.state(LogicalAction::Right));
        assert!(!engine.press(LogicalAction::Right));
        assert_eq!(engine.last_axis_moved(), None);

        poll_with(&mut engine, &[axis(0, -30000)]);
        assert!(engine.release(LogicalAction::Right));
        assert!(engine.press(LogicalAction::Left));
    }

    #[test]
    fn test_unbound_axis_index_is_inert() {
        let mut engine = engine_with_joystick();
        engine.set_x_axis(40);

        // Axis 0 still tracks, but no longer drives Left/Right
        poll_with(&mut engine, &[axis(0, 30000)]);
        assert!(!engine.state(LogicalAction::Right));
        assert_eq!(engine.last_axis_moved(), Some(0));
    }

    #[test]
    fn test_joystick_events_need_initialization() {
        let mut engine = InputEngine::with_builtin_defaults();
        poll_with(
            &mut engine,
            &[RawEvent::JoyButtonDown {
                joystick: 0,
                button: 0,
            }],
        );
        assert!(!engine.state(LogicalAction::Confirm));
        assert!(!engine.any_joystick_button_press());
    }

    #[test]
    fn test_disabled_joysticks_are_not_initialized() {
        let mut engine = InputEngine::with_builtin_defaults();
        engine.set_joysticks_enabled(false);
        assert!(!engine.initialize_joysticks());
        assert!(!engine.joysticks_initialized());
    }

    #[test]
    fn test_joystick_index_selects_device() {
        let mut engine = engine_with_joystick();
        engine.set_joy_index(1);

        poll_with(
            &mut engine,
            &[
                RawEvent::JoyButtonDown {
                    joystick: 0,
                    button: 0,
                },
                RawEvent::JoyButtonDown {
                    joystick: 1,
                    button: 1,
                },
            ],
        );
        assert!(!engine.state(LogicalAction::Confirm));
        assert!(engine.state(LogicalAction::Cancel));
    }

    #[test]
    fn test_deinitialize_clears_hat_and_axes() {
        let mut engine = engine_with_joystick();
        poll_with(
            &mut engine,
            &[
                RawEvent::JoyHat {
                    joystick: 0,
                    hat: 0,
                    position: Directions::LEFT,
                },
                axis(1, 30000),
            ],
        );
        assert!(engine.state(LogicalAction::Left));
        assert!(engine.state(LogicalAction::Down));

        engine.deinitialize_joysticks();
        poll_with(&mut engine, &[]);
        assert!(engine.release(LogicalAction::Left));
        assert!(engine.release(LogicalAction::Down));
        assert_eq!(engine.last_axis_moved(), None);
    }

    #[test]
    fn test_help_press() {
        let mut engine = InputEngine::with_builtin_defaults();
        poll_with(&mut engine, &[RawEvent::KeyDown(KeyCode::F1)]);
        assert!(engine.press(LogicalAction::Help));
        assert_eq!(engine.key_name(LogicalAction::Help).as_deref(), Some("F1"));
    }

    #[test]
    fn test_window_close_quits() {
        let mut engine = InputEngine::with_builtin_defaults();
        poll_with(&mut engine, &[RawEvent::WindowClosed]);
        assert!(engine.press(LogicalAction::Quit));

        poll_with(&mut engine, &[]);
        assert!(!engine.press(LogicalAction::Quit));
        assert!(!engine.release(LogicalAction::Quit));
    }

    #[test]
    fn test_restore_defaults_after_rebind() {
        let mut engine = InputEngine::with_builtin_defaults();
        engine.set_key(LogicalAction::Up, KeyCode::KeyW).unwrap();
        engine.set_threshold(1);

        engine.restore_defaults().unwrap();
        assert_eq!(engine.key(LogicalAction::Up), Some(KeyCode::ArrowUp));
        assert_eq!(engine.threshold(), 8192);
    }

    #[test]
    fn test_restore_keys_leaves_joystick_alone() {
        let mut engine = InputEngine::with_builtin_defaults();
        engine.set_key(LogicalAction::Up, KeyCode::KeyW).unwrap();
        engine.set_joy_button(LogicalAction::Confirm, 15).unwrap();

        engine.restore_default_keys().unwrap();
        assert_eq!(engine.key(LogicalAction::Up), Some(KeyCode::ArrowUp));
        assert_eq!(engine.joy_button(LogicalAction::Confirm), Some(15));

        engine.restore_default_joy_buttons().unwrap();
        assert_eq!(engine.joy_button(LogicalAction::Confirm), Some(0));
    }

    #[test]
    fn test_missing_defaults_file_keeps_bindings() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.toml");
        std::fs::write(&path, BindingDefaults::builtin().to_toml_string().unwrap()).unwrap();

        let mut engine = InputEngine::new(Box::new(TomlDefaults::new(&path)));
        assert_eq!(engine.key(LogicalAction::Pause), Some(KeyCode::Space));
        engine.set_key(LogicalAction::Pause, KeyCode::KeyP).unwrap();

        std::fs::remove_file(&path).unwrap();
        assert!(engine.restore_defaults().is_err());
        assert!(engine.restore_default_keys().is_err());
        assert_eq!(engine.key(LogicalAction::Pause), Some(KeyCode::KeyP));
    }

    #[test]
    fn test_malformed_defaults_keep_bindings() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[keys]\nup = 12\n").unwrap();

        let mut engine = InputEngine::new(Box::new(TomlDefaults::new(file.path())));
        // Nothing loaded at startup, only the permanent keys work
        assert_eq!(engine.key(LogicalAction::Up), None);
        assert_eq!(engine.key(LogicalAction::Quit), Some(KeyCode::Escape));

        assert!(matches!(
            engine.restore_default_joy_buttons(),
            Err(InputError::MalformedDefaults(_))
        ));
    }

    #[test]
    fn test_edge_consistency_over_random_frames() {
        let mut engine = engine_with_joystick();
        let script: Vec<Vec<RawEvent>> = vec![
            vec![RawEvent::KeyDown(KeyCode::ArrowUp), axis(0, -20000)],
            vec![RawEvent::KeyDown(KeyCode::Space), RawEvent::KeyUp(KeyCode::ArrowUp)],
            vec![axis(0, 0), RawEvent::KeyUp(KeyCode::Space)],
            vec![
                RawEvent::JoyButtonDown {
                    joystick: 0,
                    button: 2,
                },
                RawEvent::WindowClosed,
            ],
            vec![RawEvent::JoyButtonUp {
                joystick: 0,
                button: 2,
            }],
        ];

        let mut previous = engine.snapshot().clone();
        for events in script {
            poll_with(&mut engine, &events);
            let current = engine.snapshot();

            assert!(current.pressed().is_disjoint(current.released()));
            assert!(current.pressed().is_subset(current.held()));
            for action in current.released() {
                assert!(previous.state(*action));
                assert!(!current.state(*action));
                assert!(!action.is_press_only());
            }
            previous = current.clone();
        }
    }

    #[test]
    fn test_switching_joystick_releases_old_device() {
        let mut engine = engine_with_joystick();
        poll_with(
            &mut engine,
            &[
                axis(0, -30000),
                RawEvent::JoyButtonDown {
                    joystick: 0,
                    button: 1,
                },
                RawEvent::JoyHat {
                    joystick: 0,
                    hat: 0,
                    position: Directions::UP,
                },
            ],
        );
        assert!(engine.state(LogicalAction::Left));
        assert!(engine.state(LogicalAction::Cancel));
        assert!(engine.state(LogicalAction::Up));

        engine.set_joy_index(1);
        // The old device's own release events are now filtered out
        poll_with(
            &mut engine,
            &[
                axis(0, 0),
                RawEvent::JoyButtonUp {
                    joystick: 0,
                    button: 1,
                },
            ],
        );
        assert!(engine.release(LogicalAction::Left));
        assert!(engine.release(LogicalAction::Cancel));
        assert!(engine.release(LogicalAction::Up));

        poll_with(&mut engine, &[]);
        assert!(engine.snapshot().held().is_empty());
        assert_eq!(engine.last_axis_moved(), None);
    }

    #[test]
    fn test_selecting_same_joystick_keeps_state() {
        let mut engine = engine_with_joystick();
        poll_with(
            &mut engine,
            &[RawEvent::JoyButtonDown {
                joystick: 0,
                button: 2,
            }],
        );

        engine.set_joy_index(0);
        poll_with(&mut engine, &[]);
        assert!(engine.state(LogicalAction::Menu));
    }

    #[test]
    fn test_rebind_while_held_does_not_stick() {
        let mut engine = InputEngine::with_builtin_defaults();
        poll_with(&mut engine, &[RawEvent::KeyDown(KeyCode::KeyF)]);
        assert!(engine.state(LogicalAction::Confirm));

        // Confirm takes D, Cancel gets F while F is still down
        engine.set_key(LogicalAction::Confirm, KeyCode::KeyD).unwrap();
        poll_with(&mut engine, &[]);
        assert!(engine.release(LogicalAction::Confirm));

        poll_with(&mut engine, &[RawEvent::KeyUp(KeyCode::KeyF)]);
        assert!(!engine.state(LogicalAction::Confirm));
        assert!(!engine.state(LogicalAction::Cancel));
    }

    #[test]
    fn test_rebind_to_current_key_keeps_it_held() {
        let mut engine = InputEngine::with_builtin_defaults();
        poll_with(&mut engine, &[RawEvent::KeyDown(KeyCode::KeyF)]);

        engine.set_key(LogicalAction::Confirm, KeyCode::KeyF).unwrap();
        poll_with(&mut engine, &[]);
        assert!(engine.state(LogicalAction::Confirm));
        assert!(!engine.release(LogicalAction::Confirm));
    }
}
