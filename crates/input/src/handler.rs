//! Held-key tracking for camera movement.
//!
//! Movement is continuous while a direction key is held, but many terminals
//! never report key releases. Without release events a hold expires after a
//! timeout unless refreshed by the terminal's auto-repeat.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::map::{action_for_key, direction_for_key, Direction};
use crate::types::{CameraAction, MoveInput};

/// Upper bound on actions queued between two updates.
pub const MAX_PENDING_ACTIONS: usize = 16;

// Must outlast the initial auto-repeat delay of common terminals (~500ms),
// otherwise a held key flickers off before the first repeat arrives.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 550;

/// Tracks held movement keys and queues discrete actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    /// Milliseconds since the last press/repeat, per held direction.
    held: [Option<u32>; 4],
    release_events: bool,
    key_release_timeout_ms: u32,
    pending: ArrayVec<CameraAction, MAX_PENDING_ACTIONS>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self {
            held: [None; 4],
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            pending: ArrayVec::new(),
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Declare that the terminal reports key releases, disabling the timeout.
    pub fn with_release_events(mut self, release_events: bool) -> Self {
        self.release_events = release_events;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Handle a key press. Returns the action queued, if any.
    ///
    /// Actions beyond [`MAX_PENDING_ACTIONS`] per update are dropped.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<CameraAction> {
        if let Some(dir) = direction_for_key(code) {
            self.held[dir.index()] = Some(0);
            return None;
        }
        let action = action_for_key(code)?;
        self.pending.try_push(action).ok()?;
        Some(action)
    }

    /// Auto-repeat keeps a held direction alive; repeats never re-trigger
    /// discrete actions.
    pub fn handle_key_repeat(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_key(code) {
            self.held[dir.index()] = Some(0);
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(dir) = direction_for_key(code) {
            self.held[dir.index()] = None;
        }
    }

    pub fn is_held(&self, dir: Direction) -> bool {
        self.held[dir.index()].is_some()
    }

    /// Advance time and return the movement input for this step.
    ///
    /// Opposite directions held together cancel out.
    pub fn update(&mut self, elapsed_ms: u32) -> MoveInput {
        if !self.release_events {
            for slot in self.held.iter_mut() {
                if let Some(age) = slot {
                    *age = age.saturating_add(elapsed_ms);
                    if *age > self.key_release_timeout_ms {
                        *slot = None;
                    }
                }
            }
        }

        let axis = |neg: Direction, pos: Direction| -> i8 {
            i8::from(self.is_held(pos)) - i8::from(self.is_held(neg))
        };
        MoveInput::new(
            axis(Direction::Left, Direction::Right),
            axis(Direction::Up, Direction::Down),
        )
    }

    /// Take the actions queued since the last call, in press order.
    pub fn drain_actions(&mut self) -> ArrayVec<CameraAction, MAX_PENDING_ACTIONS> {
        std::mem::take(&mut self.pending)
    }

    /// Forget held keys and queued actions, e.g. when the terminal loses
    /// focus.
    pub fn reset(&mut self) {
        self.held = [None; 4];
        self.pending.clear();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_direction_moves_until_release() {
        let mut ih = InputHandler::new().with_release_events(true);
        assert_eq!(ih.handle_key_press(KeyCode::Char('d')), None);

        assert_eq!(ih.update(16), MoveInput::new(1, 0));
        assert_eq!(ih.update(10_000), MoveInput::new(1, 0));

        ih.handle_key_release(KeyCode::Char('d'));
        assert_eq!(ih.update(16), MoveInput::NONE);
    }

    #[test]
    fn test_diagonal_and_opposite_keys() {
        let mut ih = InputHandler::new().with_release_events(true);
        ih.handle_key_press(KeyCode::Char('z'));
        ih.handle_key_press(KeyCode::Char('q'));
        assert_eq!(ih.update(16), MoveInput::new(-1, -1));

        ih.handle_key_press(KeyCode::Char('d'));
        assert_eq!(ih.update(16), MoveInput::new(0, -1));
    }

    #[test]
    fn test_auto_release_after_timeout_without_release_events() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Char('s'));

        assert_eq!(ih.update(50), MoveInput::new(0, 1));
        assert_eq!(ih.update(1), MoveInput::NONE);
        assert!(!ih.is_held(Direction::Down));
    }

    #[test]
    fn test_repeat_refreshes_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Char('a'));
        assert_eq!(ih.update(40), MoveInput::new(-1, 0));

        ih.handle_key_repeat(KeyCode::Char('a'));
        assert_eq!(ih.update(40), MoveInput::new(-1, 0));
        assert_eq!(ih.update(11), MoveInput::NONE);
    }

    #[test]
    fn test_non_movement_key_does_not_extend_hold() {
        let mut ih = InputHandler::new().with_key_release_timeout_ms(50);
        ih.handle_key_press(KeyCode::Char('a'));
        assert_eq!(ih.update(40), MoveInput::new(-1, 0));

        assert_eq!(ih.handle_key_press(KeyCode::Up), Some(CameraAction::ZoomIn));
        assert_eq!(ih.update(11), MoveInput::NONE);
    }

    #[test]
    fn test_actions_are_queued_in_order_and_drained_once() {
        let mut ih = InputHandler::new();
        ih.handle_key_press(KeyCode::Up);
        ih.handle_key_press(KeyCode::Left);
        ih.handle_key_repeat(KeyCode::Up);

        let actions = ih.drain_actions();
        assert_eq!(
            actions.as_slice(),
            &[CameraAction::ZoomIn, CameraAction::SpeedDown]
        );
        assert!(ih.drain_actions().is_empty());
    }

    #[test]
    fn test_action_queue_is_bounded() {
        let mut ih = InputHandler::new();
        for _ in 0..MAX_PENDING_ACTIONS {
            assert!(ih.handle_key_press(KeyCode::Up).is_some());
        }
        assert_eq!(ih.handle_key_press(KeyCode::Up), None);
        assert_eq!(ih.drain_actions().len(), MAX_PENDING_ACTIONS);
    }

    #[test]
    fn test_reset_releases_everything() {
        let mut ih = InputHandler::new().with_release_events(true);
        ih.handle_key_press(KeyCode::Char('w'));
        ih.handle_key_press(KeyCode::F(11));

        ih.reset();
        assert_eq!(ih.update(16), MoveInput::NONE);
        assert!(ih.drain_actions().is_empty());
    }

    #[test]
    fn test_default_key_release_timeout_is_non_zero() {
        assert!(InputHandler::new().key_release_timeout_ms() > 0);
    }
}
