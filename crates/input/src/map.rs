//! Key mapping from terminal events to camera input.

use crate::types::CameraAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A movement direction in world space (`y` grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// Map a key to a discrete camera action.
///
/// Arrow keys drive zoom (up/down) and speed (right/left), so they are not
/// movement keys.
pub fn action_for_key(code: KeyCode) -> Option<CameraAction> {
    match code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => Some(CameraAction::ZoomIn),
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('_') => Some(CameraAction::ZoomOut),
        KeyCode::Right => Some(CameraAction::SpeedUp),
        KeyCode::Left => Some(CameraAction::SpeedDown),
        KeyCode::F(11) => Some(CameraAction::ToggleFullscreen),
        _ => None,
    }
}

/// Map a key to a movement direction.
///
/// Both QWERTY (WASD) and AZERTY (ZQSD) layouts are accepted.
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' | 'z' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' | 'q' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        },
        _ => None,
    }
}

/// Check if key should quit.
///
/// `q` is a movement key on AZERTY layouts, so it does not quit.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_arrow_keys_drive_zoom_and_speed() {
        assert_eq!(action_for_key(KeyCode::Up), Some(CameraAction::ZoomIn));
        assert_eq!(action_for_key(KeyCode::Down), Some(CameraAction::ZoomOut));
        assert_eq!(action_for_key(KeyCode::Right), Some(CameraAction::SpeedUp));
        assert_eq!(action_for_key(KeyCode::Left), Some(CameraAction::SpeedDown));
        assert_eq!(
            action_for_key(KeyCode::F(11)),
            Some(CameraAction::ToggleFullscreen)
        );
        assert_eq!(direction_for_key(KeyCode::Up), None);
    }

    #[test]
    fn test_both_layouts_move() {
        assert_eq!(direction_for_key(KeyCode::Char('w')), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Char('Z')), Some(Direction::Up));
        assert_eq!(direction_for_key(KeyCode::Char('a')), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Char('q')), Some(Direction::Left));
        assert_eq!(direction_for_key(KeyCode::Char('S')), Some(Direction::Down));
        assert_eq!(direction_for_key(KeyCode::Char('d')), Some(Direction::Right));
        assert_eq!(direction_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
