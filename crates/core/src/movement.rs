//! Per-step camera movement.

use glam::Vec2;

use crate::config::CameraConfig;
use crate::types::MoveInput;

/// Camera speed in world units per simulation step, kept inside a range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSpeed {
    value: f32,
    min: f32,
    max: f32,
}

impl CameraSpeed {
    pub fn new(value: f32, min: f32, max: f32) -> Self {
        let value = if value.is_finite() { value } else { min };
        Self {
            value: value.clamp(min, max),
            min,
            max,
        }
    }

    pub fn from_config(config: &CameraConfig) -> Self {
        Self::new(config.default_speed, config.min_speed, config.max_speed)
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Set the speed, clamped into range. Non-finite values are ignored.
    /// Returns whether it changed.
    pub fn set(&mut self, value: f32) -> bool {
        if !value.is_finite() {
            return false;
        }
        let clamped = value.clamp(self.min, self.max);
        let changed = clamped != self.value;
        self.value = clamped;
        changed
    }
}

/// World-space displacement for one step.
///
/// Diagonal input is normalized so moving diagonally is not faster than
/// moving along one axis.
pub fn movement_step(input: MoveInput, speed: f32) -> Vec2 {
    let dir = Vec2::new(f32::from(input.x.signum()), f32::from(input.y.signum()));
    dir.normalize_or_zero() * speed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_input_means_no_motion() {
        assert_eq!(movement_step(MoveInput::NONE, 7.5), Vec2::ZERO);
    }

    #[test]
    fn axis_input_moves_exactly_speed() {
        assert_eq!(movement_step(MoveInput::new(1, 0), 7.5), Vec2::new(7.5, 0.0));
        assert_eq!(movement_step(MoveInput::new(0, -1), 2.0), Vec2::new(0.0, -2.0));
    }

    #[test]
    fn diagonal_input_is_normalized() {
        let step = movement_step(MoveInput::new(-1, 1), 10.0);
        assert!((step.length() - 10.0).abs() < 1e-4);
        assert!((step.x + step.y).abs() < 1e-6);
    }

    #[test]
    fn speed_clamps_and_reports_change() {
        let mut speed = CameraSpeed::new(7.5, 1.0, 20.0);
        assert!(speed.set(50.0));
        assert_eq!(speed.get(), 20.0);
        assert!(!speed.set(21.0));
        assert!(speed.set(-3.0));
        assert_eq!(speed.get(), 1.0);
    }

    #[test]
    fn non_finite_speed_is_ignored() {
        let mut speed = CameraSpeed::new(7.5, 1.0, 20.0);
        assert!(!speed.set(f32::NAN));
        assert!(!speed.set(f32::INFINITY));
        assert_eq!(speed.get(), 7.5);

        assert_eq!(CameraSpeed::new(f32::NAN, 1.0, 20.0).get(), 1.0);
    }
}
