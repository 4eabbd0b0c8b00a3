//! Continuous position in a room
//!
//! A robot occupies a continuous (x, y) point; the tile it stands on is
//! derived by flooring both coordinates. One step displaces the point
//! along a polar heading: dx = v*sin(angle), dy = v*cos(angle). The time
//! factor is always one step, so it never appears in the formula.

use serde::{Deserialize, Serialize};

/// A location in a two-dimensional room
///
/// # Example
/// ```
/// use mobility_simulator_core_rs::robot::Position;
///
/// let pos = Position::new(2.5, 2.5);
/// let next = pos.step(0.0, 1.0); // due "north": +1 on y
/// assert!((next.y() - 3.5).abs() < 1e-9);
/// assert_eq!(next.tile(), (2, 3));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    /// Create a position at (x, y)
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Get the x coordinate
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Get the y coordinate
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Compute the position after one step at the given heading and
    /// velocity.
    ///
    /// Heading is in degrees, measured clockwise from the +y axis
    /// (0 = up, 90 = right); velocity is distance per step.
    pub fn step(&self, angle_degrees: f64, velocity: f64) -> Position {
        let radians = angle_degrees.to_radians();
        let dx = velocity * radians.sin();
        let dy = velocity * radians.cos();
        Position::new(self.x + dx, self.y + dy)
    }

    /// The tile under this position (floored coordinates)
    pub fn tile(&self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_cardinal_steps() {
        let origin = Position::new(0.0, 0.0);

        let up = origin.step(0.0, 1.0);
        assert!(up.x().abs() < TOLERANCE && (up.y() - 1.0).abs() < TOLERANCE);

        let right = origin.step(90.0, 1.0);
        assert!((right.x() - 1.0).abs() < TOLERANCE && right.y().abs() < TOLERANCE);

        let down = origin.step(180.0, 1.0);
        assert!(down.x().abs() < TOLERANCE && (down.y() + 1.0).abs() < TOLERANCE);

        let left = origin.step(270.0, 1.0);
        assert!((left.x() + 1.0).abs() < TOLERANCE && left.y().abs() < TOLERANCE);
    }

    #[test]
    fn test_zero_velocity_is_identity() {
        let pos = Position::new(1.25, 3.75);
        let next = pos.step(137.0, 0.0);
        assert_eq!(next, pos);
    }

    #[test]
    fn test_tile_floors_toward_negative_infinity() {
        assert_eq!(Position::new(2.99, 0.01).tile(), (2, 0));
        assert_eq!(Position::new(-0.5, 1.0).tile(), (-1, 1));
    }
}
