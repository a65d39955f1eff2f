//! Flat-plane geometry shared by basic attacks, skills and the AI.
//!
//! Everything lives on the x/z ground plane; height is derived by the
//! renderer and never participates in hit tests. Headings follow the
//! `atan2(dx, dz)` convention so that a heading of 0 faces +z.

use serde::{Deserialize, Serialize};

/// Targets closer than this are always inside a cone, whatever the facing.
pub const POINT_BLANK_RADIUS: f64 = 0.5;

/// A point on the ground plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub z: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Distance ignoring the vertical axis.
    pub fn flat_distance(&self, other: &Position) -> f64 {
        (other.x - self.x).hypot(other.z - self.z)
    }

    /// Heading (radians) that faces from `self` towards `other`.
    pub fn heading_to(&self, other: &Position) -> f64 {
        (other.x - self.x).atan2(other.z - self.z)
    }

    /// Point `distance` units away along `heading`.
    pub fn offset(&self, heading: f64, distance: f64) -> Position {
        let (fx, fz) = forward(heading);
        Position::new(self.x + fx * distance, self.z + fz * distance)
    }

    /// Moves by a raw displacement.
    pub fn translate(&mut self, dx: f64, dz: f64) {
        self.x += dx;
        self.z += dz;
    }

    /// Moves straight towards `target` by at most `step` units.
    /// Returns the heading used, or `None` when already on top of the target.
    pub fn step_towards(&mut self, target: &Position, step: f64) -> Option<f64> {
        let dist = self.flat_distance(target);
        if dist <= f64::EPSILON {
            return None;
        }
        let heading = self.heading_to(target);
        if step >= dist {
            *self = *target;
        } else {
            let (fx, fz) = forward(heading);
            self.translate(fx * step, fz * step);
        }
        Some(heading)
    }
}

/// Unit vector for a heading.
pub fn forward(heading: f64) -> (f64, f64) {
    (heading.sin(), heading.cos())
}

/// Normalized direction from `from` to `to`, `None` if the points coincide.
pub fn direction(from: &Position, to: &Position) -> Option<(f64, f64)> {
    let dx = to.x - from.x;
    let dz = to.z - from.z;
    let len = dx.hypot(dz);
    if len <= f64::EPSILON {
        None
    } else {
        Some((dx / len, dz / len))
    }
}

/// Circle test: Euclidean flat distance within `radius`.
pub fn in_circle(center: &Position, target: &Position, radius: f64) -> bool {
    center.flat_distance(target) <= radius
}

/// Facing-cone test used by basic attacks and cone skills.
///
/// A target is hit when it is within `range` and the angle between the
/// facing vector and the direction to the target is at most `angle / 2`.
/// Anything inside [`POINT_BLANK_RADIUS`] is always hit.
pub fn in_cone(origin: &Position, heading: f64, target: &Position, range: f64, angle: f64) -> bool {
    let dist = origin.flat_distance(target);
    if dist > range {
        return false;
    }
    if dist < POINT_BLANK_RADIUS {
        return true;
    }
    let Some((dx, dz)) = direction(origin, target) else {
        return true;
    };
    let (fx, fz) = forward(heading);
    let dot = (dx * fx + dz * fz).clamp(-1.0, 1.0);
    dot.acos() <= angle / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_flat_distance() {
        let a = Position::new(0.0, 0.0);
        let b = Position::new(3.0, 4.0);
        assert!((a.flat_distance(&b) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_heading_zero_faces_positive_z() {
        let a = Position::ORIGIN;
        let b = Position::new(0.0, 10.0);
        assert!(a.heading_to(&b).abs() < 1e-9);
        let (fx, fz) = forward(0.0);
        assert!(fx.abs() < 1e-9 && (fz - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_step_towards_does_not_overshoot() {
        let mut p = Position::ORIGIN;
        let target = Position::new(1.0, 0.0);
        p.step_towards(&target, 5.0);
        assert_eq!(p, target);
    }

    #[test]
    fn test_step_towards_partial() {
        let mut p = Position::ORIGIN;
        p.step_towards(&Position::new(10.0, 0.0), 2.0);
        assert!((p.x - 2.0).abs() < 1e-9);
        assert!(p.z.abs() < 1e-9);
    }

    #[test]
    fn test_cone_front_and_back() {
        let origin = Position::ORIGIN;
        let front = Position::new(0.0, 2.0);
        let behind = Position::new(0.0, -2.0);
        assert!(in_cone(&origin, 0.0, &front, 3.5, PI / 2.0));
        assert!(!in_cone(&origin, 0.0, &behind, 3.5, PI / 2.0));
    }

    #[test]
    fn test_cone_point_blank_always_hits() {
        let origin = Position::ORIGIN;
        let behind = Position::new(0.0, -0.3);
        assert!(in_cone(&origin, 0.0, &behind, 3.5, PI / 4.0));
    }

    #[test]
    fn test_cone_respects_range() {
        let origin = Position::ORIGIN;
        let far = Position::new(0.0, 4.0);
        assert!(!in_cone(&origin, 0.0, &far, 3.5, PI));
    }

    #[test]
    fn test_cone_edge_of_angle() {
        let origin = Position::ORIGIN;
        // 45 degrees off-axis, cone of 90 degrees total
        let edge = Position::new(1.0, 1.0);
        assert!(in_cone(&origin, 0.0, &edge, 3.5, PI / 2.0 + 1e-6));
        assert!(!in_cone(&origin, 0.0, &edge, 3.5, PI / 3.0));
    }

    #[test]
    fn test_circle() {
        let c = Position::ORIGIN;
        assert!(in_circle(&c, &Position::new(3.5, 0.0), 3.5));
        assert!(!in_circle(&c, &Position::new(3.6, 0.0), 3.5));
    }

    #[test]
    fn test_direction_normalized() {
        let (dx, dz) = direction(&Position::ORIGIN, &Position::new(3.0, 4.0)).unwrap();
        assert!((dx.hypot(dz) - 1.0).abs() < 1e-9);
        assert!(direction(&Position::ORIGIN, &Position::ORIGIN).is_none());
    }
}
