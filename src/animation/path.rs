//! Waypoint paths describing how an element travels between slots.

use glam::Vec3;

use super::interpolation::{AxisMask, Waypoint};

/// An ordered list of waypoints an element follows.
///
/// Consumers construct paths via preset constructors:
/// [`snap()`](Self::snap), [`slide()`](Self::slide) and
/// [`hop()`](Self::hop).
#[derive(Debug, Clone, PartialEq)]
pub struct MotionPath {
    /// Waypoints in travel order.
    pub waypoints: Vec<Waypoint>,
    /// Travel at unbounded speed.
    pub instant: bool,
}

impl MotionPath {
    /// Jump straight to `target` on the first tick.
    #[must_use]
    pub fn snap(target: Vec3) -> Self {
        Self {
            waypoints: vec![Waypoint::to(target)],
            instant: true,
        }
    }

    /// Straight-line move to `target`.
    #[must_use]
    pub fn slide(target: Vec3) -> Self {
        Self {
            waypoints: vec![Waypoint::to(target)],
            instant: false,
        }
    }

    /// Lift by `lift` above `start`, translate over `target`, then lower.
    #[must_use]
    pub fn hop(start: Vec3, target: Vec3, lift: f32) -> Self {
        let raised = Vec3::new(0.0, start.y.max(target.y) + lift, 0.0);
        Self {
            waypoints: vec![
                Waypoint::masked(raised, AxisMask::VERTICAL),
                Waypoint::masked(target, AxisMask::HORIZONTAL),
                Waypoint::masked(target, AxisMask::VERTICAL),
            ],
            instant: false,
        }
    }

    /// Position the path ends at when started from `start`.
    #[must_use]
    pub fn end_position(&self, start: Vec3) -> Vec3 {
        self.waypoints
            .iter()
            .fold(start, |pos, waypoint| waypoint.resolve(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hop_has_three_phases_and_lands_on_target() {
        let start = Vec3::new(0.0, 0.5, 1.0);
        let target = Vec3::new(2.0, 0.5, 1.0);
        let path = MotionPath::hop(start, target, 1.0);
        assert_eq!(path.waypoints.len(), 3);
        assert_eq!(path.waypoints[0].resolve(start), Vec3::new(0.0, 1.5, 1.0));
        assert_eq!(path.end_position(start), target);
    }

    #[test]
    fn slide_and_snap_end_on_target() {
        let target = Vec3::new(-1.0, 0.0, 4.0);
        assert_eq!(MotionPath::slide(target).end_position(Vec3::ZERO), target);
        let snap = MotionPath::snap(target);
        assert!(snap.instant);
        assert_eq!(snap.end_position(Vec3::ONE), target);
    }
}
