//! A single element travelling along a [`MotionPath`].

use std::collections::VecDeque;

use glam::Vec3;

use super::interpolation::{move_towards, Waypoint};
use super::path::MotionPath;

/// Explicit interpolation state for one element, polled once per tick.
///
/// Waypoints complete strictly in order: the next one starts only after the
/// current position is within `epsilon` of the resolved target. Time left
/// over after finishing a waypoint carries into the next one within the same
/// tick.
#[derive(Debug, Clone)]
pub struct Motion {
    position: Vec3,
    waypoints: VecDeque<Waypoint>,
    /// Resolved target of the waypoint in progress.
    active: Option<Vec3>,
    speed: f32,
    epsilon: f32,
}

impl Motion {
    /// Start a motion at `start` following `path` at `speed` units/s.
    #[must_use]
    pub fn new(start: Vec3, path: MotionPath, speed: f32, epsilon: f32) -> Self {
        let speed = if path.instant {
            f32::INFINITY
        } else {
            speed.max(0.0)
        };
        let mut motion = Self {
            position: start,
            waypoints: path.waypoints.into(),
            active: None,
            speed,
            epsilon: epsilon.max(0.0),
        };
        motion.activate_next();
        motion
    }

    /// Current interpolated position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Whether every waypoint has been reached.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.active.is_none()
    }

    /// Number of waypoints not yet started (excluding the active one).
    #[must_use]
    pub fn remaining_waypoints(&self) -> usize {
        self.waypoints.len()
    }

    /// Advance by `elapsed` seconds and return the new position.
    pub fn tick(&mut self, elapsed: f32) -> Vec3 {
        let mut budget = elapsed.max(0.0);
        while let Some(target) = self.active {
            let distance = self.position.distance(target);
            let reach = if self.speed.is_infinite() {
                f32::INFINITY
            } else {
                self.speed * budget
            };
            if distance <= reach || distance <= self.epsilon {
                self.position = target;
                if self.speed.is_finite() && self.speed > 0.0 {
                    budget -= distance / self.speed;
                }
                self.activate_next();
                continue;
            }
            self.position = move_towards(self.position, target, reach);
            if self.position.distance(target) <= self.epsilon {
                self.position = target;
                self.activate_next();
            }
            break;
        }
        self.position
    }

    /// Jump to the end of the path.
    pub fn finish(&mut self) -> Vec3 {
        while let Some(target) = self.active {
            self.position = target;
            self.activate_next();
        }
        self.position
    }

    fn activate_next(&mut self) {
        self.active = self
            .waypoints
            .pop_front()
            .map(|waypoint| waypoint.resolve(self.position));
    }
}
