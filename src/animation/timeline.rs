//! Motion timeline for the element moves of one step.
//!
//! The timeline tracks every element in flight, advances them together and
//! exposes the interpolated positions of the last update. Buffers are reused
//! across steps to avoid allocating in the tick loop.

use glam::Vec3;

use super::motion::Motion;
use super::path::MotionPath;
use crate::binding::ElementId;

/// Speed and tolerance shared by every motion on a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionConfig {
    /// Travel speed in world units per second. Default: 12.0
    pub speed: f32,
    /// Arrival tolerance. Default: 1e-3
    pub epsilon: f32,
    /// When false, every path snaps to its end on the first tick. A
    /// non-positive speed snaps as well.
    pub enabled: bool,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            speed: 12.0,
            epsilon: super::interpolation::DEFAULT_EPSILON,
            enabled: true,
        }
    }
}

/// An element and the motion moving it.
#[derive(Debug, Clone)]
pub struct ElementMotion {
    /// Element being moved.
    pub element: ElementId,
    /// Its interpolation state.
    pub motion: Motion,
}

/// Concurrent element motions belonging to a single step.
#[derive(Debug)]
pub struct MotionTimeline {
    active: Vec<ElementMotion>,
    /// Motion configuration.
    pub config: MotionConfig,
    /// Positions produced by the last `update`/`skip`.
    interpolation_buffer: Vec<(ElementId, Vec3)>,
}

impl MotionTimeline {
    /// Empty timeline.
    #[must_use]
    pub fn new(config: MotionConfig) -> Self {
        Self {
            active: Vec::with_capacity(4),
            config,
            interpolation_buffer: Vec::with_capacity(4),
        }
    }

    /// Start moving `element` from `start` along `path`.
    pub fn add(&mut self, element: ElementId, start: Vec3, path: MotionPath) {
        let path = if self.config.enabled && self.config.speed > 0.0 {
            path
        } else {
            MotionPath::snap(path.end_position(start))
        };
        let motion =
            Motion::new(start, path, self.config.speed, self.config.epsilon);
        self.active.push(ElementMotion { element, motion });
    }

    /// Advance every motion by `elapsed` seconds.
    ///
    /// Returns `true` while any motion is still in flight.
    pub fn update(&mut self, elapsed: f32) -> bool {
        self.interpolation_buffer.clear();
        for entry in &mut self.active {
            let position = entry.motion.tick(elapsed);
            self.interpolation_buffer.push((entry.element, position));
        }
        self.active.retain(|entry| !entry.motion.is_finished());
        !self.active.is_empty()
    }

    /// Positions from the last update.
    #[inline]
    #[must_use]
    pub fn get_interpolated(&self) -> &[(ElementId, Vec3)] {
        &self.interpolation_buffer
    }

    /// Jump every motion to its end position.
    pub fn skip(&mut self) {
        self.interpolation_buffer.clear();
        for entry in &mut self.active {
            let position = entry.motion.finish();
            self.interpolation_buffer.push((entry.element, position));
        }
        self.active.clear();
    }

    /// Drop all motions where they stand.
    pub fn cancel(&mut self) {
        self.active.clear();
        self.interpolation_buffer.clear();
    }

    /// Whether any motion is in flight.
    #[inline]
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.active.is_empty()
    }

    /// Number of motions in flight.
    #[inline]
    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Default for MotionTimeline {
    fn default() -> Self {
        Self::new(MotionConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slide(timeline: &mut MotionTimeline, id: u32, to_x: f32) {
        timeline.add(
            ElementId(id),
            Vec3::ZERO,
            MotionPath::slide(Vec3::new(to_x, 0.0, 0.0)),
        );
    }

    #[test]
    fn timeline_new_is_idle() {
        let timeline = MotionTimeline::default();
        assert!(!timeline.is_animating());
        assert!(timeline.get_interpolated().is_empty());
    }

    #[test]
    fn update_lifecycle() {
        let mut timeline = MotionTimeline::new(MotionConfig {
            speed: 1.0,
            ..MotionConfig::default()
        });
        slide(&mut timeline, 0, 1.0);
        slide(&mut timeline, 1, 2.0);
        assert_eq!(timeline.active_count(), 2);

        assert!(timeline.update(1.0));
        assert_eq!(timeline.active_count(), 1);
        assert_eq!(timeline.get_interpolated().len(), 2);

        assert!(!timeline.update(1.0));
        assert_eq!(
            timeline.get_interpolated(),
            &[(ElementId(1), Vec3::new(2.0, 0.0, 0.0))]
        );
    }

    #[test]
    fn skip_reports_final_positions() {
        let mut timeline = MotionTimeline::new(MotionConfig {
            speed: 0.01,
            ..MotionConfig::default()
        });
        slide(&mut timeline, 3, 5.0);
        timeline.skip();
        assert!(!timeline.is_animating());
        assert_eq!(
            timeline.get_interpolated(),
            &[(ElementId(3), Vec3::new(5.0, 0.0, 0.0))]
        );
    }

    #[test]
    fn cancel_drops_everything() {
        let mut timeline = MotionTimeline::default();
        slide(&mut timeline, 0, 100.0);
        let _ = timeline.update(0.1);
        timeline.cancel();
        assert!(!timeline.is_animating());
        assert!(timeline.get_interpolated().is_empty());
    }

    #[test]
    fn disabled_config_snaps() {
        let mut timeline = MotionTimeline::new(MotionConfig {
            enabled: false,
            ..MotionConfig::default()
        });
        slide(&mut timeline, 0, 100.0);
        assert!(!timeline.update(0.0));
        assert_eq!(
            timeline.get_interpolated(),
            &[(ElementId(0), Vec3::new(100.0, 0.0, 0.0))]
        );
    }
}
