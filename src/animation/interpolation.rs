//! Bounded-speed "move toward target" law shared by all element motion.

use glam::{BVec3, Vec3};

/// Distance below which a position counts as having reached its target.
pub const DEFAULT_EPSILON: f32 = 1e-3;

/// Move `current` toward `target` by at most `max_delta`, never overshooting.
#[inline]
#[must_use]
pub fn move_towards(current: Vec3, target: Vec3, max_delta: f32) -> Vec3 {
    let delta = target - current;
    let distance = delta.length();
    if distance <= max_delta || distance == 0.0 {
        return target;
    }
    current + delta / distance * max_delta.max(0.0)
}

/// One interpolation step: travel at `max_speed` units/s for `elapsed`
/// seconds toward `target`.
#[inline]
#[must_use]
pub fn interpolate(
    current: Vec3,
    target: Vec3,
    max_speed: f32,
    elapsed: f32,
) -> Vec3 {
    move_towards(current, target, max_speed * elapsed.max(0.0))
}

/// Which axes of a waypoint target apply. Unmasked axes keep the value the
/// element had when the waypoint started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisMask {
    /// Apply the X component.
    pub x: bool,
    /// Apply the Y component.
    pub y: bool,
    /// Apply the Z component.
    pub z: bool,
}

impl AxisMask {
    /// All three axes.
    pub const ALL: Self = Self::new(true, true, true);
    /// Vertical only (lift / lower).
    pub const VERTICAL: Self = Self::new(false, true, false);
    /// Horizontal plane only (translate along the surface).
    pub const HORIZONTAL: Self = Self::new(true, false, true);

    /// Mask from per-axis flags.
    #[must_use]
    pub const fn new(x: bool, y: bool, z: bool) -> Self {
        Self { x, y, z }
    }

    /// Combine `target` (masked axes) with `current` (the rest).
    #[inline]
    #[must_use]
    pub fn resolve(self, current: Vec3, target: Vec3) -> Vec3 {
        Vec3::select(BVec3::new(self.x, self.y, self.z), target, current)
    }
}

impl Default for AxisMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// One bounded-speed sub-move within a multi-phase transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Waypoint {
    /// Target position; only masked axes are used.
    pub target: Vec3,
    /// Axes of `target` that apply.
    pub mask: AxisMask,
}

impl Waypoint {
    /// Waypoint using all axes of `target`.
    #[must_use]
    pub fn to(target: Vec3) -> Self {
        Self {
            target,
            mask: AxisMask::ALL,
        }
    }

    /// Waypoint using only the masked axes of `target`.
    #[must_use]
    pub fn masked(target: Vec3, mask: AxisMask) -> Self {
        Self { target, mask }
    }

    /// Concrete target when starting from `current`.
    #[inline]
    #[must_use]
    pub fn resolve(&self, current: Vec3) -> Vec3 {
        self.mask.resolve(current, self.target)
    }
}
