//! World positions of slots on the detected surface.

use glam::Vec3;

use crate::options::LayoutOptions;

/// A row of `count` slots centred on the surface origin along +X.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotLayout {
    origin: Vec3,
    spacing: f32,
    value_offset: Vec3,
    label_offset: Vec3,
    count: usize,
}

impl SlotLayout {
    /// Layout for `count` slots around `origin` (the surface pose
    /// translation).
    #[must_use]
    pub fn new(origin: Vec3, count: usize, options: &LayoutOptions) -> Self {
        Self {
            origin,
            spacing: options.spacing,
            value_offset: Vec3::from_array(options.value_offset),
            label_offset: Vec3::from_array(options.label_offset),
            count,
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// Resting position of the value element in `slot`.
    #[must_use]
    pub fn slot_position(&self, slot: usize) -> Vec3 {
        self.row_point(slot) + self.value_offset
    }

    /// Position of the index label under `slot`.
    #[must_use]
    pub fn label_position(&self, slot: usize) -> Vec3 {
        self.row_point(slot) + self.label_offset
    }

    fn row_point(&self, slot: usize) -> Vec3 {
        let centre = self.count.saturating_sub(1) as f32 / 2.0;
        self.origin + Vec3::X * ((slot as f32 - centre) * self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> LayoutOptions {
        LayoutOptions {
            spacing: 2.0,
            value_offset: [0.0, 1.0, 0.0],
            label_offset: [0.0, 0.0, 0.5],
        }
    }

    #[test]
    fn row_is_centred_on_origin() {
        let layout = SlotLayout::new(Vec3::new(10.0, 0.0, 0.0), 3, &options());
        assert_eq!(layout.slot_position(0), Vec3::new(8.0, 1.0, 0.0));
        assert_eq!(layout.slot_position(1), Vec3::new(10.0, 1.0, 0.0));
        assert_eq!(layout.slot_position(2), Vec3::new(12.0, 1.0, 0.0));
    }

    #[test]
    fn labels_use_their_own_offset() {
        let layout = SlotLayout::new(Vec3::ZERO, 2, &options());
        assert_eq!(layout.label_position(0), Vec3::new(-1.0, 0.0, 0.5));
    }

    #[test]
    fn single_slot_sits_on_origin() {
        let layout = SlotLayout::new(Vec3::ONE, 1, &options());
        assert_eq!(layout.slot_position(0), Vec3::new(1.0, 2.0, 1.0));
    }
}
