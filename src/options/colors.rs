use serde::{Deserialize, Serialize};

use crate::binding::Color;
use crate::sort::HighlightState;

/// Color palette for value elements and index labels.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ColorOptions {
    /// RGB text color of a value at rest.
    pub value_idle: Color,
    /// RGB text color of a value being compared or moved.
    pub value_comparing: Color,
    /// RGB text color of an index label at rest.
    pub index_idle: Color,
    /// RGB text color of an index label under comparison.
    pub index_comparing: Color,
    /// RGB text color of a value in its final position.
    pub sorted: Color,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            value_idle: [1.0, 1.0, 1.0],
            value_comparing: [1.0, 0.92, 0.016],
            index_idle: [0.0, 0.0, 0.0],
            index_comparing: [1.0, 0.0, 0.0],
            sorted: [0.0, 1.0, 0.0],
        }
    }
}

impl ColorOptions {
    /// Color for a value element in `state`.
    #[must_use]
    pub fn value_color(&self, state: HighlightState) -> Color {
        match state {
            HighlightState::Comparing => self.value_comparing,
            HighlightState::Sorted => self.sorted,
            HighlightState::Idle => self.value_idle,
        }
    }

    /// Color for an index label in `state`. Labels have no sorted color of
    /// their own and fall back to idle.
    #[must_use]
    pub fn label_color(&self, state: HighlightState) -> Color {
        match state {
            HighlightState::Comparing => self.index_comparing,
            HighlightState::Sorted | HighlightState::Idle => self.index_idle,
        }
    }
}
