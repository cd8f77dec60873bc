//! Discrete units of sort progress.

use serde::{Deserialize, Serialize};

/// Visual state a [`Step::Highlight`] applies to one or two slots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "snake_case")]
pub enum HighlightState {
    /// Slots are being compared or moved.
    Comparing,
    /// Slots hold their final value.
    Sorted,
    /// Slots are at rest.
    #[default]
    Idle,
}

/// One discrete, typed unit of sort progress.
///
/// Only [`Step::Swap`] and [`Step::ShiftInsert`] mutate the arrangement;
/// everything else is a purely visual change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "args", rename_all = "snake_case")]
pub enum Step {
    /// Indices under comparison.
    Compare(usize, usize),
    /// Visual state change for slot `first` and optionally slot `second`.
    Highlight {
        /// First slot.
        first: usize,
        /// Optional partner slot.
        second: Option<usize>,
        /// State to apply.
        state: HighlightState,
    },
    /// Exchange the slots at both indices.
    Swap(usize, usize),
    /// Remove the slot at `from`, shift the slots in between by one and
    /// place the removed slot (holding `key`) at `to`.
    ShiftInsert {
        /// Slot the key is taken from.
        from: usize,
        /// Slot the key lands in.
        to: usize,
        /// Value carried by the moving slot.
        key: i64,
    },
    /// Terminal visual marker for one slot.
    MarkSorted(usize),
}

impl Step {
    /// Highlight a pair of slots.
    #[must_use]
    pub fn highlight_pair(
        first: usize,
        second: usize,
        state: HighlightState,
    ) -> Self {
        Self::Highlight {
            first,
            second: Some(second),
            state,
        }
    }

    /// Highlight a single slot.
    #[must_use]
    pub fn highlight_one(first: usize, state: HighlightState) -> Self {
        Self::Highlight {
            first,
            second: None,
            state,
        }
    }

    /// Whether applying this step changes which element sits at which index.
    #[must_use]
    pub fn mutates_arrangement(&self) -> bool {
        matches!(self, Self::Swap(..) | Self::ShiftInsert { .. })
    }

    /// Short name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compare(..) => "compare",
            Self::Highlight { .. } => "highlight",
            Self::Swap(..) => "swap",
            Self::ShiftInsert { .. } => "shift_insert",
            Self::MarkSorted(_) => "mark_sorted",
        }
    }
}
