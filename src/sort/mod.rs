//! Sort algorithms expressed as replayable step sequences.
//!
//! A [`StepSequence`] is a pure function of its input values: iterating it
//! twice yields identical steps, and it never touches a rendering host.
//! Replaying its index-mutating steps against [`Arrangement::from_values`]
//! always ends in a sorted arrangement.

mod arrangement;
mod bubble;
mod insertion;
mod step;

use std::sync::Arc;

pub use arrangement::{ArraySlot, Arrangement};
pub use bubble::BubbleSteps;
pub use insertion::InsertionSteps;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use step::{HighlightState, Step};

/// Which sort to animate.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Default,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// Adjacent compare-and-swap, full passes.
    #[default]
    Bubble,
    /// Key walks left past larger neighbours.
    Insertion,
}

impl Algorithm {
    /// Parse a lowercase algorithm name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "bubble" => Some(Self::Bubble),
            "insertion" => Some(Self::Insertion),
            _ => None,
        }
    }

    /// The algorithm after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Bubble => Self::Insertion,
            Self::Insertion => Self::Bubble,
        }
    }

    /// Display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
        }
    }
}

/// Immutable, restartable description of one sort invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence {
    algorithm: Algorithm,
    values: Arc<[i64]>,
}

impl StepSequence {
    /// Sequence that sorts `values` with `algorithm`.
    #[must_use]
    pub fn new(algorithm: Algorithm, values: &[i64]) -> Self {
        Self {
            algorithm,
            values: values.into(),
        }
    }

    /// Algorithm this sequence runs.
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Input values, unsorted.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Fresh iterator from the first step.
    #[must_use]
    pub fn iter(&self) -> Steps {
        match self.algorithm {
            Algorithm::Bubble => Steps::Bubble(BubbleSteps::new(&self.values)),
            Algorithm::Insertion => {
                Steps::Insertion(InsertionSteps::new(&self.values))
            }
        }
    }
}

impl<'a> IntoIterator for &'a StepSequence {
    type Item = Step;
    type IntoIter = Steps;

    fn into_iter(self) -> Steps {
        self.iter()
    }
}

/// Lazy step iterator for either algorithm.
#[derive(Debug, Clone)]
pub enum Steps {
    /// Bubble sort steps.
    Bubble(BubbleSteps),
    /// Insertion sort steps.
    Insertion(InsertionSteps),
}

impl Steps {
    /// Outer pass the generator is currently in (1-based, 0 when there is
    /// nothing to sort).
    #[must_use]
    pub fn pass(&self) -> usize {
        match self {
            Self::Bubble(s) => s.pass(),
            Self::Insertion(s) => s.pass(),
        }
    }
}

impl Iterator for Steps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        match self {
            Self::Bubble(s) => s.next(),
            Self::Insertion(s) => s.next(),
        }
    }
}

/// Replay only the index-mutating steps of `sequence` against its input.
pub fn replay_values(
    sequence: &StepSequence,
) -> Result<Vec<i64>, crate::error::SortVizError> {
    let mut arrangement = Arrangement::from_values(sequence.values());
    for step in sequence {
        if step.mutates_arrangement() {
            arrangement.apply(&step)?;
        }
    }
    Ok(arrangement.values())
}
