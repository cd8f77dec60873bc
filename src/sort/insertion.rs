//! Insertion sort step generator.
//!
//! The key walks left one slot at a time: every displaced neighbour produces
//! an adjacent `ShiftInsert { from: j + 1, to: j }`, so the animation lifts,
//! translates and lowers one pair per comparison.

use std::collections::VecDeque;

use super::step::{HighlightState, Step};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// About to pick up the key at `outer`.
    PickKey,
    /// Walking the key left; `next` is the slot it will be compared with.
    Walk { key: i64, next: Option<usize> },
    /// Key placed; move on to the next outer index.
    Advance,
    /// All outer iterations done; only the sorted markers remain.
    Marking,
    Done,
}

/// Lazy insertion sort step iterator over an internal copy of the values.
#[derive(Debug, Clone)]
pub struct InsertionSteps {
    values: Vec<i64>,
    /// Outer index `i`, 1-based.
    outer: usize,
    phase: Phase,
    pending: VecDeque<Step>,
}

impl InsertionSteps {
    /// Iterator over the steps that insertion-sort `values`.
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            outer: 1,
            phase: if values.len() < 2 {
                Phase::Done
            } else {
                Phase::PickKey
            },
            pending: VecDeque::with_capacity(4),
        }
    }

    /// Current outer pass (1-based, equal to the outer index being
    /// inserted). Zero for inputs with nothing to sort.
    #[must_use]
    pub fn pass(&self) -> usize {
        if self.values.len() < 2 {
            0
        } else {
            self.outer.min(self.values.len() - 1)
        }
    }

    fn refill(&mut self) {
        match self.phase {
            Phase::PickKey => {
                let i = self.outer;
                self.pending
                    .push_back(Step::highlight_one(i, HighlightState::Comparing));
                self.phase = Phase::Walk {
                    key: self.values[i],
                    next: Some(i - 1),
                };
            }
            Phase::Walk { key, next } => self.walk(key, next),
            Phase::Advance => {
                self.outer += 1;
                self.phase = if self.outer >= self.values.len() {
                    Phase::Marking
                } else {
                    Phase::PickKey
                };
                self.refill();
            }
            Phase::Marking => {
                self.pending
                    .extend((0..self.values.len()).map(Step::MarkSorted));
                self.phase = Phase::Done;
            }
            Phase::Done => {}
        }
    }

    fn walk(&mut self, key: i64, next: Option<usize>) {
        if let Some(j) = next {
            self.pending.push_back(Step::Compare(j, j + 1));
            if self.values[j] > key {
                self.pending.push_back(Step::highlight_pair(
                    j,
                    j + 1,
                    HighlightState::Comparing,
                ));
                self.pending.push_back(Step::ShiftInsert {
                    from: j + 1,
                    to: j,
                    key,
                });
                self.values.swap(j, j + 1);
                self.pending
                    .push_back(Step::highlight_pair(j, j + 1, HighlightState::Idle));
                self.phase = Phase::Walk {
                    key,
                    next: j.checked_sub(1),
                };
                return;
            }
        }

        // Key rests one past the last displaced slot.
        let rest = next.map_or(0, |j| j + 1);
        self.pending
            .push_back(Step::highlight_one(rest, HighlightState::Idle));
        if rest != self.outer {
            self.pending
                .push_back(Step::highlight_one(self.outer, HighlightState::Idle));
        }
        self.phase = Phase::Advance;
    }
}

impl Iterator for InsertionSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front()
    }
}
