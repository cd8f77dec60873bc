//! Bubble sort step generator.
//!
//! Runs every outer pass in full: there is no early exit when a pass makes
//! no swaps, so the step count depends only on the input length and the
//! swaps performed.

use std::collections::VecDeque;

use super::step::{HighlightState, Step};

/// Lazy bubble sort step iterator over an internal copy of the values.
#[derive(Debug, Clone)]
pub struct BubbleSteps {
    values: Vec<i64>,
    /// Outer pass, 1-based. `n` once all passes are done.
    pass: usize,
    /// Inner index, 1-based.
    inner: usize,
    pending: VecDeque<Step>,
    finished: bool,
}

impl BubbleSteps {
    /// Iterator over the steps that bubble-sort `values`.
    #[must_use]
    pub fn new(values: &[i64]) -> Self {
        Self {
            values: values.to_vec(),
            pass: 1,
            inner: 1,
            pending: VecDeque::with_capacity(4),
            finished: values.len() < 2,
        }
    }

    /// Current outer pass (1-based). Zero for inputs with nothing to sort.
    #[must_use]
    pub fn pass(&self) -> usize {
        if self.values.len() < 2 {
            0
        } else {
            self.pass.min(self.values.len() - 1)
        }
    }

    /// Queue the steps for the next comparison (or pass end).
    fn refill(&mut self) {
        let n = self.values.len();
        if self.finished {
            return;
        }
        if self.pass >= n {
            self.pending.push_back(Step::MarkSorted(0));
            self.finished = true;
            return;
        }
        if self.inner >= n {
            self.pending.push_back(Step::MarkSorted(n - self.pass));
            self.pass += 1;
            self.inner = 1;
            return;
        }

        let i = self.inner;
        self.pending
            .push_back(Step::highlight_pair(i - 1, i, HighlightState::Comparing));
        self.pending.push_back(Step::Compare(i - 1, i));
        if self.values[i] < self.values[i - 1] {
            self.values.swap(i - 1, i);
            self.pending.push_back(Step::Swap(i - 1, i));
        }
        self.pending
            .push_back(Step::highlight_pair(i - 1, i, HighlightState::Idle));
        self.inner += 1;
    }
}

impl Iterator for BubbleSteps {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        if self.pending.is_empty() {
            self.refill();
        }
        self.pending.pop_front()
    }
}
