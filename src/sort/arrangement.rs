//! The logical array of (value, element) slots.

use super::step::Step;
use crate::binding::ElementId;
use crate::error::SortVizError;

/// A value paired with the element currently occupying its logical position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArraySlot {
    /// The integer being sorted.
    pub value: i64,
    /// Element that renders the value.
    pub element: ElementId,
}

impl ArraySlot {
    /// Pair a value with its element.
    #[must_use]
    pub fn new(value: i64, element: ElementId) -> Self {
        Self { value, element }
    }
}

/// Current physical arrangement of slots.
///
/// Single source of truth for what sits at each index. Only
/// [`Arrangement::apply`] mutates it, and only for index-mutating steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arrangement {
    slots: Vec<ArraySlot>,
}

impl Arrangement {
    /// Arrangement over the given slots, in order.
    #[must_use]
    pub fn new(slots: Vec<ArraySlot>) -> Self {
        Self { slots }
    }

    /// Arrangement whose element ids are the slot indices. Useful when
    /// replaying steps without a rendering host.
    #[must_use]
    pub fn from_values(values: &[i64]) -> Self {
        Self {
            slots: values
                .iter()
                .enumerate()
                .map(|(i, &v)| ArraySlot::new(v, ElementId(i as u32)))
                .collect(),
        }
    }

    /// Number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ArraySlot> {
        self.slots.get(index)
    }

    /// All slots in index order.
    #[must_use]
    pub fn slots(&self) -> &[ArraySlot] {
        &self.slots
    }

    /// Values in index order.
    #[must_use]
    pub fn values(&self) -> Vec<i64> {
        self.slots.iter().map(|s| s.value).collect()
    }

    /// Slot at `index`, or an `InvalidStep` error if out of range.
    pub fn slot(&self, index: usize) -> Result<ArraySlot, SortVizError> {
        self.check(index)?;
        Ok(self.slots[index])
    }

    /// Element at `index`, or an `InvalidStep` error if out of range.
    pub fn element_at(&self, index: usize) -> Result<ElementId, SortVizError> {
        self.slot(index).map(|s| s.element)
    }

    /// Whether values are in non-decreasing order.
    #[must_use]
    pub fn is_sorted(&self) -> bool {
        self.slots.windows(2).all(|w| w[0].value <= w[1].value)
    }

    /// Apply an index-mutating step. Visual-only steps are ignored.
    pub fn apply(&mut self, step: &Step) -> Result<(), SortVizError> {
        match *step {
            Step::Swap(i, j) => {
                self.check(i)?;
                self.check(j)?;
                self.slots.swap(i, j);
                Ok(())
            }
            Step::ShiftInsert { from, to, key } => {
                self.check(from)?;
                self.check(to)?;
                if self.slots[from].value != key {
                    return Err(SortVizError::InvalidStep(format!(
                        "shift key {key} does not match value {} at slot \
                         {from}",
                        self.slots[from].value
                    )));
                }
                let slot = self.slots.remove(from);
                self.slots.insert(to, slot);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn check(&self, index: usize) -> Result<(), SortVizError> {
        if index < self.slots.len() {
            Ok(())
        } else {
            Err(SortVizError::InvalidStep(format!(
                "slot {index} out of range for {} slots",
                self.slots.len()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn swap_exchanges_slots() {
        let mut arr = Arrangement::from_values(&[3, 1, 2]);
        arr.apply(&Step::Swap(0, 1)).unwrap();
        assert_eq!(arr.values(), vec![1, 3, 2]);
        assert_eq!(arr.element_at(0).unwrap(), ElementId(1));
    }

    #[test]
    fn shift_insert_moves_key_left() {
        let mut arr = Arrangement::from_values(&[2, 4, 6, 1]);
        arr.apply(&Step::ShiftInsert {
            from: 3,
            to: 0,
            key: 1,
        })
        .unwrap();
        assert_eq!(arr.values(), vec![1, 2, 4, 6]);
        assert_eq!(arr.element_at(0).unwrap(), ElementId(3));
        assert_eq!(arr.element_at(3).unwrap(), ElementId(2));
    }

    #[test]
    fn shift_insert_moves_key_right() {
        let mut arr = Arrangement::from_values(&[9, 1, 2]);
        arr.apply(&Step::ShiftInsert {
            from: 0,
            to: 2,
            key: 9,
        })
        .unwrap();
        assert_eq!(arr.values(), vec![1, 2, 9]);
    }

    #[test]
    fn mismatched_key_is_rejected() {
        let mut arr = Arrangement::from_values(&[2, 1]);
        let err = arr
            .apply(&Step::ShiftInsert {
                from: 1,
                to: 0,
                key: 5,
            })
            .unwrap_err();
        assert!(matches!(err, SortVizError::InvalidStep(_)));
        assert_eq!(arr.values(), vec![2, 1]);
    }

    #[test]
    fn out_of_range_swap_is_rejected() {
        let mut arr = Arrangement::from_values(&[2, 1]);
        assert!(arr.apply(&Step::Swap(0, 2)).is_err());
    }

    #[test]
    fn visual_steps_leave_arrangement_alone() {
        let mut arr = Arrangement::from_values(&[2, 1]);
        arr.apply(&Step::Compare(0, 1)).unwrap();
        arr.apply(&Step::MarkSorted(1)).unwrap();
        assert_eq!(arr.values(), vec![2, 1]);
    }
}
