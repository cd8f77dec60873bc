//! In-memory [`VisualBinding`] that records every call.

use glam::Vec3;
use rustc_hash::FxHashMap;

use super::{BindingError, Color, ElementId, VisualBinding};

/// A recorded binding call, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum BindingCall {
    /// `create_element` / `create_label`.
    Create {
        /// New element.
        id: ElementId,
        /// Slot it was created for.
        slot: usize,
    },
    /// `destroy_element`.
    Destroy(ElementId),
    /// `set_color`.
    SetColor(ElementId, Color),
    /// `set_text`.
    SetText(ElementId, String),
    /// `set_position`.
    SetPosition(ElementId, Vec3),
    /// `set_status`.
    SetStatus(String),
}

#[derive(Debug, Clone)]
struct ElementRecord {
    text: String,
    color: Color,
    position: Vec3,
}

/// Host-free binding backed by hash maps.
///
/// Reads (`get_text`, `get_position`) are not recorded; every mutation is
/// appended to [`calls`](Self::calls) and optionally logged at debug level.
#[derive(Debug, Default)]
pub struct MemoryBinding {
    elements: FxHashMap<ElementId, ElementRecord>,
    next_id: u32,
    status: String,
    calls: Vec<BindingCall>,
    log_calls: bool,
    /// Element id whose mutations fail until cleared, for fault injection.
    fail_on: Option<ElementId>,
}

impl MemoryBinding {
    /// Empty binding.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a `log::debug!` line for every recorded call.
    #[must_use]
    pub fn with_logging(mut self) -> Self {
        self.log_calls = true;
        self
    }

    /// Make every mutation of `id` (including destroy) fail with `Host`
    /// until cleared with `None`.
    pub fn fail_on(&mut self, id: Option<ElementId>) {
        self.fail_on = id;
    }

    /// All recorded mutations.
    #[must_use]
    pub fn calls(&self) -> &[BindingCall] {
        &self.calls
    }

    /// Drop recorded calls.
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of live elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Whether `id` is live.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    /// Current color of an element.
    #[must_use]
    pub fn color(&self, id: ElementId) -> Option<Color> {
        self.elements.get(&id).map(|e| e.color)
    }

    /// Last status text.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }

    fn record(&mut self, call: BindingCall) {
        if self.log_calls {
            log::debug!("binding: {call:?}");
        }
        self.calls.push(call);
    }

    fn element_mut(
        &mut self,
        id: ElementId,
    ) -> Result<&mut ElementRecord, BindingError> {
        if self.fail_on == Some(id) {
            return Err(BindingError::Host(format!("injected failure on {id}")));
        }
        self.elements
            .get_mut(&id)
            .ok_or(BindingError::MissingElement(id))
    }

    fn element(&self, id: ElementId) -> Result<&ElementRecord, BindingError> {
        self.elements
            .get(&id)
            .ok_or(BindingError::MissingElement(id))
    }

    fn insert(&mut self, text: String, slot: usize) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        let _ = self.elements.insert(
            id,
            ElementRecord {
                text,
                color: [1.0, 1.0, 1.0],
                position: Vec3::ZERO,
            },
        );
        self.record(BindingCall::Create { id, slot });
        id
    }
}

impl VisualBinding for MemoryBinding {
    fn create_element(
        &mut self,
        value: i64,
        slot: usize,
    ) -> Result<ElementId, BindingError> {
        Ok(self.insert(value.to_string(), slot))
    }

    fn create_label(&mut self, slot: usize) -> Result<ElementId, BindingError> {
        Ok(self.insert(slot.to_string(), slot))
    }

    fn destroy_element(&mut self, id: ElementId) -> Result<(), BindingError> {
        if self.fail_on == Some(id) {
            return Err(BindingError::Host(format!("injected failure on {id}")));
        }
        if self.elements.remove(&id).is_none() {
            return Err(BindingError::MissingElement(id));
        }
        self.record(BindingCall::Destroy(id));
        Ok(())
    }

    fn set_color(
        &mut self,
        id: ElementId,
        color: Color,
    ) -> Result<(), BindingError> {
        self.element_mut(id)?.color = color;
        self.record(BindingCall::SetColor(id, color));
        Ok(())
    }

    fn set_text(
        &mut self,
        id: ElementId,
        text: &str,
    ) -> Result<(), BindingError> {
        text.clone_into(&mut self.element_mut(id)?.text);
        self.record(BindingCall::SetText(id, text.to_owned()));
        Ok(())
    }

    fn get_text(&self, id: ElementId) -> Result<String, BindingError> {
        Ok(self.element(id)?.text.clone())
    }

    fn get_position(&self, id: ElementId) -> Result<Vec3, BindingError> {
        Ok(self.element(id)?.position)
    }

    fn set_position(
        &mut self,
        id: ElementId,
        position: Vec3,
    ) -> Result<(), BindingError> {
        self.element_mut(id)?.position = position;
        self.record(BindingCall::SetPosition(id, position));
        Ok(())
    }

    fn set_status(&mut self, text: &str) -> Result<(), BindingError> {
        text.clone_into(&mut self.status);
        self.record(BindingCall::SetStatus(text.to_owned()));
        Ok(())
    }
}
