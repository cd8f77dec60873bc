//! The seam between the sort engine and the rendering host.
//!
//! The host (an AR scene, a game engine, a test double) owns every
//! renderable element; the engine only ever refers to them by
//! [`ElementId`] and drives them through [`VisualBinding`].

mod memory;

use std::fmt;

use glam::Vec3;
pub use memory::{BindingCall, MemoryBinding};

/// Opaque handle to a renderable value-holder owned by the host.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// RGB color in `[0, 1]`.
pub type Color = [f32; 3];

/// Failure reported by a [`VisualBinding`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The element id does not refer to a live element.
    MissingElement(ElementId),
    /// Any other host-side failure.
    Host(String),
}

impl fmt::Display for BindingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement(id) => write!(f, "missing element {id}"),
            Self::Host(msg) => write!(f, "host error: {msg}"),
        }
    }
}

impl std::error::Error for BindingError {}

/// Rendering primitives the engine consumes.
///
/// Calls are issued in strict step order from a single thread of control.
/// Any `Err` is fatal to the current playback session.
pub trait VisualBinding {
    /// Create an element showing `value` for logical slot `slot`.
    fn create_element(
        &mut self,
        value: i64,
        slot: usize,
    ) -> Result<ElementId, BindingError>;

    /// Create a static index label for slot `slot`.
    fn create_label(&mut self, slot: usize) -> Result<ElementId, BindingError>;

    /// Destroy an element created by this binding.
    fn destroy_element(&mut self, id: ElementId) -> Result<(), BindingError>;

    /// Set an element's text color.
    fn set_color(
        &mut self,
        id: ElementId,
        color: Color,
    ) -> Result<(), BindingError>;

    /// Set an element's text.
    fn set_text(&mut self, id: ElementId, text: &str)
        -> Result<(), BindingError>;

    /// Current text of an element.
    fn get_text(&self, id: ElementId) -> Result<String, BindingError>;

    /// Current world position of an element.
    fn get_position(&self, id: ElementId) -> Result<Vec3, BindingError>;

    /// Move an element to a world position.
    fn set_position(
        &mut self,
        id: ElementId,
        position: Vec3,
    ) -> Result<(), BindingError>;

    /// Update the status line shown to the user.
    fn set_status(&mut self, text: &str) -> Result<(), BindingError>;
}
