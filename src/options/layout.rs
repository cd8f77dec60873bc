use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Layout", inline)]
#[serde(default)]
/// Placement of the slot row relative to the detected surface.
pub struct LayoutOptions {
    /// Distance between neighbouring slots.
    #[schemars(title = "Spacing", range(min = 0.05, max = 5.0), extend("step" = 0.05))]
    pub spacing: f32,
    /// Offset of value elements from the surface origin.
    #[schemars(skip)]
    pub value_offset: [f32; 3],
    /// Offset of index labels from the surface origin.
    #[schemars(skip)]
    pub label_offset: [f32; 3],
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            spacing: 1.0,
            value_offset: [0.0, 0.5, 1.0],
            label_offset: [0.0, 0.0, 1.0],
        }
    }
}
