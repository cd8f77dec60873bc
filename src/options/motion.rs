use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::animation::interpolation::DEFAULT_EPSILON;
use crate::animation::MotionConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Motion", inline)]
#[serde(default)]
/// Element travel during swap and shift steps.
pub struct MotionOptions {
    /// Travel speed in world units per second.
    #[schemars(title = "Swap Speed", range(min = 0.5, max = 50.0), extend("step" = 0.5))]
    pub speed: f32,
    /// How far elements rise before translating.
    #[schemars(title = "Lift Height", range(min = 0.0, max = 5.0), extend("step" = 0.1))]
    pub lift_height: f32,
    /// Whether moves animate; when off, elements jump to their new slot.
    #[schemars(title = "Animate Moves")]
    pub animate: bool,
    /// Arrival tolerance.
    #[schemars(skip)]
    pub epsilon: f32,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            speed: 12.0,
            lift_height: 1.0,
            animate: true,
            epsilon: DEFAULT_EPSILON,
        }
    }
}

impl MotionOptions {
    /// Timeline configuration derived from these options.
    #[must_use]
    pub fn config(&self) -> MotionConfig {
        MotionConfig {
            speed: self.speed,
            epsilon: self.epsilon,
            enabled: self.animate,
        }
    }
}
