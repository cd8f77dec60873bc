//! Element motion for swap and shift steps.
//!
//! Motion is an explicit state object polled once per controller tick, so
//! logical sort progress stays decoupled from the host's frame cadence.

pub mod interpolation;
mod motion;
mod path;
mod timeline;

pub use interpolation::{interpolate, move_towards, AxisMask, Waypoint};
pub use motion::Motion;
pub use path::MotionPath;
pub use timeline::{ElementMotion, MotionConfig, MotionTimeline};
