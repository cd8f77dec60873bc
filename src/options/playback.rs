use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::sort::Algorithm;

const MAX_STEP_DELAY: f32 = 5.0;
const MAX_START_DELAY: f32 = 10.0;

/// Seconds to a duration within `0..=max`. NaN reads as zero.
fn clamped_secs(secs: f32, max: f32) -> Duration {
    Duration::try_from_secs_f32(secs.clamp(0.0, max)).unwrap_or_default()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Playback", inline)]
#[serde(default)]
/// Step pacing and session setup.
pub struct PlaybackOptions {
    /// Sort algorithm to animate.
    #[schemars(title = "Algorithm")]
    pub algorithm: Algorithm,
    /// Pause after each visible step, in seconds.
    #[schemars(title = "Step Delay", range(min = 0.0, max = 5.0), extend("step" = 0.05))]
    pub step_delay: f32,
    /// Pause before the first step, in seconds.
    #[schemars(title = "Start Delay", range(min = 0.0, max = 10.0), extend("step" = 0.1))]
    pub start_delay: f32,
    /// Whether to create an index label under every slot.
    #[schemars(title = "Show Index Labels")]
    pub show_index_labels: bool,
}

impl Default for PlaybackOptions {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Bubble,
            step_delay: 0.5,
            start_delay: 1.0,
            show_index_labels: true,
        }
    }
}

impl PlaybackOptions {
    /// Step delay as a duration, clamped to the schema range.
    #[must_use]
    pub fn step_delay(&self) -> Duration {
        clamped_secs(self.step_delay, MAX_STEP_DELAY)
    }

    /// Start delay as a duration, clamped to the schema range.
    #[must_use]
    pub fn start_delay(&self) -> Duration {
        clamped_secs(self.start_delay, MAX_START_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;
    use crate::playback::PlaybackSettings;

    #[test]
    fn out_of_range_delays_clamp() {
        let opts = Options::from_toml(
            "[playback]\nstep_delay = inf\nstart_delay = 1e30\n",
        )
        .unwrap();
        assert_eq!(opts.playback.step_delay(), Duration::from_secs(5));
        assert_eq!(opts.playback.start_delay(), Duration::from_secs(10));
        let _ = PlaybackSettings::from_options(&opts);
    }

    #[test]
    fn nan_and_negative_delays_are_zero() {
        let opts = PlaybackOptions {
            step_delay: f32::NAN,
            start_delay: -3.0,
            ..PlaybackOptions::default()
        };
        assert_eq!(opts.step_delay(), Duration::ZERO);
        assert_eq!(opts.start_delay(), Duration::ZERO);
    }
}
