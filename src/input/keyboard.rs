use serde::{Deserialize, Serialize};

/// Playback controls that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_pause = "Space"
/// replay = "KeyR"
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Pause if running, resume if paused.
    TogglePause,
    /// Pause a running sort.
    Pause,
    /// Resume a paused sort.
    Resume,
    /// Rebuild the last input and sort it again.
    Replay,
    /// Cancel whatever is running, then replay.
    Restart,
    /// Stop the running sort where it stands.
    Cancel,
    /// Switch to the next algorithm for the following submit/replay.
    CycleAlgorithm,
}
