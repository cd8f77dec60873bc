//! Playback lifecycle states.

/// Lifecycle of one [`PlaybackController`](super::PlaybackController).
///
/// `Idle → Running → {Paused ↔ Running} → Completed | Cancelled`.
/// Completed and Cancelled are terminal; a new session needs a new
/// controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlaybackState {
    /// Created, not started.
    #[default]
    Idle,
    /// Consuming steps on every tick.
    Running,
    /// Holding position until resumed.
    Paused,
    /// Every step has been applied.
    Completed,
    /// Stopped early by request or by a binding failure.
    Cancelled,
}

impl PlaybackState {
    /// Whether no further transitions are possible.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether a session is in progress (running or paused).
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Running | Self::Paused)
    }

    /// Human-readable label for status text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Running => "Running",
            Self::Paused => "Paused",
            Self::Completed => "Sorted",
            Self::Cancelled => "Cancelled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_and_active_are_disjoint() {
        for state in [
            PlaybackState::Idle,
            PlaybackState::Running,
            PlaybackState::Paused,
            PlaybackState::Completed,
            PlaybackState::Cancelled,
        ] {
            assert!(!(state.is_terminal() && state.is_active()));
        }
        assert!(PlaybackState::Paused.is_active());
        assert!(PlaybackState::Cancelled.is_terminal());
        assert!(!PlaybackState::Idle.is_active());
    }
}
