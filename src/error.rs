//! Crate-level error types.

use std::fmt;

use crate::binding::BindingError;
use crate::playback::PlaybackState;

/// Errors produced by the sortviz crate.
#[derive(Debug)]
pub enum SortVizError {
    /// The submitted value list was empty or contained a non-integer token.
    InvalidInput(String),
    /// A visual binding call failed or referenced a missing element.
    ElementBinding(BindingError),
    /// A session is already running or paused and must be cancelled first.
    AlreadyRunning,
    /// A control signal is not valid in the controller's current state.
    InvalidTransition {
        /// State the controller was in.
        from: PlaybackState,
        /// The rejected control signal.
        action: &'static str,
    },
    /// A step referenced slots outside the arrangement or a mismatched key.
    InvalidStep(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for SortVizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            Self::ElementBinding(e) => write!(f, "element binding error: {e}"),
            Self::AlreadyRunning => {
                write!(f, "a sort is already running; cancel it first")
            }
            Self::InvalidTransition { from, action } => {
                write!(f, "cannot {action} while {from:?}")
            }
            Self::InvalidStep(msg) => write!(f, "invalid step: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for SortVizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ElementBinding(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<BindingError> for SortVizError {
    fn from(e: BindingError) -> Self {
        Self::ElementBinding(e)
    }
}

impl From<std::io::Error> for SortVizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
