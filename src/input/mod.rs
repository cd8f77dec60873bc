//! User input: the comma-separated value list and key-bound playback
//! controls.

mod keyboard;
mod parse;

pub use keyboard::KeyAction;
pub use parse::{parse_values, random_input, random_values};
