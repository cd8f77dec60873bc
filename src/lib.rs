// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Step-by-step sorting visualization for augmented-reality hosts.
//!
//! Sortviz turns a list of integers into a lazy sequence of visual steps
//! (highlight, compare, swap, shift, mark sorted) and plays them back
//! against elements owned by a rendering host, moving each element along
//! a lift/translate/lower path at a fixed speed.
//!
//! # Key entry points
//!
//! - [`session::Visualizer`] - submit input, control and tick one sort
//! - [`sort::StepSequence`] - restartable step generator for bubble and
//!   insertion sort
//! - [`playback::PlaybackController`] - pausable, cancellable playback
//! - [`binding::VisualBinding`] - the host boundary (create, color, move)
//! - [`options::Options`] - pacing, motion, layout, colors and keybindings
//!
//! # Architecture
//!
//! Everything runs on the host's frame loop. Each tick the controller
//! spends the elapsed time on the current delay or motion and pulls the
//! next step from the generator only when the previous one has finished.
//! The logical [`sort::Arrangement`] is updated when a move lands, so it
//! always matches where elements come to rest.

pub mod animation;
pub mod binding;
pub mod error;
pub mod input;
pub mod layout;
pub mod options;
pub mod playback;
pub mod session;
pub mod sort;
