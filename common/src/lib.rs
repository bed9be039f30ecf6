//! Shared building blocks for `hosthunter`.
//!
//! * [`input`] turns command line input into the ordered list of candidates.
//! * [`network`] classifies candidates and models the per-address results.
//! * [`config`] and [`error`] are used by every other crate in the workspace.

pub mod config;
pub mod error;
pub mod input;
pub mod network;
