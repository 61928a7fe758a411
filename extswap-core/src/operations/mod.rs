//! High-level operations that correspond to CLI runs
//!
//! These modules hold the flow of a run, separated from CLI concerns like
//! argument parsing, prompting and output formatting.

pub mod edit;

pub use edit::{edit_operation, EditRequest};
