//! CLI layer: argument structures and the typed wrappers they parse into.

pub mod args;
pub mod types;

pub use args::{Commands, CommonFilters, GetCmd, Hfa};
