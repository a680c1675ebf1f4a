//! Cairn Runtime - tagged-value stack core
//!
//! This library provides the value plumbing for the Cairn interpreter:
//! - Tagged scalar values (integers and strings)
//! - A growable LIFO value stack with explicit error reporting
//!
//! Parsing and evaluation live in later layers; this crate is only the
//! stack the evaluator will run on.

/// Cairn runtime version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Public API modules
pub mod stack;
pub mod value;

// Re-export commonly used types
pub use stack::ValueStack;
pub use value::{StackError, Value};
