//! Runtime value representation
//!
//! Shared value representation for the stack and the future evaluator.
//! - Ints: Immediate values (stack-allocated)
//! - Strings: Heap-allocated, reference-counted (Arc<String>), immutable

use serde::{Deserialize, Serialize};
use std::collections::TryReserveError;
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Tagged runtime value
///
/// Exactly one variant is active at a time; the tag is the enum
/// discriminant, so reading the wrong payload for the current tag is
/// impossible by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Integer value (64-bit signed)
    Int(i64),
    /// String value (reference-counted, immutable)
    Str(Arc<String>),
}

impl Value {
    /// Get the type name of this value
    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Str(_) => "string",
        }
    }

    /// Returns true if this value is an integer
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns true if this value is a string
    pub fn is_str(&self) -> bool {
        matches!(self, Value::Str(_))
    }

    /// Integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            Value::Str(_) => None,
        }
    }

    /// String payload, if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Str(s) => Some(s.as_str()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s.as_ref()),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::new(s))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::new(s.to_string()))
    }
}

/// Stack error type
///
/// Every stack operation that can fail reports through this enum; the
/// embedding program decides how to respond. The stack itself never
/// prints or terminates the process.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StackError {
    /// Pop, drop, or peek on a zero-length stack
    #[error("stack is empty")]
    EmptyStack,
    /// Backing storage could not grow during a push
    #[error("stack allocation failed: {0}")]
    Allocation(#[from] TryReserveError),
}
