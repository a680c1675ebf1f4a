//! Value stack - LIFO (Last-In-First-Out)
//!
//! Vec-backed stack of tagged runtime values with O(1) push/pop.
//! The stack owns its elements: dropping the stack drops every value
//! still on it, and `len` is always the exact live-element count.

use crate::value::{StackError, Value};

/// Growable LIFO stack of runtime values
///
/// Removal and inspection of the top element fail with
/// [`StackError::EmptyStack`] on a zero-length stack instead of
/// panicking, so the embedding program controls the failure response.
///
/// # Example
/// ```rust
/// # use cairn_runtime::{Value, ValueStack};
/// let mut stack = ValueStack::new();
/// stack.push(Value::Int(1))?;
/// stack.push(Value::from("a"))?;
/// assert_eq!(stack.pop()?, Value::from("a"));
/// assert_eq!(stack.pop()?, Value::Int(1));
/// assert!(stack.pop().is_err());
/// # Ok::<(), cairn_runtime::StackError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValueStack {
    inner: Vec<Value>,
}

impl ValueStack {
    /// Create new empty stack
    ///
    /// Does not allocate until the first push.
    pub fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Create stack with pre-allocated capacity
    ///
    /// Useful when the number of values is known upfront.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Vec::with_capacity(capacity),
        }
    }

    /// Push value onto top of stack, taking ownership of it
    ///
    /// Storage is reserved before the stack is mutated, so a failed
    /// grow returns [`StackError::Allocation`] with length and
    /// contents untouched.
    pub fn push(&mut self, value: Value) -> Result<(), StackError> {
        self.inner.try_reserve(1)?;
        self.inner.push(value);
        Ok(())
    }

    /// Pop value from top of stack, transferring ownership to the caller
    ///
    /// Fails with [`StackError::EmptyStack`] if the stack is empty,
    /// leaving it unchanged.
    pub fn pop(&mut self) -> Result<Value, StackError> {
        self.inner.pop().ok_or(StackError::EmptyStack)
    }

    /// Remove and drop the top value without returning it
    ///
    /// Fails with [`StackError::EmptyStack`] if the stack is empty.
    pub fn drop_top(&mut self) -> Result<(), StackError> {
        self.pop().map(drop)
    }

    /// View top value without removing it
    ///
    /// Fails with [`StackError::EmptyStack`] if the stack is empty.
    pub fn peek(&self) -> Result<&Value, StackError> {
        self.inner.last().ok_or(StackError::EmptyStack)
    }

    /// Get number of values on the stack
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if stack is empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Remove and drop all values
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Snapshot of the stack as a Vec (bottom to top order)
    pub fn to_vec(&self) -> Vec<Value> {
        self.inner.clone()
    }

    /// Iterate values bottom to top without removing them
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.inner.iter()
    }
}

impl Default for ValueStack {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Vec<Value>> for ValueStack {
    fn from(values: Vec<Value>) -> Self {
        Self { inner: values }
    }
}

impl FromIterator<Value> for ValueStack {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            inner: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ValueStack {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    /// Consume the stack, yielding values bottom to top
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a ValueStack {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = ValueStack::new();
        stack.push(Value::Int(42)).unwrap();
        let val = stack.pop().unwrap();
        assert_eq!(val, Value::Int(42));
    }

    #[test]
    fn test_empty_errors() {
        let mut stack = ValueStack::new();
        assert_eq!(stack.pop(), Err(StackError::EmptyStack));
        assert_eq!(stack.drop_top(), Err(StackError::EmptyStack));
        assert_eq!(stack.peek(), Err(StackError::EmptyStack));
        assert_eq!(stack.len(), 0);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = ValueStack::new();
        stack.push(Value::from("top")).unwrap();
        assert_eq!(stack.peek().unwrap(), &Value::from("top"));
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn test_to_vec_bottom_to_top() {
        let stack: ValueStack = vec![Value::Int(1), Value::Int(2)].into();
        assert_eq!(stack.to_vec(), vec![Value::Int(1), Value::Int(2)]);
    }
}
