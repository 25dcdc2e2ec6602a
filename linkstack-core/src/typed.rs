//! Generic stack over a concrete element type.
//!
//! Same chain, capacity rule and errors as [`crate::Stack`], without the
//! byte-size bookkeeping.

use std::error::Error;
use std::fmt;

use crate::alloc::Chain;
use crate::error::StackError;

/// A rejected push. The value is handed back so the caller keeps ownership.
pub struct PushError<T> {
    pub error: StackError,
    pub value: T,
}

impl<T> PushError<T> {
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<T> Error for PushError<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

pub struct TypedStack<T> {
    chain: Chain<T>,
    max_elements: usize,
}

impl<T> TypedStack<T> {
    /// Creates an empty, unbounded stack.
    pub const fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty stack holding at most `max_elements`; `0` is unbounded.
    pub const fn with_capacity(max_elements: usize) -> Self {
        Self {
            chain: Chain::new(),
            max_elements,
        }
    }

    #[inline]
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_elements != 0 && self.len() >= self.max_elements
    }

    pub fn push(&mut self, value: T) -> Result<(), PushError<T>> {
        if self.is_full() {
            return Err(PushError {
                error: StackError::CapacityExceeded {
                    max: self.max_elements,
                },
                value,
            });
        }
        self.chain.push_front(value).map_err(|value| PushError {
            error: StackError::AllocationFailure,
            value,
        })
    }

    pub fn pop(&mut self) -> Result<T, StackError> {
        self.chain.pop_front().ok_or(StackError::EmptyStack)
    }

    #[inline]
    pub fn top(&self) -> Option<&T> {
        self.chain.front()
    }

    #[inline]
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.chain.front_mut()
    }

    /// Pops every element and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        self.chain.clear()
    }
}

impl<T> Default for TypedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for TypedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedStack")
            .field("max_elements", &self.max_elements)
            .field("len", &self.len())
            .field("top", &self.top())
            .finish()
    }
}
