//! # Byte-sized stack
//!
//! A LIFO chain of fixed-size byte elements with an optional capacity.
//!
//! ## Lifecycle
//! - Every [`Stack::push`] copies exactly `element_size` bytes into a new node
//! - [`Stack::pop`], [`Stack::clear`] and `Drop` are the only ways nodes are released
//! - A failed operation never mutates the stack
//!
//! A `Stack` is not synchronised. Callers sharing one across threads wrap it
//! in a mutex or give it a single owning thread.

use std::fmt;

use linkstack_config::StackConfig;
use tracing::trace;

use crate::alloc::{Chain, StackStats};
use crate::error::StackError;

pub struct Stack {
    element_size: usize,
    max_elements: usize,
    chain: Chain<Box<[u8]>>,
    stats: StackStats,
}

impl Stack {
    /// Creates an empty, unbounded stack for elements of `element_size` bytes.
    pub fn new(element_size: usize) -> Result<Self, StackError> {
        Self::with_capacity(element_size, 0)
    }

    /// Creates an empty stack holding at most `max_elements` elements.
    ///
    /// `max_elements == 0` leaves the stack unbounded.
    pub fn with_capacity(element_size: usize, max_elements: usize) -> Result<Self, StackError> {
        if element_size == 0 {
            return Err(StackError::InvalidArgument);
        }

        trace!(element_size, max_elements, "stack created");
        Ok(Self {
            element_size,
            max_elements,
            chain: Chain::new(),
            stats: StackStats::new(),
        })
    }

    pub fn from_config(config: &StackConfig) -> Result<Self, StackError> {
        Self::with_capacity(config.element_size, config.max_elements)
    }

    #[inline]
    pub fn element_size(&self) -> usize {
        self.element_size
    }

    /// Configured bound, `0` when unbounded.
    #[inline]
    pub fn max_elements(&self) -> usize {
        self.max_elements
    }

    /// Changes the bound. Lowering it below the current count is rejected.
    pub fn set_max_elements(&mut self, max_elements: usize) -> Result<(), StackError> {
        if max_elements != 0 && max_elements < self.len() {
            return Err(StackError::CapacityExceeded { max: max_elements });
        }
        self.max_elements = max_elements;
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Counts elements by walking the node chain.
    pub fn size(&self) -> usize {
        self.chain.walk_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Unbounded stacks are never full.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.max_elements != 0 && self.len() >= self.max_elements
    }

    /// Borrowed view of the most recently pushed element.
    #[inline]
    pub fn top(&self) -> Option<&[u8]> {
        self.chain.front().map(|buffer| &buffer[..])
    }

    /// Copies `data` into a new head node and returns the bytes written.
    pub fn push(&mut self, data: &[u8]) -> Result<usize, StackError> {
        if data.len() != self.element_size {
            return Err(StackError::ElementSizeMismatch {
                expected: self.element_size,
                actual: data.len(),
            });
        }
        if self.is_full() {
            return Err(StackError::CapacityExceeded {
                max: self.max_elements,
            });
        }

        let buffer = copy_element(data)?;
        self.chain
            .push_front(buffer)
            .map_err(|_| StackError::AllocationFailure)?;
        self.stats.record_push(self.element_size);
        Ok(self.element_size)
    }

    /// Releases the head node and returns the bytes removed.
    pub fn pop(&mut self) -> Result<usize, StackError> {
        self.pop_value().map(|buffer| buffer.len())
    }

    /// Unlinks the head node and hands its bytes to the caller.
    pub fn pop_value(&mut self) -> Result<Box<[u8]>, StackError> {
        let buffer = self.chain.pop_front().ok_or(StackError::EmptyStack)?;
        self.stats.record_pop(buffer.len());
        Ok(buffer)
    }

    /// Pops every element and returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let mut removed = 0;
        while self.pop().is_ok() {
            removed += 1;
        }
        trace!(removed, "stack cleared");
        removed
    }

    pub fn stats(&self) -> &StackStats {
        &self.stats
    }
}

/// Reserves and fills an element buffer as one step.
fn copy_element(data: &[u8]) -> Result<Box<[u8]>, StackError> {
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(data.len())?;
    buffer.extend_from_slice(data);
    Ok(buffer.into_boxed_slice())
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("element_size", &self.element_size)
            .field("max_elements", &self.max_elements)
            .field("len", &self.len())
            .finish()
    }
}

impl Drop for Stack {
    fn drop(&mut self) {
        let released = self.chain.clear();
        trace!(released, "stack dropped");
    }
}
