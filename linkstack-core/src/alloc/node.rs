//! ## linkstack-core::alloc::node
//! **Singly linked chain of exclusively owned nodes**
//!
//! Every [`Node`] is owned by exactly one predecessor (or by the [`Chain`]
//! head), so a node can never be reachable from two chains. Nodes are only
//! created by [`Chain::push_front`] and only released by
//! [`Chain::pop_front`], [`Chain::clear`] or dropping the chain.

use std::alloc::{alloc, Layout};
use std::ptr::NonNull;

pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single chain link owning one element and its successor.
pub struct Node<T> {
    data: T,
    next: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a detached node holding `data`.
    ///
    /// The record is allocated fallibly. On failure `data` is handed back to
    /// the caller untouched and nothing else was allocated.
    pub fn try_new(data: T) -> Result<Box<Self>, T> {
        let layout = Layout::new::<Self>();
        // SAFETY: `Node<T>` always contains a link pointer, so the layout is
        // never zero-sized.
        let raw = unsafe { alloc(layout) }.cast::<Self>();
        let Some(ptr) = NonNull::new(raw) else {
            return Err(data);
        };

        // SAFETY: `ptr` is a fresh, properly aligned allocation from the
        // global allocator with `Node<T>`'s layout, which is exactly what
        // `Box::from_raw` expects once the value is written.
        unsafe {
            ptr.as_ptr().write(Node { data, next: None });
            Ok(Box::from_raw(ptr.as_ptr()))
        }
    }

    /// The element owned by this node.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Whether this node is the last link of its chain.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Head link plus a running count of the links behind it.
pub struct Chain<T> {
    head: Link<T>,
    len: usize,
}

impl<T> Chain<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Links `data` in front of the current head.
    ///
    /// Returns `data` back if the node could not be allocated; the chain is
    /// left exactly as it was.
    pub fn push_front(&mut self, data: T) -> Result<(), T> {
        let mut node = Node::try_new(data)?;
        node.next = self.head.take();
        self.head = Some(node);
        self.len += 1;
        Ok(())
    }

    /// Unlinks the head node and hands its element out.
    pub fn pop_front(&mut self) -> Option<T> {
        self.head.take().map(|node| {
            let Node { data, next } = *node;
            self.head = next;
            self.len -= 1;
            data
        })
    }

    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.head.as_deref().map(Node::data)
    }

    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.head.as_deref_mut().map(|node| &mut node.data)
    }

    /// The bookkept number of links.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Counts links by walking from the head instead of trusting `len`.
    pub fn walk_len(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            count += 1;
            cursor = node.next.as_deref();
        }
        count
    }

    /// Releases every link front to back and returns how many were released.
    pub fn clear(&mut self) -> usize {
        let mut released = 0;
        while self.pop_front().is_some() {
            released += 1;
        }
        released
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        // Iterative so a long chain cannot overflow the stack through
        // recursive `Box` drops.
        let mut cursor = self.head.take();
        while let Some(mut node) = cursor {
            cursor = node.next.take();
        }
    }
}
