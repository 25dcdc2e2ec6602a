//! # linkstack-core
//!
//! Singly linked LIFO containers with explicit ownership of every node.
//!
//! ### Key Submodules:
//! - `alloc`: Owned node chain built in one fallible step, plus allocation counters
//! - `stack`: Byte-sized [`Stack`] configured with an element size and optional capacity
//! - `typed`: Generic [`TypedStack`] over a concrete element type
//! - `handle`: Free functions over optional handles for callers that may hold none
//!
//! None of the containers are synchronised; wrap them in a mutex or keep them
//! on one thread.

pub mod alloc;
pub mod error;
pub mod handle;
pub mod stack;
pub mod typed;

pub mod prelude {
    pub use crate::alloc::*;
    pub use crate::error::*;
    pub use crate::stack::*;
    pub use crate::typed::*;
}

pub use error::{ErrorKind, StackError};
pub use stack::Stack;
pub use typed::{PushError, TypedStack};
