//! ## linkstack-core::alloc
//! **Node allocation and allocation accounting**
//!
//! ### Key Submodules:
//! - `node/`: Owned chain links built in a single fallible step
//! - `stats/`: Node and byte throughput counters

pub mod node;
pub mod stats;

pub use node::{Chain, Node};
pub use stats::StackStats;
