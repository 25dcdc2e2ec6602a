//! Stack sizing parameters.
//!
//! Controls how the demonstration stack is shaped:
//! - Byte size of every element
//! - Optional upper bound on the element count

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Largest element size accepted from configuration (bytes).
pub const MAX_ELEMENT_SIZE: usize = 4096;

/// Shape of a byte-sized stack.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, PartialEq, Eq)]
pub struct StackConfig {
    /// Byte size of every element. Defaults to the width of one `char`.
    #[serde(default = "default_element_size")]
    #[validate(range(min = 1, max = 4096))]
    pub element_size: usize,

    /// Maximum number of elements; `0` leaves the stack unbounded.
    #[serde(default = "default_max_elements")]
    pub max_elements: usize,
}

fn default_element_size() -> usize {
    std::mem::size_of::<char>()
}

fn default_max_elements() -> usize {
    8
}

impl StackConfig {
    /// Whether the configured stack has an upper bound.
    pub fn is_bounded(&self) -> bool {
        self.max_elements != 0
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            element_size: default_element_size(),
            max_elements: default_max_elements(),
        }
    }
}
