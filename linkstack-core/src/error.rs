use std::collections::TryReserveError;
use thiserror::Error;

/// Failure signals returned by every stack operation.
///
/// No operation mutates the stack when it returns one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StackError {
    #[error("Invalid argument: stack handle or element data is absent")]
    InvalidArgument,

    #[error("Element size mismatch: expected {expected} bytes, got {actual}")]
    ElementSizeMismatch { expected: usize, actual: usize },

    #[error("Allocation failed while building a node")]
    AllocationFailure,

    #[error("Stack capacity exceeded (max {max} elements)")]
    CapacityExceeded { max: usize },

    #[error("Stack is empty")]
    EmptyStack,
}

/// Coarse classification of a [`StackError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    AllocationFailure,
    CapacityExceeded,
    EmptyStack,
}

impl StackError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StackError::InvalidArgument | StackError::ElementSizeMismatch { .. } => {
                ErrorKind::InvalidArgument
            }
            StackError::AllocationFailure => ErrorKind::AllocationFailure,
            StackError::CapacityExceeded { .. } => ErrorKind::CapacityExceeded,
            StackError::EmptyStack => ErrorKind::EmptyStack,
        }
    }
}

impl From<TryReserveError> for StackError {
    fn from(_: TryReserveError) -> Self {
        StackError::AllocationFailure
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_mismatch_is_an_invalid_argument() {
        let err = StackError::ElementSizeMismatch {
            expected: 4,
            actual: 2,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert_eq!(
            err.to_string(),
            "Element size mismatch: expected 4 bytes, got 2"
        );
    }

    #[test]
    fn reserve_failure_maps_to_allocation_failure() {
        let mut buffer: Vec<u8> = Vec::new();
        let reserve = buffer.try_reserve_exact(usize::MAX).unwrap_err();
        let err = StackError::from(reserve);
        assert_eq!(err, StackError::AllocationFailure);
        assert_eq!(err.kind(), ErrorKind::AllocationFailure);
    }
}
