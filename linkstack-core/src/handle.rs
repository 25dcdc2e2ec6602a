//! Handle-oriented API.
//!
//! Free functions taking an optional stack handle and optional element data.
//! An absent handle or absent data never panics: it is reported as
//! [`StackError::InvalidArgument`], or as an absent/zero result for the pure
//! queries [`top`] and [`size`].

use crate::error::StackError;
use crate::stack::Stack;

/// Creates an unbounded stack; `None` if it could not be created.
pub fn create(element_size: usize) -> Option<Stack> {
    Stack::new(element_size).ok()
}

pub fn is_empty(stack: Option<&Stack>) -> Result<bool, StackError> {
    stack.map(Stack::is_empty).ok_or(StackError::InvalidArgument)
}

pub fn is_full(stack: Option<&Stack>) -> Result<bool, StackError> {
    stack.map(Stack::is_full).ok_or(StackError::InvalidArgument)
}

/// The view aliases node storage and must be dropped before the next mutation.
pub fn top(stack: Option<&Stack>) -> Option<&[u8]> {
    stack.and_then(Stack::top)
}

pub fn push(stack: Option<&mut Stack>, data: Option<&[u8]>) -> Result<usize, StackError> {
    match (stack, data) {
        (Some(stack), Some(data)) => stack.push(data),
        _ => Err(StackError::InvalidArgument),
    }
}

pub fn pop(stack: Option<&mut Stack>) -> Result<usize, StackError> {
    stack.ok_or(StackError::InvalidArgument)?.pop()
}

pub fn clear(stack: Option<&mut Stack>) -> Result<usize, StackError> {
    stack.map(Stack::clear).ok_or(StackError::InvalidArgument)
}

pub fn size(stack: Option<&Stack>) -> usize {
    stack.map_or(0, Stack::size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_handle_is_reported_not_fatal() {
        assert_eq!(is_empty(None), Err(StackError::InvalidArgument));
        assert_eq!(is_full(None), Err(StackError::InvalidArgument));
        assert_eq!(top(None), None);
        assert_eq!(push(None, Some(b"abcd")), Err(StackError::InvalidArgument));
        assert_eq!(pop(None), Err(StackError::InvalidArgument));
        assert_eq!(clear(None), Err(StackError::InvalidArgument));
        assert_eq!(size(None), 0);
    }

    #[test]
    fn absent_data_leaves_stack_untouched() {
        let mut stack = create(4).unwrap();
        assert_eq!(
            push(Some(&mut stack), None),
            Err(StackError::InvalidArgument)
        );
        assert_eq!(size(Some(&stack)), 0);
    }

    #[test]
    fn create_rejects_zero_element_size() {
        assert!(create(0).is_none());
    }

    #[test]
    fn unbounded_four_byte_scenario() {
        let mut stack = create(4).unwrap();
        assert_eq!(push(Some(&mut stack), Some(&42u32.to_ne_bytes())), Ok(4));
        assert_eq!(is_empty(Some(&stack)), Ok(false));
        assert_eq!(is_full(Some(&stack)), Ok(false));
        assert_eq!(top(Some(&stack)), Some(&42u32.to_ne_bytes()[..]));
        assert_eq!(pop(None), Err(StackError::InvalidArgument));
        assert_eq!(size(Some(&stack)), 1);
        assert_eq!(pop(Some(&mut stack)), Ok(4));
        assert_eq!(pop(Some(&mut stack)), Err(StackError::EmptyStack));
        assert_eq!(clear(Some(&mut stack)), Ok(0));
    }
}
