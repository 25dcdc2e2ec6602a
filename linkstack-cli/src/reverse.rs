//! Word reversal through a [`Stack`].

use linkstack_core::{ErrorKind, Stack, StackError};
use linkstack_telemetry::{EventLogger, StackMetrics};

use crate::error::CliError;

/// How one character of input maps onto a stack element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    /// One UTF-8 byte per element.
    Byte,
    /// One `char` (little-endian scalar value) per element.
    Char,
}

impl Unit {
    pub fn for_element_size(element_size: usize) -> Result<Self, CliError> {
        match element_size {
            1 => Ok(Unit::Byte),
            size if size == std::mem::size_of::<char>() => Ok(Unit::Char),
            size => Err(CliError::UnsupportedElementSize(size)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reversal {
    pub reversed: String,
    pub kept: usize,
    pub dropped: usize,
}

/// Pushes every unit of `word`, then drains the stack into a reversed string.
///
/// Units rejected because the stack is full are counted as dropped.
pub fn reverse_word(
    stack: &mut Stack,
    word: &str,
    metrics: &StackMetrics,
) -> Result<Reversal, CliError> {
    let unit = Unit::for_element_size(stack.element_size())?;
    let mut pusher = Pusher {
        stack,
        metrics,
        kept: 0,
        dropped: 0,
    };

    match unit {
        Unit::Byte => {
            for byte in word.bytes() {
                pusher.push(&[byte])?;
            }
        }
        Unit::Char => {
            for c in word.chars() {
                pusher.push(&u32::from(c).to_le_bytes())?;
            }
        }
    }

    let Pusher { kept, dropped, .. } = pusher;
    if dropped > 0 {
        EventLogger::log_truncation(word, kept, dropped);
    }

    let reversed = drain(stack, unit, metrics)?;
    Ok(Reversal {
        reversed,
        kept,
        dropped,
    })
}

struct Pusher<'a> {
    stack: &'a mut Stack,
    metrics: &'a StackMetrics,
    kept: usize,
    dropped: usize,
}

impl Pusher<'_> {
    fn push(&mut self, element: &[u8]) -> Result<(), CliError> {
        match self.stack.push(element) {
            Ok(_) => {
                self.metrics.inc_pushes();
                self.kept += 1;
                Ok(())
            }
            Err(err) if err.kind() == ErrorKind::CapacityExceeded => {
                self.metrics.inc_rejected_pushes();
                self.dropped += 1;
                Ok(())
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn drain(stack: &mut Stack, unit: Unit, metrics: &StackMetrics) -> Result<String, CliError> {
    let mut bytes = Vec::with_capacity(stack.len());
    let mut reversed = String::with_capacity(stack.len());

    while let Some(top) = stack.top() {
        match unit {
            Unit::Byte => bytes.extend_from_slice(top),
            Unit::Char => reversed.push(decode_char(top)?),
        }
        stack.pop()?;
        metrics.inc_pops();
    }

    if unit == Unit::Byte {
        reversed = String::from_utf8_lossy(&bytes).into_owned();
    }
    Ok(reversed)
}

fn decode_char(element: &[u8]) -> Result<char, StackError> {
    let raw: [u8; 4] = element
        .try_into()
        .map_err(|_| StackError::ElementSizeMismatch {
            expected: std::mem::size_of::<char>(),
            actual: element.len(),
        })?;
    Ok(char::from_u32(u32::from_le_bytes(raw)).unwrap_or(char::REPLACEMENT_CHARACTER))
}
