#![doc = include_str!("../README.md")]
#![warn(unused_crate_dependencies)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub use {
    descriptor::{CollectionNode, ReportDescriptor},
    item::*,
    usage::{page_name, usage_name, Page, Usage},
};

pub mod descriptor;
mod item;
pub mod usage;
mod usage_tables;

/// Report descriptor decoding error. Every variant identifies the byte offset
/// of the item that could not be framed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum ParseError {
    #[error("truncated item at offset {offset}: expected {expected_size} bytes")]
    TruncatedShortItem { offset: usize, expected_size: usize },
    #[error("truncated long item at offset {offset}")]
    TruncatedLongItemHeader { offset: usize },
    #[error("truncated long item data at offset {offset}: expected {expected_size} bytes")]
    TruncatedLongItemPayload { offset: usize, expected_size: usize },
}

impl ParseError {
    /// Returns the byte offset of the offending item prefix.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> usize {
        match *self {
            Self::TruncatedShortItem { offset, .. }
            | Self::TruncatedLongItemHeader { offset }
            | Self::TruncatedLongItemPayload { offset, .. } => offset,
        }
    }
}

/// Common decoder result type.
pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let e = ParseError::TruncatedLongItemHeader { offset: 7 };
        assert_eq!(e.to_string(), "truncated long item at offset 7");
        assert_eq!(e.offset(), 7);
        let e = ParseError::TruncatedLongItemPayload {
            offset: 3,
            expected_size: 16,
        };
        assert_eq!(
            e.to_string(),
            "truncated long item data at offset 3: expected 16 bytes"
        );
    }
}
