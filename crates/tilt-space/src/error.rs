//! Error types for layout parsing and grid construction.

use std::fmt;
use tilt_core::Position;

/// Errors arising from layout validation or decoding a layout into a grid.
///
/// All of these describe a malformed puzzle definition. They are raised
/// once, at construction; no grid operation fails after that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The layout has no rows, or its rows have no cells.
    EmptyLayout,
    /// A row's length differs from the first row's.
    RaggedRows {
        /// Zero-based index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// A cell code has no meaning in the chosen variant.
    UnknownCode {
        /// The undecodable integer.
        code: u8,
        /// Where it appeared.
        position: Position,
    },
    /// Layout text contained something other than a small integer.
    InvalidToken {
        /// One-based line number in the source text.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A dimension does not fit the signed coordinate range.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"columns"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The maximum allowed size.
        max: u32,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyLayout => write!(f, "layout must have at least one cell"),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} like row 0"
            ),
            Self::UnknownCode { code, position } => {
                write!(f, "unknown cell code {code} at {position}")
            }
            Self::InvalidToken { line, token } => {
                write!(f, "line {line}: '{token}' is not a cell code")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
        }
    }
}

impl std::error::Error for LayoutError {}
