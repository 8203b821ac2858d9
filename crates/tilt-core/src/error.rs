//! Error types shared across the tilt workspace.

use std::error::Error;
use std::fmt;

/// A direction symbol that is not one of the four cardinal directions.
///
/// Returned by `Direction::from_str`. Collaborators that translate user
/// input into directions surface this instead of passing an invalid value
/// to the kernel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDirectionError {
    /// The rejected input, verbatim.
    pub input: String,
}

impl fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown direction '{}': expected one of n, s, e, w",
            self.input
        )
    }
}

impl Error for ParseDirectionError {}
