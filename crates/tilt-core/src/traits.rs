//! The [`CellState`] trait implemented by every variant alphabet.

use std::fmt;

/// A finite cell alphabet with an explicit integer code table.
///
/// Each puzzle variant defines its own enum of cell states. Layouts are
/// written as small integers, and [`from_code`](CellState::from_code) is
/// the single place where an integer gains its variant-specific meaning.
///
/// # Contract
///
/// - `from_code(c.code()) == Some(c)` for every state `c`.
/// - [`is_playable`](CellState::is_playable) is `false` only for cells that
///   lie outside the polyomino region and can never hold a particle.
pub trait CellState: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// Decode a layout integer. Returns `None` for codes the variant does
    /// not define.
    fn from_code(code: u8) -> Option<Self>;

    /// Encode this state as its layout integer.
    fn code(self) -> u8;

    /// Whether this cell currently holds a particle.
    fn is_occupied(self) -> bool;

    /// Whether this cell belongs to the playable region.
    fn is_playable(self) -> bool;
}
