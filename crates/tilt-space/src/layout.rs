//! Rectangular integer layouts: the puzzle input format.
//!
//! A layout is row-major: `rows[y][x]` is the code of the cell in column
//! `x`, row `y`. What each integer means is decided by the variant's
//! [`CellState`](tilt_core::CellState) table, not here.

use crate::error::LayoutError;
use std::fmt;

/// A validated, rectangular matrix of cell codes.
///
/// Construction rejects empty and ragged input, so every `Layout` has
/// `columns >= 1`, `rows >= 1` and exactly `columns * rows` codes.
///
/// # Examples
///
/// ```
/// use tilt_space::Layout;
///
/// let layout = Layout::new([[0u8, 1, 2], [1, 1, 0]]).unwrap();
/// assert_eq!(layout.dimensions(), (3, 2));
/// assert_eq!(layout.code(2, 0), Some(2));
///
/// let parsed = Layout::parse("012\n110").unwrap();
/// assert_eq!(parsed, layout);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    columns: u32,
    rows: u32,
    codes: Vec<u8>,
}

impl Layout {
    /// Maximum size of either dimension: positions use `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Build a layout from rows of codes.
    ///
    /// Returns [`LayoutError::EmptyLayout`] if there are no rows or the
    /// first row is empty, and [`LayoutError::RaggedRows`] if any row's
    /// length differs from the first.
    pub fn new<I, R>(rows: I) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[u8]>,
    {
        let mut codes = Vec::new();
        let mut width: Option<usize> = None;
        let mut height = 0usize;
        for (index, row) in rows.into_iter().enumerate() {
            let row = row.as_ref();
            match width {
                None => width = Some(row.len()),
                Some(expected) if expected != row.len() => {
                    return Err(LayoutError::RaggedRows {
                        row: index,
                        expected,
                        found: row.len(),
                    });
                }
                Some(_) => {}
            }
            codes.extend_from_slice(row);
            height += 1;
        }
        let width = width.unwrap_or(0);
        if width == 0 || height == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        Ok(Self {
            columns: Self::check_dim("columns", width)?,
            rows: Self::check_dim("rows", height)?,
            codes,
        })
    }

    /// Parse a layout from text, one grid row per line.
    ///
    /// Cells are separated by commas and/or whitespace, or written as
    /// contiguous single digits (`"0120"`). Blank lines and lines starting
    /// with `#` are skipped. Brackets, trailing commas and semicolons around
    /// a row are ignored, so array literals can be pasted verbatim.
    pub fn parse(text: &str) -> Result<Self, LayoutError> {
        let mut rows: Vec<Vec<u8>> = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = raw.trim();
            if line.starts_with('#') {
                continue;
            }
            let line = line
                .trim_matches(|c: char| matches!(c, '[' | ']' | ',' | ';') || c.is_whitespace());
            if line.is_empty() {
                continue;
            }
            let separated = line.contains(|c: char| c == ',' || c.is_whitespace());
            let row = if separated {
                line.split(|c: char| c == ',' || c.is_whitespace())
                    .filter(|t| !t.is_empty())
                    .map(|t| parse_token(t, line_no))
                    .collect::<Result<Vec<u8>, _>>()?
            } else {
                line.chars()
                    .map(|c| {
                        c.to_digit(10)
                            .map(|d| d as u8)
                            .ok_or_else(|| LayoutError::InvalidToken {
                                line: line_no,
                                token: c.to_string(),
                            })
                    })
                    .collect::<Result<Vec<u8>, _>>()?
            };
            rows.push(row);
        }
        Self::new(rows)
    }

    /// Wrap already-validated parts. `codes.len()` must equal
    /// `columns * rows`.
    pub(crate) fn from_parts(columns: u32, rows: u32, codes: Vec<u8>) -> Self {
        debug_assert_eq!(codes.len(), columns as usize * rows as usize);
        Self {
            columns,
            rows,
            codes,
        }
    }

    fn check_dim(name: &'static str, value: usize) -> Result<u32, LayoutError> {
        u32::try_from(value)
            .ok()
            .filter(|&v| v <= Self::MAX_DIM)
            .ok_or(LayoutError::DimensionTooLarge {
                name,
                value,
                max: Self::MAX_DIM,
            })
    }

    /// Number of columns.
    pub fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// `(columns, rows)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.columns, self.rows)
    }

    /// Code at `(col, row)`, or `None` outside the layout.
    pub fn code(&self, col: u32, row: u32) -> Option<u8> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.codes
            .get(row as usize * self.columns as usize + col as usize)
            .copied()
    }

    /// Iterate over the rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.codes.chunks(self.columns as usize)
    }

    /// All codes in row-major order.
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Copy out as nested vectors, row-major.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        self.row_slices().map(<[u8]>::to_vec).collect()
    }
}

fn parse_token(token: &str, line: usize) -> Result<u8, LayoutError> {
    token.parse::<u8>().map_err(|_| LayoutError::InvalidToken {
        line,
        token: token.to_string(),
    })
}

impl fmt::Display for Layout {
    /// Comma-separated rows, one per line; parses back with [`Layout::parse`].
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.row_slices().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, code) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(",")?;
                }
                write!(f, "{code}")?;
            }
        }
        Ok(())
    }
}
