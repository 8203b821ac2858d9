//! Sample boards and small layout builders.
//!
//! The four sample boards are the ones each variant was first played on.
//! Codes follow the variant's own table (see the `tilt-propagators` cell
//! enums), so the same integer means different things per board.

use tilt_space::Layout;

/// Gathering board, 22 x 10: `0` outside, `1` vacant, `2` particle.
pub const GATHERING_SAMPLE: [[u8; 22]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 2, 0, 0, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 2, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 2, 2, 0],
    [0, 1, 2, 1, 1, 1, 2, 2, 1, 2, 1, 1, 1, 1, 1, 1, 1, 2, 1, 2, 2, 0],
    [0, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 2, 1, 2, 1, 1, 2, 1, 1, 1, 1, 0],
    [0, 1, 1, 0, 0, 0, 2, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 2, 0],
    [0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 2, 0, 0, 0, 0, 1, 1, 0, 2, 1, 0],
    [0, 0, 0, 2, 2, 0, 1, 0, 0, 0, 0, 1, 0, 0, 2, 0, 0, 2, 0, 0, 0, 0],
    [0, 0, 2, 1, 2, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 2, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Filling board, 17 x 6: `0` outside, `1` vacant, `2` entry.
pub const FILLING_SAMPLE: [[u8; 17]; 6] = [
    [1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 0, 2, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [0, 1, 1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1],
];

/// Mapping board, 22 x 10: `0` hidden exterior, `1` hidden interior,
/// `2` particle.
pub const MAPPING_SAMPLE: [[u8; 22]; 10] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 0, 2, 1, 0, 0, 0, 0, 1, 1, 0],
    [0, 1, 1, 1, 1, 1, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 1, 2, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 0],
    [0, 1, 1, 0, 0, 0, 1, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0, 1, 1, 0],
    [0, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1, 1, 0, 2, 1, 0],
    [0, 0, 0, 2, 1, 0, 1, 0, 0, 0, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 0, 0],
    [0, 0, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

/// Assembly board, 17 x 6: `0` outside, `1` shape.
pub const ASSEMBLY_SAMPLE: [[u8; 17]; 6] = [
    [1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1],
    [1, 1, 1, 0, 1, 1, 0, 0, 1, 0, 0, 0, 1, 0, 1, 1, 1],
    [1, 1, 1, 0, 0, 0, 0, 1, 1, 1, 1, 1, 0, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
    [1, 1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 0, 0, 0, 1, 1, 1],
    [1, 1, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1],
];

fn sample<const W: usize, const H: usize>(rows: &[[u8; W]; H]) -> Layout {
    Layout::new(rows.iter()).expect("sample boards are rectangular and non-empty")
}

pub fn gathering_sample() -> Layout {
    sample(&GATHERING_SAMPLE)
}

pub fn filling_sample() -> Layout {
    sample(&FILLING_SAMPLE)
}

pub fn mapping_sample() -> Layout {
    sample(&MAPPING_SAMPLE)
}

pub fn assembly_sample() -> Layout {
    sample(&ASSEMBLY_SAMPLE)
}

/// A one-row layout.
pub fn row_layout(codes: &[u8]) -> Layout {
    Layout::new([codes]).expect("row_layout needs at least one code")
}

/// A one-column layout, `codes[0]` at the top.
pub fn column_layout(codes: &[u8]) -> Layout {
    Layout::new(codes.iter().map(|&c| [c])).expect("column_layout needs at least one code")
}
