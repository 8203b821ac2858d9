//! Benchmark profiles for the tilt simulation kernel.
//!
//! Provides seeded random boards for each variant:
//!
//! - [`gathering_profile`]: walls, floor and loose particles
//! - [`filling_profile`]: an open region with one entry on the top row
//! - [`mapping_profile`]: a hidden interior ringed by hidden exterior
//! - [`assembly_profile`]: a solid shape with random notches
//!
//! [`REFERENCE`] and [`STRESS`] are the board sizes the benches use.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tilt_space::{Layout, LayoutError};

/// 64x64 board (4K cells).
pub const REFERENCE: (u32, u32) = (64, 64);

/// 256x256 board (~65K cells).
pub const STRESS: (u32, u32) = (256, 256);

fn board<F>(columns: u32, rows: u32, seed: u64, mut cell: F) -> Result<Layout, LayoutError>
where
    F: FnMut(&mut ChaCha8Rng, u32, u32) -> u8,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let codes: Vec<Vec<u8>> = (0..rows)
        .map(|r| (0..columns).map(|c| cell(&mut rng, c, r)).collect())
        .collect();
    Layout::new(codes)
}

/// Gathering board: 10% empty, 30% particles, the rest vacant.
pub fn gathering_profile(columns: u32, rows: u32, seed: u64) -> Result<Layout, LayoutError> {
    board(columns, rows, seed, |rng, _, _| match rng.gen_range(0..10) {
        0 => 0,
        1..=3 => 2,
        _ => 1,
    })
}

/// Filling board: 15% empty, one entry in the middle of row 0.
pub fn filling_profile(columns: u32, rows: u32, seed: u64) -> Result<Layout, LayoutError> {
    let entry = columns / 2;
    board(columns, rows, seed, |rng, c, r| {
        if (c, r) == (entry, 0) {
            2
        } else if rng.gen_bool(0.15) {
            0
        } else {
            1
        }
    })
}

/// Mapping board: one-cell hidden exterior border around a hidden
/// interior, with 20% of interior cells holding a particle.
pub fn mapping_profile(columns: u32, rows: u32, seed: u64) -> Result<Layout, LayoutError> {
    board(columns, rows, seed, |rng, c, r| {
        let border = c == 0 || r == 0 || c + 1 == columns || r + 1 == rows;
        if border {
            0
        } else if rng.gen_bool(0.2) {
            2
        } else {
            1
        }
    })
}

/// Assembly shape: vacant cells with 5% notches and `seeds` placed
/// tiles scattered through it.
pub fn assembly_profile(
    columns: u32,
    rows: u32,
    seeds: u32,
    seed: u64,
) -> Result<Layout, LayoutError> {
    let cells = u64::from(columns) * u64::from(rows);
    let p_seed = if cells == 0 {
        0.0
    } else {
        (f64::from(seeds) / cells as f64).min(1.0)
    };
    board(columns, rows, seed, |rng, _, _| {
        if rng.gen_bool(0.05) {
            0
        } else if rng.gen_bool(p_seed) {
            2
        } else {
            1
        }
    })
}
