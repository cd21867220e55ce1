use num_bigint::BigUint;
use tracing::debug;

use crate::{
    grid::{Grid, SLICES, SLICE_BITS},
    seed::Seed,
    Error,
};

// Position of the pixel's bit in `seed / 17`. Columns are read right to left,
// each one bottom to top, so the bottom-left pixel is the most significant bit.
const fn bit_position(row: usize, column: usize) -> u64 {
    (SLICE_BITS * (SLICES - 1 - column) + row) as u64
}

/// Derives the seed that rasterizes to `grid`
///
/// The pixels are packed into a `17 * 106` bit integer which is then scaled by
/// 17, so [`crate::evaluate`] of the result reproduces `grid` pixel for pixel.
#[must_use]
pub fn encode(grid: &Grid) -> Seed {
    let mut packed = BigUint::default();
    for (row, pixels) in grid.rows().enumerate() {
        for (column, _) in pixels.iter().enumerate().filter(|(_, p)| **p) {
            packed.set_bit(bit_position(row, column), true);
        }
    }
    debug!("Packed {} ink pixels into {} bits", grid.ink(), packed.bits());
    Seed::new(packed * SLICE_BITS)
}

/// Derives the seed for a grid given as rows of pixels
///
/// # Errors
///
/// Returns [`Error::InvalidDimensions`] unless `rows` is exactly
/// [`Grid::HEIGHT`] rows of [`Grid::WIDTH`] pixels
pub fn encode_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Seed, Error> {
    Grid::from_rows(rows).map(|grid| encode(&grid))
}

/// Rasterizes `seed`, the inverse of [`encode`]
#[must_use]
pub fn decode(seed: &Seed) -> Grid {
    crate::evaluate(seed)
}
