//! Rasterization of a [`Seed`] through Tupper's inequality
//!
//! The formula
//!
//! ```text
//! 1/2 < floor(mod(floor(y/17) * 2^(-17*floor(x) - mod(floor(y), 17)), 2))
//! ```
//!
//! is a disguised bit read: for `n = k + column`, the pixel at slice `x` is bit
//! `17*x + n mod 17` of `n / 17`. Evaluating it with shifts and masks on exact
//! integers means no working precision has to be configured at all.

use bon::Builder;
use num_bigint::BigUint;
use num_integer::Integer;
use tracing::{debug, trace};

use crate::{
    grid::{Grid, SLICES, SLICE_BITS},
    seed::{decimal_digits, Seed, Shift},
    Error,
};

/// Arithmetic precision used while rasterizing
#[derive(Debug, Default, Eq, PartialEq, Copy, Clone)]
pub enum Precision {
    /// Exact integer arithmetic, never loses a bit
    #[default]
    Exact,
    /// Only this many significant decimal digits of the working seed survive,
    /// the rest are rounded away as a fixed-precision float context would
    Digits(usize),
}

impl Precision {
    /// Checks that every significant digit of `value` can be carried
    ///
    /// # Errors
    ///
    /// Returns [`Error::InsufficientPrecision`] if `value` has more significant
    /// digits than this precision holds
    pub fn check(self, value: &BigUint) -> Result<(), Error> {
        match self {
            Self::Exact => Ok(()),
            Self::Digits(available) => {
                let required = decimal_digits(value);
                if required > available {
                    Err(Error::InsufficientPrecision {
                        required,
                        available,
                    })
                } else {
                    Ok(())
                }
            }
        }
    }

    // round half up to the configured number of significant digits
    fn round(self, value: BigUint) -> BigUint {
        let Self::Digits(available) = self else {
            return value;
        };
        let digits = decimal_digits(&value);
        if digits <= available {
            return value;
        }
        let Ok(dropped) = u32::try_from(digits - available) else {
            return BigUint::default();
        };
        let unit: BigUint = BigUint::from(10u32).pow(dropped);
        let half = &unit / 2u32;
        ((value + half) / &unit) * unit
    }
}

/// Rasterizes seeds into [`Grid`]s
///
/// The default evaluator is exact. A limited [`Precision`] reproduces what a
/// fixed-precision arithmetic context does to large seeds: with `strict` set the
/// evaluation is refused up front, otherwise pixels are silently read from the wrong bits.
///
/// ```rust
/// use libtupper::{Evaluator, Precision, Preset};
///
/// let lossy = Evaluator::builder().precision(Precision::Digits(100)).build();
/// let seed = Preset::Classic.seed();
/// assert_ne!(lossy.evaluate(&seed)?, libtupper::evaluate(&seed));
/// # Ok::<(), libtupper::Error>(())
/// ```
#[derive(Debug, Default, Eq, PartialEq, Clone, Builder)]
pub struct Evaluator {
    /// Working precision
    #[builder(default)]
    precision: Precision,
    /// Refuse seeds that do not fit the precision
    #[builder(default)]
    strict: bool,
}

impl Evaluator {
    /// Rasterizes `seed` without a shift
    ///
    /// # Errors
    ///
    /// See [`Self::evaluate_shifted`]
    pub fn evaluate(&self, seed: &Seed) -> Result<Grid, Error> {
        self.evaluate_shifted(seed, &Shift::zero())
    }

    /// Rasterizes `seed + 17 * shift`
    ///
    /// # Errors
    ///
    /// - [`Error::NegativeSeed`] if the shift moves the seed below zero
    /// - [`Error::InsufficientPrecision`] if the evaluator is strict and the
    ///   largest working value does not fit its precision
    pub fn evaluate_shifted(&self, seed: &Seed, shift: &Shift) -> Result<Grid, Error> {
        let base = seed.shifted(shift)?;
        if self.strict {
            self.precision
                .check(&(base.as_biguint() + (SLICE_BITS - 1)))?;
        }
        Ok(rasterize(base.as_biguint(), self.precision))
    }
}

fn rasterize(base: &BigUint, precision: Precision) -> Grid {
    debug!(
        "Rasterizing {} bit seed at {:?} precision",
        base.bits(),
        precision
    );
    let mut grid = Grid::empty();
    for row in 0..SLICE_BITS {
        let n = precision.round(base + row);
        let (slice_block, bit_offset) = n.div_rem(&BigUint::from(SLICE_BITS));
        // always below 17, zero has no digits
        let bit_offset = u64::from(bit_offset.iter_u32_digits().next().unwrap_or(0));
        trace!("row {row}: bit offset {bit_offset}");
        for slice in 0..SLICES {
            let bit = (SLICE_BITS * slice) as u64 + bit_offset;
            // slice 0 is drawn at the right edge
            grid.set(row, SLICES - 1 - slice, slice_block.bit(bit));
        }
    }
    debug!("Rasterized {} ink pixels", grid.ink());
    grid
}

/// Rasterizes `seed` exactly
///
/// This is the decoding direction of the [`crate::codec`]: for every seed `s`
/// returned by [`crate::encode`], `encode(&evaluate(&s)) == s`.
#[must_use]
pub fn evaluate(seed: &Seed) -> Grid {
    rasterize(seed.as_biguint(), Precision::Exact)
}

/// Rasterizes `seed + 17 * shift` exactly
///
/// # Errors
///
/// Returns [`Error::NegativeSeed`] if the shift moves the seed below zero
pub fn evaluate_shifted(seed: &Seed, shift: &Shift) -> Result<Grid, Error> {
    Evaluator::default().evaluate_shifted(seed, shift)
}
