use std::{fmt::Display, ops::Neg, str::FromStr};

use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use crate::{
    grid::SLICE_BITS,
    parse::{seed_literal, shift_literal},
    Error,
};

/// The integer constant `k` that drives the formula
///
/// A seed is never negative. Seeds produced by [`crate::encode`] are always
/// multiples of [`SLICE_BITS`].
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Seed(BigUint);

impl Seed {
    /// Creates a new [`Seed`]
    #[must_use]
    pub const fn new(value: BigUint) -> Self {
        Self(value)
    }

    /// Returns the underlying integer
    #[must_use]
    pub const fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// Number of significant decimal digits
    #[must_use]
    pub fn digits(&self) -> usize {
        decimal_digits(&self.0)
    }

    /// Returns `floor(self + 17 * shift)`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NegativeSeed`] if the shift moves the seed below zero
    pub fn shifted(&self, shift: &Shift) -> Result<Self, Error> {
        if shift.is_zero() {
            return Ok(self.clone());
        }
        let value = BigInt::from(self.0.clone()) + shift.offset();
        value
            .to_biguint()
            .map(Self)
            .ok_or(Error::NegativeSeed(value))
    }
}

pub(crate) fn decimal_digits(value: &BigUint) -> usize {
    if value.is_zero() {
        1
    } else {
        value.to_str_radix(10).len()
    }
}

impl From<BigUint> for Seed {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(BigUint::from(value))
    }
}

impl TryFrom<BigInt> for Seed {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        value
            .to_biguint()
            .map(Self)
            .ok_or(Error::NegativeSeed(value))
    }
}

impl From<Seed> for BigInt {
    fn from(value: Seed) -> Self {
        Self::from(value.0)
    }
}

impl Display for Seed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Seed {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        seed_literal(s).map(Self)
    }
}

/// Displacement of a [`Seed`] in units of [`SLICE_BITS`]
///
/// Adding `17 * shift` to a seed selects a different stretch of the
/// (conceptually unbounded) bitmap. Shifts are rational so that the distance
/// between any two seeds can be expressed, only `floor(17 * shift)` matters
/// for rasterization.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Shift(BigRational);

impl Shift {
    /// The identity shift
    #[must_use]
    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    /// Creates a new [`Shift`]
    #[must_use]
    pub const fn new(value: BigRational) -> Self {
        Self(value)
    }

    /// Creates a whole-number [`Shift`]
    #[must_use]
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self(BigRational::from_integer(value.into()))
    }

    /// Returns the shift that makes `from` render like `to`, i.e. `(to - from) / 17`
    #[must_use]
    pub fn between(from: &Seed, to: &Seed) -> Self {
        let distance = BigInt::from(to.0.clone()) - BigInt::from(from.0.clone());
        Self(BigRational::new(distance, BigInt::from(SLICE_BITS)))
    }

    /// Returns `true` for the identity shift
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns `true` if the shift moves towards smaller seeds
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// The integer added to a seed: `floor(17 * shift)`
    #[must_use]
    pub fn offset(&self) -> BigInt {
        (&self.0 * BigRational::from_integer(BigInt::from(SLICE_BITS)))
            .floor()
            .to_integer()
    }
}

impl Default for Shift {
    fn default() -> Self {
        Self::zero()
    }
}

impl Neg for Shift {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Display for Shift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Shift {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        shift_literal(s).map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifted_by_whole_slices() -> Result<(), Error> {
        let seed = Seed::from(1_000);
        assert_eq!(seed.shifted(&Shift::from_integer(2))?, Seed::from(1_034));
        assert_eq!(seed.shifted(&Shift::from_integer(-2))?, Seed::from(966));
        assert_eq!(seed.shifted(&Shift::zero())?, seed);
        Ok(())
    }

    #[test]
    fn shifted_floors_fractions() -> Result<(), Error> {
        let seed = Seed::from(100);
        // 17 * 1/2 = 8.5
        assert_eq!(seed.shifted(&"1/2".parse()?)?, Seed::from(108));
        // 17 * -1/2 = -8.5
        assert_eq!(seed.shifted(&"-1/2".parse()?)?, Seed::from(91));
        Ok(())
    }

    #[test]
    fn shifted_below_zero() {
        let seed = Seed::from(16);
        assert_eq!(
            seed.shifted(&Shift::from_integer(-1)),
            Err(Error::NegativeSeed(BigInt::from(-1)))
        );
    }

    #[test]
    fn between_lands_on_target() -> Result<(), Error> {
        let from = Seed::from(17 * 40);
        let to = Seed::from(17 * 3 + 5);
        let shift = Shift::between(&from, &to);
        assert!(shift.is_negative());
        assert_eq!(from.shifted(&shift)?, to);
        assert_eq!(to.shifted(&-shift)?, from);
        Ok(())
    }

    #[test]
    fn digits() {
        assert_eq!(Seed::default().digits(), 1);
        assert_eq!(Seed::from(9).digits(), 1);
        assert_eq!(Seed::from(10).digits(), 2);
        assert_eq!(Seed::from(u64::MAX).digits(), 20);
    }

    #[test]
    fn try_from_negative() {
        assert!(Seed::try_from(BigInt::from(-3)).is_err());
        assert_eq!(Seed::try_from(BigInt::from(3)), Ok(Seed::from(3)));
    }
}
