use nom::{
    bytes::complete::take_while,
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map_opt, opt},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};
use num_bigint::{BigInt, BigUint};
use num_rational::BigRational;
use num_traits::Zero;

use crate::Error;

// Long constants are usually wrapped or grouped, e.g. `960_939 379...`
fn is_separator(c: char) -> bool {
    c == '_' || c.is_whitespace()
}

fn digit_groups(input: &str) -> IResult<&str, String> {
    let (input, head) = digit1(input)?;
    let (input, tail) = many0(preceded(take_while(is_separator), digit1))(input)?;
    let mut digits = String::from(head);
    tail.into_iter().for_each(|d| digits.push_str(d));
    Ok((input, digits))
}

fn unsigned(input: &str) -> IResult<&str, BigUint> {
    map_opt(digit_groups, |d| BigUint::parse_bytes(d.as_bytes(), 10))(input)
}

fn signed(input: &str) -> IResult<&str, BigInt> {
    let (input, sign) = opt(one_of("+-"))(input)?;
    let (input, magnitude) = unsigned(input)?;
    let value = BigInt::from(magnitude);
    Ok((input, if sign == Some('-') { -value } else { value }))
}

fn ratio(input: &str) -> IResult<&str, (BigInt, Option<BigUint>)> {
    pair(
        signed,
        opt(preceded(delimited(multispace0, char('/'), multispace0), unsigned)),
    )(input)
}

/// Parses a non-negative decimal integer that may be grouped with `_` or whitespace
pub fn seed_literal(input: &str) -> Result<BigUint, Error> {
    all_consuming(delimited(multispace0, unsigned, multispace0))(input)
        .map(|(_, value)| value)
        .map_err(|_| Error::Parse {
            kind: "seed",
            input: input.to_owned(),
        })
}

/// Parses `[-]digits[/digits]` into a rational
pub fn shift_literal(input: &str) -> Result<BigRational, Error> {
    let err = || Error::Parse {
        kind: "shift",
        input: input.to_owned(),
    };
    let (_, (numerator, denominator)) =
        all_consuming(delimited(multispace0, ratio, multispace0))(input).map_err(|_| err())?;
    match denominator {
        None => Ok(BigRational::from_integer(numerator)),
        Some(d) if d.is_zero() => Err(err()),
        Some(d) => Ok(BigRational::new(numerator, BigInt::from(d))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_with_groups() -> Result<(), Error> {
        assert_eq!(seed_literal("12_345")?, BigUint::from(12_345u32));
        assert_eq!(seed_literal("  12 345\n678 ")?, BigUint::from(12_345_678u32));
        assert_eq!(seed_literal("0")?, BigUint::zero());
        Ok(())
    }

    #[test]
    fn seed_rejects_garbage() {
        for input in ["", "-5", "12a", "_12", "1/2", "0x10"] {
            assert!(
                matches!(seed_literal(input), Err(Error::Parse { kind: "seed", .. })),
                "{input:?} should not parse"
            );
        }
    }

    #[test]
    fn shift_integers_and_ratios() -> Result<(), Error> {
        assert_eq!(shift_literal("-3")?, BigRational::from_integer(BigInt::from(-3)));
        assert_eq!(shift_literal("+3")?, BigRational::from_integer(BigInt::from(3)));
        assert_eq!(
            shift_literal(" 6 / 4 ")?,
            BigRational::new(BigInt::from(3), BigInt::from(2))
        );
        assert_eq!(
            shift_literal("-1_000/17")?,
            BigRational::new(BigInt::from(-1000), BigInt::from(17))
        );
        Ok(())
    }

    #[test]
    fn shift_rejects_zero_denominator() {
        assert!(shift_literal("1/0").is_err());
        assert!(shift_literal("1/").is_err());
        assert!(shift_literal("1/-2").is_err());
    }
}
