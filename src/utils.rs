//! Utility functions used accross the library
use crate::{Error, Scalar};

/// Restrict value to a certain interval
#[inline]
pub fn clamp<T>(val: T, min: T, max: T) -> T
where
    T: PartialOrd,
{
    if val < min {
        min
    } else if val > max {
        max
    } else {
        val
    }
}

/// Parse exactly `N` scalars separated by commas and/or whitespace
pub(crate) fn parse_scalars<const N: usize>(text: &str) -> Result<[Scalar; N], Error> {
    let mut result = [0.0; N];
    let mut count = 0;
    for (token_offset, token) in scalar_tokens(text) {
        if count == N {
            return Err(Error::ParseError {
                reason: format!("expected {} values, found more", N),
                offset: token_offset,
            });
        }
        result[count] =
            lexical_core::parse::<Scalar>(token.as_bytes()).map_err(|error| Error::ParseError {
                reason: format!("invalid scalar {:?}: {}", token, error),
                offset: token_offset,
            })?;
        count += 1;
    }
    if count != N {
        return Err(Error::ParseError {
            reason: format!("expected {} values, found {}", N, count),
            offset: text.len(),
        });
    }
    Ok(result)
}

/// Non-empty tokens separated by commas and/or whitespace, with their byte offsets
fn scalar_tokens(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(move |token| (token.as_ptr() as usize - text.as_ptr() as usize, token))
}

/// Make sure all values are finite, `name` identifies the argument in the error
pub(crate) fn check_finite(name: &'static str, values: &[Scalar]) -> Result<(), Error> {
    match values.iter().find(|value| !value.is_finite()) {
        None => Ok(()),
        Some(value) => Err(Error::InvalidArgument {
            name,
            reason: format!("coordinate is not finite: {}", value),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    #[macro_export]
    macro_rules! assert_approx_eq {
        ( $v0:expr, $v1: expr ) => {{
            assert!(($v0 - $v1).abs() < $crate::EPSILON, "{} != {}", $v0, $v1);
        }};
        ( $v0:expr, $v1: expr, $e: expr ) => {{
            assert!(($v0 - $v1).abs() < $e, "{} != {}", $v0, $v1);
        }};
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-1.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(3, 0, 2), 2);
    }

    #[test]
    fn test_parse_scalars() -> Result<(), Error> {
        assert_eq!(parse_scalars::<2>("1,2")?, [1.0, 2.0]);
        assert_eq!(parse_scalars::<4>(" 1.5, -2 3e1\t4 ")?, [1.5, -2.0, 30.0, 4.0]);

        match parse_scalars::<2>("1,x") {
            Err(Error::ParseError { offset, .. }) => assert_eq!(offset, 2),
            other => panic!("unexpected result: {:?}", other),
        }
        match parse_scalars::<2>("1\u{3000}x") {
            Err(Error::ParseError { offset, .. }) => assert_eq!(offset, 4),
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(parse_scalars::<2>("1\u{3000}2")?, [1.0, 2.0]);
        assert!(parse_scalars::<2>("1").is_err());
        assert!(parse_scalars::<2>("1 2 3").is_err());
        Ok(())
    }

    #[test]
    fn test_check_finite() {
        assert!(check_finite("line", &[1.0, -2.0]).is_ok());
        match check_finite("rect", &[1.0, Scalar::NAN]) {
            Err(Error::InvalidArgument { name, .. }) => assert_eq!(name, "rect"),
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(check_finite("rect", &[Scalar::INFINITY]).is_err());
    }
}
