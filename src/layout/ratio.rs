//! Ratio strings: colon-delimited partition weights such as `"1:1:2"`.

use std::str::FromStr;
use thiserror::Error;

/// Why a ratio string was rejected.
///
/// Rules are checked in declaration order and the first failure wins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatioError {
    /// No colon anywhere in the string.
    #[error("Ratios must contain at least one colon.")]
    MissingColon,
    /// Leading or trailing colon.
    #[error("Ratios cannot begin or end with a colon.")]
    BoundaryColon,
    /// Two colons in a row.
    #[error("Ratios can only be delimited by single colons.")]
    DoubleColon,
    /// A token that is not a base-10 integer.
    #[error("Ratios can only contain valid integers.")]
    NotInteger {
        /// The offending token.
        token: String,
    },
    /// A zero weight.
    #[error("Ratios cannot contain 0 as an integer.")]
    Zero,
    /// A negative weight.
    #[error("Ratios cannot contain negative integers.")]
    Negative {
        /// The offending weight.
        value: i32,
    },
}

/// A validated, ordered list of strictly positive weights.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ratio {
    weights: Vec<u32>,
}

impl Ratio {
    /// Parse and validate a ratio string.
    pub fn parse(s: &str) -> Result<Self, RatioError> {
        validate_delimiters(s)?;
        let weights = s.split(':').map(parse_weight).collect::<Result<_, _>>()?;
        Ok(Self { weights })
    }

    /// Build from weights known to be positive.
    pub(crate) fn from_static(weights: &[u32]) -> Self {
        debug_assert!(weights.iter().all(|&w| w > 0));
        Self {
            weights: weights.to_vec(),
        }
    }

    /// The weights, in partition order.
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }

    /// Number of partitions.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Always false: a parsed ratio has at least two weights.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Sum of all weights.
    pub fn total(&self) -> u64 {
        self.weights.iter().copied().map(u64::from).sum()
    }
}

impl FromStr for Ratio {
    type Err = RatioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Ratio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, w) in self.weights.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }
            write!(f, "{w}")?;
        }
        Ok(())
    }
}

fn validate_delimiters(s: &str) -> Result<(), RatioError> {
    if !s.contains(':') {
        return Err(RatioError::MissingColon);
    }
    if s.starts_with(':') || s.ends_with(':') {
        return Err(RatioError::BoundaryColon);
    }
    if s.contains("::") {
        return Err(RatioError::DoubleColon);
    }
    Ok(())
}

fn parse_weight(token: &str) -> Result<u32, RatioError> {
    let value: i32 = token.parse().map_err(|_| RatioError::NotInteger {
        token: token.to_owned(),
    })?;
    match value {
        0 => Err(RatioError::Zero),
        v if v < 0 => Err(RatioError::Negative { value: v }),
        v => Ok(v.unsigned_abs()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(Ratio::parse("1:1").unwrap().weights(), &[1, 1]);
        assert_eq!(Ratio::parse("2:1:3").unwrap().weights(), &[2, 1, 3]);
        assert_eq!(Ratio::parse("+4:10").unwrap().weights(), &[4, 10]);
        assert_eq!("7:3".parse::<Ratio>().unwrap().total(), 10);
    }

    #[test]
    fn test_display_round_trip() {
        let ratio = Ratio::parse("+2:1:3").unwrap();
        assert_eq!(ratio.to_string(), "2:1:3");
        assert_eq!(ratio.len(), 3);
        assert!(!ratio.is_empty());
    }

    #[test]
    fn test_missing_colon() {
        assert_eq!(Ratio::parse("12"), Err(RatioError::MissingColon));
        assert_eq!(Ratio::parse(""), Err(RatioError::MissingColon));
    }

    #[test]
    fn test_boundary_colon() {
        assert_eq!(Ratio::parse(":1:2"), Err(RatioError::BoundaryColon));
        assert_eq!(Ratio::parse("1:2:"), Err(RatioError::BoundaryColon));
        assert_eq!(Ratio::parse(":"), Err(RatioError::BoundaryColon));
    }

    #[test]
    fn test_double_colon() {
        assert_eq!(Ratio::parse("1::2"), Err(RatioError::DoubleColon));
    }

    #[test]
    fn test_not_integer() {
        assert_eq!(
            Ratio::parse("abc:1"),
            Err(RatioError::NotInteger { token: "abc".into() })
        );
        assert!(matches!(Ratio::parse("1: 2"), Err(RatioError::NotInteger { .. })));
        assert!(matches!(Ratio::parse("1.5:2"), Err(RatioError::NotInteger { .. })));
        assert!(matches!(Ratio::parse("1:+"), Err(RatioError::NotInteger { .. })));
        assert!(matches!(
            Ratio::parse("1:99999999999"),
            Err(RatioError::NotInteger { .. })
        ));
    }

    #[test]
    fn test_zero_and_negative() {
        assert_eq!(Ratio::parse("1:0"), Err(RatioError::Zero));
        assert_eq!(Ratio::parse("-0:1"), Err(RatioError::Zero));
        assert_eq!(Ratio::parse("1:-2"), Err(RatioError::Negative { value: -2 }));
    }

    #[test]
    fn test_first_failure_wins() {
        // delimiter rules are checked before any token
        assert_eq!(Ratio::parse("x::0"), Err(RatioError::DoubleColon));
        // tokens are checked left to right
        assert_eq!(Ratio::parse("0:x"), Err(RatioError::Zero));
    }

    #[test]
    fn test_messages_are_distinct_and_stable() {
        let errors = [
            RatioError::MissingColon,
            RatioError::BoundaryColon,
            RatioError::DoubleColon,
            RatioError::NotInteger { token: "a".into() },
            RatioError::Zero,
            RatioError::Negative { value: -1 },
        ];
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        for (i, a) in messages.iter().enumerate() {
            for b in &messages[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert_eq!(messages[0], "Ratios must contain at least one colon.");
        assert_eq!(messages[3], "Ratios can only contain valid integers.");
        assert_eq!(
            RatioError::NotInteger { token: "zzz".into() }.to_string(),
            messages[3]
        );
    }
}
