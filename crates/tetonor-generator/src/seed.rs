use std::{fmt, str::FromStr};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that fully determines a free-play puzzle.
///
/// Displays and parses as 64 lowercase hex digits.
///
/// # Examples
///
/// ```
/// use tetonor_generator::PuzzleSeed;
///
/// let seed = PuzzleSeed::from_phrase("hello");
/// let parsed: PuzzleSeed = seed.to_string().parse()?;
/// assert_eq!(seed, parsed);
/// # Ok::<(), tetonor_generator::PuzzleSeedParseError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleSeed([u8; 32]);

impl PuzzleSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Draws a fresh seed from ambient entropy.
    #[must_use]
    pub fn random() -> Self {
        Self::from_bytes(rand::random())
    }

    /// Derives a seed from an arbitrary phrase with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        let digest = Sha256::digest(phrase.as_bytes());
        let mut bytes = [0; 32];
        bytes.copy_from_slice(&digest);
        Self::from_bytes(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates the generator driven by this seed.
    #[must_use]
    pub fn rng(&self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl fmt::Debug for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PuzzleSeed({self})")
    }
}

impl fmt::Display for PuzzleSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Error returned when parsing a [`PuzzleSeed`] from hex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleSeedParseError {
    /// The input is not 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Input length in bytes.
        len: usize,
    },
    /// A character is not a hex digit.
    #[display("invalid hex digit at index {index}")]
    InvalidHexDigit {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl FromStr for PuzzleSeed {
    type Err = PuzzleSeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.as_bytes();
        if s.len() != 64 {
            return Err(PuzzleSeedParseError::InvalidLength { len: s.len() });
        }
        let nibble = |index: usize| {
            char::from(s[index])
                .to_digit(16)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or(PuzzleSeedParseError::InvalidHexDigit { index })
        };
        let mut bytes = [0; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = (nibble(i * 2)? << 4) | nibble(i * 2 + 1)?;
        }
        Ok(Self::from_bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use tetonor_random::RandomSource as _;

    use super::*;

    const HEX: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    #[test]
    fn test_hex_round_trip() {
        let seed = PuzzleSeed::from_str(HEX).unwrap();
        assert_eq!(seed.as_bytes()[0], 0xc1);
        assert_eq!(seed.to_string(), HEX);
        assert_eq!(
            HEX.to_uppercase().parse::<PuzzleSeed>().unwrap().to_string(),
            HEX
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "abc".parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidLength { len: 3 })
        );
        let mut bad = HEX.to_owned();
        bad.replace_range(10..11, "g");
        assert_eq!(
            bad.parse::<PuzzleSeed>(),
            Err(PuzzleSeedParseError::InvalidHexDigit { index: 10 })
        );
    }

    #[test]
    fn test_bytes_display_as_hex() {
        let mut bytes = [0; 32];
        bytes[0] = 0xab;
        bytes[31] = 0x01;
        let seed = PuzzleSeed::from_bytes(bytes);
        assert_eq!(seed.as_bytes(), &bytes);
        let hex = seed.to_string();
        assert!(hex.starts_with("ab00"));
        assert!(hex.ends_with("0001"));
        assert_eq!(hex.parse::<PuzzleSeed>(), Ok(seed));
    }

    #[test]
    fn test_phrase_is_stable() {
        assert_eq!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("a"));
        assert_ne!(PuzzleSeed::from_phrase("a"), PuzzleSeed::from_phrase("b"));
    }

    #[test]
    fn test_same_seed_same_stream() {
        let seed = PuzzleSeed::random();
        let mut a = seed.rng();
        let mut b = seed.rng();
        for _ in 0..32 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }
}
