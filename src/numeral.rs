//! Numerals and their English names.
//!
//! A [`Numeral`] is a whole number from 0 to 999. Converting it to words
//! decomposes it into [`digits::Digits`], walks the places from hundreds down
//! to units and collects [`Words`].

mod converter;
/// Digit decomposition and place values.
pub mod digits;
mod tables;
mod words;

use std::{fmt, str::FromStr};

pub use tables::Table;
use tracing::{debug, instrument};
pub use words::Words;

use self::digits::Digits;

/// Converts a number to English words.
///
/// # Examples
///
/// ```
/// use humanumber::humanize;
///
/// assert_eq!(humanize(142).unwrap(), "one hundred and forty-two");
/// assert_eq!(humanize(100).unwrap(), "one hundred");
/// assert_eq!(humanize(0).unwrap(), "zero");
/// assert!(humanize(1000).is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] if `number` is greater than 999.
pub fn humanize(number: u32) -> Result<String, Error> {
    let numeral = Numeral::try_from(number)?;
    Ok(numeral.words()?.to_string())
}

/// A whole number that can be spoken in English words (0 to 999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Numeral(u16);

impl Numeral {
    /// The largest supported number.
    pub const MAX: u16 = 999;

    /// Creates a numeral.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if `value` is greater than [`Self::MAX`].
    pub fn new(value: u16) -> Result<Self, Error> {
        if value > Self::MAX {
            return Err(Error::OutOfRange(value.into()));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u16 {
        self.0
    }

    /// Returns the decimal digits of this numeral.
    #[must_use]
    pub fn digits(self) -> Digits {
        Digits::of(self.0)
    }

    /// Returns the English words for this numeral.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingWord`] if a lookup table has no entry for a
    /// digit. This does not happen for any value a `Numeral` can hold.
    #[instrument(level = "debug", skip(self), fields(value = self.0))]
    pub fn words(self) -> Result<Words, Error> {
        let digits = self.digits();
        debug!(digits = ?digits.as_slice(), "decomposed");
        converter::convert(&digits)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Numeral> for u16 {
    fn from(numeral: Numeral) -> Self {
        numeral.0
    }
}

impl TryFrom<u16> for Numeral {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<u32> for Numeral {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let value = u16::try_from(value).map_err(|_| Error::OutOfRange(value.into()))?;
        Self::new(value)
    }
}

impl TryFrom<u64> for Numeral {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        let value = u16::try_from(value).map_err(|_| Error::OutOfRange(value))?;
        Self::new(value)
    }
}

impl TryFrom<i64> for Numeral {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value < 0 {
            return Err(Error::Negative(value));
        }
        Self::try_from(value.unsigned_abs())
    }
}

impl FromStr for Numeral {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty);
        }

        let is_numeric = |text: &str| {
            !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        };

        if let Some(magnitude) = trimmed.strip_prefix('-') {
            if is_numeric(magnitude) {
                return Err(ParseError::Negative(trimmed.to_string()));
            }
            return Err(ParseError::Invalid(trimmed.to_string()));
        }

        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        if !is_numeric(unsigned) {
            return Err(ParseError::Invalid(trimmed.to_string()));
        }
        if unsigned.contains('.') {
            return Err(ParseError::NotAnInteger(trimmed.to_string()));
        }

        // All ASCII digits at this point, so the only failure is overflow.
        let value = unsigned
            .parse::<u64>()
            .map_err(|_| ParseError::OutOfRange(trimmed.to_string()))?;
        Self::try_from(value).map_err(|_| ParseError::OutOfRange(trimmed.to_string()))
    }
}

impl TryFrom<&str> for Numeral {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_str(value)
    }
}

/// Errors that can occur while converting a number to words.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum Error {
    /// The number is larger than 999.
    #[error("{0} is out of range: expected a number from 0 to {max}", max = Numeral::MAX)]
    OutOfRange(u64),

    /// The number is negative.
    #[error("{0} is negative: expected a number from 0 to {max}", max = Numeral::MAX)]
    Negative(i64),

    /// A digit has a place value with no English name.
    #[error("no place name for 10^{power}")]
    UnsupportedPlace {
        /// The power of ten of the digit's place.
        power: usize,
    },

    /// A lookup table has no word for a value.
    #[error("no word for {value} in the {table} table")]
    MissingWord {
        /// The table that was consulted.
        table: Table,
        /// The value that was looked up.
        value: u8,
    },
}

/// Errors that can occur when parsing a [`Numeral`] from text.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty or only whitespace.
    #[error("expected a number, got an empty string")]
    Empty,

    /// The input is a negative number.
    #[error("'{0}' is negative: expected a number from 0 to {max}", max = Numeral::MAX)]
    Negative(String),

    /// The input has a fractional part.
    #[error("'{0}' is not a whole number")]
    NotAnInteger(String),

    /// The input is a whole number larger than 999.
    #[error("'{0}' is out of range: expected a number from 0 to {max}", max = Numeral::MAX)]
    OutOfRange(String),

    /// The input is not a number at all.
    #[error("'{0}' is not a number")]
    Invalid(String),
}
