//! Static English word tables.
//!
//! The three tables cover disjoint key ranges: units (1-9), teens (10-19) and
//! decades (20, 30, ..., 90). Zero has its own constant because it is only
//! ever spoken on its own.

use std::fmt;

use super::Error;

/// The word for the number zero.
pub const ZERO: &str = "zero";

/// The word spoken after the hundreds digit.
pub const HUNDRED: &str = "hundred";

/// The connector between the hundreds and the rest of the number.
pub const AND: &str = "and";

static UNITS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

static TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

static DECADES: [&str; 8] = [
    "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// Identifies the lookup table a word was requested from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Table {
    /// Digits 1 to 9.
    Units,
    /// The irregular values 10 to 19.
    Teens,
    /// Multiples of ten from 20 to 90.
    Decades,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Self::Units => "units",
            Self::Teens => "teens",
            Self::Decades => "decades",
        };
        f.write_str(name)
    }
}

/// Looks up the word for a single digit (1-9).
pub fn unit(digit: u8) -> Result<&'static str, Error> {
    usize::from(digit)
        .checked_sub(1)
        .and_then(|index| UNITS.get(index))
        .copied()
        .ok_or(Error::MissingWord {
            table: Table::Units,
            value: digit,
        })
}

/// Looks up the irregular word for a value from 10 to 19.
pub fn teen(value: u8) -> Result<&'static str, Error> {
    usize::from(value)
        .checked_sub(10)
        .and_then(|index| TEENS.get(index))
        .copied()
        .ok_or(Error::MissingWord {
            table: Table::Teens,
            value,
        })
}

/// Looks up the word for a multiple of ten from 20 to 90.
pub fn decade(value: u8) -> Result<&'static str, Error> {
    let missing = Error::MissingWord {
        table: Table::Decades,
        value,
    };
    if value % 10 != 0 {
        return Err(missing);
    }
    usize::from(value / 10)
        .checked_sub(2)
        .and_then(|index| DECADES.get(index))
        .copied()
        .ok_or(missing)
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(1, "one")]
    #[test_case(5, "five")]
    #[test_case(9, "nine")]
    fn unit_words(digit: u8, expected: &str) {
        assert_eq!(unit(digit).unwrap(), expected);
    }

    #[test_case(10, "ten")]
    #[test_case(12, "twelve")]
    #[test_case(15, "fifteen")]
    #[test_case(19, "nineteen")]
    fn teen_words(value: u8, expected: &str) {
        assert_eq!(teen(value).unwrap(), expected);
    }

    #[test_case(20, "twenty")]
    #[test_case(40, "forty")]
    #[test_case(90, "ninety")]
    fn decade_words(value: u8, expected: &str) {
        assert_eq!(decade(value).unwrap(), expected);
    }

    #[test_case(0; "zero has no unit word")]
    #[test_case(10; "ten is not a digit")]
    fn unit_misses(digit: u8) {
        assert_eq!(
            unit(digit),
            Err(Error::MissingWord {
                table: Table::Units,
                value: digit
            })
        );
    }

    #[test_case(9)]
    #[test_case(20)]
    fn teen_misses(value: u8) {
        assert!(matches!(
            teen(value),
            Err(Error::MissingWord {
                table: Table::Teens,
                ..
            })
        ));
    }

    #[test_case(10; "ten is a teen")]
    #[test_case(45; "not a multiple of ten")]
    #[test_case(100; "past ninety")]
    #[test_case(0; "zero")]
    fn decade_misses(value: u8) {
        assert!(matches!(
            decade(value),
            Err(Error::MissingWord {
                table: Table::Decades,
                ..
            })
        ));
    }

    #[test]
    fn missing_word_message_names_the_table() {
        let err = decade(45).unwrap_err();
        assert_eq!(err.to_string(), "no word for 45 in the decades table");
    }
}
