//! Decomposition of a number into decimal digits and place values.

/// The positional weight of a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Place {
    /// Place value 1.
    Units,
    /// Place value 10.
    Tens,
    /// Place value 100.
    Hundreds,
}

impl Place {
    /// Returns the place for a power of ten, if it is one the converter names.
    ///
    /// ```
    /// use humanumber::numeral::digits::Place;
    ///
    /// assert_eq!(Place::from_power(2), Some(Place::Hundreds));
    /// assert_eq!(Place::from_power(3), None);
    /// ```
    #[must_use]
    pub const fn from_power(power: usize) -> Option<Self> {
        match power {
            0 => Some(Self::Units),
            1 => Some(Self::Tens),
            2 => Some(Self::Hundreds),
            _ => None,
        }
    }

    /// Returns the place value (1, 10 or 100).
    #[must_use]
    pub const fn value(self) -> u16 {
        match self {
            Self::Units => 1,
            Self::Tens => 10,
            Self::Hundreds => 100,
        }
    }
}

/// The decimal digits of a number, most significant first.
///
/// Always holds at least one digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(Vec<u8>);

impl Digits {
    /// Decomposes a number into its digits.
    ///
    /// ```
    /// use humanumber::numeral::digits::Digits;
    ///
    /// assert_eq!(Digits::of(142).as_slice(), &[1, 4, 2]);
    /// assert_eq!(Digits::of(7).as_slice(), &[7]);
    /// ```
    #[must_use]
    pub fn of(number: u16) -> Self {
        Self(number.to_string().bytes().map(|b| b - b'0').collect())
    }

    /// Returns the digits as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    /// Returns the number of digits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a number has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the units digit.
    #[must_use]
    pub fn units(&self) -> u8 {
        self.0.last().copied().unwrap_or_default()
    }

    /// Returns the tens digit, or zero for single-digit numbers.
    #[must_use]
    pub fn tens(&self) -> u8 {
        self.0.iter().rev().nth(1).copied().unwrap_or_default()
    }

    /// Pairs each digit with its power of ten, highest power first.
    pub fn with_powers(&self) -> impl Iterator<Item = (usize, u8)> + '_ {
        let highest = self.0.len() - 1;
        self.0
            .iter()
            .enumerate()
            .map(move |(index, &digit)| (highest - index, digit))
    }
}
