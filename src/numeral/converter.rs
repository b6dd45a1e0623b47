//! Place-by-place conversion of digits into words.

use tracing::trace;

use super::{
    digits::{Digits, Place},
    tables, Error, Words,
};

/// State handed from one place to the next.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Carry {
    /// The tens digit was 1, so the units digit names a teen.
    teen_offset: bool,
    /// A decade word was emitted and must be hyphen-joined to the unit word.
    hyphenate: bool,
}

/// Whether lower places still need to be spoken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

/// Converts a digit sequence into words.
///
/// Numbers with more than three digits are rejected, since there is no place
/// name above the hundreds.
pub fn convert(digits: &Digits) -> Result<Words, Error> {
    let mut words = Words::default();

    if digits.as_slice() == [0] {
        words.push(tables::ZERO);
        return Ok(words);
    }

    let mut carry = Carry::default();
    for (power, digit) in digits.with_powers() {
        let place = Place::from_power(power).ok_or(Error::UnsupportedPlace { power })?;
        trace!(place_value = place.value(), digit, ?carry, "converting place");

        let (next, flow) = match place {
            Place::Hundreds => hundreds(digit, digits, carry, &mut words)?,
            Place::Tens => tens(digit, digits, carry, &mut words)?,
            Place::Units => units(digit, carry, &mut words)?,
        };
        carry = next;

        if flow == Flow::Stop {
            break;
        }
    }

    words.set_hyphenated(carry.hyphenate);
    Ok(words)
}

fn hundreds(
    digit: u8,
    digits: &Digits,
    carry: Carry,
    words: &mut Words,
) -> Result<(Carry, Flow), Error> {
    words.push(tables::unit(digit)?);
    words.push(tables::HUNDRED);

    if digits.tens() == 0 && digits.units() == 0 {
        return Ok((carry, Flow::Stop));
    }
    words.push(tables::AND);
    Ok((carry, Flow::Continue))
}

fn tens(
    digit: u8,
    digits: &Digits,
    carry: Carry,
    words: &mut Words,
) -> Result<(Carry, Flow), Error> {
    match digit {
        0 => Ok((carry, Flow::Continue)),
        1 => Ok((
            Carry {
                teen_offset: true,
                ..carry
            },
            Flow::Continue,
        )),
        _ => {
            words.push(tables::decade(digit * 10)?);
            if digits.units() == 0 {
                Ok((carry, Flow::Stop))
            } else {
                Ok((
                    Carry {
                        hyphenate: true,
                        ..carry
                    },
                    Flow::Continue,
                ))
            }
        }
    }
}

fn units(digit: u8, carry: Carry, words: &mut Words) -> Result<(Carry, Flow), Error> {
    let word = if carry.teen_offset {
        tables::teen(digit + 10)?
    } else {
        tables::unit(digit)?
    };
    words.push(word);
    Ok((carry, Flow::Stop))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn convert_number(number: u16) -> Result<String, Error> {
        convert(&Digits::of(number)).map(|words| words.to_string())
    }

    #[test_case(0, "zero")]
    #[test_case(3, "three")]
    #[test_case(10, "ten")]
    #[test_case(17, "seventeen")]
    #[test_case(30, "thirty")]
    #[test_case(45, "forty-five")]
    #[test_case(100, "one hundred")]
    #[test_case(105, "one hundred and five")]
    #[test_case(110, "one hundred and ten")]
    #[test_case(119, "one hundred and nineteen")]
    #[test_case(120, "one hundred and twenty")]
    #[test_case(142, "one hundred and forty-two")]
    #[test_case(700, "seven hundred")]
    #[test_case(999, "nine hundred and ninety-nine")]
    fn converts(number: u16, expected: &str) {
        assert_eq!(convert_number(number).unwrap(), expected);
    }

    #[test]
    fn four_digits_have_no_place_name() {
        assert_eq!(
            convert_number(1000),
            Err(Error::UnsupportedPlace { power: 3 })
        );
    }

    #[test]
    fn tens_digit_one_defers_to_units() {
        let mut words = Words::default();
        let (carry, flow) = tens(1, &Digits::of(13), Carry::default(), &mut words).unwrap();
        assert!(carry.teen_offset);
        assert!(!carry.hyphenate);
        assert_eq!(flow, Flow::Continue);
        assert!(words.tokens().is_empty());
    }

    #[test]
    fn round_decade_stops_early() {
        let mut words = Words::default();
        let (carry, flow) = tens(6, &Digits::of(60), Carry::default(), &mut words).unwrap();
        assert_eq!(flow, Flow::Stop);
        assert!(!carry.hyphenate);
        assert_eq!(words.tokens(), ["sixty"]);
    }

    #[test]
    fn compound_decade_requests_hyphen() {
        let mut words = Words::default();
        let (carry, flow) = tens(6, &Digits::of(64), Carry::default(), &mut words).unwrap();
        assert_eq!(flow, Flow::Continue);
        assert!(carry.hyphenate);
    }

    #[test]
    fn hyphenated_output_keeps_tokens_separate() {
        let words = convert(&Digits::of(264)).unwrap();
        assert_eq!(words.tokens(), ["two", "hundred", "and", "sixty", "four"]);
        assert!(words.is_hyphenated());
    }

    #[test]
    fn lone_zero_units_digit_is_a_lookup_failure() {
        let mut words = Words::default();
        assert!(matches!(
            units(0, Carry::default(), &mut words),
            Err(Error::MissingWord { value: 0, .. })
        ));
    }
}
