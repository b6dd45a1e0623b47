//! The ordered word tokens produced by a conversion.

use std::fmt;

/// A sequence of English words for a number.
///
/// Tokens are joined with single spaces. When the sequence is hyphenated the
/// final two tokens (a decade word and a unit word) are joined with a hyphen
/// instead, as in "forty-two".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Words {
    tokens: Vec<&'static str>,
    hyphenated: bool,
}

impl Words {
    /// Appends a word.
    pub(crate) fn push(&mut self, word: &'static str) {
        self.tokens.push(word);
    }

    pub(crate) const fn set_hyphenated(&mut self, hyphenated: bool) {
        self.hyphenated = hyphenated;
    }

    /// Returns the individual words, in order.
    #[must_use]
    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    /// Whether the last two words are joined with a hyphen.
    #[must_use]
    pub const fn is_hyphenated(&self) -> bool {
        self.hyphenated
    }
}

impl fmt::Display for Words {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let last = self.tokens.len().saturating_sub(1);
        for (index, token) in self.tokens.iter().enumerate() {
            if index > 0 {
                let separator = if self.hyphenated && index == last {
                    "-"
                } else {
                    " "
                };
                f.write_str(separator)?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(tokens: &[&'static str], hyphenated: bool) -> Words {
        let mut words = Words::default();
        for token in tokens {
            words.push(token);
        }
        words.set_hyphenated(hyphenated);
        words
    }

    #[test]
    fn joins_with_spaces() {
        let words = words(&["one", "hundred", "and", "one"], false);
        assert_eq!(words.to_string(), "one hundred and one");
    }

    #[test]
    fn hyphen_joins_only_the_last_pair() {
        let words = words(&["one", "hundred", "and", "forty", "two"], true);
        assert_eq!(words.to_string(), "one hundred and forty-two");
        assert_eq!(words.tokens().len(), 5);
    }

    #[test]
    fn single_token_ignores_hyphen_flag() {
        assert_eq!(words(&["seven"], true).to_string(), "seven");
    }

    #[test]
    fn empty_sequence_is_empty_string() {
        assert_eq!(Words::default().to_string(), "");
    }
}
