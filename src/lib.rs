//! English words for small numbers.
//!
//! Converts whole numbers from 0 to 999 into English words, such as
//! `142` → "one hundred and forty-two".

/// Numerals, their digit decomposition and conversion to words.
pub mod numeral;
pub use numeral::{humanize, Error, Numeral, ParseError, Words};

mod config;
pub use config::Config;
