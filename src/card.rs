//! Card number type: validation, digit sum, and the insufficiency rule.
//!
//! A card number is exactly 8 ASCII decimal digits. The insufficiency rule
//! is a pure function of the number: if its digit sum is divisible by 3 the
//! card opens at zero balance and every charge against it declines.

use crate::error::LedgerError;
use std::fmt;
use std::str::FromStr;

/// A validated 8-digit stored-value card number.
///
/// Construction goes through [`FromStr`], which enforces the format, so any
/// `CardNumber` in hand is known valid. Invalid strings never reach the
/// ledger map.
///
/// # Examples
///
/// ```
/// use easycard_vending::CardNumber;
///
/// let card: CardNumber = "13572468".parse().unwrap();
/// assert_eq!(card.digit_sum(), 36);
/// assert!(card.is_rule_insufficient());
/// assert!("1234567".parse::<CardNumber>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CardNumber(String);

impl CardNumber {
    /// Required card number length, in digits.
    pub const LEN: usize = 8;

    /// Returns `true` iff `s` is exactly 8 ASCII decimal digits.
    pub fn is_valid(s: &str) -> bool {
        s.len() == Self::LEN && s.bytes().all(|b| b.is_ascii_digit())
    }

    /// Sum of the decimal digit values of the card number.
    pub fn digit_sum(&self) -> u32 {
        // Digits guaranteed by construction
        self.0.bytes().map(|b| u32::from(b - b'0')).sum()
    }

    /// The insufficiency rule: digit sum divisible by 3.
    ///
    /// Evaluated at account-creation time to pick the opening balance, and
    /// on every charge to decline rule-insufficient cards unconditionally.
    pub fn is_rule_insufficient(&self) -> bool {
        self.digit_sum() % 3 == 0
    }

    /// The card number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CardNumber {
    type Err = LedgerError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(CardNumber(s.to_string()))
        } else {
            Err(LedgerError::InvalidCardFormat)
        }
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
