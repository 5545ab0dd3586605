//! The structured-message text format and its grammar.
//!
//! A structured message is the 20-character form printed on Belgian payment
//! slips, e.g. `+++090/9337/55493+++`: three circumfix symbols, twelve
//! digits in 3/4/5 groups, three circumfix symbols. The twelve digits are a
//! ten-digit communication number followed by its two-digit mod-97 checksum.
//!
//! Parsing is deliberately more permissive than generation, matching the
//! grammar historically used for hand-entered input:
//!
//! ```text
//! [+*]{3} [0-9]{3} /? [0-9]{4} /? [0-9]{5} [+*]{3}
//! ```
//!
//! Both `/` separators are optional and the six circumfix characters may
//! mix `+` and `*` freely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::checksum::mod97;
use crate::circumfix::Circumfix;
use crate::error::TransferMessageError;

// ---------------------------------------------------------------------------
// StructuredMessage
// ---------------------------------------------------------------------------

/// A grammar-checked structured-message string.
///
/// Construction via [`TryFrom`] or [`FromStr`] enforces the grammar above;
/// the accepted text is stored verbatim (no normalisation of separators or
/// circumfix symbols).
///
/// Holding a `StructuredMessage` guarantees well-formed *text*, not a
/// correct checksum — use [`is_checksum_valid`](Self::is_checksum_valid)
/// for that.
///
/// # Examples
///
/// ```
/// use ogm_models::StructuredMessage;
///
/// let message: StructuredMessage = "+++090/9337/55493+++".parse().unwrap();
/// assert_eq!(message.as_str(), "+++090/9337/55493+++");
/// assert!(message.is_checksum_valid());
///
/// // Separators are optional and circumfix symbols may mix.
/// assert!("***090933755493+*+".parse::<StructuredMessage>().is_ok());
///
/// // Anything else is rejected.
/// assert!("+++090/9337/5549+++".parse::<StructuredMessage>().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct StructuredMessage(String);

impl StructuredMessage {
    /// Create a structured message **without validation**.
    ///
    /// Only for text this crate produced itself (see
    /// [`TransferMessage::generate`](crate::TransferMessage::generate)).
    pub(crate) fn new_unchecked(text: String) -> Self {
        Self(text)
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extract the embedded payload: the ten-digit communication number and
    /// the two-digit checksum.
    ///
    /// Returns `None` if the text does not contain exactly twelve digits
    /// (unreachable through validated construction, but the text-only
    /// checksum path must not trust it).
    pub fn digits(&self) -> Option<(u64, u8)> {
        let digits: Vec<u8> = self
            .0
            .bytes()
            .filter(u8::is_ascii_digit)
            .map(|b| b - b'0')
            .collect();
        if digits.len() != 12 {
            return None;
        }
        let mut number: u64 = 0;
        for digit in &digits[..10] {
            number = number * 10 + u64::from(*digit);
        }
        let checksum = digits[10] * 10 + digits[11];
        Some((number, checksum))
    }

    /// Whether the embedded checksum matches the embedded number.
    ///
    /// Recomputed from the text alone; any stale state held by a
    /// surrounding [`TransferMessage`](crate::TransferMessage) is ignored.
    pub fn is_checksum_valid(&self) -> bool {
        match self.digits() {
            Some((number, checksum)) => checksum == mod97(number),
            None => false,
        }
    }

    /// Validate that a string matches the structured-message grammar.
    fn validate(s: &str) -> Result<(), TransferMessageError> {
        if scan(s.as_bytes()) {
            Ok(())
        } else {
            Err(TransferMessageError::InvalidFormat {
                value: s.to_string(),
            })
        }
    }
}

impl fmt::Display for StructuredMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for StructuredMessage {
    type Error = TransferMessageError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for StructuredMessage {
    type Error = TransferMessageError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl FromStr for StructuredMessage {
    type Err = TransferMessageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

// ---------------------------------------------------------------------------
// Grammar scanner
// ---------------------------------------------------------------------------

/// Structural check for `[+*]{3}[0-9]{3}/?[0-9]{4}/?[0-9]{5}[+*]{3}`,
/// anchored at both ends.
fn scan(bytes: &[u8]) -> bool {
    let mut pos = 0;
    if !take_circumfix(bytes, &mut pos, 3) {
        return false;
    }
    if !take_digits(bytes, &mut pos, 3) {
        return false;
    }
    skip_separator(bytes, &mut pos);
    if !take_digits(bytes, &mut pos, 4) {
        return false;
    }
    skip_separator(bytes, &mut pos);
    if !take_digits(bytes, &mut pos, 5) {
        return false;
    }
    if !take_circumfix(bytes, &mut pos, 3) {
        return false;
    }
    pos == bytes.len()
}

fn take_circumfix(bytes: &[u8], pos: &mut usize, count: usize) -> bool {
    for _ in 0..count {
        match bytes.get(*pos) {
            Some(&byte) if Circumfix::is_symbol_byte(byte) => *pos += 1,
            _ => return false,
        }
    }
    true
}

fn take_digits(bytes: &[u8], pos: &mut usize, count: usize) -> bool {
    for _ in 0..count {
        match bytes.get(*pos) {
            Some(byte) if byte.is_ascii_digit() => *pos += 1,
            _ => return false,
        }
    }
    true
}

fn skip_separator(bytes: &[u8], pos: &mut usize) {
    if bytes.get(*pos) == Some(&b'/') {
        *pos += 1;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> Result<StructuredMessage, TransferMessageError> {
        s.parse()
    }

    #[test]
    fn accepts_canonical_form() {
        assert!(parse("+++090/9337/55493+++").is_ok());
        assert!(parse("***090/9337/55493***").is_ok());
    }

    #[test]
    fn accepts_omitted_separators() {
        assert!(parse("+++0909337/55493+++").is_ok());
        assert!(parse("+++090/933755493+++").is_ok());
        assert!(parse("+++090933755493+++").is_ok());
    }

    #[test]
    fn accepts_mixed_circumfix_symbols() {
        assert!(parse("+*+090/9337/55493*+*").is_ok());
        assert!(parse("***090/9337/55493+++").is_ok());
    }

    #[test]
    fn rejects_malformed_input() {
        // Backslash separators (the legacy setter test vector).
        assert!(parse(r"+++000\0119\69897+++").is_err());
        // Wrong digit grouping.
        assert!(parse("+++0909/337/55493+++").is_err());
        // Too few / too many digits.
        assert!(parse("+++090/9337/5549+++").is_err());
        assert!(parse("+++090/9337/554930+++").is_err());
        // Wrong circumfix count.
        assert!(parse("++090/9337/55493++").is_err());
        assert!(parse("++++090/9337/55493++++").is_err());
        // Invalid characters.
        assert!(parse("+++09O/9337/55493+++").is_err());
        assert!(parse("---090/9337/55493---").is_err());
        // Trailing garbage.
        assert!(parse("+++090/9337/55493+++ ").is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn rejection_reports_invalid_format() {
        let err = parse("garbage").unwrap_err();
        assert_eq!(
            err,
            TransferMessageError::InvalidFormat {
                value: "garbage".to_string(),
            }
        );
    }

    #[test]
    fn stores_text_verbatim() {
        let message = parse("+*+0909337/55493*+*").unwrap();
        assert_eq!(message.as_str(), "+*+0909337/55493*+*");
        assert_eq!(message.to_string(), "+*+0909337/55493*+*");
    }

    #[test]
    fn digits_extraction() {
        let message = parse("+++000/0119/69897+++").unwrap();
        assert_eq!(message.digits(), Some((119_698, 97)));

        let message = parse("+++090/9337/55493+++").unwrap();
        assert_eq!(message.digits(), Some((909_337_554, 93)));
    }

    #[test]
    fn checksum_verification_vectors() {
        assert!(parse("+++000/0119/69897+++").unwrap().is_checksum_valid());
        assert!(parse("+++090/9337/55493+++").unwrap().is_checksum_valid());
        assert!(parse("***090/9337/55493***").unwrap().is_checksum_valid());
        assert!(!parse("+++011/9337/55493+++").unwrap().is_checksum_valid());
    }

    #[test]
    fn checksum_verification_ignores_separator_style() {
        assert!(parse("+++000011969897+++").unwrap().is_checksum_valid());
        assert!(parse("+*+000/011969897+*+").unwrap().is_checksum_valid());
    }

    #[test]
    fn unchecked_garbage_fails_closed() {
        // Text that bypassed grammar validation must yield false, not panic.
        let message = StructuredMessage::new_unchecked("+++++".to_string());
        assert_eq!(message.digits(), None);
        assert!(!message.is_checksum_valid());
    }

    #[test]
    fn serde_roundtrip() {
        let message = parse("+++090/9337/55493+++").unwrap();
        let json = serde_json::to_string(&message).unwrap();
        assert_eq!(json, "\"+++090/9337/55493+++\"");
        let back: StructuredMessage = serde_json::from_str(&json).unwrap();
        assert_eq!(message, back);
    }
}
