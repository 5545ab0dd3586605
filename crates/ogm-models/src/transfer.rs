//! The bank-transfer message entity.
//!
//! A [`TransferMessage`] owns a communication number, the checksum derived
//! from it, and (optionally) a formatted [`StructuredMessage`]. Updates are
//! two-phase by contract: [`set_number`](TransferMessage::set_number)
//! changes the number only, and the caller must invoke
//! [`generate`](TransferMessage::generate) to re-derive the checksum and
//! text. [`validate`](TransferMessage::validate) ignores both derived
//! fields and re-reads everything from the stored text.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::checksum::mod97;
use crate::circumfix::Circumfix;
use crate::error::TransferMessageError;
use crate::structured::StructuredMessage;

/// Smallest accepted communication number.
pub const MIN_NUMBER: u64 = 1;

/// Largest accepted communication number (ten digits).
pub const MAX_NUMBER: u64 = 9_999_999_999;

// ---------------------------------------------------------------------------
// TransferMessage
// ---------------------------------------------------------------------------

/// A Belgian structured bank-transfer message ("OGM"/"VCS").
///
/// # Examples
///
/// ```
/// use ogm_models::{Circumfix, TransferMessage};
///
/// let mut message = TransferMessage::new(123456)?;
/// assert_eq!(message.checksum(), 72);
/// assert_eq!(
///     message.structured_message().unwrap().as_str(),
///     "+++000/0123/45672+++",
/// );
/// assert!(message.validate());
///
/// // Two-phase update: the text is regenerated only on request.
/// message.set_number(119698)?;
/// message.generate(Circumfix::Asterisk);
/// assert_eq!(message.checksum(), 97);
/// assert_eq!(
///     message.structured_message().unwrap().as_str(),
///     "***000/0119/69897***",
/// );
/// # Ok::<(), ogm_models::TransferMessageError>(())
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TransferMessage {
    /// The communication number, always within `[MIN_NUMBER, MAX_NUMBER]`.
    number: u64,
    /// The mod-97 checksum as of the last [`generate`](Self::generate) call.
    checksum: u8,
    /// The formatted text, if generated or set.
    structured_message: Option<StructuredMessage>,
}

impl TransferMessage {
    /// Create a message for `number` and immediately generate its formatted
    /// text with the default `+` circumfix.
    ///
    /// # Errors
    ///
    /// [`TransferMessageError::NumberOutOfRange`] if `number` is outside
    /// `[1, 9_999_999_999]`.
    pub fn new(number: u64) -> Result<Self, TransferMessageError> {
        check_range(number)?;
        let mut message = Self {
            number,
            checksum: 0,
            structured_message: None,
        };
        message.generate(Circumfix::default());
        Ok(message)
    }

    /// Create a message for a uniformly random number in
    /// `[MIN_NUMBER, MAX_NUMBER]` and generate its formatted text.
    pub fn random() -> Self {
        let number = rand::thread_rng().gen_range(MIN_NUMBER..=MAX_NUMBER);
        let mut message = Self {
            number,
            checksum: 0,
            structured_message: None,
        };
        message.generate(Circumfix::default());
        message
    }

    /// Return the communication number.
    pub fn number(&self) -> u64 {
        self.number
    }

    /// Return the checksum derived at the last generation.
    ///
    /// Stale after [`set_number`](Self::set_number) until
    /// [`generate`](Self::generate) is called again, and unrelated to any
    /// text stored via
    /// [`set_structured_message`](Self::set_structured_message).
    pub fn checksum(&self) -> u8 {
        self.checksum
    }

    /// Return the formatted text, if any has been generated or set.
    pub fn structured_message(&self) -> Option<&StructuredMessage> {
        self.structured_message.as_ref()
    }

    /// Replace the communication number.
    ///
    /// Deliberately does **not** re-derive the checksum or formatted text;
    /// call [`generate`](Self::generate) afterwards to bring them back in
    /// sync.
    ///
    /// # Errors
    ///
    /// [`TransferMessageError::NumberOutOfRange`] if `number` is outside
    /// `[1, 9_999_999_999]`; the stored number is left untouched.
    pub fn set_number(&mut self, number: u64) -> Result<(), TransferMessageError> {
        check_range(number)?;
        self.number = number;
        Ok(())
    }

    /// Derive the checksum from the current number and format the message.
    ///
    /// The number is zero-padded to ten digits, the checksum to two; the
    /// twelve digits are grouped 3/4/5 with `/` separators and bracketed by
    /// three `circumfix` symbols per side, e.g. `+++000/0123/45672+++`.
    /// Stores and returns the result.
    pub fn generate(&mut self, circumfix: Circumfix) -> StructuredMessage {
        self.checksum = mod97(self.number);
        let raw = format!("{:010}{:02}", self.number, self.checksum);
        let (head, rest) = raw.split_at(3);
        let (mid, tail) = rest.split_at(4);
        let c = circumfix.symbol();
        let text = format!("{c}{c}{c}{head}/{mid}/{tail}{c}{c}{c}");
        let message = StructuredMessage::new_unchecked(text);
        self.structured_message = Some(message.clone());
        message
    }

    /// Store externally supplied formatted text.
    ///
    /// The text must match the structured-message grammar (see
    /// [`StructuredMessage`]); it is stored verbatim and the entity's
    /// number and checksum are **not** re-derived from it.
    ///
    /// # Errors
    ///
    /// [`TransferMessageError::InvalidFormat`] if `text` does not match the
    /// grammar.
    pub fn set_structured_message(&mut self, text: &str) -> Result<(), TransferMessageError> {
        self.structured_message = Some(text.parse()?);
        Ok(())
    }

    /// Check the stored formatted text: `true` iff text is present and its
    /// embedded checksum matches its embedded number.
    ///
    /// This is the authoritative check. It never errors, and it reads only
    /// the stored text — after
    /// [`set_structured_message`](Self::set_structured_message) the
    /// entity's own `number`/`checksum` fields play no part.
    pub fn validate(&self) -> bool {
        self.structured_message
            .as_ref()
            .is_some_and(StructuredMessage::is_checksum_valid)
    }
}

fn check_range(number: u64) -> Result<(), TransferMessageError> {
    if (MIN_NUMBER..=MAX_NUMBER).contains(&number) {
        Ok(())
    } else {
        Err(TransferMessageError::NumberOutOfRange { value: number })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
