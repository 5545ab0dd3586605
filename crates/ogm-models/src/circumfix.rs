//! Circumfix symbols bracketing a formatted structured message.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Circumfix
// ---------------------------------------------------------------------------

/// The symbol repeated three times on each side of a formatted structured
/// message.
///
/// Generated messages use one symbol consistently on both sides;
/// hand-entered input may mix the two within a group (see
/// [`StructuredMessage`](crate::StructuredMessage)).
///
/// # Examples
///
/// ```
/// use ogm_models::Circumfix;
///
/// assert_eq!(Circumfix::Plus.to_string(), "+");
/// assert_eq!("*".parse::<Circumfix>().unwrap(), Circumfix::Asterisk);
/// assert_eq!(Circumfix::default(), Circumfix::Plus);
/// ```
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Circumfix {
    /// `+` — the default for generated messages.
    #[default]
    #[strum(serialize = "+")]
    Plus,
    /// `*` — the alternate bracketing symbol.
    #[strum(serialize = "*")]
    Asterisk,
}

impl Circumfix {
    /// Return the literal symbol character.
    pub fn symbol(self) -> char {
        match self {
            Circumfix::Plus => '+',
            Circumfix::Asterisk => '*',
        }
    }

    /// Whether a byte is a legal circumfix character.
    pub(crate) fn is_symbol_byte(byte: u8) -> bool {
        byte == b'+' || byte == b'*'
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
