#![deny(missing_docs)]

//! # OGM Models
//!
//! Core types for generating and validating Belgian structured
//! bank-transfer messages (OGM — "overschrijving met gestructureerde
//! mededeling", also known as VCS).
//!
//! A structured message packs a ten-digit communication number and its
//! two-digit mod-97 checksum into a fixed 20-character form:
//!
//! ```text
//! +++ 090 / 9337 / 55493 +++
//!  │  └───────┬─────────┘  │
//!  │   10-digit number     │
//!  │   + 2-digit checksum  │
//!  └── circumfix ──────────┘
//! ```
//!
//! ## Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`checksum`] | mod-97 arithmetic ([`MODULO`], [`mod97`]) |
//! | [`circumfix`] | the `+` / `*` bracketing symbols ([`Circumfix`]) |
//! | [`structured`] | the validated text format ([`StructuredMessage`]) |
//! | [`transfer`] | the message entity ([`TransferMessage`]) |
//! | [`error`] | [`TransferMessageError`] |
//!
//! ## Quick example
//!
//! ```
//! use ogm_models::{Circumfix, TransferMessage};
//!
//! let mut message = TransferMessage::new(123456)?;
//! assert_eq!(message.checksum(), 72);
//! assert_eq!(
//!     message.structured_message().unwrap().as_str(),
//!     "+++000/0123/45672+++",
//! );
//! assert!(message.validate());
//!
//! // Updates are two-phase: set the number, then regenerate.
//! message.set_number(119698)?;
//! message.generate(Circumfix::Asterisk);
//! assert_eq!(message.checksum(), 97);
//! # Ok::<(), ogm_models::TransferMessageError>(())
//! ```

pub mod checksum;
pub mod circumfix;
pub mod error;
pub mod structured;
pub mod transfer;

// Re-export all public types at crate root for convenience.
// Downstream crates can use `ogm_models::TransferMessage` directly.
pub use checksum::*;
pub use circumfix::*;
pub use error::*;
pub use structured::*;
pub use transfer::*;
