//! Error types for the `ogm-models` crate.
//!
//! All fallible constructors and setters in this crate return variants of
//! [`TransferMessageError`]. Checksum validation never errors; it reports
//! `false` instead (see [`TransferMessage::validate`](crate::TransferMessage::validate)).

/// Errors produced when constructing or parsing transfer-message values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferMessageError {
    /// A communication number fell outside `[1, 9_999_999_999]`.
    #[error("the number should be an integer larger than 0 and smaller than 9999999999")]
    NumberOutOfRange {
        /// The value that failed validation.
        value: u64,
    },

    /// A structured-message string did not match the OGM/VCS grammar.
    #[error("the structured message does not have a valid format")]
    InvalidFormat {
        /// The value that failed validation.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_out_of_range() {
        let err = TransferMessageError::NumberOutOfRange {
            value: 10_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "the number should be an integer larger than 0 and smaller than 9999999999"
        );
    }

    #[test]
    fn error_display_invalid_format() {
        let err = TransferMessageError::InvalidFormat {
            value: "not a message".into(),
        };
        assert_eq!(
            err.to_string(),
            "the structured message does not have a valid format"
        );
    }

    #[test]
    fn error_carries_offending_value() {
        let err = TransferMessageError::NumberOutOfRange { value: 0 };
        assert_eq!(err, TransferMessageError::NumberOutOfRange { value: 0 });
    }
}
