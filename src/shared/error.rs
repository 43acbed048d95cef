use thiserror::Error;

/// Errors raised while converting inventory items into SBOM documents.
///
/// The first three kinds are per-item and are recovered inside the document
/// builders: the offending item is dropped and conversion continues.
/// `FatalInitialization` aborts the whole conversion and no document is produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Inventory item '{name}' is incomplete: {reason}")]
    IncompleteItem { name: String, reason: String },

    #[error("Inventory item '{name}' is only valid on {required}, current platform is {current}")]
    UnsupportedPlatform {
        name: String,
        required: String,
        current: String,
    },

    #[error(
        "Capability '{capability}' received metadata it does not understand (expected {expected})"
    )]
    UnsupportedMetadata {
        capability: String,
        expected: String,
    },

    #[error(
        "Identifier source could not produce an identifier: {details}\n\n\
         💡 Hint: Check that the randomness source is seeded and not exhausted"
    )]
    FatalInitialization { details: String },
}

impl ConversionError {
    /// Returns true if the error only affects a single item.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ConversionError::FatalInitialization { .. })
    }
}
