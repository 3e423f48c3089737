//! Error types for the reservation enquiry pipeline.

use thiserror::Error;

/// Result type alias for enquiry operations.
pub type Result<T> = std::result::Result<T, EnquiryError>;

/// Error taxonomy for the enquiry pipeline.
///
/// Validation problems are deliberately *not* represented here: they are
/// [`Violation`](crate::validation::Violation) values collected in a
/// [`ValidationReport`](crate::validation::ValidationReport) and surfaced
/// inline. This enum covers document staging and relay dispatch failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnquiryError {
    // ═══════════════════════════════════════════════════════════
    // Document staging errors (local, recoverable)
    // ═══════════════════════════════════════════════════════════

    /// Main guest identity document is missing.
    ///
    /// Raised by the payload encoder as a defensive check before any
    /// network I/O; the validator reports the same condition inline.
    #[error("Main guest identity document is missing")]
    MissingDocument,

    /// Attach or detach referenced a guest slot that no longer exists.
    #[error("No guest slot with the given identifier")]
    UnknownSlot,

    /// Document exceeds the configured size limit.
    #[error("Document is {actual} bytes, limit is {limit} bytes")]
    DocumentTooLarge {
        /// Size of the rejected document in bytes
        actual: usize,
        /// Configured limit in bytes
        limit: usize,
    },

    /// Document MIME type is not accepted.
    #[error("Unsupported document type: {mime}")]
    UnsupportedDocumentType {
        /// The rejected MIME type
        mime: String,
    },

    // ═══════════════════════════════════════════════════════════
    // Relay errors
    // ═══════════════════════════════════════════════════════════

    /// The relay answered with a non-success HTTP status.
    ///
    /// A request that completes is *not* treated as a business success;
    /// server-side rejections surface here instead of being silently
    /// reported as delivered.
    #[error("Relay rejected the enquiry with HTTP status {status}")]
    RelayRejected {
        /// HTTP status code returned by the relay
        status: u16,
    },

    /// Network-level failure before a response was received.
    #[error("Network error: {0}")]
    Transport(String),
}

impl EnquiryError {
    /// Returns `true` if this error is caused by user input and fixable
    /// from the form.
    ///
    /// # Examples
    ///
    /// ```
    /// # use reserva_enquiry::EnquiryError;
    /// assert!(EnquiryError::MissingDocument.is_user_error());
    /// assert!(!EnquiryError::Transport("timed out".into()).is_user_error());
    /// ```
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::MissingDocument
                | Self::UnknownSlot
                | Self::DocumentTooLarge { .. }
                | Self::UnsupportedDocumentType { .. }
        )
    }

    /// Returns `true` if this error occurred while talking to the relay.
    ///
    /// Transport errors leave the form populated so the user can resubmit.
    #[must_use]
    pub const fn is_transport_error(&self) -> bool {
        matches!(self, Self::RelayRejected { .. } | Self::Transport(_))
    }
}
