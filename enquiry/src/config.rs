//! Enquiry pipeline configuration.
//!
//! The original product grew three divergent checkout implementations with
//! inconsistent validation and dispatch rules. This module is the single
//! parameterization point that replaces them: each call site constructs an
//! [`EnquiryConfig`] instead of forking the pipeline.

/// Whether additional guests (beyond the main guest) must provide a phone
/// number.
///
/// The UI either collects a phone field for every additional guest or
/// omits it entirely; a field the UI does not collect is never validated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdditionalGuestPhonePolicy {
    /// Phone is collected and required for every additional guest
    #[default]
    Required,
    /// No phone field is shown for additional guests
    NotCollected,
}

/// Size and type constraints applied when a document is attached.
///
/// The file picker's `accept` hint is advisory only; these limits are the
/// enforced contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttachmentLimits {
    /// Maximum document size in bytes
    pub max_bytes: usize,
    /// Accepted MIME types; a trailing-slash entry such as `image/`
    /// accepts the whole top-level type
    pub accepted_types: Vec<String>,
}

impl AttachmentLimits {
    /// Whether the limits accept the given MIME type.
    #[must_use]
    pub fn accepts(&self, mime: &str) -> bool {
        self.accepted_types.iter().any(|accepted| {
            if let Some(prefix) = accepted.strip_suffix('/') {
                mime.starts_with(prefix) && mime[prefix.len()..].starts_with('/')
            } else {
                mime == accepted
            }
        })
    }
}

impl Default for AttachmentLimits {
    fn default() -> Self {
        Self {
            max_bytes: 10 * 1024 * 1024,
            accepted_types: vec!["image/".to_string(), "application/pdf".to_string()],
        }
    }
}

/// Configuration for one enquiry pipeline call site.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryConfig {
    /// Subject line sent as a relay-control field
    pub subject: String,

    /// Phone requirement for additional guests
    pub phone_policy: AdditionalGuestPhonePolicy,

    /// Document size/type constraints
    pub attachments: AttachmentLimits,
}

impl EnquiryConfig {
    /// Create a configuration with the given subject line.
    #[must_use]
    pub fn new(subject: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            phone_policy: AdditionalGuestPhonePolicy::default(),
            attachments: AttachmentLimits::default(),
        }
    }

    /// Set the additional-guest phone policy.
    #[must_use]
    pub const fn with_phone_policy(mut self, policy: AdditionalGuestPhonePolicy) -> Self {
        self.phone_policy = policy;
        self
    }

    /// Set the attachment limits.
    #[must_use]
    pub fn with_attachment_limits(mut self, limits: AttachmentLimits) -> Self {
        self.attachments = limits;
        self
    }
}

impl Default for EnquiryConfig {
    fn default() -> Self {
        Self::new("New booking enquiry")
    }
}
