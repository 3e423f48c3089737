//! Submission payload encoding.
//!
//! Serializes a validated form plus its booking context into the multipart
//! parts expected by the hosted form relay: relay-control fields, booking
//! metadata, primary-contact fields, and one binary part per attached
//! document. Encoding performs no I/O; the [`RelayClient`] turns the
//! payload into exactly one HTTP POST.
//!
//! [`RelayClient`]: crate::providers::RelayClient

use crate::config::EnquiryConfig;
use crate::error::{EnquiryError, Result};
use crate::state::ReservationForm;

/// Relay-control field: suppress the relay's captcha interstitial.
const CAPTCHA_FIELD: (&str, &str) = ("_captcha", "false");

/// Relay-control field: ask the relay to format the notification as a table.
const TEMPLATE_FIELD: (&str, &str) = ("_template", "table");

/// Date format used for check-in/check-out fields.
const DATE_FORMAT: &str = "%d/%m/%Y";

/// One text field of the multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPart {
    /// Field name
    pub name: String,
    /// Field value
    pub value: String,
}

/// One binary file part of the multipart body.
#[derive(Clone, PartialEq, Eq)]
pub struct FilePart {
    /// Part name; `document_guest_<n>` with `n` the 1-based slot position
    pub name: String,
    /// Original file name
    pub file_name: String,
    /// MIME type
    pub mime_type: String,
    /// File content
    pub bytes: Vec<u8>,
}

// Manual Debug: raw bytes are noise in test failures and logs
impl std::fmt::Debug for FilePart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilePart")
            .field("name", &self.name)
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

/// Fully encoded outbound enquiry, ready for the relay client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnquiryPayload {
    /// Text fields, in wire order
    pub text_parts: Vec<TextPart>,
    /// File parts, one per attached document
    pub file_parts: Vec<FilePart>,
}

impl EnquiryPayload {
    /// Encode a validated form into its multipart parts.
    ///
    /// The caller is expected to have run the validator; this function
    /// does not re-validate. It does defend the one invariant whose
    /// violation would produce a corrupt relay submission: a missing
    /// main-guest document fails fast, before any network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`EnquiryError::MissingDocument`] if the main guest has no
    /// attached document.
    pub fn encode(form: &ReservationForm, config: &EnquiryConfig) -> Result<Self> {
        if form.main_slot().document.is_none() {
            return Err(EnquiryError::MissingDocument);
        }

        let mut payload = Self::default();

        // Relay-control fields
        payload.push_text("_subject", config.subject.clone());
        payload.push_text(CAPTCHA_FIELD.0, CAPTCHA_FIELD.1);
        payload.push_text(TEMPLATE_FIELD.0, TEMPLATE_FIELD.1);
        payload.push_text("_replyto", form.email.clone());

        // Booking metadata
        let context = &form.context;
        if let Some(id) = context.property_id {
            payload.push_text("property_id", id.to_string());
        }
        if let Some(name) = &context.property_name {
            payload.push_text("property", name.clone());
        }
        if let Some(range) = context.date_range {
            payload.push_text("check_in", range.check_in.format(DATE_FORMAT).to_string());
            payload.push_text(
                "check_out",
                range.check_out.format(DATE_FORMAT).to_string(),
            );
        }
        payload.push_text("adults", context.party.adults.to_string());
        payload.push_text("children", context.party.children.to_string());

        // Primary contact
        let main = form.main_slot();
        payload.push_text("full_name", main.full_name.clone());
        payload.push_text("phone", main.contact_phone.clone());
        payload.push_text("email", form.email.clone());
        if let Some(nationality) = form.nationality {
            payload.push_text("nationality", nationality.country_name);
        }
        payload.push_text("payment", form.payment.as_str());

        // Additional guests
        for (offset, slot) in form.additional_slots().iter().enumerate() {
            let guest_number = offset + 2;
            payload.push_text(format!("guest_{guest_number}_name"), slot.full_name.clone());
            if !slot.contact_phone.trim().is_empty() {
                payload.push_text(
                    format!("guest_{guest_number}_phone"),
                    slot.contact_phone.clone(),
                );
            }
        }

        // One binary part per attached document, named by slot position
        for (position, slot) in form.slots.iter().enumerate() {
            if let Some(document) = &slot.document {
                payload.file_parts.push(FilePart {
                    name: format!("document_guest_{}", position + 1),
                    file_name: document.file_name.clone(),
                    mime_type: document.mime_type.clone(),
                    bytes: document.bytes.clone(),
                });
            }
        }

        Ok(payload)
    }

    /// Look up a text field by name (first match).
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.text_parts
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Look up a file part by name.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&FilePart> {
        self.file_parts.iter().find(|p| p.name == name)
    }

    fn push_text(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.text_parts.push(TextPart {
            name: name.into(),
            value: value.into(),
        });
    }
}
