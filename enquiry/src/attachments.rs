//! Document attachment staging.
//!
//! Tracks at most one identity document per guest slot, purely in memory.
//! No network or disk I/O happens here; attachments are staged on the
//! form until submission and dropped on detach or teardown.

use crate::config::AttachmentLimits;
use crate::error::{EnquiryError, Result};
use crate::state::{DocumentRef, GuestSlotId, ReservationForm};

/// Stage a document on the given slot.
///
/// Attaching to a slot that already holds a document replaces it; the
/// prior reference is dropped. Limits are enforced before the slot is
/// touched, so a rejected document never dislodges an accepted one.
///
/// # Errors
///
/// - [`EnquiryError::DocumentTooLarge`] if the document exceeds the size limit
/// - [`EnquiryError::UnsupportedDocumentType`] if the MIME type is not accepted
/// - [`EnquiryError::UnknownSlot`] if no slot has the given identifier
pub fn attach(
    form: &mut ReservationForm,
    slot_id: GuestSlotId,
    document: DocumentRef,
    limits: &AttachmentLimits,
) -> Result<()> {
    if document.size() > limits.max_bytes {
        return Err(EnquiryError::DocumentTooLarge {
            actual: document.size(),
            limit: limits.max_bytes,
        });
    }

    if !limits.accepts(&document.mime_type) {
        return Err(EnquiryError::UnsupportedDocumentType {
            mime: document.mime_type.clone(),
        });
    }

    let slot = form.slot_mut(slot_id).ok_or(EnquiryError::UnknownSlot)?;
    slot.document = Some(document);
    Ok(())
}

/// Remove the document staged on the given slot, if any.
///
/// # Errors
///
/// Returns [`EnquiryError::UnknownSlot`] if no slot has the given
/// identifier.
pub fn detach(form: &mut ReservationForm, slot_id: GuestSlotId) -> Result<()> {
    let slot = form.slot_mut(slot_id).ok_or(EnquiryError::UnknownSlot)?;
    slot.document = None;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png(bytes: usize) -> DocumentRef {
        DocumentRef::new("passport.png", "image/png", vec![0; bytes])
    }

    #[test]
    fn attach_stages_document_on_slot() {
        let mut form = ReservationForm::default();
        let id = form.main_slot().id;

        attach(&mut form, id, png(64), &AttachmentLimits::default()).unwrap();

        assert!(form.main_slot().document.is_some());
    }

    #[test]
    fn attach_replaces_existing_document() {
        let mut form = ReservationForm::default();
        let id = form.main_slot().id;
        let limits = AttachmentLimits::default();

        attach(&mut form, id, png(64), &limits).unwrap();
        attach(
            &mut form,
            id,
            DocumentRef::new("id_card.pdf", "application/pdf", vec![1]),
            &limits,
        )
        .unwrap();

        let staged = form.main_slot().document.as_ref().unwrap();
        assert_eq!(staged.file_name, "id_card.pdf");
    }

    #[test]
    fn detach_clears_slot() {
        let mut form = ReservationForm::default();
        let id = form.main_slot().id;

        attach(&mut form, id, png(64), &AttachmentLimits::default()).unwrap();
        detach(&mut form, id).unwrap();

        assert!(form.main_slot().document.is_none());
    }

    #[test]
    fn unknown_slot_is_rejected() {
        let mut form = ReservationForm::default();

        let result = attach(
            &mut form,
            GuestSlotId::new(),
            png(64),
            &AttachmentLimits::default(),
        );
        assert_eq!(result, Err(EnquiryError::UnknownSlot));

        let result = detach(&mut form, GuestSlotId::new());
        assert_eq!(result, Err(EnquiryError::UnknownSlot));
    }

    #[test]
    fn oversized_document_is_rejected_without_touching_slot() {
        let mut form = ReservationForm::default();
        let id = form.main_slot().id;
        let limits = AttachmentLimits {
            max_bytes: 100,
            ..AttachmentLimits::default()
        };

        attach(&mut form, id, png(50), &limits).unwrap();
        let result = attach(&mut form, id, png(200), &limits);

        assert!(matches!(
            result,
            Err(EnquiryError::DocumentTooLarge {
                actual: 200,
                limit: 100
            })
        ));
        // Prior accepted document still staged
        assert_eq!(form.main_slot().document.as_ref().unwrap().size(), 50);
    }

    #[test]
    fn unsupported_type_is_rejected() {
        let mut form = ReservationForm::default();
        let id = form.main_slot().id;

        let result = attach(
            &mut form,
            id,
            DocumentRef::new("archive.zip", "application/zip", vec![0; 8]),
            &AttachmentLimits::default(),
        );

        assert!(matches!(
            result,
            Err(EnquiryError::UnsupportedDocumentType { .. })
        ));
        assert!(form.main_slot().document.is_none());
    }
}
