//! Enquiry actions.
//!
//! This module defines all possible inputs to the enquiry reducer.
//! Actions follow the command/event split: **commands** are user intent
//! (edit a field, attach a document, submit) and **events** are results
//! of async effects (the relay accepted or refused the enquiry).

use crate::directory::CountryCode;
use crate::providers::RelayReceipt;
use crate::state::{DateRange, DocumentRef, GuestSlotId, PaymentPreference};

/// Enquiry action.
///
/// Actions are the **only** way to communicate with the pipeline. The
/// reducer is a pure function: `(State, Action, Env) → (State, Effects)`.
#[derive(Debug, Clone, PartialEq)]
pub enum EnquiryAction {
    // ═══════════════════════════════════════════════════════════════════
    // Date and party selection
    // ═══════════════════════════════════════════════════════════════════
    /// Command: stay dates chosen; move on to detail capture.
    DatesChosen {
        /// Selected check-in/check-out pair
        range: DateRange,
    },

    /// Command: go back from detail capture to date selection.
    ///
    /// Entered details are kept; only the phase changes.
    BackToDates,

    /// Command: party composition changed.
    ///
    /// Re-derives the guest roster synchronously: shrinking discards
    /// trailing slots, growing appends empty ones.
    PartyChanged {
        /// Number of adults (clamped to at least one)
        adults: u32,
        /// Number of children
        children: u32,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Detail capture
    // ═══════════════════════════════════════════════════════════════════
    /// Command: a guest's full name was edited.
    GuestNameEdited {
        /// Target slot
        slot: GuestSlotId,
        /// New value
        value: String,
    },

    /// Command: a guest's phone number was edited.
    GuestPhoneEdited {
        /// Target slot
        slot: GuestSlotId,
        /// New value
        value: String,
    },

    /// Command: the main guest's email address was edited.
    EmailEdited {
        /// New value
        value: String,
    },

    /// Command: a nationality was picked from the directory.
    NationalitySelected {
        /// Selected directory entry
        country: CountryCode,
    },

    /// Command: the payment preference was selected.
    PaymentSelected {
        /// Selected preference
        preference: PaymentPreference,
    },

    /// Command: a document was picked for a guest slot.
    ///
    /// Replaces any document already staged on that slot. Limit
    /// violations surface as an inline attachment notice.
    DocumentAttached {
        /// Target slot
        slot: GuestSlotId,
        /// Picked document
        document: DocumentRef,
    },

    /// Command: the document staged on a slot was removed.
    DocumentRemoved {
        /// Target slot
        slot: GuestSlotId,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Submission
    // ═══════════════════════════════════════════════════════════════════
    /// Command: submit the form.
    ///
    /// Gated on validation; ignored while a submission is already
    /// pending (the double-submit guard).
    Submit,

    /// Event: the relay accepted the enquiry.
    SubmissionSucceeded {
        /// Delivery receipt from the relay
        receipt: RelayReceipt,
    },

    /// Event: dispatch failed (relay rejection or transport error).
    SubmissionFailed {
        /// User-facing failure detail
        detail: String,
    },

    // ═══════════════════════════════════════════════════════════════════
    // Confirmation
    // ═══════════════════════════════════════════════════════════════════
    /// Command: leave the confirmation view.
    ///
    /// The confirmed form is done; the session resets to a fresh one.
    ExitConfirmation,
}
