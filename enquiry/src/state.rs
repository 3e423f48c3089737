//! Enquiry state types.
//!
//! This module defines the domain state for one reservation enquiry
//! session: the booking context received from the property/calendar
//! selection, the form the guest fills in, and the submission outcome
//! shown by the UI. All types are `Clone` to support the functional
//! architecture pattern.

use crate::directory::CountryCode;
use crate::validation::ValidationReport;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════
// ID Types
// ═══════════════════════════════════════════════════════════════════════

/// Stable identifier for a guest slot.
///
/// Attachments and field edits address slots by this identifier rather
/// than by position, so removing and re-adding slots can never route a
/// stale edit to the wrong guest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestSlotId(pub uuid::Uuid);

impl GuestSlotId {
    /// Generate a new random `GuestSlotId`.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for GuestSlotId {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Documents
// ═══════════════════════════════════════════════════════════════════════

/// A user-selected identity document, held only in memory.
///
/// Owned exclusively by the guest slot that references it; dropped on
/// detach or form teardown. Never persisted by this system.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Original file name, forwarded to the relay
    pub file_name: String,
    /// MIME type as reported by the picker
    pub mime_type: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl DocumentRef {
    /// Create a new in-memory document reference.
    #[must_use]
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size of the document in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.bytes.len()
    }
}

// Manual Debug: the raw bytes are noise in test failures and logs
impl std::fmt::Debug for DocumentRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentRef")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Booking Context
// ═══════════════════════════════════════════════════════════════════════

/// Check-in / check-out pair selected upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    /// Check-in date
    pub check_in: NaiveDate,
    /// Check-out date
    pub check_out: NaiveDate,
}

/// Declared party for the stay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartyComposition {
    /// Number of adults; always at least one
    pub adults: u32,
    /// Number of children
    pub children: u32,
}

impl Default for PartyComposition {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
        }
    }
}

/// Booking context received from the property/calendar collaborator.
///
/// Read-only to the enquiry pipeline apart from the date range and party
/// fields the user edits during selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingContext {
    /// Property identifier, when an individual property was chosen
    pub property_id: Option<u32>,
    /// Property display name
    pub property_name: Option<String>,
    /// Selected stay dates
    pub date_range: Option<DateRange>,
    /// Adults and children declared for the stay
    pub party: PartyComposition,
}

// ═══════════════════════════════════════════════════════════════════════
// Reservation Form
// ═══════════════════════════════════════════════════════════════════════

/// Recorded payment preference.
///
/// A preference only; no payment is processed. The type makes an invalid
/// preference unrepresentable, so the historical "must be one of the
/// enumerated values" validation rule holds by construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentPreference {
    /// Pay by card on arrival
    #[default]
    Card,
    /// Pay cash on arrival
    Cash,
}

impl PaymentPreference {
    /// Wire name of the preference.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
        }
    }
}

/// One human occupant of the booking requiring identity verification.
///
/// Slot 0 is the main guest and exists for the lifetime of the form;
/// additional slots are derived from the adult count.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GuestSlot {
    /// Stable identifier for attachments and edits
    pub id: GuestSlotId,
    /// Guest full name
    pub full_name: String,
    /// Contact phone; collected for the main guest and, per configuration,
    /// for additional guests
    pub contact_phone: String,
    /// Attached identity document, if any
    pub document: Option<DocumentRef>,
}

impl GuestSlot {
    /// Create an empty slot with a fresh identifier.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// The reservation form for one enquiry session.
///
/// The main guest's name and phone live in slot 0; email and nationality
/// are collected once and live on the form itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservationForm {
    /// Main guest email address
    pub email: String,
    /// Main guest nationality, selected from the directory
    pub nationality: Option<CountryCode>,
    /// Recorded payment preference
    pub payment: PaymentPreference,
    /// Guest slots; index 0 is the main guest
    pub slots: Vec<GuestSlot>,
    /// Booking context from the upstream selection
    pub context: BookingContext,
}

impl ReservationForm {
    /// Create a fresh form for the given booking context.
    ///
    /// The main slot always exists; additional slots are derived from the
    /// context's adult count.
    #[must_use]
    pub fn new(context: BookingContext) -> Self {
        let mut slots = vec![GuestSlot::empty()];
        let additional = context.party.adults.saturating_sub(1) as usize;
        slots.extend(std::iter::repeat_with(GuestSlot::empty).take(additional));

        Self {
            email: String::new(),
            nationality: None,
            payment: PaymentPreference::default(),
            slots,
            context,
        }
    }

    /// The main guest slot (index 0).
    ///
    /// # Panics
    ///
    /// Never panics: the main slot exists for the lifetime of the form.
    #[must_use]
    pub fn main_slot(&self) -> &GuestSlot {
        &self.slots[0]
    }

    /// Mutable access to the main guest slot.
    #[must_use]
    pub fn main_slot_mut(&mut self) -> &mut GuestSlot {
        &mut self.slots[0]
    }

    /// Additional guest slots (everything after the main slot).
    #[must_use]
    pub fn additional_slots(&self) -> &[GuestSlot] {
        &self.slots[1..]
    }

    /// Find a slot by its stable identifier.
    #[must_use]
    pub fn slot(&self, id: GuestSlotId) -> Option<&GuestSlot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// Find a slot by its stable identifier, mutably.
    pub fn slot_mut(&mut self, id: GuestSlotId) -> Option<&mut GuestSlot> {
        self.slots.iter_mut().find(|s| s.id == id)
    }
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self::new(BookingContext::default())
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Submission Outcome
// ═══════════════════════════════════════════════════════════════════════

/// Lifecycle of the one in-flight submission per form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionStatus {
    /// No submission attempted yet
    #[default]
    Idle,
    /// Request in flight; the submit control is disabled
    Pending,
    /// Relay accepted the enquiry; terminal for this form instance
    Succeeded,
    /// Dispatch failed; the form stays populated for a manual retry
    Failed,
}

/// UI-facing submission state. Transient, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    /// Current lifecycle state
    pub status: SubmissionStatus,
    /// Human-readable failure detail, present only when `Failed`
    pub error_detail: Option<String>,
}

impl SubmissionOutcome {
    /// Outcome for a request just put in flight.
    #[must_use]
    pub const fn pending() -> Self {
        Self {
            status: SubmissionStatus::Pending,
            error_detail: None,
        }
    }

    /// Outcome after the relay accepted the enquiry.
    #[must_use]
    pub const fn succeeded() -> Self {
        Self {
            status: SubmissionStatus::Succeeded,
            error_detail: None,
        }
    }

    /// Outcome after a failed dispatch.
    #[must_use]
    pub const fn failed(detail: String) -> Self {
        Self {
            status: SubmissionStatus::Failed,
            error_detail: Some(detail),
        }
    }

    /// `true` while a request is in flight.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self.status, SubmissionStatus::Pending)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Flow Phases
// ═══════════════════════════════════════════════════════════════════════

/// Phase of the enquiry flow state machine.
///
/// ```text
/// SelectingDates ⇄ CapturingDetails → Submitting → Confirmed
///                        ▲                │
///                        └── on failure ──┘
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum EnquiryPhase {
    /// Choosing stay dates and party composition
    SelectingDates,
    /// Filling in guest details and documents
    CapturingDetails,
    /// One dispatch in flight; submit control disabled
    Submitting,
    /// Relay accepted the enquiry; terminal for this form instance
    Confirmed {
        /// Main guest name, shown on the confirmation view
        guest_name: String,
        /// Main guest email, shown on the confirmation view
        email: String,
        /// When the confirmation was recorded
        at: DateTime<Utc>,
    },
}

/// Root state for one enquiry session.
#[derive(Debug, Clone, PartialEq)]
pub struct EnquiryState {
    /// Current phase of the flow
    pub phase: EnquiryPhase,
    /// The reservation form being filled in
    pub form: ReservationForm,
    /// Submission lifecycle shown by the UI
    pub outcome: SubmissionOutcome,
    /// Violations from the most recent failed submit attempt
    pub last_report: Option<ValidationReport>,
    /// Inline notice from the most recent rejected attachment
    pub attachment_notice: Option<String>,
}

impl EnquiryState {
    /// Fresh session starting at date selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: EnquiryPhase::SelectingDates,
            form: ReservationForm::default(),
            outcome: SubmissionOutcome::default(),
            last_report: None,
            attachment_notice: None,
        }
    }

    /// Session starting directly at detail capture with an upstream
    /// booking context (the checkout-page variant, where dates and party
    /// were already chosen).
    #[must_use]
    pub fn with_context(context: BookingContext) -> Self {
        Self {
            phase: EnquiryPhase::CapturingDetails,
            form: ReservationForm::new(context),
            outcome: SubmissionOutcome::default(),
            last_report: None,
            attachment_notice: None,
        }
    }
}

impl Default for EnquiryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_ids_are_unique() {
        assert_ne!(GuestSlotId::new(), GuestSlotId::new());
    }

    #[test]
    fn fresh_form_has_main_slot_plus_derived_additional() {
        let context = BookingContext {
            party: PartyComposition {
                adults: 3,
                children: 1,
            },
            ..BookingContext::default()
        };
        let form = ReservationForm::new(context);

        assert_eq!(form.slots.len(), 3);
        assert_eq!(form.additional_slots().len(), 2);
        assert!(form.main_slot().document.is_none());
    }

    #[test]
    fn single_adult_form_has_no_additional_slots() {
        let form = ReservationForm::default();
        assert_eq!(form.slots.len(), 1);
        assert!(form.additional_slots().is_empty());
    }

    #[test]
    fn slot_lookup_by_id() {
        let mut form = ReservationForm::default();
        let id = form.main_slot().id;

        assert!(form.slot(id).is_some());
        if let Some(slot) = form.slot_mut(id) {
            slot.full_name = "Ana".to_string();
        }
        assert_eq!(form.main_slot().full_name, "Ana");
        assert!(form.slot(GuestSlotId::new()).is_none());
    }

    #[test]
    fn document_debug_hides_bytes() {
        let doc = DocumentRef::new("passport.png", "image/png", vec![0; 128]);
        let rendered = format!("{doc:?}");
        assert!(rendered.contains("passport.png"));
        assert!(rendered.contains("128"));
    }

    #[test]
    fn payment_defaults_to_card() {
        assert_eq!(PaymentPreference::default(), PaymentPreference::Card);
        assert_eq!(PaymentPreference::Cash.as_str(), "cash");
    }

    #[test]
    fn with_context_starts_at_detail_capture() {
        let state = EnquiryState::with_context(BookingContext::default());
        assert_eq!(state.phase, EnquiryPhase::CapturingDetails);
        assert_eq!(state.outcome.status, SubmissionStatus::Idle);
    }
}
