//! Reservation form validation.
//!
//! Pure, synchronous, re-runnable without side effects. All violations are
//! collected in one pass (rather than stopping at the first failure) so
//! the form can highlight every problem at once.
//!
//! Violations are ordered: main guest fields first, then the main guest
//! document, then each additional guest in slot order.

use crate::config::{AdditionalGuestPhonePolicy, EnquiryConfig};
use crate::state::ReservationForm;
use serde::{Deserialize, Serialize};

/// Form field a violation refers to.
///
/// Additional-guest variants carry the guest's position in the party
/// (2-based: the first additional guest is guest 2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormField {
    /// Main guest full name
    MainName,
    /// Main guest phone number
    MainPhone,
    /// Main guest email address
    MainEmail,
    /// Main guest identity document
    MainDocument,
    /// Additional guest full name
    GuestName(usize),
    /// Additional guest phone number
    GuestPhone(usize),
    /// Additional guest identity document
    GuestDocument(usize),
}

/// One failed validation rule, with an actionable message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field the violation refers to
    pub field: FormField,
    /// User-facing message
    pub message: String,
}

/// Outcome of validating a form: either clean or an ordered list of
/// violations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    /// `true` when the form passed every rule.
    #[must_use]
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }

    /// The collected violations, in rule order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    fn flag(&mut self, field: FormField, message: impl Into<String>) {
        self.violations.push(Violation {
            field,
            message: message.into(),
        });
    }
}

/// Validate the form against the configured pipeline rules.
///
/// Rule order:
/// 1. Main guest name, phone and email (presence; email also syntax)
/// 2. Main guest identity document
/// 3. Per additional guest: name, phone (when collected), document
///
/// The payment preference needs no rule: the `PaymentPreference` enum
/// cannot hold an out-of-range value and defaults to card.
#[must_use]
pub fn validate(form: &ReservationForm, config: &EnquiryConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    let main = form.main_slot();
    if main.full_name.trim().is_empty() {
        report.flag(FormField::MainName, "Full name is required");
    }
    if main.contact_phone.trim().is_empty() {
        report.flag(FormField::MainPhone, "Phone number is required");
    }
    if form.email.trim().is_empty() {
        report.flag(FormField::MainEmail, "Email address is required");
    } else if !is_plausible_email(&form.email) {
        report.flag(FormField::MainEmail, "Email address is not valid");
    }

    if main.document.is_none() {
        report.flag(
            FormField::MainDocument,
            "Identity document is required for the main guest",
        );
    }

    for (offset, slot) in form.additional_slots().iter().enumerate() {
        let guest_number = offset + 2;
        if slot.full_name.trim().is_empty() {
            report.flag(
                FormField::GuestName(guest_number),
                format!("Guest {guest_number} full name is required"),
            );
        }
        if config.phone_policy == AdditionalGuestPhonePolicy::Required
            && slot.contact_phone.trim().is_empty()
        {
            report.flag(
                FormField::GuestPhone(guest_number),
                format!("Guest {guest_number} phone number is required"),
            );
        }
        if slot.document.is_none() {
            report.flag(
                FormField::GuestDocument(guest_number),
                format!("Identity document is required for guest {guest_number}"),
            );
        }
    }

    report
}

/// Basic address syntax check: one `@`, non-empty local part, dotted
/// domain with non-empty labels, no whitespace. Deliberately not
/// RFC-complete; the relay reply goes to this address so gross typos are
/// worth catching, nothing more.
fn is_plausible_email(value: &str) -> bool {
    if value.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    labels.clone().count() >= 2 && labels.all(|label| !label.is_empty())
}
