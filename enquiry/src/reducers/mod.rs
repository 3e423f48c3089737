//! Enquiry flow reducer.
//!
//! The top-level state machine sequencing date/guest selection, detail
//! capture, submission and confirmation:
//!
//! ```text
//! SelectingDates ⇄ CapturingDetails ──Submit (validated)──► Submitting
//!                        ▲                                     │
//!                        │◄──────── SubmissionFailed ──────────┤
//!                        │                                     ▼
//!                   ExitConfirmation ◄──────────────────── Confirmed
//! ```
//!
//! The transition into `Submitting` is gated on the validator; while a
//! dispatch is pending, further `Submit` commands are ignored so a second
//! delivery can never be put in flight for the same form. A failed
//! dispatch returns to `CapturingDetails` with every field and attachment
//! intact for a manual retry.

use crate::actions::EnquiryAction;
use crate::attachments;
use crate::config::EnquiryConfig;
use crate::dispatch::EnquiryPayload;
use crate::environment::EnquiryEnvironment;
use crate::providers::RelayClient;
use crate::roster;
use crate::state::{
    EnquiryPhase, EnquiryState, PartyComposition, SubmissionOutcome,
};
use crate::validation;
use reserva_core::effect::Effect;
use reserva_core::environment::Clock;
use reserva_core::reducer::Reducer;
use reserva_core::{SmallVec, smallvec};

/// Enquiry flow reducer.
///
/// One instance drives one call site of the pipeline; behavioral
/// divergences between call sites (phone policy, attachment limits,
/// subject line) live in the [`EnquiryConfig`], not in forked code.
#[derive(Clone)]
pub struct EnquiryReducer<C, R>
where
    C: Clock,
    R: RelayClient,
{
    config: EnquiryConfig,
    _phantom: std::marker::PhantomData<(C, R)>,
}

impl<C, R> EnquiryReducer<C, R>
where
    C: Clock,
    R: RelayClient,
{
    /// Create a reducer for the given call-site configuration.
    #[must_use]
    pub const fn new(config: EnquiryConfig) -> Self {
        Self {
            config,
            _phantom: std::marker::PhantomData,
        }
    }

    /// The call-site configuration this reducer runs with.
    #[must_use]
    pub const fn config(&self) -> &EnquiryConfig {
        &self.config
    }
}

impl<C, R> Default for EnquiryReducer<C, R>
where
    C: Clock,
    R: RelayClient,
{
    fn default() -> Self {
        Self::new(EnquiryConfig::default())
    }
}

impl<C, R> Reducer for EnquiryReducer<C, R>
where
    C: Clock,
    R: RelayClient + Clone + 'static,
{
    type State = EnquiryState;
    type Action = EnquiryAction;
    type Environment = EnquiryEnvironment<C, R>;

    #[allow(clippy::too_many_lines)] // One arm per flow transition
    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ═══════════════════════════════════════════════════════════
            // Date and party selection
            // ═══════════════════════════════════════════════════════════
            EnquiryAction::DatesChosen { range } => {
                if state.phase != EnquiryPhase::SelectingDates {
                    tracing::debug!("DatesChosen outside of date selection, ignored");
                    return smallvec![Effect::None];
                }

                state.form.context.date_range = Some(range);
                state.phase = EnquiryPhase::CapturingDetails;
                smallvec![Effect::None]
            },

            EnquiryAction::BackToDates => {
                if state.phase == EnquiryPhase::CapturingDetails {
                    // Entered details survive the round trip
                    state.phase = EnquiryPhase::SelectingDates;
                }
                smallvec![Effect::None]
            },

            EnquiryAction::PartyChanged { adults, children } => {
                if !matches!(
                    state.phase,
                    EnquiryPhase::SelectingDates | EnquiryPhase::CapturingDetails
                ) {
                    return smallvec![Effect::None];
                }

                let adults = adults.max(1);
                state.form.context.party = PartyComposition { adults, children };
                // Roster must be reshaped before any submit can happen
                roster::derive_slots(&mut state.form.slots, adults);
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════
            // Detail capture
            // ═══════════════════════════════════════════════════════════
            EnquiryAction::GuestNameEdited { slot, value } => {
                if state.phase != EnquiryPhase::CapturingDetails {
                    return smallvec![Effect::None];
                }
                match state.form.slot_mut(slot) {
                    Some(guest) => guest.full_name = value,
                    None => tracing::warn!("Name edit for unknown guest slot"),
                }
                smallvec![Effect::None]
            },

            EnquiryAction::GuestPhoneEdited { slot, value } => {
                if state.phase != EnquiryPhase::CapturingDetails {
                    return smallvec![Effect::None];
                }
                match state.form.slot_mut(slot) {
                    Some(guest) => guest.contact_phone = value,
                    None => tracing::warn!("Phone edit for unknown guest slot"),
                }
                smallvec![Effect::None]
            },

            EnquiryAction::EmailEdited { value } => {
                if state.phase == EnquiryPhase::CapturingDetails {
                    state.form.email = value;
                }
                smallvec![Effect::None]
            },

            EnquiryAction::NationalitySelected { country } => {
                if state.phase == EnquiryPhase::CapturingDetails {
                    state.form.nationality = Some(country);
                }
                smallvec![Effect::None]
            },

            EnquiryAction::PaymentSelected { preference } => {
                if state.phase == EnquiryPhase::CapturingDetails {
                    state.form.payment = preference;
                }
                smallvec![Effect::None]
            },

            EnquiryAction::DocumentAttached { slot, document } => {
                if state.phase != EnquiryPhase::CapturingDetails {
                    return smallvec![Effect::None];
                }
                match attachments::attach(
                    &mut state.form,
                    slot,
                    document,
                    &self.config.attachments,
                ) {
                    Ok(()) => state.attachment_notice = None,
                    Err(e) => {
                        tracing::warn!(error = %e, "Attachment rejected");
                        state.attachment_notice = Some(e.to_string());
                    },
                }
                smallvec![Effect::None]
            },

            EnquiryAction::DocumentRemoved { slot } => {
                if state.phase != EnquiryPhase::CapturingDetails {
                    return smallvec![Effect::None];
                }
                if let Err(e) = attachments::detach(&mut state.form, slot) {
                    tracing::warn!(error = %e, "Detach for unknown guest slot");
                }
                state.attachment_notice = None;
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════
            // Submission
            // ═══════════════════════════════════════════════════════════
            EnquiryAction::Submit => match state.phase {
                EnquiryPhase::CapturingDetails => {
                    let report = validation::validate(&state.form, &self.config);
                    if !report.ok() {
                        tracing::debug!(
                            violations = report.violations().len(),
                            "Submit blocked by validation"
                        );
                        state.last_report = Some(report);
                        return smallvec![Effect::None];
                    }
                    state.last_report = None;

                    match EnquiryPayload::encode(&state.form, &self.config) {
                        Ok(payload) => {
                            state.phase = EnquiryPhase::Submitting;
                            state.outcome = SubmissionOutcome::pending();

                            let relay = env.relay.clone();
                            smallvec![Effect::future(async move {
                                match relay.deliver(payload).await {
                                    Ok(receipt) => {
                                        Some(EnquiryAction::SubmissionSucceeded { receipt })
                                    },
                                    Err(e) => Some(EnquiryAction::SubmissionFailed {
                                        detail: e.to_string(),
                                    }),
                                }
                            })]
                        },
                        // Unreachable after a clean validation; kept as a
                        // local fail-fast so no request leaves with a
                        // corrupt payload
                        Err(e) => {
                            tracing::error!(error = %e, "Payload encoding failed");
                            state.outcome = SubmissionOutcome::failed(e.to_string());
                            smallvec![Effect::None]
                        },
                    }
                },
                EnquiryPhase::Submitting => {
                    // Double-submit guard: one delivery in flight per form
                    tracing::debug!("Submit ignored, submission already pending");
                    smallvec![Effect::None]
                },
                _ => smallvec![Effect::None],
            },

            EnquiryAction::SubmissionSucceeded { receipt } => {
                if state.phase != EnquiryPhase::Submitting {
                    return smallvec![Effect::None];
                }

                tracing::info!(status = receipt.status, "Enquiry confirmed");
                state.outcome = SubmissionOutcome::succeeded();
                state.phase = EnquiryPhase::Confirmed {
                    guest_name: state.form.main_slot().full_name.clone(),
                    email: state.form.email.clone(),
                    at: env.clock.now(),
                };
                smallvec![Effect::None]
            },

            EnquiryAction::SubmissionFailed { detail } => {
                if state.phase != EnquiryPhase::Submitting {
                    return smallvec![Effect::None];
                }

                tracing::warn!(detail = %detail, "Enquiry dispatch failed");
                state.outcome = SubmissionOutcome::failed(detail);
                // Back to the form, fields and attachments intact
                state.phase = EnquiryPhase::CapturingDetails;
                smallvec![Effect::None]
            },

            // ═══════════════════════════════════════════════════════════
            // Confirmation
            // ═══════════════════════════════════════════════════════════
            EnquiryAction::ExitConfirmation => {
                if matches!(state.phase, EnquiryPhase::Confirmed { .. }) {
                    *state = EnquiryState::new();
                }
                smallvec![Effect::None]
            },
        }
    }
}
