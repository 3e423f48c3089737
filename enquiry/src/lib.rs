//! # Reserva Enquiry
//!
//! The reservation enquiry pipeline for a short-term vacation-rental
//! product: one parameterized implementation of the multi-guest checkout
//! flow, from date selection to a confirmed enquiry at the hosted form
//! relay.
//!
//! ## Components
//!
//! - [`directory`]: country/dial-code lookup backing the nationality and
//!   phone selectors
//! - [`roster`]: derives required guest slots from the adult count
//! - [`attachments`]: stages one identity document per guest slot
//! - [`validation`]: collects every violation of the required-field rules
//! - [`dispatch`] + [`providers`]: encodes the validated form into one
//!   multipart delivery and performs it
//! - [`reducers`]: the flow state machine tying the above together
//!
//! ## Architecture
//!
//! The pipeline is a reducer over [`EnquiryState`]:
//!
//! ```text
//! Action → Reducer → (State, Effects) → Effect Execution → More Actions
//! ```
//!
//! ```text
//! SelectingDates ⇄ CapturingDetails ──Submit (validated)──► Submitting
//!                        ▲                                     │
//!                        │◄──────── SubmissionFailed ──────────┤
//!                        │                                     ▼
//!                   ExitConfirmation ◄──────────────────── Confirmed
//! ```
//!
//! Exactly one dispatch can be in flight per form: `Submit` is ignored
//! while the outcome is pending, and a failure returns to detail capture
//! with every field and attachment intact.
//!
//! ## Example
//!
//! ```rust,ignore
//! use reserva_enquiry::*;
//! use reserva_enquiry::providers::FormRelayClient;
//! use reserva_core::environment::SystemClock;
//! use reserva_runtime::Store;
//!
//! let reducer = EnquiryReducer::new(EnquiryConfig::new("New booking enquiry"));
//! let env = EnquiryEnvironment::new(
//!     SystemClock,
//!     FormRelayClient::new("https://formrelay.example.com/submit/bookings"),
//! );
//! let store = Store::new(EnquiryState::new(), reducer, env);
//!
//! // store.send(EnquiryAction::Submit).await?;
//! ```

#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]

// Public modules
pub mod actions;
pub mod attachments;
pub mod config;
pub mod directory;
pub mod dispatch;
pub mod environment;
pub mod error;
pub mod providers;
pub mod reducers;
pub mod roster;
pub mod state;
pub mod validation;

#[cfg(feature = "test-utils")]
pub mod mocks;

// Re-export main types for convenience
pub use actions::EnquiryAction;
pub use config::{AdditionalGuestPhonePolicy, AttachmentLimits, EnquiryConfig};
pub use directory::CountryCode;
pub use environment::EnquiryEnvironment;
pub use error::{EnquiryError, Result};
pub use reducers::EnquiryReducer;
pub use state::{
    BookingContext, DateRange, DocumentRef, EnquiryPhase, EnquiryState, GuestSlot, GuestSlotId,
    PartyComposition, PaymentPreference, ReservationForm, SubmissionOutcome, SubmissionStatus,
};
pub use validation::{FormField, ValidationReport, Violation};
