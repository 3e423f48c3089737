//! Enquiry providers.
//!
//! This module defines traits for the external dependencies of the
//! pipeline. Providers are **interfaces**, not implementations: the
//! reducer depends on these traits, and the application wires concrete
//! implementations at the edge.
//!
//! This enables:
//! - **Testing**: in-memory mocks, deterministic and fast
//! - **Production**: the hosted form relay over HTTPS
//! - **Development**: instrumented versions (logging, capture)

use crate::dispatch::EnquiryPayload;
use crate::error::Result;

pub mod form_relay;

pub use form_relay::FormRelayClient;

/// Proof that the relay accepted a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayReceipt {
    /// HTTP status the relay answered with (always 2xx)
    pub status: u16,
}

/// Outbound form relay.
///
/// The relay is a hosted third-party service that forwards form
/// submissions to an inbox; it is opaque beyond its wire contract. One
/// call to [`deliver`](RelayClient::deliver) performs exactly one
/// delivery attempt. Deliveries are **not** idempotent at the relay
/// (each produces a separate notification) and are never retried
/// automatically; the flow controller prevents concurrent duplicates.
pub trait RelayClient: Send + Sync {
    /// Deliver one encoded enquiry to the relay.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The network request fails before a response arrives
    ///   ([`EnquiryError::Transport`](crate::error::EnquiryError::Transport))
    /// - The relay answers with a non-2xx status
    ///   ([`EnquiryError::RelayRejected`](crate::error::EnquiryError::RelayRejected))
    fn deliver(
        &self,
        payload: EnquiryPayload,
    ) -> impl std::future::Future<Output = Result<RelayReceipt>> + Send;
}
