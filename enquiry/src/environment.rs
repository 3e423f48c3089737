//! Enquiry environment.
//!
//! This module defines the environment type for dependency injection in
//! the enquiry reducer.

use crate::providers::RelayClient;
use reserva_core::environment::Clock;

/// Enquiry environment.
///
/// Contains all external dependencies needed by the enquiry reducer.
///
/// # Type Parameters
///
/// - `C`: Clock
/// - `R`: Relay client
#[derive(Clone)]
pub struct EnquiryEnvironment<C, R>
where
    C: Clock,
    R: RelayClient,
{
    /// Clock for timestamps.
    pub clock: C,

    /// Outbound form relay.
    pub relay: R,
}

impl<C, R> EnquiryEnvironment<C, R>
where
    C: Clock,
    R: RelayClient,
{
    /// Create a new enquiry environment.
    #[must_use]
    pub const fn new(clock: C, relay: R) -> Self {
        Self { clock, relay }
    }
}
