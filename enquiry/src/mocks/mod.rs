//! Mock provider implementations for testing.
//!
//! In-memory [`RelayClient`] that records every delivery and answers from
//! a script, so pipeline tests run at memory speed with no network.

use crate::dispatch::EnquiryPayload;
use crate::error::{EnquiryError, Result};
use crate::providers::{RelayClient, RelayReceipt};
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

/// Scripted answer for a mock delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockRelayResponse {
    /// Accept with HTTP 200
    Accept,
    /// Answer with a non-2xx status
    Reject(u16),
    /// Fail at the network level before any response
    TransportFailure(String),
}

/// Mock relay client.
///
/// Records every payload it is asked to deliver and answers according to
/// its configured response. Clones share the recorded deliveries.
#[derive(Debug, Clone)]
pub struct MockRelayClient {
    response: MockRelayResponse,
    deliveries: Arc<Mutex<Vec<EnquiryPayload>>>,
}

impl MockRelayClient {
    /// Mock that accepts every delivery.
    #[must_use]
    pub fn new() -> Self {
        Self {
            response: MockRelayResponse::Accept,
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock whose relay answers the given non-2xx status.
    #[must_use]
    pub fn rejecting(status: u16) -> Self {
        Self {
            response: MockRelayResponse::Reject(status),
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Mock that fails at the network level with the given message.
    #[must_use]
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: MockRelayResponse::TransportFailure(message.into()),
            deliveries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every payload delivered so far, in order.
    #[must_use]
    pub fn deliveries(&self) -> Vec<EnquiryPayload> {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of deliveries attempted so far.
    #[must_use]
    pub fn delivery_count(&self) -> usize {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

impl Default for MockRelayClient {
    fn default() -> Self {
        Self::new()
    }
}

impl RelayClient for MockRelayClient {
    fn deliver(
        &self,
        payload: EnquiryPayload,
    ) -> impl Future<Output = Result<RelayReceipt>> + Send {
        self.deliveries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(payload);

        let response = self.response.clone();
        async move {
            match response {
                MockRelayResponse::Accept => Ok(RelayReceipt { status: 200 }),
                MockRelayResponse::Reject(status) => Err(EnquiryError::RelayRejected { status }),
                MockRelayResponse::TransportFailure(message) => {
                    Err(EnquiryError::Transport(message))
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_records_and_accepts() {
        let relay = MockRelayClient::new();
        let receipt = relay.deliver(EnquiryPayload::default()).await.unwrap();

        assert_eq!(receipt.status, 200);
        assert_eq!(relay.delivery_count(), 1);
    }

    #[tokio::test]
    async fn mock_rejects_with_status() {
        let relay = MockRelayClient::rejecting(503);
        let result = relay.deliver(EnquiryPayload::default()).await;

        assert_eq!(result, Err(EnquiryError::RelayRejected { status: 503 }));
        // The attempt itself is still recorded
        assert_eq!(relay.delivery_count(), 1);
    }

    #[tokio::test]
    async fn mock_transport_failure() {
        let relay = MockRelayClient::failing("connection reset");
        let result = relay.deliver(EnquiryPayload::default()).await;

        assert_eq!(
            result,
            Err(EnquiryError::Transport("connection reset".to_string()))
        );
    }

    #[tokio::test]
    async fn clones_share_recorded_deliveries() {
        let relay = MockRelayClient::new();
        let clone = relay.clone();

        clone.deliver(EnquiryPayload::default()).await.unwrap();

        assert_eq!(relay.delivery_count(), 1);
    }
}
