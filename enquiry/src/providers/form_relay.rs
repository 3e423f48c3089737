//! Hosted form relay client.
//!
//! Production [`RelayClient`] implementation: posts one
//! `multipart/form-data` request per delivery to the configured relay
//! endpoint. No authentication headers; the endpoint URL is the only
//! credential the relay knows.
//!
//! The HTTP status of the response is inspected: only a 2xx answer counts
//! as a delivery. A request that completes with an error page is a
//! rejection, not a silent success.

use crate::dispatch::EnquiryPayload;
use crate::error::{EnquiryError, Result};
use crate::providers::{RelayClient, RelayReceipt};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use std::future::Future;
use std::time::Duration;

/// Default per-delivery timeout.
///
/// A relay that never answers must not leave the submit control disabled
/// forever; the timeout turns a hung request into a transport error.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the hosted form relay.
///
/// # Example
///
/// ```no_run
/// use reserva_enquiry::providers::FormRelayClient;
///
/// let relay = FormRelayClient::new("https://formrelay.example.com/submit/bookings");
/// ```
#[derive(Clone, Debug)]
pub struct FormRelayClient {
    /// Relay endpoint URL.
    endpoint: String,

    /// HTTP client for making requests.
    http_client: Client,

    /// Per-delivery timeout.
    timeout: Duration,
}

impl FormRelayClient {
    /// Create a new relay client for the given endpoint.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            http_client: Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set a custom per-delivery timeout.
    ///
    /// Default: 30 seconds
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the multipart body for one payload.
    fn build_form(payload: EnquiryPayload) -> Result<Form> {
        let mut form = Form::new();

        for part in payload.text_parts {
            form = form.text(part.name, part.value);
        }

        for file in payload.file_parts {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime_type)
                .map_err(|_| EnquiryError::UnsupportedDocumentType {
                    mime: file.mime_type.clone(),
                })?;
            form = form.part(file.name, part);
        }

        Ok(form)
    }
}

impl RelayClient for FormRelayClient {
    fn deliver(
        &self,
        payload: EnquiryPayload,
    ) -> impl Future<Output = Result<RelayReceipt>> + Send {
        let endpoint = self.endpoint.clone();
        let http_client = self.http_client.clone();
        let timeout = self.timeout;

        async move {
            let form = Self::build_form(payload)?;

            let response = http_client
                .post(&endpoint)
                .multipart(form)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| EnquiryError::Transport(e.to_string()))?;

            let status = response.status();
            if status.is_success() {
                tracing::debug!(status = status.as_u16(), "Relay accepted enquiry");
                Ok(RelayReceipt {
                    status: status.as_u16(),
                })
            } else {
                tracing::error!(status = status.as_u16(), "Relay rejected enquiry");
                Err(EnquiryError::RelayRejected {
                    status: status.as_u16(),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::{FilePart, TextPart};

    #[test]
    fn builder_sets_timeout() {
        let relay = FormRelayClient::new("https://relay.test/submit")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(relay.timeout, Duration::from_secs(5));
        assert_eq!(relay.endpoint, "https://relay.test/submit");
    }

    #[test]
    fn build_form_accepts_text_and_files() {
        let payload = EnquiryPayload {
            text_parts: vec![TextPart {
                name: "_subject".to_string(),
                value: "New booking enquiry".to_string(),
            }],
            file_parts: vec![FilePart {
                name: "document_guest_1".to_string(),
                file_name: "passport.png".to_string(),
                mime_type: "image/png".to_string(),
                bytes: vec![0; 8],
            }],
        };

        assert!(FormRelayClient::build_form(payload).is_ok());
    }

    #[test]
    fn build_form_rejects_malformed_mime() {
        let payload = EnquiryPayload {
            text_parts: vec![],
            file_parts: vec![FilePart {
                name: "document_guest_1".to_string(),
                file_name: "mystery.bin".to_string(),
                mime_type: "not a mime type".to_string(),
                bytes: vec![0; 8],
            }],
        };

        assert!(matches!(
            FormRelayClient::build_form(payload),
            Err(EnquiryError::UnsupportedDocumentType { .. })
        ));
    }
}
