//! Boundary adapter for the external form backend.
//!
//! The backend is a spreadsheet-backed form endpoint that takes a POST of
//! opaquely-named fields and returns nothing a client can interpret. A
//! completed transfer is therefore the only success signal: `submit`
//! resolving `Ok(())` means "dispatched", never "accepted".

use std::time::Duration;

use async_trait::async_trait;

use crate::config::FormConfig;
use crate::error::{RsvpError, RsvpResult};
use crate::record::{RsvpRecord, RsvpStatus};

/// How long the bot-trap fast path pretends to be on the wire.
pub const BOT_TRAP_DELAY: Duration = Duration::from_millis(1_000);

/// Human-readable status values the spreadsheet column expects.
fn status_value(status: RsvpStatus) -> &'static str {
    match status {
        RsvpStatus::Confirmed => "I'll be there Inshallah",
        RsvpStatus::Tentative => "Remind me again closer to the event",
    }
}

/// Delivers a form-encoded POST. Seam for tests; production uses
/// [`HttpTransport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_form(&self, endpoint: &str, fields: &[(String, String)]) -> RsvpResult<()>;
}

/// reqwest-backed transport.
#[derive(Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send_form(&self, endpoint: &str, fields: &[(String, String)]) -> RsvpResult<()> {
        // The backend serves an opaque confirmation page; status and body
        // carry no signal, so only transfer completion is observed.
        self.client
            .post(endpoint)
            .form(fields)
            .send()
            .await
            .map_err(|e| RsvpError::Transport(e.to_string()))?;

        Ok(())
    }
}

/// Maps RSVP records onto the backend's field identifiers and dispatches
/// them out of band.
pub struct FormBridge<T: Transport> {
    config: FormConfig,
    transport: T,
}

impl<T: Transport> FormBridge<T> {
    pub fn new(config: FormConfig, transport: T) -> Self {
        FormBridge { config, transport }
    }

    /// Serialize the record into the backend's opaque field names.
    fn encode(&self, record: &RsvpRecord) -> Vec<(String, String)> {
        let fields = &self.config.fields;
        vec![
            (fields.name.clone(), record.name.clone()),
            (fields.phone.clone(), record.phone.clone()),
            (fields.party_size.clone(), record.party_size.to_string()),
            (
                fields.status.clone(),
                status_value(record.status).to_string(),
            ),
        ]
    }

    /// Dispatch the record to the configured endpoint.
    ///
    /// `Ok(())` means the transfer left the client and the delivery
    /// channel completed; whether the backend accepted or silently
    /// rejected the data is unknowable here.
    pub async fn submit(&self, record: &RsvpRecord) -> RsvpResult<()> {
        let endpoint = self.config.endpoint()?;
        self.transport.send_form(endpoint, &self.encode(record)).await
    }

    /// Fake a dispatch for trapped submissions: wait about as long as a
    /// real round trip, touch nothing on the network.
    pub async fn absorb_bot(&self) {
        tokio::time::sleep(BOT_TRAP_DELAY).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FieldNames;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        calls: Mutex<Vec<(String, Vec<(String, String)>)>>,
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn send_form(
            &self,
            endpoint: &str,
            fields: &[(String, String)],
        ) -> RsvpResult<()> {
            self.calls
                .lock()
                .unwrap()
                .push((endpoint.to_string(), fields.to_vec()));
            Ok(())
        }
    }

    fn test_record(status: RsvpStatus) -> RsvpRecord {
        RsvpRecord::new("Ayesha Khan", "5035551234", 3, status).unwrap()
    }

    #[tokio::test]
    async fn test_submit_maps_fields_to_backend_identifiers() {
        let bridge = FormBridge::new(FormConfig::default(), RecordingTransport::default());

        bridge.submit(&test_record(RsvpStatus::Confirmed)).await.unwrap();

        let calls = bridge.transport.calls.lock().unwrap();
        let (endpoint, fields) = &calls[0];

        assert!(endpoint.ends_with("/formResponse"));
        assert_eq!(
            fields,
            &vec![
                ("entry.1264838894".to_string(), "Ayesha Khan".to_string()),
                ("entry.327917306".to_string(), "5035551234".to_string()),
                ("entry.1390779751".to_string(), "3".to_string()),
                (
                    "entry.1080861501".to_string(),
                    "I'll be there Inshallah".to_string()
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_tentative_status_value() {
        let bridge = FormBridge::new(FormConfig::default(), RecordingTransport::default());

        bridge.submit(&test_record(RsvpStatus::Tentative)).await.unwrap();

        let calls = bridge.transport.calls.lock().unwrap();
        let (_, fields) = &calls[0];
        assert_eq!(fields[3].1, "Remind me again closer to the event");
    }

    #[tokio::test]
    async fn test_missing_endpoint_blocks_before_transport() {
        let config = FormConfig {
            endpoint: String::new(),
            fields: FieldNames::default(),
        };
        let bridge = FormBridge::new(config, RecordingTransport::default());

        let result = bridge.submit(&test_record(RsvpStatus::Confirmed)).await;

        assert!(matches!(result, Err(RsvpError::Config(_))));
        assert!(bridge.transport.calls.lock().unwrap().is_empty());
    }
}
