use async_trait::async_trait;
use reqwest::{Client, multipart::Form};
use tracing::{debug, instrument};

use crate::config::GatewaySettings;
use crate::error::{GatewayError, GatewayResult};
use crate::models::RpcEnvelope;
use crate::utils::http_client::new_api_client;

/// Raw HTTP outcome, before the gateway classifies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Moves one envelope to the vendor and back.
///
/// Implementations return `Err` only when no HTTP response was obtained;
/// non-success statuses come back as a `TransportResponse` so the gateway
/// classifies every failure in one place.
#[async_trait]
pub trait RpcTransport: Send + Sync {
    async fn send(&self, envelope: &RpcEnvelope) -> GatewayResult<TransportResponse>;
}

/// Multipart POST to the fixed vendor endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_settings(settings: &GatewaySettings) -> GatewayResult<Self> {
        let client = new_api_client(&settings.http)?;
        Ok(Self::new(client, settings.vendor.base_url.clone()))
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RpcTransport for HttpTransport {
    #[instrument(skip(self, envelope), fields(class = envelope.class, method = envelope.method))]
    async fn send(&self, envelope: &RpcEnvelope) -> GatewayResult<TransportResponse> {
        let form = envelope
            .form_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| {
            GatewayError::transport(Some(status), format!("Failed to read vendor response: {}", e))
        })?;

        debug!("Vendor replied with HTTP {} ({} bytes)", status, body.len());
        Ok(TransportResponse { status, body })
    }
}
