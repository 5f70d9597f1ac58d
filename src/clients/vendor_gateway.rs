use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, instrument, warn};

use super::transport::{HttpTransport, RpcTransport};
use crate::config::GatewaySettings;
use crate::error::{GatewayError, GatewayResult};
use crate::models::quote::{
    PlaceByNameParams, PlaceByPostcodeParams, QuoteToCollectionParams, RequestQuoteParams,
    UpdateServiceParams,
};
use crate::models::{
    CollectionWindow, ContentLine, Credential, PrintOptions, QuoteDetails, RpcEnvelope,
    RpcResponse, VendorOperation, has_error_indicator,
};

// Longest body excerpt carried in a transport failure message
const ERROR_EXCERPT_CHARS: usize = 200;

/// Named operations over the vendor's RPC-over-HTTP endpoint.
///
/// Stateless: the credential travels with every call and nothing is cached
/// between calls, so one gateway can be shared across tasks.
#[derive(Debug, Clone)]
pub struct VendorGateway<T = HttpTransport> {
    transport: T,
}

impl VendorGateway<HttpTransport> {
    pub fn from_settings(settings: &GatewaySettings) -> GatewayResult<Self> {
        Ok(Self::new(HttpTransport::from_settings(settings)?))
    }
}

impl<T: RpcTransport> VendorGateway<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Probes `quote/getDefItems` with the candidate token. Every failure,
    /// including a blank token, is reported as `false`.
    #[instrument(skip_all)]
    pub async fn validate_credential(&self, token: &str) -> bool {
        let credential = match Credential::new(token) {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Token test failed: {}", e);
                return false;
            }
        };

        match self
            .call(VendorOperation::GetDefItems, &Map::new(), &credential)
            .await
        {
            Ok(_) => {
                info!("Token accepted by vendor");
                true
            }
            Err(e) => {
                warn!("Token test failed: {}", e);
                false
            }
        }
    }

    #[instrument(skip(self, credential))]
    pub async fn lookup_place_by_name(
        &self,
        name: &str,
        credential: &Credential,
    ) -> GatewayResult<RpcResponse> {
        require("name", name)?;
        self.call(
            VendorOperation::GetPlacesByName,
            &PlaceByNameParams { name },
            credential,
        )
        .await
    }

    #[instrument(skip(self, credential))]
    pub async fn lookup_place_by_postcode(
        &self,
        postcode: &str,
        credential: &Credential,
    ) -> GatewayResult<RpcResponse> {
        require("postcode", postcode)?;
        self.call(
            VendorOperation::GetPlacesByPostcode,
            &PlaceByPostcodeParams { postcode },
            credential,
        )
        .await
    }

    /// Details and contents are forwarded verbatim. A `quoteno` in the reply
    /// is left for the caller to capture.
    #[instrument(skip_all, fields(lines = contents.len()))]
    pub async fn request_quote(
        &self,
        details: &QuoteDetails,
        contents: &[ContentLine],
        credential: &Credential,
    ) -> GatewayResult<RpcResponse> {
        let response = self
            .call(
                VendorOperation::RequestQuote,
                &RequestQuoteParams { details, contents },
                credential,
            )
            .await?;

        if let Some(quote_no) = response.quote_no() {
            info!("Vendor assigned quote {}", quote_no);
        }
        Ok(response)
    }

    #[instrument(skip(self, credential))]
    pub async fn update_service(
        &self,
        quote_no: &str,
        service_code: &str,
        reference: &str,
        credential: &Credential,
    ) -> GatewayResult<RpcResponse> {
        require("quote number", quote_no)?;
        require("service code", service_code)?;
        self.call(
            VendorOperation::UpdateService,
            &UpdateServiceParams {
                quoteno: quote_no,
                service: service_code,
                reference,
            },
            credential,
        )
        .await
    }

    #[instrument(skip(self, window, print, credential))]
    pub async fn convert_quote_to_collection(
        &self,
        quote_no: &str,
        window: &CollectionWindow,
        print: &PrintOptions,
        credential: &Credential,
    ) -> GatewayResult<RpcResponse> {
        require("quote number", quote_no)?;
        self.call(
            VendorOperation::QuoteToCollection,
            &QuoteToCollectionParams {
                quoteno: quote_no,
                window,
                print,
            },
            credential,
        )
        .await
    }

    async fn call<P>(
        &self,
        operation: VendorOperation,
        params: &P,
        credential: &Credential,
    ) -> GatewayResult<RpcResponse>
    where
        P: Serialize + Sync + ?Sized,
    {
        let envelope = RpcEnvelope::build(operation, params, Some(credential))?;
        debug!(
            "Calling {}/{} with params {}",
            envelope.class, envelope.method, envelope.params
        );

        let raw = self.transport.send(&envelope).await?;

        if !raw.is_success() {
            return Err(GatewayError::transport(
                Some(raw.status),
                format!("HTTP error! status: {}: {}", raw.status, excerpt(&raw.body)),
            ));
        }

        let body: Value = serde_json::from_str(&raw.body).map_err(|e| {
            GatewayError::transport(
                Some(raw.status),
                format!("Failed to parse vendor response: {}", e),
            )
        })?;

        if has_error_indicator(&body) {
            warn!("{}/{} rejected by vendor", envelope.class, envelope.method);
            return Err(GatewayError::VendorError { payload: body });
        }

        Ok(RpcResponse::new(body))
    }
}

fn require(label: &str, value: &str) -> GatewayResult<()> {
    if value.trim().is_empty() {
        return Err(GatewayError::InvalidArgument(format!(
            "Please enter a {}",
            label
        )));
    }
    Ok(())
}

fn excerpt(body: &str) -> String {
    match body.char_indices().nth(ERROR_EXCERPT_CHARS) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
