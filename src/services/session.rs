use std::sync::Arc;

use tracing::{info, warn};

use crate::clients::{HttpTransport, RpcTransport, VendorGateway};
use crate::config::GatewaySettings;
use crate::error::{GatewayError, GatewayResult};
use crate::models::{
    CollectionWindow, ContentLine, Credential, CredentialSource, PrintOptions, QuoteContext,
    QuoteDetails, RpcResponse,
};

/// Embedding-side state for one user working through the quote workflow:
/// the active token plus the quote correlation data.
pub struct Session<T = HttpTransport> {
    gateway: Arc<VendorGateway<T>>,
    credential: Option<Credential>,
    context: QuoteContext,
}

impl<T: RpcTransport> Session<T> {
    pub fn new(gateway: Arc<VendorGateway<T>>) -> Self {
        Self {
            gateway,
            credential: None,
            context: QuoteContext::default(),
        }
    }

    /// Resolves a token from `source` and probes it. A rejected token leaves
    /// the session signed out, dropping any token held before.
    pub async fn authenticate(
        &mut self,
        source: &CredentialSource,
        settings: &GatewaySettings,
    ) -> GatewayResult<bool> {
        let candidate = source.resolve(settings)?;

        if self.gateway.validate_credential(candidate.as_str()).await {
            info!("Token authentication successful ({})", candidate.masked());
            self.credential = Some(candidate);
            Ok(true)
        } else {
            warn!("Invalid token or token expired");
            self.credential = None;
            Ok(false)
        }
    }

    /// Signs out and forgets the workflow state.
    pub fn clear(&mut self) {
        self.credential = None;
        self.context.clear();
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn context(&self) -> &QuoteContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut QuoteContext {
        &mut self.context
    }

    pub fn select_places(&mut self, orig_place_id: i64, dest_place_id: i64) {
        self.context.orig_place_id = Some(orig_place_id);
        self.context.dest_place_id = Some(dest_place_id);
    }

    pub async fn places_by_name(&self, name: &str) -> GatewayResult<RpcResponse> {
        let credential = self.require_credential()?;
        self.gateway.lookup_place_by_name(name, credential).await
    }

    pub async fn places_by_postcode(&self, postcode: &str) -> GatewayResult<RpcResponse> {
        let credential = self.require_credential()?;
        self.gateway.lookup_place_by_postcode(postcode, credential).await
    }

    /// Quotes a shipment between the selected places. The place ids on
    /// `details` are overwritten from the context and the returned quote
    /// number, if any, is captured.
    pub async fn request_quote(
        &mut self,
        mut details: QuoteDetails,
        contents: &[ContentLine],
    ) -> GatewayResult<RpcResponse> {
        let credential = self.require_credential()?.clone();
        let (orig, dest) = self.context.places().ok_or_else(|| {
            GatewayError::InvalidArgument(
                "Please select both origin and destination places".to_string(),
            )
        })?;
        details.orig_place = orig;
        details.dest_place = dest;

        let response = self
            .gateway
            .request_quote(&details, contents, &credential)
            .await?;
        self.context.capture_quote_no(&response);
        Ok(response)
    }

    pub async fn update_service(
        &mut self,
        service_code: &str,
        reference: &str,
    ) -> GatewayResult<RpcResponse> {
        let credential = self.require_credential()?.clone();
        let quote_no = self.require_quote_no()?;

        let response = self
            .gateway
            .update_service(&quote_no, service_code, reference, &credential)
            .await?;
        self.context.selected_service = Some(service_code.trim().to_string());
        Ok(response)
    }

    pub async fn quote_to_collection(
        &self,
        window: &CollectionWindow,
        print: &PrintOptions,
    ) -> GatewayResult<RpcResponse> {
        let credential = self.require_credential()?;
        let quote_no = self.require_quote_no()?;
        self.gateway
            .convert_quote_to_collection(&quote_no, window, print, credential)
            .await
    }

    fn require_credential(&self) -> GatewayResult<&Credential> {
        self.credential.as_ref().ok_or_else(|| {
            GatewayError::InvalidArgument("Not authenticated: enter a token ID first".to_string())
        })
    }

    fn require_quote_no(&self) -> GatewayResult<String> {
        self.context
            .quote_no
            .clone()
            .ok_or_else(|| GatewayError::InvalidArgument("Please enter a quote number".to_string()))
    }
}
