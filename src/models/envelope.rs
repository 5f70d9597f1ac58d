use serde::Serialize;

use super::credential::Credential;
use crate::error::{GatewayError, GatewayResult};

/// Vendor namespace an operation lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorClass {
    Quote,
    Collection,
}

impl VendorClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            VendorClass::Quote => "quote",
            VendorClass::Collection => "collection",
        }
    }
}

/// Every vendor call this client knows how to make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VendorOperation {
    GetDefItems,
    GetPlacesByName,
    GetPlacesByPostcode,
    RequestQuote,
    UpdateService,
    QuoteToCollection,
}

impl VendorOperation {
    pub const ALL: [VendorOperation; 6] = [
        VendorOperation::GetDefItems,
        VendorOperation::GetPlacesByName,
        VendorOperation::GetPlacesByPostcode,
        VendorOperation::RequestQuote,
        VendorOperation::UpdateService,
        VendorOperation::QuoteToCollection,
    ];

    pub fn class(&self) -> VendorClass {
        match self {
            VendorOperation::QuoteToCollection => VendorClass::Collection,
            _ => VendorClass::Quote,
        }
    }

    pub fn method(&self) -> &'static str {
        match self {
            VendorOperation::GetDefItems => "getDefItems",
            VendorOperation::GetPlacesByName => "getPlacesByName",
            VendorOperation::GetPlacesByPostcode => "getPlacesByPostcode",
            VendorOperation::RequestQuote => "requestQuote",
            VendorOperation::UpdateService => "updateService",
            VendorOperation::QuoteToCollection => "quoteToCollection",
        }
    }

    /// Even the validation probe needs a token, so this is true across the board.
    pub fn requires_auth(&self) -> bool {
        true
    }
}

/// One request as the vendor sees it: four multipart text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpcEnvelope {
    pub method: &'static str,
    pub class: &'static str,
    /// JSON-encoded parameter object.
    pub params: String,
    pub token_id: Option<Credential>,
}

impl RpcEnvelope {
    pub fn build<P>(
        operation: VendorOperation,
        params: &P,
        credential: Option<&Credential>,
    ) -> GatewayResult<Self>
    where
        P: Serialize + ?Sized,
    {
        if operation.requires_auth() && credential.is_none() {
            return Err(GatewayError::InvalidArgument(format!(
                "{} requires a token",
                operation.method()
            )));
        }

        Ok(Self {
            method: operation.method(),
            class: operation.class().as_str(),
            params: serde_json::to_string(params)?,
            token_id: credential.cloned(),
        })
    }

    /// Form fields in wire order. `token_id` is omitted for unauthenticated calls.
    pub fn form_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("method", self.method.to_string()),
            ("class", self.class.to_string()),
            ("params", self.params.clone()),
        ];
        if let Some(token) = &self.token_id {
            fields.push(("token_id", token.as_str().to_string()));
        }
        fields
    }
}
