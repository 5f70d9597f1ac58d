//! Parcel Gateway Library
//!
//! Typed client for the Parcel Perfect ecomService JSON endpoint. Each vendor
//! call is wrapped as a named operation on [`VendorGateway`]; the caller owns
//! the token and any quote state, optionally through [`Session`].

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types for convenience
pub use clients::{HttpTransport, RpcTransport, TransportResponse, VendorGateway};
pub use config::GatewaySettings;
pub use error::{GatewayError, GatewayResult};
pub use models::{
    CollectionWindow, ContentLine, Credential, CredentialSource, Party, PrintOptions,
    QuoteContext, QuoteDetails, RpcEnvelope, RpcResponse, VendorOperation,
};
pub use services::Session;
