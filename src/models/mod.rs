pub mod context;
pub mod credential;
pub mod envelope;
pub mod quote;
pub mod response;

pub use context::QuoteContext;
pub use credential::{Credential, CredentialSource};
pub use envelope::{RpcEnvelope, VendorClass, VendorOperation};
pub use quote::{CollectionWindow, ContentLine, Party, PrintOptions, QuoteDetails};
pub use response::{RpcResponse, has_error_indicator};
