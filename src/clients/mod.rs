pub mod transport;
pub mod vendor_gateway;

pub use transport::*;
pub use vendor_gateway::*;
