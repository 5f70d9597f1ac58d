pub mod settings;

use tracing::info;

pub use settings::GatewaySettings;

use crate::error::GatewayError;

/// Initialize gateway configuration
pub fn init_config() -> Result<GatewaySettings, GatewayError> {
    info!("Initializing gateway configuration from environment");
    GatewaySettings::from_env()
}
