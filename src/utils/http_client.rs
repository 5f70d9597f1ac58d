use reqwest::Client;
use std::time::Duration;

use crate::config::settings::HttpConfig;
use crate::error::GatewayError;

pub fn new_api_client(http: &HttpConfig) -> Result<Client, GatewayError> {
    let mut builder = Client::builder()
        .user_agent(http.user_agent.clone())
        // Drop idle connections before the vendor's load balancer does
        .pool_idle_timeout(Some(Duration::from_secs(240)))
        .tcp_keepalive(Duration::from_secs(60));

    if let Some(timeout) = http.request_timeout() {
        builder = builder.timeout(timeout);
    }
    if let Some(timeout) = http.connect_timeout() {
        builder = builder.connect_timeout(timeout);
    }

    builder
        .build()
        .map_err(|e| GatewayError::Configuration(format!("Failed to build HTTP client: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GatewaySettings;

    #[test]
    fn test_builds_with_and_without_timeouts() {
        let mut settings = GatewaySettings::default();
        assert!(new_api_client(&settings.http).is_ok());

        settings.http.request_timeout_secs = Some(10);
        settings.http.connect_timeout_secs = Some(2);
        assert!(new_api_client(&settings.http).is_ok());
    }
}
