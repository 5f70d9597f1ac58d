use std::fmt;

use crate::config::GatewaySettings;
use crate::error::{GatewayError, GatewayResult};

const VISIBLE_PREFIX: usize = 20;

/// Vendor-issued session token. Opaque: never parsed, never logged in full.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Trims the token and rejects it when nothing is left.
    pub fn new(token: impl AsRef<str>) -> GatewayResult<Self> {
        let token = token.as_ref().trim();
        if token.is_empty() {
            return Err(GatewayError::InvalidArgument(
                "Token ID cannot be empty".to_string(),
            ));
        }
        Ok(Self(token.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First characters of the token followed by an ellipsis, for display.
    pub fn masked(&self) -> String {
        match self.0.char_indices().nth(VISIBLE_PREFIX) {
            Some((idx, _)) => format!("{}...", &self.0[..idx]),
            None => self.0.clone(),
        }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&"<redacted>").finish()
    }
}

/// Where the caller's credential comes from.
#[derive(Debug, Clone)]
pub enum CredentialSource {
    /// Token typed or pasted in by the user.
    Explicit(String),
    /// Token shipped with the deployment (`PP_TOKEN_ID`).
    Preconfigured,
}

impl CredentialSource {
    pub fn resolve(&self, settings: &GatewaySettings) -> GatewayResult<Credential> {
        match self {
            CredentialSource::Explicit(token) => Credential::new(token),
            CredentialSource::Preconfigured => {
                let token = settings.vendor.token_id.as_deref().ok_or_else(|| {
                    GatewayError::Configuration("PP_TOKEN_ID must be set".to_string())
                })?;
                Credential::new(token)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_and_rejects_blank() {
        let cred = Credential::new("  tok-123 \n").unwrap();
        assert_eq!(cred.as_str(), "tok-123");

        assert!(Credential::new("").unwrap_err().is_invalid_argument());
        assert!(Credential::new("   ").unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_debug_is_redacted() {
        let cred = Credential::new("super-secret-token").unwrap();
        let printed = format!("{:?}", cred);
        assert!(!printed.contains("super-secret-token"));
        assert!(printed.contains("redacted"));
    }

    #[test]
    fn test_masked_shows_prefix_only() {
        let cred = Credential::new("abcdefghijklmnopqrstuvwxyz").unwrap();
        assert_eq!(cred.masked(), "abcdefghijklmnopqrst...");

        let short = Credential::new("short").unwrap();
        assert_eq!(short.masked(), "short");
    }

    #[test]
    fn test_resolve_explicit() {
        let settings = GatewaySettings::default();
        let cred = CredentialSource::Explicit(" typed ".to_string())
            .resolve(&settings)
            .unwrap();
        assert_eq!(cred.as_str(), "typed");
    }

    #[test]
    fn test_resolve_preconfigured() {
        let mut settings = GatewaySettings::default();
        let err = CredentialSource::Preconfigured.resolve(&settings).unwrap_err();
        assert!(matches!(err, GatewayError::Configuration(_)));

        settings.vendor.token_id = Some("built-in".to_string());
        let cred = CredentialSource::Preconfigured.resolve(&settings).unwrap();
        assert_eq!(cred.as_str(), "built-in");
    }
}
