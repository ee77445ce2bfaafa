use crate::constants::*;
use crate::{Key, SignatureAlgorithm};
use cdnsign_core::utils::Redact;
use cdnsign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for Media CDN token signing.
#[derive(Clone, Default)]
pub struct Config {
    /// Signing key in base64.
    pub signing_key: Option<String>,
    /// Signature algorithm name: `sha1`, `sha256` or `ed25519`.
    pub signature_algorithm: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("signing_key", &Redact::from(&self.signing_key))
            .field("signature_algorithm", &self.signature_algorithm)
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    ///
    /// - `MEDIA_CDN_SIGNING_KEY`
    /// - `MEDIA_CDN_SIGNATURE_ALGORITHM`
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            signing_key: ctx.env_var(MEDIA_CDN_SIGNING_KEY),
            signature_algorithm: ctx.env_var(MEDIA_CDN_SIGNATURE_ALGORITHM),
        }
    }

    /// Build the key described by this config.
    ///
    /// Returns `Ok(None)` if no signing key is configured. A key without an
    /// algorithm is a configuration error since the two can't be guessed
    /// from each other.
    pub fn to_key(&self) -> Result<Option<Key>> {
        let Some(signing_key) = self.signing_key.as_deref().filter(|v| !v.is_empty()) else {
            return Ok(None);
        };

        let algorithm = self
            .signature_algorithm
            .as_deref()
            .ok_or_else(|| {
                Error::config_invalid(format!(
                    "{MEDIA_CDN_SIGNING_KEY} is set but {MEDIA_CDN_SIGNATURE_ALGORITHM} is missing"
                ))
            })?
            .parse::<SignatureAlgorithm>()?;

        Key::from_base64(algorithm, signing_key).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdnsign_core::{ErrorKind, StaticEnv};
    use std::collections::HashMap;

    #[test]
    fn test_config_from_env() -> anyhow::Result<()> {
        let ctx = Context::new().with_env(StaticEnv {
            envs: HashMap::from([
                (
                    MEDIA_CDN_SIGNING_KEY.to_string(),
                    "DJUcnLguVFKmVCFnWGubG1MZg7fWAnxacMjKDhVZMGI=".to_string(),
                ),
                (
                    MEDIA_CDN_SIGNATURE_ALGORITHM.to_string(),
                    "Ed25519".to_string(),
                ),
            ]),
        });

        let config = Config::from_env(&ctx);
        assert_eq!(config.signature_algorithm.as_deref(), Some("Ed25519"));
        assert_eq!(
            format!("{config:?}"),
            r#"Config { signing_key: DJU***GI=, signature_algorithm: Some("Ed25519") }"#
        );

        let key = config.to_key()?.expect("key must be loaded");
        assert_eq!(key.algorithm(), SignatureAlgorithm::Ed25519);
        Ok(())
    }

    #[test]
    fn test_config_without_key() -> anyhow::Result<()> {
        let config = Config::from_env(&Context::new());
        assert!(config.to_key()?.is_none());
        Ok(())
    }

    #[test]
    fn test_config_key_without_algorithm() {
        let config = Config {
            signing_key: Some("g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8=".to_string()),
            signature_algorithm: None,
        };
        assert_eq!(config.to_key().unwrap_err().kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_config_unsupported_algorithm() {
        let config = Config {
            signing_key: Some("g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8=".to_string()),
            signature_algorithm: Some("md5".to_string()),
        };
        assert_eq!(
            config.to_key().unwrap_err().kind(),
            ErrorKind::AlgorithmUnsupported
        );
    }
}
