use crate::constants::*;
use crate::Key;
use cdnsign_core::utils::Redact;
use cdnsign_core::{Context, Error, Result};
use std::fmt::{Debug, Formatter};

/// Config for Cloud CDN URL signing.
#[derive(Clone, Default)]
pub struct Config {
    /// Name of the signing key added to the backend bucket or service.
    pub key_name: Option<String>,
    /// Signing key in base64.
    pub signing_key: Option<String>,
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("key_name", &self.key_name)
            .field("signing_key", &Redact::from(&self.signing_key))
            .finish()
    }
}

impl Config {
    /// Load config from environment variables.
    pub fn from_env(ctx: &Context) -> Self {
        Self {
            key_name: ctx.env_var(CLOUD_CDN_KEY_NAME),
            signing_key: ctx.env_var(CLOUD_CDN_SIGNING_KEY),
        }
    }

    /// Build the key described by this config.
    ///
    /// Returns `Ok(None)` if neither value is configured.
    pub fn to_key(&self) -> Result<Option<Key>> {
        match (self.key_name.as_deref(), self.signing_key.as_deref()) {
            (None, None) => Ok(None),
            (Some(name), Some(key)) => Key::from_base64(name, key).map(Some),
            (None, Some(_)) => Err(Error::config_invalid(format!(
                "{CLOUD_CDN_SIGNING_KEY} is set but {CLOUD_CDN_KEY_NAME} is missing"
            ))),
            (Some(_), None) => Err(Error::config_invalid(format!(
                "{CLOUD_CDN_KEY_NAME} is set but {CLOUD_CDN_SIGNING_KEY} is missing"
            ))),
        }
    }
}
