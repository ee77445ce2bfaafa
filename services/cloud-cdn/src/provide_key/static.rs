use crate::Key;
use cdnsign_core::utils::Redact;
use cdnsign_core::{Context, ProvideKey, Result};
use std::fmt::{Debug, Formatter};

/// StaticKeyProvider provides a static Cloud CDN signing key.
#[derive(Clone)]
pub struct StaticKeyProvider {
    key_name: String,
    signing_key: String,
}

impl Debug for StaticKeyProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticKeyProvider")
            .field("key_name", &self.key_name)
            .field("signing_key", &Redact::from(&self.signing_key))
            .finish()
    }
}

impl StaticKeyProvider {
    /// Create a new StaticKeyProvider with the key name and base64 key.
    pub fn new(key_name: &str, signing_key: &str) -> Self {
        Self {
            key_name: key_name.to_string(),
            signing_key: signing_key.to_string(),
        }
    }
}

impl ProvideKey for StaticKeyProvider {
    type Key = Key;

    fn provide_key(&self, _: &Context) -> Result<Option<Self::Key>> {
        Key::from_base64(self.key_name.as_str(), &self.signing_key).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_key_provider() -> anyhow::Result<()> {
        let provider = StaticKeyProvider::new("my-key", "nZtRohdNF9m3cKM24IcK4w==");
        let key = provider.provide_key(&Context::new())?;
        assert_eq!(key.as_ref().map(|k| k.key_name()), Some("my-key"));
        Ok(())
    }
}
