use cdnsign_core::hash::base64_decode_key;
use cdnsign_core::utils::RedactBytes;
use cdnsign_core::{Error, Result, SigningKey};
use std::fmt::{Debug, Formatter};

/// Key that holds a Cloud CDN URL signing key and its name.
///
/// Cloud CDN keys are 128 bit HMAC-SHA1 secrets, but any non-empty length
/// is accepted here.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    key_name: String,
    secret: Vec<u8>,
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("key_name", &self.key_name)
            .field("secret", &RedactBytes::from(&self.secret))
            .finish()
    }
}

impl Key {
    /// Create a key from its name and raw secret bytes.
    pub fn new(key_name: impl Into<String>, secret: impl Into<Vec<u8>>) -> Result<Self> {
        let key_name = key_name.into();
        let secret = secret.into();
        if key_name.is_empty() {
            return Err(Error::config_invalid("cloud cdn key name must not be empty"));
        }
        if secret.is_empty() {
            return Err(Error::key_invalid("cloud cdn signing key must not be empty"));
        }

        Ok(Self { key_name, secret })
    }

    /// Create a key from its name and base64 secret.
    ///
    /// The console hands out URL-safe base64, the standard alphabet is
    /// accepted too.
    pub fn from_base64(key_name: impl Into<String>, base64_key: &str) -> Result<Self> {
        let secret = base64_decode_key(base64_key)?;
        Self::new(key_name, secret)
    }

    /// The key name, sent as `KeyName`.
    pub fn key_name(&self) -> &str {
        &self.key_name
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl SigningKey for Key {
    fn is_valid(&self) -> bool {
        !self.key_name.is_empty() && !self.secret.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdnsign_core::ErrorKind;

    #[test]
    fn test_key_from_base64() -> anyhow::Result<()> {
        let key = Key::from_base64("my-key", "nZtRohdNF9m3cKM24IcK4w==")?;
        assert_eq!(key.key_name(), "my-key");
        assert_eq!(key.secret().len(), 16);
        assert!(key.is_valid());
        assert_eq!(
            format!("{key:?}"),
            r#"Key { key_name: "my-key", secret: *** (16 bytes) }"#
        );
        Ok(())
    }

    #[test]
    fn test_key_requires_name() {
        let err = Key::from_base64("", "nZtRohdNF9m3cKM24IcK4w==").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_key_requires_secret() {
        let err = Key::new("my-key", Vec::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
    }
}
