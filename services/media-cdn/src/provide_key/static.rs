use crate::{Key, SignatureAlgorithm};
use cdnsign_core::utils::Redact;
use cdnsign_core::{Context, ProvideKey, Result};
use std::fmt::{Debug, Formatter};

/// StaticKeyProvider provides a static Media CDN signing key.
///
/// This provider is used when you have the key directly and want to use it
/// without any dynamic loading. The key is decoded when it is provided, so a
/// malformed key surfaces as an error from the first signing call.
#[derive(Clone)]
pub struct StaticKeyProvider {
    algorithm: SignatureAlgorithm,
    signing_key: String,
}

impl Debug for StaticKeyProvider {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticKeyProvider")
            .field("algorithm", &self.algorithm)
            .field("signing_key", &Redact::from(&self.signing_key))
            .finish()
    }
}

impl StaticKeyProvider {
    /// Create a new StaticKeyProvider with the algorithm and base64 key.
    pub fn new(algorithm: SignatureAlgorithm, signing_key: &str) -> Self {
        Self {
            algorithm,
            signing_key: signing_key.to_string(),
        }
    }
}

impl ProvideKey for StaticKeyProvider {
    type Key = Key;

    fn provide_key(&self, _: &Context) -> Result<Option<Self::Key>> {
        Key::from_base64(self.algorithm, &self.signing_key).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdnsign_core::ErrorKind;

    #[test]
    fn test_static_key_provider() -> anyhow::Result<()> {
        let provider = StaticKeyProvider::new(
            SignatureAlgorithm::Ed25519,
            "DJUcnLguVFKmVCFnWGubG1MZg7fWAnxacMjKDhVZMGI=",
        );
        assert_eq!(
            format!("{provider:?}"),
            "StaticKeyProvider { algorithm: Ed25519, signing_key: DJU***GI= }"
        );

        let key = provider.provide_key(&Context::new())?;
        assert_eq!(
            key.map(|k| k.algorithm()),
            Some(SignatureAlgorithm::Ed25519)
        );
        Ok(())
    }

    #[test]
    fn test_static_key_provider_wrong_length() {
        // "abc" is 3 bytes, not an ed25519 seed.
        let provider = StaticKeyProvider::new(SignatureAlgorithm::Ed25519, "YWJj");
        let err = provider.provide_key(&Context::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
    }
}
