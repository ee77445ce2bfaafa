use crate::constants::ED25519_SEED_LENGTH;
use crate::SignatureAlgorithm;
use cdnsign_core::hash::base64_decode_key;
use cdnsign_core::utils::RedactBytes;
use cdnsign_core::{Error, Result, SigningKey};
use std::fmt::{Debug, Formatter};

/// Key that holds the decoded secret and the algorithm it is used with.
///
/// HMAC keys accept any non-empty length, Ed25519 keys must be a 32 byte
/// private seed.
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    algorithm: SignatureAlgorithm,
    secret: Vec<u8>,
}

impl Debug for Key {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Key")
            .field("algorithm", &self.algorithm)
            .field("secret", &RedactBytes::from(&self.secret))
            .finish()
    }
}

impl Key {
    /// Create a key from raw secret bytes.
    pub fn new(algorithm: SignatureAlgorithm, secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(Error::key_invalid("signing key must not be empty"));
        }
        if algorithm == SignatureAlgorithm::Ed25519 && secret.len() != ED25519_SEED_LENGTH {
            return Err(Error::key_invalid(format!(
                "ed25519 signing key must be {ED25519_SEED_LENGTH} bytes, got {}",
                secret.len()
            )));
        }

        Ok(Self { algorithm, secret })
    }

    /// Create a key from its base64 form.
    ///
    /// Both the standard and the URL-safe alphabet are accepted, with or
    /// without padding.
    pub fn from_base64(algorithm: SignatureAlgorithm, base64_key: &str) -> Result<Self> {
        let secret = base64_decode_key(base64_key)?;
        Self::new(algorithm, secret)
    }

    /// The algorithm this key signs with.
    pub fn algorithm(&self) -> SignatureAlgorithm {
        self.algorithm
    }

    pub(crate) fn secret(&self) -> &[u8] {
        &self.secret
    }
}

impl SigningKey for Key {
    fn is_valid(&self) -> bool {
        match self.algorithm {
            SignatureAlgorithm::Ed25519 => self.secret.len() == ED25519_SEED_LENGTH,
            SignatureAlgorithm::Sha1 | SignatureAlgorithm::Sha256 => !self.secret.is_empty(),
        }
    }
}
