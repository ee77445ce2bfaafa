use crate::{Config, Key};
use cdnsign_core::{Context, ProvideKey, Result};
use log::debug;

/// EnvKeyProvider loads the Media CDN signing key from environment variables.
///
/// This provider looks for the following environment variables:
/// - `MEDIA_CDN_SIGNING_KEY`: The signing key in base64
/// - `MEDIA_CDN_SIGNATURE_ALGORITHM`: One of `sha1`, `sha256` or `ed25519`
#[derive(Debug, Default)]
pub struct EnvKeyProvider;

impl EnvKeyProvider {
    /// Create a new EnvKeyProvider.
    pub fn new() -> Self {
        Self
    }
}

impl ProvideKey for EnvKeyProvider {
    type Key = Key;

    fn provide_key(&self, ctx: &Context) -> Result<Option<Self::Key>> {
        let key = Config::from_env(ctx).to_key()?;
        if key.is_none() {
            debug!("no media cdn signing key found in env");
        }
        Ok(key)
    }
}
