use anyhow::Result;
use cdnsign_cloud_cdn::{EnvKeyProvider, StaticKeyProvider, UrlRequest, UrlSigner};
use cdnsign_core::{Context, OsEnv, ProvideKey, Signer};
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(OsEnv);

    // Check if we have a key in env by trying to load it
    let loader = EnvKeyProvider::new();
    let test_key = loader.provide_key(&ctx)?;

    let signer = if test_key.is_none() {
        println!("No Cloud CDN signing key found, using demo key for example");
        let static_provider = StaticKeyProvider::new("demo-key", "nZtRohdNF9m3cKM24IcK4w==");
        Signer::new(ctx, static_provider, UrlSigner::new())
    } else {
        Signer::new(ctx, loader, UrlSigner::new())
    };

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://example.com/videos/intro.mp4".to_string());
    let req = UrlRequest::expires_in(url, Duration::from_secs(3600))?;

    println!("Signed URL: {}", signer.sign(&req)?);
    Ok(())
}
