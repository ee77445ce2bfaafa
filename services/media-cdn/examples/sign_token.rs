use anyhow::Result;
use cdnsign_core::time::now;
use cdnsign_core::{Context, OsEnv, ProvideKey, Signer};
use cdnsign_media_cdn::{
    EnvKeyProvider, SignatureAlgorithm, StaticKeyProvider, TokenRequest, TokenSigner,
};
use std::time::Duration;

fn main() -> Result<()> {
    // Initialize logging for debugging
    let _ = env_logger::builder().is_test(true).try_init();

    let ctx = Context::new().with_env(OsEnv);

    // Check if we have a key in env by trying to load it
    let loader = EnvKeyProvider::new();
    let test_key = loader.provide_key(&ctx)?;

    let builder = TokenSigner::new().with_expires_in(Duration::from_secs(3600));

    let signer = if test_key.is_none() {
        println!("No Media CDN signing key found, using demo key for example");
        let static_provider = StaticKeyProvider::new(
            SignatureAlgorithm::Ed25519,
            "DJUcnLguVFKmVCFnWGubG1MZg7fWAnxacMjKDhVZMGI=",
        );
        Signer::new(ctx, static_provider, builder)
    } else {
        Signer::new(ctx, loader, builder)
    };

    // Example 1: a single playlist
    let req = TokenRequest::new().with_full_path("/videos/example.m3u8");
    println!("FullPath token: {}", signer.sign(&req)?);

    // Example 2: every segment under two prefixes, bound to a session
    let req = TokenRequest::new()
        .with_path_globs("/tv/*!/film/*")
        .with_start_time(now())
        .with_session_id("session-1234")
        .with_header("X-Device", "living-room-tv")
        .with_ip_ranges("203.0.113.0/24,2001:db8:4a7f:a732/64");
    println!("PathGlobs token: {}", signer.sign(&req)?);

    // Example 3: a URL prefix
    let req = TokenRequest::new().with_url_prefix("https://media.example.com/live/");
    println!("URLPrefix token: {}", signer.sign(&req)?);

    Ok(())
}
