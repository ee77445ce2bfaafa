//! Media CDN dual-token signing.
//!
//! Media CDN authorizes requests with short tokens that carry a resource
//! scope, a validity window and optional bindings, signed with HMAC-SHA1,
//! HMAC-SHA256 or Ed25519.
//!
//! ## Example
//!
//! ```
//! use cdnsign_core::time::parse_rfc3339;
//! use cdnsign_core::{Context, Signer};
//! use cdnsign_media_cdn::{SignatureAlgorithm, StaticKeyProvider, TokenRequest, TokenSigner};
//!
//! # fn main() -> cdnsign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticKeyProvider::new(
//!         SignatureAlgorithm::Ed25519,
//!         "DJUcnLguVFKmVCFnWGubG1MZg7fWAnxacMjKDhVZMGI=",
//!     ),
//!     TokenSigner::new(),
//! );
//!
//! let req = TokenRequest::new()
//!     .with_full_path("/example.m3u8")
//!     .with_expiration_time(parse_rfc3339("2022-09-13T12:00:00Z")?);
//! let token = signer.sign(&req)?;
//! assert!(token.starts_with("FullPath~Expires=1663070400~Signature="));
//! # Ok(())
//! # }
//! ```

mod algorithm;
pub use algorithm::SignatureAlgorithm;

mod config;
pub use config::Config;

mod key;
pub use key::Key;

mod request;
pub use request::{Header, Scope, TokenRequest};

mod sign_token;
pub use sign_token::{sign_token, TokenSigner};

mod provide_key;
pub use provide_key::{EnvKeyProvider, StaticKeyProvider};

mod constants;
pub use constants::{DEFAULT_EXPIRES_IN, MEDIA_CDN_SIGNATURE_ALGORITHM, MEDIA_CDN_SIGNING_KEY};
