//! Core components for signing CDN access tokens and URLs.
//!
//! This crate provides the foundational types and traits for the cdnsign ecosystem.
//! It defines the core abstractions that service crates plug into.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds the environment key providers read from
//! - **Traits**: Abstract interfaces for key loading (`ProvideKey`) and token signing (`SignToken`)
//! - **Signer**: The main orchestrator that coordinates key loading and token signing
//!
//! ## Example
//!
//! ```
//! use cdnsign_core::{Context, Error, ProvideKey, Result, SignToken, Signer, SigningKey};
//!
//! // Define your key type
//! #[derive(Clone, Debug)]
//! struct MyKey {
//!     secret: Vec<u8>,
//! }
//!
//! impl SigningKey for MyKey {
//!     fn is_valid(&self) -> bool {
//!         !self.secret.is_empty()
//!     }
//! }
//!
//! // Implement key loader
//! #[derive(Debug)]
//! struct MyLoader;
//!
//! impl ProvideKey for MyLoader {
//!     type Key = MyKey;
//!
//!     fn provide_key(&self, _: &Context) -> Result<Option<Self::Key>> {
//!         Ok(Some(MyKey { secret: b"my-secret".to_vec() }))
//!     }
//! }
//!
//! // Implement token builder
//! #[derive(Debug)]
//! struct MyBuilder;
//!
//! impl SignToken for MyBuilder {
//!     type Key = MyKey;
//!     type Request = String;
//!
//!     fn sign_token(&self, _: &Context, path: &String, key: Option<&MyKey>) -> Result<String> {
//!         let key = key.ok_or_else(|| Error::config_invalid("missing key"))?;
//!         let hmac = cdnsign_core::hash::hex_hmac_sha256(&key.secret, path.as_bytes());
//!         Ok(format!("{path}~hmac={hmac}"))
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let signer = Signer::new(Context::new(), MyLoader, MyBuilder);
//! let token = signer.sign(&"/index.m3u8".to_string())?;
//! assert!(token.starts_with("/index.m3u8~hmac="));
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! The crate also provides utility modules:
//!
//! - [`hash`]: HMAC and base64 helpers
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod context;
pub use context::{Context, Env, NoopEnv, OsEnv, StaticEnv};

mod error;
pub use error::{Error, ErrorKind, Result};

mod api;
pub use api::{ProvideKey, SignToken, SigningKey};
mod signer;
pub use signer::Signer;
