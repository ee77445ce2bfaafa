//! Cloud CDN signed URLs.
//!
//! Cloud CDN accepts URLs carrying an expiration, the name of a key
//! registered on the backend and an HMAC-SHA1 signature over the rest of
//! the URL.
//!
//! ## Example
//!
//! ```
//! use cdnsign_cloud_cdn::{Key, UrlRequest, UrlSigner};
//! use cdnsign_core::time::parse_rfc3339;
//!
//! # fn main() -> cdnsign_core::Result<()> {
//! let key = Key::from_base64("my-key", "nZtRohdNF9m3cKM24IcK4w==")?;
//! let req = UrlRequest::new(
//!     "https://example.com/foo",
//!     parse_rfc3339("2022-09-13T12:00:00Z")?,
//! );
//!
//! let url = UrlSigner::new().sign(&key, &req)?;
//! assert_eq!(
//!     url,
//!     "https://example.com/foo?Expires=1663070400&KeyName=my-key&Signature=zoJOsE3Z8tpTE2DpxU-5YlK_4hQ="
//! );
//! # Ok(())
//! # }
//! ```

mod config;
pub use config::Config;

mod key;
pub use key::Key;

mod sign_url;
pub use sign_url::{UrlRequest, UrlSigner};

mod provide_key;
pub use provide_key::{EnvKeyProvider, StaticKeyProvider};

mod constants;
pub use constants::{CLOUD_CDN_KEY_NAME, CLOUD_CDN_SIGNING_KEY};
