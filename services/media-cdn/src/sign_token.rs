// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::constants::*;
use crate::{Key, Scope, SignatureAlgorithm, TokenRequest};
use cdnsign_core::hash::{base64_url_encode_no_pad, hex_hmac_sha1, hex_hmac_sha256};
use cdnsign_core::time::{now, unix_seconds, DateTime};
use cdnsign_core::{Context, Error, Result, SignToken};
use ed25519_dalek::Signer as _;
use log::debug;
use std::time::Duration;

/// TokenSigner builds Media CDN dual tokens.
///
/// - [Media CDN dual-token authentication](https://cloud.google.com/media-cdn/docs/use-dual-token-authentication)
///
/// The signer holds no key material and no state besides the default token
/// lifetime, so one instance can be shared freely between threads.
#[derive(Debug, Clone)]
pub struct TokenSigner {
    expires_in: Duration,
}

impl Default for TokenSigner {
    fn default() -> Self {
        Self {
            expires_in: DEFAULT_EXPIRES_IN,
        }
    }
}

impl TokenSigner {
    /// Create a new signer with the default five minute token lifetime.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lifetime applied to requests without an expiration time.
    pub fn with_expires_in(mut self, expires_in: Duration) -> Self {
        self.expires_in = expires_in;
        self
    }

    /// Sign the request with the given key.
    pub fn sign(&self, key: &Key, req: &TokenRequest) -> Result<String> {
        let expires = match req.expiration_time {
            Some(t) => t,
            None => self.default_expiration()?,
        };

        let fields = CanonicalFields::build(req, expires)?;
        let string_to_sign = fields.string_to_sign();
        debug!(
            "signing media cdn token with {}, string to sign: {}",
            key.algorithm(),
            string_to_sign
        );

        let signature = sign_bytes(key, string_to_sign.as_bytes())?;
        Ok(fields.into_token(signature))
    }

    fn default_expiration(&self) -> Result<DateTime> {
        let expires_in = chrono::TimeDelta::from_std(self.expires_in).map_err(|e| {
            Error::config_invalid("default token lifetime is out of range").with_source(e)
        })?;

        Ok(now() + expires_in)
    }
}

impl SignToken for TokenSigner {
    type Key = Key;
    type Request = TokenRequest;

    fn sign_token(&self, _: &Context, req: &TokenRequest, key: Option<&Key>) -> Result<String> {
        let Some(key) = key else {
            return Err(Error::config_invalid("missing media cdn signing key"));
        };

        self.sign(key, req)
    }
}

/// Sign a Media CDN dual token in one shot.
///
/// `base64_key` is the secret in base64, `signature_algorithm` is one of
/// `sha1`, `sha256` or `ed25519` (case-insensitive).
///
/// The scope is checked first, then the algorithm, then the key, so a
/// request without scope fails with a configuration error regardless of the
/// other inputs.
///
/// ```
/// use cdnsign_core::time::parse_rfc3339;
/// use cdnsign_media_cdn::{sign_token, TokenRequest};
///
/// # fn main() -> cdnsign_core::Result<()> {
/// let req = TokenRequest::new()
///     .with_path_globs("/*")
///     .with_expiration_time(parse_rfc3339("2022-09-13T12:00:00Z")?);
///
/// let token = sign_token("g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8=", "sha1", &req)?;
/// assert_eq!(
///     token,
///     "PathGlobs=/*~Expires=1663070400~hmac=c1c446eea24faa31392519f975fea7eefb945625"
/// );
/// # Ok(())
/// # }
/// ```
pub fn sign_token(
    base64_key: &str,
    signature_algorithm: &str,
    req: &TokenRequest,
) -> Result<String> {
    req.scope()?;
    let algorithm: SignatureAlgorithm = signature_algorithm.parse()?;
    let key = Key::from_base64(algorithm, base64_key)?;

    TokenSigner::new().sign(&key, req)
}

/// The two parallel field lists of a token.
///
/// For most fields the token carries exactly what is signed. `FullPath` and
/// `Headers` differ: the token only names them while the signature covers
/// their values.
struct CanonicalFields {
    token: Vec<String>,
    signing: Vec<String>,
}

impl CanonicalFields {
    fn build(req: &TokenRequest, expires: DateTime) -> Result<Self> {
        let mut fields = CanonicalFields {
            token: Vec::with_capacity(8),
            signing: Vec::with_capacity(7),
        };

        match req.scope()? {
            Scope::FullPath(path) => {
                fields.push(FULL_PATH.to_string(), format!("{FULL_PATH}={path}"));
            }
            Scope::PathGlobs(globs) => {
                fields.push_shared(format!("{PATH_GLOBS}={}", globs.trim()));
            }
            Scope::UrlPrefix(prefix) => {
                fields.push_shared(format!(
                    "{URL_PREFIX}={}",
                    base64_url_encode_no_pad(prefix.as_bytes())
                ));
            }
        }

        if let Some(start) = req.start_time {
            fields.push_shared(format!("{STARTS}={}", unix_seconds(start)));
        }

        fields.push_shared(format!("{EXPIRES}={}", unix_seconds(expires)));

        if let Some(session_id) = &req.session_id {
            fields.push_shared(format!("{SESSION_ID}={session_id}"));
        }

        if let Some(data) = &req.data {
            fields.push_shared(format!("{DATA}={data}"));
        }

        // An empty header list binds nothing, so no `Headers=` field is emitted.
        if !req.headers.is_empty() {
            let names = req
                .headers
                .iter()
                .map(|h| h.name.as_str())
                .collect::<Vec<_>>()
                .join(",");
            let pairs = req
                .headers
                .iter()
                .map(|h| format!("{}={}", h.name, h.value))
                .collect::<Vec<_>>()
                .join(",");
            fields.push(format!("{HEADERS}={names}"), format!("{HEADERS}={pairs}"));
        }

        if let Some(ip_ranges) = &req.ip_ranges {
            fields.push_shared(format!(
                "{IP_RANGES}={}",
                base64_url_encode_no_pad(ip_ranges.as_bytes())
            ));
        }

        Ok(fields)
    }

    fn push(&mut self, token: String, signing: String) {
        self.token.push(token);
        self.signing.push(signing);
    }

    fn push_shared(&mut self, field: String) {
        self.signing.push(field.clone());
        self.token.push(field);
    }

    fn string_to_sign(&self) -> String {
        self.signing.join(FIELD_SEPARATOR)
    }

    fn into_token(mut self, signature: String) -> String {
        self.token.push(signature);
        self.token.join(FIELD_SEPARATOR)
    }
}

/// Sign the canonical bytes, returning the final token field.
fn sign_bytes(key: &Key, content: &[u8]) -> Result<String> {
    let field = match key.algorithm() {
        SignatureAlgorithm::Ed25519 => {
            let seed = <[u8; ED25519_SEED_LENGTH]>::try_from(key.secret()).map_err(|e| {
                Error::key_invalid("ed25519 signing key must be a 32 byte seed").with_source(e)
            })?;
            let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);
            let signature = signing_key.sign(content);
            format!(
                "{SIGNATURE}={}",
                base64_url_encode_no_pad(&signature.to_bytes())
            )
        }
        SignatureAlgorithm::Sha256 => format!("{HMAC}={}", hex_hmac_sha256(key.secret(), content)),
        SignatureAlgorithm::Sha1 => format!("{HMAC}={}", hex_hmac_sha1(key.secret(), content)),
    };

    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdnsign_core::time::parse_rfc3339;
    use cdnsign_core::ErrorKind;
    use ed25519_dalek::{Signature, Verifier};
    use pretty_assertions::assert_eq;

    const ED25519_KEY: &str = "DJUcnLguVFKmVCFnWGubG1MZg7fWAnxacMjKDhVZMGI=";
    const HMAC_KEY: &str = "g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8=";

    fn expires() -> DateTime {
        parse_rfc3339("2022-09-13T12:00:00Z").unwrap()
    }

    #[test]
    fn test_full_path_is_signed_but_not_transmitted() -> anyhow::Result<()> {
        let req = TokenRequest::new()
            .with_full_path("/example.m3u8")
            .with_expiration_time(expires());
        let fields = CanonicalFields::build(&req, expires())?;

        assert_eq!(fields.token, ["FullPath", "Expires=1663070400"]);
        assert_eq!(
            fields.string_to_sign(),
            "FullPath=/example.m3u8~Expires=1663070400"
        );
        Ok(())
    }

    #[test]
    fn test_headers_sign_values_but_transmit_names() -> anyhow::Result<()> {
        let req = TokenRequest::new()
            .with_path_globs(" /* ")
            .with_header("Foo", "bar")
            .with_header("BAZ", "quux");
        let fields = CanonicalFields::build(&req, expires())?;

        assert_eq!(
            fields.token,
            ["PathGlobs=/*", "Expires=1663070400", "Headers=Foo,BAZ"]
        );
        assert_eq!(
            fields.string_to_sign(),
            "PathGlobs=/*~Expires=1663070400~Headers=Foo=bar,BAZ=quux"
        );
        Ok(())
    }

    #[test]
    fn test_empty_header_list_is_omitted() -> anyhow::Result<()> {
        let req = TokenRequest::new()
            .with_path_globs("/*")
            .with_headers(Vec::<crate::Header>::new());
        let fields = CanonicalFields::build(&req, expires())?;

        assert_eq!(fields.token, ["PathGlobs=/*", "Expires=1663070400"]);
        assert_eq!(fields.string_to_sign(), "PathGlobs=/*~Expires=1663070400");
        Ok(())
    }

    #[test]
    fn test_ed25519_signature_verifies() -> anyhow::Result<()> {
        let key = Key::from_base64(SignatureAlgorithm::Ed25519, ED25519_KEY)?;
        let content = b"PathGlobs=/*~Expires=1663070400";

        let field = sign_bytes(&key, content)?;
        let encoded = field.strip_prefix("Signature=").expect("signature field");
        assert!(!encoded.ends_with('='));

        let raw = cdnsign_core::hash::base64_decode_key(encoded)?;
        let signature = Signature::from_slice(&raw)?;
        let seed: [u8; 32] = key.secret().try_into()?;
        let verifying_key = ed25519_dalek::SigningKey::from_bytes(&seed).verifying_key();
        verifying_key.verify(content, &signature)?;
        Ok(())
    }

    #[test]
    fn test_default_expiration_uses_signer_lifetime() -> anyhow::Result<()> {
        let key = Key::from_base64(SignatureAlgorithm::Sha256, HMAC_KEY)?;
        let req = TokenRequest::new().with_full_path("/example.m3u8");

        let before = unix_seconds(now());
        let token = TokenSigner::new()
            .with_expires_in(Duration::from_secs(60))
            .sign(&key, &req)?;
        let after = unix_seconds(now());

        let expires: i64 = token
            .split('~')
            .find_map(|f| f.strip_prefix("Expires="))
            .expect("expires field")
            .parse()?;
        assert!(expires >= before + 60 && expires <= after + 60);
        Ok(())
    }

    #[test]
    fn test_sign_token_requires_key() {
        let req = TokenRequest::new().with_full_path("/example.m3u8");
        let err = TokenSigner::new()
            .sign_token(&Context::new(), &req, None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn test_scope_checked_before_algorithm_and_key() {
        let err = sign_token("not a key", "md5", &TokenRequest::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);

        let req = TokenRequest::new().with_full_path("/example.m3u8");
        let err = sign_token("not a key", "md5", &req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlgorithmUnsupported);

        let err = sign_token("not a key", "sha1", &req).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::KeyInvalid);
    }
}
