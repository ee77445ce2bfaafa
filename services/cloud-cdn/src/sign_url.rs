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
use crate::Key;
use cdnsign_core::hash::base64_url_hmac_sha1;
use cdnsign_core::time::{now, unix_seconds, DateTime};
use cdnsign_core::{Context, Error, Result, SignToken};
use log::debug;
use std::fmt::Write;
use std::time::Duration;

/// UrlRequest describes the URL to sign and when the signature expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRequest {
    /// URL of the endpoint served by Cloud CDN, may already carry a query.
    pub url: String,
    /// Time after which the signed URL is rejected.
    pub expiration_time: DateTime,
}

impl UrlRequest {
    /// Create a request expiring at the given time.
    pub fn new(url: impl Into<String>, expiration_time: DateTime) -> Self {
        Self {
            url: url.into(),
            expiration_time,
        }
    }

    /// Create a request expiring `expires_in` from now.
    pub fn expires_in(url: impl Into<String>, expires_in: Duration) -> Result<Self> {
        let delta = chrono::TimeDelta::from_std(expires_in)
            .map_err(|e| Error::config_invalid("expiration is out of range").with_source(e))?;

        Ok(Self::new(url, now() + delta))
    }
}

/// UrlSigner appends `Expires`, `KeyName` and `Signature` to Cloud CDN URLs.
///
/// - [Cloud CDN signed URLs](https://cloud.google.com/cdn/docs/using-signed-urls)
#[derive(Debug, Clone, Default)]
pub struct UrlSigner {}

impl UrlSigner {
    /// Create a new UrlSigner.
    pub fn new() -> Self {
        Self {}
    }

    /// Sign the URL with the given key.
    pub fn sign(&self, key: &Key, req: &UrlRequest) -> Result<String> {
        if req.url.is_empty() {
            return Err(Error::config_invalid("url to sign must not be empty"));
        }

        let separator = if req.url.contains('?') { '&' } else { '?' };

        let mut url = String::with_capacity(req.url.len() + 64);
        url.push_str(&req.url);
        url.push(separator);
        write!(
            url,
            "{EXPIRES}={}&{KEY_NAME}={}",
            unix_seconds(req.expiration_time),
            key.key_name()
        )?;
        debug!("string to sign: {url}");

        // Unlike Media CDN tokens, the signature keeps its base64 padding.
        let signature = base64_url_hmac_sha1(key.secret(), url.as_bytes());
        write!(url, "&{SIGNATURE}={signature}")?;

        Ok(url)
    }
}

impl SignToken for UrlSigner {
    type Key = Key;
    type Request = UrlRequest;

    fn sign_token(&self, _: &Context, req: &UrlRequest, key: Option<&Key>) -> Result<String> {
        let Some(key) = key else {
            return Err(Error::config_invalid("missing cloud cdn signing key"));
        };

        self.sign(key, req)
    }
}
