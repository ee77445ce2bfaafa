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

use std::time::Duration;

/// Env holding the base64 signing key.
pub const MEDIA_CDN_SIGNING_KEY: &str = "MEDIA_CDN_SIGNING_KEY";
/// Env holding the signature algorithm name.
pub const MEDIA_CDN_SIGNATURE_ALGORITHM: &str = "MEDIA_CDN_SIGNATURE_ALGORITHM";

/// Tokens without an explicit expiration are valid for five minutes.
pub const DEFAULT_EXPIRES_IN: Duration = Duration::from_secs(300);

/// Ed25519 private keys are 32 byte seeds.
pub const ED25519_SEED_LENGTH: usize = 32;

// Token field names.
pub const FIELD_SEPARATOR: &str = "~";
pub const FULL_PATH: &str = "FullPath";
pub const PATH_GLOBS: &str = "PathGlobs";
pub const URL_PREFIX: &str = "URLPrefix";
pub const STARTS: &str = "Starts";
pub const EXPIRES: &str = "Expires";
pub const SESSION_ID: &str = "SessionID";
pub const DATA: &str = "Data";
pub const HEADERS: &str = "Headers";
pub const IP_RANGES: &str = "IPRanges";
pub const SIGNATURE: &str = "Signature";
pub const HMAC: &str = "hmac";
