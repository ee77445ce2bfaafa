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

//! Hash related utils.

use crate::Error;
use base64::alphabet;
use base64::engine::general_purpose::GeneralPurpose;
use base64::engine::general_purpose::GeneralPurposeConfig;
use base64::engine::DecodePaddingMode;
use base64::prelude::BASE64_URL_SAFE;
use base64::prelude::BASE64_URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;
use sha2::Sha256;

/// URL-safe alphabet that accepts input with or without padding.
const BASE64_URL_SAFE_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Standard alphabet that accepts input with or without padding.
const BASE64_STANDARD_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// URL-safe base64 encode, keeping the `=` padding.
pub fn base64_url_encode(content: &[u8]) -> String {
    BASE64_URL_SAFE.encode(content)
}

/// URL-safe base64 encode with the trailing `=` padding stripped.
///
/// This is the encoding CDN edges expect for token fields, the output must
/// not be padded.
pub fn base64_url_encode_no_pad(content: &[u8]) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(content)
}

/// Decode key material that may use either the standard or the URL-safe
/// alphabet, with or without padding.
///
/// Keys copied from the console and from keyset tooling come in both
/// flavors.
pub fn base64_decode_key(content: &str) -> crate::Result<Vec<u8>> {
    let content = content.trim();

    BASE64_URL_SAFE_INDIFFERENT
        .decode(content)
        .or_else(|_| BASE64_STANDARD_INDIFFERENT.decode(content))
        .map_err(|e| Error::key_invalid("base64 decode of key failed").with_source(e))
}

/// HMAC with SHA1 hash.
pub fn hmac_sha1(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// HMAC with SHA256 hash.
pub fn hmac_sha256(key: &[u8], content: &[u8]) -> Vec<u8> {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    h.finalize().into_bytes().to_vec()
}

/// Hex encoded HMAC with SHA1 hash.
///
/// Use this function instead of `hex::encode(hmac_sha1(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha1>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// Hex encoded HMAC with SHA256 hash.
///
/// Use this function instead of `hex::encode(hmac_sha256(key, content))` can
/// reduce extra copy.
pub fn hex_hmac_sha256(key: &[u8], content: &[u8]) -> String {
    // SAFETY: HMAC's new_from_slice always returns Ok - it handles any key length
    let mut h = Hmac::<Sha256>::new_from_slice(key).unwrap();
    h.update(content);

    hex::encode(h.finalize().into_bytes())
}

/// URL-safe base64 encoded HMAC with SHA1 hash, padding kept.
pub fn base64_url_hmac_sha1(key: &[u8], content: &[u8]) -> String {
    base64_url_encode(&hmac_sha1(key, content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case("http://10.20.30.40/", "aHR0cDovLzEwLjIwLjMwLjQwLw"; "url prefix")]
    #[test_case(
        "203.0.113.0/24,2001:db8:4a7f:a732/64",
        "MjAzLjAuMTEzLjAvMjQsMjAwMTpkYjg6NGE3ZjphNzMyLzY0";
        "ip ranges"
    )]
    fn test_base64_url_encode_no_pad(input: &str, expected: &str) {
        assert_eq!(base64_url_encode_no_pad(input.as_bytes()), expected);
    }

    #[test]
    fn test_base64_url_encode_uses_url_safe_alphabet() {
        assert_eq!(base64_url_encode(&[0xfb, 0xff]), "-_8=");
        assert_eq!(base64_url_encode_no_pad(&[0xfb, 0xff]), "-_8");
    }

    #[test]
    fn test_base64_url_encode_keeps_padding() {
        assert_eq!(base64_url_encode(b"ab"), "YWI=");
        assert_eq!(base64_url_encode_no_pad(b"ab"), "YWI");
    }

    #[test_case("g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8="; "url safe padded")]
    #[test_case("g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8"; "url safe unpadded")]
    #[test_case("g/SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8="; "standard padded")]
    #[test_case("  g/SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8=\n"; "surrounding whitespace")]
    #[test_case("g/SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8"; "standard unpadded")]
    fn test_base64_decode_key_accepts_both_alphabets(input: &str) {
        let expected: Vec<u8> = vec![
            0x83, 0xf4, 0xa5, 0x30, 0x82, 0xe2, 0x21, 0x62, 0xaa, 0xb0, 0x2e, 0x99, 0xd8, 0xbe,
            0xe0, 0xcb, 0x4b, 0x11, 0x78, 0x33, 0xaa, 0xb5, 0x2a, 0xc9, 0xac, 0x4e, 0xc2, 0x5c,
            0xda, 0xf9, 0x36, 0x5f,
        ];

        assert_eq!(base64_decode_key(input).expect("key must decode"), expected);
    }

    #[test]
    fn test_base64_decode_key_rejects_mixed_alphabets() {
        let err = base64_decode_key("-_+/").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::KeyInvalid);
    }

    #[test]
    fn test_base64_decode_key_rejects_garbage() {
        let err = base64_decode_key("not*base64").unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::KeyInvalid);
    }

    #[test]
    fn test_hex_hmac() {
        let key = base64_decode_key("g_SlMILiIWKqsC6Z2L7gy0sReDOqtSrJrE7CXNr5Nl8=").unwrap();

        assert_eq!(
            hex_hmac_sha1(&key, b"PathGlobs=/*~Expires=1663070400"),
            "c1c446eea24faa31392519f975fea7eefb945625"
        );
        assert_eq!(
            hex_hmac_sha256(&key, b"FullPath=/example.m3u8~Expires=1663070400"),
            "365b41fd77297371d890fc9a56e4e3d3baa4c7afbd230a0e9a81c8e1bcab9420"
        );
        assert_eq!(
            hex::encode(hmac_sha256(&key, b"FullPath=/example.m3u8~Expires=1663070400")),
            hex_hmac_sha256(&key, b"FullPath=/example.m3u8~Expires=1663070400"),
        );
    }
}
