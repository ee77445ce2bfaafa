use cdnsign_core::{Error, Result};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Signature algorithms accepted by Media CDN dual tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureAlgorithm {
    /// HMAC with SHA1, emitted as a hex `hmac` field.
    Sha1,
    /// HMAC with SHA256, emitted as a hex `hmac` field.
    Sha256,
    /// Ed25519 public key signature, emitted as a base64url `Signature` field.
    Ed25519,
}

impl SignatureAlgorithm {
    /// The lower-case name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureAlgorithm::Sha1 => "sha1",
            SignatureAlgorithm::Sha256 => "sha256",
            SignatureAlgorithm::Ed25519 => "ed25519",
        }
    }
}

impl FromStr for SignatureAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha1" => Ok(SignatureAlgorithm::Sha1),
            "sha256" => Ok(SignatureAlgorithm::Sha256),
            "ed25519" => Ok(SignatureAlgorithm::Ed25519),
            _ => Err(Error::algorithm_unsupported(format!(
                "signature algorithm `{s}` is not supported, must be one of `sha1`, `sha256`, or `ed25519`"
            ))),
        }
    }
}

impl Display for SignatureAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cdnsign_core::ErrorKind;
    use test_case::test_case;

    #[test_case("sha1", SignatureAlgorithm::Sha1)]
    #[test_case("SHA1", SignatureAlgorithm::Sha1)]
    #[test_case("sha256", SignatureAlgorithm::Sha256)]
    #[test_case("Sha256", SignatureAlgorithm::Sha256)]
    #[test_case("ed25519", SignatureAlgorithm::Ed25519)]
    #[test_case(" Ed25519 ", SignatureAlgorithm::Ed25519)]
    fn test_parse(input: &str, expected: SignatureAlgorithm) {
        assert_eq!(input.parse::<SignatureAlgorithm>().unwrap(), expected);
    }

    #[test_case("md5")]
    #[test_case("sha512")]
    #[test_case("hmac-sha256")]
    #[test_case("")]
    fn test_parse_unsupported(input: &str) {
        let err = input.parse::<SignatureAlgorithm>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AlgorithmUnsupported);
    }

    #[test]
    fn test_display_round_trips() {
        for alg in [
            SignatureAlgorithm::Sha1,
            SignatureAlgorithm::Sha256,
            SignatureAlgorithm::Ed25519,
        ] {
            assert_eq!(alg.to_string().parse::<SignatureAlgorithm>().unwrap(), alg);
        }
    }
}
