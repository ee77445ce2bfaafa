use cdnsign_core::time::DateTime;
use cdnsign_core::{Error, Result};

/// Scope selects which resources a token authorizes.
///
/// Every token carries exactly one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    /// An exact path, starting with the first `/`. For example `/path/to/content.mp4`.
    ///
    /// Only the bare `FullPath` marker appears in the token, the path itself
    /// is signed but not transmitted.
    FullPath(String),
    /// A set of `,` or `!` delimited globs. For example `/tv/*!/film/*`.
    PathGlobs(String),
    /// A URL prefix including the protocol. For example `http://example.com/path/`.
    UrlPrefix(String),
}

impl Scope {
    fn is_empty(&self) -> bool {
        match self {
            Scope::FullPath(v) | Scope::UrlPrefix(v) => v.is_empty(),
            Scope::PathGlobs(v) => v.trim().is_empty(),
        }
    }
}

/// A header bound into the token.
///
/// The edge checks that the request carries the same header value, only the
/// name is transmitted in the token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Header name.
    pub name: String,
    /// Header value.
    pub value: String,
}

impl Header {
    /// Create a new header binding.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// TokenRequest describes what a Media CDN dual token authorizes.
///
/// ```
/// use cdnsign_media_cdn::TokenRequest;
///
/// let req = TokenRequest::new()
///     .with_path_globs("/tv/*!/film/*")
///     .with_session_id("session-1")
///     .with_header("X-Device", "tv");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenRequest {
    /// Resource scope, required.
    pub scope: Option<Scope>,
    /// Time before which the token is not valid.
    pub start_time: Option<DateTime>,
    /// Time after which the token is not valid.
    ///
    /// The signer's default lifetime applies when unset.
    pub expiration_time: Option<DateTime>,
    /// Unique identifier for the session.
    pub session_id: Option<String>,
    /// Arbitrary payload carried in the token.
    pub data: Option<String>,
    /// Headers bound into the token, in order.
    pub headers: Vec<Header>,
    /// Comma separated IPv4 and IPv6 ranges. For example `203.0.113.0/24,2001:db8:4a7f:a732/64`.
    pub ip_ranges: Option<String>,
}

impl TokenRequest {
    /// Create an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scope the token to an exact path, replacing any previous scope.
    pub fn with_full_path(mut self, full_path: impl Into<String>) -> Self {
        self.scope = Some(Scope::FullPath(full_path.into()));
        self
    }

    /// Scope the token to a set of path globs, replacing any previous scope.
    pub fn with_path_globs(mut self, path_globs: impl Into<String>) -> Self {
        self.scope = Some(Scope::PathGlobs(path_globs.into()));
        self
    }

    /// Scope the token to a URL prefix, replacing any previous scope.
    pub fn with_url_prefix(mut self, url_prefix: impl Into<String>) -> Self {
        self.scope = Some(Scope::UrlPrefix(url_prefix.into()));
        self
    }

    /// Set the start time.
    pub fn with_start_time(mut self, start_time: DateTime) -> Self {
        self.start_time = Some(start_time);
        self
    }

    /// Set the expiration time.
    pub fn with_expiration_time(mut self, expiration_time: DateTime) -> Self {
        self.expiration_time = Some(expiration_time);
        self
    }

    /// Set the session id.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Set the data payload.
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Append one header binding.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push(Header::new(name, value));
        self
    }

    /// Append header bindings.
    pub fn with_headers(mut self, headers: impl IntoIterator<Item = Header>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Set the allowed IP ranges.
    pub fn with_ip_ranges(mut self, ip_ranges: impl Into<String>) -> Self {
        self.ip_ranges = Some(ip_ranges.into());
        self
    }

    /// Return the scope, failing if none is usable.
    pub fn scope(&self) -> Result<&Scope> {
        match &self.scope {
            Some(scope) if !scope.is_empty() => Ok(scope),
            _ => Err(Error::config_invalid(
                "missing scope: one of `url_prefix`, `full_path`, or `path_globs` must be specified",
            )),
        }
    }
}
