use core::fmt;

use reqwest::Url;

use super::PlaylistIdentifier;

/// Base URL every playlist lookup is sent to.
///
/// Stored without a trailing `/` so that [`Endpoint::request_url`] only ever
/// inserts the one separator between the base and the identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint(String);

impl Endpoint {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if base.ends_with('/') {
            base.pop();
        }
        Self(base)
    }

    /// `<endpoint>/<identifier>`, with the identifier inserted verbatim.
    pub fn request_url(&self, identifier: &PlaylistIdentifier) -> String {
        format!("{}/{}", self.0, identifier.as_ref())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Url> for Endpoint {
    fn from(url: &Url) -> Self {
        Self::new(url.as_str())
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
