use core::fmt;

/// Identifier typed into the playlist form.
///
/// Accepted as-is: it may be empty and is never escaped before it becomes
/// part of the request path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistIdentifier(String);

impl PlaylistIdentifier {
    /// True when the identifier contains characters that change the shape of
    /// the request URL once concatenated (extra path segments, a query, a
    /// fragment, percent escapes or whitespace).
    pub fn alters_url_structure(&self) -> bool {
        self.0
            .chars()
            .any(|c| ['/', '?', '#', '%'].contains(&c) || c.is_whitespace())
    }
}

impl fmt::Display for PlaylistIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for PlaylistIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PlaylistIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for PlaylistIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}
