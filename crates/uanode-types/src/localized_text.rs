use std::fmt;

/// Human-readable text with an optional locale tag.
///
/// Used by the DisplayName, Description, and InverseName attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, Default)]
pub struct LocalizedText {
    /// RFC 3066 locale tag, empty when unspecified.
    pub locale: String,
    pub text: String,
}

impl LocalizedText {
    /// Create a localized text with an explicit locale tag.
    #[must_use]
    pub fn new(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            text: text.into(),
        }
    }

    /// Create a localized text with no locale tag.
    #[must_use]
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new("", text)
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<&str> for LocalizedText {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
