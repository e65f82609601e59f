use std::fmt;

/// Opaque API key for the generative-language endpoint.
///
/// Only non-blank keys can be constructed. The token is never printed: both
/// `Debug` and `Display` redact it, so a credential can sit inside structs
/// that are logged.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(raw: impl AsRef<str>) -> Option<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token. Only the outbound request may use this.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_credential_is_rejected() {
        assert!(Credential::new("").is_none());
        assert!(Credential::new("   ").is_none());
    }

    #[test]
    fn test_credential_is_trimmed() {
        let key = Credential::new("  abc123 ").unwrap();
        assert_eq!(key.expose(), "abc123");
    }

    #[test]
    fn test_credential_never_formats_token() {
        let key = Credential::new("super-secret").unwrap();
        assert!(!format!("{key:?}").contains("super-secret"));
        assert!(!format!("{key}").contains("super-secret"));
    }
}
