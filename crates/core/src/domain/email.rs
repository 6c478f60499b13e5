use std::{fmt::Formatter, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmailAddressError {
    #[error("email address is empty")]
    Empty,
    #[error("'{0}' is not a valid email address")]
    Malformed(String),
}

/// Address of the principal that receives access to generated reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn parse(raw: &str) -> Result<Self, EmailAddressError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(EmailAddressError::Empty);
        }
        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(EmailAddressError::Malformed(trimmed.to_owned()));
        }
        Ok(EmailAddress(trimmed.to_owned()))
    }
}

impl FromStr for EmailAddress {
    type Err = EmailAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EmailAddress::parse(s)
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = EmailAddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailAddress::parse(&value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let email = EmailAddress::parse("  someone@example.com ").unwrap();
        assert_eq!(email.as_ref(), "someone@example.com");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(EmailAddress::parse("   "), Err(EmailAddressError::Empty));
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            EmailAddress::parse("not-an-email"),
            Err(EmailAddressError::Malformed(_))
        ));
        assert!(EmailAddress::parse("a@b").is_err());
        assert!(EmailAddress::parse("a b@example.com").is_err());
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        let ok: EmailAddress = serde_json::from_str("\"x@example.org\"").unwrap();
        assert_eq!(ok.to_string(), "x@example.org");
        assert!(serde_json::from_str::<EmailAddress>("\"x\"").is_err());
    }
}
