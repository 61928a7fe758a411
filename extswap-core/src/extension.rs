use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Extensions offered by the interactive checkbox question.
pub const DEFAULT_CHOICES: [&str; 4] = ["js", "html", "css", "exe"];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtensionError {
    #[error("extension must not be empty")]
    Empty,
    #[error("invalid extension '{0}': only ASCII letters and digits are allowed")]
    InvalidCharacters(String),
}

/// A bare file suffix such as `js`, without the leading dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtensionToken(String);

impl ExtensionToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The same token with its characters in reverse order (`js` -> `sj`).
    pub fn reversed(&self) -> Self {
        Self(reverse_extension(&self.0))
    }
}

impl FromStr for ExtensionToken {
    type Err = ExtensionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept ".js" as a convenience, the dot is never part of the token
        let s = s.trim().trim_start_matches('.');
        if s.is_empty() {
            return Err(ExtensionError::Empty);
        }
        if !s.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ExtensionError::InvalidCharacters(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl fmt::Display for ExtensionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ExtensionToken {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Reverse the characters of an extension. Total: `""` maps to `""`.
pub fn reverse_extension(ext: &str) -> String {
    ext.chars().rev().collect()
}

/// Ordered, duplicate-free set of extensions to scan for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionSet {
    tokens: Vec<ExtensionToken>,
}

impl SelectionSet {
    /// Build the set, reversing every token when `reverse` is set.
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn new<I>(tokens: I, reverse: bool) -> Self
    where
        I: IntoIterator<Item = ExtensionToken>,
    {
        let mut set: Vec<ExtensionToken> = Vec::new();
        for token in tokens {
            let token = if reverse { token.reversed() } else { token };
            if !set.contains(&token) {
                set.push(token);
            }
        }
        Self { tokens: set }
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExtensionToken> {
        self.tokens.iter()
    }

    pub fn contains(&self, ext: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == ext)
    }
}
