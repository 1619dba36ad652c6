//! Newtype IDs for type-safe identifiers.
//!
//! Keeps a product id from being passed where a user id is expected when both
//! travel in the same cart payload.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// True when the id carries no characters.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId);
define_id!(UserId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("abc123");
        assert_eq!(id.as_str(), "abc123");
        assert!(!id.is_empty());
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = UserId::new("u-42");
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""u-42""#);

        let back: UserId = serde_json::from_str(r#""u-42""#).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::from("64f1c2ab");
        assert_eq!(format!("{}", id), "64f1c2ab");
    }
}
