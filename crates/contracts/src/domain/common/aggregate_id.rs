use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Trait for record identifier types.
///
/// The back office issues opaque string ids (`_id`), so every id type is a
/// string newtype; the trait keeps the conversions uniform.
pub trait AggregateId:
    Clone + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Borrow the raw id
    fn as_str(&self) -> &str;

    /// Convert the id to an owned string
    fn as_string(&self) -> String {
        self.as_str().to_string()
    }

    /// Build an id from a raw string
    fn from_string(s: &str) -> Result<Self, String>;
}

/// Rejects blank ids; shared by every `AggregateId::from_string` impl.
pub fn non_blank_id(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("Id can't be empty".to_string());
    }
    Ok(trimmed.to_string())
}

/// Declares a string-backed id newtype implementing [`AggregateId`].
#[macro_export]
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }
        }

        impl $crate::domain::common::AggregateId for $name {
            fn as_str(&self) -> &str {
                &self.0
            }

            fn from_string(s: &str) -> Result<Self, String> {
                $crate::domain::common::aggregate_id::non_blank_id(s).map(Self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}
