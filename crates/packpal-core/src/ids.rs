//! Identifiers
//!
//! Stable string ids for categories and items, and the injected id source
//! used when items are added during a session.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

string_id! {
    /// Category identifier, stable for the whole session
    CategoryId
}

string_id! {
    /// Item identifier, unique within its category and never reused
    ItemId
}

/// Source of fresh item ids for `Catalog::add_item`.
///
/// The catalog re-draws until the id is unused in the target category, so
/// an implementation only has to avoid repeating itself.
pub trait IdGenerator {
    fn next_id(&mut self) -> ItemId;
}

/// Monotonic `prefix-N` ids (`custom-1`, `custom-2`, ...)
#[derive(Debug, Clone)]
pub struct SequentialIds {
    prefix: String,
    next: u64,
}

impl SequentialIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: impl Into<String>, next: u64) -> Self {
        Self {
            prefix: prefix.into(),
            next,
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::new("custom")
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> ItemId {
        let id = ItemId::new(format!("{}-{}", self.prefix, self.next));
        self.next += 1;
        id
    }
}

impl<F> IdGenerator for F
where
    F: FnMut() -> ItemId,
{
    fn next_id(&mut self) -> ItemId {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut ids = SequentialIds::default();
        assert_eq!(ids.next_id(), "custom-1");
        assert_eq!(ids.next_id(), "custom-2");

        let mut ids = SequentialIds::starting_at("x", 41);
        assert_eq!(ids.next_id().as_str(), "x-41");
    }

    #[test]
    fn test_closure_generator() {
        let mut n = 0;
        let mut ids = || {
            n += 1;
            ItemId::new(format!("n{}", n))
        };
        assert_eq!(IdGenerator::next_id(&mut ids), "n1");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = CategoryId::new("clothing");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"clothing\"");
    }
}
