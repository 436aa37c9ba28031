//! Newtype IDs for catalog entities.
//!
//! Keeps store, product and order references from being mixed up when they
//! travel inside a navigation payload.

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Define a `u32`-backed ID wrapper with serde, display and parsing.
macro_rules! define_id {
    ($name:ident, $not_found:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            pub const fn new(id: u32) -> Self {
                Self(id)
            }

            pub const fn get(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<u32>()
                    .map(Self)
                    .map_err(|_| CoreError::$not_found { id: s.to_string() })
            }
        }
    };
}

define_id!(StoreId, StoreNotFound);
define_id!(ProductId, ProductNotFound);

/// Order number, displayed with a leading `#` (e.g. `#12345`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(u32);

impl OrderId {
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    pub const fn number(&self) -> u32 {
        self.0
    }

    /// The order number that follows this one
    pub const fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = CoreError;

    /// Accepts both `#12345` and `12345`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        trimmed
            .strip_prefix('#')
            .unwrap_or(trimmed)
            .parse::<u32>()
            .map(Self)
            .map_err(|_| CoreError::OrderNotFound { id: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_id_display_and_parse() {
        let id = OrderId::new(12345);
        assert_eq!(id.to_string(), "#12345");
        assert_eq!("#12345".parse::<OrderId>().unwrap(), id);
        assert_eq!(" 12345 ".parse::<OrderId>().unwrap(), id);
        assert_eq!(id.next(), OrderId::new(12346));
    }

    #[test]
    fn test_store_id_parse_error_is_not_found() {
        let err = "fresh".parse::<StoreId>().unwrap_err();
        assert!(err.is_not_found());
        assert_eq!("3".parse::<StoreId>().unwrap(), StoreId::new(3));
    }
}
