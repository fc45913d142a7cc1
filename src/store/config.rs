//! Connection settings for the order collection.

use serde::Deserialize;
use std::env;

pub const STORE_URL_VAR: &str = "KITCHEN_STORE_URL";
pub const STORE_DATABASE_VAR: &str = "KITCHEN_STORE_DATABASE";
pub const STORE_COLLECTION_VAR: &str = "KITCHEN_STORE_COLLECTION";

/// Where the order collection lives.
///
/// Missing fields fall back to [`StoreConfig::default`], so a partial section
/// in a larger configuration file deserializes cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Connection URL. `memory://<name>` selects the in-process collection.
    pub url: String,
    pub database: String,
    pub collection: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: "memory://restaurant".to_string(),
            database: "restaurant".to_string(),
            collection: "orders".to_string(),
        }
    }
}

impl StoreConfig {
    /// Reads `KITCHEN_STORE_URL`, `KITCHEN_STORE_DATABASE` and
    /// `KITCHEN_STORE_COLLECTION`, keeping the default for any unset variable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env::var(STORE_URL_VAR).unwrap_or(defaults.url),
            database: env::var(STORE_DATABASE_VAR).unwrap_or(defaults.database),
            collection: env::var(STORE_COLLECTION_VAR).unwrap_or(defaults.collection),
        }
    }

    /// The URL scheme, e.g. `memory` for `memory://restaurant`.
    pub fn scheme(&self) -> Option<&str> {
        self.url.split_once("://").map(|(scheme, _)| scheme)
    }

    /// `database.collection`, used to label log events.
    pub fn namespace(&self) -> String {
        format!("{}.{}", self.database, self.collection)
    }
}
