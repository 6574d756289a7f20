//! Operator override provider.
//!
//! Reads a local JSON file mapping currency codes to rates relative to the
//! store base, e.g. `{"USD": 0.22, "IDR": 3400}`. The file is read fresh
//! on every fetch so an operator edit takes effect on the next refresh
//! without a restart. Entries here outrank every network source.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, warn};

use crate::models::RateTable;
use crate::provider::RateProvider;

/// Provider ID constant
const PROVIDER_ID: &str = "OVERRIDE_FILE";

/// Operator override provider backed by a local JSON file.
pub struct OverrideFileProvider {
    path: PathBuf,
}

impl OverrideFileProvider {
    /// Create a provider reading overrides from the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_table(&self) -> Option<RateTable> {
        let raw = match std::fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("{}: no override file at {:?}", PROVIDER_ID, self.path);
                return None;
            }
            Err(e) => {
                warn!("{}: failed to read {:?}: {}", PROVIDER_ID, self.path, e);
                return None;
            }
        };

        let entries: HashMap<String, f64> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("{}: malformed override file {:?}: {}", PROVIDER_ID, self.path, e);
                return None;
            }
        };

        let mut table = RateTable::new();
        for (code, rate) in entries {
            if !table.insert(&code, rate) {
                warn!("{}: dropping unusable override {}={}", PROVIDER_ID, code, rate);
            }
        }

        if table.is_empty() {
            debug!("{}: override file {:?} has no usable entries", PROVIDER_ID, self.path);
            None
        } else {
            Some(table)
        }
    }
}

#[async_trait]
impl RateProvider for OverrideFileProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn priority(&self) -> u8 {
        100
    }

    async fn fetch_rates(&self, _base: &str) -> Option<RateTable> {
        // Override rates are denominated in the store base by definition
        self.read_table()
    }
}
