// Copyright 2026 QubitOS Contributors
// SPDX-License-Identifier: Apache-2.0

//! Store of named hardware configurations.
//!
//! The store is owned by whoever embeds the engine (the REST server, a CLI
//! session) and handed around by `Arc`. There is no process-wide instance;
//! the budget engine itself never touches it.

use std::collections::{BTreeMap, HashMap};

use parking_lot::RwLock;
use tracing::{debug, info};

use crate::budget::HardwareParams;
use crate::error::{Error, Result, ValidationWarning};
use crate::validation::{validate_config_name, validate_hardware_params};

/// Outcome of [`ConfigStore::save`].
#[derive(Debug, Clone, PartialEq)]
pub struct SavedConfig {
    /// Entry that was replaced, if any
    pub previous: Option<HardwareParams>,
    /// Physics warnings tolerated on save
    pub warnings: Vec<ValidationWarning>,
}

/// Thread-safe map of configuration name to hardware parameters.
///
/// # Example
///
/// ```ignore
/// use qubit_os_calibration::{budget::HardwareParams, store::ConfigStore};
///
/// let store = ConfigStore::new();
/// store.save("q0", HardwareParams::new(-200.0, 37.0, 9.6, 20.0))?;
/// let params = store.get("q0")?;
/// ```
#[derive(Default)]
pub struct ConfigStore {
    configs: RwLock<HashMap<String, HardwareParams>>,
}

impl ConfigStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from configuration presets.
    pub fn from_presets(presets: &BTreeMap<String, HardwareParams>) -> Result<Self> {
        let store = Self::new();
        for (name, params) in presets {
            store.save(name, *params)?;
        }
        Ok(store)
    }

    /// Save a configuration under `name`.
    ///
    /// Parameters are validated leniently: structurally invalid values are
    /// refused, physics warnings are tolerated. Returns the entry that was
    /// replaced, if any.
    pub fn save(&self, name: &str, params: HardwareParams) -> Result<SavedConfig> {
        validate_config_name(name)?;
        let warnings = validate_hardware_params(&params, false)?;

        let previous = self.configs.write().insert(name.to_string(), params);
        if previous.is_some() {
            debug!(config = %name, "Replaced saved configuration");
        } else {
            info!(config = %name, warnings = warnings.len(), "Saved configuration");
        }
        Ok(SavedConfig { previous, warnings })
    }

    /// Get a configuration by name.
    pub fn get(&self, name: &str) -> Result<HardwareParams> {
        self.configs
            .read()
            .get(name)
            .copied()
            .ok_or_else(|| Error::NotFound(name.to_string()))
    }

    /// Remove a configuration, returning it.
    pub fn remove(&self, name: &str) -> Result<HardwareParams> {
        let removed = self
            .configs
            .write()
            .remove(name)
            .ok_or_else(|| Error::NotFound(name.to_string()))?;
        info!(config = %name, "Removed configuration");
        Ok(removed)
    }

    /// Check if a configuration exists.
    pub fn contains(&self, name: &str) -> bool {
        self.configs.read().contains_key(name)
    }

    /// All configuration names, sorted.
    pub fn list(&self) -> Vec<String> {
        let mut names: Vec<String> = self.configs.read().keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Number of saved configurations.
    pub fn len(&self) -> usize {
        self.configs.read().len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
