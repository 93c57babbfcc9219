//! Application settings and the store they are read from.
//!
//! Settings are read once at startup. When the store holds nothing, defaults
//! are used. Either way the effective settings are written back, so a fresh
//! install ends up with a settings file listing every option.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::error::{Error, Result};

/// Settings consumed by the tool registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Only serve requests addressed to this domain (or its subdomains).
    /// `None` serves every host.
    pub use_domain: Option<String>,
}

impl Settings {
    /// Read settings from `store`, falling back to defaults, and save the
    /// effective settings back.
    pub fn load_or_default(store: &dyn SettingsStore) -> Result<Self> {
        let settings = match store.load()? {
            Some(Value::Null) | None => {
                info!("No settings found, using defaults");
                Self::default()
            }
            Some(value) => serde_json::from_value(value)?,
        };

        store.save(&serde_json::to_value(&settings)?)?;
        debug!("Effective settings: {:?}", settings);
        Ok(settings)
    }
}

/// Where settings are persisted.
pub trait SettingsStore: Send + Sync {
    /// The stored settings, or `None` if nothing was stored yet.
    fn load(&self) -> Result<Option<Value>>;

    /// Replace the stored settings.
    fn save(&self, value: &Value) -> Result<()>;
}

/// Settings kept in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSettingsStore {
    path: PathBuf,
}

impl JsonFileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsStore for JsonFileSettingsStore {
    fn load(&self) -> Result<Option<Value>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let text = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&text)?))
    }

    fn save(&self, value: &Value) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let text = serde_json::to_string_pretty(value)?;
        std::fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Settings kept in memory.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    value: Mutex<Option<Value>>,
}

impl MemorySettingsStore {
    pub fn new(value: Option<Value>) -> Self {
        Self {
            value: Mutex::new(value),
        }
    }

    /// The last saved value.
    pub fn snapshot(&self) -> Option<Value> {
        self.value.lock().ok().and_then(|v| v.clone())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn load(&self) -> Result<Option<Value>> {
        let value = self
            .value
            .lock()
            .map_err(|_| Error::internal("settings store lock poisoned"))?;
        Ok(value.clone())
    }

    fn save(&self, value: &Value) -> Result<()> {
        let mut stored = self
            .value
            .lock()
            .map_err(|_| Error::internal("settings store lock poisoned"))?;
        *stored = Some(value.clone());
        Ok(())
    }
}
