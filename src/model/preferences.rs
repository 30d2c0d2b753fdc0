//! Local key-value preference store (theme and favorites)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};

use super::cocktail::Cocktail;
use super::favorites::Favorites;
use super::types::Theme;

pub const THEME_KEY: &str = "theme";
pub const FAVORITES_KEY: &str = "favorites";

const PREFERENCES_FILE: &str = "preferences.json";

/// String-keyed persistence surface
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// All preferences in a single JSON object on disk. Every `set` rewrites the file.
pub struct JsonFileStore {
    path: PathBuf,
    values: Mutex<BTreeMap<String, String>>,
}

impl JsonFileStore {
    /// Open `preferences.json` under `dir`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let path = dir.as_ref().join(PREFERENCES_FILE);
        let values = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        tracing::debug!(path = %path.display(), keys = values.len(), "Preferences opened");
        Ok(Self { path, values: Mutex::new(values) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| anyhow!("preference store poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut values = self.values.lock().map_err(|_| anyhow!("preference store poisoned"))?;
        values.insert(key.to_string(), value.to_string());

        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() && !dir.exists() {
                fs::create_dir_all(dir)
                    .with_context(|| format!("creating {}", dir.display()))?;
            }
        }
        let content = serde_json::to_string_pretty(&*values)?;
        fs::write(&self.path, content)
            .with_context(|| format!("writing {}", self.path.display()))?;
        Ok(())
    }
}

/// In-process store; records every write so callers can inspect them
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<BTreeMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::default();
        if let Ok(mut values) = store.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
        store
    }

    #[cfg(test)]
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let values = self.values.lock().map_err(|_| anyhow!("preference store poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .map_err(|_| anyhow!("preference store poisoned"))?
            .insert(key.to_string(), value.to_string());
        self.writes
            .lock()
            .map_err(|_| anyhow!("preference store poisoned"))?
            .push((key.to_string(), value.to_string()));
        Ok(())
    }
}

pub fn load_theme(store: &dyn PreferenceStore) -> Theme {
    match store.get(THEME_KEY) {
        Ok(value) => Theme::from_stored(value.as_deref()),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read theme, using default");
            Theme::default()
        }
    }
}

pub fn save_theme(store: &dyn PreferenceStore, theme: Theme) -> Result<()> {
    store.set(THEME_KEY, theme.as_str())
}

/// A corrupt favorites entry is logged and treated as empty
pub fn load_favorites(store: &dyn PreferenceStore) -> Favorites {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Favorites::default(),
        Err(e) => {
            tracing::warn!(error = %e, "Could not read favorites");
            return Favorites::default();
        }
    };

    match serde_json::from_str::<Vec<Cocktail>>(&raw) {
        Ok(list) => Favorites::from_list(list),
        Err(e) => {
            tracing::warn!(error = %e, "Stored favorites are corrupt, starting empty");
            Favorites::default()
        }
    }
}

pub fn save_favorites(store: &dyn PreferenceStore, favorites: &Favorites) -> Result<()> {
    let json = serde_json::to_string(favorites.as_slice())?;
    store.set(FAVORITES_KEY, &json)
}
