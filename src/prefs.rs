//! prefs.rs: category-name persistence over a flat key-value store.
//!
//! Layout matches the app's preference scheme: `categoriesCount` holds
//! the count, `categoryName{i}` the name at position i. Only names
//! survive a restart; news is rebuilt from a fresh fetch.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::category::Category;

pub const KEY_CATEGORIES_COUNT: &str = "categoriesCount";

fn category_name_key(i: usize) -> String {
    format!("categoryName{i}")
}

/// Flat string-to-string storage, process-scoped, no versioning.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn put(&mut self, key: &str, value: &str);
}

/// Write count + names. Stale `categoryName{i}` keys beyond the new
/// count stay behind; the count guards them on restore.
pub fn save_category_names<S: KeyValueStore>(store: &mut S, categories: &[Category]) {
    store.put(KEY_CATEGORIES_COUNT, &categories.len().to_string());
    for (i, c) in categories.iter().enumerate() {
        store.put(&category_name_key(i), &c.name);
    }
    tracing::debug!(count = categories.len(), "category names saved");
}

/// Rebuild empty active categories from the saved names. Missing or
/// unparsable keys degrade to nothing/empty rather than failing.
pub fn restore_categories<S: KeyValueStore>(store: &S) -> Vec<Category> {
    let count = store
        .get(KEY_CATEGORIES_COUNT)
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(0);

    (0..count)
        .map(|i| Category::new(store.get(&category_name_key(i)).unwrap_or_default()))
        .collect()
}

/// Key-value store backed by one JSON object on disk. Loaded on open,
/// written back on [`JsonFileStore::flush`]; a missing file is an
/// empty store.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    map: BTreeMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let map = if path.exists() {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("reading prefs from {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("parsing prefs from {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, map })
    }

    pub fn flush(&self) -> Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)
                    .with_context(|| format!("creating prefs dir {}", dir.display()))?;
            }
        }
        let content = serde_json::to_string_pretty(&self.map)?;
        std::fs::write(&self.path, content)
            .with_context(|| format!("writing prefs to {}", self.path.display()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

// --- Test helper ---
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub map: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}
