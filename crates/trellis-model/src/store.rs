use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::def::{ModelDef, ModelError, ModelParser, ParserV1};
use crate::source::{ResourceKey, ResourceProvider};

#[derive(Clone, Copy, Debug, Default)]
pub struct StoreStats {
    pub hits: u64,
    pub misses: u64,
    pub raw_entries: usize,
    pub parsed_entries: usize,
}

#[derive(Default)]
struct Caches {
    raw: HashMap<ResourceKey, toml::Value>,
    parsed: HashMap<ResourceKey, Arc<ModelDef>>,
}

/// Caching model loader: raw documents and parsed models keyed by resource
/// identity, with format-version parser dispatch.
///
/// One mutex guards both caches and is held across the parse, so concurrent
/// loads of the same unseen key parse exactly once. Parses are pure and
/// small; nothing else blocks on the store.
pub struct ModelStore {
    provider: Box<dyn ResourceProvider>,
    parsers: HashMap<i64, Box<dyn ModelParser>>,
    caches: Mutex<Caches>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl ModelStore {
    pub fn new(provider: impl ResourceProvider + 'static) -> Self {
        let mut parsers: HashMap<i64, Box<dyn ModelParser>> = HashMap::new();
        parsers.insert(1, Box::new(ParserV1));
        Self {
            provider: Box::new(provider),
            parsers,
            caches: Mutex::new(Caches::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Returns the parsed model for `key`, loading and caching it on first
    /// access. Idempotent until `invalidate_all`.
    pub fn get_or_load(&self, key: &ResourceKey) -> Result<Arc<ModelDef>, ModelError> {
        let mut caches = self.caches.lock().unwrap();
        if let Some(model) = caches.parsed.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(model.clone());
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let raw = self.raw_for(&mut caches, key)?;
        let version = raw
            .get("format_version")
            .and_then(toml::Value::as_integer)
            .ok_or_else(|| ModelError::NoVersion { key: key.clone() })?;
        let parser = self
            .parsers
            .get(&version)
            .ok_or_else(|| ModelError::UnknownVersion {
                key: key.clone(),
                version,
            })?;
        let model = Arc::new(parser.parse(key, &raw)?);
        caches.parsed.insert(key.clone(), model.clone());
        log::debug!("model {key}: parsed format_version {version}");
        Ok(model)
    }

    /// Whether the document exists and declares an integer format version,
    /// i.e. belongs to this loader. Caches the raw read.
    pub fn accepts(&self, key: &ResourceKey) -> bool {
        let mut caches = self.caches.lock().unwrap();
        match self.raw_for(&mut caches, key) {
            Ok(raw) => raw.get("format_version").is_some_and(toml::Value::is_integer),
            Err(_) => false,
        }
    }

    /// Drops all cached raw documents and parsed models; the next access
    /// reloads from the provider. Hooked to the resources-changed event.
    pub fn invalidate_all(&self) {
        let mut caches = self.caches.lock().unwrap();
        let dropped = caches.parsed.len();
        caches.raw.clear();
        caches.parsed.clear();
        log::info!("model cache invalidated ({dropped} parsed entries dropped)");
    }

    pub fn stats(&self) -> StoreStats {
        let caches = self.caches.lock().unwrap();
        StoreStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            raw_entries: caches.raw.len(),
            parsed_entries: caches.parsed.len(),
        }
    }

    fn raw_for(&self, caches: &mut Caches, key: &ResourceKey) -> Result<toml::Value, ModelError> {
        if let Some(v) = caches.raw.get(key) {
            return Ok(v.clone());
        }
        let text = match self.provider.read(key) {
            Ok(Some(text)) => text,
            Ok(None) => return Err(ModelError::Missing { key: key.clone() }),
            Err(err) => {
                // Transient: skip this attempt without poisoning the cache.
                log::warn!("model {key}: unreadable, skipping: {err}");
                return Err(ModelError::Missing { key: key.clone() });
            }
        };
        let value: toml::Value = toml::from_str(&text).map_err(|source| ModelError::Malformed {
            key: key.clone(),
            source,
        })?;
        caches.raw.insert(key.clone(), value.clone());
        Ok(value)
    }
}
