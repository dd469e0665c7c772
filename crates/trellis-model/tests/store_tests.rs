use std::collections::HashMap;
use std::io;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use trellis_model::{FsResources, ModelError, ModelStore, ResourceKey, ResourceProvider};

/// In-memory provider with switchable read failure, counting reads.
struct MapResources {
    docs: Mutex<HashMap<String, String>>,
    reads: AtomicUsize,
    failing: AtomicBool,
}

impl MapResources {
    fn new(docs: &[(&str, &str)]) -> Self {
        Self {
            docs: Mutex::new(
                docs.iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
            reads: AtomicUsize::new(0),
            failing: AtomicBool::new(false),
        }
    }
}

impl ResourceProvider for MapResources {
    fn read(&self, key: &ResourceKey) -> io::Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "locked"));
        }
        Ok(self.docs.lock().unwrap().get(key.as_str()).cloned())
    }
}

const PILLAR: &str = r#"
format_version = 1
render_tag = "opaque"

[textures]
plain = "blocks/pillar"
connected = "blocks/pillar_ctm"
"#;

#[test]
fn parses_v1_document() {
    let store = ModelStore::new(MapResources::new(&[("pillar", PILLAR)]));
    let key = ResourceKey::from("pillar");
    let model = store.get_or_load(&key).expect("load");
    assert_eq!(model.version, 1);
    assert_eq!(model.plain, "blocks/pillar");
    assert_eq!(model.connected, "blocks/pillar_ctm");
    assert_eq!(model.render_tag.as_deref(), Some("opaque"));
    assert_eq!(model.key, key);
}

#[test]
fn caches_by_key_until_invalidated() {
    let provider = MapResources::new(&[("pillar", PILLAR)]);
    let store = ModelStore::new(provider);
    let key = ResourceKey::from("pillar");
    let a = store.get_or_load(&key).unwrap();
    let b = store.get_or_load(&key).unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
    let stats = store.stats();
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.parsed_entries, 1);

    store.invalidate_all();
    assert_eq!(store.stats().parsed_entries, 0);
    let c = store.get_or_load(&key).unwrap();
    assert_eq!(*a, *c);
    assert!(!std::sync::Arc::ptr_eq(&a, &c));
}

#[test]
fn unknown_version_is_a_configuration_error() {
    let doc = "format_version = 7\n[textures]\nplain = \"a\"\nconnected = \"b\"\n";
    let store = ModelStore::new(MapResources::new(&[("future", doc)]));
    match store.get_or_load(&ResourceKey::from("future")) {
        Err(ModelError::UnknownVersion { key, version }) => {
            assert_eq!(key.as_str(), "future");
            assert_eq!(version, 7);
        }
        other => panic!("expected UnknownVersion, got {other:?}"),
    }
}

#[test]
fn missing_version_field_is_rejected() {
    let store = ModelStore::new(MapResources::new(&[("bare", "[textures]\nplain = \"a\"\n")]));
    assert!(matches!(
        store.get_or_load(&ResourceKey::from("bare")),
        Err(ModelError::NoVersion { .. })
    ));
    assert!(!store.accepts(&ResourceKey::from("bare")));
}

#[test]
fn syntax_error_is_malformed() {
    let store = ModelStore::new(MapResources::new(&[("broken", "format_version = [")]));
    assert!(matches!(
        store.get_or_load(&ResourceKey::from("broken")),
        Err(ModelError::Malformed { .. })
    ));
}

#[test]
fn incomplete_v1_document_is_malformed() {
    let store = ModelStore::new(MapResources::new(&[(
        "half",
        "format_version = 1\n[textures]\nplain = \"a\"\n",
    )]));
    assert!(matches!(
        store.get_or_load(&ResourceKey::from("half")),
        Err(ModelError::Malformed { .. })
    ));
}

#[test]
fn absent_document_is_missing() {
    let store = ModelStore::new(MapResources::new(&[]));
    assert!(matches!(
        store.get_or_load(&ResourceKey::from("ghost")),
        Err(ModelError::Missing { .. })
    ));
    assert!(!store.accepts(&ResourceKey::from("ghost")));
}

#[test]
fn transient_failure_skips_then_recovers() {
    let provider = std::sync::Arc::new(MapResources::new(&[("pillar", PILLAR)]));
    provider.failing.store(true, Ordering::SeqCst);
    let store = ModelStore::new(provider.clone());
    let key = ResourceKey::from("pillar");
    // Unreadable this attempt: reported as missing, nothing cached.
    assert!(matches!(
        store.get_or_load(&key),
        Err(ModelError::Missing { .. })
    ));
    assert_eq!(store.stats().raw_entries, 0);
    // accepts() shares the skip behavior.
    assert!(!store.accepts(&key));
    // The failure was not cached, so the next attempt succeeds.
    provider.failing.store(false, Ordering::SeqCst);
    assert!(store.get_or_load(&key).is_ok());
}

#[test]
fn accepts_requires_integer_version() {
    let store = ModelStore::new(MapResources::new(&[
        ("pillar", PILLAR),
        ("odd", "format_version = \"one\"\n"),
    ]));
    assert!(store.accepts(&ResourceKey::from("pillar")));
    assert!(!store.accepts(&ResourceKey::from("odd")));
}

#[test]
fn concurrent_first_loads_parse_once() {
    let store = ModelStore::new(MapResources::new(&[("pillar", PILLAR)]));
    let key = ResourceKey::from("pillar");
    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| {
                store.get_or_load(&key).unwrap();
            });
        }
    });
    let stats = store.stats();
    assert_eq!(stats.misses, 1, "exactly one thread should parse");
    assert_eq!(stats.hits, 7);
    assert_eq!(stats.parsed_entries, 1);
}

#[test]
fn fs_paths_are_qualified_under_models() {
    let fs = FsResources::new("/assets");
    let plain = fs.path_for(&ResourceKey::from("pillar"));
    assert_eq!(plain, std::path::PathBuf::from("/assets/models/pillar.toml"));
    let nested = fs.path_for(&ResourceKey::from("models/pillar"));
    assert_eq!(nested, std::path::PathBuf::from("/assets/models/pillar.toml"));
}
