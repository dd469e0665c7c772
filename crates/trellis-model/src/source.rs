use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Identity of a model document, a relative path without extension.
#[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(String);

impl ResourceKey {
    #[inline]
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Backing store for raw model documents.
///
/// `Ok(None)` means the document does not exist; `Err` is a transient read
/// failure (the document may exist but could not be read this time).
pub trait ResourceProvider: Send + Sync {
    fn read(&self, key: &ResourceKey) -> io::Result<Option<String>>;
}

/// Reads documents from `<root>/models/<key>.toml`. Keys already starting
/// with `models/` are not qualified twice.
pub struct FsResources {
    root: PathBuf,
}

impl FsResources {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_for(&self, key: &ResourceKey) -> PathBuf {
        let rel = key.as_str();
        let mut path = if rel.starts_with("models/") {
            self.root.join(rel)
        } else {
            self.root.join("models").join(rel)
        };
        path.set_extension("toml");
        path
    }

    #[inline]
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceProvider for FsResources {
    fn read(&self, key: &ResourceKey) -> io::Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl<T: ResourceProvider + ?Sized> ResourceProvider for std::sync::Arc<T> {
    fn read(&self, key: &ResourceKey) -> io::Result<Option<String>> {
        (**self).read(key)
    }
}
