//! Declarative model definitions: versioned TOML documents, parser dispatch,
//! and a caching store keyed by resource identity.
#![forbid(unsafe_code)]

pub mod def;
pub mod source;
pub mod store;

pub use def::{ModelDef, ModelError, ModelParser, ParserV1};
pub use source::{FsResources, ResourceKey, ResourceProvider};
pub use store::{ModelStore, StoreStats};
