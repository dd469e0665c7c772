use serde::Deserialize;
use thiserror::Error;

use crate::source::ResourceKey;

/// A parsed model definition: which atlas textures a connectable material
/// renders with. Cell 0 of the pair is the plain variant, cell 1 the
/// connected variant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModelDef {
    pub key: ResourceKey,
    pub version: i64,
    /// Texture key for the plain/unconnected cell.
    pub plain: String,
    /// Texture key for the connected-variant cell.
    pub connected: String,
    /// Optional renderer pass tag (e.g. cutout), passed through untouched.
    pub render_tag: Option<String>,
}

/// Load-time failures, reported by resource identity.
#[derive(Debug, Error)]
pub enum ModelError {
    /// The document declares a format version nothing is registered for.
    /// A configuration error: hard failure, never retried.
    #[error("model {key}: no parser registered for format_version {version}")]
    UnknownVersion { key: ResourceKey, version: i64 },

    /// The document has no integer `format_version` field.
    #[error("model {key}: missing integer format_version")]
    NoVersion { key: ResourceKey },

    /// The document exists but does not parse or misses required fields.
    #[error("model {key}: malformed definition")]
    Malformed {
        key: ResourceKey,
        #[source]
        source: toml::de::Error,
    },

    /// The document is absent or was unreadable this attempt. Transient:
    /// the resource is skipped and may load after the next reload.
    #[error("model {key}: resource unavailable")]
    Missing { key: ResourceKey },
}

/// Parser for one declared format version.
pub trait ModelParser: Send + Sync {
    fn parse(&self, key: &ResourceKey, raw: &toml::Value) -> Result<ModelDef, ModelError>;
}

#[derive(Deserialize)]
struct DefV1 {
    #[allow(dead_code)]
    format_version: i64,
    textures: TexturesV1,
    render_tag: Option<String>,
}

#[derive(Deserialize)]
struct TexturesV1 {
    plain: String,
    connected: String,
}

/// Version 1: a flat `[textures]` table naming the plain/connected pair.
pub struct ParserV1;

impl ModelParser for ParserV1 {
    fn parse(&self, key: &ResourceKey, raw: &toml::Value) -> Result<ModelDef, ModelError> {
        let def: DefV1 = raw.clone().try_into().map_err(|source| ModelError::Malformed {
            key: key.clone(),
            source,
        })?;
        Ok(ModelDef {
            key: key.clone(),
            version: 1,
            plain: def.textures.plain,
            connected: def.textures.connected,
            render_tag: def.render_tag,
        })
    }
}
