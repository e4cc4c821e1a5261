//! Playlist Entity
//!
//! A playlist as held by the source: an arbitrary JSON object. Its identity
//! is its position in the source, since the object schema is not ours.

use serde_json::{Map, Value};
use super::entity::{DomainError, DomainResult, Entity};

#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    /// Zero-based position in the source listing
    pub position: u32,
    /// Fields exactly as stored
    pub fields: Map<String, Value>,
}

impl Playlist {
    pub fn new(position: u32, fields: Map<String, Value>) -> Self {
        Self { position, fields }
    }

    /// Wrap a source value, which must be a JSON object
    pub fn from_value(position: u32, value: Value) -> DomainResult<Self> {
        match value {
            Value::Object(fields) => Ok(Self::new(position, fields)),
            other => Err(DomainError::InvalidPlaylist(format!(
                "playlist at position {} is not an object: {}",
                position, other
            ))),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }
}

impl Entity for Playlist {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.position
    }
}
