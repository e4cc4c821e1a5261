//! Domain Layer
//!
//! Contains the playlist entity and core abstractions.
//! This layer has NO external dependencies (except serde_json for playlist fields).

mod entity;
mod playlist;

pub use entity::{Entity, DomainError, DomainResult};
pub use playlist::Playlist;
