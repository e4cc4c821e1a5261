//! In-Memory Playlist Repository
//!
//! Fixed listing, used when no source file is configured and in tests.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DomainResult, Playlist};
use super::traits::Repository;

#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    playlists: Vec<Playlist>,
}

impl InMemoryRepository {
    pub fn new(playlists: Vec<Playlist>) -> Self {
        Self { playlists }
    }

    /// Build from JSON objects, numbering them in order
    pub fn from_values(values: Vec<Value>) -> DomainResult<Self> {
        let playlists = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| Playlist::from_value(i as u32, v))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self::new(playlists))
    }
}

#[async_trait]
impl Repository<Playlist> for InMemoryRepository {
    async fn list(&self) -> DomainResult<Vec<Playlist>> {
        Ok(self.playlists.clone())
    }
}
