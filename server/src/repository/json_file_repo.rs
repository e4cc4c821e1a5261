//! JSON File Playlist Repository
//!
//! Reads the playlist listing from a JSON file on every call, so edits to
//! the file show up without a restart.
//!
//! Accepted shapes:
//! - a bare array of playlist objects
//! - a paging object `{ "items": [...], "next": ... }` as exported from a
//!   music service; only the page present in the file is served

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{DomainError, DomainResult, Playlist};
use super::traits::Repository;

pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn extract_items(&self, value: Value) -> DomainResult<Vec<Value>> {
        match value {
            Value::Array(items) => Ok(items),
            Value::Object(mut paging) => {
                let items = match paging.remove("items") {
                    Some(Value::Array(items)) => items,
                    _ => {
                        return Err(DomainError::Internal(format!(
                            "{}: object without an \"items\" array",
                            self.path.display()
                        )))
                    }
                };
                if paging.get("next").is_some_and(|next| !next.is_null()) {
                    log::warn!(
                        "{}: paging object has further pages; serving the {} items present",
                        self.path.display(),
                        items.len()
                    );
                }
                Ok(items)
            }
            _ => Err(DomainError::Internal(format!(
                "{}: expected an array or a paging object",
                self.path.display()
            ))),
        }
    }
}

#[async_trait]
impl Repository<Playlist> for JsonFileRepository {
    async fn list(&self) -> DomainResult<Vec<Playlist>> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| DomainError::Internal(format!("Failed to read {}: {}", self.path.display(), e)))?;

        let value: Value = serde_json::from_str(&content)
            .map_err(|e| DomainError::Internal(format!("Failed to parse {}: {}", self.path.display(), e)))?;

        self.extract_items(value)?
            .into_iter()
            .enumerate()
            .map(|(i, item)| {
                Playlist::from_value(i as u32, item).map_err(|e| match e {
                    DomainError::InvalidPlaylist(msg) => {
                        DomainError::InvalidPlaylist(format!("{}: {}", self.path.display(), msg))
                    }
                    other => other,
                })
            })
            .collect()
    }
}
