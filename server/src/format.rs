//! Playlist Formatting
//!
//! Trims playlists down to the keys the front-end needs before they go on
//! the wire.

use serde_json::{Map, Value};

use crate::domain::Playlist;

/// Keys kept when no `PLAYLIST_KEYS` override is configured
pub const DEFAULT_RELEVANT_KEYS: &[&str] = &["name", "tracks"];

/// Copy of `fields` holding only the relevant keys that are present
pub fn extract_relevant_keys(fields: &Map<String, Value>, relevant_keys: &[String]) -> Map<String, Value> {
    fields
        .iter()
        .filter(|(key, _)| relevant_keys.iter().any(|k| k == *key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Format every playlist in order
pub fn format_playlists(playlists: &[Playlist], relevant_keys: &[String]) -> Vec<Map<String, Value>> {
    playlists
        .iter()
        .map(|playlist| extract_relevant_keys(&playlist.fields, relevant_keys))
        .collect()
}
