//! Playlist Records
//!
//! Records are kept opaque: the backend owns the schema, so decode only
//! checks the outer shape (an array of objects) and never looks at fields.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::FetchError;

/// One playlist as sent by the backend, fields untouched
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaylistRecord(Map<String, Value>);

impl PlaylistRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The `name` field, when the backend sends one as a string
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// Ordered playlists from the most recent successful fetch
pub type PlaylistCollection = Vec<PlaylistRecord>;

/// Decode a `/playlists` reply.
///
/// Non-2xx statuses are rejected before the body is read.
pub fn decode_playlists(status: u16, body: &str) -> Result<PlaylistCollection, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status { status });
    }

    let value: Value = serde_json::from_str(body)
        .map_err(|e| FetchError::malformed(format!("body is not valid JSON: {}", e)))?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(FetchError::malformed(format!(
                "expected a JSON array, found {}",
                json_kind(&other)
            )))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(PlaylistRecord(fields)),
            other => Err(FetchError::malformed(format!(
                "element {} is {}, expected an object",
                index,
                json_kind(&other)
            ))),
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// A rendered row of the playlist menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub index: usize,
    pub label: String,
}

/// Build menu rows, one per record, in response order.
pub fn menu_entries(playlists: &PlaylistCollection) -> Vec<MenuEntry> {
    playlists
        .iter()
        .enumerate()
        .map(|(index, record)| MenuEntry {
            index,
            label: record
                .name()
                .map(str::to_string)
                .unwrap_or_else(|| format!("Playlist {}", index + 1)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_empty_array() {
        let playlists = decode_playlists(200, "[]").unwrap();
        assert!(playlists.is_empty());
        assert!(menu_entries(&playlists).is_empty());
    }

    #[test]
    fn test_decode_keeps_records_verbatim() {
        let body = r#"[{"id":"1","name":"Road Trip"}]"#;
        let playlists = decode_playlists(200, body).unwrap();

        assert_eq!(playlists.len(), 1);
        assert_eq!(playlists[0].fields().len(), 2);
        assert_eq!(playlists[0].get("id"), Some(&json!("1")));
        assert_eq!(playlists[0].name(), Some("Road Trip"));
    }

    #[test]
    fn test_decode_is_identity_on_arrays_of_objects() {
        let original = json!([
            {"name": "Focus", "tracks": {"total": 12}},
            {"name": "Gym", "tracks": {"total": 40}, "public": false},
            {}
        ]);
        let playlists = decode_playlists(200, &original.to_string()).unwrap();
        assert_eq!(serde_json::to_value(&playlists).unwrap(), original);
    }

    #[test]
    fn test_non_success_status_is_rejected() {
        assert_eq!(
            decode_playlists(500, "[]"),
            Err(FetchError::Status { status: 500 })
        );
        assert_eq!(
            decode_playlists(404, "not json"),
            Err(FetchError::Status { status: 404 })
        );
    }

    #[test]
    fn test_malformed_bodies() {
        for body in ["", "not json", "{}", "\"x\"", "[1]", "[{}, null]", "null"] {
            match decode_playlists(200, body) {
                Err(FetchError::MalformedResponse { .. }) => {}
                other => panic!("body {:?} decoded to {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_malformed_reason_points_at_element() {
        let err = decode_playlists(200, r#"[{"name":"a"}, 3]"#).unwrap_err();
        assert_eq!(
            err,
            FetchError::malformed("element 1 is a number, expected an object")
        );
    }

    #[test]
    fn test_menu_entries_fall_back_to_position() {
        let playlists = decode_playlists(200, r#"[{"name":"Chill"},{"id":"7"},{"name":5}]"#).unwrap();
        let labels: Vec<_> = menu_entries(&playlists).into_iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Chill", "Playlist 2", "Playlist 3"]);
    }
}
