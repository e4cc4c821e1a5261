//! Playlist View State
//!
//! `NotLoaded` until the single fetch resolves, then `Loaded` or `Failed`.

use crate::error::FetchError;
use crate::record::PlaylistCollection;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaylistState {
    #[default]
    NotLoaded,
    Loaded(PlaylistCollection),
    Failed(FetchError),
}

impl PlaylistState {
    /// State after a fetch resolves. Errors never carry playlists over.
    pub fn apply(result: Result<PlaylistCollection, FetchError>) -> Self {
        match result {
            Ok(playlists) => PlaylistState::Loaded(playlists),
            Err(e) => PlaylistState::Failed(e),
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, PlaylistState::Loaded(_))
    }

    pub fn playlists(&self) -> Option<&PlaylistCollection> {
        match self {
            PlaylistState::Loaded(playlists) => Some(playlists),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            PlaylistState::Failed(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_loaded() {
        let state = PlaylistState::default();
        assert_eq!(state, PlaylistState::NotLoaded);
        assert!(!state.is_loaded());
        assert!(state.playlists().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_apply() {
        let loaded = PlaylistState::apply(Ok(Vec::new()));
        assert!(loaded.is_loaded());
        assert_eq!(loaded.playlists().map(Vec::len), Some(0));

        let failed = PlaylistState::apply(Err(FetchError::Status { status: 500 }));
        assert!(!failed.is_loaded());
        assert_eq!(failed.error(), Some(&FetchError::Status { status: 500 }));
        assert_ne!(failed, PlaylistState::NotLoaded);
    }
}
