//! Playlist Loader
//!
//! Issues the `/playlists` request at most once per loader. The front-end
//! creates one loader per mounted menu, so re-renders can't refetch.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;

use crate::error::FetchError;
use crate::record::decode_playlists;
use crate::state::PlaylistState;

/// Backend endpoint serving the current user's playlists
pub const PLAYLISTS_ENDPOINT: &str = "/playlists";

/// Raw HTTP answer, before decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self { status, body: body.into() }
    }
}

/// Outbound HTTP for the loader.
///
/// Only failures that yield no response at all belong in `Err`; any status
/// code the server sends comes back as an `HttpReply`.
#[async_trait(?Send)]
pub trait PlaylistTransport {
    /// POST `body` as `application/json` to `path`
    async fn post_json(&self, path: &str, body: &str) -> Result<HttpReply, FetchError>;
}

pub struct PlaylistLoader {
    endpoint: String,
    started: AtomicBool,
}

impl PlaylistLoader {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            started: AtomicBool::new(false),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn has_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Fetch and decode the playlists on the first call.
    ///
    /// Returns the state to render, or `None` when a previous call already
    /// claimed the fetch. The flag is set before the request goes out.
    pub async fn load_once<T>(&self, transport: &T) -> Option<PlaylistState>
    where
        T: PlaylistTransport + ?Sized,
    {
        if self.started.swap(true, Ordering::SeqCst) {
            return None;
        }

        let result = match transport.post_json(&self.endpoint, "{}").await {
            Ok(reply) => decode_playlists(reply.status, &reply.body),
            Err(e) => Err(e),
        };
        Some(PlaylistState::apply(result))
    }
}

impl Default for PlaylistLoader {
    fn default() -> Self {
        Self::new(PLAYLISTS_ENDPOINT)
    }
}
