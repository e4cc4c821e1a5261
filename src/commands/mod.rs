//! Backend Bindings
//!
//! HTTP calls to the playlist server, organized by endpoint.

mod playlists;

pub use playlists::*;
