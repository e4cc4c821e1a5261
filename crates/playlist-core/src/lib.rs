//! Playlist Core
//!
//! Platform-neutral half of the playlist menu:
//! - record: opaque playlist records and the response decode step
//! - error: classified fetch failures
//! - state: the view state machine
//! - loader: transport abstraction and the run-once loader
//!
//! Nothing in here touches the browser, so the same logic is exercised by
//! native tests and by the wasm front-end.

mod error;
mod loader;
mod record;
mod state;

pub use error::FetchError;
pub use loader::{HttpReply, PlaylistLoader, PlaylistTransport, PLAYLISTS_ENDPOINT};
pub use record::{decode_playlists, menu_entries, MenuEntry, PlaylistCollection, PlaylistRecord};
pub use state::PlaylistState;
