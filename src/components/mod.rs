//! UI Components
//!
//! Leptos components for the playlist view.

mod fetch_error_banner;
mod playlist_menu;

pub use fetch_error_banner::FetchErrorBanner;
pub use playlist_menu::PlaylistMenu;
