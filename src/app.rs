//! Playlist Menu Frontend App
//!
//! Root component. The menu owns its own fetch; the shell only lays it out.

use leptos::prelude::*;

use crate::components::PlaylistMenu;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div id="app">
            <h1>"Playlists"</h1>
            <PlaylistMenu />
        </div>
    }
}
