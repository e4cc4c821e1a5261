//! Playlist Menu Component
//!
//! Fetches the playlists once per mount and lists them.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use playlist_core::{menu_entries, PlaylistLoader, PlaylistState, PLAYLISTS_ENDPOINT};

use crate::commands::FetchTransport;
use crate::components::FetchErrorBanner;

#[component]
pub fn PlaylistMenu() -> impl IntoView {
    let (state, set_state) = signal(PlaylistState::NotLoaded);

    // One loader per mount; its flag keeps re-runs of the effect from refetching
    let loader = Rc::new(PlaylistLoader::new(PLAYLISTS_ENDPOINT));

    Effect::new(move |_| {
        let loader = Rc::clone(&loader);
        spawn_local(async move {
            let Some(next) = loader.load_once(&FetchTransport).await else {
                return;
            };
            match &next {
                PlaylistState::Loaded(playlists) => {
                    web_sys::console::log_1(
                        &format!("[PlaylistMenu] Loaded {} playlists from {}", playlists.len(), loader.endpoint()).into(),
                    );
                }
                PlaylistState::Failed(e) => {
                    web_sys::console::error_1(&format!("[PlaylistMenu] Fetch failed: {}", e).into());
                }
                PlaylistState::NotLoaded => {}
            }
            set_state.set(next);
        });
    });

    view! {
        <nav class="playlist-menu-container">
            {move || match state.get() {
                PlaylistState::NotLoaded => view! {
                    <div class="loading">"Loading playlists..."</div>
                }.into_any(),
                PlaylistState::Loaded(playlists) => {
                    let entries = menu_entries(&playlists);
                    let count = entries.len();
                    view! {
                        <ul id="playlist-menu" class="playlist-menu">
                            {entries.into_iter().map(|entry| view! {
                                <li class="playlist-menu-item">
                                    {entry.label}
                                </li>
                            }).collect_view()}
                        </ul>
                        <Show when=move || count == 0>
                            <p class="playlist-empty">"No playlists yet"</p>
                        </Show>
                    }.into_any()
                }
                PlaylistState::Failed(error) => view! {
                    <FetchErrorBanner error=error />
                }.into_any(),
            }}
        </nav>
    }
}
