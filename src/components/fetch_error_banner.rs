//! Fetch Error Banner Component
//!
//! Shown in place of the menu when the playlist request failed.

use leptos::prelude::*;
use playlist_core::FetchError;

#[component]
pub fn FetchErrorBanner(error: FetchError) -> impl IntoView {
    let class = format!("fetch-error fetch-error-{}", error.kind());

    view! {
        <div class=class role="alert">
            <strong>"Could not load playlists"</strong>
            <span class="fetch-error-detail">{error.to_string()}</span>
        </div>
    }
}
