//! Album Card Component

use bucket_core::AlbumEntry;
use leptos::prelude::*;

#[component]
pub fn AlbumCard(entry: AlbumEntry) -> impl IntoView {
    view! {
        <div class="album-item">
            <img class="album-image" src=entry.image alt=entry.name />
            <div class="album-info">
                <span class="album-name">{entry.name}</span>
                <span class="album-description">{entry.description}</span>
            </div>
        </div>
    }
}
