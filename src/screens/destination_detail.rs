//! Destination Detail Screen
//!
//! Static album of hotels, landmarks and foods for one destination.
//! Always opens on the Hotels tab.

use bucket_core::{AlbumTab, TravelDestination};
use leptos::prelude::*;

use crate::components::{AlbumCard, AlbumTabBar};

#[component]
pub fn DestinationDetailScreen(destination: TravelDestination) -> impl IntoView {
    let (tab, set_tab) = signal(AlbumTab::default());

    let album = move || {
        let current = tab.get();
        let entries = current.entries();
        if entries.is_empty() {
            view! { <p class="empty-text">{current.empty_message()}</p> }.into_any()
        } else {
            entries
                .iter()
                .map(|&entry| view! { <AlbumCard entry=entry /> })
                .collect_view()
                .into_any()
        }
    };

    view! {
        <div class="detail-screen">
            <h1 class="screen-title">{destination.place().to_string()}</h1>
            <AlbumTabBar active=tab set_active=set_tab />
            <div class="album-content">{album}</div>
        </div>
    }
}
