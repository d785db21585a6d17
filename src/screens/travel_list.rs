//! Travel List Screen
//!
//! Stays mounted (hidden) while one of its destinations is open on top of
//! it, so the checklist survives the round trip.

use bucket_core::Entity;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::DestinationRow;
use crate::store::{TravelScreenState, TravelScreenStateStoreFields};

#[component]
pub fn TravelListScreen() -> impl IntoView {
    let store = Store::new(TravelScreenState::default());
    provide_context(store);

    let (new_place, set_new_place) = signal(String::new());
    let destinations = Memo::new(move |_| store.checklist().read().snapshot());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let place = new_place.get();
        if store.checklist().write().add(&place).is_some() {
            set_new_place.set(String::new());
        }
    };

    view! {
        <div class="travel-screen">
            <h1 class="screen-title">"Travel Destinations"</h1>

            <Show
                when=move || !destinations.get().is_empty()
                fallback=|| view! {
                    <p class="empty-text">
                        "No destinations added yet. Add your dream travel spots below!"
                    </p>
                }
            >
                // completed is part of the row key so a toggled row re-renders
                <For
                    each=move || destinations.get().to_vec()
                    key=|dest| (dest.id().clone(), dest.completed())
                    children=move |dest| view! { <DestinationRow destination=dest /> }
                />
            </Show>

            <form class="travel-input" on:submit=on_add>
                <input
                    type="text"
                    placeholder="Add a travel destination..."
                    prop:value=move || new_place.get()
                    on:input=move |ev| set_new_place.set(event_target_value(&ev))
                />
                <button type="submit" class="add-button">"+"</button>
            </form>
        </div>
    }
}
