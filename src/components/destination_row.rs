//! Destination Row Component
//!
//! A travel checklist entry. Tapping the row opens its detail screen;
//! the checkbox and delete button do not.

use bucket_core::{Entity, TravelDestination};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Screen;
use crate::store::{use_travel_store, TravelScreenStateStoreFields};

#[component]
pub fn DestinationRow(destination: TravelDestination) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_travel_store();

    let toggle_id = destination.id().clone();
    let delete_id = destination.id().clone();
    let completed = destination.completed();
    let place = destination.place().to_string();

    view! {
        <div
            class="destination-item"
            on:click=move |_| ctx.navigate(Screen::DestinationDetail(destination.clone()))
        >
            <button
                class=if completed { "checkbox checked" } else { "checkbox" }
                on:click=move |ev| {
                    ev.stop_propagation();
                    store.checklist().write().toggle(&toggle_id);
                }
            >
                {completed.then_some("✓")}
            </button>
            <span class=if completed { "destination-text completed" } else { "destination-text" }>
                {place}
            </span>
            <button
                class="delete-button"
                on:click=move |ev| {
                    ev.stop_propagation();
                    store.checklist().write().delete(&delete_id);
                }
            >
                "X"
            </button>
        </div>
    }
}
