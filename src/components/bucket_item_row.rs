//! Bucket Item Row Component
//!
//! One goal in the bucket list. The secondary button opens the plan editor,
//! or deletes the goal while the list is in remove mode.

use bucket_core::{BucketItem, Entity, SecondaryAction};
use leptos::prelude::*;

use crate::store::{use_bucket_store, BucketScreenStateStoreFields};

#[component]
pub fn BucketItemRow(item: BucketItem) -> impl IntoView {
    let store = use_bucket_store();

    let id = item.id().clone();
    let title = item.title().to_string();
    let removing = move || store.board().read().list_mode().is_removing();

    let on_secondary = move |_| {
        match store.board().write().press_secondary(&id) {
            SecondaryAction::Opened(id) => log::debug!("[UI] plans opened for {}", id),
            SecondaryAction::Removed(item) => log::info!("[UI] removed \"{}\"", item.title()),
            SecondaryAction::Ignored => {}
        }
    };

    view! {
        <div class="item-row">
            <span class="item-text">{title}</span>
            <button class="row-action" on:click=on_secondary>
                {move || if removing() {
                    view! {
                        <img class="row-icon bin" src="assets/images/bin.png" alt="Remove" />
                    }
                    .into_any()
                } else {
                    view! {
                        <img class="row-icon chart" src="assets/images/chart.png" alt="Plans" />
                    }
                    .into_any()
                }}
            </button>
        </div>
    }
}
