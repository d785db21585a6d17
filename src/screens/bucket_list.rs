//! Bucket List Screen
//!
//! Owns a fresh [`BucketStore`](crate::store::BucketStore) for as long as it
//! is mounted.

use bucket_core::Entity;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{AddItemPrompt, BucketItemRow, PlanEditorModal, RemoveModeButton};
use crate::context::AppContext;
use crate::store::{BucketScreenState, BucketScreenStateStoreFields};

#[component]
pub fn BucketListScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = Store::new(BucketScreenState::new(&ctx.config()));
    provide_context(store);

    let (prompt_visible, set_prompt_visible) = signal(false);
    let items = Memo::new(move |_| store.board().read().items());

    view! {
        <div class="bucket-screen">
            <div class="item-list">
                <Show
                    when=move || !items.get().is_empty()
                    fallback=|| view! {
                        <p class="empty-text">"No bucket list items yet. Add your first one!"</p>
                    }
                >
                    <For
                        each=move || items.get().to_vec()
                        key=|item| item.id().clone()
                        children=move |item| view! { <BucketItemRow item=item /> }
                    />
                </Show>
            </div>

            <PlanEditorModal />
            <AddItemPrompt visible=prompt_visible set_visible=set_prompt_visible />

            <RemoveModeButton />
            <button class="fab plus" on:click=move |_| set_prompt_visible.set(true)>"+"</button>
        </div>
    }
}
