//! Add Item Prompt Component
//!
//! Inline prompt asking for a new bucket-list goal.

use leptos::prelude::*;

use crate::store::{use_bucket_store, BucketScreenStateStoreFields};

#[component]
pub fn AddItemPrompt(
    visible: ReadSignal<bool>,
    set_visible: WriteSignal<bool>,
) -> impl IntoView {
    let store = use_bucket_store();
    let (new_title, set_new_title) = signal(String::new());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title = new_title.get();
        // blank titles are ignored by the board; the prompt closes either way
        store.board().write().press_add(&title);
        set_new_title.set(String::new());
        set_visible.set(false);
    };

    view! {
        <Show when=move || visible.get()>
            <div class="modal-overlay">
                <form class="prompt" on:submit=on_submit>
                    <h2 class="prompt-title">"Add Bucket List Item"</h2>
                    <p class="prompt-message">"What do you want to accomplish?"</p>
                    <input
                        type="text"
                        prop:value=move || new_title.get()
                        on:input=move |ev| set_new_title.set(event_target_value(&ev))
                    />
                    <div class="prompt-actions">
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |_| {
                                set_new_title.set(String::new());
                                set_visible.set(false);
                            }
                        >
                            "Cancel"
                        </button>
                        <button type="submit">"OK"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
