//! Plan Editor Modal
//!
//! Steps of the selected goal, filtered to the Active or Completed view.
//! New steps can only be added from the Active view.

use bucket_core::PlanMode;
use leptos::prelude::*;

use crate::components::PlanRow;
use crate::store::{use_bucket_store, BucketScreenStateStoreFields};

#[component]
pub fn PlanEditorModal() -> impl IntoView {
    let store = use_bucket_store();
    let (new_step, set_new_step) = signal(String::new());

    let is_open = Memo::new(move |_| store.board().read().editor().is_open());
    let title = Memo::new(move |_| {
        store
            .board()
            .read()
            .open_item()
            .map(|item| item.title().to_string())
            .unwrap_or_default()
    });
    let mode = Memo::new(move |_| store.board().read().editor().mode().unwrap_or_default());
    let steps = Memo::new(move |_| store.board().read().visible_steps());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_step.get();
        if store.board().write().add_step(&text).is_some() {
            set_new_step.set(String::new());
        }
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay">
                <div class="modal-content">
                    <div class="modal-header">
                        <h2 class="modal-title">"Plans for: " {move || title.get()}</h2>
                        <button
                            class=move || {
                                if mode.get() == PlanMode::Completed {
                                    "mode-toggle completed"
                                } else {
                                    "mode-toggle"
                                }
                            }
                            on:click=move |_| {
                                store.board().write().toggle_editor_mode();
                            }
                        >
                            {move || mode.get().label()}
                        </button>
                    </div>

                    <div class="plans-list">
                        <Show
                            when=move || !steps.get().is_empty()
                            fallback=move || view! {
                                <p class="empty-plans">{move || mode.get().empty_message()}</p>
                            }
                        >
                            <For
                                each=move || steps.get()
                                key=|plan| plan.id()
                                children=move |plan| view! { <PlanRow plan=plan /> }
                            />
                        </Show>
                    </div>

                    <Show when=move || mode.get() == PlanMode::Active>
                        <form class="add-plan" on:submit=on_add>
                            <input
                                type="text"
                                placeholder="Add a step to achieve this goal..."
                                prop:value=move || new_step.get()
                                on:input=move |ev| set_new_step.set(event_target_value(&ev))
                            />
                            <button type="submit">"Add"</button>
                        </form>
                    </Show>

                    <button
                        class="close-btn"
                        on:click=move |_| {
                            store.board().write().close_editor();
                        }
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
