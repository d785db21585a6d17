//! Album Tab Bar Component

use bucket_core::AlbumTab;
use leptos::prelude::*;

#[component]
pub fn AlbumTabBar(
    active: ReadSignal<AlbumTab>,
    set_active: WriteSignal<AlbumTab>,
) -> impl IntoView {
    view! {
        <div class="tab-container">
            {AlbumTab::ALL.iter().map(|&tab| {
                let is_active = move || active.get() == tab;
                view! {
                    <button
                        class=move || if is_active() { "tab-button active" } else { "tab-button" }
                        on:click=move |_| set_active.set(tab)
                    >
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
