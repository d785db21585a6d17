//! Navigation Header Component
//!
//! Title of the current screen with a back button. Hidden on the home screen.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn NavHeader() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let title = move || ctx.nav.with(|stack| stack.top().title());
    let can_go_back = move || ctx.nav.with(|stack| stack.depth() > 1);

    view! {
        <Show when=can_go_back>
            <header class="nav-header">
                <button class="back-btn" on:click=move |_| ctx.back()>"‹ Back"</button>
                <span class="nav-title">{title}</span>
            </header>
        </Show>
    }
}
