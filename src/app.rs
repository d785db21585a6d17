//! Bucket List Frontend App
//!
//! Stack navigation between the home grid and the three list screens.

use bucket_core::AppConfig;
use leptos::prelude::*;

use crate::components::NavHeader;
use crate::context::AppContext;
use crate::models::{NavStack, Screen};
use crate::screens::{BucketListScreen, DestinationDetailScreen, HomeScreen, TravelListScreen};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    // State
    let (nav, set_nav) = signal(NavStack::default());

    // Provide context to all children
    provide_context(AppContext::new((nav, set_nav), config));

    let top = Memo::new(move |_| nav.with(|stack| stack.top().clone()));
    let travel_mounted = Memo::new(move |_| nav.with(|stack| stack.contains(&Screen::TravelList)));

    view! {
        <div class="app-layout">
            <NavHeader />

            <main class="screen">
                <Show when=move || top.get() == Screen::Home>
                    <HomeScreen />
                </Show>

                <Show when=move || top.get() == Screen::BucketList>
                    <BucketListScreen />
                </Show>

                // Kept mounted under its detail screen
                <Show when=move || travel_mounted.get()>
                    <div style:display=move || {
                        if top.get() == Screen::TravelList { "block" } else { "none" }
                    }>
                        <TravelListScreen />
                    </div>
                </Show>

                {move || match top.get() {
                    Screen::DestinationDetail(destination) => {
                        Some(view! { <DestinationDetailScreen destination=destination /> })
                    }
                    _ => None,
                }}
            </main>
        </div>
    }
}
