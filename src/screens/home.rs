//! Home Screen
//!
//! Centered image grid with the two navigation buttons below it.

use bucket_core::{grid_positions, HomeButton, Viewport};
use leptos::prelude::*;

use crate::context::AppContext;
use crate::models::Screen;

/// Used when the window size cannot be read
const FALLBACK_VIEWPORT: Viewport = Viewport {
    width: 390.0,
    height: 844.0,
};

fn viewport() -> Viewport {
    let Some(window) = web_sys::window() else {
        return FALLBACK_VIEWPORT;
    };
    let width = window.inner_width().ok().and_then(|v| v.as_f64());
    let height = window.inner_height().ok().and_then(|v| v.as_f64());
    match (width, height) {
        (Some(width), Some(height)) => Viewport { width, height },
        _ => FALLBACK_VIEWPORT,
    }
}

fn target(button: HomeButton) -> Screen {
    match button {
        HomeButton::Bucket => Screen::BucketList,
        HomeButton::Hobbies => Screen::TravelList,
    }
}

#[component]
pub fn HomeScreen() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let cells = grid_positions(viewport(), &ctx.config().grid);

    view! {
        <div class="home-screen">
            {cells.into_iter().map(|cell| view! {
                <img
                    class="grid-image"
                    src=format!("assets/images/{}.png", cell.image())
                    alt=cell.image()
                    style=format!(
                        "left: {}px; top: {}px; width: {}px; height: {}px;",
                        cell.x, cell.y, cell.size, cell.size,
                    )
                />
            }).collect_view()}

            <div class="home-buttons">
                {HomeButton::ALL.iter().map(|&button| view! {
                    <button class="home-button" on:click=move |_| ctx.navigate(target(button))>
                        <img
                            class="home-button-image"
                            src=format!("assets/images/{}.png", button.image())
                            alt=button.label()
                        />
                    </button>
                }).collect_view()}
            </div>
        </div>
    }
}
