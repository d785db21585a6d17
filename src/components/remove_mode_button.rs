//! Remove Mode Button Component
//!
//! The "-" button. A press toggles remove mode; holding it for the
//! configured time forces remove mode on instead.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::context::AppContext;
use crate::store::{use_bucket_store, BucketScreenStateStoreFields};

#[component]
pub fn RemoveModeButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_bucket_store();
    let hold_ms = ctx.config().long_press_ms;

    // dropping the Timeout cancels it
    let pending = StoredValue::new_local(None::<Timeout>);
    let (long_pressed, set_long_pressed) = signal(false);

    let on_down = move |_| {
        set_long_pressed.set(false);
        let timeout = Timeout::new(hold_ms, move || {
            set_long_pressed.set(true);
            store.board().write().long_press_remove();
        });
        pending.update_value(|slot| *slot = Some(timeout));
    };

    let on_up = move |_| {
        let was_pending = pending.try_update_value(|slot| slot.take().is_some()).unwrap_or(false);
        if was_pending && !long_pressed.get_untracked() {
            store.board().write().press_remove_toggle();
        }
    };

    let on_leave = move |_| {
        pending.update_value(|slot| *slot = None);
    };

    let removing = move || store.board().read().list_mode().is_removing();

    view! {
        <button
            class=move || if removing() { "fab minus active" } else { "fab minus" }
            on:pointerdown=on_down
            on:pointerup=on_up
            on:pointerleave=on_leave
        >
            "-"
        </button>
    }
}
