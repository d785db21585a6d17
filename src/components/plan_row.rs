//! Plan Row Component
//!
//! Active steps get check and delete buttons; completed steps only an
//! arrow that moves them back to Active.

use bucket_core::Plan;
use leptos::prelude::*;

use crate::store::{use_bucket_store, BucketScreenStateStoreFields};

#[component]
pub fn PlanRow(plan: Plan) -> impl IntoView {
    let store = use_bucket_store();

    let plan_id = plan.id();
    let completed = plan.completed();
    let toggle = move |_| {
        store.board().write().toggle_step(plan_id);
    };

    view! {
        <div class="plan-item">
            <span class=if completed { "plan-text completed" } else { "plan-text" }>
                "• " {plan.text().to_string()}
            </span>
            <div class="plan-actions">
                {if completed {
                    view! {
                        <button class="plan-action arrow" on:click=toggle>"←"</button>
                    }.into_any()
                } else {
                    view! {
                        <button class="plan-action check" on:click=toggle>"✓"</button>
                        <button
                            class="plan-action delete"
                            on:click=move |_| {
                                store.board().write().delete_step(plan_id);
                            }
                        >
                            "X"
                        </button>
                    }.into_any()
                }}
            </div>
        </div>
    }
}
