//! Plan View Filter
//!
//! Splits an item's plans into the Active and Completed views.

use crate::domain::{BucketItem, Plan, PlanId};

/// Which half of an item's plans the editor is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PlanMode {
    #[default]
    Active,
    Completed,
}

impl PlanMode {
    pub fn toggled(self) -> Self {
        match self {
            PlanMode::Active => PlanMode::Completed,
            PlanMode::Completed => PlanMode::Active,
        }
    }

    pub fn matches(self, plan: &Plan) -> bool {
        plan.completed() == (self == PlanMode::Completed)
    }

    pub fn label(self) -> &'static str {
        match self {
            PlanMode::Active => "Active",
            PlanMode::Completed => "Completed",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            PlanMode::Active => "No active tasks yet. Add your first step below!",
            PlanMode::Completed => "No completed tasks yet.",
        }
    }
}

/// Plans of `item` visible in `mode`, in display order
pub fn visible_plans(item: &BucketItem, mode: PlanMode) -> impl Iterator<Item = &Plan> + '_ {
    item.plans().iter().filter(move |plan| mode.matches(plan))
}

/// Id of the plan rendered at `index` of the filtered view
pub fn resolve_visible(item: &BucketItem, mode: PlanMode, index: usize) -> Option<PlanId> {
    visible_plans(item, mode).nth(index).map(Plan::id)
}
