//! Bucket Item Entity
//!
//! A top-level goal with an ordered list of plan steps.

use super::entity::Entity;
use super::ids::{ItemId, PlanId};
use super::text::NonEmptyText;

/// A single step towards a bucket-list goal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    id: PlanId,
    text: String,
    completed: bool,
}

impl Plan {
    pub(crate) fn new(id: PlanId, text: NonEmptyText) -> Self {
        Self {
            id,
            text: text.into_string(),
            completed: false,
        }
    }

    pub fn id(&self) -> PlanId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }
}

/// A bucket-list goal
///
/// Title and id are fixed at creation; only the plan list changes.
/// Items only come from [`BucketList`](crate::BucketList), never from raw data:
///
/// ```compile_fail
/// let item: bucket_core::BucketItem = serde_json::from_str(r#"{"title": ""}"#).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BucketItem {
    id: ItemId,
    title: String,
    plans: Vec<Plan>,
}

impl BucketItem {
    pub(crate) fn new(id: ItemId, title: NonEmptyText) -> Self {
        Self {
            id,
            title: title.into_string(),
            plans: Vec::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Plans in display order
    pub fn plans(&self) -> &[Plan] {
        &self.plans
    }

    pub fn plan(&self, plan_id: PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| plan.id == plan_id)
    }

    pub fn completed_count(&self) -> usize {
        self.plans.iter().filter(|plan| plan.completed).count()
    }

    pub(crate) fn push_plan(&mut self, plan: Plan) {
        self.plans.push(plan);
    }

    /// Remove preserving the relative order of the remaining plans
    pub(crate) fn take_plan(&mut self, plan_id: PlanId) -> Option<Plan> {
        let index = self.plans.iter().position(|plan| plan.id == plan_id)?;
        Some(self.plans.remove(index))
    }

    /// Flip completion, returning the new state
    pub(crate) fn flip_plan(&mut self, plan_id: PlanId) -> Option<bool> {
        let plan = self.plans.iter_mut().find(|plan| plan.id == plan_id)?;
        plan.set_completed(!plan.completed);
        Some(plan.completed)
    }
}

impl Entity for BucketItem {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::PlanIdCounter;

    fn text(raw: &str) -> NonEmptyText {
        NonEmptyText::new(raw).unwrap()
    }

    #[test]
    fn test_item_creation() {
        let item = BucketItem::new(ItemId::new("1"), text("Learn to play guitar"));
        assert_eq!(item.id().as_str(), "1");
        assert_eq!(item.title(), "Learn to play guitar");
        assert!(item.plans().is_empty());
    }

    #[test]
    fn test_flip_and_take_plan() {
        let mut counter = PlanIdCounter::default();
        let mut item = BucketItem::new(ItemId::new("1"), text("Run a marathon"));
        let first = counter.next_id();
        let second = counter.next_id();
        item.push_plan(Plan::new(first, text("Start training")));
        item.push_plan(Plan::new(second, text("Buy running shoes")));

        assert_eq!(item.flip_plan(first), Some(true));
        assert_eq!(item.completed_count(), 1);
        assert_eq!(item.plan(first).map(Plan::text), Some("Start training"));

        let taken = item.take_plan(first).unwrap();
        assert_eq!(taken.text(), "Start training");
        assert_eq!(item.plans().len(), 1);
        assert_eq!(item.plans()[0].id(), second);
        assert!(item.take_plan(first).is_none());
    }
}
