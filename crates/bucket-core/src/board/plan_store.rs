//! Plan Store
//!
//! Step operations on the items of a [`BucketList`]. Steps are addressed by
//! their stable [`PlanId`]; the `*_at` variants take a position within a
//! filtered view and resolve it to the id rendered there first.

use crate::board::filter::{resolve_visible, PlanMode};
use crate::board::item_store::BucketList;
use crate::domain::{ItemId, NonEmptyText, Plan, PlanId};

impl BucketList {
    /// Append an uncompleted step to the item
    pub fn add_plan(&mut self, item_id: &ItemId, text: &str) -> Option<PlanId> {
        let Ok(text) = NonEmptyText::new(text) else {
            log::trace!("[PLAN] blank step ignored");
            return None;
        };
        if !self.items.contains(item_id) {
            log::trace!("[PLAN] add ignored, unknown item {}", item_id);
            return None;
        }
        let plan = Plan::new(self.plan_ids.next_id(), text);
        let plan_id = plan.id();
        self.items.update(item_id, |item| item.push_plan(plan))?;
        log::debug!("[PLAN] added {} to item {}", plan_id, item_id);
        Some(plan_id)
    }

    /// Remove a step, keeping the order of the remaining ones
    pub fn remove_plan(&mut self, item_id: &ItemId, plan_id: PlanId) -> Option<Plan> {
        if !self.has_plan(item_id, plan_id) {
            log::trace!("[PLAN] remove ignored, {} not in item {}", plan_id, item_id);
            return None;
        }
        let removed = self.items.update(item_id, |item| item.take_plan(plan_id)).flatten();
        if removed.is_some() {
            log::debug!("[PLAN] removed {} from item {}", plan_id, item_id);
        }
        removed
    }

    /// Flip a step's completion flag, returning the new value
    pub fn toggle_plan(&mut self, item_id: &ItemId, plan_id: PlanId) -> Option<bool> {
        if !self.has_plan(item_id, plan_id) {
            log::trace!("[PLAN] toggle ignored, {} not in item {}", plan_id, item_id);
            return None;
        }
        let completed = self.items.update(item_id, |item| item.flip_plan(plan_id)).flatten();
        if let Some(completed) = completed {
            log::debug!("[PLAN] {} in item {} completed={}", plan_id, item_id, completed);
        }
        completed
    }

    /// Remove the step shown at `index` of the `mode` view
    pub fn remove_plan_at(
        &mut self,
        item_id: &ItemId,
        mode: PlanMode,
        index: usize,
    ) -> Option<Plan> {
        let plan_id = self.resolve(item_id, mode, index)?;
        self.remove_plan(item_id, plan_id)
    }

    /// Toggle the step shown at `index` of the `mode` view
    pub fn toggle_plan_at(
        &mut self,
        item_id: &ItemId,
        mode: PlanMode,
        index: usize,
    ) -> Option<bool> {
        let plan_id = self.resolve(item_id, mode, index)?;
        self.toggle_plan(item_id, plan_id)
    }

    fn resolve(&self, item_id: &ItemId, mode: PlanMode, index: usize) -> Option<PlanId> {
        let item = self.get(item_id)?;
        let resolved = resolve_visible(item, mode, index);
        if resolved.is_none() {
            log::trace!(
                "[PLAN] index {} out of range in {:?} view of item {}",
                index,
                mode,
                item_id
            );
        }
        resolved
    }

    fn has_plan(&self, item_id: &ItemId, plan_id: PlanId) -> bool {
        self.get(item_id).and_then(|item| item.plan(plan_id)).is_some()
    }
}
