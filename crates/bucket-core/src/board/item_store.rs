//! Bucket Item Store
//!
//! Ordered, in-memory list of bucket-list items. Every mutation is a
//! silent no-op on invalid input; callers learn what happened from the
//! returned `Option`.

use std::sync::Arc;

use crate::domain::{
    BucketItem, Entity, EntityList, ItemId, NonEmptyText, Plan, PlanIdCounter, TimeIdGenerator,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketList {
    pub(super) items: EntityList<BucketItem>,
    ids: TimeIdGenerator,
    pub(super) plan_ids: PlanIdCounter,
}

impl BucketList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in display order
    pub fn items(&self) -> &[BucketItem] {
        self.items.as_slice()
    }

    /// The current list as a shared value that later mutations never alter
    pub fn snapshot(&self) -> Arc<Vec<BucketItem>> {
        self.items.snapshot()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &ItemId) -> Option<&BucketItem> {
        self.items.get(id)
    }

    /// Append a new item with an empty plan list
    pub fn add_item(&mut self, title: &str) -> Option<BucketItem> {
        let title = Self::accept(title)?;
        let id = ItemId::new(self.ids.next_raw().or_else(Self::exhausted)?);
        Some(self.append(id, title))
    }

    /// [`BucketList::add_item`] with an explicit clock reading in milliseconds
    pub fn add_item_at(&mut self, title: &str, now_ms: i64) -> Option<BucketItem> {
        let title = Self::accept(title)?;
        let id = ItemId::new(self.ids.next_raw_at(now_ms).or_else(Self::exhausted)?);
        Some(self.append(id, title))
    }

    /// Insert an item with a caller-chosen id and initial steps.
    ///
    /// Ignored when the id is already taken or the title is blank;
    /// blank steps are skipped.
    pub fn import<'a>(
        &mut self,
        id: ItemId,
        title: &str,
        steps: impl IntoIterator<Item = (&'a str, bool)>,
    ) -> Option<&BucketItem> {
        if self.items.contains(&id) {
            log::trace!("[BUCKET] import ignored, id {} already present", id);
            return None;
        }
        let title = Self::accept(title)?;
        self.ids.observe(id.as_str());

        let mut item = BucketItem::new(id.clone(), title);
        for (text, completed) in steps {
            if let Ok(text) = NonEmptyText::new(text) {
                let mut plan = Plan::new(self.plan_ids.next_id(), text);
                plan.set_completed(completed);
                item.push_plan(plan);
            }
        }
        self.items.push(item);
        self.items.get(&id)
    }

    /// Remove the item with `id`; absent ids are ignored
    pub fn remove_item(&mut self, id: &ItemId) -> Option<BucketItem> {
        let removed = self.items.remove(id);
        match &removed {
            Some(item) => log::debug!("[BUCKET] removed item {} ({})", id, item.title()),
            None => log::trace!("[BUCKET] remove ignored, unknown item {}", id),
        }
        removed
    }

    fn accept(title: &str) -> Option<NonEmptyText> {
        match NonEmptyText::new(title) {
            Ok(title) => Some(title),
            Err(_) => {
                log::trace!("[BUCKET] blank title ignored");
                None
            }
        }
    }

    fn exhausted() -> Option<String> {
        log::warn!("[BUCKET] add ignored, no item ids left");
        None
    }

    fn append(&mut self, id: ItemId, title: NonEmptyText) -> BucketItem {
        let item = BucketItem::new(id, title);
        log::debug!("[BUCKET] added item {} ({})", item.id(), item.title());
        self.items.push(item.clone());
        item
    }
}
