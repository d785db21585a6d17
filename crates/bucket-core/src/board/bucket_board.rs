//! Bucket Board
//!
//! State owned by one bucket-list screen: the item list, the plan editor
//! and the remove-mode flag. Each method is one UI event.

use std::sync::Arc;

use crate::board::filter::{visible_plans, PlanMode};
use crate::board::item_store::BucketList;
use crate::board::selection::{ListMode, PlanEditor};
use crate::config::AppConfig;
use crate::domain::{BucketItem, ItemId, Plan, PlanId};

/// Example goals a fresh screen starts with
const EXAMPLES: &[(&str, &str, &[(&str, bool)])] = &[
    (
        "1",
        "Learn to play guitar",
        &[("Buy a guitar", false), ("Find a teacher", true)],
    ),
    (
        "2",
        "Travel to Japan",
        &[("Save money", false), ("Learn basic Japanese", false)],
    ),
    (
        "3",
        "Run a marathon",
        &[("Start training", true), ("Buy running shoes", false)],
    ),
];

/// What a row's secondary button did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryAction {
    Opened(ItemId),
    Removed(BucketItem),
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BucketBoard {
    list: BucketList,
    editor: PlanEditor,
    list_mode: ListMode,
}

impl BucketBoard {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_examples() -> Self {
        let mut board = Self::default();
        for (id, title, steps) in EXAMPLES {
            board.list.import(ItemId::new(*id), title, steps.iter().copied());
        }
        board
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.seed_examples {
            Self::with_examples()
        } else {
            Self::empty()
        }
    }

    pub fn list(&self) -> &BucketList {
        &self.list
    }

    pub fn items(&self) -> Arc<Vec<BucketItem>> {
        self.list.snapshot()
    }

    pub fn editor(&self) -> &PlanEditor {
        &self.editor
    }

    pub fn list_mode(&self) -> ListMode {
        self.list_mode
    }

    // ========================
    // Item list events
    // ========================

    /// "+" button: add a goal
    pub fn press_add(&mut self, title: &str) -> Option<BucketItem> {
        self.list.add_item(title)
    }

    /// "-" button press
    pub fn press_remove_toggle(&mut self) -> ListMode {
        self.list_mode.toggle();
        log::debug!("[BOARD] list mode {:?}", self.list_mode);
        self.list_mode
    }

    /// "-" button long press
    pub fn long_press_remove(&mut self) -> ListMode {
        self.list_mode.enter_remove();
        log::debug!("[BOARD] list mode {:?} (long press)", self.list_mode);
        self.list_mode
    }

    /// Row button: opens the editor, or deletes the item in remove mode
    pub fn press_secondary(&mut self, id: &ItemId) -> SecondaryAction {
        match self.list_mode {
            ListMode::Normal => {
                if self.open_editor(id) {
                    SecondaryAction::Opened(id.clone())
                } else {
                    SecondaryAction::Ignored
                }
            }
            ListMode::Removing => match self.remove_item(id) {
                Some(item) => SecondaryAction::Removed(item),
                None => SecondaryAction::Ignored,
            },
        }
    }

    /// Remove an item; closes its editor if it was open
    pub fn remove_item(&mut self, id: &ItemId) -> Option<BucketItem> {
        let removed = self.list.remove_item(id)?;
        if self.editor.item() == Some(id) {
            self.editor.close();
        }
        Some(removed)
    }

    // ========================
    // Plan editor events
    // ========================

    /// Open the editor for an existing item, in the Active view
    pub fn open_editor(&mut self, id: &ItemId) -> bool {
        if self.list.get(id).is_none() {
            log::trace!("[BOARD] open ignored, unknown item {}", id);
            return false;
        }
        self.editor.open(id.clone());
        log::debug!("[BOARD] editor open for item {}", id);
        true
    }

    pub fn close_editor(&mut self) -> bool {
        self.editor.close()
    }

    pub fn toggle_editor_mode(&mut self) -> Option<PlanMode> {
        self.editor.toggle_mode()
    }

    /// Item whose editor is open
    pub fn open_item(&self) -> Option<&BucketItem> {
        self.editor.item().and_then(|id| self.list.get(id))
    }

    /// Steps visible in the open editor
    pub fn visible_steps(&self) -> Vec<Plan> {
        match (self.open_item(), self.editor.mode()) {
            (Some(item), Some(mode)) => visible_plans(item, mode).cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Add a step to the open item; only in the Active view
    pub fn add_step(&mut self, text: &str) -> Option<PlanId> {
        let id = self.active_item()?;
        self.list.add_plan(&id, text)
    }

    /// Check or uncheck a step of the open item
    pub fn toggle_step(&mut self, plan_id: PlanId) -> Option<bool> {
        let id = self.editor.item()?.clone();
        self.list.toggle_plan(&id, plan_id)
    }

    /// Delete a step of the open item; only in the Active view
    pub fn delete_step(&mut self, plan_id: PlanId) -> Option<Plan> {
        let id = self.active_item()?;
        self.list.remove_plan(&id, plan_id)
    }

    fn active_item(&self) -> Option<ItemId> {
        match &self.editor {
            PlanEditor::Open {
                item,
                mode: PlanMode::Active,
            } => Some(item.clone()),
            PlanEditor::Open { .. } => {
                log::trace!("[BOARD] step edit ignored in Completed view");
                None
            }
            PlanEditor::Closed => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> ItemId {
        ItemId::new(raw)
    }

    #[test]
    fn test_examples_seeded() {
        let board = BucketBoard::with_examples();
        let titles: Vec<&str> = board.list().items().iter().map(BucketItem::title).collect();
        assert_eq!(titles, vec!["Learn to play guitar", "Travel to Japan", "Run a marathon"]);
        assert_eq!(board.list_mode(), ListMode::Normal);
        assert!(!board.editor().is_open());
    }

    #[test]
    fn test_from_config_respects_seed_flag() {
        let mut config = AppConfig::default();
        assert_eq!(BucketBoard::from_config(&config).list().len(), 3);
        config.seed_examples = false;
        assert!(BucketBoard::from_config(&config).list().is_empty());
    }

    #[test]
    fn test_secondary_opens_in_normal_mode() {
        let mut board = BucketBoard::with_examples();
        assert_eq!(board.press_secondary(&id("2")), SecondaryAction::Opened(id("2")));
        assert_eq!(board.open_item().map(BucketItem::title), Some("Travel to Japan"));
        assert_eq!(board.list().len(), 3);
    }

    #[test]
    fn test_secondary_removes_in_remove_mode() {
        let mut board = BucketBoard::with_examples();
        board.press_remove_toggle();
        match board.press_secondary(&id("2")) {
            SecondaryAction::Removed(item) => assert_eq!(item.title(), "Travel to Japan"),
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(board.list().len(), 2);
        assert_eq!(board.press_secondary(&id("2")), SecondaryAction::Ignored);
    }

    #[test]
    fn test_long_press_then_press_leaves_normal() {
        let mut board = BucketBoard::with_examples();
        assert_eq!(board.long_press_remove(), ListMode::Removing);
        assert_eq!(board.long_press_remove(), ListMode::Removing);
        assert_eq!(board.press_remove_toggle(), ListMode::Normal);
    }

    #[test]
    fn test_open_unknown_item_keeps_editor_closed() {
        let mut board = BucketBoard::with_examples();
        assert!(!board.open_editor(&id("999")));
        assert!(!board.editor().is_open());
        assert!(board.visible_steps().is_empty());
    }

    #[test]
    fn test_editor_always_reopens_active() {
        let mut board = BucketBoard::with_examples();
        board.open_editor(&id("1"));
        assert_eq!(board.toggle_editor_mode(), Some(PlanMode::Completed));
        board.close_editor();
        board.open_editor(&id("1"));
        assert_eq!(board.editor().mode(), Some(PlanMode::Active));
    }

    #[test]
    fn test_steps_follow_editor_mode() {
        let mut board = BucketBoard::with_examples();
        board.open_editor(&id("3"));
        let step_texts = |board: &BucketBoard| -> Vec<String> {
            board.visible_steps().iter().map(|p| p.text().to_string()).collect()
        };
        assert_eq!(step_texts(&board), vec!["Buy running shoes"]);

        board.toggle_editor_mode();
        assert_eq!(step_texts(&board), vec!["Start training"]);
    }

    #[test]
    fn test_add_and_delete_only_in_active_view() {
        let mut board = BucketBoard::with_examples();
        assert!(board.add_step("Closed editor").is_none());

        board.open_editor(&id("2"));
        let added = board.add_step("Book flights").unwrap();
        assert_eq!(board.visible_steps().len(), 3);

        board.toggle_editor_mode();
        assert!(board.add_step("Ignored").is_none());
        assert!(board.delete_step(added).is_none());

        board.toggle_editor_mode();
        assert_eq!(
            board.delete_step(added).map(|p| p.text().to_string()),
            Some("Book flights".into())
        );
        assert_eq!(board.visible_steps().len(), 2);
    }

    #[test]
    fn test_toggle_back_from_completed_view() {
        let mut board = BucketBoard::with_examples();
        board.open_editor(&id("1"));
        board.toggle_editor_mode();
        let done = board.visible_steps()[0].id();
        assert_eq!(board.toggle_step(done), Some(false));
        assert!(board.visible_steps().is_empty());
        board.toggle_editor_mode();
        assert_eq!(board.visible_steps().len(), 2);
    }

    #[test]
    fn test_removing_open_item_closes_editor() {
        let mut board = BucketBoard::with_examples();
        board.open_editor(&id("1"));
        let step = board.visible_steps()[0].id();
        board.remove_item(&id("1"));
        assert!(!board.editor().is_open());
        assert!(board.toggle_step(step).is_none());
    }
}
