//! Selection Context
//!
//! Which item's plan editor is open (and in which view), and whether the
//! item list is in remove mode.

use crate::board::filter::PlanMode;
use crate::domain::ItemId;

/// Plan editor state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PlanEditor {
    #[default]
    Closed,
    Open { item: ItemId, mode: PlanMode },
}

impl PlanEditor {
    /// Open for `item`, always starting in the Active view
    pub fn open(&mut self, item: ItemId) {
        *self = PlanEditor::Open {
            item,
            mode: PlanMode::Active,
        };
    }

    /// Switch between Active and Completed; `None` while closed
    pub fn toggle_mode(&mut self) -> Option<PlanMode> {
        match self {
            PlanEditor::Open { mode, .. } => {
                *mode = mode.toggled();
                Some(*mode)
            }
            PlanEditor::Closed => None,
        }
    }

    /// Close, discarding the mode. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_open();
        *self = PlanEditor::Closed;
        was_open
    }

    pub fn is_open(&self) -> bool {
        matches!(self, PlanEditor::Open { .. })
    }

    pub fn item(&self) -> Option<&ItemId> {
        match self {
            PlanEditor::Open { item, .. } => Some(item),
            PlanEditor::Closed => None,
        }
    }

    pub fn mode(&self) -> Option<PlanMode> {
        match self {
            PlanEditor::Open { mode, .. } => Some(*mode),
            PlanEditor::Closed => None,
        }
    }
}

/// Action bound to each item row's secondary button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ListMode {
    /// Opens the plan editor
    #[default]
    Normal,
    /// Deletes the item
    Removing,
}

impl ListMode {
    pub fn toggle(&mut self) {
        *self = match self {
            ListMode::Normal => ListMode::Removing,
            ListMode::Removing => ListMode::Normal,
        };
    }

    /// Long-press path: always ends in remove mode
    pub fn enter_remove(&mut self) {
        *self = ListMode::Removing;
    }

    pub fn is_removing(self) -> bool {
        self == ListMode::Removing
    }
}
