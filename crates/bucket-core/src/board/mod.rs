//! Bucket Board
//!
//! Item store, per-item plan store, view filter and selection state of the
//! bucket-list screen.

mod filter;
mod item_store;
mod plan_store;
mod selection;
mod bucket_board;

pub use filter::{resolve_visible, visible_plans, PlanMode};
pub use item_store::BucketList;
pub use selection::{ListMode, PlanEditor};
pub use bucket_board::{BucketBoard, SecondaryAction};
