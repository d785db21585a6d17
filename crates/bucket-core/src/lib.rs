//! Bucket List Core
//!
//! Layered architecture:
//! - domain: entities, ids and the copy-on-write entity list
//! - board: bucket items, their plan steps, view filter and selection state
//! - travel: travel destination checklist
//! - layout / config: home screen geometry and app configuration
//!
//! All state is in memory and owned by whoever holds the value; nothing
//! here touches the UI.

pub mod domain;
pub mod board;
pub mod travel;
pub mod layout;
pub mod config;

pub use domain::{
    AlbumEntry, AlbumTab, BucketItem, DestinationId, DomainError, DomainResult, Entity, ItemId,
    NonEmptyText, Plan, PlanId, TravelDestination,
};
pub use board::{
    resolve_visible, visible_plans, BucketBoard, BucketList, ListMode, PlanEditor, PlanMode,
    SecondaryAction,
};
pub use travel::TravelChecklist;
pub use layout::{grid_positions, GridCell, HomeButton, Viewport, HOME_IMAGES};
pub use config::{AppConfig, GridConfig};
