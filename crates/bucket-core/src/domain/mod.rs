//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO dependencies on the UI.

mod entity;
mod ids;
mod text;
mod list;
mod item;
mod destination;
mod album;

pub use entity::{Entity, DomainError, DomainResult};
pub use ids::{ItemId, DestinationId, PlanId, PlanIdCounter, TimeIdGenerator};
pub use text::NonEmptyText;
pub use list::EntityList;
pub use item::{BucketItem, Plan};
pub use destination::TravelDestination;
pub use album::{AlbumEntry, AlbumTab};
