//! Travel Destination Entity

use super::entity::Entity;
use super::ids::DestinationId;
use super::text::NonEmptyText;

/// A place on the travel checklist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TravelDestination {
    id: DestinationId,
    place: String,
    completed: bool,
}

impl TravelDestination {
    pub(crate) fn new(id: DestinationId, place: NonEmptyText) -> Self {
        Self {
            id,
            place: place.into_string(),
            completed: false,
        }
    }

    pub fn place(&self) -> &str {
        &self.place
    }

    /// Whether the place has been visited
    pub fn completed(&self) -> bool {
        self.completed
    }

    pub(crate) fn flip(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}

impl Entity for TravelDestination {
    type Id = DestinationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
