//! Travel Checklist
//!
//! Ordered list of places to visit, each with a visited flag.

use std::sync::Arc;

use crate::domain::{
    DestinationId, Entity, EntityList, NonEmptyText, TimeIdGenerator, TravelDestination,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TravelChecklist {
    destinations: EntityList<TravelDestination>,
    ids: TimeIdGenerator,
}

impl TravelChecklist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn destinations(&self) -> &[TravelDestination] {
        self.destinations.as_slice()
    }

    pub fn snapshot(&self) -> Arc<Vec<TravelDestination>> {
        self.destinations.snapshot()
    }

    pub fn len(&self) -> usize {
        self.destinations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }

    pub fn get(&self, id: &DestinationId) -> Option<&TravelDestination> {
        self.destinations.get(id)
    }

    pub fn visited_count(&self) -> usize {
        self.destinations.as_slice().iter().filter(|d| d.completed()).count()
    }

    pub fn add(&mut self, place: &str) -> Option<TravelDestination> {
        let place = Self::accept(place)?;
        let raw = self.ids.next_raw().or_else(Self::exhausted)?;
        Some(self.append(raw, place))
    }

    /// [`TravelChecklist::add`] with an explicit clock reading in milliseconds
    pub fn add_at(&mut self, place: &str, now_ms: i64) -> Option<TravelDestination> {
        let place = Self::accept(place)?;
        let raw = self.ids.next_raw_at(now_ms).or_else(Self::exhausted)?;
        Some(self.append(raw, place))
    }

    /// Flip the visited flag, returning the new value
    pub fn toggle(&mut self, id: &DestinationId) -> Option<bool> {
        let completed = self.destinations.update(id, TravelDestination::flip);
        match completed {
            Some(completed) => log::debug!("[TRAVEL] {} completed={}", id, completed),
            None => log::trace!("[TRAVEL] toggle ignored, unknown destination {}", id),
        }
        completed
    }

    pub fn delete(&mut self, id: &DestinationId) -> Option<TravelDestination> {
        let removed = self.destinations.remove(id);
        match &removed {
            Some(dest) => log::debug!("[TRAVEL] deleted {} ({})", id, dest.place()),
            None => log::trace!("[TRAVEL] delete ignored, unknown destination {}", id),
        }
        removed
    }

    fn accept(place: &str) -> Option<NonEmptyText> {
        let place = NonEmptyText::new(place).ok();
        if place.is_none() {
            log::trace!("[TRAVEL] blank place ignored");
        }
        place
    }

    fn exhausted() -> Option<String> {
        log::warn!("[TRAVEL] add ignored, no destination ids left");
        None
    }

    fn append(&mut self, raw_id: String, place: NonEmptyText) -> TravelDestination {
        let destination = TravelDestination::new(DestinationId::new(raw_id), place);
        log::debug!("[TRAVEL] added {} ({})", destination.id(), destination.place());
        self.destinations.push(destination.clone());
        destination
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist(places: &[&str]) -> TravelChecklist {
        let mut list = TravelChecklist::new();
        for (offset, place) in places.iter().enumerate() {
            list.add_at(place, 1_000 + offset as i64);
        }
        list
    }

    fn places(list: &TravelChecklist) -> Vec<&str> {
        list.destinations().iter().map(TravelDestination::place).collect()
    }

    #[test]
    fn test_starts_empty() {
        assert!(TravelChecklist::new().is_empty());
    }

    #[test]
    fn test_add_trims_and_appends() {
        let mut list = checklist(&["Kyoto"]);
        let added = list.add(" Lisbon  ").unwrap();
        assert_eq!(added.place(), "Lisbon");
        assert!(!added.completed());
        assert_eq!(places(&list), vec!["Kyoto", "Lisbon"]);
    }

    #[test]
    fn test_add_blank_is_noop() {
        let mut list = checklist(&["Kyoto"]);
        let before = list.snapshot();
        assert!(list.add("   ").is_none());
        assert!(list.add_at("", 5_000).is_none());
        assert!(Arc::ptr_eq(&before, &list.snapshot()));
    }

    #[test]
    fn test_ids_unique_within_same_millisecond() {
        let mut list = TravelChecklist::new();
        let a = list.add_at("Rome", 7).unwrap();
        let b = list.add_at("Oslo", 7).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_toggle_visited() {
        let mut list = checklist(&["Kyoto", "Lima"]);
        let lima = list.destinations()[1].id().clone();
        assert_eq!(list.toggle(&lima), Some(true));
        assert_eq!(list.visited_count(), 1);
        assert!(!list.destinations()[0].completed());
        assert_eq!(list.toggle(&lima), Some(false));
        assert_eq!(list.toggle(&DestinationId::new("nope")), None);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut list = checklist(&["Kyoto", "Lima", "Cairo"]);
        let lima = list.destinations()[1].id().clone();
        assert_eq!(list.delete(&lima).map(|d| d.place().to_string()), Some("Lima".into()));
        assert_eq!(places(&list), vec!["Kyoto", "Cairo"]);
        assert!(list.delete(&lima).is_none());
        assert!(list.get(&lima).is_none());
    }
}
