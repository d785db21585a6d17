//! Frontend Models
//!
//! Screen routing. Domain data comes from `bucket_core`.

use bucket_core::TravelDestination;

/// A screen of the app
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Home,
    BucketList,
    TravelList,
    /// Detail view; the destination is passed by value as the route parameter
    DestinationDetail(TravelDestination),
}

impl Screen {
    pub fn title(&self) -> String {
        match self {
            Screen::Home => "Home".to_string(),
            Screen::BucketList => "Bucket List".to_string(),
            Screen::TravelList => "Travel List".to_string(),
            Screen::DestinationDetail(destination) => destination.place().to_string(),
        }
    }
}

/// Stack navigation; the home screen is always at the bottom
#[derive(Debug, Clone, PartialEq)]
pub struct NavStack {
    root: Screen,
    above: Vec<Screen>,
}

impl Default for NavStack {
    fn default() -> Self {
        Self {
            root: Screen::Home,
            above: Vec::new(),
        }
    }
}

impl NavStack {
    pub fn push(&mut self, screen: Screen) {
        self.above.push(screen);
    }

    /// Pop the top screen; the root is never popped
    pub fn pop(&mut self) -> Option<Screen> {
        self.above.pop()
    }

    pub fn top(&self) -> &Screen {
        self.above.last().unwrap_or(&self.root)
    }

    pub fn depth(&self) -> usize {
        self.above.len() + 1
    }

    pub fn contains(&self, screen: &Screen) -> bool {
        self.root == *screen || self.above.contains(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_home() {
        let stack = NavStack::default();
        assert_eq!(stack.top(), &Screen::Home);
        assert_eq!(stack.depth(), 1);
    }

    #[test]
    fn test_root_is_never_popped() {
        let mut stack = NavStack::default();
        stack.push(Screen::BucketList);
        assert_eq!(stack.pop(), Some(Screen::BucketList));
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.top(), &Screen::Home);
    }

    #[test]
    fn test_top_after_popping_everything() {
        let mut stack = NavStack::default();
        stack.push(Screen::TravelList);
        stack.push(Screen::BucketList);
        for _ in 0..5 {
            stack.pop();
        }
        assert_eq!(stack.top(), &Screen::Home);
        assert_eq!(stack.depth(), 1);
        assert!(stack.contains(&Screen::Home));
        assert!(!stack.contains(&Screen::TravelList));
    }

    #[test]
    fn test_travel_list_stays_below_detail() {
        let mut travel = bucket_core::TravelChecklist::new();
        let kyoto = travel.add("Kyoto").unwrap();

        let mut stack = NavStack::default();
        stack.push(Screen::TravelList);
        stack.push(Screen::DestinationDetail(kyoto));
        assert!(stack.contains(&Screen::TravelList));
        assert_eq!(stack.top().title(), "Kyoto");

        stack.pop();
        assert_eq!(stack.top(), &Screen::TravelList);
    }
}
