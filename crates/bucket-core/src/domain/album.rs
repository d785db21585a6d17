//! Destination Album
//!
//! Static tabbed content shown on a destination's detail screen.

const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/150";

/// Album tab on the destination detail screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AlbumTab {
    #[default]
    Hotels,
    Landmarks,
    Foods,
}

impl AlbumTab {
    pub const ALL: [AlbumTab; 3] = [AlbumTab::Hotels, AlbumTab::Landmarks, AlbumTab::Foods];

    pub fn as_str(&self) -> &'static str {
        match self {
            AlbumTab::Hotels => "hotels",
            AlbumTab::Landmarks => "landmarks",
            AlbumTab::Foods => "foods",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AlbumTab::Hotels => "Hotels",
            AlbumTab::Landmarks => "Landmarks",
            AlbumTab::Foods => "Foods",
        }
    }

    pub fn entries(&self) -> &'static [AlbumEntry] {
        match self {
            AlbumTab::Hotels => HOTELS,
            AlbumTab::Landmarks => LANDMARKS,
            AlbumTab::Foods => FOODS,
        }
    }

    pub fn empty_message(&self) -> String {
        format!("No {} added yet.", self.as_str())
    }
}

/// One card in an album tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlbumEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

const HOTELS: &[AlbumEntry] = &[
    AlbumEntry {
        id: "1",
        name: "Grand Hotel",
        image: PLACEHOLDER_IMAGE,
        description: "Luxury hotel in the heart of the city",
    },
    AlbumEntry {
        id: "2",
        name: "Seaside Resort",
        image: PLACEHOLDER_IMAGE,
        description: "Beautiful beachfront property",
    },
];

const LANDMARKS: &[AlbumEntry] = &[
    AlbumEntry {
        id: "1",
        name: "Historic Castle",
        image: PLACEHOLDER_IMAGE,
        description: "A castle dating back to the 12th century",
    },
    AlbumEntry {
        id: "2",
        name: "Famous Monument",
        image: PLACEHOLDER_IMAGE,
        description: "Iconic monument in the main square",
    },
];

const FOODS: &[AlbumEntry] = &[
    AlbumEntry {
        id: "1",
        name: "Local Cuisine",
        image: PLACEHOLDER_IMAGE,
        description: "Traditional dishes from the region",
    },
    AlbumEntry {
        id: "2",
        name: "Street Food Market",
        image: PLACEHOLDER_IMAGE,
        description: "Popular street food vendors",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tab_is_hotels() {
        assert_eq!(AlbumTab::default(), AlbumTab::Hotels);
    }

    #[test]
    fn test_each_tab_has_two_entries() {
        for tab in AlbumTab::ALL {
            assert_eq!(tab.entries().len(), 2, "{:?}", tab);
            assert!(tab.entries().iter().all(|e| e.image == PLACEHOLDER_IMAGE));
        }
        assert_eq!(AlbumTab::Landmarks.entries()[0].name, "Historic Castle");
        assert_eq!(AlbumTab::Foods.entries()[1].name, "Street Food Market");
    }

    #[test]
    fn test_empty_message_uses_tab_key() {
        assert_eq!(AlbumTab::Foods.empty_message(), "No foods added yet.");
        assert_eq!(AlbumTab::Hotels.label(), "Hotels");
    }
}
