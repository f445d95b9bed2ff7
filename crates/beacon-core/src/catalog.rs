//! The campus event catalog shown by the landing-page carousel.
//!
//! The catalog is a fixed, ordered list established at compile time. Entries
//! are never added, removed, or reordered at runtime; the carousel only moves
//! a cursor over them.

/// A single event in the catalog.
///
/// All fields are opaque display text except `id` (stable ordering key) and
/// `registration_url` (handed to the system browser, never parsed).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventEntry {
    pub id: u32,
    pub title: &'static str,
    pub date: &'static str,
    pub time: &'static str,
    pub venue: &'static str,
    pub discipline: &'static str,
    /// Banner glyphs standing in for the event's poster art.
    pub art: &'static str,
    pub registration_url: &'static str,
}

/// The ongoing-events catalog, in display order.
pub const EVENTS: &[EventEntry] = &[
    EventEntry {
        id: 1,
        title: "Tech Fest 2025",
        date: "March 15-18, 2025",
        time: "10:00 AM",
        venue: "Main Auditorium",
        discipline: "Technology",
        art: "░▒▓ TECH FEST ▓▒░",
        registration_url: "https://beacon.example.edu/events/tech-fest",
    },
    EventEntry {
        id: 2,
        title: "Cultural Night",
        date: "March 25, 2025",
        time: "7:00 PM",
        venue: "Open Air Theatre",
        discipline: "Arts & Culture",
        art: "✦ ✧ CULTURAL NIGHT ✧ ✦",
        registration_url: "https://beacon.example.edu/events/cultural-night",
    },
    EventEntry {
        id: 3,
        title: "Sports Meet",
        date: "March 22, 2025",
        time: "9:00 AM",
        venue: "Sports Complex",
        discipline: "Athletics",
        art: "── SPORTS MEET ──",
        registration_url: "https://beacon.example.edu/events/sports-meet",
    },
    EventEntry {
        id: 4,
        title: "Seminar Series",
        date: "March 25, 2025",
        time: "2:00 PM",
        venue: "Lecture Hall A",
        discipline: "Academics",
        art: "≡ SEMINAR SERIES ≡",
        registration_url: "https://beacon.example.edu/events/seminar-series",
    },
    EventEntry {
        id: 5,
        title: "Robotics Workshop",
        date: "April 1-2, 2025",
        time: "10:00 AM",
        venue: "Engineering Lab",
        discipline: "Robotics",
        art: "▣ ROBOTICS WORKSHOP ▣",
        registration_url: "https://beacon.example.edu/events/robotics-workshop",
    },
    EventEntry {
        id: 6,
        title: "Fashion Show",
        date: "April 8, 2025",
        time: "6:00 PM",
        venue: "Convention Center",
        discipline: "Fashion",
        art: "◆ FASHION SHOW ◆",
        registration_url: "https://beacon.example.edu/events/fashion-show",
    },
    EventEntry {
        id: 7,
        title: "Management Summit",
        date: "April 12-13, 2025",
        time: "9:00 AM",
        venue: "Business Block",
        discipline: "Management",
        art: "▲ MANAGEMENT SUMMIT ▲",
        registration_url: "https://beacon.example.edu/events/management-summit",
    },
    EventEntry {
        id: 8,
        title: "Art Exhibition",
        date: "April 15-20, 2025",
        time: "All Day",
        venue: "Art Gallery",
        discipline: "Fine Arts",
        art: "░ ART EXHIBITION ░",
        registration_url: "https://beacon.example.edu/events/art-exhibition",
    },
    EventEntry {
        id: 9,
        title: "Electrical Workshop",
        date: "April 22, 2025",
        time: "10:00 AM",
        venue: "EE Lab",
        discipline: "Electrical Engineering",
        art: "⚡ ELECTRICAL WORKSHOP ⚡",
        registration_url: "https://beacon.example.edu/events/electrical-workshop",
    },
    EventEntry {
        id: 10,
        title: "Music Concert",
        date: "April 28, 2025",
        time: "7:00 PM",
        venue: "Main Stage",
        discipline: "Music",
        art: "♪ ♫ MUSIC CONCERT ♫ ♪",
        registration_url: "https://beacon.example.edu/events/music-concert",
    },
];

/// Registered societies offered by the club login form.
pub const SOCIETIES: &[&str] = &[
    "Robotics Club",
    "Cultural Society",
    "Sports Committee",
    "Tech Club",
    "Literary Society",
    "Music Club",
    "Dance Society",
    "Photography Club",
    "Drama Club",
    "Entrepreneurship Cell",
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_catalog_is_non_empty() {
        assert!(!EVENTS.is_empty());
    }

    #[test]
    fn test_catalog_ids_are_unique_and_ordered() {
        let ids: Vec<u32> = EVENTS.iter().map(|e| e.id).collect();
        let unique: HashSet<u32> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len());

        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, ids);
    }

    #[test]
    fn test_societies_are_listed() {
        assert_eq!(SOCIETIES.len(), 10);
        assert_eq!(SOCIETIES[0], "Robotics Club");
    }

    #[test]
    fn test_catalog_has_ten_entries_with_display_text() {
        assert_eq!(EVENTS.len(), 10);
        for event in EVENTS {
            assert!(!event.title.is_empty());
            assert!(!event.venue.is_empty());
            assert!(!event.registration_url.is_empty());
        }
    }
}
