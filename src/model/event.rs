//! Recorded activity events and the feed filter

use serde::{Deserialize, Serialize};
use std::fmt;

/// What triggered a recording
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Motion,
    Sound,
    Person,
    Pet,
}

impl EventCategory {
    /// Feed headline for this category
    pub fn headline(&self) -> &'static str {
        match self {
            EventCategory::Motion => "Motion Detected",
            EventCategory::Sound => "Sound Detected",
            EventCategory::Person => "Person Detected",
            EventCategory::Pet => "Pet Detected",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            EventCategory::Motion => "≋",
            EventCategory::Sound => "♪",
            EventCategory::Person => "☺",
            EventCategory::Pet => "🐾",
        }
    }
}

/// A read-only recording event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordingEvent {
    pub id: String,
    /// Clock label ("14:42") or a relative label ("Yesterday")
    pub timestamp: String,
    pub duration: String,
    pub category: EventCategory,
    pub thumbnail_url: String,
    pub device_id: String,
    pub camera_name: String,
}

/// Feed filter chips, in display order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventFilter {
    #[default]
    All,
    Person,
    Motion,
    Sound,
    Pet,
}

impl EventFilter {
    pub const ALL: [EventFilter; 5] = [
        EventFilter::All,
        EventFilter::Person,
        EventFilter::Motion,
        EventFilter::Sound,
        EventFilter::Pet,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EventFilter::All => "all",
            EventFilter::Person => "person",
            EventFilter::Motion => "motion",
            EventFilter::Sound => "sound",
            EventFilter::Pet => "pet",
        }
    }

    pub fn matches(&self, event: &RecordingEvent) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::Person => event.category == EventCategory::Person,
            EventFilter::Motion => event.category == EventCategory::Motion,
            EventFilter::Sound => event.category == EventCategory::Sound,
            EventFilter::Pet => event.category == EventCategory::Pet,
        }
    }

    /// Parse a CLI/config label, case-insensitive
    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|f| f.label().eq_ignore_ascii_case(label.trim()))
    }

    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Apply the filter, preserving seed order
    pub fn apply<'a>(&self, events: &'a [RecordingEvent]) -> Vec<&'a RecordingEvent> {
        events.iter().filter(|e| self.matches(e)).collect()
    }
}

impl fmt::Display for EventFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed;

    #[test]
    fn filter_keeps_order_and_category() {
        let events = seed::events();
        let people = EventFilter::Person.apply(&events);
        let ids: Vec<_> = people.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["evt-1", "evt-6"]);

        assert_eq!(EventFilter::All.apply(&events).len(), events.len());
        assert_eq!(EventFilter::Pet.apply(&events).len(), 1);
    }

    #[test]
    fn filter_cycles() {
        assert_eq!(EventFilter::Pet.next(), EventFilter::All);
        assert_eq!(EventFilter::All.prev(), EventFilter::Pet);
        assert_eq!(EventFilter::parse("MOTION"), Some(EventFilter::Motion));
        assert_eq!(EventFilter::parse("vehicle"), None);
    }
}
