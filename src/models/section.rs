//! Section model.
//!
//! A section is one offered instance of a course: its own identifier and an
//! ordered list of weekly meeting times. A section with no meeting times is
//! an online/asynchronous offering and can never conflict with anything.

use serde::{Deserialize, Serialize};

use super::MeetingTime;

/// One offered instance of a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier (unique within its course).
    pub id: String,
    /// Instructor name, when the portal lists one.
    pub instructor: Option<String>,
    /// Weekly meeting blocks, in scrape order. Empty = online section.
    pub meetings: Vec<MeetingTime>,
}

impl Section {
    /// Creates a section with no meetings.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            instructor: None,
            meetings: Vec::new(),
        }
    }

    /// Sets the instructor name.
    pub fn with_instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = Some(instructor.into());
        self
    }

    /// Adds a meeting block.
    pub fn with_meeting(mut self, meeting: MeetingTime) -> Self {
        self.meetings.push(meeting);
        self
    }

    /// Whether this section has no scheduled meetings (online/async).
    #[inline]
    pub fn is_online(&self) -> bool {
        self.meetings.is_empty()
    }

    /// Number of weekly meeting blocks.
    #[inline]
    pub fn meeting_count(&self) -> usize {
        self.meetings.len()
    }

    /// Whether any meeting of this section overlaps any meeting of `other`.
    ///
    /// Vacuously false when either section is online.
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.meetings
            .iter()
            .any(|a| other.meetings.iter().any(|b| a.overlaps(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, TimeOfDay};

    fn mt(day: Day, sh: u8, eh: u8) -> MeetingTime {
        MeetingTime::new(day, TimeOfDay::hm(sh, 0), TimeOfDay::hm(eh, 0)).unwrap()
    }

    #[test]
    fn test_section_builder() {
        let s = Section::new("1")
            .with_instructor("Dr. Smith")
            .with_meeting(mt(Day::Mon, 9, 10))
            .with_meeting(mt(Day::Wed, 9, 10));

        assert_eq!(s.id, "1");
        assert_eq!(s.instructor.as_deref(), Some("Dr. Smith"));
        assert_eq!(s.meeting_count(), 2);
        assert!(!s.is_online());
    }

    #[test]
    fn test_conflicts_with() {
        let a = Section::new("1").with_meeting(mt(Day::Mon, 9, 11));
        let b = Section::new("2").with_meeting(mt(Day::Mon, 10, 12));
        let c = Section::new("3").with_meeting(mt(Day::Mon, 11, 13));

        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
        assert!(!a.conflicts_with(&c)); // touching at 11:00
    }

    #[test]
    fn test_conflict_on_any_meeting_pair() {
        // First meetings disjoint, second pair collides
        let a = Section::new("1")
            .with_meeting(mt(Day::Mon, 8, 9))
            .with_meeting(mt(Day::Thu, 14, 16));
        let b = Section::new("2")
            .with_meeting(mt(Day::Tue, 8, 9))
            .with_meeting(mt(Day::Thu, 15, 17));

        assert!(a.conflicts_with(&b));
    }

    #[test]
    fn test_online_section_never_conflicts() {
        let online = Section::new("web");
        let busy = Section::new("1")
            .with_meeting(mt(Day::Mon, 8, 18))
            .with_meeting(mt(Day::Tue, 8, 18));

        assert!(online.is_online());
        assert!(!online.conflicts_with(&busy));
        assert!(!busy.conflicts_with(&online));
        assert!(!online.conflicts_with(&online));
    }
}
