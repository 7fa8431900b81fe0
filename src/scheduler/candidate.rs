//! Schedule candidates and the conflict check.
//!
//! A candidate is one complete assignment: exactly one chosen section per
//! requested course, ordered by course identifier. Validity is a full
//! pairwise test — no two chosen sections may share an overlapping meeting
//! block on any weekday.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Section;

/// One course's chosen section within a candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionPick {
    /// Course identifier.
    pub course_id: String,
    /// The section chosen for that course.
    pub section: Section,
}

/// One complete assignment of sections to all requested courses.
///
/// Picks are ordered by course identifier (the request's canonical order).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleCandidate {
    /// Chosen sections, one per requested course.
    pub picks: Vec<SectionPick>,
}

impl ScheduleCandidate {
    /// Whether no pair of chosen sections conflicts.
    ///
    /// Checks every unordered pair of distinct courses; exits on the first
    /// conflict found.
    pub fn is_conflict_free(&self) -> bool {
        for (i, a) in self.picks.iter().enumerate() {
            for b in &self.picks[i + 1..] {
                if a.section.conflicts_with(&b.section) {
                    return false;
                }
            }
        }
        true
    }

    /// The chosen section identifier for a course, if the course is part of
    /// this candidate.
    pub fn section_id_for(&self, course_id: &str) -> Option<&str> {
        self.picks
            .iter()
            .find(|p| p.course_id == course_id)
            .map(|p| p.section.id.as_str())
    }

    /// The minimal display form: course identifier → chosen section
    /// identifier. This is what the presentation layer renders as text or
    /// JSON.
    pub fn selections(&self) -> BTreeMap<&str, &str> {
        self.picks
            .iter()
            .map(|p| (p.course_id.as_str(), p.section.id.as_str()))
            .collect()
    }

    /// Number of courses in this candidate.
    pub fn len(&self) -> usize {
        self.picks.len()
    }

    /// Whether the candidate assigns no courses.
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }
}
