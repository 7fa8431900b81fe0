//! Schedule request model.
//!
//! The set of course identifiers a user wants on one timetable. Duplicates
//! collapse; iteration is in sorted identifier order, which fixes the
//! canonical course ordering for enumeration and makes output reproducible
//! regardless of input order.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// The user-chosen set of courses for which a schedule is sought.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRequest {
    course_ids: BTreeSet<String>,
}

impl ScheduleRequest {
    /// Creates an empty request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from any collection of course identifiers.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            course_ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Adds a course identifier.
    pub fn with_course(mut self, course_id: impl Into<String>) -> Self {
        self.course_ids.insert(course_id.into());
        self
    }

    /// Requested identifiers in sorted (canonical) order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.course_ids.iter().map(String::as_str)
    }

    /// Whether a course is part of the request.
    pub fn contains(&self, course_id: &str) -> bool {
        self.course_ids.contains(course_id)
    }

    /// Number of distinct requested courses.
    pub fn len(&self) -> usize {
        self.course_ids.len()
    }

    /// Whether nothing has been requested.
    pub fn is_empty(&self) -> bool {
        self.course_ids.is_empty()
    }
}
