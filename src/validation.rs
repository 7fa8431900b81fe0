//! Catalog input validation.
//!
//! Checks structural integrity of scraped course records before a catalog
//! is built. Detects:
//! - Duplicate course identifiers
//! - Duplicate section identifiers within a course
//! - Meeting times with `start >= end`
//!
//! Malformed upstream data is surfaced immediately and never silently
//! repaired; the first problem found is returned.

use std::collections::HashSet;

use log::debug;

use crate::error::{Result, ScheduleError};
use crate::models::Course;

/// Validates scraped course records.
///
/// Returns `Ok(())` if all checks pass, or the first
/// [`ScheduleError::MalformedData`] detected. Called by
/// [`Catalog::from_courses`](crate::models::Catalog::from_courses); exposed
/// for callers that want to vet records before building.
pub fn validate_courses(courses: &[Course]) -> Result<()> {
    let mut course_ids = HashSet::new();

    for course in courses {
        if !course_ids.insert(course.id.as_str()) {
            return Err(ScheduleError::MalformedData(format!(
                "duplicate course ID: {}",
                course.id
            )));
        }

        let mut section_ids = HashSet::new();
        for section in &course.sections {
            if !section_ids.insert(section.id.as_str()) {
                return Err(ScheduleError::MalformedData(format!(
                    "duplicate section ID '{}' in course {}",
                    section.id, course.id
                )));
            }

            // MeetingTime::new enforces this, but serde-deserialized
            // records never pass through the constructor.
            for meeting in &section.meetings {
                if meeting.start >= meeting.end {
                    return Err(ScheduleError::MalformedData(format!(
                        "course {} section {}: meeting on {} has start {} >= end {}",
                        course.id, section.id, meeting.day, meeting.start, meeting.end
                    )));
                }
            }
        }
    }

    debug!("validated {} course records", courses.len());
    Ok(())
}
