//! Catalog model.
//!
//! The catalog holds everything scraped for one term: courses in scrape
//! order, addressable by course identifier. It is built once per scrape,
//! validated eagerly, and never mutated afterwards — concurrent read-only
//! sharing across enumeration calls needs no locking.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{Result, ScheduleError};
use crate::validation::validate_courses;

use super::{Course, Section};

/// All courses and sections available for a term.
///
/// Serializes as its course list; to deserialize, read a `Vec<Course>` and
/// rebuild through [`Catalog::from_courses`] so validation and indexing run.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    courses: Vec<Course>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from scraped course records.
    ///
    /// Validates the records first (see [`validate_courses`]); the first
    /// structural problem found is returned as
    /// [`ScheduleError::MalformedData`]. Course and section ordering is
    /// preserved exactly as supplied.
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        validate_courses(&courses)?;

        let index = courses
            .iter()
            .enumerate()
            .map(|(i, c)| (c.id.clone(), i))
            .collect();

        Ok(Self { courses, index })
    }

    /// Looks up a course by identifier.
    ///
    /// Fails with [`ScheduleError::CourseNotFound`] if absent.
    pub fn lookup(&self, course_id: &str) -> Result<&Course> {
        self.index
            .get(course_id)
            .map(|&i| &self.courses[i])
            .ok_or_else(|| ScheduleError::CourseNotFound(course_id.to_string()))
    }

    /// Returns a course's sections in scrape order.
    ///
    /// Fails with [`ScheduleError::CourseNotFound`] if absent.
    pub fn sections(&self, course_id: &str) -> Result<&[Section]> {
        self.lookup(course_id).map(|c| c.sections.as_slice())
    }

    /// Whether a course identifier exists in the catalog.
    pub fn contains(&self, course_id: &str) -> bool {
        self.index.contains_key(course_id)
    }

    /// Courses in scrape order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Course identifiers in scrape order.
    pub fn course_ids(&self) -> impl Iterator<Item = &str> {
        self.courses.iter().map(|c| c.id.as_str())
    }

    /// Number of courses.
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog holds no courses.
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}
