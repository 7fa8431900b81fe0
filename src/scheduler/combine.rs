//! Section combiner.
//!
//! Lazily walks the Cartesian product of each requested course's section
//! list: every way to take one section per course, with no conflict
//! filtering. Order is deterministic — courses in the request's canonical
//! (sorted) order, sections in catalog scrape order, the last course
//! varying fastest — so a fresh combiner over the same inputs replays the
//! same sequence.

use crate::error::Result;
use crate::models::{Catalog, Section};

use super::{ScheduleCandidate, ScheduleRequest, SectionPick};

/// Lazy iterator over every one-section-per-course assignment.
///
/// Built from a request and a catalog; every requested course is resolved
/// up front, so an unknown identifier fails before any candidate is
/// produced. A requested course with zero sections makes the whole product
/// empty.
#[derive(Debug, Clone)]
pub struct SectionCombinations<'a> {
    courses: Vec<(&'a str, &'a [Section])>,
    cursor: Vec<usize>,
    exhausted: bool,
}

impl<'a> SectionCombinations<'a> {
    /// Resolves the requested courses against the catalog.
    ///
    /// Fails with [`ScheduleError::CourseNotFound`](crate::ScheduleError::CourseNotFound)
    /// if any identifier is absent.
    pub fn new(request: &'a ScheduleRequest, catalog: &'a Catalog) -> Result<Self> {
        let mut courses = Vec::with_capacity(request.len());
        for course_id in request.course_ids() {
            courses.push((course_id, catalog.sections(course_id)?));
        }

        let exhausted = courses.is_empty() || courses.iter().any(|(_, s)| s.is_empty());
        let cursor = vec![0; courses.len()];

        Ok(Self {
            courses,
            cursor,
            exhausted,
        })
    }

    /// Size of the full product: one factor per course, its section count.
    ///
    /// Zero when any requested course has no sections (or nothing was
    /// requested). Saturates at `usize::MAX` instead of wrapping, so the
    /// count stays usable as a search-space cap for pathological catalogs.
    pub fn total(&self) -> usize {
        if self.courses.is_empty() {
            return 0;
        }
        self.courses
            .iter()
            .map(|(_, s)| s.len())
            .try_fold(1usize, |acc, n| acc.checked_mul(n))
            .unwrap_or(usize::MAX)
    }
}

impl Iterator for SectionCombinations<'_> {
    type Item = ScheduleCandidate;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let picks = self
            .courses
            .iter()
            .zip(&self.cursor)
            .map(|(&(course_id, sections), &i)| SectionPick {
                course_id: course_id.to_string(),
                section: sections[i].clone(),
            })
            .collect();

        // Odometer advance: last course ticks fastest.
        let mut pos = self.courses.len();
        loop {
            if pos == 0 {
                self.exhausted = true;
                break;
            }
            pos -= 1;
            self.cursor[pos] += 1;
            if self.cursor[pos] < self.courses[pos].1.len() {
                break;
            }
            self.cursor[pos] = 0;
        }

        Some(ScheduleCandidate { picks })
    }
}
