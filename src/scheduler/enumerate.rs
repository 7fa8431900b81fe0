//! Schedule enumeration.
//!
//! Drives the section combiner and the conflict check together: generate
//! every one-section-per-course candidate in deterministic order, keep the
//! conflict-free ones. Pure and stateless — repeated calls over the same
//! request and catalog produce identical output.

use log::debug;

use crate::error::{Result, ScheduleError};
use crate::models::Catalog;

use super::{ScheduleCandidate, ScheduleRequest, SectionCombinations};

/// Outcome of a schedule search.
///
/// An empty `schedules` list is a legitimate result, with two distinct
/// causes the caller can tell apart: `candidates_examined == 0` means no
/// combination existed at all (some requested course offers no sections),
/// while `candidates_examined > 0` means every combination double-booked
/// time somewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct Enumeration {
    /// Conflict-free schedules, in generation order.
    pub schedules: Vec<ScheduleCandidate>,
    /// How many candidates the combiner produced before filtering.
    pub candidates_examined: usize,
}

impl Enumeration {
    /// Whether any conflict-free schedule was found.
    pub fn has_schedules(&self) -> bool {
        !self.schedules.is_empty()
    }

    /// Whether the combiner had anything to examine at all.
    pub fn had_candidates(&self) -> bool {
        self.candidates_examined > 0
    }
}

/// Enumerates every conflict-free schedule for the requested courses.
///
/// Fails with [`ScheduleError::EmptyRequest`] when nothing was requested
/// and with [`ScheduleError::CourseNotFound`] when a requested identifier
/// is absent from the catalog; in both cases no partial results are
/// produced. Otherwise returns all valid candidates in the combiner's
/// deterministic order.
pub fn enumerate(request: &ScheduleRequest, catalog: &Catalog) -> Result<Enumeration> {
    if request.is_empty() {
        return Err(ScheduleError::EmptyRequest);
    }

    let combinations = SectionCombinations::new(request, catalog)?;

    let mut candidates_examined = 0;
    let mut schedules = Vec::new();
    for candidate in combinations {
        candidates_examined += 1;
        if candidate.is_conflict_free() {
            schedules.push(candidate);
        }
    }

    debug!(
        "enumerated {} candidates for {} courses, {} conflict-free",
        candidates_examined,
        request.len(),
        schedules.len()
    );

    Ok(Enumeration {
        schedules,
        candidates_examined,
    })
}
