//! Error types for course-sched.
//!
//! All failures are detected eagerly at the boundary of each operation and
//! propagated unmodified; the crate performs no retries and no internal
//! recovery. An enumeration that finds no conflict-free schedule is a
//! legitimate empty result, not an error.

use thiserror::Error;

/// Result type for course-sched operations.
pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Errors surfaced by catalog construction and schedule enumeration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// A requested course identifier is absent from the catalog.
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// A schedule search was started with no requested courses.
    #[error("requested course set is empty")]
    EmptyRequest,

    /// Upstream course data violates a structural invariant
    /// (meeting start >= end, duplicate section ID, duplicate course ID).
    #[error("malformed course data: {0}")]
    MalformedData(String),
}
