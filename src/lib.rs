//! Course timetable search.
//!
//! Given a term's course catalog — courses, their sections, and each
//! section's weekly meeting times — this crate enumerates every way to pick
//! exactly one section per requested course such that no two chosen sections
//! overlap in time on a shared weekday.
//!
//! Scraping the registration portal, term lookup, and presentation (CLI,
//! HTTP, JSON rendering) live outside this crate. It consumes already-parsed
//! course records and produces [`scheduler::ScheduleCandidate`] values, each
//! presentable as a course-id → section-id mapping.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Day`, `TimeOfDay`, `MeetingTime`,
//!   `Section`, `Course`, `Catalog`
//! - **`validation`**: Catalog integrity checks (duplicate IDs, meeting
//!   ordering)
//! - **`scheduler`**: `ScheduleRequest`, the section combiner, and the
//!   conflict-filtering enumerator
//! - **`error`**: Error taxonomy and the crate `Result` alias
//!
//! # Example
//!
//! ```
//! use course_sched::models::{Catalog, Course, Day, MeetingTime, Section, TimeOfDay};
//! use course_sched::scheduler::{enumerate, ScheduleRequest};
//!
//! let calc = Course::new("MAC2312").with_section(
//!     Section::new("1").with_meeting(
//!         MeetingTime::new(Day::Mon, TimeOfDay::hm(9, 0), TimeOfDay::hm(9, 50)).unwrap(),
//!     ),
//! );
//! let circuits = Course::new("EEL3112C").with_section(
//!     Section::new("1").with_meeting(
//!         MeetingTime::new(Day::Mon, TimeOfDay::hm(10, 0), TimeOfDay::hm(10, 50)).unwrap(),
//!     ),
//! );
//!
//! let catalog = Catalog::from_courses(vec![calc, circuits]).unwrap();
//! let request = ScheduleRequest::new()
//!     .with_course("MAC2312")
//!     .with_course("EEL3112C");
//!
//! let result = enumerate(&request, &catalog).unwrap();
//! assert_eq!(result.schedules.len(), 1);
//! ```

pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::{Result, ScheduleError};
