//! Course catalog domain models.
//!
//! Leaf data structures for one term's offerings: weekly meeting blocks,
//! sections, courses, and the catalog that indexes them. Everything is
//! immutable after construction and owned (`String`/`Vec` data only), so a
//! built [`Catalog`] can be shared read-only across threads.

mod catalog;
mod course;
mod meeting;
mod section;

pub use catalog::Catalog;
pub use course::Course;
pub use meeting::{Day, MeetingTime, TimeOfDay};
pub use section::Section;
