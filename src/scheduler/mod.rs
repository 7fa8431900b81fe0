//! Schedule search: combiner, conflict filtering, enumeration.
//!
//! # Algorithm
//!
//! [`SectionCombinations`] lazily walks the Cartesian product of each
//! requested course's section list; [`enumerate`] filters it through the
//! full pairwise conflict check on [`ScheduleCandidate`]. Exhaustive rather
//! than heuristic — the product is bounded by per-course section counts,
//! which stay in the tens to low hundreds for a real term. Callers with
//! pathological inputs should cap the product via
//! [`SectionCombinations::total`] before iterating.

mod candidate;
mod combine;
mod enumerate;
mod request;

pub use candidate::{ScheduleCandidate, SectionPick};
pub use combine::SectionCombinations;
pub use enumerate::{enumerate, Enumeration};
pub use request::ScheduleRequest;
