//! Weekday and meeting-time models.
//!
//! A meeting time is one weekly recurring block: a weekday plus a half-open
//! time-of-day interval `[start, end)`. Two meetings conflict iff they fall
//! on the same weekday and their intervals intersect; back-to-back blocks
//! (one ending exactly when the other starts) do not conflict.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// Day of the week a section meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    /// Parses a single-letter portal day code.
    ///
    /// The registration portal lists meeting days as letter strings
    /// ("MWF", "TR"); `R` is Thursday and `U` is Sunday.
    pub fn from_code(code: char) -> Option<Self> {
        match code.to_ascii_uppercase() {
            'M' => Some(Day::Mon),
            'T' => Some(Day::Tue),
            'W' => Some(Day::Wed),
            'R' => Some(Day::Thu),
            'F' => Some(Day::Fri),
            'S' => Some(Day::Sat),
            'U' => Some(Day::Sun),
            _ => None,
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        };
        f.write_str(name)
    }
}

/// A time of day, stored as minutes since midnight.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Creates a time of day from hour and minute.
    ///
    /// The components are combined as total minutes since midnight, so
    /// out-of-range values carry rather than fail: `hm(9, 75)` is the same
    /// instant as `hm(10, 15)`. Ordering and overlap checks only ever
    /// compare totals; the portal scraper supplies in-range values.
    pub fn hm(hour: u8, minute: u8) -> Self {
        Self(u16::from(hour) * 60 + u16::from(minute))
    }

    /// Creates a time of day from raw minutes since midnight.
    pub fn from_minutes(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Minutes since midnight.
    #[inline]
    pub fn minutes(&self) -> u16 {
        self.0
    }

    /// Hour component (0-23 for in-range values).
    #[inline]
    pub fn hour(&self) -> u16 {
        self.0 / 60
    }

    /// Minute component (0-59).
    #[inline]
    pub fn minute(&self) -> u16 {
        self.0 % 60
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// A weekly recurring meeting block: weekday + half-open interval
/// `[start, end)`.
///
/// Immutable once constructed; `start < end` is enforced at construction
/// and re-checked by catalog validation (deserialized values bypass the
/// constructor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MeetingTime {
    /// Weekday the meeting recurs on.
    pub day: Day,
    /// Start of the block (inclusive).
    pub start: TimeOfDay,
    /// End of the block (exclusive).
    pub end: TimeOfDay,
}

impl MeetingTime {
    /// Creates a meeting time.
    ///
    /// Fails with [`ScheduleError::MalformedData`] if `start >= end`.
    pub fn new(day: Day, start: TimeOfDay, end: TimeOfDay) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::MalformedData(format!(
                "meeting time on {day} has start {start} >= end {end}"
            )));
        }
        Ok(Self { day, start, end })
    }

    /// Length of the block in minutes.
    #[inline]
    pub fn duration_min(&self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Whether two meeting blocks overlap.
    ///
    /// True iff both fall on the same weekday and the half-open intervals
    /// intersect. Touching blocks (`self.end == other.start`) do not
    /// overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.day == other.day && self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for MeetingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}-{}", self.day, self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mt(day: Day, sh: u8, sm: u8, eh: u8, em: u8) -> MeetingTime {
        MeetingTime::new(day, TimeOfDay::hm(sh, sm), TimeOfDay::hm(eh, em)).unwrap()
    }

    #[test]
    fn test_time_of_day() {
        let t = TimeOfDay::hm(9, 30);
        assert_eq!(t.minutes(), 570);
        assert_eq!(t.hour(), 9);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.to_string(), "09:30");
        assert!(TimeOfDay::hm(9, 0) < TimeOfDay::hm(10, 0));
        assert_eq!(TimeOfDay::from_minutes(570), t);
    }

    #[test]
    fn test_time_of_day_minutes_carry() {
        assert_eq!(TimeOfDay::hm(9, 75), TimeOfDay::hm(10, 15));
        assert_eq!(TimeOfDay::hm(9, 75).to_string(), "10:15");
    }

    #[test]
    fn test_day_from_code() {
        assert_eq!(Day::from_code('M'), Some(Day::Mon));
        assert_eq!(Day::from_code('R'), Some(Day::Thu));
        assert_eq!(Day::from_code('U'), Some(Day::Sun));
        assert_eq!(Day::from_code('f'), Some(Day::Fri)); // case-insensitive
        assert_eq!(Day::from_code('X'), None);
    }

    #[test]
    fn test_meeting_rejects_inverted() {
        let err = MeetingTime::new(Day::Mon, TimeOfDay::hm(10, 0), TimeOfDay::hm(9, 0));
        assert!(matches!(err, Err(ScheduleError::MalformedData(_))));

        // Zero-length block is also malformed
        let err = MeetingTime::new(Day::Mon, TimeOfDay::hm(9, 0), TimeOfDay::hm(9, 0));
        assert!(matches!(err, Err(ScheduleError::MalformedData(_))));
    }

    #[test]
    fn test_overlap_same_day() {
        let a = mt(Day::Mon, 9, 0, 9, 50);
        let b = mt(Day::Mon, 9, 30, 10, 20);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a)); // symmetric

        let c = mt(Day::Mon, 10, 0, 10, 50);
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_overlap_different_days_never() {
        let a = mt(Day::Mon, 9, 0, 9, 50);
        let b = mt(Day::Tue, 9, 0, 9, 50);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_touching_blocks_do_not_overlap() {
        let a = mt(Day::Wed, 9, 0, 10, 0);
        let b = mt(Day::Wed, 10, 0, 11, 0); // starts exactly at a's end
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = mt(Day::Fri, 8, 0, 12, 0);
        let inner = mt(Day::Fri, 9, 0, 10, 0);
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_duration_and_display() {
        let a = mt(Day::Mon, 9, 0, 9, 50);
        assert_eq!(a.duration_min(), 50);
        assert_eq!(a.to_string(), "Mon 09:00-09:50");
    }
}
