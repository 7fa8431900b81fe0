//! Course model.
//!
//! A course groups the sections offered under one catalog identifier
//! (subject + number, e.g. "MAC2312"). Section order is the scrape order
//! and is preserved; enumeration output ordering depends on it.

use serde::{Deserialize, Serialize};

use super::Section;

/// A catalog course with its offered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Course identifier (subject + number).
    pub id: String,
    /// Course title as listed by the portal.
    pub title: String,
    /// Credit hours.
    pub credits: u8,
    /// Offered sections, in scrape order, unique by section ID.
    pub sections: Vec<Section>,
}

impl Course {
    /// Creates a course with no sections.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: String::new(),
            credits: 0,
            sections: Vec::new(),
        }
    }

    /// Sets the course title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the credit hours.
    pub fn with_credits(mut self, credits: u8) -> Self {
        self.credits = credits;
        self
    }

    /// Adds a section.
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Finds a section by ID.
    pub fn section(&self, section_id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == section_id)
    }

    /// Whether this course has any sections.
    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// Number of offered sections.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}
