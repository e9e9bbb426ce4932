//! Course upload form parsing.
//!
//! Modules are entered one per line:
//!
//! ```text
//! Introduction to HTML & CSS | https://videos.example/1 | HTML Basics Guide.pdf; CSS Handbook.pdf
//! JavaScript Fundamentals | https://videos.example/2
//! ```
//!
//! Days follow line order starting at 1. Blank lines are skipped.

use serde::Deserialize;
use thiserror::Error;

use sankalp_core::CourseId;

use crate::backend::types::{NewCourse, NewModule};

pub const CREATE_FAILED: &str = "Failed to create course";

/// Success text shown after the backend creates a course.
#[must_use]
pub fn created_message(id: CourseId) -> String {
    format!("Course created successfully with ID: {id}")
}

/// Errors found while reading the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("Course title is required")]
    MissingTitle,

    #[error("Course description is required")]
    MissingDescription,

    #[error("Add at least one module")]
    NoModules,

    #[error("Module on line {line} needs a title")]
    MissingModuleTitle { line: usize },

    #[error("Module on line {line} needs a video URL")]
    MissingVideoUrl { line: usize },
}

/// Raw fields of the upload form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CourseDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub modules: String,
}

impl CourseDraft {
    /// Validate the form and build the create-course payload.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, checking course fields before modules.
    pub fn parse(&self) -> Result<NewCourse, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::MissingTitle);
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(DraftError::MissingDescription);
        }

        let modules = parse_modules(&self.modules)?;
        if modules.is_empty() {
            return Err(DraftError::NoModules);
        }

        Ok(NewCourse {
            title: title.to_string(),
            description: description.to_string(),
            thumbnail: self.thumbnail.trim().to_string(),
            modules,
        })
    }
}

fn parse_modules(text: &str) -> Result<Vec<NewModule>, DraftError> {
    let mut modules = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let line_no = index + 1;
        let mut parts = line.splitn(3, '|').map(str::trim);

        let title = parts.next().unwrap_or_default();
        if title.is_empty() {
            return Err(DraftError::MissingModuleTitle { line: line_no });
        }
        let video_url = parts.next().unwrap_or_default();
        if video_url.is_empty() {
            return Err(DraftError::MissingVideoUrl { line: line_no });
        }
        let materials = parts
            .next()
            .unwrap_or_default()
            .split(';')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from)
            .collect();

        let day = u32::try_from(modules.len() + 1).unwrap_or(u32::MAX);
        modules.push(NewModule {
            title: title.to_string(),
            day,
            video_url: video_url.to_string(),
            materials,
        });
    }

    Ok(modules)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn draft(modules: &str) -> CourseDraft {
        CourseDraft {
            title: " Full Stack Web Development ".to_string(),
            description: "Learn modern web development".to_string(),
            thumbnail: String::new(),
            modules: modules.to_string(),
        }
    }

    #[test]
    fn test_days_follow_line_order_skipping_blanks() {
        let course = draft(
            "HTML & CSS | https://v/1 | HTML Basics Guide.pdf; ; CSS Handbook.pdf\n\n  \nJavaScript | https://v/2\n",
        )
        .parse()
        .unwrap();

        assert_eq!(course.title, "Full Stack Web Development");
        assert_eq!(course.modules.len(), 2);
        assert_eq!(course.modules[0].day, 1);
        assert_eq!(
            course.modules[0].materials,
            ["HTML Basics Guide.pdf", "CSS Handbook.pdf"]
        );
        assert_eq!(course.modules[1].day, 2);
        assert!(course.modules[1].materials.is_empty());
    }

    #[test]
    fn test_missing_pieces_are_reported_by_line() {
        assert_eq!(
            draft("Intro | https://v/1\n | https://v/2").parse(),
            Err(DraftError::MissingModuleTitle { line: 2 })
        );
        assert_eq!(
            draft("Intro").parse(),
            Err(DraftError::MissingVideoUrl { line: 1 })
        );
        assert_eq!(draft("\n\n").parse(), Err(DraftError::NoModules));
    }

    #[test]
    fn test_course_fields_are_required() {
        let mut form = draft("Intro | https://v/1");
        form.description = "  ".to_string();
        assert_eq!(form.parse(), Err(DraftError::MissingDescription));
        form.title.clear();
        assert_eq!(form.parse(), Err(DraftError::MissingTitle));
    }

    #[test]
    fn test_payload_uses_backend_field_names() {
        let course = draft("Intro | https://v/1 | Notes.pdf").parse().unwrap();
        let body = serde_json::to_value(&course).unwrap();
        assert_eq!(body["modules"][0]["videoUrl"], "https://v/1");
        assert_eq!(body["thumbnail"], "");
        assert_eq!(created_message(CourseId::new(7)), "Course created successfully with ID: 7");
    }
}
