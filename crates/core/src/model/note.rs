use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{CourseId, LessonId, NoteId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NoteError {
    #[error("note content cannot be empty")]
    EmptyContent,
}

/// Note body that is known to contain something besides whitespace.
///
/// The text is kept verbatim; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteContent(String);

impl NoteContent {
    /// # Errors
    ///
    /// Returns `NoteError::EmptyContent` for empty or whitespace-only input.
    pub fn parse(raw: impl Into<String>) -> Result<Self, NoteError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(NoteError::EmptyContent);
        }
        Ok(Self(raw))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// A free-text note attached to one lesson of one course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserNote {
    pub id: NoteId,
    pub lesson_id: LessonId,
    pub course_id: CourseId,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserNote {
    #[must_use]
    pub fn new(
        id: NoteId,
        course_id: CourseId,
        lesson_id: LessonId,
        content: NoteContent,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            lesson_id,
            course_id,
            content: content.into_inner(),
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn belongs_to(&self, course_id: &CourseId, lesson_id: &LessonId) -> bool {
        &self.course_id == course_id && &self.lesson_id == lesson_id
    }

    pub fn edit(&mut self, content: NoteContent, now: DateTime<Utc>) {
        self.content = content.into_inner();
        self.updated_at = now;
    }

    #[must_use]
    pub fn was_edited(&self) -> bool {
        self.updated_at > self.created_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    #[test]
    fn content_rejects_whitespace_only() {
        assert_eq!(NoteContent::parse(" \n\t ").unwrap_err(), NoteError::EmptyContent);
        assert_eq!(NoteContent::parse("").unwrap_err(), NoteError::EmptyContent);
    }

    #[test]
    fn content_is_kept_verbatim() {
        let content = NoteContent::parse("  hooks run in order \n").unwrap();
        assert_eq!(content.as_str(), "  hooks run in order \n");
    }

    #[test]
    fn edit_touches_only_content_and_updated_at() {
        let now = fixed_now();
        let mut note = UserNote::new(
            NoteId::new("n1"),
            CourseId::new("1"),
            LessonId::new("1-1"),
            NoteContent::parse("first").unwrap(),
            now,
        );
        assert!(!note.was_edited());

        let later = now + Duration::minutes(3);
        note.edit(NoteContent::parse("second").unwrap(), later);

        assert_eq!(note.content, "second");
        assert_eq!(note.created_at, now);
        assert_eq!(note.updated_at, later);
        assert!(note.was_edited());
        assert!(note.belongs_to(&CourseId::new("1"), &LessonId::new("1-1")));
    }
}
