use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::{AuthorId, CategoryId, CourseId, LessonId};

//
// ─── AUTHOR ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub name: String,
    pub avatar: String,
}

//
// ─── CATEGORY ──────────────────────────────────────────────────────────────────
//

/// A catalog category. Routes refer to categories by `slug`, courses by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    /// Presentation color token (e.g. `bg-blue-500`).
    pub color: String,
}

//
// ─── LESSON ────────────────────────────────────────────────────────────────────
//

/// A single video lesson. Identity is scoped to the owning course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    pub description: String,
    pub video_url: String,
    /// Length in minutes.
    pub duration: u32,
    pub order: u32,
}

//
// ─── COURSE ────────────────────────────────────────────────────────────────────
//

/// Immutable fixture course with its ordered lessons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub long_description: Option<String>,
    pub author: Author,
    pub thumbnail: String,
    pub rating: f32,
    pub total_ratings: u32,
    pub enrollments: u32,
    pub categories: Vec<CategoryId>,
    pub syllabus: String,
    pub lessons: Vec<Lesson>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Course {
    #[must_use]
    pub fn lesson(&self, lesson_id: &LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| &lesson.id == lesson_id)
    }

    #[must_use]
    pub fn lesson_index(&self, lesson_id: &LessonId) -> Option<usize> {
        self.lessons.iter().position(|lesson| &lesson.id == lesson_id)
    }

    #[must_use]
    pub fn contains_lesson(&self, lesson_id: &LessonId) -> bool {
        self.lesson_index(lesson_id).is_some()
    }

    #[must_use]
    pub fn first_lesson(&self) -> Option<&Lesson> {
        self.lessons.first()
    }

    #[must_use]
    pub fn in_category(&self, category_id: &CategoryId) -> bool {
        self.categories.contains(category_id)
    }

    /// Sum of lesson durations in minutes.
    #[must_use]
    pub fn total_duration(&self) -> u32 {
        self.lessons.iter().map(|lesson| lesson.duration).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn lesson_lookup_is_course_scoped() {
        let catalog = fixtures::catalog();
        let course = catalog.course(&CourseId::new("1")).unwrap();

        assert_eq!(course.lesson_index(&LessonId::new("1-2")), Some(1));
        assert!(course.contains_lesson(&LessonId::new("1-1")));
        assert!(!course.contains_lesson(&LessonId::new("3-1")));
        assert_eq!(course.first_lesson().map(|l| l.id.as_str()), Some("1-1"));
    }

    #[test]
    fn total_duration_sums_lessons() {
        let catalog = fixtures::catalog();
        let course = catalog.course(&CourseId::new("1")).unwrap();
        assert_eq!(course.total_duration(), 15 + 22);
    }
}
