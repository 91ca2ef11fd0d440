use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::model::ids::{CourseId, LessonId};

/// Minutes credited to `time_spent` for every lesson completion event.
pub const MINUTES_PER_COMPLETION: u32 = 5;

/// Percentage of `total` lessons covered by `completed`, rounded half-up.
///
/// Returns 0 for a course without lessons.
#[must_use]
pub fn progress_percent(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total);
    // round(100 * c / t) == floor((200 * c + t) / (2 * t))
    let pct = (200 * completed + total) / (2 * total);
    u8::try_from(pct).unwrap_or(100)
}

/// A user's enrollment in one course and their progress through it.
///
/// `progress` is derived from `completed_lessons` and only changes through
/// [`EnrolledCourse::record_completion`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrolledCourse {
    course_id: CourseId,
    progress: u8,
    #[serde(
        default,
        serialize_with = "serialize_last_lesson",
        deserialize_with = "deserialize_last_lesson"
    )]
    last_lesson_id: Option<LessonId>,
    time_spent: u32,
    completed_lessons: Vec<LessonId>,
    enrolled_at: DateTime<Utc>,
}

impl EnrolledCourse {
    /// A fresh enrollment: nothing completed, no time spent.
    #[must_use]
    pub fn new(course_id: CourseId, enrolled_at: DateTime<Utc>) -> Self {
        Self {
            course_id,
            progress: 0,
            last_lesson_id: None,
            time_spent: 0,
            completed_lessons: Vec::new(),
            enrolled_at,
        }
    }

    /// Rebuild an enrollment from known history, deriving progress.
    ///
    /// Duplicate lesson ids are dropped, keeping the first occurrence.
    #[must_use]
    pub fn with_history(
        course_id: CourseId,
        enrolled_at: DateTime<Utc>,
        completed: impl IntoIterator<Item = LessonId>,
        last_lesson_id: Option<LessonId>,
        time_spent: u32,
        total_lessons: usize,
    ) -> Self {
        let mut completed_lessons: Vec<LessonId> = Vec::new();
        for lesson in completed {
            if !completed_lessons.contains(&lesson) {
                completed_lessons.push(lesson);
            }
        }
        Self {
            progress: progress_percent(completed_lessons.len(), total_lessons),
            course_id,
            last_lesson_id,
            time_spent,
            completed_lessons,
            enrolled_at,
        }
    }

    /// Apply one completion event for `lesson_id`.
    ///
    /// Membership has set semantics, but `last_lesson_id` and `time_spent`
    /// are updated on every call, including repeats.
    pub fn record_completion(&mut self, lesson_id: LessonId, total_lessons: usize) {
        if !self.completed_lessons.contains(&lesson_id) {
            self.completed_lessons.push(lesson_id.clone());
        }
        self.progress = progress_percent(self.completed_lessons.len(), total_lessons);
        self.last_lesson_id = Some(lesson_id);
        self.time_spent = self.time_spent.saturating_add(MINUTES_PER_COMPLETION);
    }

    #[must_use]
    pub fn course_id(&self) -> &CourseId {
        &self.course_id
    }

    #[must_use]
    pub fn progress(&self) -> u8 {
        self.progress
    }

    #[must_use]
    pub fn last_lesson_id(&self) -> Option<&LessonId> {
        self.last_lesson_id.as_ref()
    }

    /// Minutes spent in the course.
    #[must_use]
    pub fn time_spent(&self) -> u32 {
        self.time_spent
    }

    /// Completed lesson ids in completion order.
    #[must_use]
    pub fn completed_lessons(&self) -> &[LessonId] {
        &self.completed_lessons
    }

    #[must_use]
    pub fn has_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed_lessons.contains(lesson_id)
    }

    #[must_use]
    pub fn enrolled_at(&self) -> DateTime<Utc> {
        self.enrolled_at
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress >= 100
    }
}

// Persisted records use "" for "no lesson yet".
fn serialize_last_lesson<S>(value: &Option<LessonId>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_ref().map_or("", LessonId::as_str))
}

fn deserialize_last_lesson<'de, D>(deserializer: D) -> Result<Option<LessonId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|s| !s.is_empty()).map(LessonId::new))
}
