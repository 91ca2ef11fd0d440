use lms_core::media::MediaSource;
use services::LessonContext;

use crate::vm::time_fmt::format_minutes;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonStatus {
    Completed,
    Current,
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SidebarRowVm {
    pub id: String,
    pub title: String,
    pub duration_label: String,
    pub status: LessonStatus,
}

/// The button under the lesson list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SidebarAction {
    /// Complete this lesson, then open the next one.
    CompleteAndContinue,
    /// Last lesson: complete it and stay.
    MarkComplete,
}

impl SidebarAction {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            SidebarAction::CompleteAndContinue => "Mark Complete & Continue",
            SidebarAction::MarkComplete => "Mark as Complete",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonPageVm {
    pub course_id: String,
    pub course_title: String,
    pub lesson_id: String,
    pub title: String,
    pub description: String,
    pub media: MediaSource,
    pub previous_id: Option<String>,
    pub next_id: Option<String>,
    pub summary_label: String,
    pub progress: u8,
    pub rows: Vec<SidebarRowVm>,
    pub action: SidebarAction,
}

#[must_use]
pub fn map_lesson_page(context: &LessonContext) -> LessonPageVm {
    let rows = context
        .course
        .lessons
        .iter()
        .map(|lesson| {
            // A completed lesson shows as completed even while open.
            let status = if context.is_completed(&lesson.id) {
                LessonStatus::Completed
            } else if lesson.id == context.lesson.id {
                LessonStatus::Current
            } else {
                LessonStatus::Pending
            };
            SidebarRowVm {
                id: lesson.id.to_string(),
                title: lesson.title.clone(),
                duration_label: format_minutes(lesson.duration),
                status,
            }
        })
        .collect();

    LessonPageVm {
        course_id: context.course.id.to_string(),
        course_title: context.course.title.clone(),
        lesson_id: context.lesson.id.to_string(),
        title: context.lesson.title.clone(),
        description: context.lesson.description.clone(),
        media: MediaSource::classify(&context.lesson.video_url),
        previous_id: context.previous.as_ref().map(ToString::to_string),
        next_id: context.next.as_ref().map(ToString::to_string),
        summary_label: format!(
            "{} lessons • {} completed",
            context.course.lessons.len(),
            context.completed.len()
        ),
        progress: context.progress,
        rows,
        action: if context.is_last() {
            SidebarAction::MarkComplete
        } else {
            SidebarAction::CompleteAndContinue
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::fixtures;
    use lms_core::model::{CourseId, LessonId};
    use lms_core::navigation::LessonNeighbors;

    fn context(course_id: &str, lesson_id: &str, completed: &[&str]) -> LessonContext {
        let catalog = fixtures::catalog();
        let course = catalog.course(&CourseId::new(course_id)).unwrap().clone();
        let lesson_id = LessonId::new(lesson_id);
        let neighbors = LessonNeighbors::find(&course, &lesson_id).unwrap();
        let previous = neighbors.previous.map(|l| l.id.clone());
        let next = neighbors.next.map(|l| l.id.clone());
        let lesson = course.lesson(&lesson_id).unwrap().clone();
        LessonContext {
            previous,
            next,
            lesson,
            completed: completed.iter().map(|id| LessonId::new(*id)).collect(),
            progress: 0,
            notes: Vec::new(),
            course,
        }
    }

    #[test]
    fn sidebar_marks_completed_and_current() {
        let vm = map_lesson_page(&context("3", "3-2", &["3-1"]));
        let statuses: Vec<LessonStatus> = vm.rows.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                LessonStatus::Completed,
                LessonStatus::Current,
                LessonStatus::Pending,
                LessonStatus::Pending
            ]
        );
        assert_eq!(vm.summary_label, "4 lessons • 1 completed");
        assert_eq!(vm.action.label(), "Mark Complete & Continue");
        assert_eq!(vm.previous_id.as_deref(), Some("3-1"));
        assert_eq!(vm.next_id.as_deref(), Some("3-3"));
    }

    #[test]
    fn last_lesson_only_marks_complete() {
        let vm = map_lesson_page(&context("1", "1-2", &[]));
        assert_eq!(vm.action, SidebarAction::MarkComplete);
        assert_eq!(vm.action.label(), "Mark as Complete");
        assert!(vm.next_id.is_none());
    }

    #[test]
    fn fixture_videos_are_embeds() {
        let vm = map_lesson_page(&context("1", "1-1", &[]));
        assert!(vm.media.is_embed());
    }
}
