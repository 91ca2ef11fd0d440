use std::sync::Arc;

use lms_core::catalog::Catalog;
use lms_core::model::{Course, CourseId, Lesson, LessonId, UserNote};
use lms_core::navigation::LessonNeighbors;
use lms_core::store::StoreState;
use tracing::debug;

use crate::error::StoreServiceError;
use crate::store_service::StoreService;

/// Everything the lesson page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonContext {
    pub course: Course,
    pub lesson: Lesson,
    pub previous: Option<LessonId>,
    pub next: Option<LessonId>,
    pub completed: Vec<LessonId>,
    pub progress: u8,
    pub notes: Vec<UserNote>,
}

impl LessonContext {
    #[must_use]
    pub fn is_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed.contains(lesson_id)
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

/// Outcome of resolving a lesson route.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonPage {
    /// Unknown course, or a lesson that is not part of it.
    NotFound,
    /// Signed out or not enrolled; show the course page instead.
    Locked { course_id: CourseId },
    Ready(Box<LessonContext>),
}

/// Resolves lesson pages and the "complete and continue" flow.
#[derive(Clone)]
pub struct LessonService {
    store: Arc<StoreService>,
}

impl LessonService {
    #[must_use]
    pub fn new(store: Arc<StoreService>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn open_lesson(&self, course_id: &CourseId, lesson_id: &LessonId) -> LessonPage {
        resolve_lesson(&self.store.snapshot(), &self.store.catalog(), course_id, lesson_id)
    }

    /// Complete `lesson_id` and return the lesson to move on to, if any.
    ///
    /// # Errors
    ///
    /// Returns `StoreServiceError` if the completion is refused or cannot be
    /// persisted; nothing is navigated in that case.
    pub async fn complete_and_continue(
        &self,
        course_id: &CourseId,
        lesson_id: &LessonId,
    ) -> Result<Option<LessonId>, StoreServiceError> {
        self.store
            .complete_lesson(course_id.clone(), lesson_id.clone())
            .await?;

        let catalog = self.store.catalog();
        let next = catalog
            .course(course_id)
            .and_then(|course| LessonNeighbors::find(course, lesson_id))
            .and_then(|neighbors| neighbors.next)
            .map(|lesson| lesson.id.clone());
        Ok(next)
    }
}

/// Resolve a lesson route against a store state.
#[must_use]
pub fn resolve_lesson(
    state: &StoreState,
    catalog: &Catalog,
    course_id: &CourseId,
    lesson_id: &LessonId,
) -> LessonPage {
    let Some(course) = catalog.course(course_id) else {
        return LessonPage::NotFound;
    };
    let Some(neighbors) = LessonNeighbors::find(course, lesson_id) else {
        return LessonPage::NotFound;
    };
    let Some(lesson) = course.lesson(lesson_id) else {
        return LessonPage::NotFound;
    };

    let Some(enrollment) = state.enrollment(course_id).filter(|_| state.is_authenticated()) else {
        debug!(%course_id, %lesson_id, "lesson locked");
        return LessonPage::Locked {
            course_id: course_id.clone(),
        };
    };

    LessonPage::Ready(Box::new(LessonContext {
        course: course.clone(),
        lesson: lesson.clone(),
        previous: neighbors.previous.map(|l| l.id.clone()),
        next: neighbors.next.map(|l| l.id.clone()),
        completed: enrollment.completed_lessons().to_vec(),
        progress: enrollment.progress(),
        notes: state.lesson_notes(course_id, lesson_id).cloned().collect(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::Clock;
    use lms_core::fixtures;
    use lms_core::time::fixed_now;
    use storage::repository::InMemoryRepository;

    fn service(initial: StoreState) -> LessonService {
        let store = StoreService::new(
            Clock::fixed(fixed_now()),
            Arc::new(fixtures::catalog()),
            Arc::new(InMemoryRepository::new()),
            initial,
        );
        LessonService::new(Arc::new(store))
    }

    fn demo() -> StoreState {
        StoreState::demo(&fixtures::catalog(), fixed_now())
    }

    #[test]
    fn unknown_course_or_lesson_is_not_found() {
        let lessons = service(demo());
        assert_eq!(
            lessons.open_lesson(&CourseId::new("2"), &LessonId::new("2-1")),
            LessonPage::NotFound
        );
        assert_eq!(
            lessons.open_lesson(&CourseId::new("1"), &LessonId::new("3-1")),
            LessonPage::NotFound
        );
    }

    #[test]
    fn unenrolled_lesson_is_locked() {
        let lessons = service(demo());
        assert_eq!(
            lessons.open_lesson(&CourseId::new("3"), &LessonId::new("3-1")),
            LessonPage::Locked {
                course_id: CourseId::new("3")
            }
        );
    }

    #[test]
    fn signed_out_lesson_is_locked_even_when_enrolled() {
        let state = demo()
            .apply(
                &lms_core::store::Action::Logout,
                &fixtures::catalog(),
                fixed_now(),
            )
            .unwrap();
        let lessons = service(state);
        assert!(matches!(
            lessons.open_lesson(&CourseId::new("1"), &LessonId::new("1-1")),
            LessonPage::Locked { .. }
        ));
    }

    #[test]
    fn ready_page_carries_neighbors_and_notes() {
        let lessons = service(demo());
        let LessonPage::Ready(context) =
            lessons.open_lesson(&CourseId::new("1"), &LessonId::new("1-1"))
        else {
            panic!("expected ready lesson");
        };
        assert_eq!(context.previous, None);
        assert_eq!(context.next, Some(LessonId::new("1-2")));
        assert!(context.is_completed(&LessonId::new("1-1")));
        assert_eq!(context.notes.len(), 1);
        assert_eq!(context.progress, 50);
    }

    #[tokio::test]
    async fn complete_and_continue_moves_forward_until_last() {
        let lessons = service(demo());
        let course = CourseId::new("1");

        let next = lessons
            .complete_and_continue(&course, &LessonId::new("1-1"))
            .await
            .unwrap();
        assert_eq!(next, Some(LessonId::new("1-2")));

        let next = lessons
            .complete_and_continue(&course, &LessonId::new("1-2"))
            .await
            .unwrap();
        assert_eq!(next, None);

        let LessonPage::Ready(context) = lessons.open_lesson(&course, &LessonId::new("1-2")) else {
            panic!("expected ready lesson");
        };
        assert_eq!(context.progress, 100);
        assert!(context.is_last());
    }
}
