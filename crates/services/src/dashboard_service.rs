use std::sync::Arc;

use lms_core::catalog::Catalog;
use lms_core::model::{Course, LessonId, UserNote, UserProfile};
use lms_core::store::StoreState;

use crate::store_service::StoreService;

/// How many notes the dashboard lists.
pub const RECENT_NOTES: usize = 5;

/// Headline numbers for the stats cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardSummary {
    pub enrolled: usize,
    pub completed: usize,
    pub minutes_spent: u32,
    pub notes: usize,
}

/// One enrolled course with its progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardCourse {
    pub course: Course,
    pub progress: u8,
    pub last_lesson_id: Option<LessonId>,
    pub time_spent: u32,
}

/// A note with the titles needed to link back to its lesson.
#[derive(Debug, Clone, PartialEq)]
pub struct NoteListing {
    pub note: UserNote,
    pub course_title: String,
    pub lesson_title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub user: Option<UserProfile>,
    pub summary: DashboardSummary,
    pub in_progress: Vec<DashboardCourse>,
    pub completed: Vec<DashboardCourse>,
    pub recent_notes: Vec<NoteListing>,
}

/// Aggregates the store into the dashboard page.
#[derive(Clone)]
pub struct DashboardService {
    store: Arc<StoreService>,
}

impl DashboardService {
    #[must_use]
    pub fn new(store: Arc<StoreService>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn dashboard(&self) -> Dashboard {
        build_dashboard(&self.store.snapshot(), &self.store.catalog())
    }
}

/// Enrollments for courses missing from the catalog still count in the
/// summary but have no card.
#[must_use]
pub fn build_dashboard(state: &StoreState, catalog: &Catalog) -> Dashboard {
    let enrollments = state.enrollments();
    let summary = DashboardSummary {
        enrolled: enrollments.len(),
        completed: enrollments.iter().filter(|e| e.is_finished()).count(),
        minutes_spent: enrollments.iter().map(|e| e.time_spent()).sum(),
        notes: state.notes().len(),
    };

    let (completed, in_progress): (Vec<_>, Vec<_>) = enrollments
        .iter()
        .filter_map(|enrollment| {
            catalog
                .course(enrollment.course_id())
                .map(|course| DashboardCourse {
                    course: course.clone(),
                    progress: enrollment.progress(),
                    last_lesson_id: enrollment.last_lesson_id().cloned(),
                    time_spent: enrollment.time_spent(),
                })
        })
        .partition(|entry| entry.progress >= 100);

    let mut notes: Vec<&UserNote> = state.notes().iter().collect();
    notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    let recent_notes = notes
        .into_iter()
        .filter_map(|note| {
            let course = catalog.course(&note.course_id)?;
            let lesson = course.lesson(&note.lesson_id)?;
            Some(NoteListing {
                note: note.clone(),
                course_title: course.title.clone(),
                lesson_title: lesson.title.clone(),
            })
        })
        .take(RECENT_NOTES)
        .collect();

    Dashboard {
        user: state.user().cloned(),
        summary,
        in_progress,
        completed,
        recent_notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::fixtures;
    use lms_core::model::CourseId;
    use lms_core::store::Action;
    use lms_core::time::fixed_now;

    #[test]
    fn demo_dashboard_counts() {
        let catalog = fixtures::catalog();
        let dashboard = build_dashboard(&StoreState::demo(&catalog, fixed_now()), &catalog);

        assert_eq!(
            dashboard.summary,
            DashboardSummary {
                enrolled: 1,
                completed: 0,
                minutes_spent: 45,
                notes: 1,
            }
        );
        assert_eq!(dashboard.in_progress.len(), 1);
        assert!(dashboard.completed.is_empty());
        assert_eq!(dashboard.recent_notes[0].lesson_title, "Getting Started with React 18");
    }

    #[test]
    fn finished_courses_move_to_completed() {
        let catalog = fixtures::catalog();
        let state = StoreState::demo(&catalog, fixed_now())
            .apply(
                &Action::CompleteLesson {
                    course_id: CourseId::new("1"),
                    lesson_id: LessonId::new("1-2"),
                },
                &catalog,
                fixed_now(),
            )
            .unwrap();
        let dashboard = build_dashboard(&state, &catalog);
        assert_eq!(dashboard.summary.completed, 1);
        assert_eq!(dashboard.completed.len(), 1);
        assert!(dashboard.in_progress.is_empty());
    }

    #[test]
    fn uncatalogued_enrollment_counts_without_card() {
        let catalog = fixtures::catalog();
        let state = StoreState::demo(&catalog, fixed_now())
            .apply(
                &Action::Enroll {
                    course_id: CourseId::new("2"),
                },
                &catalog,
                fixed_now(),
            )
            .unwrap();
        let dashboard = build_dashboard(&state, &catalog);
        assert_eq!(dashboard.summary.enrolled, 2);
        assert_eq!(dashboard.in_progress.len(), 1);
    }
}
