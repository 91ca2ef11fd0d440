use lms_core::catalog::Catalog;
use lms_core::model::Course;
use lms_core::store::StoreState;

use crate::vm::catalog_vm::{CourseCardVm, map_course_card};
use crate::vm::markdown_vm::markdown_to_html;
use crate::vm::time_fmt::{format_minutes, format_month};

/// Primary call to action on the course page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EnrollCta {
    SignIn,
    Enroll,
    /// Enrolled; open `lesson_id` (last visited, else the first lesson).
    Learn { lesson_id: String, label: &'static str },
    /// Enrolled in a course without lessons.
    Enrolled,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonRowVm {
    pub id: String,
    pub title: String,
    pub description: String,
    pub duration_label: String,
    pub completed: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseDetailVm {
    pub card: CourseCardVm,
    pub long_description: String,
    pub syllabus_html: String,
    pub enrollments_label: String,
    pub updated_label: String,
    pub progress: Option<u8>,
    pub lessons: Vec<LessonRowVm>,
    pub cta: EnrollCta,
}

#[must_use]
pub fn map_course_detail(course: &Course, catalog: &Catalog, state: &StoreState) -> CourseDetailVm {
    let enrollment = state.enrollment(&course.id);

    let cta = match enrollment {
        _ if !state.is_authenticated() => EnrollCta::SignIn,
        None => EnrollCta::Enroll,
        Some(enrollment) => {
            let resume = enrollment
                .last_lesson_id()
                .filter(|id| course.contains_lesson(id));
            match (resume, course.first_lesson()) {
                (Some(id), _) => EnrollCta::Learn {
                    lesson_id: id.to_string(),
                    label: "Continue Learning",
                },
                (None, Some(first)) => EnrollCta::Learn {
                    lesson_id: first.id.to_string(),
                    label: "Start Learning",
                },
                (None, None) => EnrollCta::Enrolled,
            }
        }
    };

    let lessons = course
        .lessons
        .iter()
        .map(|lesson| LessonRowVm {
            id: lesson.id.to_string(),
            title: lesson.title.clone(),
            description: lesson.description.clone(),
            duration_label: format_minutes(lesson.duration),
            completed: enrollment.is_some_and(|e| e.has_completed(&lesson.id)),
        })
        .collect();

    CourseDetailVm {
        card: map_course_card(course, catalog),
        long_description: course
            .long_description
            .clone()
            .unwrap_or_else(|| course.description.clone()),
        syllabus_html: markdown_to_html(&course.syllabus),
        enrollments_label: format!("{} students enrolled", course.enrollments),
        updated_label: format!("Last updated {}", format_month(course.updated_at)),
        progress: enrollment.map(|e| e.progress()),
        lessons,
        cta,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lms_core::fixtures;
    use lms_core::model::CourseId;
    use lms_core::store::Action;
    use lms_core::time::fixed_now;

    fn demo() -> StoreState {
        StoreState::demo(&fixtures::catalog(), fixed_now())
    }

    #[test]
    fn enrolled_course_resumes_last_lesson() {
        let catalog = fixtures::catalog();
        let course = catalog.course(&CourseId::new("1")).unwrap();
        let vm = map_course_detail(course, &catalog, &demo());

        assert_eq!(
            vm.cta,
            EnrollCta::Learn {
                lesson_id: "1-2".into(),
                label: "Continue Learning"
            }
        );
        assert_eq!(vm.progress, Some(50));
        assert!(vm.lessons[0].completed);
        assert!(!vm.lessons[1].completed);
        assert!(vm.syllabus_html.contains("<h1>Course Syllabus</h1>"));
    }

    #[test]
    fn fresh_enrollment_starts_at_first_lesson() {
        let catalog = fixtures::catalog();
        let state = demo()
            .apply(
                &Action::Enroll {
                    course_id: CourseId::new("5"),
                },
                &catalog,
                fixed_now(),
            )
            .unwrap();
        let course = catalog.course(&CourseId::new("5")).unwrap();
        let vm = map_course_detail(course, &catalog, &state);
        assert_eq!(
            vm.cta,
            EnrollCta::Learn {
                lesson_id: "5-1".into(),
                label: "Start Learning"
            }
        );
    }

    #[test]
    fn unenrolled_and_signed_out_ctas() {
        let catalog = fixtures::catalog();
        let course = catalog.course(&CourseId::new("3")).unwrap();
        assert_eq!(map_course_detail(course, &catalog, &demo()).cta, EnrollCta::Enroll);
        assert_eq!(
            map_course_detail(course, &catalog, &StoreState::empty()).cta,
            EnrollCta::SignIn
        );
    }
}
