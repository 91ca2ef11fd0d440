use services::{DashboardCourse, DashboardSummary};

use crate::vm::time_fmt::format_minutes;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ProgressCta {
    /// Open a lesson directly.
    Lesson {
        lesson_id: String,
        label: &'static str,
    },
    /// No lesson visited yet; go to the course page.
    StartCourse,
}

impl ProgressCta {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ProgressCta::Lesson { label, .. } => label,
            ProgressCta::StartCourse => "Start Course",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressCardVm {
    pub course_id: String,
    pub title: String,
    pub thumbnail: String,
    pub author_name: String,
    pub author_avatar: String,
    pub progress: u8,
    pub status_label: String,
    pub cta: ProgressCta,
}

#[must_use]
pub fn map_progress_card(entry: &DashboardCourse) -> ProgressCardVm {
    let course = &entry.course;
    let total = course.lessons.len();
    let status_label = match entry.progress {
        0 => "Not started yet".to_string(),
        100 => "Completed".to_string(),
        p => format!(
            "{} of {total} lessons completed",
            (total * usize::from(p)).div_ceil(100)
        ),
    };
    let cta = match &entry.last_lesson_id {
        Some(lesson_id) => ProgressCta::Lesson {
            lesson_id: lesson_id.to_string(),
            label: if entry.progress == 0 {
                "Start Learning"
            } else {
                "Continue Learning"
            },
        },
        None => ProgressCta::StartCourse,
    };

    ProgressCardVm {
        course_id: course.id.to_string(),
        title: course.title.clone(),
        thumbnail: course.thumbnail.clone(),
        author_name: course.author.name.clone(),
        author_avatar: course.author.avatar.clone(),
        progress: entry.progress,
        status_label,
        cta,
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatCardVm {
    pub title: &'static str,
    pub value: String,
    pub description: &'static str,
}

#[must_use]
pub fn map_stat_cards(summary: &DashboardSummary) -> Vec<StatCardVm> {
    vec![
        StatCardVm {
            title: "Enrolled Courses",
            value: summary.enrolled.to_string(),
            description: "Courses you have joined",
        },
        StatCardVm {
            title: "Completed",
            value: summary.completed.to_string(),
            description: "Courses finished",
        },
        StatCardVm {
            title: "Time Spent",
            value: format_minutes(summary.minutes_spent),
            description: "Total learning time",
        },
        StatCardVm {
            title: "Notes",
            value: summary.notes.to_string(),
            description: "Notes taken across lessons",
        },
    ]
}
