use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use lms_core::model::{CourseId, LessonId};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::{NoticeBanner, ProgressBar};
use crate::views::{NOTICE_TTL, Notice, ViewError};
use crate::vm::{LessonPageVm, LessonStatus, SidebarAction, SidebarRowVm};

#[component]
pub fn LessonSidebar(vm: LessonPageVm) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut collapsed = use_signal(|| false);
    let mut saving = use_signal(|| false);
    let mut failure = use_signal(|| None::<Notice>);

    let lessons = ctx.lessons();
    let course_id = vm.course_id.clone();
    let lesson_id = vm.lesson_id.clone();
    let action = vm.action;
    let on_complete = move |_| {
        if saving() {
            return;
        }
        let lessons = lessons.clone();
        let course_id = CourseId::new(course_id.clone());
        let lesson_id = LessonId::new(lesson_id.clone());
        spawn(async move {
            saving.set(true);
            let result = lessons.complete_and_continue(&course_id, &lesson_id).await;
            saving.set(false);
            match result {
                Ok(Some(next)) if action == SidebarAction::CompleteAndContinue => {
                    navigator.push(Route::Lesson {
                        course_id: course_id.to_string(),
                        lesson_id: next.to_string(),
                    });
                }
                Ok(_) => {}
                Err(err) => {
                    let shown = Notice::Failed(ViewError::from(&err));
                    failure.set(Some(shown));
                    tokio::time::sleep(NOTICE_TTL).await;
                    if failure() == Some(shown) {
                        failure.set(None);
                    }
                }
            }
        });
    };

    let toggle_label = if collapsed() {
        "Expand lessons"
    } else {
        "Collapse lessons"
    };

    rsx! {
        aside { class: "lesson-sidebar",
            header { class: "lesson-sidebar__header",
                h3 { "Course Content" }
                button {
                    class: "btn btn--ghost",
                    aria_label: toggle_label,
                    onclick: move |_| collapsed.set(!collapsed()),
                    if collapsed() { "▾" } else { "▴" }
                }
            }
            if !collapsed() {
                div { class: "lesson-sidebar__body",
                    p { class: "muted", "{vm.summary_label}" }
                    ProgressBar { value: vm.progress }
                    ul { class: "lesson-sidebar__list",
                        for row in vm.rows.iter().cloned() {
                            SidebarRow {
                                key: "{row.id}",
                                course_id: vm.course_id.clone(),
                                current: row.id == vm.lesson_id,
                                row,
                            }
                        }
                    }
                    NoticeBanner { notice: failure() }
                    button {
                        class: "btn btn--primary btn--block",
                        disabled: saving(),
                        onclick: on_complete,
                        "{vm.action.label()}"
                    }
                }
            }
        }
    }
}

#[component]
fn SidebarRow(course_id: String, row: SidebarRowVm, current: bool) -> Element {
    let (icon, status_class) = match row.status {
        LessonStatus::Completed => ("✓", "completed"),
        LessonStatus::Current => ("▶", "current"),
        LessonStatus::Pending => ("○", "pending"),
    };
    let class = if current {
        "lesson-sidebar__row lesson-sidebar__row--active"
    } else {
        "lesson-sidebar__row"
    };
    rsx! {
        li { class,
            Link { to: Route::Lesson { course_id, lesson_id: row.id.clone() },
                span { class: "status status--{status_class}", "{icon}" }
                span { class: "lesson-sidebar__title", "{row.title}" }
                span { class: "muted", "{row.duration_label}" }
            }
        }
    }
}
