use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use lms_core::model::{CourseId, LessonId};
use services::{LessonPage, resolve_lesson};

use crate::context::{AppContext, use_store_state};
use crate::routes::Route;
use crate::vm::{map_lesson_page, map_note_items};

use super::{LessonSidebar, NoteEditor, VideoPlayer};

#[component]
pub fn LessonView(course_id: String, lesson_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let store_state = use_store_state();
    let navigator = use_navigator();

    let catalog = ctx.store().catalog();
    let page = resolve_lesson(
        &store_state.read(),
        &catalog,
        &CourseId::new(course_id.clone()),
        &LessonId::new(lesson_id.clone()),
    );

    // Signed-out and unenrolled visitors land on the course page.
    let locked = match &page {
        LessonPage::Locked { course_id } => Some(course_id.to_string()),
        _ => None,
    };
    use_effect(use_reactive((&locked,), move |(locked,)| {
        if let Some(course_id) = locked {
            navigator.replace(Route::CourseDetail { course_id });
        }
    }));

    match page {
        LessonPage::NotFound => rsx! { LessonNotFound {} },
        LessonPage::Locked { .. } => rsx! {},
        LessonPage::Ready(context) => {
            let vm = map_lesson_page(&context);
            let notes = map_note_items(&context.notes);
            rsx! {
                div { class: "page lesson",
                    Link { class: "back-link", to: Route::CourseDetail { course_id: vm.course_id.clone() },
                        "Back to course"
                    }
                    div { class: "lesson__layout",
                        div { class: "lesson__main",
                            h1 { "{vm.title}" }
                            VideoPlayer { key: "{vm.lesson_id}", media: vm.media.clone() }
                            section { class: "lesson__about",
                                h2 { "About this lesson" }
                                p { "{vm.description}" }
                            }
                            nav { class: "lesson__pager",
                                if let Some(previous) = vm.previous_id.clone() {
                                    Link {
                                        class: "btn",
                                        to: Route::Lesson { course_id: vm.course_id.clone(), lesson_id: previous },
                                        "Previous Lesson"
                                    }
                                } else {
                                    div {}
                                }
                                if let Some(next) = vm.next_id.clone() {
                                    Link {
                                        class: "btn btn--primary",
                                        to: Route::Lesson { course_id: vm.course_id.clone(), lesson_id: next },
                                        "Next Lesson"
                                    }
                                }
                            }
                            NoteEditor {
                                key: "{vm.lesson_id}",
                                course_id: vm.course_id.clone(),
                                lesson_id: vm.lesson_id.clone(),
                                notes,
                            }
                        }
                        LessonSidebar { vm: vm.clone() }
                    }
                }
            }
        }
    }
}

#[component]
fn LessonNotFound() -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "Lesson not found" }
            p { "The lesson you're looking for doesn't exist or has been removed." }
            Link { class: "btn", to: Route::Courses { query: String::new() }, "Back to Courses" }
        }
    }
}
