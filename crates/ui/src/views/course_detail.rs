use dioxus::prelude::*;
use dioxus_router::Link;
use lms_core::model::CourseId;

use crate::context::{AppContext, use_store_state};
use crate::routes::Route;
use crate::views::components::{NoticeBanner, ProgressBar};
use crate::views::{NOTICE_TTL, Notice};
use crate::vm::{CourseDetailVm, EnrollCta, LessonRowVm, map_course_detail};

#[component]
pub fn CourseDetailView(course_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let store_state = use_store_state();
    let mut notice = use_signal(|| None::<Notice>);
    let mut enrolling = use_signal(|| false);

    let catalog = ctx.catalog();
    let Some(course) = catalog.course(&CourseId::new(course_id.clone())) else {
        return rsx! { CourseNotFound {} };
    };
    let vm = map_course_detail(&course, catalog.catalog(), &store_state.read());

    let store = ctx.store();
    let on_enroll = move |_| {
        if enrolling() {
            return;
        }
        let store = store.clone();
        let course_id = course.id.clone();
        spawn(async move {
            enrolling.set(true);
            let result = store.enroll(course_id).await;
            enrolling.set(false);
            let shown = Notice::from_result(&result, "Enrolled successfully");
            notice.set(Some(shown));
            tokio::time::sleep(NOTICE_TTL).await;
            if notice() == Some(shown) {
                notice.set(None);
            }
        });
    };

    rsx! {
        div { class: "page course-detail",
            NoticeBanner { notice: notice() }
            CourseHeader { vm: vm.clone() }

            div { class: "course-detail__cta",
                match vm.cta.clone() {
                    EnrollCta::SignIn => rsx! {
                        Link { class: "btn btn--primary", to: Route::Login {}, "Sign in to Enroll" }
                    },
                    EnrollCta::Enroll => rsx! {
                        button {
                            class: "btn btn--primary",
                            disabled: enrolling(),
                            onclick: on_enroll,
                            "Enroll Now"
                        }
                    },
                    EnrollCta::Learn { lesson_id, label } => rsx! {
                        Link {
                            class: "btn btn--primary",
                            to: Route::Lesson { course_id: vm.card.id.clone(), lesson_id },
                            "{label}"
                        }
                    },
                    EnrollCta::Enrolled => rsx! {
                        span { class: "badge", "Enrolled" }
                    },
                }
            }

            if let Some(progress) = vm.progress {
                div { class: "course-detail__progress",
                    span { "Your progress: {progress}%" }
                    ProgressBar { value: progress }
                }
            }

            section { class: "course-detail__about",
                h2 { "About this course" }
                p { "{vm.long_description}" }
            }

            section { class: "course-detail__syllabus",
                div { class: "markdown", dangerous_inner_html: "{vm.syllabus_html}" }
            }

            section { class: "course-detail__lessons",
                h2 { "Course Content" }
                p { class: "muted", "{vm.card.lessons_label} • {vm.card.duration_label}" }
                ol { class: "lesson-list",
                    for row in vm.lessons.iter().cloned() {
                        LessonRow {
                            key: "{row.id}",
                            course_id: vm.card.id.clone(),
                            row,
                            unlocked: matches!(vm.cta, EnrollCta::Learn { .. }),
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn CourseHeader(vm: CourseDetailVm) -> Element {
    let card = vm.card;
    rsx! {
        header { class: "course-detail__header",
            div { class: "course-card__badges",
                for name in card.categories.iter() {
                    span { class: "badge", "{name}" }
                }
            }
            h1 { "{card.title}" }
            p { class: "lead", "{card.description}" }
            div { class: "course-detail__meta",
                span { class: "stars", "{card.stars}" }
                span { class: "muted", "{card.ratings_label}" }
                span { class: "muted", "{vm.enrollments_label}" }
                span { class: "muted", "{vm.updated_label}" }
            }
            div { class: "author",
                img { class: "avatar", src: "{card.author_avatar}", alt: "{card.author_name}" }
                span { "Created by {card.author_name}" }
            }
            img { class: "course-detail__thumbnail", src: "{card.thumbnail}", alt: "{card.title}" }
        }
    }
}

#[component]
fn LessonRow(course_id: String, row: LessonRowVm, unlocked: bool) -> Element {
    let class = if row.completed {
        "lesson-row lesson-row--completed"
    } else {
        "lesson-row"
    };
    rsx! {
        li { class,
            if unlocked {
                Link { to: Route::Lesson { course_id, lesson_id: row.id.clone() }, "{row.title}" }
            } else {
                span { "{row.title}" }
            }
            p { class: "muted", "{row.description}" }
            span { class: "muted", "{row.duration_label}" }
        }
    }
}

#[component]
pub fn CourseNotFound() -> Element {
    rsx! {
        div { class: "page not-found",
            h1 { "Course not found" }
            p { "The course you're looking for doesn't exist or has been removed." }
            Link { class: "btn", to: Route::Courses { query: String::new() }, "Back to Courses" }
        }
    }
}
