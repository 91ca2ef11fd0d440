use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;
use crate::views::Notice;
use crate::vm::{CourseCardVm, ProgressCardVm, ProgressCta, StatCardVm};

#[component]
pub fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        article { class: "course-card",
            Link { class: "course-card__link", to: Route::CourseDetail { course_id: card.id.clone() },
                div { class: "course-card__media",
                    img { src: "{card.thumbnail}", alt: "{card.title}" }
                }
                div { class: "course-card__body",
                    div { class: "course-card__badges",
                        for name in card.categories.iter() {
                            span { class: "badge", "{name}" }
                        }
                    }
                    div { class: "course-card__rating",
                        span { class: "stars", "{card.stars}" }
                        span { class: "muted", "{card.ratings_label}" }
                    }
                    h3 { class: "course-card__title", "{card.title}" }
                    p { class: "course-card__description", "{card.description}" }
                }
                footer { class: "course-card__footer",
                    span { class: "author",
                        img { class: "avatar", src: "{card.author_avatar}", alt: "{card.author_name}" }
                        "{card.author_name}"
                    }
                    span { class: "muted", "{card.lessons_label}" }
                }
            }
        }
    }
}

#[component]
pub fn CourseGrid(cards: Vec<CourseCardVm>, empty_message: &'static str) -> Element {
    rsx! {
        if cards.is_empty() {
            div { class: "empty-state",
                p { "{empty_message}" }
            }
        } else {
            div { class: "course-grid",
                for card in cards {
                    CourseCard { key: "{card.id}", card }
                }
            }
        }
    }
}

#[component]
pub fn NoticeBanner(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let class = if notice.is_error() {
        "notice notice--error"
    } else {
        "notice notice--success"
    };
    rsx! {
        div { class, role: "status", "{notice.text()}" }
    }
}

#[component]
pub fn ProgressBar(value: u8) -> Element {
    rsx! {
        div {
            class: "progress",
            role: "progressbar",
            aria_valuenow: "{value}",
            aria_valuemin: "0",
            aria_valuemax: "100",
            div { class: "progress__bar", style: "width: {value}%;" }
        }
    }
}

#[component]
pub fn StatCard(card: StatCardVm) -> Element {
    rsx! {
        div { class: "stat-card",
            h3 { class: "stat-card__title", "{card.title}" }
            div { class: "stat-card__value", "{card.value}" }
            p { class: "muted", "{card.description}" }
        }
    }
}

#[component]
pub fn ProgressCard(card: ProgressCardVm) -> Element {
    let label = card.cta.label();
    let target = match &card.cta {
        ProgressCta::Lesson { lesson_id, .. } => Route::Lesson {
            course_id: card.course_id.clone(),
            lesson_id: lesson_id.clone(),
        },
        ProgressCta::StartCourse => Route::CourseDetail {
            course_id: card.course_id.clone(),
        },
    };

    rsx! {
        article { class: "progress-card",
            div { class: "progress-card__media",
                img { src: "{card.thumbnail}", alt: "{card.title}" }
                div { class: "progress-card__overlay",
                    h3 { "{card.title}" }
                    span { class: "author",
                        img { class: "avatar", src: "{card.author_avatar}", alt: "{card.author_name}" }
                        "{card.author_name}"
                    }
                }
            }
            div { class: "progress-card__body",
                div { class: "progress-card__row",
                    span { "Progress" }
                    span { class: "muted", "{card.progress}%" }
                }
                ProgressBar { value: card.progress }
                p { class: "muted", "{card.status_label}" }
            }
            footer { class: "progress-card__footer",
                Link { class: "btn btn--primary", to: target, "{label}" }
            }
        }
    }
}
