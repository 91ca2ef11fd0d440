use dioxus::prelude::*;
use dioxus_router::Link;
use services::{NoteListing, build_dashboard};

use crate::context::{AppContext, use_store_state};
use crate::routes::Route;
use crate::views::components::{ProgressCard, StatCard};
use crate::vm::{ProgressCardVm, format_date, map_progress_card, map_stat_cards};

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let store_state = use_store_state();

    let state = store_state.read();
    if !state.is_authenticated() {
        return rsx! {
            div { class: "page dashboard",
                h1 { "Dashboard" }
                p { "Sign in to see your courses and notes." }
                Link { class: "btn btn--primary", to: Route::Login {}, "Sign In" }
            }
        };
    }

    let dashboard = build_dashboard(&state, &ctx.store().catalog());
    let stats = map_stat_cards(&dashboard.summary);
    let in_progress: Vec<ProgressCardVm> = dashboard.in_progress.iter().map(map_progress_card).collect();
    let completed: Vec<ProgressCardVm> = dashboard.completed.iter().map(map_progress_card).collect();
    let greeting = dashboard
        .user
        .as_ref()
        .map_or_else(|| "Welcome back".to_string(), |user| format!("Welcome back, {}", user.name));

    rsx! {
        div { class: "page dashboard",
            h1 { "{greeting}" }
            div { class: "stats-grid",
                for card in stats {
                    StatCard { key: "{card.title}", card }
                }
            }

            section { class: "dashboard__section",
                h2 { "In Progress" }
                if in_progress.is_empty() {
                    div { class: "empty-state",
                        p { "You have no courses in progress." }
                        Link { class: "btn", to: Route::Courses { query: String::new() }, "Browse Courses" }
                    }
                } else {
                    div { class: "course-grid",
                        for card in in_progress {
                            ProgressCard { key: "{card.course_id}", card }
                        }
                    }
                }
            }

            if !completed.is_empty() {
                section { class: "dashboard__section",
                    h2 { "Completed" }
                    div { class: "course-grid",
                        for card in completed {
                            ProgressCard { key: "{card.course_id}", card }
                        }
                    }
                }
            }

            section { class: "dashboard__section",
                h2 { "Recent Notes" }
                if dashboard.recent_notes.is_empty() {
                    p { class: "muted", "No notes yet." }
                } else {
                    ul { class: "notes__list",
                        for listing in dashboard.recent_notes.iter().cloned() {
                            RecentNote { key: "{listing.note.id}", listing }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentNote(listing: NoteListing) -> Element {
    let date = format_date(listing.note.updated_at);
    rsx! {
        li { class: "note",
            Link {
                to: Route::Lesson {
                    course_id: listing.note.course_id.to_string(),
                    lesson_id: listing.note.lesson_id.to_string(),
                },
                "{listing.course_title} • {listing.lesson_title}"
            }
            p { class: "note__content", "{listing.note.content}" }
            span { class: "muted", "{date}" }
        }
    }
}
