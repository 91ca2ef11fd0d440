use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::CourseGrid;
use crate::vm::{FilterOptionVm, category_options, map_course_cards, rating_options, search_query};

const NO_MATCHES: &str = "No courses match your search criteria. Try adjusting your filters.";

/// Course catalog filtered by the `/courses` query string.
#[component]
pub fn CoursesView(query: String) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let catalog = ctx.catalog();
    let search = catalog.search_query_string(&query);
    let cards = map_course_cards(&search.courses, catalog.catalog());
    let categories = category_options(catalog.catalog(), &search.filter);
    let ratings = rating_options(&search.filter);

    let mut search_text = use_signal(|| search.filter.query.clone());
    // Follow the URL when it changes under us (category links, back button).
    let url_text = search.filter.query.clone();
    use_effect(use_reactive((&url_text,), move |(url_text,)| {
        search_text.set(url_text);
    }));

    let filter = search.filter.clone();
    let on_search = move |evt: FormEvent| {
        evt.prevent_default();
        let query = search_query(&filter, &search_text.read());
        navigator.push(Route::Courses { query });
    };

    rsx! {
        div { class: "page courses",
            form { class: "search-bar", onsubmit: on_search,
                input {
                    r#type: "search",
                    placeholder: "Search for courses...",
                    value: "{search_text}",
                    oninput: move |evt| search_text.set(evt.value()),
                }
                button { r#type: "submit", class: "btn", "Search" }
            }

            div { class: "courses__layout",
                aside { class: "filters",
                    div { class: "filter-group",
                        h3 { "Categories" }
                        FilterList { options: categories }
                    }
                    div { class: "filter-group",
                        h3 { "Ratings" }
                        FilterList { options: ratings }
                    }
                }
                div { class: "courses__results",
                    h2 { class: "results-heading", "{search.heading}" }
                    CourseGrid { cards, empty_message: NO_MATCHES }
                }
            }
        }
    }
}

#[component]
fn FilterList(options: Vec<FilterOptionVm>) -> Element {
    rsx! {
        ul { class: "filter-list",
            for option in options {
                FilterOption { key: "{option.label}", option }
            }
        }
    }
}

#[component]
fn FilterOption(option: FilterOptionVm) -> Element {
    let class = if option.selected {
        "filter-option filter-option--selected"
    } else {
        "filter-option"
    };
    rsx! {
        li {
            Link { class, to: Route::Courses { query: option.query.clone() }, "{option.label}" }
        }
    }
}
