use dioxus::prelude::*;
use dioxus_router::Link;
use lms_core::catalog::CatalogFilter;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::CourseGrid;
use crate::vm::map_course_cards;

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let catalog = ctx.catalog();
    let sections = catalog.home();
    let featured = map_course_cards(&sections.featured, catalog.catalog());
    let newest = map_course_cards(&sections.newest, catalog.catalog());

    rsx! {
        div { class: "page home",
            section { class: "hero",
                h1 { "Elevate Your Skills with Expert-Led Courses" }
                p { class: "hero__lead",
                    "Discover courses taught by industry experts and learn at your own pace."
                }
                div { class: "hero__actions",
                    Link { class: "btn btn--primary", to: Route::Courses { query: String::new() }, "Explore Courses" }
                    Link { class: "btn", to: Route::Dashboard {}, "View Dashboard" }
                }
            }

            section { class: "home-section",
                div { class: "home-section__header",
                    h2 { "Featured Courses" }
                    Link { to: Route::Courses { query: String::new() }, "View all" }
                }
                CourseGrid { cards: featured, empty_message: "No courses yet." }
            }

            section { class: "home-section",
                h2 { "Browse Categories" }
                div { class: "category-links",
                    for category in sections.categories.iter() {
                        Link {
                            key: "{category.id}",
                            class: "category-link",
                            to: Route::Courses {
                                query: CatalogFilter::default().with_category(category.slug.clone()).to_query_string(),
                            },
                            "{category.name}"
                        }
                    }
                }
            }

            section { class: "home-section",
                h2 { "Newest Courses" }
                CourseGrid { cards: newest, empty_message: "No courses yet." }
            }
        }
    }
}
