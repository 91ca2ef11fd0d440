use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn NotFoundView(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { class: "btn", to: Route::Home {}, "Go home" }
        }
    }
}
