use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};
use services::StoreService;

use crate::context::{AppContext, use_store_state};
use crate::views::{
    CourseDetailView, CoursesView, DashboardView, HomeView, LessonView, LoginView, NOTICE_TTL,
    NotFoundView, Notice, NoticeBanner,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/courses?:..query", CoursesView)] Courses { query: String },
        #[route("/courses/:course_id", CourseDetailView)] CourseDetail { course_id: String },
        #[route("/courses/:course_id/lessons/:lesson_id", LessonView)] Lesson { course_id: String, lesson_id: String },
        #[route("/dashboard", DashboardView)] Dashboard {},
        #[route("/login", LoginView)] Login {},
        #[route("/:..segments", NotFoundView)] NotFound { segments: Vec<String> },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Header {}
            main { class: "content",
                Outlet::<Route> {}
            }
            footer { class: "footer",
                span { class: "brand", "LearnHub" }
                p { class: "muted",
                    "Empowering learners through high-quality online education and accessible knowledge."
                }
            }
        }
    }
}

#[component]
fn Header() -> Element {
    let ctx = use_context::<AppContext>();
    let store_state = use_store_state();
    let user = {
        let state = store_state.read();
        state.user().filter(|_| state.is_authenticated()).cloned()
    };

    let mut notice = use_signal(|| None::<Notice>);

    let on_logout = move |_| {
        let store = ctx.store();
        spawn(async move {
            let shown = sign_out(&store).await;
            notice.set(Some(shown));
            tokio::time::sleep(NOTICE_TTL).await;
            if notice() == Some(shown) {
                notice.set(None);
            }
        });
    };

    rsx! {
        header { class: "header",
            Link { class: "brand", to: Route::Home {}, "LearnHub" }
            nav { class: "header__nav",
                Link { to: Route::Home {}, "Home" }
                Link { to: Route::Courses { query: String::new() }, "Courses" }
                Link { to: Route::Dashboard {}, "Dashboard" }
            }
            div { class: "header__user",
                if let Some(user) = user {
                    span { class: "avatar avatar--initials", title: "{user.email}", "{user.initials()}" }
                    span { class: "header__name", "{user.name}" }
                    button { class: "btn btn--ghost", onclick: on_logout, "Log out" }
                } else {
                    Link { class: "btn btn--primary", to: Route::Login {}, "Sign In" }
                }
            }
        }
        NoticeBanner { notice: notice() }
    }
}

/// Log out and describe the outcome; a failed save keeps the user signed in.
pub(crate) async fn sign_out(store: &StoreService) -> Notice {
    Notice::from_result(&store.logout().await, "Signed out")
}
