use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::components::NoticeBanner;
use crate::views::{Notice, ViewError};

/// Demo sign-in form; any credentials are accepted.
#[component]
pub fn LoginView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut failure = use_signal(|| None::<Notice>);
    let mut pending = use_signal(|| false);

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if pending() {
            return;
        }
        let store = ctx.store();
        let (email, password) = (email(), password());
        spawn(async move {
            pending.set(true);
            let result = store.login(email, password).await;
            pending.set(false);
            match result {
                Ok(_) => {
                    navigator.push(Route::Dashboard {});
                }
                Err(err) => failure.set(Some(Notice::Failed(ViewError::from(&err)))),
            }
        });
    };

    rsx! {
        div { class: "page login",
            h1 { "Sign In" }
            p { class: "muted", "Use any email and password to explore the demo account." }
            NoticeBanner { notice: failure() }
            form { class: "login__form", onsubmit: on_submit,
                label { r#for: "login-email", "Email" }
                input {
                    id: "login-email",
                    r#type: "email",
                    placeholder: "you@example.com",
                    value: "{email}",
                    oninput: move |evt| email.set(evt.value()),
                }
                label { r#for: "login-password", "Password" }
                input {
                    id: "login-password",
                    r#type: "password",
                    value: "{password}",
                    oninput: move |evt| password.set(evt.value()),
                }
                button { r#type: "submit", class: "btn btn--primary", disabled: pending(), "Sign In" }
            }
        }
    }
}
