//! Login, registration and logout controls.
//!
//! Forms only populate or clear the session. Leaving the login page once
//! signed in is the navigation guard's job, not theirs.

use dioxus::prelude::*;
use store::{RouteName, RouteTable};

use crate::{end_session, start_session, use_config, use_identity, use_session};

/// Email/password login form.
#[component]
pub fn LoginForm() -> Element {
    let session = use_session();
    let identity = use_identity();
    let config = use_config();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let config = config();
            match api::login(&config, &email(), &password()).await {
                Ok((verified, record)) => {
                    start_session(session, identity, verified, record);
                }
                Err(e) => {
                    tracing::warn!("Login failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let register_path = RouteTable::new().path_of(RouteName::Register);

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Welcome back" }
            p { class: "auth-subtitle", "Sign in to continue" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() {
                        "Signing in..."
                    } else {
                        "Sign in"
                    }
                }
            }

            p {
                class: "auth-switch",
                "Don't have an account? "
                Link { to: register_path, "Create one" }
            }
        }
    }
}

/// Account creation form.
#[component]
pub fn RegisterForm() -> Element {
    let session = use_session();
    let identity = use_identity();
    let config = use_config();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let config = config();
            match api::register(&config, &name(), &email(), &password(), &confirm_password()).await {
                Ok((verified, record)) => {
                    start_session(session, identity, verified, record);
                }
                Err(e) => {
                    tracing::warn!("Registration failed: {}", e);
                    loading.set(false);
                    error.set(Some(e.user_message()));
                }
            }
        });
    };

    let login_path = RouteTable::new().path_of(RouteName::Login);

    rsx! {
        div {
            class: "auth-page",

            h1 { class: "auth-title", "Create account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "auth-error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    class: "btn btn-primary",
                    disabled: loading(),
                    if loading() {
                        "Creating account..."
                    } else {
                        "Create account"
                    }
                }
            }

            p {
                class: "auth-switch",
                "Already registered? "
                Link { to: login_path, "Sign in" }
            }
        }
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let identity = use_identity();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| end_session(session, identity),
            "{label}"
        }
    }
}
