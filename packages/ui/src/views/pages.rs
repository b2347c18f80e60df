use dioxus::prelude::*;
use serde_json::{json, Value};
use store::{ProfileRecord, RouteName, RouteTable};

use crate::{use_profile_writer, use_session, ProfileChange};

#[component]
pub fn LandingPage() -> Element {
    let session = use_session();
    let table = RouteTable::new();
    let signed_in = session.read().is_authenticated();

    rsx! {
        div {
            class: "landing",
            h1 { class: "landing-title", "Your learning dashboard" }
            p { class: "landing-subtitle", "Track your days, keep your favorite cards and test what you know." }

            div {
                class: "landing-actions",
                if signed_in {
                    Link { class: "btn btn-primary", to: table.path_of(RouteName::Dashboard), "Open dashboard" }
                } else {
                    Link { class: "btn btn-primary", to: table.path_of(RouteName::Login), "Sign in" }
                    Link { class: "btn btn-text", to: table.path_of(RouteName::Register), "Register" }
                }
            }
        }
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let mut session = use_session();
    let writer = use_profile_writer();
    let mut new_card = use_signal(String::new);

    let favorites = session.read().favorite_cards().to_vec();
    let favorite_count = favorites.len();
    let day_count = session
        .read()
        .full_user_data
        .as_ref()
        .and_then(ProfileRecord::dias)
        .map_or(0, |dias| dias.len());

    rsx! {
        div {
            class: "page",
            h1 { "Dashboard" }

            div {
                class: "card-grid",
                div {
                    class: "card",
                    span { class: "card-label", "Days recorded" }
                    span { class: "card-value", "{day_count}" }
                }
                div {
                    class: "card",
                    span { class: "card-label", "Favorite cards" }
                    span { class: "card-value", "{favorite_count}" }
                }
            }

            h2 { "Favorites" }
            form {
                class: "inline-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    let Some(next) = session.read().favorites_adding(&new_card()) else {
                        return;
                    };
                    session.write().set_favorites(next.clone());
                    writer.send(ProfileChange::Favorites(next));
                    new_card.set(String::new());
                },
                input {
                    r#type: "text",
                    placeholder: "Card name",
                    value: new_card(),
                    oninput: move |evt: FormEvent| new_card.set(evt.value()),
                }
                button { r#type: "submit", class: "btn btn-primary", "Add" }
            }
            if favorites.is_empty() {
                p { class: "muted", "No favorites yet." }
            }
            ul {
                class: "favorites",
                for card in favorites.iter().cloned() {
                    li {
                        key: "{card}",
                        span { "{card}" }
                        button {
                            class: "btn btn-text",
                            onclick: move |_| {
                                let remaining = session.read().favorites_removing(&card);
                                session.write().set_favorites(remaining.clone());
                                writer.send(ProfileChange::Favorites(remaining));
                            },
                            "Remove"
                        }
                    }
                }
            }
        }
    }
}

/// Record an entry for a day in the profile's `dias`.
#[component]
pub fn GuardarDatosPage() -> Element {
    let mut session = use_session();
    let writer = use_profile_writer();
    let mut day = use_signal(String::new);
    let mut entry = use_signal(String::new);
    let mut notice = use_signal(|| Option::<String>::None);

    let days: Vec<(String, String)> = session
        .read()
        .full_user_data
        .as_ref()
        .and_then(ProfileRecord::dias)
        .map(|dias| {
            dias.iter()
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect()
        })
        .unwrap_or_default();

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let key = day().trim().to_string();
        if key.is_empty() {
            notice.set(Some("Pick a day first".to_string()));
            return;
        }

        let mut dias = session
            .read()
            .full_user_data
            .as_ref()
            .and_then(ProfileRecord::dias)
            .cloned()
            .unwrap_or_default();
        dias.insert(key.clone(), json!({ "nota": entry() }));

        session.write().update_dias_in_user_data(dias.clone());
        writer.send(ProfileChange::Dias(dias));

        entry.set(String::new());
        notice.set(Some(format!("Saved {key}")));
    };

    rsx! {
        div {
            class: "page",
            h1 { "Guardar datos" }

            form {
                class: "inline-form",
                onsubmit: handle_save,
                input {
                    r#type: "date",
                    value: day(),
                    oninput: move |evt: FormEvent| day.set(evt.value()),
                }
                input {
                    r#type: "text",
                    placeholder: "What did you do?",
                    value: entry(),
                    oninput: move |evt: FormEvent| entry.set(evt.value()),
                }
                button { r#type: "submit", class: "btn btn-primary", "Save" }
            }

            if let Some(message) = notice() {
                p { class: "notice", "{message}" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Day" }
                        th { "Entry" }
                    }
                }
                tbody {
                    for (key, value) in days {
                        tr {
                            key: "{key}",
                            td { "{key}" }
                            td { "{value}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PerfilPage() -> Element {
    let mut session = use_session();

    let fields: Vec<(String, String)> = session
        .read()
        .full_user_data
        .as_ref()
        .map(|record| {
            record
                .as_map()
                .iter()
                .filter(|(key, _)| key.as_str() != "dias")
                .map(|(key, value)| (key.clone(), display_value(value)))
                .collect()
        })
        .unwrap_or_default();

    let monitored = session
        .read()
        .monitored_user_data
        .as_ref()
        .map(|record| record.display_name().unwrap_or("unknown user").to_string());

    rsx! {
        div {
            class: "page",
            h1 { "Perfil" }

            dl {
                class: "profile-fields",
                for (key, value) in fields {
                    div {
                        key: "{key}",
                        dt { "{key}" }
                        dd { "{value}" }
                    }
                }
            }

            if let Some(name) = monitored {
                section {
                    class: "monitored",
                    h2 { "Monitoring" }
                    p { "Viewing data of {name}" }
                    button {
                        class: "btn btn-text",
                        onclick: move |_| session.write().set_monitored_user_data(None),
                        "Stop monitoring"
                    }
                }
            }
        }
    }
}

/// Feature page whose content is not part of this app.
#[component]
pub fn PagePlaceholder(name: RouteName) -> Element {
    rsx! {
        div {
            class: "page",
            h1 { {name.title()} }
            p { class: "muted", "This section is not available yet." }
        }
    }
}

#[component]
pub fn NotFoundPage() -> Element {
    rsx! {
        StatusPage {
            title: "Page not found",
            message: "The page you are looking for does not exist.",
        }
    }
}

#[component]
pub fn AccessDeniedPage() -> Element {
    rsx! {
        StatusPage {
            title: "Access denied",
            message: "You do not have the permissions needed to see this page.",
        }
    }
}

#[component]
pub fn ErrorPageView() -> Element {
    rsx! {
        StatusPage {
            title: "Something went wrong",
            message: "An unexpected error happened. Please try again.",
        }
    }
}

#[component]
fn StatusPage(title: String, message: String) -> Element {
    let home = RouteTable::new().path_of(RouteName::Landing);

    rsx! {
        div {
            class: "status-page",
            h1 { "{title}" }
            p { "{message}" }
            Link { class: "btn btn-primary", to: home, "Go home" }
        }
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
