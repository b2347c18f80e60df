use dioxus::prelude::*;
use store::{RouteName, RouteTable};

use crate::{use_session, LogoutButton};

/// Feature pages listed in the dashboard menu, in display order.
pub const MENU: [RouteName; 8] = [
    RouteName::Dashboard,
    RouteName::Crud,
    RouteName::Redes,
    RouteName::GuardarDatos,
    RouteName::Perfil,
    RouteName::Prediccion,
    RouteName::Quiz,
    RouteName::Aprende,
];

/// Layout around every page behind login: top bar, menu and content.
#[component]
pub fn AppShell(children: Element) -> Element {
    let session = use_session();
    let table = RouteTable::new();

    let user_name = session
        .read()
        .full_user_data
        .as_ref()
        .and_then(|record| record.display_name().map(str::to_string))
        .unwrap_or_default();

    rsx! {
        div {
            class: "layout-wrapper",

            header {
                class: "layout-topbar",
                Link { class: "layout-topbar-logo", to: table.path_of(RouteName::Landing), "Dashboard" }
                div {
                    class: "layout-topbar-actions",
                    span { class: "layout-user", "{user_name}" }
                    LogoutButton { class: "btn btn-text" }
                }
            }

            nav {
                class: "layout-sidebar",
                ul {
                    for name in MENU {
                        li {
                            key: "{name}",
                            Link {
                                class: "layout-menuitem",
                                active_class: "active",
                                to: table.path_of(name),
                                {name.title()}
                            }
                        }
                    }
                }
            }

            main {
                class: "layout-main",
                {children}
            }
        }
    }
}
