use dioxus::prelude::*;

use ui::views::{
    AccessDenied, Aprende, Crud, Dashboard, ErrorPage, GuardarDatos, Landing, Login, NotFound,
    Perfil, Prediccion, Quiz, Redes, Register,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Guarded)]
        #[route("/")]
        Landing {},
        #[layout(DashboardLayout)]
            #[route("/dashboard")]
            Dashboard {},
            #[route("/pages/crud")]
            Crud {},
            #[route("/Redes")]
            Redes {},
            #[route("/Guardar_Datos")]
            GuardarDatos {},
            #[route("/Perfil")]
            Perfil {},
            #[route("/Prediccion")]
            Prediccion {},
            #[route("/Quiz")]
            Quiz {},
            #[route("/Aprende")]
            Aprende {},
        #[end_layout]
        #[route("/pages/notfound")]
        NotFound {},
        #[route("/auth/login")]
        Login {},
        #[route("/auth/register")]
        Register {},
        #[route("/auth/access")]
        AccessDenied {},
        #[route("/auth/error")]
        ErrorPage {},
        #[route("/:..segments")]
        PageNotFound { segments: Vec<String> },
}

fn main() {
    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, WindowBuilder};

        dioxus::LaunchBuilder::desktop()
            .with_cfg(Config::new().with_window(WindowBuilder::new().with_title("Dashboard")))
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }

        ui::SessionProvider {
            ui::ViewProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Runs the navigation guard for every route.
#[component]
fn Guarded() -> Element {
    let route = use_route::<Route>();

    rsx! {
        ui::RouteGuard {
            path: route.to_string(),
            Outlet::<Route> {}
        }
    }
}

#[component]
fn DashboardLayout() -> Element {
    rsx! {
        ui::AppShell {
            Outlet::<Route> {}
        }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    rsx! {
        ui::views::UnknownRoute { path: format!("/{}", segments.join("/")) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::RouteTable;

    #[test]
    fn test_every_table_path_is_a_route() {
        for descriptor in RouteTable::new().iter().filter(|r| r.name.is_some()) {
            let route = descriptor.path.parse::<Route>().ok();
            assert!(
                !matches!(route, None | Some(Route::PageNotFound { .. })),
                "{} has no route",
                descriptor.path
            );
            assert_eq!(route.unwrap().to_string(), descriptor.path);
        }
    }
}
