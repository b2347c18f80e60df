//! Page views and the registry that builds them.
//!
//! Each route component below only names its [`RouteName`]; the page itself
//! comes out of the [`ViewRegistry`] provided by [`ViewProvider`], built when
//! the route is rendered.

use std::rc::Rc;

use dioxus::prelude::*;
use store::{RouteName, RouteTable, ViewRegistry};

mod pages;
pub use pages::{
    AccessDeniedPage, DashboardPage, ErrorPageView, GuardarDatosPage, LandingPage, NotFoundPage,
    PagePlaceholder, PerfilPage,
};

/// Route name → page constructor.
pub fn registry() -> ViewRegistry<Element> {
    let mut registry = ViewRegistry::new();
    registry
        .register(RouteName::Landing, || rsx! { LandingPage {} })
        .register(RouteName::Dashboard, || rsx! { DashboardPage {} })
        .register(RouteName::Crud, || rsx! { PagePlaceholder { name: RouteName::Crud } })
        .register(RouteName::Redes, || rsx! { PagePlaceholder { name: RouteName::Redes } })
        .register(RouteName::GuardarDatos, || rsx! { GuardarDatosPage {} })
        .register(RouteName::Perfil, || rsx! { PerfilPage {} })
        .register(RouteName::Prediccion, || rsx! { PagePlaceholder { name: RouteName::Prediccion } })
        .register(RouteName::Quiz, || rsx! { PagePlaceholder { name: RouteName::Quiz } })
        .register(RouteName::Aprende, || rsx! { PagePlaceholder { name: RouteName::Aprende } })
        .register(RouteName::NotFound, || rsx! { NotFoundPage {} })
        .register(RouteName::Login, || rsx! { crate::LoginForm {} })
        .register(RouteName::Register, || rsx! { crate::RegisterForm {} })
        .register(RouteName::AccessDenied, || rsx! { AccessDeniedPage {} })
        .register(RouteName::Error, || rsx! { ErrorPageView {} });
    registry
}

/// Provides the view registry to every [`RegisteredView`] below it.
#[component]
pub fn ViewProvider(children: Element) -> Element {
    use_context_provider(|| Rc::new(registry()));

    rsx! {
        {children}
    }
}

/// Build the page registered for `name`.
#[component]
pub fn RegisteredView(name: RouteName) -> Element {
    let registry = use_context::<Rc<ViewRegistry<Element>>>();
    match registry.build(name) {
        Some(view) => view,
        None => {
            tracing::warn!(route = %name, "no view registered");
            rsx! { NotFoundPage {} }
        }
    }
}

/// Fallback for paths the router could not match exactly.
///
/// The route table is case-insensitive and ignores trailing slashes, so
/// `/redes/` still names a page: send it to the canonical path. Anything else
/// is not found.
#[component]
pub fn UnknownRoute(path: String) -> Element {
    let nav = use_navigator();

    if let Some(canonical) = RouteTable::new().canonical_redirect(&path) {
        nav.replace(canonical);
        return rsx! {};
    }

    rsx! { RegisteredView { name: RouteName::NotFound } }
}

// Route components, one per named route.

#[component]
pub fn Landing() -> Element {
    rsx! { RegisteredView { name: RouteName::Landing } }
}

#[component]
pub fn Dashboard() -> Element {
    rsx! { RegisteredView { name: RouteName::Dashboard } }
}

#[component]
pub fn Crud() -> Element {
    rsx! { RegisteredView { name: RouteName::Crud } }
}

#[component]
pub fn Redes() -> Element {
    rsx! { RegisteredView { name: RouteName::Redes } }
}

#[component]
pub fn GuardarDatos() -> Element {
    rsx! { RegisteredView { name: RouteName::GuardarDatos } }
}

#[component]
pub fn Perfil() -> Element {
    rsx! { RegisteredView { name: RouteName::Perfil } }
}

#[component]
pub fn Prediccion() -> Element {
    rsx! { RegisteredView { name: RouteName::Prediccion } }
}

#[component]
pub fn Quiz() -> Element {
    rsx! { RegisteredView { name: RouteName::Quiz } }
}

#[component]
pub fn Aprende() -> Element {
    rsx! { RegisteredView { name: RouteName::Aprende } }
}

#[component]
pub fn NotFound() -> Element {
    rsx! { RegisteredView { name: RouteName::NotFound } }
}

#[component]
pub fn Login() -> Element {
    rsx! { RegisteredView { name: RouteName::Login } }
}

#[component]
pub fn Register() -> Element {
    rsx! { RegisteredView { name: RouteName::Register } }
}

#[component]
pub fn AccessDenied() -> Element {
    rsx! { RegisteredView { name: RouteName::AccessDenied } }
}

#[component]
pub fn ErrorPage() -> Element {
    rsx! { RegisteredView { name: RouteName::Error } }
}
