//! # Route table
//!
//! Static description of every navigable path in the dashboard and which ones
//! sit behind login. The table is data only: it is built once, never mutated,
//! and consulted by [`crate::guard::NavigationGuard`] before each navigation.
//!
//! ```text
//! /dashboard              (layout, requires auth)
//! ├── /dashboard          dashboard
//! ├── /pages/crud         crud
//! ├── /Redes              Redes
//! ├── /Guardar_Datos      Guardar_Datos
//! ├── /Perfil             Perfil
//! ├── /Prediccion         Prediccion
//! ├── /Quiz               Quiz
//! └── /Aprende            Aprende
//! /                       landing
//! /pages/notfound         notfound
//! /auth/login             login
//! /auth/register          register
//! /auth/access            accessDenied
//! /auth/error             error
//! ```
//!
//! Matching behaves like a browser history router: query and fragment are
//! ignored, a trailing slash is optional and case does not matter. Children
//! are tried before their parent. A path that matches nothing resolves to
//! `notfound`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifier of a named route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RouteName {
    Dashboard,
    Crud,
    Redes,
    GuardarDatos,
    Perfil,
    Prediccion,
    Quiz,
    Aprende,
    Landing,
    NotFound,
    Login,
    Register,
    AccessDenied,
    Error,
}

impl RouteName {
    pub const ALL: [RouteName; 14] = [
        RouteName::Dashboard,
        RouteName::Crud,
        RouteName::Redes,
        RouteName::GuardarDatos,
        RouteName::Perfil,
        RouteName::Prediccion,
        RouteName::Quiz,
        RouteName::Aprende,
        RouteName::Landing,
        RouteName::NotFound,
        RouteName::Login,
        RouteName::Register,
        RouteName::AccessDenied,
        RouteName::Error,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RouteName::Dashboard => "dashboard",
            RouteName::Crud => "crud",
            RouteName::Redes => "Redes",
            RouteName::GuardarDatos => "Guardar_Datos",
            RouteName::Perfil => "Perfil",
            RouteName::Prediccion => "Prediccion",
            RouteName::Quiz => "Quiz",
            RouteName::Aprende => "Aprende",
            RouteName::Landing => "landing",
            RouteName::NotFound => "notfound",
            RouteName::Login => "login",
            RouteName::Register => "register",
            RouteName::AccessDenied => "accessDenied",
            RouteName::Error => "error",
        }
    }

    /// Human-readable title used by menus and page headers.
    pub fn title(&self) -> &'static str {
        match self {
            RouteName::Dashboard => "Dashboard",
            RouteName::Crud => "CRUD",
            RouteName::Redes => "Redes",
            RouteName::GuardarDatos => "Guardar datos",
            RouteName::Perfil => "Perfil",
            RouteName::Prediccion => "Predicción",
            RouteName::Quiz => "Quiz",
            RouteName::Aprende => "Aprende",
            RouteName::Landing => "Inicio",
            RouteName::NotFound => "Not found",
            RouteName::Login => "Login",
            RouteName::Register => "Register",
            RouteName::AccessDenied => "Access denied",
            RouteName::Error => "Error",
        }
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not a known route name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown route name: {}", self.0)
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for RouteName {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteName::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

/// Static metadata for one navigable path.
#[derive(Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    /// `None` for pure layout entries that only group children.
    pub name: Option<RouteName>,
    pub path: &'static str,
    pub requires_auth: bool,
    pub children: &'static [RouteDescriptor],
}

impl RouteDescriptor {
    const fn leaf(name: RouteName, path: &'static str) -> Self {
        Self {
            name: Some(name),
            path,
            requires_auth: false,
            children: &[],
        }
    }

    /// Whether `path` (already normalised) addresses this entry.
    fn matches(&self, path: &str) -> bool {
        normalize(self.path) == path
    }
}

const DASHBOARD_CHILDREN: &[RouteDescriptor] = &[
    RouteDescriptor::leaf(RouteName::Dashboard, "/dashboard"),
    RouteDescriptor::leaf(RouteName::Crud, "/pages/crud"),
    RouteDescriptor::leaf(RouteName::Redes, "/Redes"),
    RouteDescriptor::leaf(RouteName::GuardarDatos, "/Guardar_Datos"),
    RouteDescriptor::leaf(RouteName::Perfil, "/Perfil"),
    RouteDescriptor::leaf(RouteName::Prediccion, "/Prediccion"),
    RouteDescriptor::leaf(RouteName::Quiz, "/Quiz"),
    RouteDescriptor::leaf(RouteName::Aprende, "/Aprende"),
];

const ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        name: None,
        path: "/dashboard",
        requires_auth: true,
        children: DASHBOARD_CHILDREN,
    },
    RouteDescriptor::leaf(RouteName::Landing, "/"),
    RouteDescriptor::leaf(RouteName::NotFound, "/pages/notfound"),
    RouteDescriptor::leaf(RouteName::Login, "/auth/login"),
    RouteDescriptor::leaf(RouteName::Register, "/auth/register"),
    RouteDescriptor::leaf(RouteName::AccessDenied, "/auth/access"),
    RouteDescriptor::leaf(RouteName::Error, "/auth/error"),
];

/// Strip query and fragment, drop one trailing slash and lowercase.
pub fn normalize(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let path = path.strip_suffix('/').unwrap_or(path);
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_lowercase()
    } else {
        format!("/{}", path.to_lowercase())
    }
}

/// The chain of descriptors a path resolved to, outermost first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub chain: Vec<&'static RouteDescriptor>,
}

impl RouteMatch {
    /// The named route at the end of the chain.
    pub fn name(&self) -> RouteName {
        self.chain
            .iter()
            .rev()
            .find_map(|route| route.name)
            .unwrap_or(RouteName::NotFound)
    }

    /// True if any segment of the chain requires login.
    pub fn requires_auth(&self) -> bool {
        self.chain.iter().any(|route| route.requires_auth)
    }
}

/// The dashboard's route table.
#[derive(Clone, Copy, Debug)]
pub struct RouteTable {
    routes: &'static [RouteDescriptor],
}

impl Default for RouteTable {
    fn default() -> Self {
        Self { routes: ROUTES }
    }
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn routes(&self) -> &'static [RouteDescriptor] {
        self.routes
    }

    /// Match `path` against the table. `None` when nothing matches.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        let path = normalize(path);
        let mut chain = Vec::new();
        find(self.routes, &path, &mut chain).then_some(RouteMatch { chain })
    }

    /// Like [`RouteTable::resolve`], falling back to the `notfound` route.
    pub fn resolve_or_not_found(&self, path: &str) -> RouteMatch {
        self.resolve(path)
            .or_else(|| self.resolve(self.path_of(RouteName::NotFound)))
            .unwrap_or(RouteMatch { chain: Vec::new() })
    }

    /// Canonical path of a named route.
    pub fn path_of(&self, name: RouteName) -> &'static str {
        self.iter()
            .find(|route| route.name == Some(name))
            .map(|route| route.path)
            .unwrap_or("/pages/notfound")
    }

    /// Canonical path to send `path` to when it names a route only through
    /// case or a trailing slash (`/redes/` → `/Redes`). `None` for canonical
    /// and unknown paths.
    pub fn canonical_redirect(&self, path: &str) -> Option<&'static str> {
        let end = path.find(['?', '#']).unwrap_or(path.len());
        let canonical = self.path_of(self.resolve(path)?.name());
        (canonical != &path[..end]).then_some(canonical)
    }

    /// Every descriptor, parents before their children.
    pub fn iter(&self) -> impl Iterator<Item = &'static RouteDescriptor> {
        let mut stack: Vec<&'static RouteDescriptor> = self.routes.iter().rev().collect();
        std::iter::from_fn(move || {
            let route = stack.pop()?;
            stack.extend(route.children.iter().rev());
            Some(route)
        })
    }
}

/// Depth-first search, children before their parent, leaving the matched
/// chain in `chain`.
fn find(
    routes: &'static [RouteDescriptor],
    path: &str,
    chain: &mut Vec<&'static RouteDescriptor>,
) -> bool {
    for route in routes {
        chain.push(route);
        if find(route.children, path, chain) {
            return true;
        }
        if route.name.is_some() && route.matches(path) {
            return true;
        }
        chain.pop();
    }
    false
}
