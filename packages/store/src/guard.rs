//! Navigation guard: decides, before every route change, whether the
//! navigation goes ahead or is redirected.
//!
//! The guard is handed its session at construction through the
//! [`SessionView`] trait, so each platform can plug in whatever reactive handle
//! it keeps the [`SessionStore`] in.
//!
//! Rules, first match wins:
//!
//! 1. target requires auth and the user is not authenticated → login
//! 2. target is login or register and the user is authenticated → dashboard
//! 3. otherwise → allow
//!
//! Neither redirect target can trigger its own rule again: login is public, and
//! the dashboard is only chosen for an authenticated user.

use crate::routes::{RouteName, RouteTable};
use crate::session::SessionStore;

/// Read access to the authentication state the guard needs.
pub trait SessionView {
    fn is_authenticated(&self) -> bool;
}

impl SessionView for SessionStore {
    fn is_authenticated(&self) -> bool {
        SessionStore::is_authenticated(self)
    }
}

impl<T: SessionView + ?Sized> SessionView for &T {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

/// Outcome of evaluating one navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavDecision {
    Allow,
    RedirectToLogin,
    RedirectToDashboard,
}

impl NavDecision {
    /// Where to go instead, or `None` when the navigation is allowed.
    pub fn redirect_path(&self, table: &RouteTable) -> Option<&'static str> {
        match self {
            NavDecision::Allow => None,
            NavDecision::RedirectToLogin => Some(table.path_of(RouteName::Login)),
            NavDecision::RedirectToDashboard => Some(table.path_of(RouteName::Dashboard)),
        }
    }
}

pub struct NavigationGuard<S> {
    session: S,
    table: RouteTable,
}

impl<S: SessionView> NavigationGuard<S> {
    pub fn new(session: S) -> Self {
        Self::with_table(session, RouteTable::new())
    }

    pub fn with_table(session: S, table: RouteTable) -> Self {
        Self { session, table }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Decide the navigation to `path`. Unknown paths are judged as the
    /// `notfound` route.
    pub fn evaluate(&self, path: &str) -> NavDecision {
        let target = self.table.resolve_or_not_found(path);
        let authenticated = self.session.is_authenticated();

        let decision = if target.requires_auth() && !authenticated {
            NavDecision::RedirectToLogin
        } else if matches!(target.name(), RouteName::Login | RouteName::Register) && authenticated {
            NavDecision::RedirectToDashboard
        } else {
            NavDecision::Allow
        };

        if decision != NavDecision::Allow {
            tracing::debug!(path, target = %target.name(), ?decision, "navigation redirected");
        }
        decision
    }

    /// The path navigation should end up on: `path` itself when allowed,
    /// the redirect target otherwise.
    pub fn destination<'a>(&self, path: &'a str) -> &'a str {
        self.evaluate(path)
            .redirect_path(&self.table)
            .unwrap_or(path)
    }
}
