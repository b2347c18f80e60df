//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod views;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod session;
pub use session::{
    end_session, start_session, use_config, use_identity, use_navigation_guard,
    use_profile_writer, use_session, ProfileChange, SessionHandle, SessionProvider,
};

mod guard;
pub use guard::RouteGuard;

mod auth;
pub use auth::{LoginForm, LogoutButton, RegisterForm};

mod shell;
pub use shell::{AppShell, MENU};

pub use views::{RegisteredView, ViewProvider};
