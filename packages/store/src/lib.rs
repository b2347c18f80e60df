pub mod config;
pub mod guard;
pub mod models;
pub mod registry;
pub mod routes;
pub mod session;

pub use config::{DashboardConfig, FirebaseConfig, ProfileConfig};
pub use guard::{NavDecision, NavigationGuard, SessionView};
pub use models::{Dias, ProfileRecord};
pub use registry::ViewRegistry;
pub use routes::{RouteDescriptor, RouteMatch, RouteName, RouteTable};
pub use session::{is_authenticated, SessionStore};
