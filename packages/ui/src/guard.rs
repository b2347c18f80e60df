use dioxus::prelude::*;

use crate::use_navigation_guard;

/// Renders `children` only if the navigation guard allows `path`, otherwise
/// replaces the current route with the redirect target.
///
/// Platforms wrap their whole route tree in this, passing the current route's
/// path, so the guard runs on every navigation: links, back/forward, and the
/// redirects it issues itself.
#[component]
pub fn RouteGuard(path: String, children: Element) -> Element {
    let guard = use_navigation_guard();
    let nav = use_navigator();

    match guard.evaluate(&path).redirect_path(guard.table()) {
        None => rsx! {
            {children}
        },
        Some(target) => {
            nav.replace(target);
            rsx! {}
        }
    }
}
