//! Route name → view constructor registry.
//!
//! Views are registered as closures and only built when a route is actually
//! rendered. The registry is generic over the view type so the platform crates
//! can store `dioxus::Element` builders while tests use plain strings.

use std::collections::BTreeMap;

use crate::routes::RouteName;

type Builder<V> = Box<dyn Fn() -> V>;

pub struct ViewRegistry<V> {
    builders: BTreeMap<RouteName, Builder<V>>,
}

impl<V> Default for ViewRegistry<V> {
    fn default() -> Self {
        Self {
            builders: BTreeMap::new(),
        }
    }
}

impl<V> ViewRegistry<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the constructor for `name`, replacing any previous one.
    pub fn register(&mut self, name: RouteName, build: impl Fn() -> V + 'static) -> &mut Self {
        self.builders.insert(name, Box::new(build));
        self
    }

    pub fn contains(&self, name: RouteName) -> bool {
        self.builders.contains_key(&name)
    }

    /// Build a fresh view for `name`.
    pub fn build(&self, name: RouteName) -> Option<V> {
        self.builders.get(&name).map(|build| build())
    }

    pub fn names(&self) -> impl Iterator<Item = RouteName> + '_ {
        self.builders.keys().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_views_are_built_on_demand() {
        let built = Rc::new(Cell::new(0));
        let counter = built.clone();

        let mut registry = ViewRegistry::new();
        registry.register(RouteName::Quiz, move || {
            counter.set(counter.get() + 1);
            "quiz".to_string()
        });

        assert_eq!(built.get(), 0);
        assert_eq!(registry.build(RouteName::Quiz).as_deref(), Some("quiz"));
        assert_eq!(registry.build(RouteName::Quiz).as_deref(), Some("quiz"));
        assert_eq!(built.get(), 2);
    }

    #[test]
    fn test_unregistered_route_builds_nothing() {
        let mut registry: ViewRegistry<String> = ViewRegistry::new();
        registry
            .register(RouteName::Landing, || "landing".into())
            .register(RouteName::Login, || "login".into());

        assert!(registry.contains(RouteName::Login));
        assert!(!registry.contains(RouteName::Perfil));
        assert!(registry.build(RouteName::Perfil).is_none());
        assert_eq!(
            registry.names().collect::<Vec<_>>(),
            vec![RouteName::Landing, RouteName::Login]
        );
    }
}
