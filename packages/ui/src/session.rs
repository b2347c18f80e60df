//! Session context and hooks for the UI.
//!
//! [`SessionProvider`] owns the [`SessionStore`] for the lifetime of the app and
//! hands it to every view through context. Nothing reaches for a global: the
//! guard gets the session injected through [`SessionHandle`].
//!
//! Local profile edits are written back by a single writer coroutine, one
//! request at a time in the order they were sent.

use std::future::Future;

use api::config::ConfigError;
use api::{ApiError, Identity, ProfileClient};
use dioxus::prelude::*;
use futures::{Stream, StreamExt};
use store::{DashboardConfig, Dias, NavigationGuard, ProfileRecord, SessionStore, SessionView};

/// Reactive session handle handed to the navigation guard.
///
/// Reading through it subscribes the calling component, so the guard is
/// re-run whenever the session changes.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionHandle(pub Signal<SessionStore>);

impl SessionView for SessionHandle {
    fn is_authenticated(&self) -> bool {
        self.0.read().is_authenticated()
    }
}

/// Get the session signal.
pub fn use_session() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// The verified identity of the signed-in user, needed to write to the
/// profile database.
pub fn use_identity() -> Signal<Option<Identity>> {
    use_context::<Signal<Option<Identity>>>()
}

pub fn use_config() -> Signal<DashboardConfig> {
    use_context::<Signal<DashboardConfig>>()
}

/// Build a navigation guard over the current session.
pub fn use_navigation_guard() -> NavigationGuard<SessionHandle> {
    NavigationGuard::new(SessionHandle(use_session()))
}

/// Provider component for session, identity and configuration, plus the
/// profile writer. Wrap your app with this component.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_context_provider(|| Signal::new(SessionStore::new()));
    let identity = use_context_provider(|| Signal::new(Option::<Identity>::None));
    let config = use_context_provider(|| {
        let config = match api::config::load() {
            Ok(config) => config,
            Err(ConfigError::Missing(field)) => {
                tracing::warn!("Firebase is not configured ({field}), sign-in will fail");
                DashboardConfig::default()
            }
            Err(e) => {
                tracing::error!("Failed to load config: {}", e);
                DashboardConfig::default()
            }
        };
        Signal::new(config)
    });

    use_coroutine(move |changes: UnboundedReceiver<ProfileChange>| {
        write_in_order(changes, move |change| async move {
            // read at write time: a change queued before logout is dropped
            let Some(identity) = identity() else {
                tracing::debug!("no identity, keeping change local");
                return;
            };
            if let Err(e) = save(&config(), &identity, &change).await {
                tracing::error!("Failed to save profile change: {}", e);
            }
        })
    });

    rsx! {
        {children}
    }
}

/// Handle to the profile writer started by [`SessionProvider`].
///
/// `send` queues a change; changes reach the database in send order.
pub fn use_profile_writer() -> Coroutine<ProfileChange> {
    use_coroutine_handle::<ProfileChange>()
}

/// Populate the session after a successful login or registration.
pub fn start_session(
    mut session: Signal<SessionStore>,
    mut identity: Signal<Option<Identity>>,
    verified: Identity,
    record: ProfileRecord,
) {
    identity.set(Some(verified));
    session.write().hydrate(record);
}

/// Forget the signed-in user.
pub fn end_session(mut session: Signal<SessionStore>, mut identity: Signal<Option<Identity>>) {
    session.write().reset();
    identity.set(None);
    tracing::info!("signed out");
}

/// A profile field edited locally that must be written back.
#[derive(Clone, Debug, PartialEq)]
pub enum ProfileChange {
    Favorites(Vec<String>),
    Dias(Dias),
}

/// Hand each change to `write`, waiting for one write to finish before the
/// next starts.
async fn write_in_order<S, W, F>(mut changes: S, mut write: W)
where
    S: Stream<Item = ProfileChange> + Unpin,
    W: FnMut(ProfileChange) -> F,
    F: Future<Output = ()>,
{
    while let Some(change) = changes.next().await {
        write(change).await;
    }
}

async fn save(
    config: &DashboardConfig,
    identity: &Identity,
    change: &ProfileChange,
) -> Result<(), ApiError> {
    let client = ProfileClient::new(config)?;
    match change {
        ProfileChange::Favorites(favorites) => client.save_favorites(identity, favorites).await,
        ProfileChange::Dias(dias) => client.save_dias(identity, dias).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::mpsc;
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_changes_are_written_in_send_order() {
        let (tx, rx) = mpsc::unbounded();
        let mut dias = Dias::new();
        dias.insert("2024-05-01".into(), json!({ "nota": "quiz" }));

        let sent = vec![
            ProfileChange::Favorites(vec!["a".into(), "b".into()]),
            ProfileChange::Dias(dias),
            ProfileChange::Favorites(vec!["b".into()]),
        ];
        for change in sent.clone() {
            tx.unbounded_send(change).unwrap();
        }
        drop(tx);

        let log = RefCell::new(Vec::new());
        futures::executor::block_on(write_in_order(rx, |change| {
            let log = &log;
            async move {
                log.borrow_mut().push(format!("start {change:?}"));
                futures::future::ready(()).await;
                log.borrow_mut().push(format!("end {change:?}"));
            }
        }));

        let expected: Vec<String> = sent
            .iter()
            .flat_map(|change| [format!("start {change:?}"), format!("end {change:?}")])
            .collect();
        assert_eq!(log.into_inner(), expected);
    }

    #[test]
    fn test_writer_stops_when_senders_are_gone() {
        let (tx, rx) = mpsc::unbounded::<ProfileChange>();
        drop(tx);

        let mut writes = 0;
        futures::executor::block_on(write_in_order(rx, |_| {
            writes += 1;
            async {}
        }));
        assert_eq!(writes, 0);
    }
}
