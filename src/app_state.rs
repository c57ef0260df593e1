//! Implements a struct that holds the state of the REST server.

use std::sync::Arc;

use crate::stores::SubscriptionStore;

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState<S>
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    /// The store for subscriptions and the user's details.
    pub store: S,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    ///
    /// Used to work out today's date when projecting due dates.
    pub local_timezone: String,

    /// The transaction names that are recognised as subscriptions.
    pub known_subscriptions: Arc<[String]>,
}

impl<S> AppState<S>
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    /// Create a new [AppState].
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g. "Pacific/Auckland".
    pub fn new(store: S, local_timezone: &str, known_subscriptions: Vec<String>) -> Self {
        Self {
            store,
            local_timezone: local_timezone.to_owned(),
            known_subscriptions: known_subscriptions.into(),
        }
    }
}
