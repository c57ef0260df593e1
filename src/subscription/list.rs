//! Endpoints for reading subscriptions as JSON.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState, Error,
    stores::SubscriptionStore,
    subscription::{Subscription, SubscriptionId},
};

/// Route handler that lists every recorded subscription.
pub async fn get_subscriptions_endpoint<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Subscription>>, Error>
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    state
        .store
        .get_subscriptions()
        .inspect_err(|error| tracing::error!("Failed to retrieve subscriptions: {error}"))
        .map(Json)
}

/// Route handler for a single subscription, responds with 404 if it does not exist.
pub async fn get_subscription_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(subscription_id): Path<SubscriptionId>,
) -> Result<Json<Subscription>, Error>
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    match state.store.get_subscription(subscription_id)? {
        Some(subscription) => Ok(Json(subscription)),
        None => Err(Error::NotFound),
    }
}
