//! Subscription deletion endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    stores::SubscriptionStore,
    subscription::SubscriptionId,
};

/// Handle subscription deletion.
///
/// Responds with 200 OK on success, 400 for the zero ID and 404 if the
/// subscription does not exist.
pub async fn delete_subscription_endpoint<S>(
    State(state): State<AppState<S>>,
    Path(subscription_id): Path<SubscriptionId>,
) -> Response
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    match state.store.delete_subscription(subscription_id) {
        Ok(()) => StatusCode::OK.into_response(),
        Err(error @ (Error::InvalidSubscriptionId(_) | Error::DeleteMissingSubscription)) => {
            error.into_response()
        }
        Err(error) => {
            tracing::error!(
                "An unexpected error occurred while deleting subscription {subscription_id}: {error}"
            );
            error.into_response()
        }
    }
}
