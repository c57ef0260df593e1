//! Subscription creation endpoint.

use axum::{
    Form, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    stores::SubscriptionStore,
    subscription::{NewSubscription, domain::SubscriptionForm},
};

/// Route handler for recording a subscription from a submitted form.
///
/// Responds with 202 Accepted and the recorded subscription, or 400 if the
/// name is empty.
pub async fn create_subscription_endpoint<S>(
    State(state): State<AppState<S>>,
    Form(form): Form<SubscriptionForm>,
) -> Response
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    let name = form.name.trim();

    if name.is_empty() {
        return Error::EmptySubscriptionName.into_response();
    }

    let subscription = NewSubscription {
        name: name.to_owned(),
        amount: form.amount,
        due_date: form.date,
    };

    match state.store.record_subscription(subscription) {
        Ok(subscription) => {
            tracing::info!("Recorded subscription {}", subscription.id);
            (StatusCode::ACCEPTED, Json(subscription)).into_response()
        }
        Err(error) => {
            tracing::error!("Could not record subscription {form:?}: {error}");
            error.into_response()
        }
    }
}
