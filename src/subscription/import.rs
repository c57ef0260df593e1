//! Endpoint for deriving subscriptions from bank transactions.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    AppState, Error,
    stores::SubscriptionStore,
    subscription::{Subscription, Transaction, match_transactions},
    timezone::get_local_date,
};

/// The request body for importing transactions.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportRequest {
    pub transactions: Vec<Transaction>,
}

/// Route handler that records the subscriptions found in a list of transactions.
///
/// Due dates are projected from today's date in the server's timezone.
/// Responds with 201 Created and the recorded subscriptions.
pub async fn import_transactions_endpoint<S>(
    State(state): State<AppState<S>>,
    Json(request): Json<ImportRequest>,
) -> Response
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    let today = match get_local_date(&state.local_timezone) {
        Ok(today) => today,
        Err(error) => return error.into_response(),
    };

    match import_transactions(
        &request.transactions,
        &state.known_subscriptions,
        today,
        &state.store,
    ) {
        Ok(subscriptions) => (StatusCode::CREATED, Json(subscriptions)).into_response(),
        Err(error) => {
            tracing::error!("Could not import transactions: {error}");
            error.into_response()
        }
    }
}

/// Match `transactions` against `known_names` and record every subscription found.
///
/// Nothing is recorded if any matching transaction is invalid or if the store
/// fails to record any of the subscriptions.
pub fn import_transactions<S>(
    transactions: &[Transaction],
    known_names: &[String],
    today: Date,
    store: &S,
) -> Result<Vec<Subscription>, Error>
where
    S: SubscriptionStore,
{
    let new_subscriptions = match_transactions(transactions, known_names, today)?;

    tracing::info!(
        "Found {} subscription(s) in {} transaction(s)",
        new_subscriptions.len(),
        transactions.len()
    );

    store.record_subscriptions(new_subscriptions)
}
