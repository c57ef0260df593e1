//! Application router configuration.

use axum::{
    Router, middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState, Error, endpoints,
    logging::logging_middleware,
    stores::SubscriptionStore,
    subscription::{
        create_subscription_endpoint, delete_subscription_endpoint, get_subscription_endpoint,
        get_subscriptions_endpoint, get_subscriptions_page, import_transactions_endpoint,
    },
    user::{get_user_details_endpoint, update_user_details_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: SubscriptionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::ROOT,
            get(get_subscriptions_endpoint::<S>).post(create_subscription_endpoint::<S>),
        )
        .route(
            endpoints::SUBSCRIPTIONS_VIEW,
            get(get_subscriptions_page::<S>),
        )
        .route(
            endpoints::SUBSCRIPTION,
            get(get_subscription_endpoint::<S>).delete(delete_subscription_endpoint::<S>),
        )
        .route(
            endpoints::IMPORT_TRANSACTIONS,
            post(import_transactions_endpoint::<S>),
        )
        .route(
            endpoints::USER_DETAILS,
            get(get_user_details_endpoint::<S>).post(update_user_details_endpoint::<S>),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}
