//! Subscrypt is a web app for keeping track of recurring subscriptions.
//!
//! Subscriptions can be recorded by hand or derived from a list of bank
//! transactions by matching transaction descriptions against a list of known
//! subscription names. This library provides a JSON API plus a single HTML page
//! for viewing the recorded subscriptions.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod db;
mod endpoints;
mod html;
mod logging;
mod routing;
mod stores;
mod subscription;
mod timezone;
mod user;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use stores::{
    SQLiteSubscriptionStore, SubscriptionStore,
    sqlite::{SQLAppState, create_app_state, open_app_state},
};
pub use subscription::{
    KNOWN_SUBSCRIPTIONS, NewSubscription, Subscription, SubscriptionId, Transaction,
    match_transactions, parse_transaction_date, project_due_date, project_due_date_from_str,
};
pub use timezone::get_local_offset;
pub use user::UserProfile;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The zero/default ID (or any negative ID) was used to refer to a subscription.
    ///
    /// The store assigns positive IDs only, so such an ID can never refer to
    /// a stored subscription.
    #[error("{0} is not a valid subscription ID")]
    InvalidSubscriptionId(i64),

    /// Tried to delete a subscription that does not exist.
    #[error("tried to delete a subscription that is not in the database")]
    DeleteMissingSubscription,

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// A transaction date was not in the `YYYY-MM-DD` format.
    #[error("could not parse the transaction date \"{0}\", expected YYYY-MM-DD")]
    InvalidTransactionDate(String),

    /// A transaction amount was NaN or infinite and has no decimal representation.
    #[error("the transaction amount {0} cannot be represented as a decimal")]
    InvalidAmount(f64),

    /// The projected due date falls outside of the supported calendar range.
    #[error("the projected due date is out of range")]
    InvalidDueDate,

    /// An empty string was used as a subscription name.
    #[error("subscription name cannot be empty")]
    EmptySubscriptionName,

    /// The user's name or email was empty.
    #[error("user name and email cannot be empty")]
    EmptyUserDetails,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidSubscriptionId(_)
            | Error::InvalidTransactionDate(_)
            | Error::InvalidAmount(_)
            | Error::InvalidDueDate
            | Error::EmptySubscriptionName
            | Error::EmptyUserDetails => StatusCode::BAD_REQUEST,
            Error::NotFound | Error::DeleteMissingSubscription => StatusCode::NOT_FOUND,
            Error::InvalidTimezoneError(_) | Error::DatabaseLockError | Error::SqlError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let message = match self {
            Error::InvalidTimezoneError(timezone) => format!(
                "Could not get local timezone \"{timezone}\". Check your server settings and \
                ensure the timezone has been set to valid, canonical timezone string"
            ),
            // Internal errors are not intended to be shown to the client.
            error if status_code == StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("An unexpected error occurred: {}", error);
                "An unexpected error occurred, check the server logs for more details.".to_owned()
            }
            error => error.to_string(),
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        Error,
        test_utils::{assert_content_type, parse_json},
    };

    #[test]
    fn no_rows_maps_to_not_found() {
        let error = Error::from(rusqlite::Error::QueryReturnedNoRows);

        assert_eq!(error, Error::NotFound);
    }

    #[tokio::test]
    async fn invalid_id_is_a_bad_request() {
        let response = Error::InvalidSubscriptionId(0).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_content_type(&response, "application/json");
        let body = parse_json(response).await;
        assert_eq!(body["error"], "0 is not a valid subscription ID");
    }

    #[tokio::test]
    async fn internal_errors_hide_details() {
        let response = Error::DatabaseLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse_json(response).await;
        assert_eq!(
            body["error"],
            "An unexpected error occurred, check the server logs for more details."
        );
    }

    #[tokio::test]
    async fn missing_subscription_is_not_found() {
        let response = Error::DeleteMissingSubscription.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
