//! The API endpoints URIs.

/// The root route. GET lists subscriptions as JSON, POST records a subscription.
pub const ROOT: &str = "/";
/// The page for displaying the user's subscriptions.
pub const SUBSCRIPTIONS_VIEW: &str = "/subscriptions";

/// The route to get or delete a single subscription.
pub const SUBSCRIPTION: &str = "/api/subscriptions/{subscription_id}";
/// The route for deriving subscriptions from bank transactions.
pub const IMPORT_TRANSACTIONS: &str = "/api/transactions/import";
/// The route to get or update the user's details.
pub const USER_DETAILS: &str = "/api/user";

// These tests check that every endpoint parses as a URI.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::SUBSCRIPTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::IMPORT_TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::USER_DETAILS);
        assert_endpoint_is_valid_uri(&endpoints::SUBSCRIPTION.replace("{subscription_id}", "1"));
    }
}
