//! Endpoints for reading and updating the user's details.

use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    stores::SubscriptionStore,
    user::{UserProfile, domain::UserDetailsForm},
};

/// Route handler for the user's details, empty if they have not been set.
pub async fn get_user_details_endpoint<S>(
    State(state): State<AppState<S>>,
) -> Result<Json<UserProfile>, Error>
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    state.store.get_user_details().map(Json)
}

/// Route handler that replaces the user's name and email.
///
/// Responds with 400 if either field is empty.
pub async fn update_user_details_endpoint<S>(
    State(state): State<AppState<S>>,
    Form(form): Form<UserDetailsForm>,
) -> Response
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    let name = form.name.trim();
    let email = form.email.trim();

    if name.is_empty() || email.is_empty() {
        return Error::EmptyUserDetails.into_response();
    }

    match state.store.record_user_details(name, email) {
        Ok(profile) => Json(profile).into_response(),
        Err(error) => {
            tracing::error!("Could not update user details: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::{
        stores::SubscriptionStore,
        test_utils::{assert_status, get_test_app_state, parse_json},
        user::{UserProfile, domain::UserDetailsForm},
    };

    use super::{get_user_details_endpoint, update_user_details_endpoint};

    fn form(name: &str, email: &str) -> Form<UserDetailsForm> {
        Form(UserDetailsForm {
            name: name.to_owned(),
            email: email.to_owned(),
        })
    }

    #[tokio::test]
    async fn get_returns_empty_details_by_default() {
        let state = get_test_app_state();

        let response = get_user_details_endpoint(State(state)).await.into_response();

        assert_status(&response, StatusCode::OK);
        assert_eq!(
            parse_json(response).await,
            json!({ "name": "", "email": "" })
        );
    }

    #[tokio::test]
    async fn update_replaces_details() {
        let state = get_test_app_state();
        update_user_details_endpoint(
            State(state.clone()),
            form("Gary Gopher", "gary@gopher.com"),
        )
        .await;

        let response = update_user_details_endpoint(
            State(state.clone()),
            form("Gwen Gopher", "gwen@gopher.com"),
        )
        .await;

        assert_status(&response, StatusCode::OK);
        assert_eq!(
            state.store.get_user_details(),
            Ok(UserProfile {
                name: "Gwen Gopher".to_owned(),
                email: "gwen@gopher.com".to_owned(),
            })
        );
    }

    #[tokio::test]
    async fn update_rejects_empty_email() {
        let state = get_test_app_state();

        let response = update_user_details_endpoint(State(state.clone()), form("Gary Gopher", "")).await;

        assert_status(&response, StatusCode::BAD_REQUEST);
        assert_eq!(state.store.get_user_details(), Ok(UserProfile::default()));
    }
}
