//! The page listing the user's subscriptions.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rust_decimal::Decimal;

use crate::{
    AppState, Error,
    html::{PAGE_CONTAINER_STYLE, TABLE_CELL_NUMERIC_STYLE, TABLE_STYLE, base, format_currency},
    stores::SubscriptionStore,
    subscription::Subscription,
    user::UserProfile,
};

fn subscriptions_view(subscriptions: &[Subscription], user: &UserProfile) -> Markup {
    let total = subscriptions
        .iter()
        .try_fold(Decimal::ZERO, |total, subscription| {
            total.checked_add(subscription.amount)
        });

    if total.is_none() {
        tracing::warn!("The total of {} subscriptions overflowed", subscriptions.len());
    }

    let content = html!(
        div class=(PAGE_CONTAINER_STYLE)
        {
            h1
            {
                @if user.name.is_empty() {
                    "Subscriptions"
                } @else {
                    (user.name) "'s Subscriptions"
                }
            }

            table class=(TABLE_STYLE)
            {
                thead
                {
                    tr
                    {
                        th scope="col" { "Name" }
                        th scope="col" class=(TABLE_CELL_NUMERIC_STYLE) { "Amount" }
                        th scope="col" { "Due" }
                    }
                }

                tbody
                {
                    @for subscription in subscriptions {
                        tr
                        {
                            td { (subscription.name) }
                            td class=(TABLE_CELL_NUMERIC_STYLE) { (format_currency(subscription.amount)) }
                            td { (subscription.due_date) }
                        }
                    }

                    @if subscriptions.is_empty() {
                        tr
                        {
                            td colspan="3" { "No subscriptions recorded yet." }
                        }
                    }
                }

                tfoot
                {
                    tr
                    {
                        th scope="row" { "Total" }
                        td class=(TABLE_CELL_NUMERIC_STYLE)
                        {
                            @match total {
                                Some(total) => { (format_currency(total)) }
                                None => { "Too large to display" }
                            }
                        }
                        td {}
                    }
                }
            }
        }
    );

    base("Subscriptions", &content)
}

/// Route handler for the subscriptions listing page.
pub async fn get_subscriptions_page<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
    S: SubscriptionStore + Clone + Send + Sync,
{
    let subscriptions = state
        .store
        .get_subscriptions()
        .inspect_err(|error| tracing::error!("Failed to retrieve subscriptions: {error}"))?;

    let user = state
        .store
        .get_user_details()
        .inspect_err(|error| tracing::error!("Failed to retrieve user details: {error}"))?;

    Ok(subscriptions_view(&subscriptions, &user).into_response())
}
