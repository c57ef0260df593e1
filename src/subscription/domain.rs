//! Core subscription domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

/// Database identifier for a subscription.
pub type SubscriptionId = i64;

/// A recurring payment, e.g. a streaming service or a gym membership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// The ID assigned by the store when the subscription was recorded.
    pub id: SubscriptionId,
    /// The display name, e.g. "Netflix".
    pub name: String,
    /// How much is paid each time the subscription is due.
    pub amount: Decimal,
    /// When the subscription is next due.
    pub due_date: Date,
}

/// A subscription that has not been recorded yet and so has no ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubscription {
    /// The display name, e.g. "Netflix".
    pub name: String,
    /// How much is paid each time the subscription is due.
    pub amount: Decimal,
    /// When the subscription is next due.
    pub due_date: Date,
}

impl NewSubscription {
    /// Attach the store-assigned `id`.
    pub fn with_id(self, id: SubscriptionId) -> Subscription {
        Subscription {
            id,
            name: self.name,
            amount: self.amount,
            due_date: self.due_date,
        }
    }
}

/// Form data for recording a subscription.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubscriptionForm {
    pub name: String,
    pub amount: Decimal,
    pub date: Date,
}
