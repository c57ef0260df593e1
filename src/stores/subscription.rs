//! Defines the subscription store trait.

use rust_decimal::Decimal;

use crate::{
    Error,
    subscription::{NewSubscription, Subscription, SubscriptionId},
    user::UserProfile,
};

/// Records and retrieves subscriptions and the details of the user they belong to.
///
/// Implementations must make a write visible to any later read made through
/// the same store.
pub trait SubscriptionStore {
    /// Record a new subscription and return it with the ID the store assigned.
    ///
    /// Every call assigns a new, unique ID, even if the same subscription is
    /// recorded more than once. Empty names and zero amounts are accepted.
    fn record_subscription(&self, subscription: NewSubscription) -> Result<Subscription, Error>;

    /// Record several subscriptions at once, in order.
    ///
    /// Either every subscription is recorded or, on error, none are.
    fn record_subscriptions(
        &self,
        subscriptions: Vec<NewSubscription>,
    ) -> Result<Vec<Subscription>, Error>;

    /// Retrieve all subscriptions in the order they were recorded.
    fn get_subscriptions(&self) -> Result<Vec<Subscription>, Error>;

    /// Retrieve a subscription by its ID, or `None` if it does not exist.
    fn get_subscription(&self, id: SubscriptionId) -> Result<Option<Subscription>, Error>;

    /// Delete the subscription with `id`.
    ///
    /// Implementers should return [Error::InvalidSubscriptionId] for IDs that
    /// are zero or negative and [Error::DeleteMissingSubscription] if there is
    /// no subscription with `id`.
    fn delete_subscription(&self, id: SubscriptionId) -> Result<(), Error>;

    /// Delete every subscription with the given name and amount, returning the number deleted.
    fn delete_matching_subscriptions(&self, name: &str, amount: Decimal) -> Result<usize, Error>;

    /// Set the user's name and email, replacing any existing details.
    fn record_user_details(&self, name: &str, email: &str) -> Result<UserProfile, Error>;

    /// Get the user's details, or empty details if they have not been set.
    fn get_user_details(&self) -> Result<UserProfile, Error>;
}
