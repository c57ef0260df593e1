//! Contains the store trait for subscriptions and the user's details, and its
//! SQLite implementation.

mod subscription;

pub mod sqlite;

pub use sqlite::SQLiteSubscriptionStore;
pub use subscription::SubscriptionStore;
