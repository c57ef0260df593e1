//! Recording subscriptions and deriving them from bank transactions.

mod create;
mod db;
mod delete;
mod domain;
mod due_date;
mod import;
mod list;
mod matcher;
mod page;

pub use create::create_subscription_endpoint;
pub use db::{
    create_subscription, create_subscription_table, create_subscriptions,
    delete_matching_subscriptions, delete_subscription, get_all_subscriptions, get_subscription,
};
pub use delete::delete_subscription_endpoint;
pub use domain::{NewSubscription, Subscription, SubscriptionId};
pub use due_date::{parse_transaction_date, project_due_date, project_due_date_from_str};
pub use import::import_transactions_endpoint;
pub use list::{get_subscription_endpoint, get_subscriptions_endpoint};
pub use matcher::{KNOWN_SUBSCRIPTIONS, Transaction, match_transactions};
pub use page::get_subscriptions_page;
