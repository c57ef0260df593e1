//! The details of the person whose subscriptions are being tracked.

mod db;
mod domain;
mod endpoints;

pub use db::{create_user_table, get_user_profile, upsert_user_profile};
pub use domain::UserProfile;
pub use endpoints::{get_user_details_endpoint, update_user_details_endpoint};
