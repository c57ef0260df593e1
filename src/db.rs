//! Creates the application's database tables.

use rusqlite::Connection;

use crate::{subscription::create_subscription_table, user::create_user_table};

/// Create the tables for the domain models if they do not exist yet.
///
/// # Errors
///
/// Returns an error if any of the tables could not be created.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    create_subscription_table(connection)?;
    create_user_table(connection)?;

    Ok(())
}
