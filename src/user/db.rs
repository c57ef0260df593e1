//! Database operations for the user's details.

use rusqlite::{Connection, OptionalExtension};

use crate::{Error, user::UserProfile};

/// The ID of the one and only row in the users table.
const USER_ROW_ID: i64 = 1;

/// Set the user's name and email, replacing the details that were there before.
pub fn upsert_user_profile(
    name: &str,
    email: &str,
    connection: &Connection,
) -> Result<UserProfile, Error> {
    connection.execute(
        "INSERT INTO users (id, name, email) VALUES (?1, ?2, ?3)
        ON CONFLICT(id) DO UPDATE SET name = excluded.name, email = excluded.email;",
        (USER_ROW_ID, name, email),
    )?;

    Ok(UserProfile {
        name: name.to_owned(),
        email: email.to_owned(),
    })
}

/// Get the user's details, or [UserProfile::default] if none have been recorded.
pub fn get_user_profile(connection: &Connection) -> Result<UserProfile, Error> {
    let profile = connection
        .prepare("SELECT name, email FROM users WHERE id = :id;")?
        .query_row(&[(":id", &USER_ROW_ID)], |row| {
            Ok(UserProfile {
                name: row.get(0)?,
                email: row.get(1)?,
            })
        })
        .optional()?;

    Ok(profile.unwrap_or_default())
}

/// Create the users table.
///
/// The table holds at most one row.
pub fn create_user_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                name TEXT NOT NULL,
                email TEXT NOT NULL
                )",
        (),
    )?;

    Ok(())
}
