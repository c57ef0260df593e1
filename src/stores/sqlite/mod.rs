//! Contains convenience type alias and function for [AppState] that uses
//! the SQLite backend.

mod subscription;

pub use subscription::SQLiteSubscriptionStore;

use std::{
    path::Path,
    sync::{Arc, Mutex},
};

use rusqlite::Connection;

use crate::{AppState, Error, db::initialize, timezone::get_local_offset};

/// An alias for an [AppState] that uses SQLite for the backend.
pub type SQLAppState = AppState<SQLiteSubscriptionStore>;

/// Creates an [AppState] instance that uses SQLite for the backend.
///
/// This function will modify the database by adding the tables for the domain
/// models to the database.
///
/// # Errors
///
/// Returns an error if the tables could not be created.
pub fn create_app_state(
    db_connection: Connection,
    local_timezone: &str,
    known_subscriptions: Vec<String>,
) -> Result<SQLAppState, Error> {
    initialize(&db_connection)?;

    let connection = Arc::new(Mutex::new(db_connection));

    Ok(AppState::new(
        SQLiteSubscriptionStore::new(connection),
        local_timezone,
        known_subscriptions,
    ))
}

/// Open the SQLite database at `db_path` and create an [AppState] for it.
///
/// # Errors
///
/// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known
/// timezone, or an SQL error if the database cannot be opened or initialized.
pub fn open_app_state(
    db_path: &Path,
    local_timezone: &str,
    known_subscriptions: Vec<String>,
) -> Result<SQLAppState, Error> {
    if get_local_offset(local_timezone).is_none() {
        return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
    }

    let db_connection = Connection::open(db_path)?;

    create_app_state(db_connection, local_timezone, known_subscriptions)
}

#[cfg(test)]
mod open_app_state_tests {
    use std::{env, path::Path};

    use crate::{Error, stores::SubscriptionStore};

    use super::open_app_state;

    #[test]
    fn opens_database() {
        let state = open_app_state(Path::new(":memory:"), "Etc/UTC", vec!["KFC".to_owned()])
            .expect("Could not open database");

        assert_eq!(state.store.get_subscriptions(), Ok(vec![]));
        assert_eq!(&*state.known_subscriptions, ["KFC".to_owned()]);
    }

    #[test]
    fn fails_when_database_cannot_be_opened() {
        let result = open_app_state(&env::temp_dir(), "Etc/UTC", vec![]);

        assert!(matches!(result, Err(Error::SqlError(_))));
    }

    #[test]
    fn fails_on_unknown_timezone() {
        let result = open_app_state(Path::new(":memory:"), "Middle/Earth", vec![]);

        assert!(matches!(
            result,
            Err(Error::InvalidTimezoneError(timezone)) if timezone == "Middle/Earth"
        ));
    }
}
