use rusqlite::Connection;

use crate::{
    stores::sqlite::{SQLAppState, create_app_state},
    subscription::KNOWN_SUBSCRIPTIONS,
};

pub(crate) fn get_test_app_state() -> SQLAppState {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");

    create_app_state(
        connection,
        "Etc/UTC",
        KNOWN_SUBSCRIPTIONS.map(String::from).to_vec(),
    )
    .expect("Could not create app state")
}
