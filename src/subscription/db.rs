//! Database operations for subscriptions.

use std::str::FromStr;

use rusqlite::{Connection, OptionalExtension, Row, types::Type};
use rust_decimal::Decimal;

use crate::{
    Error,
    subscription::{NewSubscription, Subscription, SubscriptionId},
};

/// Record a subscription and return it with its generated ID.
///
/// The subscription is not validated, an empty name and a zero amount are
/// stored as given.
pub fn create_subscription(
    subscription: NewSubscription,
    connection: &Connection,
) -> Result<Subscription, Error> {
    connection.execute(
        "INSERT INTO subscriptions (name, amount, date_due) VALUES (?1, ?2, ?3);",
        (
            &subscription.name,
            subscription.amount.to_string(),
            subscription.due_date,
        ),
    )?;

    let id = connection.last_insert_rowid();

    Ok(subscription.with_id(id))
}

/// Record `subscriptions` in a single database transaction, returning them with their generated IDs.
///
/// If any insert fails, none of the subscriptions are recorded.
pub fn create_subscriptions(
    subscriptions: Vec<NewSubscription>,
    connection: &Connection,
) -> Result<Vec<Subscription>, Error> {
    // The caller holds the connection lock, so there are no nested transactions.
    let transaction = connection.unchecked_transaction()?;

    let created = subscriptions
        .into_iter()
        .map(|subscription| create_subscription(subscription, &transaction))
        .collect::<Result<Vec<_>, _>>()?;

    transaction.commit()?;

    Ok(created)
}

/// Retrieve a single subscription by ID, or `None` if there is no such subscription.
pub fn get_subscription(
    subscription_id: SubscriptionId,
    connection: &Connection,
) -> Result<Option<Subscription>, Error> {
    connection
        .prepare("SELECT id, name, amount, date_due FROM subscriptions WHERE id = :id;")?
        .query_row(&[(":id", &subscription_id)], map_row)
        .optional()
        .map_err(|error| error.into())
}

/// Retrieve all subscriptions in the order they were recorded.
pub fn get_all_subscriptions(connection: &Connection) -> Result<Vec<Subscription>, Error> {
    connection
        .prepare("SELECT id, name, amount, date_due FROM subscriptions ORDER BY id ASC;")?
        .query_map([], map_row)?
        .map(|maybe_subscription| maybe_subscription.map_err(|error| error.into()))
        .collect()
}

/// Delete the subscription with `subscription_id`.
///
/// # Errors
///
/// Returns [Error::InvalidSubscriptionId] if the ID is zero or negative, and
/// [Error::DeleteMissingSubscription] if there is no subscription with the ID.
pub fn delete_subscription(
    subscription_id: SubscriptionId,
    connection: &Connection,
) -> Result<(), Error> {
    if subscription_id <= 0 {
        return Err(Error::InvalidSubscriptionId(subscription_id));
    }

    let rows_affected =
        connection.execute("DELETE FROM subscriptions WHERE id = ?1", [subscription_id])?;

    if rows_affected == 0 {
        return Err(Error::DeleteMissingSubscription);
    }

    Ok(())
}

/// Delete every subscription with the same name and amount, returning how many were deleted.
///
/// Amounts are compared by value, so "7.9" matches "7.90".
pub fn delete_matching_subscriptions(
    name: &str,
    amount: Decimal,
    connection: &Connection,
) -> Result<usize, Error> {
    let transaction = connection.unchecked_transaction()?;

    let matching_ids = transaction
        .prepare("SELECT id, name, amount, date_due FROM subscriptions WHERE name = ?1;")?
        .query_map([name], map_row)?
        .filter_map(|maybe_subscription| match maybe_subscription {
            Ok(subscription) if subscription.amount == amount => Some(Ok(subscription.id)),
            Ok(_) => None,
            Err(error) => Some(Err(error)),
        })
        .collect::<Result<Vec<SubscriptionId>, rusqlite::Error>>()?;

    let mut rows_affected = 0;
    {
        let mut statement = transaction.prepare("DELETE FROM subscriptions WHERE id = ?1")?;

        for id in matching_ids {
            rows_affected += statement.execute([id])?;
        }
    }

    transaction.commit()?;

    Ok(rows_affected)
}

/// Initialize the subscriptions table.
///
/// `AUTOINCREMENT` stops SQLite from reusing the IDs of deleted rows.
pub fn create_subscription_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS subscriptions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            amount TEXT NOT NULL,
            date_due TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_subscriptions_name ON subscriptions(name);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Subscription, rusqlite::Error> {
    let id = row.get(0)?;
    let name = row.get(1)?;
    let raw_amount: String = row.get(2)?;
    let amount = Decimal::from_str(&raw_amount)
        .map_err(|error| rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(error)))?;
    let due_date = row.get(3)?;

    Ok(Subscription {
        id,
        name,
        amount,
        due_date,
    })
}
