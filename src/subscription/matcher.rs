//! Derives subscriptions from bank transactions.

use std::collections::HashSet;

use rust_decimal::{Decimal, prelude::FromPrimitive};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    Error,
    subscription::{NewSubscription, due_date::project_due_date_from_str},
};

/// The subscription names recognised when none are configured.
pub const KNOWN_SUBSCRIPTIONS: [&str; 5] = [
    "Netflix",
    "Touchstone Climbing",
    "SparkFun",
    "Tectra Inc",
    "KFC",
];

/// A transaction as reported by the bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The transaction description, e.g. "Netflix".
    pub name: String,
    /// The amount paid.
    pub amount: f64,
    /// The date the transaction was made in the format `YYYY-MM-DD`.
    pub date: String,
}

/// Find the transactions whose name is in `known_names` and turn them into subscriptions.
///
/// Only the first transaction for each name is used, later transactions with
/// the same name are ignored even if their amount or date differs. The
/// subscriptions are returned in the order their names first appear and are
/// due on the next occurrence of the transaction's day of the month after
/// `today`.
///
/// # Errors
///
/// Returns an error if a matching transaction has an amount that is not a
/// finite number ([Error::InvalidAmount]) or a date that cannot be parsed
/// ([Error::InvalidTransactionDate]). Transactions that do not match are
/// never inspected.
pub fn match_transactions(
    transactions: &[Transaction],
    known_names: &[String],
    today: Date,
) -> Result<Vec<NewSubscription>, Error> {
    let mut seen_names: HashSet<&str> = HashSet::new();
    let mut subscriptions = Vec::new();

    for transaction in transactions {
        if seen_names.contains(transaction.name.as_str())
            || !known_names.contains(&transaction.name)
        {
            continue;
        }

        let amount =
            Decimal::from_f64(transaction.amount).ok_or(Error::InvalidAmount(transaction.amount))?;
        let due_date = project_due_date_from_str(&transaction.date, today)?;

        seen_names.insert(transaction.name.as_str());
        subscriptions.push(NewSubscription {
            name: transaction.name.clone(),
            amount,
            due_date,
        });
    }

    Ok(subscriptions)
}
