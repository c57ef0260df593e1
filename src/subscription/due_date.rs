//! Projects the next due date of a monthly subscription.

use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::Error;

const TRANSACTION_DATE_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]");

/// Parse a transaction date in the `YYYY-MM-DD` format.
///
/// # Errors
///
/// Returns [Error::InvalidTransactionDate] if `text` is not a valid date.
pub fn parse_transaction_date(text: &str) -> Result<Date, Error> {
    Date::parse(text, TRANSACTION_DATE_FORMAT)
        .map_err(|_| Error::InvalidTransactionDate(text.to_owned()))
}

/// Get the next date, relative to `today`, that falls on the same day of the month as `paid_on`.
///
/// If the day of the month of `paid_on` has already come (or is today), the
/// subscription is due next month. Otherwise it is due later this month.
///
/// Months shorter than the day of the month are clamped to their last day,
/// e.g. a subscription paid on the 31st is due on the 30th of April.
///
/// # Errors
///
/// Returns [Error::InvalidDueDate] if the due date would fall after the last
/// date supported by [Date].
pub fn project_due_date(paid_on: Date, today: Date) -> Result<Date, Error> {
    let day = paid_on.day();

    let (year, month) = if day <= today.day() {
        match today.month().next() {
            time::Month::January => (today.year() + 1, time::Month::January),
            next_month => (today.year(), next_month),
        }
    } else {
        (today.year(), today.month())
    };

    let day = day.min(month.length(year));

    Date::from_calendar_date(year, month, day).map_err(|_| Error::InvalidDueDate)
}

/// Parse `transaction_date` and project its next due date relative to `today`.
///
/// See [project_due_date].
pub fn project_due_date_from_str(transaction_date: &str, today: Date) -> Result<Date, Error> {
    parse_transaction_date(transaction_date).and_then(|paid_on| project_due_date(paid_on, today))
}

#[cfg(test)]
mod parse_transaction_date_tests {
    use time::macros::date;

    use crate::Error;

    use super::parse_transaction_date;

    #[test]
    fn parses_iso_date() {
        assert_eq!(parse_transaction_date("2020-11-10"), Ok(date!(2020 - 11 - 10)));
    }

    #[test]
    fn fails_on_garbage() {
        assert_eq!(
            parse_transaction_date("gary the gopher"),
            Err(Error::InvalidTransactionDate("gary the gopher".to_owned()))
        );
    }

    #[test]
    fn fails_on_invalid_month() {
        assert_eq!(
            parse_transaction_date("2020-13-01"),
            Err(Error::InvalidTransactionDate("2020-13-01".to_owned()))
        );
    }

    #[test]
    fn fails_on_other_formats() {
        assert!(parse_transaction_date("10/11/2020").is_err());
        assert!(parse_transaction_date("").is_err());
    }
}
