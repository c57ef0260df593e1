use std::sync::OnceLock;

use maud::{DOCTYPE, Markup, html};
use numfmt::{Formatter, Precision};
use rust_decimal::{Decimal, prelude::ToPrimitive};

// Table styles
pub const TABLE_STYLE: &str = "subscriptions";
pub const TABLE_CELL_NUMERIC_STYLE: &str = "numeric";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "page";

pub fn base(title: &str, content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - Subscrypt" }

                style
                {
                    r#"
                    body {
                        font-family: system-ui, sans-serif;
                        margin: 0;
                    }

                    .page {
                        max-width: 48rem;
                        margin: 0 auto;
                        padding: 2rem 1.5rem;
                    }

                    table.subscriptions {
                        width: 100%;
                        border-collapse: collapse;
                    }

                    table.subscriptions th,
                    table.subscriptions td {
                        padding: 0.75rem 1rem;
                        border-bottom: 1px solid #e5e7eb;
                        text-align: left;
                    }

                    table.subscriptions .numeric {
                        text-align: right;
                    }
                    "#
                }
            }

            body
            {
                (content)
            }
        }
    }
}

/// Format `amount` as dollars and cents, e.g. "$1,234.99" or "-$0.50".
pub fn format_currency(amount: Decimal) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    // Rounding happens on the exact value, the float is only used for display.
    let rounded = amount.round_dp(2);
    let number = rounded.abs().to_f64().unwrap_or_default();

    if rounded.is_zero() {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        return "$0.00".to_owned();
    }

    let formatted_string = if rounded.is_sign_negative() {
        negative_fmt.fmt_string(number)
    } else {
        positive_fmt.fmt_string(number)
    };

    pad_cents(formatted_string)
}

/// numfmt omits trailing zeros, e.g. "12.30" is rendered as "12.3", so put them back.
fn pad_cents(mut formatted_string: String) -> String {
    match formatted_string.rfind('.') {
        None => formatted_string.push_str(".00"),
        Some(index) => {
            let decimals = formatted_string.len() - index - 1;

            for _ in decimals..2 {
                formatted_string.push('0');
            }
        }
    }

    formatted_string
}
