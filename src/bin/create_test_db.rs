use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;
use rust_decimal::Decimal;
use time::{Date, macros::date};

use subscrypt_rs::{NewSubscription, SubscriptionStore, create_app_state};

/// A utility for creating a test database for the web server of subscrypt_rs.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        Some(extension) if !extension.is_empty() => {}
        _ => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;
    let state = create_app_state(conn, "Etc/UTC", Vec::new())?;

    println!("Creating test user...");
    state
        .store
        .record_user_details("Test User", "test@example.com")?;

    println!("Creating test subscriptions...");
    let subscriptions = [
        ("Netflix", Decimal::new(1599, 2), date!(2025 - 01 - 10)),
        ("Touchstone Climbing", Decimal::new(7850, 2), date!(2025 - 01 - 20)),
        ("SparkFun", Decimal::new(894, 1), date!(2025 - 02 - 03)),
        ("KFC", Decimal::new(12, 0), date!(2025 - 01 - 31)),
    ];

    for (name, amount, due_date) in subscriptions {
        state
            .store
            .record_subscription(new_subscription(name, amount, due_date))?;
    }

    println!("Success!");

    Ok(())
}

fn new_subscription(name: &str, amount: Decimal, due_date: Date) -> NewSubscription {
    NewSubscription {
        name: name.to_owned(),
        amount,
        due_date,
    }
}
