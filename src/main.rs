//! Address Book - demonstration entry point
//!
//! Builds a small address book, edits and queries it, and prints the
//! results to stdout. Logs go to stderr.

use address_book::{AddressBook, Config, Record};
use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env().context("Failed to load configuration")?;

    // Initialize logging (stderr only so stdout carries just the listing)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(page_size = config.page_size, "Configuration loaded");

    let mut book = AddressBook::new();

    let mut john = Record::new("John", Some("1990-05-15"))?;
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john);

    let mut jane = Record::new("Jane", Some("1985-08-20"))?;
    jane.add_phone("9876543210")?;
    book.add_record(jane);

    println!("{}", book);

    let john = book.find_mut("John").context("John is missing")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    if let Some(phone) = john.find_phone("5555555555") {
        println!("{}: {}", john.name(), phone);
    }

    book.delete("Jane");

    let john = book.find("John").context("John is missing")?;
    println!(
        "Days to John's next birthday: {}",
        john.days_to_birthday()?
    );

    for (page_num, page) in book.iterator(config.page_size)?.enumerate() {
        println!("\nPage {}:", page_num + 1);
        for record in page {
            println!("{}", record);
        }
    }

    info!(records = book.len(), "Demo complete");
    Ok(())
}
