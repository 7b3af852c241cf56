// Read one Thai national ID card and print the decoded record

// Run with `cargo run --example read_card --features pcsc` and insert a
// card within the timeout.

use std::time::Duration;

use anyhow::Context;
use thaiid::prelude::*;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut reader = ReaderBuilder::new()
        .with_pcsc()
        .card_timeout(Duration::from_secs(10))
        .build()?;

    if !reader.reader_available() {
        println!("{}", Error::NoReaderFound.status_message());
        return Ok(());
    }
    println!("Readers: {:?}", reader.readers());
    println!("Insert a card...");

    let record = match reader.read_identity() {
        Ok(record) => record,
        Err(e) => {
            println!("{}", e.status_message());
            return Err(e).context("card read failed");
        }
    };

    println!("ID:      {}", record.masked_citizen_id());
    println!("Name TH: {}", record.name_th());
    println!("Name EN: {}", record.name_en());
    println!("Gender:  {}", record.gender());
    println!("Born:    {}", record.birth_date().en());
    println!("Expires: {}", record.expire_date().en());
    println!("Address: {}", record.address());

    if let Some(photo) = record.photo() {
        let path = format!("{}.jpg", record.citizen_id());
        std::fs::write(&path, photo.as_bytes()).with_context(|| format!("writing {path}"))?;
        println!("Photo:   {} bytes -> {path}", photo.len());
    } else {
        println!("Photo:   none");
    }

    Ok(())
}
