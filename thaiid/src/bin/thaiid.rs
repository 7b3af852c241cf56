// thaiid-rs/thaiid/src/bin/thaiid.rs
//! Command-line front end: reader status, card read, presence watch.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use thaiid::prelude::*;
use thaiid::utils::DEFAULT_MONITOR_POLL_MS;

#[derive(Parser)]
#[command(version, about = "Read Thai national ID cards over PC/SC")]
struct Cli {
    /// Debug output (overridden by RUST_LOG)
    #[arg(short, long)]
    verbose: bool,

    /// Open the card in exclusive mode
    #[arg(long)]
    exclusive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List attached readers
    Readers,

    /// Show reader and card status
    Status,

    /// Read the inserted card
    Read {
        /// Print the record as JSON
        #[arg(long)]
        json: bool,

        /// Write the card photo to this file
        #[arg(long)]
        photo_out: Option<PathBuf>,

        /// Seconds to wait for a card
        #[arg(long, default_value_t = 3)]
        timeout: u64,

        /// Show the citizen ID in full instead of masked
        #[arg(long)]
        unmask: bool,
    },

    /// Print card insert/remove events until interrupted
    Watch {
        /// Poll interval in milliseconds
        #[arg(long, default_value_t = DEFAULT_MONITOR_POLL_MS)]
        interval: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let share_mode = if cli.exclusive {
        ShareMode::Exclusive
    } else {
        ShareMode::Shared
    };

    match cli.command {
        Commands::Readers => {
            let mut reader = ReaderBuilder::new().with_pcsc().build()?;
            let names = reader.readers();
            if names.is_empty() {
                println!("{}", Error::NoReaderFound.status_message());
            }
            for (i, name) in names.iter().enumerate() {
                println!("{i}: {name}");
            }
        }
        Commands::Status => {
            let mut reader = ReaderBuilder::new().with_pcsc().build()?;
            status(&mut reader);
        }
        Commands::Read {
            json,
            photo_out,
            timeout,
            unmask,
        } => {
            let mut reader = ReaderBuilder::new()
                .with_pcsc()
                .card_timeout(Duration::from_secs(timeout))
                .share_mode(share_mode)
                .build()?;
            let record = match reader.read_identity() {
                Ok(record) => record,
                Err(e) => {
                    eprintln!("{}", e.status_message());
                    return Err(e.into());
                }
            };

            if let Some(path) = photo_out {
                match record.photo() {
                    Some(photo) => std::fs::write(&path, photo.as_bytes())
                        .with_context(|| format!("writing photo to {}", path.display()))?,
                    None => eprintln!("card has no photo"),
                }
            }

            if json {
                print_json(&record, unmask)?;
            } else {
                print_text(&record, unmask);
            }
        }
        Commands::Watch { interval } => {
            let transport = PcscTransport::open()?;
            let (_monitor, events) = CardMonitor::spawn(transport, Duration::from_millis(interval));
            for event in events {
                match event {
                    CardEvent::Inserted { reader, atr } => {
                        println!("สถานะบัตรประชาชน: ใส่บัตรแล้ว [{reader}] ATR {}", atr.to_hex())
                    }
                    CardEvent::Removed { reader } => {
                        println!("สถานะบัตรประชาชน: ยังไม่มีบัตร [{reader}]")
                    }
                }
            }
        }
    }

    Ok(())
}

fn status(reader: &mut Reader<PcscTransport>) {
    if !reader.transport_mut().service_available() {
        println!("{}", Error::ServiceUnavailable.status_message());
        println!("สถานะบัตรประชาชน: บริการไม่ทำงาน");
        return;
    }
    if !reader.reader_available() {
        println!("{}", Error::NoReaderFound.status_message());
        println!("สถานะบัตรประชาชน: ยังไม่มีบัตร");
        return;
    }
    println!("สถานะเครื่องอ่าน: เชื่อมต่อแล้ว");
    if reader.card_present() {
        println!("สถานะบัตรประชาชน: ใส่บัตรแล้ว");
    } else {
        println!("สถานะบัตรประชาชน: ยังไม่มีบัตร");
    }
}

fn shown_id(record: &IdentityRecord, unmask: bool) -> String {
    if unmask {
        record.citizen_id().to_string()
    } else {
        record.masked_citizen_id()
    }
}

fn print_text(record: &IdentityRecord, unmask: bool) {
    let (birth_th, birth_en) = record.birth_date().pair();
    let (issue_th, issue_en) = record.issue_date().pair();
    let (expire_th, expire_en) = record.expire_date().pair();

    println!("เลขประจำตัวประชาชน: {}", shown_id(record, unmask));
    println!("ชื่อ-นามสกุล:       {}", record.name_th());
    println!("Name:              {}", record.name_en());
    println!("เพศ:               {} / {}", record.gender().th(), record.gender().en());
    println!("วันเกิด:            {birth_th} / {birth_en}");
    println!("วันออกบัตร:         {issue_th} / {issue_en}");
    println!("วันหมดอายุ:         {expire_th} / {expire_en}");
    println!("ผู้ออกบัตร:          {}", record.issuer());
    println!("ที่อยู่:              {}", record.address());
    println!("เลขคำขอ:           {}", record.request_number());
    match record.photo() {
        Some(photo) => println!("รูปภาพ:            {} bytes", photo.len()),
        None => println!("รูปภาพ:            -"),
    }
}

fn print_json(record: &IdentityRecord, unmask: bool) -> Result<()> {
    let date = |d: CardDate| {
        let (th, en) = d.pair();
        json!({ "th": th, "en": en })
    };
    let value = json!({
        "citizen_id": shown_id(record, unmask),
        "name_th": record.name_th(),
        "name_en": record.name_en(),
        "gender": { "code": record.gender().code(), "th": record.gender().th(), "en": record.gender().en() },
        "birth_date": date(record.birth_date()),
        "issue_date": date(record.issue_date()),
        "expire_date": date(record.expire_date()),
        "issuer": record.issuer(),
        "address": record.address(),
        "request_number": record.request_number(),
        "photo_len": record.photo().map(|p| p.len()),
    });
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}
