#[path = "common.rs"]
mod common;

use thaiid::prelude::*;

// These tests need a PC/SC reader and, for the read test, a Thai ID card.
// They are marked `#[ignore]` so CI does not attempt to run them. Run
// manually with:
//
// cargo test -p thaiid --test hardware --features pcsc -- --ignored

#[test]
#[ignore]
fn list_readers() -> Result<()> {
    if let Some(mut reader) = common::open_reader()? {
        assert!(!reader.readers().is_empty());
    }
    Ok(())
}

#[test]
#[ignore]
fn read_inserted_card() -> Result<()> {
    let Some(mut reader) = common::open_reader()? else {
        return Ok(());
    };
    if !reader.card_present() {
        return Ok(());
    }
    let record = reader.read_identity()?;
    assert_eq!(record.citizen_id().len(), 13);
    assert!(!reader.transport().is_connected());
    Ok(())
}
