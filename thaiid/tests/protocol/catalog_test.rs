#[path = "../common/mod.rs"]
mod common;

use thaiid::protocol::{Field, SELECT_APPLET, catalog, photo_chunk_command};

#[test]
fn select_bytes() {
    assert_eq!(SELECT_APPLET.encode(), common::fixtures::select_apdu());
}

#[test]
fn every_field_matches_published_bytes() {
    for (field, bytes) in common::fixtures::field_apdus() {
        assert_eq!(field.command().encode(), bytes, "{field}");
    }
}

#[test]
fn catalog_covers_every_field_once() {
    let listed: Vec<Field> = common::fixtures::field_apdus()
        .into_iter()
        .map(|(f, _)| f)
        .collect();
    for field in Field::ALL {
        assert_eq!(listed.iter().filter(|f| **f == field).count(), 1);
    }
    assert!(catalog::validate().is_ok());
}

#[test]
fn photo_chunks_walk_the_offset() {
    assert_eq!(
        photo_chunk_command(0).encode(),
        common::fixtures::apdu("80 B0 01 7B 02 00 FF")
    );
    assert_eq!(
        photo_chunk_command(19).encode(),
        common::fixtures::apdu("80 B0 14 68 02 00 FF")
    );
}
