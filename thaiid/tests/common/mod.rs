// Shared helpers for integration tests. Each test file pulls this in with
// `#[path = "../common/mod.rs"] mod common;`, so not every item is used
// everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
