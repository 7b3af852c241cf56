#![cfg(feature = "pcsc")]

//! 共通: 実機テスト用ヘルパー
//!
//! `--features pcsc` でコンパイルされる実機テスト用。リーダーが無い環境
//! （CI 等）では `Ok(None)` を返す。

use thaiid::prelude::*;

/// PC/SC サービスに接続し、リーダーがあれば `Reader` を返す。
///
/// - Ok(Some(reader)) : リーダーが見つかった
/// - Ok(None) : サービス停止またはリーダー無し（CI 等では許容）
/// - Err(e) : その他の致命的なエラー
pub fn open_reader() -> Result<Option<Reader<PcscTransport>>> {
    let transport = match PcscTransport::open() {
        Ok(t) => t,
        Err(Error::ServiceUnavailable) => return Ok(None),
        Err(e) => return Err(e),
    };
    let mut reader = Reader::new(transport)?;
    if !reader.reader_available() {
        return Ok(None);
    }
    Ok(Some(reader))
}
