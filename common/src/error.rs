//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// ネットワーク失敗・HTTPステータス異常
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
