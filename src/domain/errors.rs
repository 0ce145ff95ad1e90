//! # Content Server Errors
//!
//! Content Server 操作で発生するエラー

use std::path::PathBuf;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Content Server 操作のエラー
#[derive(Debug, Error)]
pub enum ContentServerError {
    /// アップロード元ファイルを開けない・読めない
    #[error("failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// 接続エラーなどトランスポート層の失敗
    #[error("request failed: {0}")]
    Transport(#[source] BoxError),

    /// 想定外のHTTPステータス（例: `500 Internal Server Error`）
    #[error("{0}")]
    Status(String),

    /// 認証レスポンスをJSONとして解釈できない
    #[error("invalid auth response: {0}")]
    InvalidAuthResponse(#[source] BoxError),

    #[error("missing ticket in auth response")]
    MissingTicket,
}

impl ContentServerError {
    pub fn transport(source: impl Into<BoxError>) -> Self {
        Self::Transport(source.into())
    }

    pub fn invalid_auth_response(source: impl Into<BoxError>) -> Self {
        Self::InvalidAuthResponse(source.into())
    }
}
