//! Content Server API models
//!
//! REST APIのレスポンス型

use serde::Deserialize;

/// `POST /api/v1/auth` のレスポンス
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub ticket: Option<String>,
}
