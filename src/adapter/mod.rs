//! Adapter Layer
//!
//! 外部システム（Content Server REST API, 設定ファイル）との統合

pub mod config;
pub mod content_server;
pub mod repositories;
