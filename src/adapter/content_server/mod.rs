//! Content Server Adapter Modules
//!
//! Content Server REST API 統合のためのアダプターモジュール

pub mod connection;
pub mod models;
pub mod multipart;

pub use connection::ContentServerConnection;
