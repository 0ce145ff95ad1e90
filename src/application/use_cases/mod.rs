//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **BulkUploadUseCase**: 1回の認証と並列ドキュメント作成

pub mod bulk_upload;
