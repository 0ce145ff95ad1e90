//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **DocumentTask**: 1件のドキュメント作成タスク
//! - **Ticket**: 認証後に確定するセッションチケット
//! - **UploadOutcome**: 1タスクの結果

pub mod document_task;
pub mod ticket;
pub mod upload_outcome;
