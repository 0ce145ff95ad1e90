//! # Domain Layer
//!
//! このモジュールはアップロード処理の核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - HTTPやファイルシステムについて何も知らない
//! - Content Server とのやり取りは Repository trait の向こう側に隠す
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（DocumentTask, Ticket, UploadOutcome）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **errors**: Content Server 操作のエラー型

pub mod entities;
pub mod errors;
pub mod repositories;
