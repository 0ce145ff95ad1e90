//! # csload
//!
//! 1つのローカルファイルを N 件のドキュメントとして Content Server の REST API に
//! 一括アップロードするツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: タスク・チケット・結果のエンティティと Repository trait（外部依存なし）
//! - **Application層**: 認証と並列アップロードのユースケース
//! - **Adapter層**: 外部システムとの統合（REST API, マルチパート, 設定ファイル）
//! - **Driver層**: CLI、設定の解決、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
