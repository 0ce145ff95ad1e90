//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod rest_content_server_repository;
