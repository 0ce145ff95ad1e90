//! # Content Server Repository Trait
//!
//! 認証とドキュメント作成を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::document_task::DocumentTask;
use crate::domain::entities::ticket::Ticket;
use crate::domain::errors::ContentServerError;

/// Content Server リポジトリ
///
/// 本番ではREST APIクライアント、テストではモックやフェイクが実装する
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentServerRepository: Send + Sync {
    /// 認証してセッションチケットを取得
    ///
    /// # Errors
    ///
    /// 通信失敗、JSONの解釈失敗、`ticket` フィールド欠落の場合にエラーを返す
    async fn authenticate(&self) -> Result<Ticket, ContentServerError>;

    /// ドキュメントを1件作成
    ///
    /// 作成されたノードIDは返さない。成功はステータスコードだけで判定する。
    ///
    /// # Arguments
    ///
    /// * `ticket` - 認証済みチケット（空でも呼び出しは行う）
    /// * `task` - 作成するドキュメント
    ///
    /// # Errors
    ///
    /// ファイル読み込み失敗、通信失敗、200以外のステータスの場合にエラーを返す
    async fn create_document(
        &self,
        ticket: &Ticket,
        task: &DocumentTask,
    ) -> Result<(), ContentServerError>;
}
