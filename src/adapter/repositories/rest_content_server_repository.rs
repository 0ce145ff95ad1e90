//! REST Content Server Repository Implementation
//!
//! ContentServerRepositoryのREST API実装

use async_trait::async_trait;
use log::debug;

use crate::adapter::content_server::ContentServerConnection;
use crate::domain::entities::document_task::DocumentTask;
use crate::domain::entities::ticket::Ticket;
use crate::domain::errors::ContentServerError;
use crate::domain::repositories::content_server_repository::ContentServerRepository;

/// REST API経由のContent Serverリポジトリ
pub struct RestContentServerRepository {
    connection: ContentServerConnection,
}

impl RestContentServerRepository {
    /// 新しいリポジトリを作成
    pub fn new(connection: ContentServerConnection) -> Self {
        Self { connection }
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[async_trait]
impl ContentServerRepository for RestContentServerRepository {
    async fn authenticate(&self) -> Result<Ticket, ContentServerError> {
        debug!("Authenticating against {}", self.connection.base_url());
        self.connection.authenticate().await
    }

    async fn create_document(
        &self,
        ticket: &Ticket,
        task: &DocumentTask,
    ) -> Result<(), ContentServerError> {
        self.connection.create_document(ticket, task).await
    }
}
