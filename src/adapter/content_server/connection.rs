//! Content Server REST API Connection
//!
//! 認証とドキュメント作成のHTTP呼び出し

use log::debug;
use reqwest::{Client, StatusCode};

use super::models::AuthResponse;
use super::multipart::MultipartBuilder;
use crate::domain::entities::document_task::DocumentTask;
use crate::domain::entities::ticket::Ticket;
use crate::domain::errors::ContentServerError;

pub const API_BASE: &str = "/api/v1/";
pub const AUTH_ENDPOINT: &str = "auth";
pub const NODES_ENDPOINT: &str = "nodes/";

/// チケットを送るリクエストヘッダー
pub const TICKET_HEADER: &str = "OTCSTicket";

/// 作成するノードの種別（ドキュメント）
pub const DOCUMENT_NODE_TYPE: &str = "144";

/// Content Server への接続
///
/// 接続情報のみを保持する。チケットは [`authenticate`](Self::authenticate) の
/// 戻り値として呼び出し側が保持する。
#[derive(Debug, Clone)]
pub struct ContentServerConnection {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

impl ContentServerConnection {
    pub fn new(base_url: &str, username: &str, password: &str) -> Self {
        Self::with_client(Client::new(), base_url, username, password)
    }

    pub fn with_client(client: Client, base_url: &str, username: &str, password: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/api/v1/{endpoint}`
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}{}{}", self.base_url, API_BASE, endpoint)
    }

    /// ユーザー名とパスワードで認証し、チケットを取得
    pub async fn authenticate(&self) -> Result<Ticket, ContentServerError> {
        let url = self.endpoint_url(AUTH_ENDPOINT);
        debug!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .form(&[
                ("username", self.username.as_str()),
                ("password", self.password.as_str()),
            ])
            .send()
            .await
            .map_err(ContentServerError::transport)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(ContentServerError::transport)?;
        debug!("Auth response: {} ({} bytes)", status, body.len());

        let auth: AuthResponse = match serde_json::from_slice(&body) {
            Ok(auth) => auth,
            Err(_) if !status.is_success() => {
                return Err(ContentServerError::Status(status.to_string()))
            }
            Err(e) => return Err(ContentServerError::invalid_auth_response(e)),
        };

        match auth.ticket {
            Some(ticket) if !ticket.is_empty() => Ok(Ticket::new(ticket)),
            _ if !status.is_success() => Err(ContentServerError::Status(status.to_string())),
            _ => Err(ContentServerError::MissingTicket),
        }
    }

    /// ドキュメントを1件作成
    ///
    /// レスポンスボディは読み捨てる。200以外はステータス文字列をエラーとして返す。
    pub async fn create_document(
        &self,
        ticket: &Ticket,
        task: &DocumentTask,
    ) -> Result<(), ContentServerError> {
        let parent_id = task.parent_id().to_string();
        let form = MultipartBuilder::new()
            .file("file", task.source_file())
            .await?
            .text("type", DOCUMENT_NODE_TYPE)
            .text("name", task.name())
            .text("parent_id", &parent_id)
            .finish();

        let url = self.endpoint_url(NODES_ENDPOINT);
        debug!("POST {} name={} boundary={}", url, task.name(), form.boundary());

        let response = self
            .client
            .post(&url)
            .header(TICKET_HEADER, ticket.as_str())
            .multipart(form)
            .send()
            .await
            .map_err(ContentServerError::transport)?;

        let status = response.status();
        let discarded = response
            .bytes()
            .await
            .map_err(ContentServerError::transport)?;
        debug!(
            "Create {} response: {} ({} bytes discarded)",
            task.name(),
            status,
            discarded.len()
        );

        if status != StatusCode::OK {
            return Err(ContentServerError::Status(status.to_string()));
        }

        Ok(())
    }
}
