//! テスト用の疑似 Content Server
//!
//! `/api/v1/auth` と `/api/v1/nodes/` だけを実装し、受け取ったリクエストを記録する

#![allow(dead_code)]

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Form, Router,
};
use std::collections::HashMap;
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::NamedTempFile;

pub const TEST_TICKET: &str = "ticket-123";

/// 認証エンドポイントの振る舞い
#[derive(Debug, Clone, Copy)]
pub enum AuthMode {
    /// `{"ticket": TEST_TICKET}` を返す
    Ticket,
    /// JSONでないボディを返す
    InvalidJson,
    /// `ticket` フィールドのないJSONを返す
    NoTicket,
    /// 401 とJSONでないボディを返す
    UnauthorizedPage,
    /// 401 と `ticket` フィールドのないJSONを返す
    UnauthorizedJson,
}

/// 受信したノード作成リクエスト
#[derive(Debug, Clone)]
pub struct RecordedNode {
    pub ticket: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

pub struct ServerState {
    auth_mode: AuthMode,
    node_status: StatusCode,
    node_delay: Duration,
    pub auth_calls: AtomicUsize,
    pub node_calls: AtomicUsize,
    pub in_flight: AtomicUsize,
    pub max_in_flight: AtomicUsize,
    pub credentials: Mutex<Vec<HashMap<String, String>>>,
    pub nodes: Mutex<Vec<RecordedNode>>,
}

impl ServerState {
    pub fn new(auth_mode: AuthMode, node_status: StatusCode) -> Self {
        Self {
            auth_mode,
            node_status,
            node_delay: Duration::from_millis(10),
            auth_calls: AtomicUsize::new(0),
            node_calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            credentials: Mutex::new(Vec::new()),
            nodes: Mutex::new(Vec::new()),
        }
    }

    pub fn total_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst) + self.node_calls.load(Ordering::SeqCst)
    }
}

async fn auth(
    State(state): State<Arc<ServerState>>,
    Form(form): Form<HashMap<String, String>>,
) -> Response {
    state.auth_calls.fetch_add(1, Ordering::SeqCst);
    state.credentials.lock().unwrap().push(form);

    match state.auth_mode {
        AuthMode::Ticket => (
            [(header::CONTENT_TYPE, "application/json")],
            format!(r#"{{"ticket":"{}"}}"#, TEST_TICKET),
        )
            .into_response(),
        AuthMode::InvalidJson => "<html>not json</html>".into_response(),
        AuthMode::NoTicket => (
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"Invalid username or password"}"#,
        )
            .into_response(),
        AuthMode::UnauthorizedPage => {
            (StatusCode::UNAUTHORIZED, "<html>login required</html>").into_response()
        }
        AuthMode::UnauthorizedJson => (
            StatusCode::UNAUTHORIZED,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"Invalid username or password"}"#,
        )
            .into_response(),
    }
}

async fn create_node(
    State(state): State<Arc<ServerState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state.node_calls.fetch_add(1, Ordering::SeqCst);
    let now = state.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
    state.max_in_flight.fetch_max(now, Ordering::SeqCst);

    state.nodes.lock().unwrap().push(RecordedNode {
        ticket: headers
            .get("OTCSTicket")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        content_type: headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: String::from_utf8_lossy(&body).into_owned(),
    });

    tokio::time::sleep(state.node_delay).await;
    state.in_flight.fetch_sub(1, Ordering::SeqCst);

    (state.node_status, r#"{"id":12345}"#).into_response()
}

/// サーバーを起動してベースURLを返す
pub async fn spawn_server(state: Arc<ServerState>) -> String {
    let app = Router::new()
        .route("/api/v1/auth", post(auth))
        .route("/api/v1/nodes/", post(create_node))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// アップロード元のサンプルファイル
pub fn sample_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file
}
