//! # Bulk Upload Use Case
//!
//! 1回だけ認証し、同じファイルを `count` 件のドキュメントとして並列にアップロードする。
//!
//! 同時実行数はセマフォで制限する。各タスクは起動時に許可証を受け取り、
//! 完了時（失敗・panicを含む）にdropで返却する。

use anyhow::{bail, Context, Result};
use log::{debug, info, warn};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::{Id, JoinError, JoinSet};

use crate::application::dto::upload_config::UploadConfig;
use crate::domain::entities::ticket::Ticket;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::errors::ContentServerError;
use crate::domain::repositories::content_server_repository::ContentServerRepository;

/// 指定できる同時実行数の上限
pub const MAX_CONCURRENCY: usize = Semaphore::MAX_PERMITS;

/// 進捗の通知先
///
/// 各結果はタスク完了直後に通知される（順序保証なし）
pub trait UploadReporter: Send + Sync {
    /// 認証の結果を通知。失敗時の `ticket` は空になる
    fn on_authenticated(&self, error: Option<&ContentServerError>, ticket: &Ticket);

    /// 1タスクの結果を通知
    fn on_uploaded(&self, outcome: &UploadOutcome);
}

/// バルクアップロードの結果サマリー
#[derive(Debug, Clone)]
pub struct BulkUploadSummary {
    /// 認証エラー（成功時は `None`）
    pub auth_error: Option<String>,
    /// アップロードに使ったチケット
    pub ticket: Ticket,
    /// 起動順（インデックス順）の結果
    pub outcomes: Vec<UploadOutcome>,
}

impl BulkUploadSummary {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }
}

/// バルクアップロードユースケース
pub struct BulkUploadUseCase<R: ContentServerRepository + 'static> {
    repository: Arc<R>,
}

impl<R: ContentServerRepository + 'static> BulkUploadUseCase<R> {
    /// 新しいユースケースを作成
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// 認証してから全ドキュメントをアップロード
    ///
    /// 認証に失敗してもアップロードは空のチケットで実行される。
    /// 個々のアップロード失敗は結果に記録され、他のタスクには影響しない。
    ///
    /// # Errors
    ///
    /// `concurrency` が0、または [`MAX_CONCURRENCY`] を超える場合にエラーを返す
    pub async fn execute(
        &self,
        config: &UploadConfig,
        reporter: Arc<dyn UploadReporter>,
    ) -> Result<BulkUploadSummary> {
        if config.concurrency == 0 {
            bail!("concurrency must be at least 1");
        }
        if config.concurrency > MAX_CONCURRENCY {
            bail!(
                "concurrency must be at most {} (got {})",
                MAX_CONCURRENCY,
                config.concurrency
            );
        }

        let (ticket, auth_error) = match self.repository.authenticate().await {
            Ok(ticket) => {
                info!("Authenticated with content server");
                reporter.on_authenticated(None, &ticket);
                (ticket, None)
            }
            Err(e) => {
                warn!("Authentication failed, uploads will still be attempted: {}", e);
                let ticket = Ticket::empty();
                reporter.on_authenticated(Some(&e), &ticket);
                (ticket, Some(e.to_string()))
            }
        };

        // 以降チケットは読み取り専用
        let shared_ticket = Arc::new(ticket.clone());
        let gate = Arc::new(Semaphore::new(config.concurrency));
        let mut running = JoinSet::new();
        let mut launched: HashMap<Id, (usize, String)> = HashMap::new();
        let mut outcomes = Vec::new();

        for task in config.tasks() {
            // 起動待ちの間も終了済みタスクを回収する
            while let Some(joined) = running.try_join_next_with_id() {
                outcomes.push(settle(joined, &mut launched, reporter.as_ref())?);
            }
            let permit = loop {
                tokio::select! {
                    permit = Arc::clone(&gate).acquire_owned() => {
                        break permit.context("upload gate closed")?;
                    }
                    Some(joined) = running.join_next_with_id(), if !running.is_empty() => {
                        outcomes.push(settle(joined, &mut launched, reporter.as_ref())?);
                    }
                }
            };

            let repository = Arc::clone(&self.repository);
            let ticket = Arc::clone(&shared_ticket);
            let task_reporter = Arc::clone(&reporter);
            let index = task.index();
            let name = task.name().to_string();

            debug!("Launching upload {} (index {})", name, index);

            let handle = running.spawn(async move {
                let _permit = permit;
                let outcome = match repository.create_document(&ticket, &task).await {
                    Ok(()) => UploadOutcome::success(task.name()),
                    Err(e) => UploadOutcome::failure(task.name(), e),
                };
                task_reporter.on_uploaded(&outcome);
                outcome
            });
            launched.insert(handle.id(), (index, name));
        }

        while let Some(joined) = running.join_next_with_id().await {
            outcomes.push(settle(joined, &mut launched, reporter.as_ref())?);
        }
        outcomes.sort_by_key(|(index, _)| *index);
        let outcomes = outcomes.into_iter().map(|(_, outcome)| outcome).collect();

        Ok(BulkUploadSummary {
            auth_error,
            ticket,
            outcomes,
        })
    }
}

/// 終了したタスクの結果を `(index, outcome)` にする
///
/// panicしたタスクはここで失敗として通知する
fn settle(
    joined: std::result::Result<(Id, UploadOutcome), JoinError>,
    launched: &mut HashMap<Id, (usize, String)>,
    reporter: &dyn UploadReporter,
) -> Result<(usize, UploadOutcome)> {
    let (id, result) = match joined {
        Ok((id, outcome)) => (id, Ok(outcome)),
        Err(e) => (e.id(), Err(e)),
    };
    let Some((index, name)) = launched.remove(&id) else {
        bail!("finished upload task {id} was never launched");
    };

    let outcome = match result {
        Ok(outcome) => outcome,
        Err(e) => {
            let outcome = UploadOutcome::failure(name, format!("upload task failed: {e}"));
            reporter.on_uploaded(&outcome);
            outcome
        }
    };
    Ok((index, outcome))
}
