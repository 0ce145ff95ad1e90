//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::Result;
use clap::CommandFactory;
use log::{info, warn};
use std::sync::Arc;

use crate::adapter::content_server::ContentServerConnection;
use crate::adapter::repositories::rest_content_server_repository::RestContentServerRepository;
use crate::application::use_cases::bulk_upload::{
    BulkUploadSummary, BulkUploadUseCase, UploadReporter,
};
use crate::domain::entities::ticket::Ticket;
use crate::domain::entities::upload_outcome::UploadOutcome;
use crate::domain::errors::ContentServerError;

use super::cli::Args;
use super::settings::{Settings, SettingsError};

/// 標準出力に進捗を表示するレポーター
pub struct ConsoleReporter;

impl UploadReporter for ConsoleReporter {
    fn on_authenticated(&self, error: Option<&ContentServerError>, ticket: &Ticket) {
        match error {
            None => println!("Auth: OK"),
            Some(e) => println!("Auth: {}", e),
        }
        println!("OTCSTicket: {}", ticket);
    }

    fn on_uploaded(&self, outcome: &UploadOutcome) {
        println!("{}", outcome);
    }
}

/// Bulk Upload Workflow
pub struct BulkUploadWorkflow {
    settings: Settings,
}

impl BulkUploadWorkflow {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// 進捗を標準出力に表示しながら実行
    pub async fn execute(&self) -> Result<Option<BulkUploadSummary>> {
        self.execute_with_reporter(Arc::new(ConsoleReporter)).await
    }

    /// Execute the upload workflow
    ///
    /// dry-run の場合はネットワークに触れずに `None` を返す
    pub async fn execute_with_reporter(
        &self,
        reporter: Arc<dyn UploadReporter>,
    ) -> Result<Option<BulkUploadSummary>> {
        let upload = &self.settings.upload;

        info!("Starting bulk upload...");
        info!(
            "Target: {} (parent {}), {} x {} with concurrency {}",
            self.settings.url,
            upload.parent_id,
            upload.count,
            upload.source_file.display(),
            upload.concurrency
        );

        if self.settings.dry_run {
            println!("✓ Dry-run mode (not actually uploading)");
            println!(
                "  Would upload {} as {} documents under parent {}:",
                upload.source_file.display(),
                upload.count,
                upload.parent_id
            );
            for task in upload.tasks() {
                println!("    - {}", task.name());
            }
            return Ok(None);
        }

        let connection = ContentServerConnection::new(
            &self.settings.url,
            &self.settings.username,
            &self.settings.password,
        );
        let repository = Arc::new(RestContentServerRepository::new(connection));
        let use_case = BulkUploadUseCase::new(repository);

        let summary = use_case.execute(upload, reporter).await?;

        if summary.failed() > 0 {
            warn!(
                "Bulk upload finished: {} succeeded, {} failed",
                summary.succeeded(),
                summary.failed()
            );
        } else {
            info!(
                "Bulk upload finished: {} succeeded, {} failed",
                summary.succeeded(),
                summary.failed()
            );
        }

        Ok(Some(summary))
    }
}

/// CLI エントリポイント
///
/// 必須設定が欠けている場合は使い方を表示し、ネットワークに触れずに正常終了する
pub async fn run(args: Args) -> Result<()> {
    let settings = match Settings::resolve(&args) {
        Ok(settings) => settings,
        Err(e) if e.is_usage_error() => {
            println!("{}", e);
            println!("{}", Args::command().render_usage());
            return Ok(());
        }
        Err(SettingsError::ConfigFile(e)) => return Err(e),
        Err(e) => return Err(e.into()),
    };

    BulkUploadWorkflow::new(settings).execute().await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::upload_config::UploadConfig;
    use std::path::PathBuf;

    fn settings(dry_run: bool) -> Settings {
        Settings {
            url: "http://127.0.0.1:1".to_string(),
            username: "Admin".to_string(),
            password: "livelink".to_string(),
            upload: UploadConfig::new(
                2000,
                PathBuf::from("/definitely/not/here.bin"),
                "doc".to_string(),
                3,
                2,
            ),
            dry_run,
        }
    }

    #[tokio::test]
    async fn test_dry_run_returns_none() {
        let workflow = BulkUploadWorkflow::new(settings(true));
        let result = workflow.execute().await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_unreachable_server_and_missing_file_report_every_task() {
        let workflow = BulkUploadWorkflow::new(settings(false));

        let summary = workflow.execute().await.unwrap().unwrap();

        assert!(summary.auth_error.is_some());
        assert!(summary.ticket.is_empty());
        assert_eq!(summary.outcomes.len(), 3);
        for outcome in &summary.outcomes {
            let error = outcome.error.as_deref().unwrap();
            assert!(error.contains("/definitely/not/here.bin"), "{}", error);
        }
    }

    #[tokio::test]
    async fn test_run_missing_url_is_ok() {
        let args = Args::default();
        assert!(run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_bad_config_file_is_error() {
        let args = Args {
            config: Some("/no/such/config.json".to_string()),
            ..Args::default()
        };
        assert!(run(args).await.is_err());
    }
}
