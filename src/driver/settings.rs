//! Settings Resolution
//!
//! CLI引数 > 設定ファイル > デフォルト値 の順で設定を解決し、検証する

use std::path::PathBuf;
use thiserror::Error;

use crate::adapter::config::FileConfig;
use crate::application::dto::upload_config::UploadConfig;
use crate::application::use_cases::bulk_upload::MAX_CONCURRENCY;

use super::cli::Args;

pub const DEFAULT_PARENT_ID: i64 = 2000;
pub const DEFAULT_NAME_PREFIX: &str = "doc";
pub const DEFAULT_COUNT: usize = 5;
pub const DEFAULT_USERNAME: &str = "Admin";
pub const DEFAULT_PASSWORD: &str = "livelink";
pub const DEFAULT_CONCURRENCY: usize = 5;

/// プラットフォームごとのサンプルファイル
pub fn default_source_file() -> &'static str {
    if cfg!(windows) {
        r"c:\windows\win.ini"
    } else {
        "/etc/hosts"
    }
}

/// Expands tilde in path and returns the full path
pub fn expand_source_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// 設定エラー
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("You must specify a file")]
    MissingFile,

    #[error("You must specify a url")]
    MissingUrl,

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,

    #[error("concurrency must be at most {max} (got {got})")]
    ConcurrencyTooLarge { got: usize, max: usize },

    #[error("{0:#}")]
    ConfigFile(anyhow::Error),
}

impl SettingsError {
    /// 使い方を表示して終了すべきエラーかどうか
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, SettingsError::ConfigFile(_))
    }
}

/// 解決済みの設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub url: String,
    pub username: String,
    pub password: String,
    pub upload: UploadConfig,
    pub dry_run: bool,
}

impl Settings {
    /// CLI引数（と `--config` の設定ファイル）から設定を解決
    pub fn resolve(args: &Args) -> Result<Self, SettingsError> {
        let file_config = match &args.config {
            Some(path) => FileConfig::load(path).map_err(SettingsError::ConfigFile)?,
            None => FileConfig::default(),
        };
        Self::merge(args, file_config)
    }

    /// CLI引数と設定ファイルの値をマージして検証
    pub fn merge(args: &Args, file_config: FileConfig) -> Result<Self, SettingsError> {
        let source_file = args
            .file
            .clone()
            .or(file_config.file)
            .unwrap_or_else(|| default_source_file().to_string());
        if source_file.is_empty() {
            return Err(SettingsError::MissingFile);
        }

        let url = args.url.clone().or(file_config.url).unwrap_or_default();
        if url.is_empty() {
            return Err(SettingsError::MissingUrl);
        }

        let concurrency = args
            .concurrency
            .or(file_config.concurrency)
            .unwrap_or(DEFAULT_CONCURRENCY);
        if concurrency == 0 {
            return Err(SettingsError::ZeroConcurrency);
        }
        if concurrency > MAX_CONCURRENCY {
            return Err(SettingsError::ConcurrencyTooLarge {
                got: concurrency,
                max: MAX_CONCURRENCY,
            });
        }

        let upload = UploadConfig::new(
            args.parent_id
                .or(file_config.parent_id)
                .unwrap_or(DEFAULT_PARENT_ID),
            expand_source_path(&source_file),
            args.name
                .clone()
                .or(file_config.name)
                .unwrap_or_else(|| DEFAULT_NAME_PREFIX.to_string()),
            args.count.or(file_config.count).unwrap_or(DEFAULT_COUNT),
            concurrency,
        );

        Ok(Self {
            url,
            username: args
                .username
                .clone()
                .or(file_config.username)
                .unwrap_or_else(|| DEFAULT_USERNAME.to_string()),
            password: args
                .password
                .clone()
                .or(file_config.password)
                .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
            upload,
            dry_run: args.dry_run,
        })
    }
}
