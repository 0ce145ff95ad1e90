//! Config File
//!
//! 任意指定のJSON設定ファイル。全フィールド省略可能で、CLI引数が優先される。

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub parent_id: Option<i64>,
    pub file: Option<String>,
    pub name: Option<String>,
    pub count: Option<usize>,
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub concurrency: Option<usize>,
}

impl FileConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: FileConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }
}
