//! # UploadOutcome
//!
//! 1件のアップロード結果

use std::fmt;

/// アップロード結果
///
/// タスクごとに1つ生成され、コンソールへの報告に使われる
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadOutcome {
    /// ドキュメント名
    pub name: String,
    /// 失敗時のエラー内容
    pub error: Option<String>,
}

impl UploadOutcome {
    pub fn success(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            error: None,
        }
    }

    pub fn failure(name: impl Into<String>, error: impl fmt::Display) -> Self {
        Self {
            name: name.into(),
            error: Some(error.to_string()),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// 報告行の形式: `Added <name>` または `Added <name>, error = <details>`
impl fmt::Display for UploadOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.error {
            None => write!(f, "Added {}", self.name),
            Some(error) => write!(f, "Added {}, error = {}", self.name, error),
        }
    }
}
