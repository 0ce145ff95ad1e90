//! # DocumentTask Value Object
//!
//! ドキュメント作成タスクのバリューオブジェクト

use std::path::{Path, PathBuf};

/// ドキュメント名のインデックス部の桁数
pub const NAME_INDEX_WIDTH: usize = 5;

/// プレフィックスとインデックスからドキュメント名を生成
///
/// インデックスは [`NAME_INDEX_WIDTH`] 桁にゼロ埋めされます。
///
/// ```
/// use csload::domain::entities::document_task::document_name;
///
/// assert_eq!(document_name("doc", 3), "doc00003");
/// assert_eq!(document_name("report-", 123456), "report-123456");
/// ```
pub fn document_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index:0width$}", width = NAME_INDEX_WIDTH)
}

/// ドキュメント作成タスク
///
/// 1回のアップロード試行で1度だけ消費される
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTask {
    index: usize,
    name: String,
    source_file: PathBuf,
    parent_id: i64,
}

impl DocumentTask {
    /// 新しいタスクを作成
    ///
    /// # Arguments
    ///
    /// * `prefix` - ドキュメント名のプレフィックス
    /// * `index` - バッチ内のインデックス（0始まり）
    /// * `source_file` - アップロードするローカルファイル
    /// * `parent_id` - 作成先フォルダのノードID
    pub fn new(prefix: &str, index: usize, source_file: impl Into<PathBuf>, parent_id: i64) -> Self {
        Self {
            index,
            name: document_name(prefix, index),
            source_file: source_file.into(),
            parent_id,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn source_file(&self) -> &Path {
        &self.source_file
    }

    #[inline]
    pub fn parent_id(&self) -> i64 {
        self.parent_id
    }
}
