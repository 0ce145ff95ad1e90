//! # Upload Configuration DTO
//!
//! バルクアップロード設定のData Transfer Object

use std::path::PathBuf;

use crate::domain::entities::document_task::DocumentTask;

/// アップロード設定
///
/// ユースケースに渡すバッチ全体の設定情報
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// 作成先フォルダのノードID
    pub parent_id: i64,
    /// 繰り返しアップロードするローカルファイル
    pub source_file: PathBuf,
    /// ドキュメント名のプレフィックス
    pub name_prefix: String,
    /// 作成するドキュメント数
    pub count: usize,
    /// 同時に実行するアップロード数の上限
    pub concurrency: usize,
}

impl UploadConfig {
    /// 新しいアップロード設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use csload::application::dto::upload_config::UploadConfig;
    ///
    /// let config = UploadConfig::new(2000, "/etc/hosts".into(), "doc".to_string(), 5, 2);
    ///
    /// assert_eq!(config.count, 5);
    /// assert_eq!(config.concurrency, 2);
    /// ```
    pub fn new(
        parent_id: i64,
        source_file: PathBuf,
        name_prefix: String,
        count: usize,
        concurrency: usize,
    ) -> Self {
        Self {
            parent_id,
            source_file,
            name_prefix,
            count,
            concurrency,
        }
    }

    /// インデックス順にタスクを生成
    ///
    /// ```
    /// # use csload::application::dto::upload_config::UploadConfig;
    /// let config = UploadConfig::new(2000, "/etc/hosts".into(), "doc".to_string(), 3, 1);
    /// let names: Vec<String> = config.tasks().map(|t| t.name().to_string()).collect();
    ///
    /// assert_eq!(names, vec!["doc00000", "doc00001", "doc00002"]);
    /// ```
    pub fn tasks(&self) -> impl Iterator<Item = DocumentTask> + '_ {
        (0..self.count).map(move |index| {
            DocumentTask::new(
                &self.name_prefix,
                index,
                self.source_file.clone(),
                self.parent_id,
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_config_new() {
        let config = UploadConfig::new(
            42,
            PathBuf::from("/tmp/sample.txt"),
            "report".to_string(),
            10,
            4,
        );

        assert_eq!(config.parent_id, 42);
        assert_eq!(config.source_file, PathBuf::from("/tmp/sample.txt"));
        assert_eq!(config.name_prefix, "report");
        assert_eq!(config.count, 10);
        assert_eq!(config.concurrency, 4);
    }

    #[test]
    fn test_tasks_carry_parent_and_file() {
        let config = UploadConfig::new(
            2000,
            PathBuf::from("/tmp/sample.txt"),
            "doc".to_string(),
            2,
            1,
        );

        let tasks: Vec<DocumentTask> = config.tasks().collect();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.parent_id() == 2000));
        assert!(tasks
            .iter()
            .all(|t| t.source_file() == PathBuf::from("/tmp/sample.txt")));
        assert_eq!(tasks[1].index(), 1);
    }

    #[test]
    fn test_tasks_empty_when_count_zero() {
        let config = UploadConfig::new(1, PathBuf::from("/tmp/x"), "doc".to_string(), 0, 1);
        assert_eq!(config.tasks().count(), 0);
    }
}
