//! multipart/form-data ボディの組み立て
//!
//! ファイルパート1つと任意個のテキストフィールドを `reqwest::multipart::Form` にまとめる。
//! 境界文字列とパートのヘッダーは reqwest が生成する。

use reqwest::multipart::{Form, Part};
use std::path::Path;

use crate::domain::errors::ContentServerError;

/// ファイルパートの Content-Type
pub const FILE_CONTENT_TYPE: &str = "application/octet-stream";

/// マルチパートフォームのビルダー
pub struct MultipartBuilder {
    form: Form,
}

impl Default for MultipartBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MultipartBuilder {
    /// ランダムな境界文字列を持つ空のフォームで作成
    pub fn new() -> Self {
        Self { form: Form::new() }
    }

    pub fn boundary(&self) -> &str {
        self.form.boundary()
    }

    /// ファイルの中身をファイルパートとして追加
    ///
    /// ファイル名はパスのベース名を使う。
    ///
    /// # Errors
    ///
    /// ファイルが存在しない・読めない場合は [`ContentServerError::FileAccess`]
    pub async fn file(self, field: &str, path: &Path) -> Result<Self, ContentServerError> {
        let content = tokio::fs::read(path)
            .await
            .map_err(|source| ContentServerError::FileAccess {
                path: path.to_path_buf(),
                source,
            })?;

        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let part = Part::bytes(content)
            .file_name(filename)
            .mime_str(FILE_CONTENT_TYPE)
            .map_err(ContentServerError::transport)?;

        Ok(Self {
            form: self.form.part(field.to_string(), part),
        })
    }

    /// テキストフィールドを追加
    pub fn text(self, name: &str, value: &str) -> Self {
        Self {
            form: self.form.text(name.to_string(), value.to_string()),
        }
    }

    /// フォームを確定
    ///
    /// Content-Type（`multipart/form-data; boundary=...`）は送信時に reqwest が付与する
    pub fn finish(self) -> Form {
        self.form
    }
}
