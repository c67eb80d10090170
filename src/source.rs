//! 静的ファイルツリーのデータソース
//!
//! Webサーバが配信しているのと同じツリーをディスクから直接読む。
//! リクエストパスは先頭の `/` を外し、`.` `..` 空要素を無視して
//! ルート配下に解決する（ルート外には出ない）。

use crate::error::{Result, ViewerError};
use cutsheet_common::{
    Controller, CutsheetDetail, DataSource, IndexEntry, LoadError, LoadErrorKind, ViewerConfig,
};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    config: ViewerConfig,
}

impl DirectorySource {
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        Self::with_config(root, ViewerConfig::default())
    }

    pub fn with_config(root: impl AsRef<Path>, config: ViewerConfig) -> Result<Self> {
        let root = root.as_ref();
        match std::fs::metadata(root) {
            Ok(meta) if meta.is_dir() => Ok(Self {
                root: root.to_path_buf(),
                config,
            }),
            Ok(_) => Err(ViewerError::RootNotFound(root.display().to_string())),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ViewerError::RootNotFound(root.display().to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// リクエストパスをツリー内のファイルパスに解決
    pub fn resolve(&self, path: &str) -> PathBuf {
        let mut resolved = self.root.clone();
        for part in path.split(|c: char| c == '/' || c == '\\') {
            if part.is_empty() || part == "." || part == ".." {
                continue;
            }
            resolved.push(part);
        }
        resolved
    }

    /// インデックス読込と先頭の自動選択まで済ませたコントローラを返す
    pub async fn start_session(&self) -> Result<Controller> {
        let mut controller = Controller::new();
        controller.run_startup(self).await?;
        Ok(controller)
    }

    async fn read_json<T: DeserializeOwned>(&self, path: &str, kind: LoadErrorKind) -> std::result::Result<T, LoadError> {
        let file = self.resolve(path);
        let text = match tokio::fs::read_to_string(&file).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(LoadError::status(kind, path, 404)),
            Err(e) => {
                return Err(LoadError {
                    kind,
                    context: path.to_string(),
                    message: e.to_string(),
                })
            }
        };
        serde_json::from_str(&text).map_err(|e| LoadError::parse(kind, path, e))
    }
}

impl DataSource for DirectorySource {
    async fn fetch_index(&self) -> std::result::Result<Vec<IndexEntry>, LoadError> {
        self.read_json(&self.config.index_path, LoadErrorKind::Index).await
    }

    async fn fetch_detail(&self, path: &str) -> std::result::Result<CutsheetDetail, LoadError> {
        self.read_json(path, LoadErrorKind::Detail).await
    }
}
