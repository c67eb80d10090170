//! 選択状態
//!
//! 読込済みインデックスと選択中のパスを保持する。書き換えるのは
//! コントローラだけで、レンダラはスナップショットを読むだけ。

use crate::error::{Error, Result};
use crate::types::IndexEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    cutsheets: Vec<IndexEntry>,
    selected_path: Option<String>,
    published: bool,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// インデックスを設定（セッション中1回のみ）
    pub fn publish_index(&mut self, cutsheets: Vec<IndexEntry>) -> Result<()> {
        if self.published {
            return Err(Error::IndexAlreadyLoaded);
        }
        self.cutsheets = cutsheets;
        self.published = true;
        Ok(())
    }

    /// 選択を設定（インデックスに存在するパスのみ）
    pub fn select(&mut self, path: &str) -> Result<()> {
        if !self.published {
            return Err(Error::IndexNotReady);
        }
        if !self.contains(path) {
            return Err(Error::UnknownEntry(path.to_string()));
        }
        self.selected_path = Some(path.to_string());
        Ok(())
    }

    pub fn cutsheets(&self) -> &[IndexEntry] {
        &self.cutsheets
    }

    pub fn selected_path(&self) -> Option<&str> {
        self.selected_path.as_deref()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.cutsheets.iter().any(|e| e.cutsheet_metadata == path)
    }
}
