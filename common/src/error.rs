//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown cutsheet: {0}")]
    UnknownEntry(String),

    #[error("Cutsheet index is not loaded")]
    IndexNotReady,

    #[error("Cutsheet index is already loaded")]
    IndexAlreadyLoaded,
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// 読込失敗の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    Index,
    Detail,
}

/// データソースからの読込エラー
///
/// 表示はそのままパネルに出せる短いメッセージのみ。
/// `context` は要求したパス（インデックスならインデックスのパス）。
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{message}")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub context: String,
    pub message: String,
}

impl LoadError {
    pub fn index(message: impl Into<String>) -> Self {
        Self {
            kind: LoadErrorKind::Index,
            context: String::new(),
            message: message.into(),
        }
    }

    pub fn detail(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: LoadErrorKind::Detail,
            context: path.into(),
            message: message.into(),
        }
    }

    /// 非成功ステータス
    pub fn status(kind: LoadErrorKind, context: impl Into<String>, status: u16) -> Self {
        let context = context.into();
        let message = match kind {
            LoadErrorKind::Index => "Unable to load cutsheet index.".to_string(),
            LoadErrorKind::Detail => format!("Unable to load {}", context),
        };
        Self {
            kind,
            context,
            message: format!("{} (HTTP {})", message, status),
        }
    }

    /// レスポンス本文のパース失敗
    pub fn parse(kind: LoadErrorKind, context: impl Into<String>, err: impl std::fmt::Display) -> Self {
        let context = context.into();
        Self {
            message: format!("Invalid JSON in {}: {}", context, err),
            kind,
            context,
        }
    }
}
