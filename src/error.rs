use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("データフォルダが見つかりません: {0}")]
    RootNotFound(String),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] cutsheet_common::Error),
}

pub type Result<T> = std::result::Result<T, ViewerError>;
