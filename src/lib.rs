//! カットシート・メタデータビューア（ネイティブホスト）
//!
//! 静的ファイルツリーをデータソースとして、Webと同じコントローラを動かす。

pub mod error;
pub mod source;

pub use cutsheet_common as common;
pub use error::{Result, ViewerError};
pub use source::DirectorySource;
