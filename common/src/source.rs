//! データソース
//!
//! インデックスと詳細ドキュメントを読み出す口。ブラウザでは fetch、
//! ネイティブでは静的ファイルツリーを読む実装がある。
//! リトライはしない（失敗はそのまま返す）。

use crate::error::LoadError;
use crate::types::{CutsheetDetail, IndexEntry};

#[allow(async_fn_in_trait)]
pub trait DataSource {
    /// インデックスを取得
    async fn fetch_index(&self) -> Result<Vec<IndexEntry>, LoadError>;

    /// 詳細ドキュメントを取得（`path` は `cutsheet_metadata` の値そのまま）
    async fn fetch_detail(&self, path: &str) -> Result<CutsheetDetail, LoadError>;
}
