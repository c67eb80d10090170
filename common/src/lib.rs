//! Cutsheet Viewer Common Library
//!
//! Webアプリとネイティブホストで共有される型・ビューモデル・コントローラ
//!
//! - types: インデックス/詳細ドキュメントの型
//! - format: 表示用フォーマット
//! - state: 選択状態
//! - list / detail: 一覧・詳細のビューモデル生成
//! - controller: 読込状態機械

pub mod config;
pub mod controller;
pub mod detail;
pub mod error;
pub mod format;
pub mod list;
pub mod source;
pub mod state;
pub mod types;

pub use config::ViewerConfig;
pub use controller::{
    Controller, DetailBody, DetailPanelView, DetailPhase, DetailRequest, IndexPhase, ListPanel, ViewerView,
};
pub use detail::{render_detail, Block, DetailView, DocumentView, ExcerptView, LinkView, PartColumns, PartsView, SectionView};
pub use error::{Error, LoadError, LoadErrorKind, Result};
pub use format::{format_number, PLACEHOLDER};
pub use list::{render_list, ListRow, ListView};
pub use source::DataSource;
pub use state::SelectionState;
pub use types::{CutsheetDetail, IndexEntry, Part, Schema};
