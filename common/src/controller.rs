//! コントローラ（読込状態機械）
//!
//! インデックス: Idle → LoadingIndex → {IndexReady | IndexFailed}
//! 詳細: NoSelection → LoadingDetail → {DetailReady | DetailFailed} → LoadingDetail → …
//!
//! 選択ごとにチケットを発行し、最新チケット以外の詳細結果は捨てる
//! （後から届いた古い応答で新しい選択の表示を上書きしない）。
//! 非同期の取得は呼び出し側が行い、開始と完了だけをここで受ける。

use crate::detail::{render_detail, DetailView, DocumentView};
use crate::error::{Error, LoadError, Result};
use crate::list::{render_list, ListView};
use crate::source::DataSource;
use crate::state::SelectionState;
use crate::types::{CutsheetDetail, IndexEntry};

pub const INDEX_LOADING_STATUS: &str = "Loading cutsheet index…";
pub const INDEX_FAILED_STATUS: &str = "Failed to load cutsheet index.";
pub const LIST_LOADING_MESSAGE: &str = "Loading cutsheets…";
pub const DETAIL_IDLE_SUBTITLE: &str = "No cut sheet selected";
pub const DETAIL_LOADING_SUBTITLE: &str = "Loading cut sheet metadata…";
pub const DETAIL_LOADING_MESSAGE: &str = "Loading metadata…";
pub const DETAIL_FAILED_SUBTITLE: &str = "Unable to load metadata.";

#[derive(Debug, Clone, PartialEq)]
pub enum IndexPhase {
    Idle,
    Loading,
    Ready,
    Failed(LoadError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailPhase {
    NoSelection,
    Loading,
    Ready(Box<CutsheetDetail>),
    Failed(LoadError),
}

/// 発行済みの詳細読込要求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    pub path: String,
    ticket: u64,
}

/// 一覧パネルの表示
#[derive(Debug, Clone, PartialEq)]
pub enum ListPanel {
    Loading { message: String },
    Failed { message: String },
    Ready(ListView),
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailBody {
    Placeholder(String),
    Loading(String),
    Failed(String),
    Document(DocumentView),
}

/// 詳細パネルの表示
#[derive(Debug, Clone, PartialEq)]
pub struct DetailPanelView {
    pub subtitle: String,
    pub body: DetailBody,
}

/// 画面全体の表示スナップショット
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerView {
    pub status: String,
    pub list: ListPanel,
    pub detail: DetailPanelView,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Controller {
    state: SelectionState,
    index: IndexPhase,
    detail: DetailPhase,
    ticket: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub fn new() -> Self {
        Self {
            state: SelectionState::new(),
            index: IndexPhase::Idle,
            detail: DetailPhase::NoSelection,
            ticket: 0,
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn index_phase(&self) -> &IndexPhase {
        &self.index
    }

    pub fn detail_phase(&self) -> &DetailPhase {
        &self.detail
    }

    /// インデックス読込開始（Idle または失敗後の再読込のみ）
    pub fn begin_index_load(&mut self) -> Result<()> {
        match self.index {
            IndexPhase::Idle | IndexPhase::Failed(_) => {
                self.index = IndexPhase::Loading;
                Ok(())
            }
            IndexPhase::Loading | IndexPhase::Ready => Err(Error::IndexAlreadyLoaded),
        }
    }

    /// インデックス読込完了
    ///
    /// 成功かつ1件以上あれば先頭を自動選択し、その読込要求を返す。
    pub fn finish_index_load(
        &mut self,
        result: std::result::Result<Vec<IndexEntry>, LoadError>,
    ) -> Result<Option<DetailRequest>> {
        if self.index != IndexPhase::Loading {
            return Err(Error::IndexNotReady);
        }

        let entries = match result {
            Ok(entries) => entries,
            Err(err) => {
                self.index = IndexPhase::Failed(err);
                return Ok(None);
            }
        };

        let first = entries.first().map(|e| e.cutsheet_metadata.clone());
        self.state.publish_index(entries)?;
        self.index = IndexPhase::Ready;

        match first {
            Some(path) => self.select(&path).map(Some),
            None => Ok(None),
        }
    }

    /// 選択（自動・手動共通）
    ///
    /// 選択状態は即座に更新し、詳細は読込中表示にする。
    pub fn select(&mut self, path: &str) -> Result<DetailRequest> {
        if self.index != IndexPhase::Ready {
            return Err(Error::IndexNotReady);
        }
        self.state.select(path)?;
        self.ticket += 1;
        self.detail = DetailPhase::Loading;
        Ok(DetailRequest {
            path: path.to_string(),
            ticket: self.ticket,
        })
    }

    /// 要求がまだ最新か
    pub fn is_current(&self, request: &DetailRequest) -> bool {
        request.ticket == self.ticket && self.state.selected_path() == Some(request.path.as_str())
    }

    /// 詳細読込完了。古い要求の結果は反映せず false を返す。
    ///
    /// 失敗しても選択は戻さない。
    pub fn finish_detail_load(
        &mut self,
        request: &DetailRequest,
        result: std::result::Result<CutsheetDetail, LoadError>,
    ) -> bool {
        if !self.is_current(request) {
            return false;
        }
        self.detail = match result {
            Ok(detail) => DetailPhase::Ready(Box::new(detail)),
            Err(err) => DetailPhase::Failed(err),
        };
        true
    }

    pub fn status_line(&self) -> String {
        match &self.index {
            IndexPhase::Idle | IndexPhase::Loading => INDEX_LOADING_STATUS.to_string(),
            IndexPhase::Failed(_) => INDEX_FAILED_STATUS.to_string(),
            IndexPhase::Ready => match self.state.cutsheets().len() {
                1 => "1 cutsheet available".to_string(),
                n => format!("{} cutsheets available", n),
            },
        }
    }

    pub fn list_panel(&self) -> ListPanel {
        match &self.index {
            IndexPhase::Idle | IndexPhase::Loading => ListPanel::Loading {
                message: LIST_LOADING_MESSAGE.to_string(),
            },
            IndexPhase::Failed(err) => ListPanel::Failed {
                message: err.to_string(),
            },
            IndexPhase::Ready => ListPanel::Ready(render_list(&self.state)),
        }
    }

    pub fn detail_panel(&self) -> DetailPanelView {
        match &self.detail {
            DetailPhase::NoSelection => {
                let body = match render_detail(None) {
                    DetailView::Empty { message } => DetailBody::Placeholder(message),
                    DetailView::Document(doc) => DetailBody::Document(doc),
                };
                DetailPanelView {
                    subtitle: DETAIL_IDLE_SUBTITLE.to_string(),
                    body,
                }
            }
            DetailPhase::Loading => DetailPanelView {
                subtitle: DETAIL_LOADING_SUBTITLE.to_string(),
                body: DetailBody::Loading(DETAIL_LOADING_MESSAGE.to_string()),
            },
            DetailPhase::Failed(err) => DetailPanelView {
                subtitle: DETAIL_FAILED_SUBTITLE.to_string(),
                body: DetailBody::Failed(err.to_string()),
            },
            DetailPhase::Ready(detail) => match render_detail(Some(detail.as_ref())) {
                DetailView::Document(doc) => DetailPanelView {
                    subtitle: doc.subtitle.clone(),
                    body: DetailBody::Document(doc),
                },
                DetailView::Empty { message } => DetailPanelView {
                    subtitle: DETAIL_IDLE_SUBTITLE.to_string(),
                    body: DetailBody::Placeholder(message),
                },
            },
        }
    }

    pub fn view(&self) -> ViewerView {
        ViewerView {
            status: self.status_line(),
            list: self.list_panel(),
            detail: self.detail_panel(),
        }
    }

    /// 起動シーケンス: インデックス読込 → 先頭を自動選択して詳細読込
    ///
    /// 読込失敗は状態に記録され、ここでは Err にならない。
    pub async fn run_startup<S: DataSource>(&mut self, source: &S) -> Result<()> {
        self.begin_index_load()?;
        let result = source.fetch_index().await;
        if let Some(request) = self.finish_index_load(result)? {
            self.load_detail(source, &request).await;
        }
        Ok(())
    }

    /// 選択して詳細を読込
    pub async fn select_and_load<S: DataSource>(&mut self, source: &S, path: &str) -> Result<bool> {
        let request = self.select(path)?;
        Ok(self.load_detail(source, &request).await)
    }

    async fn load_detail<S: DataSource>(&mut self, source: &S, request: &DetailRequest) -> bool {
        let result = source.fetch_detail(&request.path).await;
        self.finish_detail_load(request, result)
    }
}
