//! メインアプリケーションコンポーネント
//!
//! コントローラは App が1つだけ所有し、書き換えはここからのみ行う。
//! 各コンポーネントはコントローラの投影（Memo）を読むだけ。

use crate::api::HttpSource;
use crate::components::{cutsheet_list::CutsheetList, detail_panel::DetailPanel, header::Header};
use cutsheet_common::{Controller, DataSource, DetailRequest, ViewerConfig};
use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn App() -> impl IntoView {
    let controller = RwSignal::new(Controller::new());
    let source = HttpSource::new(ViewerConfig::default());

    let status = Memo::new(move |_| controller.with(Controller::status_line));
    let list = Memo::new(move |_| controller.with(Controller::list_panel));
    let detail = Memo::new(move |_| controller.with(Controller::detail_panel));

    // 一覧からの選択
    let on_select = {
        let source = source.clone();
        move |path: String| match controller.try_update(|c| c.select(&path)) {
            Some(Ok(request)) => load_detail(controller, source.clone(), request),
            Some(Err(err)) => console::warn!(err.to_string()),
            None => {}
        }
    };

    load_index(controller, source);

    view! {
        <div class="container">
            <Header status=status />
            <main class="layout">
                <CutsheetList panel=list on_select=on_select />
                <DetailPanel panel=detail />
            </main>
        </div>
    }
}

/// 起動時のインデックス読込（先頭を自動選択）
fn load_index(controller: RwSignal<Controller>, source: HttpSource) {
    spawn_local(async move {
        match controller.try_update(|c| c.begin_index_load()) {
            Some(Ok(())) => {}
            Some(Err(err)) => {
                console::warn!(err.to_string());
                return;
            }
            None => return,
        }

        let result = source.fetch_index().await;
        if let Err(err) = &result {
            console::error!(format!("index load failed: {}", err));
        }

        match controller.try_update(|c| c.finish_index_load(result)) {
            Some(Ok(Some(request))) => load_detail(controller, source, request),
            Some(Ok(None)) | None => {}
            Some(Err(err)) => console::warn!(err.to_string()),
        }
    });
}

/// 詳細読込。古い選択の結果はコントローラ側で捨てられる。
fn load_detail(controller: RwSignal<Controller>, source: HttpSource, request: DetailRequest) {
    spawn_local(async move {
        let result = source.fetch_detail(&request.path).await;
        if let Err(err) = &result {
            console::error!(format!("detail load failed ({}): {}", err.context, err));
        }

        let applied = controller
            .try_update(|c| c.finish_detail_load(&request, result))
            .unwrap_or(false);
        if !applied {
            console::debug!(format!("stale detail ignored: {}", request.path));
        }
    });
}
