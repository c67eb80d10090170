//! 静的JSONデータソース（fetch）
//!
//! GET のみ。非成功ステータス・通信失敗・JSONパース失敗は LoadError にして返す。

use cutsheet_common::{CutsheetDetail, DataSource, IndexEntry, LoadError, LoadErrorKind, ViewerConfig};
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

#[derive(Debug, Clone, Default)]
pub struct HttpSource {
    config: ViewerConfig,
}

enum Fetched {
    Body(String),
    Status(u16),
}

impl HttpSource {
    pub fn new(config: ViewerConfig) -> Self {
        Self { config }
    }

    pub fn index_url(&self) -> String {
        encode_uri(&self.config.index_url())
    }

    /// パスには区切りや任意のファイル名文字が入るためURIエンコードする
    pub fn detail_url(&self, path: &str) -> String {
        encode_uri(&self.config.detail_url(path))
    }

    async fn fetch_json<T: DeserializeOwned>(
        &self,
        url: &str,
        kind: LoadErrorKind,
        context: &str,
    ) -> Result<T, LoadError> {
        to_load_result(fetch_text(url).await, kind, context)
    }
}

/// 取得結果を本文のパース結果か LoadError にする
fn to_load_result<T: DeserializeOwned>(
    fetched: Result<Fetched, JsValue>,
    kind: LoadErrorKind,
    context: &str,
) -> Result<T, LoadError> {
    match fetched {
        Ok(Fetched::Body(text)) => {
            serde_json::from_str(&text).map_err(|e| LoadError::parse(kind, context, e))
        }
        Ok(Fetched::Status(status)) => Err(LoadError::status(kind, context, status)),
        Err(e) => Err(LoadError {
            kind,
            context: context.to_string(),
            message: js_message(&e),
        }),
    }
}

impl DataSource for HttpSource {
    async fn fetch_index(&self) -> Result<Vec<IndexEntry>, LoadError> {
        let url = self.index_url();
        self.fetch_json(&url, LoadErrorKind::Index, &self.config.index_path)
            .await
    }

    async fn fetch_detail(&self, path: &str) -> Result<CutsheetDetail, LoadError> {
        let url = self.detail_url(path);
        self.fetch_json(&url, LoadErrorKind::Detail, path).await
    }
}

async fn fetch_text(url: &str) -> Result<Fetched, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init(url, &opts)?;
    request.headers().set("Accept", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Ok(Fetched::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text()?).await?;
    Ok(Fetched::Body(text.as_string().unwrap_or_default()))
}

fn encode_uri(url: &str) -> String {
    js_sys::encode_uri(url).into()
}

fn js_message(value: &JsValue) -> String {
    if let Some(s) = value.as_string() {
        return s;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{:?}", value)
}
