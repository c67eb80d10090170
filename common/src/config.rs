//! ビューア設定
//!
//! データソースの基点パスとインデックスの位置だけを持つ。

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_PATH: &str = "/";
const DEFAULT_INDEX_PATH: &str = "data/cutsheets/index.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    #[serde(default = "default_base_path")]
    pub base_path: String,
    #[serde(default = "default_index_path")]
    pub index_path: String,
}

fn default_base_path() -> String {
    DEFAULT_BASE_PATH.into()
}

fn default_index_path() -> String {
    DEFAULT_INDEX_PATH.into()
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            index_path: default_index_path(),
        }
    }
}

impl ViewerConfig {
    pub fn index_url(&self) -> String {
        self.detail_url(&self.index_path)
    }

    /// 基点パスと相対パスを連結（エンコードはしない）
    pub fn detail_url(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_index_url() {
        let config = ViewerConfig::default();
        assert_eq!(config.index_url(), "/data/cutsheets/index.json");
    }

    #[test]
    fn test_detail_url_joins_without_double_slash() {
        let config = ViewerConfig {
            base_path: "/viewer/".into(),
            ..Default::default()
        };
        assert_eq!(config.detail_url("/data/cutsheets/a.json"), "/viewer/data/cutsheets/a.json");
        assert_eq!(config.detail_url("data/b c.json"), "/viewer/data/b c.json");
    }

    #[test]
    fn test_deserialize_fills_defaults() {
        let config: ViewerConfig = serde_json::from_str(r#"{"index_path": "idx.json"}"#).unwrap();
        assert_eq!(config.base_path, "/");
        assert_eq!(config.index_url(), "/idx.json");
    }

    #[test]
    fn test_deserialize_invalid() {
        assert!(serde_json::from_str::<ViewerConfig>("not json").is_err());
    }
}
