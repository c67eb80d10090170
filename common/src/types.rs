//! カットシートの型定義
//!
//! - IndexEntry: インデックス（一覧）の1件
//! - CutsheetDetail: 選択時に取得する詳細ドキュメント
//!
//! 抽出はベストエフォートのため、`cutsheet` と `cutsheet_metadata` 以外は
//! すべて欠落しうる。数値系の表示項目は生の JSON 値のまま保持する。

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// インデックスの1件
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    #[serde(default, deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub station_code: Option<String>,
    /// 詳細ドキュメントへのパス（選択のキー）
    pub cutsheet_metadata: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub material_hint: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub file_type: Option<String>,
}

/// 詳細ドキュメント
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CutsheetDetail {
    pub cutsheet: CutsheetSummary,
    #[serde(default, deserialize_with = "lenient_object")]
    pub parsed_from_pdf: Option<ParsedFromPdf>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub parts: Option<Vec<Part>>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub related_files: Option<Vec<RelatedFile>>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub extracted_text_excerpt: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CutsheetSummary {
    #[serde(deserialize_with = "lenient_text")]
    pub product: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub station_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub run_number: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub file_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub source_pdf: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub material_hint: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub file_type: Option<String>,
}

/// PDFから抽出した構造化データ
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParsedFromPdf {
    #[serde(deserialize_with = "lenient_text")]
    pub material_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub gauge: Option<String>,
    #[serde(deserialize_with = "lenient_object")]
    pub sheet_size_ft: Option<SheetSize>,
    #[serde(deserialize_with = "lenient_object")]
    pub sheet_dimensions_in: Option<SheetDimensions>,
    #[serde(deserialize_with = "lenient_text")]
    pub run_time: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub date_time: Option<String>,
    /// 部品説明
    #[serde(deserialize_with = "lenient_text")]
    pub user_data_3: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub notes: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub company_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub machine_type: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub software_used: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub file_name: Option<String>,
}

/// 定尺（フィート）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSize {
    pub width: Option<Value>,
    pub length: Option<Value>,
}

/// 板寸法（インチ）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetDimensions {
    pub length: Option<Value>,
    pub width: Option<Value>,
    pub thickness: Option<Value>,
}

/// 部品行
///
/// 旧形式は `part_number` / `quantity`（＋`description`）のみ、
/// 新形式は `details` / `weight_lb` / `dimensions_in` を持つ。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Part {
    #[serde(deserialize_with = "lenient_text")]
    pub part_number: Option<String>,
    pub quantity: Option<Value>,
    #[serde(deserialize_with = "lenient_text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub details: Option<String>,
    pub weight_lb: Option<Value>,
    #[serde(deserialize_with = "lenient_object")]
    pub dimensions_in: Option<PartDimensions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartDimensions {
    pub width: Option<Value>,
    pub length: Option<Value>,
}

/// 関連ファイル（図面・加工データなど）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedFile {
    #[serde(deserialize_with = "lenient_text")]
    pub path: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub extension: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub station_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub relation: Option<String>,
}

/// 観測されている2つのドキュメント形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    Legacy,
    Extended,
}

impl Part {
    /// 新形式のフィールドを1つでも持つか
    pub fn is_extended(&self) -> bool {
        present(&self.details) || is_set(&self.weight_lb) || self.dimensions_in.is_some()
    }
}

impl CutsheetDetail {
    pub fn parts(&self) -> &[Part] {
        self.parts.as_deref().unwrap_or(&[])
    }

    pub fn related_files(&self) -> &[RelatedFile] {
        self.related_files.as_deref().unwrap_or(&[])
    }

    /// ドキュメント単位の形式判定
    pub fn schema(&self) -> Schema {
        let extended = present(&self.cutsheet.material_hint)
            || present(&self.cutsheet.file_type)
            || self.extracted_text_excerpt.is_some()
            || self.parts().iter().any(Part::is_extended);
        if extended {
            Schema::Extended
        } else {
            Schema::Legacy
        }
    }
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}

fn is_set(value: &Option<Value>) -> bool {
    value.as_ref().is_some_and(|v| !v.is_null())
}

/// 文字列はそのまま、数値・真偽値は文字列化、null は欠落扱い
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}

/// オブジェクト以外（文字列など）は欠落扱い
fn lenient_object<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(value @ Value::Object(_)) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// 配列以外は欠落扱い。読めない要素は全項目欠落の1行にする
fn lenient_list<'de, D, T>(deserializer: D) -> std::result::Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => Some(
            items
                .into_iter()
                .map(|item| serde_json::from_value(item).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}
