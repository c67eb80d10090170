//! 表示用フォーマット

use serde_json::Value;

/// 欠落値のプレースホルダ
pub const PLACEHOLDER: &str = "—";

/// 数値表示
///
/// - 欠落 / null → `"—"`
/// - 数値以外 → 文字列化したもの
/// - 整数値 → 小数部なし
/// - それ以外 → 小数点以下3桁
pub fn format_number(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                return i.to_string();
            }
            if let Some(u) = n.as_u64() {
                return u.to_string();
            }
            match n.as_f64() {
                Some(f) if f.is_finite() && f.fract() == 0.0 => format!("{:.0}", unsigned_zero(f)),
                Some(f) => format!("{:.3}", f),
                None => n.to_string(),
            }
        }
        Some(other) => plain(other),
    }
}

/// 生の値をそのまま文字列化（整数値の浮動小数は `12.0` ではなく `12`）
pub fn format_plain(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => PLACEHOLDER.to_string(),
        Some(v) => plain(v),
    }
}

fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 => format!("{:.0}", unsigned_zero(f)),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

/// -0 は 0 として表示
fn unsigned_zero(f: f64) -> f64 {
    if f == 0.0 {
        0.0
    } else {
        f
    }
}

/// テキスト項目（空文字も欠落扱い）
pub fn text_or_placeholder(value: Option<&str>) -> String {
    non_blank(value).unwrap_or(PLACEHOLDER).to_string()
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// `/` 起点のリンク先
pub fn resource_href(path: &str) -> String {
    format!("/{}", path.trim_start_matches('/'))
}
