//! 一覧ビューモデル

use crate::format::text_or_placeholder;
use crate::state::SelectionState;

pub const EMPTY_INDEX_MESSAGE: &str = "No cutsheets found.";

/// 一覧の1行
#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    /// 選択キー（`cutsheet_metadata`）
    pub path: String,
    /// `"製品 · ステーション"`
    pub title: String,
    pub badge: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Empty { message: String },
    Rows(Vec<ListRow>),
}

impl ListView {
    pub fn rows(&self) -> &[ListRow] {
        match self {
            ListView::Rows(rows) => rows,
            ListView::Empty { .. } => &[],
        }
    }

    pub fn selected(&self) -> Option<&ListRow> {
        self.rows().iter().find(|row| row.selected)
    }
}

/// 選択状態から一覧を作る
pub fn render_list(state: &SelectionState) -> ListView {
    if state.cutsheets().is_empty() {
        return ListView::Empty {
            message: EMPTY_INDEX_MESSAGE.to_string(),
        };
    }

    let selected = state.selected_path();
    let rows = state
        .cutsheets()
        .iter()
        .map(|entry| {
            let product = text_or_placeholder(entry.product.as_deref());
            let station = text_or_placeholder(entry.station_code.as_deref());
            ListRow {
                path: entry.cutsheet_metadata.clone(),
                title: format!("{} · {}", product, station),
                badge: station,
                selected: selected == Some(entry.cutsheet_metadata.as_str()),
            }
        })
        .collect();

    ListView::Rows(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IndexEntry;

    fn state_with(entries: Vec<IndexEntry>) -> SelectionState {
        let mut state = SelectionState::new();
        state.publish_index(entries).unwrap();
        state
    }

    fn entry(product: &str, station: Option<&str>, path: &str) -> IndexEntry {
        IndexEntry {
            product: Some(product.into()),
            station_code: station.map(Into::into),
            cutsheet_metadata: path.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_index() {
        let view = render_list(&state_with(vec![]));
        assert_eq!(
            view,
            ListView::Empty {
                message: "No cutsheets found.".to_string()
            }
        );
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_rows_and_selection() {
        let mut state = state_with(vec![
            entry("Bracket", Some("S1"), "data/cutsheets/a.json"),
            entry("Frame", Some("S2"), "data/cutsheets/b.json"),
        ]);
        state.select("data/cutsheets/b.json").unwrap();

        let view = render_list(&state);
        let rows = view.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].title, "Bracket · S1");
        assert_eq!(rows[0].badge, "S1");
        assert_eq!(rows[0].path, "data/cutsheets/a.json");
        assert!(!rows[0].selected);
        assert!(rows[1].selected);
        assert_eq!(view.selected().map(|r| r.title.as_str()), Some("Frame · S2"));
    }

    #[test]
    fn test_missing_station_uses_placeholder() {
        let view = render_list(&state_with(vec![entry("Frame", None, "data/cutsheets/f.json")]));
        assert_eq!(view.rows()[0].title, "Frame · —");
        assert!(view.selected().is_none());
    }
}
