//! 詳細ビューモデル
//!
//! 詳細ドキュメントを表示用のブロック列に変換する。各項目は個別に
//! プレースホルダへ退避し、セクションごと省略するのは設備セクションのみ。

use crate::format::{format_number, format_plain, non_blank, resource_href, text_or_placeholder, PLACEHOLDER};
use crate::types::{CutsheetDetail, ParsedFromPdf, Part, Schema};

pub const EMPTY_DETAIL_MESSAGE: &str = "Select a cut sheet to view metadata.";
pub const EMPTY_PARTS_MESSAGE: &str = "No part rows parsed from the PDF yet.";
pub const MISSING_EXCERPT_MESSAGE: &str = "No text excerpt captured for this cut sheet.";

pub const OVERVIEW_TITLE: &str = "Program Overview";
pub const MATERIAL_TITLE: &str = "Material";
pub const NOTES_TITLE: &str = "Production Notes";
pub const EQUIPMENT_TITLE: &str = "Equipment";
pub const PARTS_TITLE: &str = "Nested Parts";
pub const EXCERPT_TITLE: &str = "Text Excerpt";

#[derive(Debug, Clone, PartialEq)]
pub enum DetailView {
    Empty { message: String },
    Document(DocumentView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DocumentView {
    pub subtitle: String,
    pub schema: Schema,
    /// 表示順
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Section(SectionView),
    Links(Vec<LinkView>),
    Parts(PartsView),
    Excerpt(ExcerptView),
}

/// 見出し付きの項目グリッド
#[derive(Debug, Clone, PartialEq)]
pub struct SectionView {
    pub title: String,
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: String,
    pub value: String,
}

/// 新しいタブで開くリンク
#[derive(Debug, Clone, PartialEq)]
pub struct LinkView {
    pub label: String,
    /// リンク先が無いときは None（非活性で表示）
    pub href: Option<String>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartColumns {
    /// `Part #` / `# Pcs`
    Quantity,
    /// `Part #` / `Details` / `Weight (lb)` / `Dimensions (in)`
    Measured,
}

impl PartColumns {
    pub fn headers(&self) -> &'static [&'static str] {
        match self {
            PartColumns::Quantity => &["Part #", "# Pcs"],
            PartColumns::Measured => &["Part #", "Details", "Weight (lb)", "Dimensions (in)"],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PartsView {
    Empty { message: String },
    Table { columns: PartColumns, rows: Vec<Vec<String>> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExcerptView {
    Text(String),
    Missing(String),
}

impl DocumentView {
    pub fn section(&self, title: &str) -> Option<&SectionView> {
        self.blocks.iter().find_map(|block| match block {
            Block::Section(section) if section.title == title => Some(section),
            _ => None,
        })
    }

    pub fn links(&self) -> &[LinkView] {
        self.blocks
            .iter()
            .find_map(|block| match block {
                Block::Links(links) => Some(links.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    pub fn parts(&self) -> Option<&PartsView> {
        self.blocks.iter().find_map(|block| match block {
            Block::Parts(parts) => Some(parts),
            _ => None,
        })
    }

    pub fn excerpt(&self) -> Option<&ExcerptView> {
        self.blocks.iter().find_map(|block| match block {
            Block::Excerpt(excerpt) => Some(excerpt),
            _ => None,
        })
    }
}

impl SectionView {
    pub fn value(&self, label: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.label == label)
            .map(|f| f.value.as_str())
    }
}

/// 詳細ドキュメントから表示を作る
pub fn render_detail(detail: Option<&CutsheetDetail>) -> DetailView {
    let Some(detail) = detail else {
        return DetailView::Empty {
            message: EMPTY_DETAIL_MESSAGE.to_string(),
        };
    };

    let schema = detail.schema();
    let parsed = detail.parsed_from_pdf.as_ref();

    let mut blocks = vec![
        Block::Section(overview_section(detail, schema)),
        Block::Section(material_section(parsed)),
        Block::Section(notes_section(parsed)),
        Block::Links(links(detail)),
    ];
    if let Some(equipment) = equipment_section(parsed) {
        blocks.push(Block::Section(equipment));
    }
    blocks.push(Block::Parts(parts_view(detail.parts())));
    if schema == Schema::Extended {
        blocks.push(Block::Excerpt(excerpt_view(detail.extracted_text_excerpt.as_deref())));
    }

    DetailView::Document(DocumentView {
        subtitle: subtitle(detail),
        schema,
        blocks,
    })
}

fn subtitle(detail: &CutsheetDetail) -> String {
    let summary = &detail.cutsheet;
    format!(
        "{} · Station {} · Run {}",
        text_or_placeholder(summary.product.as_deref()),
        text_or_placeholder(summary.station_code.as_deref()),
        text_or_placeholder(summary.run_number.as_deref()),
    )
}

fn field(label: &str, value: impl Into<String>) -> Field {
    Field {
        label: label.to_string(),
        value: value.into(),
    }
}

fn text_field(label: &str, value: Option<&str>) -> Field {
    field(label, text_or_placeholder(value))
}

fn parsed_text<'a>(parsed: Option<&'a ParsedFromPdf>, pick: fn(&ParsedFromPdf) -> &Option<String>) -> Option<&'a str> {
    parsed.and_then(|p| non_blank(pick(p).as_deref()))
}

fn overview_section(detail: &CutsheetDetail, schema: Schema) -> SectionView {
    let summary = &detail.cutsheet;
    let parsed = detail.parsed_from_pdf.as_ref();
    let file_name = parsed_text(parsed, |p| &p.file_name).or(non_blank(summary.file_name.as_deref()));

    let mut fields = vec![
        text_field("Product", summary.product.as_deref()),
        text_field("Station", summary.station_code.as_deref()),
        text_field("Run #", summary.run_number.as_deref()),
        text_field("File Name", file_name),
        text_field("Run Time", parsed_text(parsed, |p| &p.run_time)),
        text_field("Created", parsed_text(parsed, |p| &p.date_time)),
    ];
    if schema == Schema::Extended {
        fields.push(text_field("Material Hint", summary.material_hint.as_deref()));
        fields.push(text_field("File Type", summary.file_type.as_deref()));
    }

    SectionView {
        title: OVERVIEW_TITLE.to_string(),
        fields,
    }
}

fn material_section(parsed: Option<&ParsedFromPdf>) -> SectionView {
    let gauge = parsed_text(parsed, |p| &p.gauge)
        .map(|g| format!("{} GA", g))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let sheet_size = parsed
        .and_then(|p| p.sheet_size_ft.as_ref())
        .map(|size| {
            format!(
                "{} ft × {} ft",
                format_plain(size.width.as_ref()),
                format_plain(size.length.as_ref())
            )
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    let raw_dimensions = parsed
        .and_then(|p| p.sheet_dimensions_in.as_ref())
        .map(|dims| {
            format!(
                "{} × {} × {} in",
                format_number(dims.length.as_ref()),
                format_number(dims.width.as_ref()),
                format_number(dims.thickness.as_ref())
            )
        })
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    SectionView {
        title: MATERIAL_TITLE.to_string(),
        fields: vec![
            text_field("Material Type", parsed_text(parsed, |p| &p.material_type)),
            field("Gauge", gauge),
            field("Sheet Size", sheet_size),
            field("Raw Dimensions", raw_dimensions),
        ],
    }
}

fn notes_section(parsed: Option<&ParsedFromPdf>) -> SectionView {
    SectionView {
        title: NOTES_TITLE.to_string(),
        fields: vec![
            text_field("Part Description", parsed_text(parsed, |p| &p.user_data_3)),
            text_field("Notes / Frame Qty", parsed_text(parsed, |p| &p.notes)),
        ],
    }
}

/// 会社・機械・ソフトのいずれも無ければセクションごと出さない
fn equipment_section(parsed: Option<&ParsedFromPdf>) -> Option<SectionView> {
    let company = parsed_text(parsed, |p| &p.company_name);
    let machine = parsed_text(parsed, |p| &p.machine_type);
    let software = parsed_text(parsed, |p| &p.software_used);

    if company.is_none() && machine.is_none() && software.is_none() {
        return None;
    }

    Some(SectionView {
        title: EQUIPMENT_TITLE.to_string(),
        fields: vec![
            text_field("Company", company),
            text_field("Machine", machine),
            text_field("Software", software),
        ],
    })
}

fn links(detail: &CutsheetDetail) -> Vec<LinkView> {
    let mut links = vec![LinkView {
        label: "Open PDF".to_string(),
        href: non_blank(detail.cutsheet.source_pdf.as_deref()).map(resource_href),
        title: None,
    }];

    links.extend(detail.related_files().iter().map(|file| {
        let kind = non_blank(file.extension.as_deref())
            .map(str::to_uppercase)
            .unwrap_or_else(|| "File".to_string());
        LinkView {
            label: format!("Open {}", kind),
            href: non_blank(file.path.as_deref()).map(resource_href),
            title: non_blank(file.relation.as_deref()).map(|r| r.replace('_', " ")),
        }
    }));

    links
}

fn parts_view(parts: &[Part]) -> PartsView {
    if parts.is_empty() {
        return PartsView::Empty {
            message: EMPTY_PARTS_MESSAGE.to_string(),
        };
    }

    let columns = if parts.iter().any(Part::is_extended) {
        PartColumns::Measured
    } else {
        PartColumns::Quantity
    };

    let rows = parts.iter().map(|part| part_row(part, columns)).collect();
    PartsView::Table { columns, rows }
}

fn part_row(part: &Part, columns: PartColumns) -> Vec<String> {
    let number = text_or_placeholder(part.part_number.as_deref());
    match columns {
        PartColumns::Quantity => vec![number, format_number(part.quantity.as_ref())],
        PartColumns::Measured => {
            let details = non_blank(part.details.as_deref()).or(non_blank(part.description.as_deref()));
            let dimensions = part
                .dimensions_in
                .as_ref()
                .map(|d| format!("{} × {}", format_number(d.length.as_ref()), format_number(d.width.as_ref())))
                .unwrap_or_else(|| PLACEHOLDER.to_string());
            vec![
                number,
                text_or_placeholder(details),
                format_number(part.weight_lb.as_ref()),
                dimensions,
            ]
        }
    }
}

fn excerpt_view(excerpt: Option<&str>) -> ExcerptView {
    match non_blank(excerpt) {
        Some(text) => ExcerptView::Text(text.to_string()),
        None => ExcerptView::Missing(MISSING_EXCERPT_MESSAGE.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn detail(value: Value) -> CutsheetDetail {
        serde_json::from_value(value).unwrap()
    }

    fn document(value: Value) -> DocumentView {
        match render_detail(Some(&detail(value))) {
            DetailView::Document(doc) => doc,
            DetailView::Empty { .. } => panic!("document expected"),
        }
    }

    #[test]
    fn test_no_detail_is_placeholder() {
        assert_eq!(
            render_detail(None),
            DetailView::Empty {
                message: "Select a cut sheet to view metadata.".to_string()
            }
        );
    }

    #[test]
    fn test_minimal_document_uses_placeholders() {
        let doc = document(json!({
            "cutsheet": {"product": "Bracket", "station_code": "S1"},
            "parts": []
        }));

        assert_eq!(doc.subtitle, "Bracket · Station S1 · Run —");
        assert_eq!(doc.schema, Schema::Legacy);

        let overview = doc.section(OVERVIEW_TITLE).unwrap();
        assert_eq!(overview.fields.len(), 6);
        assert_eq!(overview.value("Product"), Some("Bracket"));
        assert_eq!(overview.value("Station"), Some("S1"));
        for label in ["Run #", "File Name", "Run Time", "Created"] {
            assert_eq!(overview.value(label), Some("—"), "{}", label);
        }

        let material = doc.section(MATERIAL_TITLE).unwrap();
        assert!(material.fields.iter().all(|f| f.value == "—"));

        assert_eq!(
            doc.parts(),
            Some(&PartsView::Empty {
                message: "No part rows parsed from the PDF yet.".to_string()
            })
        );
        assert!(doc.excerpt().is_none());
    }

    #[test]
    fn test_file_name_prefers_parsed() {
        let doc = document(json!({
            "cutsheet": {"file_name": "Frame 12A.pdf"},
            "parsed_from_pdf": {"file_name": "FRAME-12A.MPF"}
        }));
        assert_eq!(doc.section(OVERVIEW_TITLE).unwrap().value("File Name"), Some("FRAME-12A.MPF"));

        let doc = document(json!({
            "cutsheet": {"file_name": "Frame 12A.pdf"},
            "parsed_from_pdf": {"file_name": ""}
        }));
        assert_eq!(doc.section(OVERVIEW_TITLE).unwrap().value("File Name"), Some("Frame 12A.pdf"));
    }

    #[test]
    fn test_material_section_formats() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame"},
            "parsed_from_pdf": {
                "material_type": "CRS",
                "gauge": "16",
                "sheet_size_ft": {"width": 4.0, "length": 10},
                "sheet_dimensions_in": {"length": 120, "width": 48.5, "thickness": 0.0598}
            }
        }));
        let material = doc.section(MATERIAL_TITLE).unwrap();
        assert_eq!(material.value("Material Type"), Some("CRS"));
        assert_eq!(material.value("Gauge"), Some("16 GA"));
        assert_eq!(material.value("Sheet Size"), Some("4 ft × 10 ft"));
        assert_eq!(material.value("Raw Dimensions"), Some("120 × 48.500 × 0.060 in"));
    }

    #[test]
    fn test_equipment_omitted_when_all_absent() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame"},
            "parsed_from_pdf": {"company_name": "", "machine_type": null}
        }));
        assert!(doc.section(EQUIPMENT_TITLE).is_none());
        assert!(!doc
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Section(s) if s.title == EQUIPMENT_TITLE)));
    }

    #[test]
    fn test_equipment_present_with_one_value() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame"},
            "parsed_from_pdf": {"machine_type": "Turret Punch"}
        }));
        let equipment = doc.section(EQUIPMENT_TITLE).unwrap();
        assert_eq!(equipment.value("Company"), Some("—"));
        assert_eq!(equipment.value("Machine"), Some("Turret Punch"));
        assert_eq!(equipment.value("Software"), Some("—"));
    }

    #[test]
    fn test_links() {
        let doc = document(json!({
            "cutsheet": {"source_pdf": "samples/Frame 12A.pdf"},
            "related_files": [
                {"path": "samples/Frame 12A.MPF", "extension": "mpf", "relation": "same_station"},
                {"path": "samples/Frame 12B"}
            ]
        }));
        let links = doc.links();
        assert_eq!(links.len(), 3);
        assert_eq!(links[0].label, "Open PDF");
        assert_eq!(links[0].href.as_deref(), Some("/samples/Frame 12A.pdf"));
        assert_eq!(links[1].label, "Open MPF");
        assert_eq!(links[1].title.as_deref(), Some("same station"));
        assert_eq!(links[2].label, "Open File");
        assert_eq!(links[2].href.as_deref(), Some("/samples/Frame 12B"));
    }

    #[test]
    fn test_pdf_link_always_present() {
        let doc = document(json!({"cutsheet": {}}));
        let links = doc.links();
        assert_eq!(links.len(), 1);
        assert_eq!(links[0].label, "Open PDF");
        assert_eq!(links[0].href, None);
    }

    #[test]
    fn test_quantity_parts_table() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame"},
            "parts": [
                {"part_number": "FR-A1", "quantity": 4},
                {"quantity": 2.25}
            ]
        }));
        match doc.parts().unwrap() {
            PartsView::Table { columns, rows } => {
                assert_eq!(columns.headers(), &["Part #", "# Pcs"]);
                assert_eq!(rows[0], vec!["FR-A1", "4"]);
                assert_eq!(rows[1], vec!["—", "2.250"]);
            }
            other => panic!("table expected: {:?}", other),
        }
    }

    #[test]
    fn test_measured_parts_table() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame"},
            "parts": [
                {"part_number": "P1", "weight_lb": 2},
                {"part_number": "P2"},
                {"part_number": "P3", "description": "BRACE", "dimensions_in": {"length": 12.5, "width": 3}}
            ]
        }));
        match doc.parts().unwrap() {
            PartsView::Table { columns, rows } => {
                assert_eq!(*columns, PartColumns::Measured);
                assert_eq!(rows.len(), 3);
                assert_eq!(rows[0][2], "2");
                assert_eq!(rows[1][2], "—");
                assert_eq!(rows[1][1], "—");
                assert_eq!(rows[2][1], "BRACE");
                assert_eq!(rows[2][3], "12.500 × 3");
            }
            other => panic!("table expected: {:?}", other),
        }
    }

    #[test]
    fn test_extended_overview_and_excerpt() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame", "material_hint": "CRS"},
            "extracted_text_excerpt": "ITEM # PART"
        }));
        assert_eq!(doc.schema, Schema::Extended);
        let overview = doc.section(OVERVIEW_TITLE).unwrap();
        assert_eq!(overview.value("Material Hint"), Some("CRS"));
        assert_eq!(overview.value("File Type"), Some("—"));
        assert_eq!(doc.excerpt(), Some(&ExcerptView::Text("ITEM # PART".to_string())));
    }

    #[test]
    fn test_extended_without_excerpt() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame", "file_type": "pdf"}
        }));
        assert!(matches!(doc.excerpt(), Some(ExcerptView::Missing(_))));
    }

    #[test]
    fn test_block_order() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame"},
            "parsed_from_pdf": {"company_name": "ACME"}
        }));
        let kinds: Vec<&str> = doc
            .blocks
            .iter()
            .map(|b| match b {
                Block::Section(s) => s.title.as_str(),
                Block::Links(_) => "links",
                Block::Parts(_) => "parts",
                Block::Excerpt(_) => "excerpt",
            })
            .collect();
        assert_eq!(
            kinds,
            vec![OVERVIEW_TITLE, MATERIAL_TITLE, NOTES_TITLE, "links", EQUIPMENT_TITLE, "parts"]
        );
    }

    #[test]
    fn test_every_optional_field_absent() {
        let doc = document(json!({
            "cutsheet": {},
            "parsed_from_pdf": {
                "sheet_size_ft": {},
                "sheet_dimensions_in": {}
            },
            "parts": [{}],
            "related_files": [{}]
        }));
        assert_eq!(doc.subtitle, "— · Station — · Run —");
        let material = doc.section(MATERIAL_TITLE).unwrap();
        assert_eq!(material.value("Sheet Size"), Some("— ft × — ft"));
        assert_eq!(material.value("Raw Dimensions"), Some("— × — × — in"));
        match doc.parts().unwrap() {
            PartsView::Table { rows, .. } => assert_eq!(rows[0], vec!["—", "—"]),
            other => panic!("table expected: {:?}", other),
        }
    }

    #[test]
    fn test_mistyped_nested_values_render_as_placeholders() {
        let doc = document(json!({
            "cutsheet": {"product": "Frame", "station_code": "S2", "run_number": "12"},
            "parsed_from_pdf": {
                "gauge": "14",
                "sheet_size_ft": "4' x 10'",
                "company_name": "ACME Metal"
            },
            "parts": [{"part_number": "FR-1", "weight_lb": 2, "dimensions_in": "12 x 3"}]
        }));
        assert_eq!(doc.subtitle, "Frame · Station S2 · Run 12");

        let material = doc.section(MATERIAL_TITLE).unwrap();
        assert_eq!(material.value("Gauge"), Some("14 GA"));
        assert_eq!(material.value("Sheet Size"), Some("—"));
        assert_eq!(doc.section(EQUIPMENT_TITLE).unwrap().value("Company"), Some("ACME Metal"));

        match doc.parts().unwrap() {
            PartsView::Table { rows, .. } => {
                assert_eq!(rows[0][0], "FR-1");
                assert_eq!(rows[0][2], "2");
                assert_eq!(rows[0][3], "—");
            }
            other => panic!("table expected: {:?}", other),
        }
    }
}
