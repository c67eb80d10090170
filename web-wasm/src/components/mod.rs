//! UIコンポーネント

pub mod cutsheet_list;
pub mod detail_panel;
pub mod header;
