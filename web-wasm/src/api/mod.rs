//! データソース

pub mod data_source;

pub use data_source::HttpSource;
