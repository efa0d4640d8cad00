pub mod http;

pub use http::CsvTableFetcher;
