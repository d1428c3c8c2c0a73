pub mod config;
pub mod dom;
pub mod error;
pub mod import_export;
pub mod models;
pub mod palette;
pub mod plan;
pub mod search;
pub mod stats;
pub mod tags;
pub mod utils;

// Re-export error types for convenience
pub use error::LinkboardError;
pub use import_export::{parse_bookmark_file, ImportFormat, Importer};
pub use models::{ImportData, ImportedBoard, ImportedBookmark, ImportedCategory};
