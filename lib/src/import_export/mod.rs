pub mod export;
pub mod import;
pub mod json;
pub mod netscape;

// Re-export main functions for convenience
pub use export::{export_html, export_json, export_to_path, DEFAULT_EXPORT_TITLE};
pub use import::{import_file, parse_bookmark_file, parse_bookmark_file_with, ImportFormat, Importer};
