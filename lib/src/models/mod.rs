pub mod import;
pub mod search;

pub use import::{ImportData, ImportedBoard, ImportedBookmark, ImportedCategory};
pub use search::{SearchResult, SearchResultKind};
