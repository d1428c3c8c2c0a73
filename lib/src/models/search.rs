use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchResultKind {
    Board,
    Category,
    Bookmark,
}

impl SearchResultKind {
    pub fn label(&self) -> &str {
        match self {
            SearchResultKind::Board => "board",
            SearchResultKind::Category => "category",
            SearchResultKind::Bookmark => "bookmark",
        }
    }
}

/// One hit from searching an import tree
///
/// Bookmark hits carry the names of their category and board, category hits
/// the name of their board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "type")]
    pub kind: SearchResultKind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}
