use serde::{Deserialize, Serialize};

/// A single saved link, the leaf of the import tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedBookmark {
    pub url: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl ImportedBookmark {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
            description: None,
            tags: None,
        }
    }
}

/// Named group of bookmarks inside a board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedCategory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default)]
    pub bookmarks: Vec<ImportedBookmark>,
}

impl ImportedCategory {
    /// Category without color or icon, as synthesized for loose links
    pub fn bucket(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            icon: None,
            bookmarks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedBoard {
    pub name: String,
    #[serde(default)]
    pub categories: Vec<ImportedCategory>,
}

impl ImportedBoard {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            categories: Vec::new(),
        }
    }
}

/// Normalized result of parsing a bookmark file, independent of its format
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportData {
    #[serde(default)]
    pub boards: Vec<ImportedBoard>,
}

impl ImportData {
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
    }

    /// Drop empty categories, then boards left without categories.
    ///
    /// Applied bottom-up so a board whose only categories were empty goes too.
    pub fn retain_non_empty(&mut self) {
        for board in &mut self.boards {
            board.categories.retain(|c| !c.bookmarks.is_empty());
        }
        self.boards.retain(|b| !b.categories.is_empty());
    }

    /// Iterate every bookmark with its board and category, in tree order
    pub fn bookmarks(
        &self,
    ) -> impl Iterator<Item = (&ImportedBoard, &ImportedCategory, &ImportedBookmark)> {
        self.boards.iter().flat_map(|board| {
            board.categories.iter().flat_map(move |category| {
                category
                    .bookmarks
                    .iter()
                    .map(move |bookmark| (board, category, bookmark))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category(name: &str, urls: &[&str]) -> ImportedCategory {
        let mut c = ImportedCategory::bucket(name);
        c.bookmarks = urls.iter().map(|u| ImportedBookmark::new(*u, *u)).collect();
        c
    }

    #[test]
    fn test_retain_non_empty_drops_empty_levels() {
        let mut data = ImportData {
            boards: vec![
                ImportedBoard {
                    name: "Keep".to_string(),
                    categories: vec![category("Full", &["https://a.com"]), category("Empty", &[])],
                },
                ImportedBoard {
                    name: "Drop".to_string(),
                    categories: vec![category("Empty", &[])],
                },
                ImportedBoard::new("Bare"),
            ],
        };

        data.retain_non_empty();

        assert_eq!(data.boards.len(), 1);
        assert_eq!(data.boards[0].name, "Keep");
        assert_eq!(data.boards[0].categories.len(), 1);
        assert_eq!(data.boards[0].categories[0].name, "Full");
    }

    #[test]
    fn test_optional_fields_are_not_serialized() {
        let bookmark = ImportedBookmark::new("https://a.com", "A");
        let json = serde_json::to_string(&bookmark).unwrap();
        assert_eq!(json, r#"{"url":"https://a.com","title":"A"}"#);
    }

    #[test]
    fn test_bookmarks_iterates_in_tree_order() {
        let data = ImportData {
            boards: vec![
                ImportedBoard {
                    name: "One".to_string(),
                    categories: vec![category("A", &["https://1.com", "https://2.com"])],
                },
                ImportedBoard {
                    name: "Two".to_string(),
                    categories: vec![category("B", &["https://3.com"])],
                },
            ],
        };

        let urls: Vec<_> = data.bookmarks().map(|(_, _, b)| b.url.as_str()).collect();
        assert_eq!(urls, vec!["https://1.com", "https://2.com", "https://3.com"]);

        let (board, category, _) = data.bookmarks().last().unwrap();
        assert_eq!(board.name, "Two");
        assert_eq!(category.name, "B");
    }
}
