use crate::models::ImportData;
use serde::Serialize;
use std::fmt;

/// Counts reported after an import
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub boards: usize,
    pub categories: usize,
    pub bookmarks: usize,
}

impl ImportStats {
    pub fn of(data: &ImportData) -> Self {
        data.boards.iter().fold(Self::default(), |mut stats, board| {
            stats.boards += 1;
            stats.categories += board.categories.len();
            stats.bookmarks += board
                .categories
                .iter()
                .map(|c| c.bookmarks.len())
                .sum::<usize>();
            stats
        })
    }
}

impl fmt::Display for ImportStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} boards, {} categories, {} bookmarks",
            self.boards, self.categories, self.bookmarks
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ImportedBoard, ImportedBookmark, ImportedCategory};

    #[test]
    fn test_empty_data() {
        let stats = ImportStats::of(&ImportData::default());
        assert_eq!(stats, ImportStats::default());
        assert_eq!(stats.to_string(), "0 boards, 0 categories, 0 bookmarks");
    }

    #[test]
    fn test_counts_every_level() {
        let mut a = ImportedCategory::bucket("A");
        a.bookmarks = vec![
            ImportedBookmark::new("https://1.com", "1"),
            ImportedBookmark::new("https://2.com", "2"),
        ];
        let mut b = ImportedCategory::bucket("B");
        b.bookmarks = vec![ImportedBookmark::new("https://3.com", "3")];

        let data = ImportData {
            boards: vec![
                ImportedBoard {
                    name: "One".to_string(),
                    categories: vec![a, b.clone()],
                },
                ImportedBoard {
                    name: "Two".to_string(),
                    categories: vec![b],
                },
            ],
        };

        let stats = ImportStats::of(&data);
        assert_eq!(
            stats,
            ImportStats {
                boards: 2,
                categories: 3,
                bookmarks: 4
            }
        );
        assert_eq!(stats.to_string(), "2 boards, 3 categories, 4 bookmarks");
    }
}
