//! Records an import turns into once defaults and ordering are applied.
//!
//! Boards are appended after the ones a user already has, so their
//! `sort_order` starts at a caller-supplied offset; categories and bookmarks
//! are numbered from zero inside their parent.

use crate::models::ImportData;
use crate::palette::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmarkRecord {
    pub url: String,
    pub title: String,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub sort_order: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRecord {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub sort_order: i64,
    pub bookmarks: Vec<BookmarkRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardRecord {
    pub name: String,
    pub sort_order: i64,
    pub categories: Vec<CategoryRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportPlan {
    pub boards: Vec<BoardRecord>,
}

impl ImportPlan {
    /// Plan the records for `data`, numbering boards from `first_board_order`
    pub fn build(data: &ImportData, first_board_order: i64) -> Self {
        let boards = data
            .boards
            .iter()
            .zip(first_board_order..)
            .map(|(board, sort_order)| BoardRecord {
                name: board.name.clone(),
                sort_order,
                categories: board
                    .categories
                    .iter()
                    .zip(0..)
                    .map(|(category, sort_order)| CategoryRecord {
                        name: category.name.clone(),
                        color: category
                            .color
                            .clone()
                            .unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string()),
                        icon: category
                            .icon
                            .clone()
                            .unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string()),
                        sort_order,
                        bookmarks: category
                            .bookmarks
                            .iter()
                            .zip(0..)
                            .map(|(bookmark, sort_order)| BookmarkRecord {
                                url: bookmark.url.clone(),
                                title: bookmark.title.clone(),
                                description: bookmark.description.clone(),
                                tags: bookmark.tags.clone().unwrap_or_default(),
                                sort_order,
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect();

        Self { boards }
    }

    pub fn record_count(&self) -> usize {
        self.boards
            .iter()
            .map(|b| {
                1 + b
                    .categories
                    .iter()
                    .map(|c| 1 + c.bookmarks.len())
                    .sum::<usize>()
            })
            .sum()
    }
}
