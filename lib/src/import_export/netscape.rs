//! Netscape bookmark file import (Chrome, Firefox, Safari, Edge HTML exports).
//!
//! Folder depth decides what a folder becomes:
//! - top-level folders are boards, loose top-level links go to an
//!   "Uncategorized" board
//! - folders inside a board are categories, loose links there go to a
//!   "General" category placed first
//! - anything deeper is flattened into the enclosing category

use crate::dom::Element;
use crate::models::{ImportData, ImportedBoard, ImportedBookmark, ImportedCategory};
use crate::palette::{ColorSource, Palette};
use crate::tags::parse_tags;
use log::debug;
use std::collections::HashMap;

const UNCATEGORIZED: &str = "Uncategorized";
const GENERAL: &str = "General";
const FALLBACK_BOARD: &str = "Imported Bookmarks";
const UNNAMED_BOARD: &str = "Unnamed Board";
const UNNAMED_CATEGORY: &str = "Unnamed Category";

/// Parse Netscape bookmark HTML. Never fails; unusable input gives no boards.
pub fn parse_netscape_bookmarks(
    content: &str,
    palette: &Palette,
    colors: &mut dyn ColorSource,
) -> ImportData {
    let root = Element::parse_document(content);
    parse_netscape_tree(&root, palette, colors)
}

/// Same as [`parse_netscape_bookmarks`] over an already built tree
pub fn parse_netscape_tree(
    root: &Element,
    palette: &Palette,
    colors: &mut dyn ColorSource,
) -> ImportData {
    let Some(main_list) = root.find_first("dl") else {
        debug!("No <dl> in document, collecting loose links");
        return collect_loose_links(root);
    };

    let mut walker = Walker {
        palette,
        colors,
        boards: Vec::new(),
        buckets: HashMap::new(),
    };
    walker.walk_top_level(main_list);

    let mut data = ImportData {
        boards: walker.boards,
    };
    data.retain_non_empty();
    debug!("Parsed {} board(s) from Netscape HTML", data.boards.len());
    data
}

/// One `<DT>` item of a `<DL>` list
enum Entry<'a> {
    Folder {
        title: String,
        list: Option<&'a Element>,
    },
    Link(ImportedBookmark),
}

struct Walker<'p, 'c> {
    palette: &'p Palette,
    colors: &'c mut dyn ColorSource,
    boards: Vec<ImportedBoard>,
    /// Boards that take loose links, by bucket name
    buckets: HashMap<&'static str, Bucket>,
}

/// Indices into `boards` and that board's categories
struct Bucket {
    board: usize,
    category: Option<usize>,
}

impl Walker<'_, '_> {
    fn walk_top_level(&mut self, list: &Element) {
        for entry in entries(list) {
            match entry {
                Entry::Folder { title, list } => {
                    let mut board = ImportedBoard::new(name_or(title, UNNAMED_BOARD));
                    if let Some(list) = list {
                        self.fill_board(list, &mut board);
                    }
                    if board.categories.is_empty() {
                        debug!("Skipping empty board '{}'", board.name);
                    } else {
                        self.push_board(board);
                    }
                }
                Entry::Link(bookmark) => self.bucket(UNCATEGORIZED).bookmarks.push(bookmark),
            }
        }
    }

    /// Keep a folder board, registering it as the bucket when it carries
    /// the bucket's name and no bucket board exists yet
    fn push_board(&mut self, board: ImportedBoard) {
        let index = self.boards.len();
        if board.name == UNCATEGORIZED {
            self.buckets.entry(UNCATEGORIZED).or_insert_with(|| Bucket {
                board: index,
                category: board
                    .categories
                    .iter()
                    .position(|c| c.name == UNCATEGORIZED),
            });
        }
        self.boards.push(board);
    }

    /// Category `name` of the board `name`, each created on first use
    fn bucket(&mut self, name: &'static str) -> &mut ImportedCategory {
        let boards = &mut self.boards;
        let bucket = self.buckets.entry(name).or_insert_with(|| {
            boards.push(ImportedBoard::new(name));
            Bucket {
                board: boards.len() - 1,
                category: None,
            }
        });

        let categories = &mut boards[bucket.board].categories;
        let index = *bucket.category.get_or_insert_with(|| {
            categories.push(ImportedCategory::bucket(name));
            categories.len() - 1
        });
        &mut categories[index]
    }

    fn fill_board(&mut self, list: &Element, board: &mut ImportedBoard) {
        let mut general = ImportedCategory::bucket(GENERAL);

        for entry in entries(list) {
            match entry {
                Entry::Folder { title, list } => {
                    let mut category = ImportedCategory {
                        name: name_or(title, UNNAMED_CATEGORY),
                        color: Some(self.colors.next_color(self.palette)),
                        icon: None,
                        bookmarks: Vec::new(),
                    };
                    if let Some(list) = list {
                        collect_all(list, &mut category.bookmarks);
                    }
                    if category.bookmarks.is_empty() {
                        debug!("Skipping empty category '{}'", category.name);
                    } else {
                        board.categories.push(category);
                    }
                }
                Entry::Link(bookmark) => general.bookmarks.push(bookmark),
            }
        }

        if !general.bookmarks.is_empty() {
            board.categories.insert(0, general);
        }
    }
}

/// Every link below `list`, depth-first, sub-folders flattened away
fn collect_all(list: &Element, out: &mut Vec<ImportedBookmark>) {
    for entry in entries(list) {
        match entry {
            Entry::Folder {
                list: Some(nested), ..
            } => collect_all(nested, out),
            Entry::Folder { list: None, .. } => {}
            Entry::Link(bookmark) => out.push(bookmark),
        }
    }
}

/// Classify the direct `<DT>` children of a `<DL>`.
///
/// A `<DT>` holding an `<H3>` is a folder, one holding an `<A>` is a link.
/// A `<DD>` right after an item is its description; folders exported with a
/// description end up with their `<DL>` inside that `<DD>`.
fn entries(list: &Element) -> Vec<Entry<'_>> {
    let items: Vec<&Element> = list.child_elements().collect();
    let mut out = Vec::new();

    for (i, item) in items.iter().enumerate() {
        if !item.is("dt") {
            continue;
        }
        let dd = items.get(i + 1).copied().filter(|e| e.is("dd"));

        if let Some(heading) = item.first_child("h3") {
            let list = item
                .first_child("dl")
                .or_else(|| dd.and_then(|dd| dd.first_child("dl")));
            out.push(Entry::Folder {
                title: heading.text_content().trim().to_string(),
                list,
            });
        } else if let Some(link) = item.first_child("a") {
            if let Some(mut bookmark) = bookmark_from_link(link) {
                bookmark.description = dd
                    .map(|dd| dd.text_content().trim().to_string())
                    .filter(|d| !d.is_empty());
                out.push(Entry::Link(bookmark));
            }
        }
    }

    out
}

/// Bookmark for an `<A>` whose `href` starts with "http"; anything else is dropped
fn bookmark_from_link(link: &Element) -> Option<ImportedBookmark> {
    let url = link.attr("href")?;
    if !url.starts_with("http") {
        debug!("Skipping non-http link '{}'", url);
        return None;
    }

    let text = link.text_content();
    let title = match text.trim() {
        "" => url,
        t => t,
    };

    let mut bookmark = ImportedBookmark::new(url, title);
    bookmark.tags = link
        .attr("tags")
        .map(parse_tags)
        .filter(|tags| !tags.is_empty());
    Some(bookmark)
}

/// Document without any `<DL>`: every qualifying anchor in one bucket
fn collect_loose_links(root: &Element) -> ImportData {
    let bookmarks: Vec<ImportedBookmark> = root
        .find_all("a")
        .into_iter()
        .filter_map(bookmark_from_link)
        .collect();

    if bookmarks.is_empty() {
        return ImportData::default();
    }

    let mut category = ImportedCategory::bucket(UNCATEGORIZED);
    category.bookmarks = bookmarks;
    let mut board = ImportedBoard::new(FALLBACK_BOARD);
    board.categories.push(category);
    ImportData {
        boards: vec![board],
    }
}

fn name_or(title: String, fallback: &str) -> String {
    if title.is_empty() {
        fallback.to_string()
    } else {
        title
    }
}
