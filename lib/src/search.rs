use crate::models::{ImportData, SearchResult, SearchResultKind};

/// Case-insensitive substring search over an import tree
///
/// Boards and categories match on their name, bookmarks on title, URL or
/// description. Results come grouped: boards, then categories, then
/// bookmarks, each group in tree order. A blank query finds nothing.
pub fn search(data: &ImportData, query: &str) -> Vec<SearchResult> {
    let lowered = query.trim().to_lowercase();
    if lowered.is_empty() {
        return Vec::new();
    }
    let needle = lowered.as_str();

    let boards = data
        .boards
        .iter()
        .filter(|b| contains(&b.name, needle))
        .map(|b| SearchResult {
            kind: SearchResultKind::Board,
            name: b.name.clone(),
            board_name: None,
            category_name: None,
            url: None,
        });

    let categories = data.boards.iter().flat_map(move |b| {
        b.categories
            .iter()
            .filter(move |c| contains(&c.name, needle))
            .map(move |c| SearchResult {
                kind: SearchResultKind::Category,
                name: c.name.clone(),
                board_name: Some(b.name.clone()),
                category_name: None,
                url: None,
            })
    });

    let bookmarks = data
        .bookmarks()
        .filter(|(_, _, bm)| {
            contains(&bm.title, needle)
                || contains(&bm.url, needle)
                || bm
                    .description
                    .as_deref()
                    .is_some_and(|d| contains(d, needle))
        })
        .map(|(board, category, bm)| SearchResult {
            kind: SearchResultKind::Bookmark,
            name: bm.title.clone(),
            board_name: Some(board.name.clone()),
            category_name: Some(category.name.clone()),
            url: Some(bm.url.clone()),
        });

    boards.chain(categories).chain(bookmarks).collect()
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}
