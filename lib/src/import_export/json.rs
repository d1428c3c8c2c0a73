use crate::error::{LinkboardError, Result};
use crate::models::{ImportData, ImportedBoard, ImportedBookmark, ImportedCategory};
use crate::palette::{DEFAULT_CATEGORY_COLOR, DEFAULT_CATEGORY_ICON};
use log::{debug, error};
use serde_json::Value;

const DEFAULT_BOARD_NAME: &str = "Imported Board";
const DEFAULT_CATEGORY_NAME: &str = "Imported Category";
const UNTITLED: &str = "Untitled";

/// Parse the JSON export format
///
/// ```json
/// { "boards": [ { "name": "...", "categories": [ { "name": "...", "color": "#818CF8",
///   "icon": "folder", "bookmarks": [ { "url": "https://...", "title": "...",
///   "description": "...", "tags": ["a", "b"] } ] } ] } ] }
/// ```
///
/// Only the top level is strict: unparseable text or a missing `boards`
/// array is an error. Everything below it is defaulted, never rejected.
/// URLs are not scheme-checked here, only required to be non-empty.
pub fn parse_json_bookmarks(content: &str) -> Result<ImportData> {
    let root: Value = serde_json::from_str(content).map_err(|e| {
        error!("Error parsing JSON bookmarks: {}", e);
        LinkboardError::InvalidJson(e.to_string())
    })?;

    let boards = root
        .get("boards")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            error!("JSON bookmarks have no \"boards\" array");
            LinkboardError::InvalidJson("expected \"boards\" array".to_string())
        })?;

    let mut data = ImportData {
        boards: boards.iter().map(board_from_value).collect(),
    };
    data.retain_non_empty();

    debug!("Parsed {} board(s) from JSON", data.boards.len());
    Ok(data)
}

fn board_from_value(value: &Value) -> ImportedBoard {
    ImportedBoard {
        name: text(value, "name").unwrap_or_else(|| DEFAULT_BOARD_NAME.to_string()),
        categories: list(value, "categories")
            .iter()
            .map(category_from_value)
            .collect(),
    }
}

fn category_from_value(value: &Value) -> ImportedCategory {
    let bookmarks: Vec<ImportedBookmark> = list(value, "bookmarks")
        .iter()
        .map(bookmark_from_value)
        .filter(|b| !b.url.is_empty())
        .collect();

    ImportedCategory {
        name: text(value, "name").unwrap_or_else(|| DEFAULT_CATEGORY_NAME.to_string()),
        color: Some(text(value, "color").unwrap_or_else(|| DEFAULT_CATEGORY_COLOR.to_string())),
        icon: Some(text(value, "icon").unwrap_or_else(|| DEFAULT_CATEGORY_ICON.to_string())),
        bookmarks,
    }
}

fn bookmark_from_value(value: &Value) -> ImportedBookmark {
    let url = text(value, "url").unwrap_or_default();
    let title = text(value, "title")
        .or_else(|| Some(url.clone()).filter(|u| !u.is_empty()))
        .unwrap_or_else(|| UNTITLED.to_string());

    let tags = value.get("tags").and_then(Value::as_array).map(|tags| {
        tags.iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect()
    });

    ImportedBookmark {
        url,
        title,
        description: text(value, "description"),
        tags,
    }
}

/// Non-empty string field; anything else counts as absent
fn text(value: &Value, key: &str) -> Option<String> {
    value
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Array field; missing or non-array fields read as empty
fn list<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
