use super::json::parse_json_bookmarks;
use super::netscape::parse_netscape_bookmarks;
use crate::error::Result;
use crate::models::ImportData;
use crate::palette::{ColorSource, Palette, RandomColors, SeededColors};
use log::info;
use std::fs;
use std::path::Path;

/// Supported bookmark file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportFormat {
    /// Netscape bookmark file, as exported by browsers
    Html,
    /// `{ "boards": [...] }` document
    Json,
}

impl ImportFormat {
    pub fn from_html_flag(is_html: bool) -> Self {
        if is_html {
            ImportFormat::Html
        } else {
            ImportFormat::Json
        }
    }

    /// `.html` and `.htm` files are HTML, anything else is read as JSON
    pub fn from_path(path: &Path) -> Self {
        let is_html = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html") || e.eq_ignore_ascii_case("htm"));
        Self::from_html_flag(is_html)
    }

    pub fn is_html(self) -> bool {
        self == ImportFormat::Html
    }
}

/// Parses bookmark files with a palette and color source for new categories
pub struct Importer {
    palette: Palette,
    colors: Box<dyn ColorSource>,
}

impl Default for Importer {
    fn default() -> Self {
        Self::new(Palette::default(), Box::new(RandomColors))
    }
}

impl Importer {
    pub fn new(palette: Palette, colors: Box<dyn ColorSource>) -> Self {
        Self { palette, colors }
    }

    /// Importer whose category colors repeat from run to run
    pub fn seeded(palette: Palette, seed: u64) -> Self {
        Self::new(palette, Box::new(SeededColors::new(seed)))
    }

    /// Parse `content` as the given format.
    ///
    /// Only JSON can fail; HTML degrades to fewer (possibly zero) boards.
    pub fn parse(&mut self, content: &str, format: ImportFormat) -> Result<ImportData> {
        match format {
            ImportFormat::Html => Ok(parse_netscape_bookmarks(
                content,
                &self.palette,
                self.colors.as_mut(),
            )),
            ImportFormat::Json => parse_json_bookmarks(content),
        }
    }

    /// Read a file and parse it in the format its extension implies
    pub fn import_file(&mut self, path: &Path) -> Result<ImportData> {
        let content = fs::read_to_string(path)?;
        let format = ImportFormat::from_path(path);
        let data = self.parse(&content, format)?;
        info!(
            "Imported {} board(s) from {} ({:?})",
            data.boards.len(),
            path.display(),
            format
        );
        Ok(data)
    }
}

/// Parse a bookmark file's text; `is_html` picks Netscape HTML over JSON
pub fn parse_bookmark_file(content: &str, is_html: bool) -> Result<ImportData> {
    Importer::default().parse(content, ImportFormat::from_html_flag(is_html))
}

/// [`parse_bookmark_file`] with an explicit palette and color source
pub fn parse_bookmark_file_with(
    content: &str,
    is_html: bool,
    palette: &Palette,
    colors: &mut dyn ColorSource,
) -> Result<ImportData> {
    if is_html {
        Ok(parse_netscape_bookmarks(content, palette, colors))
    } else {
        parse_json_bookmarks(content)
    }
}

/// Read and parse a bookmark file with random category colors
pub fn import_file(path: &Path) -> Result<ImportData> {
    Importer::default().import_file(path)
}
