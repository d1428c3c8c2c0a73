use crate::error::{LinkboardError, Result};
use crate::models::ImportData;
use crate::tags::format_tags;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Title used for exported Netscape files when none is configured
pub const DEFAULT_EXPORT_TITLE: &str = "Bookmarks";

/// Trait for writing an import tree in different formats
pub trait BookmarkExporter {
    fn export(&self, data: &ImportData, out: &mut dyn Write) -> Result<()>;
}

/// HTML/Netscape Bookmark File exporter
///
/// Boards become top-level folders and categories nested folders, so the
/// output imports back into the same hierarchy.
pub struct HtmlExporter {
    pub title: String,
    /// Seconds since the epoch, written as ADD_DATE/LAST_MODIFIED
    pub timestamp: i64,
}

impl BookmarkExporter for HtmlExporter {
    fn export(&self, data: &ImportData, out: &mut dyn Write) -> Result<()> {
        let now = self.timestamp;
        let title = escape_html(&self.title);

        writeln!(out, "<!DOCTYPE NETSCAPE-Bookmark-file-1>")?;
        writeln!(out, "<!-- This is an automatically generated file.")?;
        writeln!(out, "     It will be read and overwritten.")?;
        writeln!(out, "     DO NOT EDIT! -->")?;
        writeln!(
            out,
            "<META HTTP-EQUIV=\"Content-Type\" CONTENT=\"text/html; charset=UTF-8\">"
        )?;
        writeln!(out, "<TITLE>{}</TITLE>", title)?;
        writeln!(out, "<H1>{}</H1>", title)?;
        writeln!(out)?;
        writeln!(out, "<DL><p>")?;

        for board in &data.boards {
            writeln!(
                out,
                "    <DT><H3 ADD_DATE=\"{now}\" LAST_MODIFIED=\"{now}\">{}</H3>",
                escape_html(&board.name)
            )?;
            writeln!(out, "    <DL><p>")?;

            for category in &board.categories {
                writeln!(
                    out,
                    "        <DT><H3 ADD_DATE=\"{now}\" LAST_MODIFIED=\"{now}\">{}</H3>",
                    escape_html(&category.name)
                )?;
                writeln!(out, "        <DL><p>")?;

                for bookmark in &category.bookmarks {
                    let tags = bookmark
                        .tags
                        .as_deref()
                        .map(format_tags)
                        .filter(|t| !t.is_empty())
                        .map(|t| format!(" TAGS=\"{}\"", escape_html(&t)))
                        .unwrap_or_default();
                    writeln!(
                        out,
                        "            <DT><A HREF=\"{}\" ADD_DATE=\"{now}\"{}>{}</A>",
                        escape_html(&bookmark.url),
                        tags,
                        escape_html(&bookmark.title)
                    )?;
                    if let Some(desc) = bookmark.description.as_deref().filter(|d| !d.is_empty()) {
                        writeln!(out, "            <DD>{}", escape_html(desc))?;
                    }
                }

                writeln!(out, "        </DL><p>")?;
            }

            writeln!(out, "    </DL><p>")?;
        }

        writeln!(out, "</DL><p>")?;
        Ok(())
    }
}

/// Pretty-printed JSON in the format the JSON importer reads
pub struct JsonExporter;

impl BookmarkExporter for JsonExporter {
    fn export(&self, data: &ImportData, out: &mut dyn Write) -> Result<()> {
        serde_json::to_writer_pretty(&mut *out, data)?;
        writeln!(out)?;
        Ok(())
    }
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render a Netscape bookmark file into a string
pub fn export_html(data: &ImportData, title: &str, timestamp: i64) -> Result<String> {
    let exporter = HtmlExporter {
        title: title.to_string(),
        timestamp,
    };
    render(&exporter, data)
}

/// Render the JSON import format into a string
pub fn export_json(data: &ImportData) -> Result<String> {
    render(&JsonExporter, data)
}

fn render(exporter: &dyn BookmarkExporter, data: &ImportData) -> Result<String> {
    let mut buf = Vec::new();
    exporter.export(data, &mut buf)?;
    String::from_utf8(buf).map_err(|e| LinkboardError::Export(e.to_string()))
}

/// Export to a file, choosing the format from its extension
pub fn export_to_path(data: &ImportData, path: &Path, title: &str, timestamp: i64) -> Result<()> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let exporter: Box<dyn BookmarkExporter> = match extension.as_str() {
        "html" | "htm" => Box::new(HtmlExporter {
            title: title.to_string(),
            timestamp,
        }),
        "json" => Box::new(JsonExporter),
        _ => {
            return Err(LinkboardError::Export(format!(
                "Unsupported export format: {}",
                extension
            )))
        }
    };

    let mut out = BufWriter::new(File::create(path)?);
    exporter.export(data, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import_export::json::parse_json_bookmarks;
    use crate::import_export::netscape::parse_netscape_bookmarks;
    use crate::models::{ImportedBoard, ImportedBookmark, ImportedCategory};
    use crate::palette::{FixedColor, Palette};
    use rstest::rstest;
    use tempfile::tempdir;

    fn sample() -> ImportData {
        let mut described = ImportedBookmark::new("https://example.com/?a=1&b=2", "Q&A <forum>");
        described.description = Some("Talk about \"things\"".to_string());
        described.tags = Some(vec!["talk".to_string(), "qa".to_string()]);

        let mut dev = ImportedCategory::bucket("Dev");
        dev.bookmarks = vec![
            ImportedBookmark::new("https://www.rust-lang.org", "Rust"),
            described,
        ];
        let mut misc = ImportedCategory::bucket("Misc");
        misc.bookmarks = vec![ImportedBookmark::new("https://example.org", "Example")];

        ImportData {
            boards: vec![
                ImportedBoard {
                    name: "Work & Play".to_string(),
                    categories: vec![dev],
                },
                ImportedBoard {
                    name: "Other".to_string(),
                    categories: vec![misc],
                },
            ],
        }
    }

    fn shape(data: &ImportData) -> Vec<(String, String, String, String)> {
        data.bookmarks()
            .map(|(b, c, bm)| (b.name.clone(), c.name.clone(), bm.url.clone(), bm.title.clone()))
            .collect()
    }

    #[rstest]
    #[case("plain", "plain")]
    #[case("a & b", "a &amp; b")]
    #[case("<b>", "&lt;b&gt;")]
    #[case("say \"hi\"", "say &quot;hi&quot;")]
    #[case("&lt;", "&amp;lt;")]
    fn test_escape_html(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(escape_html(input), expected);
    }

    #[test]
    fn test_html_layout() {
        let html = export_html(&sample(), "My Links", 1700000000).unwrap();
        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>\n"));
        assert!(html.contains("<TITLE>My Links</TITLE>"));
        assert!(html.contains("<H1>My Links</H1>"));
        assert!(html.contains(
            "    <DT><H3 ADD_DATE=\"1700000000\" LAST_MODIFIED=\"1700000000\">Work &amp; Play</H3>"
        ));
        assert!(html.contains(
            "            <DT><A HREF=\"https://www.rust-lang.org\" ADD_DATE=\"1700000000\">Rust</A>"
        ));
        assert!(html.contains("TAGS=\"talk,qa\""));
        assert!(html.contains("<DD>Talk about &quot;things&quot;"));
        assert!(html.trim_end().ends_with("</DL><p>"));
    }

    #[test]
    fn test_html_reimports_to_same_tree() {
        let original = sample();
        let html = export_html(&original, DEFAULT_EXPORT_TITLE, 0).unwrap();
        let reimported =
            parse_netscape_bookmarks(&html, &Palette::default(), &mut FixedColor::default());

        assert_eq!(shape(&reimported), shape(&original));

        let (_, _, described) = reimported.bookmarks().nth(1).unwrap();
        assert_eq!(described.description.as_deref(), Some("Talk about \"things\""));
        assert_eq!(
            described.tags,
            Some(vec!["talk".to_string(), "qa".to_string()])
        );
    }

    #[test]
    fn test_json_reimports_to_same_tree() {
        let original = sample();
        let json = export_json(&original).unwrap();
        let reimported = parse_json_bookmarks(&json).unwrap();
        assert_eq!(shape(&reimported), shape(&original));
    }

    #[test]
    fn test_export_to_path_picks_format_from_extension() {
        let dir = tempdir().unwrap();
        let data = sample();

        let html_path = dir.path().join("out.HTML");
        export_to_path(&data, &html_path, "T", 1).unwrap();
        let html = std::fs::read_to_string(&html_path).unwrap();
        assert!(html.starts_with("<!DOCTYPE NETSCAPE-Bookmark-file-1>"));

        let json_path = dir.path().join("out.json");
        export_to_path(&data, &json_path, "T", 1).unwrap();
        let json = std::fs::read_to_string(&json_path).unwrap();
        assert_eq!(parse_json_bookmarks(&json).unwrap().boards.len(), 2);
    }

    #[test]
    fn test_export_to_path_rejects_unknown_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.org");
        let err = export_to_path(&sample(), &path, "T", 1).unwrap_err();
        assert!(matches!(err, LinkboardError::Export(_)));
        assert!(!path.exists());
    }
}
