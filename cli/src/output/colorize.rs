use linkboard::models::{ImportedBookmark, SearchResult, SearchResultKind};
use linkboard::plan::ImportPlan;
use linkboard::ImportData;
use owo_colors::OwoColorize;
use std::fmt::Write;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;

    fn render(&self, no_color: bool) -> String {
        if no_color {
            self.to_plain()
        } else {
            self.to_colored()
        }
    }
}

/// `#RGB` or `#RRGGBB` into its components
fn hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    // Byte slicing below needs ASCII
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match digits.len() {
        6 => Some((
            channel(&digits[0..2])?,
            channel(&digits[2..4])?,
            channel(&digits[4..6])?,
        )),
        3 => {
            let (r, g, b) = (
                channel(&digits[0..1])?,
                channel(&digits[1..2])?,
                channel(&digits[2..3])?,
            );
            Some((r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

fn swatch(color: Option<&str>) -> String {
    match color.and_then(hex_rgb) {
        Some((r, g, b)) => "■".truecolor(r, g, b).to_string(),
        None => "□".dimmed().to_string(),
    }
}

fn bookmark_lines(out: &mut String, bookmark: &ImportedBookmark, colored: bool) {
    let indent = "    ";
    if colored {
        let _ = writeln!(out, "{}{}", indent, bookmark.title.bold().green());
        let _ = writeln!(out, "{}  {} {}", indent, ">".red(), bookmark.url.yellow());
    } else {
        let _ = writeln!(out, "{}{}", indent, bookmark.title);
        let _ = writeln!(out, "{}  > {}", indent, bookmark.url);
    }
    if let Some(description) = bookmark
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        let marker = if colored { "+".red().to_string() } else { "+".into() };
        let _ = writeln!(out, "{}  {} {}", indent, marker, description);
    }
    if let Some(tags) = bookmark.tags.as_deref().filter(|t| !t.is_empty()) {
        let tags = tags.join(", ");
        if colored {
            let _ = writeln!(out, "{}  {} {}", indent, "#".red(), tags.blue());
        } else {
            let _ = writeln!(out, "{}  # {}", indent, tags);
        }
    }
}

/// Board/category/bookmark tree of a parsed file
pub struct ColorizeImport<'a>(pub &'a ImportData);

impl ColorizeImport<'_> {
    fn render_tree(&self, colored: bool) -> String {
        let mut s = String::new();
        for board in &self.0.boards {
            if colored {
                let _ = writeln!(s, "{}", board.name.bold().bright_blue());
            } else {
                let _ = writeln!(s, "{}", board.name);
            }
            for category in &board.categories {
                if colored {
                    let _ = writeln!(
                        s,
                        "  {} {} ({})",
                        swatch(category.color.as_deref()),
                        category.name.bold(),
                        category.bookmarks.len().dimmed()
                    );
                } else {
                    let _ = writeln!(
                        s,
                        "  {} [{}] ({})",
                        category.name,
                        category.color.as_deref().unwrap_or("-"),
                        category.bookmarks.len()
                    );
                }
                for bookmark in &category.bookmarks {
                    bookmark_lines(&mut s, bookmark, colored);
                }
            }
        }
        s
    }
}

impl Colorize for ColorizeImport<'_> {
    fn to_colored(&self) -> String {
        self.render_tree(true)
    }

    fn to_plain(&self) -> String {
        self.render_tree(false)
    }
}

/// Records an import would create, with their sort order
pub struct ColorizePlan<'a>(pub &'a ImportPlan);

impl ColorizePlan<'_> {
    fn render_plan(&self, colored: bool) -> String {
        let mut s = String::new();
        for board in &self.0.boards {
            let order = format!("[{}]", board.sort_order);
            if colored {
                let _ = writeln!(s, "{} {}", order.bright_blue(), board.name.bold());
            } else {
                let _ = writeln!(s, "{} {}", order, board.name);
            }
            for category in &board.categories {
                let order = format!("[{}]", category.sort_order);
                if colored {
                    let _ = writeln!(
                        s,
                        "  {} {} {} {}",
                        order.bright_blue(),
                        swatch(Some(&category.color)),
                        category.name.bold(),
                        category.icon.dimmed()
                    );
                } else {
                    let _ = writeln!(
                        s,
                        "  {} {} {} {}",
                        order, category.name, category.color, category.icon
                    );
                }
                for bookmark in &category.bookmarks {
                    let order = format!("[{}]", bookmark.sort_order);
                    if colored {
                        let _ = writeln!(
                            s,
                            "    {} {} {}",
                            order.bright_blue(),
                            bookmark.title.green(),
                            bookmark.url.yellow()
                        );
                    } else {
                        let _ = writeln!(s, "    {} {} {}", order, bookmark.title, bookmark.url);
                    }
                }
            }
        }
        s
    }
}

impl Colorize for ColorizePlan<'_> {
    fn to_colored(&self) -> String {
        self.render_plan(true)
    }

    fn to_plain(&self) -> String {
        self.render_plan(false)
    }
}

pub struct ColorizeResults<'a>(pub &'a [SearchResult]);

impl ColorizeResults<'_> {
    fn location(result: &SearchResult) -> String {
        [result.board_name.as_deref(), result.category_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" / ")
    }

    fn render_results(&self, colored: bool) -> String {
        let mut s = String::new();
        for (i, result) in self.0.iter().enumerate() {
            let index = (i + 1).to_string();
            let label = format!("[{}]", result.kind.label());
            if colored {
                let name = match result.kind {
                    SearchResultKind::Bookmark => result.name.green().bold().to_string(),
                    _ => result.name.bright_blue().bold().to_string(),
                };
                let _ = writeln!(s, "{}. {} {}", index.bright_blue(), name, label.dimmed());
            } else {
                let _ = writeln!(s, "{}. {} {}", index, result.name, label);
            }

            let padding = index.len() + 3;
            if let Some(url) = &result.url {
                if colored {
                    let _ = writeln!(s, "{:>padding$} {}", ">".red(), url.yellow());
                } else {
                    let _ = writeln!(s, "{:>padding$} {}", ">", url);
                }
            }
            let location = Self::location(result);
            if !location.is_empty() {
                if colored {
                    let _ = writeln!(s, "{:>padding$} {}", "@".red(), location.cyan());
                } else {
                    let _ = writeln!(s, "{:>padding$} {}", "@", location);
                }
            }
        }
        s
    }
}

impl Colorize for ColorizeResults<'_> {
    fn to_colored(&self) -> String {
        self.render_results(true)
    }

    fn to_plain(&self) -> String {
        self.render_results(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkboard::models::{ImportedBoard, ImportedCategory};
    use rstest::rstest;

    fn sample() -> ImportData {
        ImportData {
            boards: vec![ImportedBoard {
                name: "Work".to_string(),
                categories: vec![ImportedCategory {
                    name: "Dev".to_string(),
                    color: Some("#34D399".to_string()),
                    icon: Some("folder".to_string()),
                    bookmarks: vec![ImportedBookmark {
                        url: "https://github.com".to_string(),
                        title: "GitHub".to_string(),
                        description: Some("Code hosting".to_string()),
                        tags: Some(vec!["git".to_string(), "code".to_string()]),
                    }],
                }],
            }],
        }
    }

    #[rstest]
    #[case("#34D399", Some((0x34, 0xD3, 0x99)))]
    #[case("#fff", Some((255, 255, 255)))]
    #[case("34D399", None)]
    #[case("#12345", None)]
    #[case("#GGGGGG", None)]
    #[case("#aéabc", None)]
    #[case("#éa", None)]
    fn test_hex_rgb(#[case] input: &str, #[case] expected: Option<(u8, u8, u8)>) {
        assert_eq!(hex_rgb(input), expected);
    }

    #[test]
    fn test_import_tree_plain() {
        let data = sample();
        let plain = ColorizeImport(&data).render(true);
        let lines: Vec<&str> = plain.lines().collect();
        assert_eq!(lines[0], "Work");
        assert_eq!(lines[1], "  Dev [#34D399] (1)");
        assert_eq!(lines[2], "    GitHub");
        assert_eq!(lines[3], "      > https://github.com");
        assert_eq!(lines[4], "      + Code hosting");
        assert!(lines[5].ends_with("# git, code"));
    }

    #[test]
    fn test_import_tree_colored_keeps_text() {
        let data = sample();
        let colored = ColorizeImport(&data).render(false);
        assert!(colored.contains("GitHub"));
        assert!(colored.contains("https://github.com"));
        assert!(colored.contains("\u{1b}["));
    }

    #[test]
    fn test_import_tree_with_non_hex_json_color() {
        let data = linkboard::parse_bookmark_file(
            r##"{"boards":[{"name":"B","categories":[{"name":"C","color":"#aéabc","bookmarks":[{"url":"https://a.com"}]}]}]}"##,
            false,
        )
        .unwrap();

        let colored = ColorizeImport(&data).render(false);
        assert!(colored.contains("□"));
        let plain = ColorizeImport(&data).render(true);
        assert!(plain.contains("  C [#aéabc] (1)"));

        let plan = ImportPlan::build(&data, 0);
        assert!(ColorizePlan(&plan).render(false).contains("https://a.com"));
    }

    #[test]
    fn test_plan_shows_sort_orders() {
        let data = sample();
        let plan = ImportPlan::build(&data, 4);
        let plain = ColorizePlan(&plan).to_plain();
        assert!(plain.starts_with("[4] Work\n"));
        assert!(plain.contains("  [0] Dev #34D399 folder"));
        assert!(plain.contains("    [0] GitHub https://github.com"));
    }

    #[test]
    fn test_results_show_location() {
        let results = linkboard::search::search(&sample(), "git");
        let plain = ColorizeResults(&results).to_plain();
        assert!(plain.starts_with("1. GitHub [bookmark]\n"));
        assert!(plain.contains("> https://github.com"));
        assert!(plain.contains("@ Work / Dev"));
    }
}
