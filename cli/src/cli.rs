use crate::commands::import_export::{ExportCommand, ImportCommand, PlanCommand, StatsCommand};
use crate::commands::search::SearchCommand;
use crate::commands::{AppContext, CommandEnum};
use crate::format::OutputFormat;
use clap::{Args, Parser, Subcommand};
use linkboard::config::Config;
use linkboard::error::Result;
use linkboard::ImportFormat;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub fn get_exe_name() -> &'static str {
    static EXE_NAME: OnceLock<String> = OnceLock::new();
    EXE_NAME.get_or_init(|| {
        std::env::args()
            .next()
            .as_ref()
            .map(Path::new)
            .and_then(|path| path.file_name())
            .and_then(|name| name.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| "linkboard".to_string())
    })
}

#[derive(Parser)]
#[command(author, version, about, long_about = None, disable_version_flag = true)]
pub struct Cli {
    /// Show the program version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,

    /// Optional custom configuration file path
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true)]
    pub nc: bool,

    /// Show debug information
    #[arg(short = 'g', long = "debug", global = true)]
    pub debug: bool,

    /// Output format: json, yaml, toml (default: colored tree)
    #[arg(short = 'f', long, global = true)]
    pub format: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Bookmark file to read and how to read it
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Bookmark file (.html/.htm is read as Netscape HTML, anything else as JSON)
    pub file: PathBuf,

    /// Force Netscape HTML parsing
    #[arg(long, conflicts_with = "json")]
    pub html: bool,

    /// Force JSON parsing
    #[arg(long)]
    pub json: bool,

    /// Seed for category colors, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

impl SourceArgs {
    pub fn format(&self) -> ImportFormat {
        if self.html {
            ImportFormat::Html
        } else if self.json {
            ImportFormat::Json
        } else {
            ImportFormat::from_path(&self.file)
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a bookmark file and print its boards, categories and bookmarks
    Import {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Count boards, categories and bookmarks in a bookmark file
    Stats {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the records an import would create, with defaults and sort order
    Plan {
        #[command(flatten)]
        source: SourceArgs,

        /// sort_order of the first board (default from config)
        #[arg(long)]
        first_order: Option<i64>,
    },

    /// Convert a bookmark file to Netscape HTML or JSON (by output extension)
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// File to write (.html, .htm or .json)
        output: PathBuf,

        /// Title of the exported HTML document (default from config)
        #[arg(long)]
        title: Option<String>,
    },

    /// Search boards, categories and bookmarks in a bookmark file
    Search {
        #[command(flatten)]
        source: SourceArgs,

        /// Search keywords
        #[arg(required = true)]
        keywords: Vec<String>,
    },
}

impl Commands {
    fn into_command(self) -> CommandEnum {
        match self {
            Commands::Import { source } => CommandEnum::Import(ImportCommand { source }),
            Commands::Stats { source } => CommandEnum::Stats(StatsCommand { source }),
            Commands::Plan {
                source,
                first_order,
            } => CommandEnum::Plan(PlanCommand {
                source,
                first_order,
            }),
            Commands::Export {
                source,
                output,
                title,
            } => CommandEnum::Export(ExportCommand {
                source,
                output,
                title,
            }),
            Commands::Search { source, keywords } => CommandEnum::Search(SearchCommand {
                source,
                query: keywords.join(" "),
            }),
        }
    }
}

pub fn handle_args(cli: Cli, config: &Config) -> Result<()> {
    let Some(command) = cli.command else {
        eprintln!("Usage: {} <COMMAND> <FILE>", get_exe_name());
        eprintln!("Examples:");
        eprintln!("  {} import bookmarks.html", get_exe_name());
        eprintln!("  {} stats export.json", get_exe_name());
        eprintln!(
            "  {} export bookmarks.html boards.json",
            get_exe_name()
        );
        eprintln!("  {} search bookmarks.html rust", get_exe_name());
        return Err("No command specified".into());
    };

    let ctx = AppContext {
        config,
        format: cli
            .format
            .as_deref()
            .map(OutputFormat::from_string)
            .unwrap_or(OutputFormat::Colored),
        no_color: cli.nc,
    };

    command.into_command().execute(&ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_cli_no_args() {
        let cli = Cli::try_parse_from(["linkboard"]).unwrap();
        assert!(cli.command.is_none());
        assert!(!cli.version);
        assert!(!cli.nc);
    }

    #[test]
    fn test_version_flag() {
        let cli = Cli::try_parse_from(["linkboard", "-v"]).unwrap();
        assert!(cli.version);
    }

    #[rstest]
    #[case("import")]
    #[case("stats")]
    #[case("plan")]
    fn test_source_commands_require_file(#[case] cmd: &str) {
        assert!(Cli::try_parse_from(["linkboard", cmd]).is_err());
    }

    #[test]
    fn test_import_with_overrides() {
        let cli = Cli::try_parse_from([
            "linkboard",
            "import",
            "bookmarks.txt",
            "--html",
            "--seed",
            "7",
            "-f",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.format.as_deref(), Some("json"));
        match cli.command {
            Some(Commands::Import { source }) => {
                assert_eq!(source.file, PathBuf::from("bookmarks.txt"));
                assert_eq!(source.format(), ImportFormat::Html);
                assert_eq!(source.seed, Some(7));
            }
            _ => panic!("Expected Import command"),
        }
    }

    #[test]
    fn test_html_and_json_conflict() {
        let result = Cli::try_parse_from(["linkboard", "import", "x", "--html", "--json"]);
        assert!(result.is_err());
    }

    #[rstest]
    #[case("bookmarks.html", ImportFormat::Html)]
    #[case("bookmarks.json", ImportFormat::Json)]
    fn test_format_from_extension(#[case] file: &str, #[case] expected: ImportFormat) {
        let cli = Cli::try_parse_from(["linkboard", "stats", file]).unwrap();
        match cli.command {
            Some(Commands::Stats { source }) => assert_eq!(source.format(), expected),
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_export_args() {
        let cli = Cli::try_parse_from([
            "linkboard",
            "export",
            "in.html",
            "out.json",
            "--title",
            "Mine",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Export {
                source,
                output,
                title,
            }) => {
                assert_eq!(source.file, PathBuf::from("in.html"));
                assert_eq!(output, PathBuf::from("out.json"));
                assert_eq!(title.as_deref(), Some("Mine"));
            }
            _ => panic!("Expected Export command"),
        }
    }

    #[test]
    fn test_plan_first_order() {
        let cli =
            Cli::try_parse_from(["linkboard", "plan", "in.json", "--first-order", "3"]).unwrap();
        match cli.command {
            Some(Commands::Plan { first_order, .. }) => assert_eq!(first_order, Some(3)),
            _ => panic!("Expected Plan command"),
        }
    }

    #[test]
    fn test_search_joins_keywords() {
        let cli =
            Cli::try_parse_from(["linkboard", "search", "in.html", "rust", "docs"]).unwrap();
        let command = cli.command.unwrap().into_command();
        match command {
            CommandEnum::Search(cmd) => assert_eq!(cmd.query, "rust docs"),
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_requires_keywords() {
        assert!(Cli::try_parse_from(["linkboard", "search", "in.html"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["linkboard", "stats", "in.html", "--nc", "-g"]).unwrap();
        assert!(cli.nc);
        assert!(cli.debug);
    }
}
