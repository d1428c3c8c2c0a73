use super::{AppContext, LinkboardCommand};
use crate::cli::SourceArgs;
use crate::format::OutputFormat;
use crate::output::colorize::{Colorize, ColorizeImport, ColorizePlan};
use linkboard::error::Result;
use linkboard::import_export::export_to_path;
use linkboard::plan::ImportPlan;
use linkboard::stats::ImportStats;
use linkboard::ImportData;
use log::debug;
use std::fs;
use std::path::PathBuf;

/// Read and parse the source file with the configured palette and seed
pub fn load_source(ctx: &AppContext, source: &SourceArgs) -> Result<ImportData> {
    let format = source.format();
    debug!("Reading {} as {:?}", source.file.display(), format);
    let content = fs::read_to_string(&source.file)?;
    let mut importer = ctx.config.importer(source.seed)?;
    importer.parse(&content, format)
}

pub struct ImportCommand {
    pub source: SourceArgs,
}

impl LinkboardCommand for ImportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let data = load_source(ctx, &self.source)?;
        match ctx.format {
            OutputFormat::Colored => print!("{}", ColorizeImport(&data).render(ctx.no_color)),
            format => println!("{}", format.serialize(&data)?),
        }
        eprintln!(
            "✓ Parsed {} from {}",
            ImportStats::of(&data),
            self.source.file.display()
        );
        Ok(())
    }
}

pub struct StatsCommand {
    pub source: SourceArgs,
}

impl LinkboardCommand for StatsCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let stats = ImportStats::of(&load_source(ctx, &self.source)?);
        match ctx.format {
            OutputFormat::Colored => println!("{}", stats),
            format => println!("{}", format.serialize(&stats)?),
        }
        Ok(())
    }
}

pub struct PlanCommand {
    pub source: SourceArgs,
    pub first_order: Option<i64>,
}

impl LinkboardCommand for PlanCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let data = load_source(ctx, &self.source)?;
        let first_order = self.first_order.unwrap_or(ctx.config.first_board_order);
        let plan = ImportPlan::build(&data, first_order);
        match ctx.format {
            OutputFormat::Colored => print!("{}", ColorizePlan(&plan).render(ctx.no_color)),
            format => println!("{}", format.serialize(&plan)?),
        }
        eprintln!("{} record(s) to create", plan.record_count());
        Ok(())
    }
}

pub struct ExportCommand {
    pub source: SourceArgs,
    pub output: PathBuf,
    pub title: Option<String>,
}

impl LinkboardCommand for ExportCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let data = load_source(ctx, &self.source)?;
        let title = self
            .title
            .as_deref()
            .unwrap_or(ctx.config.export_title.as_str());
        export_to_path(&data, &self.output, title, chrono::Utc::now().timestamp())?;
        eprintln!(
            "Exported {} to {}",
            ImportStats::of(&data),
            self.output.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkboard::config::Config;
    use linkboard::LinkboardError;
    use tempfile::tempdir;

    const HTML: &str = "<DL><p><DT><H3>Board</H3><DL><p><DT><H3>Cat</H3><DL><p><DT><A HREF=\"https://a.com\">A</A></DL><p></DL><p></DL><p>";

    fn source(file: PathBuf) -> SourceArgs {
        SourceArgs {
            file,
            html: false,
            json: false,
            seed: Some(1),
        }
    }

    fn ctx(config: &Config) -> AppContext<'_> {
        AppContext {
            config,
            format: OutputFormat::Json,
            no_color: true,
        }
    }

    #[test]
    fn test_load_source_detects_html() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.html");
        fs::write(&path, HTML).unwrap();

        let config = Config::default();
        let data = load_source(&ctx(&config), &source(path)).unwrap();
        assert_eq!(data.boards[0].categories[0].name, "Cat");
    }

    #[test]
    fn test_load_source_forced_json_fails_on_html() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("in.html");
        fs::write(&path, HTML).unwrap();

        let mut args = source(path);
        args.json = true;
        let config = Config::default();
        let err = load_source(&ctx(&config), &args).unwrap_err();
        assert!(matches!(err, LinkboardError::InvalidJson(_)));
    }

    #[test]
    fn test_export_command_writes_json() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.html");
        let output = dir.path().join("out.json");
        fs::write(&input, HTML).unwrap();

        let config = Config::default();
        let cmd = ExportCommand {
            source: source(input),
            output: output.clone(),
            title: None,
        };
        cmd.execute(&ctx(&config)).unwrap();

        let written = fs::read_to_string(&output).unwrap();
        let reparsed = linkboard::parse_bookmark_file(&written, false).unwrap();
        assert_eq!(reparsed.boards[0].name, "Board");
    }
}
