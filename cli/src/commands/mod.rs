use crate::format::OutputFormat;
use linkboard::config::Config;
use linkboard::error::Result;

pub struct AppContext<'a> {
    pub config: &'a Config,
    pub format: OutputFormat,
    pub no_color: bool,
}

pub mod import_export;
pub mod search;

pub trait LinkboardCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()>;
}

/// Enum-based dispatch for commands (avoids Box<dyn LinkboardCommand>)
pub enum CommandEnum {
    Import(import_export::ImportCommand),
    Stats(import_export::StatsCommand),
    Plan(import_export::PlanCommand),
    Export(import_export::ExportCommand),
    Search(search::SearchCommand),
}

impl CommandEnum {
    pub fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            Self::Import(cmd) => cmd.execute(ctx),
            Self::Stats(cmd) => cmd.execute(ctx),
            Self::Plan(cmd) => cmd.execute(ctx),
            Self::Export(cmd) => cmd.execute(ctx),
            Self::Search(cmd) => cmd.execute(ctx),
        }
    }
}
