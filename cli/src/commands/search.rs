use super::import_export::load_source;
use super::{AppContext, LinkboardCommand};
use crate::cli::SourceArgs;
use crate::format::OutputFormat;
use crate::output::colorize::{Colorize, ColorizeResults};
use linkboard::error::Result;
use linkboard::models::SearchResult;
use linkboard::search::search;
use serde::Serialize;

/// Wrapper so formats without top-level arrays (TOML) can print results
#[derive(Serialize)]
struct SearchOutput<'a> {
    query: &'a str,
    results: &'a [SearchResult],
}

pub struct SearchCommand {
    pub source: SourceArgs,
    pub query: String,
}

impl LinkboardCommand for SearchCommand {
    fn execute(&self, ctx: &AppContext) -> Result<()> {
        let data = load_source(ctx, &self.source)?;
        let results = search(&data, &self.query);

        match ctx.format {
            OutputFormat::Colored => {
                if results.is_empty() {
                    eprintln!("No matches for '{}'", self.query);
                } else {
                    print!("{}", ColorizeResults(&results).render(ctx.no_color));
                }
            }
            format => println!(
                "{}",
                format.serialize(&SearchOutput {
                    query: &self.query,
                    results: &results,
                })?
            ),
        }
        Ok(())
    }
}
