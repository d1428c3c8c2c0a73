use crate::format::{
    json::JsonOutput, toml::TomlOutput, traits::SerializedFormat, yaml::YamlOutput,
};
use linkboard::error::Result;
use serde::Serialize;

pub mod json;
pub mod toml;
pub mod traits;
pub mod yaml;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Yaml,
    Toml,
    Colored,
}

impl OutputFormat {
    pub fn from_string(format: &str) -> Self {
        match format {
            "json" => OutputFormat::Json,
            "yaml" | "yml" => OutputFormat::Yaml,
            "toml" => OutputFormat::Toml,
            _ => OutputFormat::Colored,
        }
    }

    /// Serialize `value`; the colored format has no serialized form and uses JSON
    pub fn serialize<T: Serialize + ?Sized>(self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json | OutputFormat::Colored => JsonOutput(value).render(),
            OutputFormat::Yaml => YamlOutput(value).render(),
            OutputFormat::Toml => TomlOutput(value).render(),
        }
    }
}
