use crate::format::traits::SerializedFormat;
use linkboard::error::Result;
use serde::Serialize;

/// TOML needs a table at the top level, so only structs render
pub struct TomlOutput<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> SerializedFormat for TomlOutput<'_, T> {
    fn render(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self.0)?)
    }
}
