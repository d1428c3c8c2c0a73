use crate::format::traits::SerializedFormat;
use linkboard::error::Result;
use serde::Serialize;

pub struct JsonOutput<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> SerializedFormat for JsonOutput<'_, T> {
    fn render(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self.0)?)
    }
}
