use crate::format::traits::SerializedFormat;
use linkboard::error::Result;
use serde::Serialize;

pub struct YamlOutput<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> SerializedFormat for YamlOutput<'_, T> {
    fn render(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self.0)?)
    }
}
