use linkboard::error::Result;

/// A value rendered in one serialization format
pub trait SerializedFormat {
    fn render(&self) -> Result<String>;
}
