/// Split a Netscape `TAGS` attribute into tags, dropping empty entries
pub fn parse_tags(tags_attr: &str) -> Vec<String> {
    tags_attr
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join tags back into a `TAGS` attribute value
pub fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}
