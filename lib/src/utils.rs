use std::path::PathBuf;

/// Directory holding `config.yml`
pub fn get_config_dir() -> PathBuf {
    config_dir_from(|key| std::env::var(key).ok())
}

/// Resolve the config directory from environment lookups, first hit wins:
/// `LINKBOARD_CONFIG_DIR`, `XDG_CONFIG_HOME/linkboard`, `HOME/.config/linkboard`,
/// then `APPDATA/linkboard` on Windows, else the working directory.
pub(crate) fn config_dir_from<F>(var: F) -> PathBuf
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = var("LINKBOARD_CONFIG_DIR") {
        return PathBuf::from(path);
    }

    if let Some(path) = var("XDG_CONFIG_HOME") {
        return PathBuf::from(path).join("linkboard");
    }

    if let Some(home) = var("HOME") {
        return PathBuf::from(home).join(".config/linkboard");
    }

    #[cfg(target_os = "windows")]
    if let Some(appdata) = var("APPDATA") {
        return PathBuf::from(appdata).join("linkboard");
    }

    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}
