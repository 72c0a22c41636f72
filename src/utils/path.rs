use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(p: &str) -> PathBuf {
    if p == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }

    if let Some(rest) = p.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    Path::new(p).to_path_buf()
}
