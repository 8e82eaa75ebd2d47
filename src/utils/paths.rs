use std::path::{Path, PathBuf};

pub fn expand_tilde<P: AsRef<Path>>(path: P) -> PathBuf {
    let p = path.as_ref();
    if let Some(stripped) = p.strip_prefix("~").ok() {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(stripped);
        }
    }
    p.to_path_buf()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_plain_paths_alone() {
        assert_eq!(
            expand_tilde("/etc/yb-usage/config.toml"),
            PathBuf::from("/etc/yb-usage/config.toml")
        );
        assert_eq!(expand_tilde("relative/file"), PathBuf::from("relative/file"));
    }

    #[test]
    fn expands_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~/.yb-usage"), home.join(".yb-usage"));
        }
    }
}
