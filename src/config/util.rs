//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Find config file by searching upward from current directory
///
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/blog/  ← cwd
/// /home/user/site/vellum.toml    ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_from(&cwd, config_name)
}

/// Upward search starting at `start`.
fn find_config_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    start
        .ancestors()
        .map(|dir| dir.join(config_name))
        .find(|candidate| candidate.is_file())
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_finds_config_in_parent() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("content/blog");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("vellum.toml"), "").unwrap();

        let found = find_config_from(&nested, Path::new("vellum.toml"));
        assert_eq!(found, Some(tmp.path().join("vellum.toml")));
    }

    #[test]
    fn test_missing_config() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_from(tmp.path(), Path::new("no-such-vellum.toml")), None);
    }

    #[test]
    fn test_absolute_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("site.toml");
        assert_eq!(find_config_from(Path::new("/"), &path), None);
        fs::write(&path, "").unwrap();
        assert_eq!(find_config_from(Path::new("/"), &path), Some(path));
    }
}
