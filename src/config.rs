//! Static configuration consumed by the extractor and the file walker.
//!
//! Built once at startup and passed explicitly; the core never reads
//! ambient state.

/// Allow/deny lists for files, directories, and member names.
#[derive(Debug, Clone)]
pub struct Config {
    /// File extensions eligible for extraction.
    pub allowed_extensions: Vec<String>,
    /// Name fragments that disqualify a file (e.g. snapshot/test files).
    pub excluded_extensions: Vec<String>,
    /// Directory names never descended into.
    pub excluded_directories: Vec<String>,
    /// File names never processed.
    pub excluded_files: Vec<String>,
    /// Member names excluded from extraction (substring match).
    pub excluded_members: Vec<String>,
}

impl Default for Config {
    fn default() -> Config {
        let list = |items: &[&str]| items.iter().map(|s| s.to_string()).collect();
        Config {
            allowed_extensions: list(&[".js", ".jsx", ".ts", ".tsx", ".php", ".md", ".mdx"]),
            excluded_extensions: list(&[".snap", ".test"]),
            excluded_directories: list(&[
                "node_modules",
                "bin",
                "tests",
                "test",
                "build",
                "template-parts",
            ]),
            excluded_files: list(&["attributes.js"]),
            excluded_members: list(&["__construct", "_setup_hooks", "init"]),
        }
    }
}

impl Config {
    /// Whether a member name is denylisted.
    pub fn excludes_member(&self, name: &str) -> bool {
        self.excluded_members.iter().any(|m| name.contains(m.as_str()))
    }

    /// Whether a file should be skipped entirely, by extension allowlist
    /// and name-fragment denylist.
    pub fn excludes_file(&self, file_name: &str) -> bool {
        let allowed = self
            .allowed_extensions
            .iter()
            .any(|ext| file_name.ends_with(ext.as_str()));
        let denied = self
            .excluded_extensions
            .iter()
            .chain(self.excluded_files.iter())
            .any(|frag| file_name.contains(frag.as_str()));
        !allowed || denied
    }

    /// Whether a directory name should be skipped while walking.
    pub fn excludes_directory(&self, dir_name: &str) -> bool {
        dir_name.starts_with('.')
            || self.excluded_directories.iter().any(|d| d == dir_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_denylist_matches_substring() {
        let config = Config::default();
        assert!(config.excludes_member("__construct"));
        assert!(config.excludes_member("init"));
        assert!(!config.excludes_member("register_hooks"));
    }

    #[test]
    fn file_allowlist_and_denylist() {
        let config = Config::default();
        assert!(!config.excludes_file("Theme.php"));
        assert!(!config.excludes_file("index.jsx"));
        assert!(config.excludes_file("index.test.js"));
        assert!(config.excludes_file("header.snap"));
        assert!(config.excludes_file("attributes.js"));
        assert!(config.excludes_file("main.c"));
    }

    #[test]
    fn directory_exclusions() {
        let config = Config::default();
        assert!(config.excludes_directory("node_modules"));
        assert!(config.excludes_directory(".git"));
        assert!(!config.excludes_directory("inc"));
    }
}
