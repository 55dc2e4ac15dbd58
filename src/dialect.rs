//! Dialect classification — map a file path to its pattern table.

use std::path::Path;

/// Structural-comment and declaration syntax family of a source file.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    Php,
    Js,
    Markdown,
    #[default]
    Default,
}

impl Dialect {
    /// Classify a path by extension. Total: unknown extensions map to
    /// `Default`. Matches are case-sensitive.
    pub fn from_path(path: &Path) -> Dialect {
        match path.extension().and_then(|e| e.to_str()) {
            Some("php") => Dialect::Php,
            Some("js" | "jsx" | "ts" | "tsx") => Dialect::Js,
            Some("md" | "mdx") => Dialect::Markdown,
            _ => Dialect::Default,
        }
    }

    /// Parse a dialect name as given on the command line.
    pub fn from_name(name: &str) -> Option<Dialect> {
        match name {
            "php" => Some(Dialect::Php),
            "js" => Some(Dialect::Js),
            "markdown" | "md" => Some(Dialect::Markdown),
            "default" => Some(Dialect::Default),
            _ => None,
        }
    }
}
