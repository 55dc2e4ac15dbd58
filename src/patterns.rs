//! Per-dialect structural pattern registry.
//!
//! Each dialect owns a sparse table of named patterns; any key a dialect
//! does not define falls back to the default table, which defines every
//! key, so lookups are total. Patterns are compiled once and shared;
//! lookups are pure projections over the table.

use crate::dialect::Dialect;
use regex::Regex;
use std::sync::LazyLock;

/// Named structural patterns a dialect can define.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKey {
    /// Docblock plus the trailing declaration it documents.
    CommentBlock,
    /// class/trait/interface header with optional extends/implements.
    ClassDecl,
    /// Hook invocation with its immediately preceding comment block.
    Filter,
    /// Description sentence inside a comment block.
    DocBlock,
    /// One `@param` line.
    Param,
    /// One `@return`/`@returns` line.
    Return,
    /// One `@see` URL.
    See,
}

/// Sparse per-dialect overrides.
#[derive(Debug, Default)]
pub struct PatternSet {
    pub comment_block: Option<Regex>,
    pub class_decl: Option<Regex>,
    pub filter: Option<Regex>,
    pub doc_block: Option<Regex>,
    pub param: Option<Regex>,
    pub ret: Option<Regex>,
    pub see: Option<Regex>,
}

impl PatternSet {
    fn get(&self, key: PatternKey) -> Option<&Regex> {
        match key {
            PatternKey::CommentBlock => self.comment_block.as_ref(),
            PatternKey::ClassDecl => self.class_decl.as_ref(),
            PatternKey::Filter => self.filter.as_ref(),
            PatternKey::DocBlock => self.doc_block.as_ref(),
            PatternKey::Param => self.param.as_ref(),
            PatternKey::Return => self.ret.as_ref(),
            PatternKey::See => self.see.as_ref(),
        }
    }
}

/// The fallback table. Every key is present, which is what makes
/// `PatternRegistry::lookup` total.
#[derive(Debug)]
pub struct DefaultPatterns {
    pub comment_block: Regex,
    pub class_decl: Regex,
    pub filter: Regex,
    pub doc_block: Regex,
    pub param: Regex,
    pub ret: Regex,
    pub see: Regex,
}

impl DefaultPatterns {
    fn get(&self, key: PatternKey) -> &Regex {
        match key {
            PatternKey::CommentBlock => &self.comment_block,
            PatternKey::ClassDecl => &self.class_decl,
            PatternKey::Filter => &self.filter,
            PatternKey::DocBlock => &self.doc_block,
            PatternKey::Param => &self.param,
            PatternKey::Return => &self.ret,
            PatternKey::See => &self.see,
        }
    }
}

/// Two-level pattern lookup: dialect overrides, then default.
#[derive(Debug)]
pub struct PatternRegistry {
    pub default: DefaultPatterns,
    pub js: PatternSet,
    pub php: PatternSet,
}

static BUILTIN: LazyLock<PatternRegistry> = LazyLock::new(PatternRegistry::compile_builtin);

impl PatternRegistry {
    /// The builtin registry, compiled once per process.
    pub fn builtin() -> &'static PatternRegistry {
        &BUILTIN
    }

    /// Resolve a pattern for a dialect, falling back to the default table.
    pub fn lookup(&self, dialect: Dialect, key: PatternKey) -> &Regex {
        let overrides = match dialect {
            Dialect::Js => Some(&self.js),
            Dialect::Php => Some(&self.php),
            Dialect::Markdown | Dialect::Default => None,
        };
        overrides
            .and_then(|set| set.get(key))
            .unwrap_or_else(|| self.default.get(key))
    }

    fn compile_builtin() -> PatternRegistry {
        let re = |p: &str| Regex::new(p).unwrap();

        PatternRegistry {
            default: DefaultPatterns {
                // Tab-indented docblock followed by a function declaration
                // with optional visibility/static modifiers.
                comment_block: re(
                    r"(?s)\n\t(?P<desc>/\*\*\n.*?\*/.*?)(?P<decl>(?:public|protected|private)?\s*(?:static)?\s*function\s+(?P<name>\w+))\s*\(.*?\)(?:\s*:\s*\w+)?\s*(?:\{|;)",
                ),
                class_decl: re(
                    r"(?:class|trait|interface)\s+(?P<classname>\w+)\s*(?:extends\s+(?P<extends>\w+))?\s*(?:implements\s+(?P<implements>[\w\s,]+))?\{",
                ),
                filter: re(
                    r#"(?s)\s[ \t]/\*\*(?P<desc>.*?)\*/.*?apply_filters\(\s*['"](?P<name>[^'"]+)['"](?:\s*,\s*(?P<params>.*?))?\s*\)\s*;"#,
                ),
                doc_block: re(r"\* (?P<desc>[^@]+\.)"),
                param: re(
                    r"@param\s+\{?(?P<type>[^}\s]+)\}?\s+(?P<variable>\S+)\s+(?P<desc>[^@\n]+\.)",
                ),
                ret: re(
                    r"@returns?\s+\{?(?P<type>\w+)\}?(?:\s+\$(?P<variable>\w+))?(?:\s+(?P<desc>[^@\n]+\.))?",
                ),
                see: re(r"@see\s+(?P<url>\w\S*)"),
            },
            js: PatternSet {
                // Docblock followed by an (optionally exported) const
                // assigned an arrow function.
                comment_block: Some(re(
                    r"(?s)(?P<desc>/\*\*.*?\*/\s*?)\n(?P<decl>(?:export\s+)?const\s+(?P<name>\w+))\s*=\s*\(",
                )),
                filter: Some(re(
                    r#"(?s)(?P<desc>/\*\*.*?\*/\s*?)\n\t!?const \w+ = applyFilters\(\s*['"](?P<name>[^'"]+)['"](?:\s*,\s*(?P<params>.*?))?\s*\)\s*;"#,
                )),
                param: Some(re(
                    r"@param\s+\{?\{(?P<type>[^}]*)\}\}?\s+(?P<variable>\S+)\s+(?P<desc>[^@\n]+\.)",
                )),
                ..PatternSet::default()
            },
            // PHP shares the default declaration syntax entirely.
            php: PatternSet::default(),
        }
    }
}
