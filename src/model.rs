//! Data model for extracted documentation — dialect-agnostic.

/// Complete extracted structure from a single source file.
#[derive(Debug, Default, Clone)]
pub struct FileDocument {
    #[allow(dead_code)]
    pub path: String,
    /// Sanitized first docblock sentence of the file.
    pub description: String,
    /// Present iff a class/trait/interface declaration was found.
    pub details: Option<ClassDetails>,
    /// Documented members in source declaration order.
    pub members: Vec<MemberDoc>,
    /// Raw file text, kept only for markdown-dialect passthrough.
    pub markdown: Option<String>,
}

/// Class/trait/interface header metadata. At most one per file.
#[derive(Debug, Default, Clone)]
pub struct ClassDetails {
    /// Declared name, underscores rendered as spaces for display.
    pub name: String,
    /// Parent name, empty if none.
    pub extends: String,
    /// Implemented capabilities, empty if none.
    pub implements: Vec<String>,
}

/// A documented function/method-level declaration.
#[derive(Debug, Default, Clone)]
pub struct MemberDoc {
    pub name: String,
    pub description: String,
    /// Extracted but not rendered; the docs site has no column for it.
    #[allow(dead_code)]
    pub ret: ReturnDoc,
    pub see_url: Option<String>,
    pub params: Vec<ParamDoc>,
    /// Hook invocations found inside this member's body, in source order.
    pub filters: Vec<FilterDoc>,
}

/// A hook/extension-point call discovered inside a member body.
/// Owned exclusively by that member.
#[derive(Debug, Default, Clone)]
pub struct FilterDoc {
    pub name: String,
    pub description: String,
    #[allow(dead_code)]
    pub ret: ReturnDoc,
    pub see_url: Option<String>,
    pub params: Vec<ParamDoc>,
}

/// One `@param` annotation.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamDoc {
    pub type_name: String,
    pub name: String,
    pub description: String,
}

/// One `@return`/`@returns` annotation. Absent fields stay empty.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct ReturnDoc {
    pub type_name: String,
    pub name: String,
    pub description: String,
}
