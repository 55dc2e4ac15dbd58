//! Code structure extraction — walk one file's text and recover its
//! documentable entities.
//!
//! No AST is built. Extraction is pattern matching over raw text plus two
//! documented heuristics: the class body window runs from the first `{`
//! at the class header to the last `}` in the file (single-class files
//! only), and a member's body ends at the first closing brace whose
//! indentation mirrors the declaration's. Irregular formatting mis-captures
//! a body; it never errors.

use crate::config::Config;
use crate::dialect::Dialect;
use crate::fields::{parse_params, parse_return, parse_see, sanitize};
use crate::model::{ClassDetails, FileDocument, FilterDoc, MemberDoc};
use crate::patterns::{PatternKey, PatternRegistry};
use std::path::Path;

/// Extract the documentation structure of a single file.
///
/// A file with no structural comments yields an empty-but-valid document;
/// malformed comment syntax simply fails to match and is skipped.
pub fn extract(
    registry: &PatternRegistry,
    config: &Config,
    path: &Path,
    text: &str,
) -> FileDocument {
    let dialect = Dialect::from_path(path);
    let path_string = path.to_string_lossy().to_string();

    // Markdown is copied through by the renderer; nothing to extract.
    if dialect == Dialect::Markdown {
        return FileDocument {
            path: path_string,
            markdown: Some(text.to_string()),
            ..FileDocument::default()
        };
    }

    let doc_block = registry.lookup(dialect, PatternKey::DocBlock);

    let description = doc_block
        .captures(text)
        .and_then(|caps| caps.name("desc"))
        .map(|m| sanitize(m.as_str()))
        .unwrap_or_default();

    let class_match = registry.lookup(dialect, PatternKey::ClassDecl).captures(text);
    let details = class_match.as_ref().map(|caps| ClassDetails {
        name: caps
            .name("classname")
            .map_or(String::new(), |m| m.as_str().replace('_', " ")),
        extends: caps.name("extends").map_or("", |m| m.as_str()).to_string(),
        implements: caps
            .name("implements")
            .map_or("", |m| m.as_str())
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    });

    // Body window: inside the class braces when a class exists, otherwise
    // the whole file (flat free-function fallback).
    let window = match class_match {
        Some(ref caps) => {
            let open = caps.get(0).map_or(0, |m| m.end());
            match text.rfind('}') {
                Some(close) if close > open => &text[open..close],
                _ => "",
            }
        }
        None => text,
    };

    let comment_block = registry.lookup(dialect, PatternKey::CommentBlock);
    let filter_re = registry.lookup(dialect, PatternKey::Filter);

    let mut members = Vec::new();
    for caps in comment_block.captures_iter(window) {
        let name = caps.name("name").map_or("", |m| m.as_str());
        if name.is_empty() || config.excludes_member(name) {
            continue;
        }

        let comment = caps.name("desc").map_or("", |m| m.as_str());
        let decl = caps.name("decl").map_or("", |m| m.as_str());

        let member_description = doc_block
            .captures(comment)
            .and_then(|c| c.name("desc"))
            .map(|m| sanitize(m.as_str()))
            .unwrap_or_default();

        // The window may have clipped the body, so re-locate it in the
        // original text.
        let body = member_body(text, decl).unwrap_or("");

        let mut filters = Vec::new();
        for fcaps in filter_re.captures_iter(body) {
            let filter_comment = fcaps.name("desc").map_or("", |m| m.as_str());
            filters.push(FilterDoc {
                name: fcaps.name("name").map_or("", |m| m.as_str()).to_string(),
                description: doc_block
                    .captures(filter_comment)
                    .and_then(|c| c.name("desc"))
                    .map(|m| sanitize(m.as_str()))
                    .unwrap_or_default(),
                ret: parse_return(registry, dialect, filter_comment),
                see_url: parse_see(registry, dialect, filter_comment),
                params: parse_params(registry, dialect, filter_comment),
            });
        }

        members.push(MemberDoc {
            name: name.to_string(),
            description: member_description,
            ret: parse_return(registry, dialect, comment),
            see_url: parse_see(registry, dialect, comment),
            params: parse_params(registry, dialect, comment),
            filters,
        });
    }

    FileDocument {
        path: path_string,
        description,
        details,
        members,
        markdown: None,
    }
}

/// Locate a member's body in the full file text.
///
/// The opening `{` must sit on the declaration's own line; a declaration
/// without one (an expression-bodied or abstract member) has no body. From
/// there, scan for a closing brace on its own line at the declaration's
/// indentation. Nested braces inside the body are skipped by the
/// indentation mirror, not by counting.
fn member_body<'a>(text: &'a str, decl: &str) -> Option<&'a str> {
    if decl.is_empty() {
        return None;
    }
    let decl_pos = text.find(decl)?;
    let line_start = text[..decl_pos].rfind('\n').map_or(0, |i| i + 1);
    let indent = &text[line_start..decl_pos];
    if !indent.chars().all(|c| c == ' ' || c == '\t') {
        return None;
    }

    let decl_end = decl_pos + decl.len();
    let line_end = text[decl_end..]
        .find('\n')
        .map_or(text.len(), |i| decl_end + i);
    let open = decl_end + text[decl_end..line_end].find('{')?;
    let close_marker = format!("\n{indent}}}");
    let close = open + 1 + text[open + 1..].find(&close_marker)?;
    Some(&text[open + 1..close])
}
