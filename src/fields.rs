//! Field-level parsers for `@param`/`@return`/`@see` annotations.
//!
//! Every parse walks the full input with a fresh iterator; no matcher
//! state survives a call, so repeated parses over the same text always
//! yield the same result.

use crate::dialect::Dialect;
use crate::model::{ParamDoc, ReturnDoc};
use crate::patterns::{PatternKey, PatternRegistry};

/// Parse all `@param` annotations in a comment, in source order.
pub fn parse_params(registry: &PatternRegistry, dialect: Dialect, text: &str) -> Vec<ParamDoc> {
    let re = registry.lookup(dialect, PatternKey::Param);
    re.captures_iter(text)
        .map(|caps| ParamDoc {
            type_name: sanitize(caps.name("type").map_or("", |m| m.as_str())),
            name: caps.name("variable").map_or("", |m| m.as_str()).to_string(),
            description: sanitize(caps.name("desc").map_or("", |m| m.as_str())),
        })
        .collect()
}

/// Parse the first `@return`/`@returns` annotation. Absent match or
/// absent groups degrade to empty strings, never an error.
pub fn parse_return(registry: &PatternRegistry, dialect: Dialect, text: &str) -> ReturnDoc {
    let re = registry.lookup(dialect, PatternKey::Return);
    match re.captures(text) {
        Some(caps) => ReturnDoc {
            type_name: caps.name("type").map_or("", |m| m.as_str()).to_string(),
            name: caps.name("variable").map_or("", |m| m.as_str()).to_string(),
            description: sanitize(caps.name("desc").map_or("", |m| m.as_str())),
        },
        None => ReturnDoc::default(),
    }
}

/// Parse the first `@see` annotation's URL, if any.
pub fn parse_see(registry: &PatternRegistry, dialect: Dialect, text: &str) -> Option<String> {
    let re = registry.lookup(dialect, PatternKey::See);
    re.captures(text)
        .and_then(|caps| caps.name("url"))
        .map(|m| m.as_str().to_string())
}

/// Clean a description for Markdown output: trim, drop control characters
/// and comment asterisks, escape `{ } < >`. Idempotent — characters that
/// already carry a backslash are left alone.
pub fn sanitize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut escaped = false;
    for c in text.trim().chars() {
        match c {
            '*' => {}
            c if c.is_control() => {}
            '{' | '}' | '<' | '>' => {
                if !escaped {
                    out.push('\\');
                }
                out.push(c);
                escaped = false;
            }
            '\\' => {
                out.push(c);
                escaped = true;
            }
            c => {
                out.push(c);
                escaped = false;
            }
        }
    }
    out.trim().to_string()
}
