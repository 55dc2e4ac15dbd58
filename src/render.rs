//! Markdown renderer — turn a `FileDocument` into correctly nested
//! headings. Depends only on the extracted shape, never on dialect.

use crate::model::{FileDocument, FilterDoc, MemberDoc, ParamDoc};
use regex::Regex;
use std::sync::LazyLock;

static RE_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^(#+ )").unwrap());

/// Render one document. Markdown-dialect files are copied through with
/// every heading demoted by one level; everything else gets the
/// structural output, in source order.
pub fn render(doc: &FileDocument) -> String {
    if let Some(ref raw) = doc.markdown {
        let demoted = RE_HEADING.replace_all(raw, "#$1");
        return format!("{}\n", demoted.trim_end_matches('\n'));
    }

    let mut out = String::new();
    let has_details = doc.details.is_some();

    if let Some(ref details) = doc.details {
        out.push_str(&heading(&details.name, 2, false));
        out.push('\n');
        out.push_str(&doc.description);
        out.push('\n');
        if !details.extends.is_empty() {
            out.push_str(&format!("- Extends: **{}**\n", details.extends));
        }
        if !details.implements.is_empty() {
            let implements: Vec<String> = details
                .implements
                .iter()
                .map(|name| format!("**{name}**"))
                .collect();
            out.push_str(&format!("- Implements: {}\n\n", implements.join(", ")));
        } else {
            out.push('\n');
        }
    }

    for member in &doc.members {
        // Free functions sit one level deeper so the hierarchy stays
        // consistent without a class wrapper above them.
        render_member(&mut out, member, !has_details);
    }

    out
}

fn render_member(out: &mut String, member: &MemberDoc, inset: bool) {
    out.push_str(&heading(&member.name, 2, inset));
    out.push('\n');
    out.push_str(&member.description);
    out.push('\n');
    render_fields(out, &member.params, member.see_url.as_deref());
    out.push('\n');

    // TODO: render member.ret once the docs site has a column for it.
    if !member.filters.is_empty() {
        out.push_str(&heading("Filters", 4, inset));
        out.push('\n');
        for filter in &member.filters {
            render_filter(out, filter, inset);
        }
    }
}

fn render_filter(out: &mut String, filter: &FilterDoc, inset: bool) {
    out.push_str(&heading(&filter.name, 5, inset));
    out.push('\n');
    out.push_str(&filter.description);
    out.push('\n');
    render_fields(out, &filter.params, filter.see_url.as_deref());
    out.push('\n');
}

/// Parameter bullets and the optional reference link, shared by members
/// and filters.
fn render_fields(out: &mut String, params: &[ParamDoc], see_url: Option<&str>) {
    for param in params {
        if param.description.is_empty() {
            out.push_str(&format!("- `{}`: {}\n", param.name, param.type_name));
        } else {
            out.push_str(&format!(
                "- `{}`: {} — {}\n",
                param.name, param.type_name, param.description
            ));
        }
    }
    if let Some(url) = see_url {
        out.push_str(&format!("- [Reference]({url})\n"));
    }
}

fn heading(text: &str, depth: usize, inset: bool) -> String {
    let depth = if inset { depth + 1 } else { depth };
    format!("{} {}", "#".repeat(depth), text)
}
