//! `{FIELD}` attribute templates.

use crate::attributes::AttributeMap;
use crate::entities::unescape_template_entities;
use crate::html::{Inline, strip_tags};
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

/// Line-break placeholder produced by the plain-text stripper. Resolution turns it back into
/// `<br/>`.
pub const LINE_BREAK_MARKER: &str = "$LINEBREAK$";

fn field_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([^}]*)\}").expect("valid regex"))
}

fn template_break_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)<br ?/?>").expect("valid regex"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateSegment<'a> {
    Literal(&'a str),
    Field(&'a str),
}

/// Splits a template into literal text and `{name}` references. An unmatched brace is literal.
pub fn parse_template(template: &str) -> Vec<TemplateSegment<'_>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in field_regex().captures_iter(template) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(TemplateSegment::Literal(&template[last..whole.start()]));
        }
        segments.push(TemplateSegment::Field(name.as_str()));
        last = whole.end();
    }
    if last < template.len() {
        segments.push(TemplateSegment::Literal(&template[last..]));
    }
    segments
}

/// Substitutes attribute values into `template`.
///
/// Field references are exact (case-sensitive). A reference to a field the map does not have,
/// or to a null value, contributes nothing. The result then has `$LINEBREAK$` turned into
/// `<br/>` and the basic XML escapes undone.
///
/// Returns `None` when either input is missing or the template is blank.
pub fn resolve_template(attributes: Option<&AttributeMap>, template: Option<&str>) -> Option<String> {
    let attributes = attributes?;
    let template = template?;
    if template.trim().is_empty() {
        return None;
    }

    let mut out = String::with_capacity(template.len());
    for segment in parse_template(template) {
        match segment {
            TemplateSegment::Literal(text) => out.push_str(text),
            TemplateSegment::Field(name) => match attributes.get(name) {
                Some(value) => out.push_str(&value.to_string()),
                None => tracing::trace!(field = name, "template references a missing field"),
            },
        }
    }

    let out = out.replace(LINE_BREAK_MARKER, "<br/>");
    Some(unescape_template_entities(&out).into_owned())
}

/// Resolves a template that names a link or image location. Only well-formed absolute URLs are
/// returned.
pub fn resolve_template_uri(
    attributes: Option<&AttributeMap>,
    template: Option<&str>,
) -> Option<Url> {
    let resolved = resolve_template(attributes, template)?;
    let candidate = resolved.trim();
    if candidate.chars().any(char::is_whitespace) {
        tracing::debug!(uri = candidate, "resolved URI contains whitespace");
        return None;
    }
    match Url::parse(candidate) {
        Ok(url) => Some(url),
        Err(err) => {
            tracing::debug!(uri = candidate, %err, "resolved text is not an absolute URI");
            None
        }
    }
}

/// Resolves a short template (titles, captions) into plain runs separated by line breaks.
///
/// Only `<br>`, `<br/>` and `<br />` split lines; any other markup is removed.
pub fn template_to_inlines(attributes: Option<&AttributeMap>, template: Option<&str>) -> Vec<Inline> {
    let Some(resolved) = resolve_template(attributes, template) else {
        return Vec::new();
    };

    let mut inlines = Vec::new();
    for (i, piece) in template_break_regex().split(&resolved).enumerate() {
        if i > 0 {
            inlines.push(Inline::LineBreak);
        }
        let text = strip_tags(piece);
        if !text.is_empty() {
            inlines.push(Inline::plain(text.into_owned()));
        }
    }
    inlines
}
