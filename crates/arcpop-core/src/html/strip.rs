use super::tokenizer::{Token, Tokenizer};
use crate::entities::decode_html_entities;
use crate::template::LINE_BREAK_MARKER;
use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

fn any_tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<.*?>").expect("valid regex"))
}

/// Removes every `<...>` sequence.
pub(crate) fn strip_tags(input: &str) -> Cow<'_, str> {
    any_tag_regex().replace_all(input, "")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripOptions {
    /// Escape `{` as `\{` so the output can be fed back into a template.
    pub escape_braces: bool,
    pub trim: bool,
    /// Decode HTML entities in the remaining text.
    pub decode_entities: bool,
    /// Emitted for every tag that ends a visual line.
    pub line_break: String,
}

impl Default for StripOptions {
    fn default() -> Self {
        Self {
            escape_braces: true,
            trim: false,
            decode_entities: false,
            line_break: LINE_BREAK_MARKER.to_string(),
        }
    }
}

impl StripOptions {
    /// Reads `strip.escapeBraces`, `strip.trim`, `strip.decodeEntities` and `strip.lineBreak`.
    pub fn from_config(config: &crate::PopupConfig) -> Self {
        let mut opts = Self::default();
        if let Some(v) = config.get_bool("strip.escapeBraces") {
            opts.escape_braces = v;
        }
        if let Some(v) = config.get_bool("strip.trim") {
            opts.trim = v;
        }
        if let Some(v) = config.get_bool("strip.decodeEntities") {
            opts.decode_entities = v;
        }
        if let Some(v) = config.get_str("strip.lineBreak") {
            opts.line_break = v.to_string();
        }
        opts
    }
}

/// Plain-text rendition of popup HTML with the default options: line-ending tags become
/// `$LINEBREAK$`, other markup is removed and `{` is escaped.
pub fn strip_to_plain_text(html: &str) -> String {
    strip_to_plain_text_with(html, &StripOptions::default())
}

pub fn strip_to_plain_text_with(html: &str, options: &StripOptions) -> String {
    let mut out = String::with_capacity(html.len());
    for token in Tokenizer::new(html) {
        match token {
            Token::Tag(tag) => {
                if tag.breaks_line() {
                    out.push_str(&options.line_break);
                }
            }
            Token::Text(text) => out.push_str(&strip_tags(text)),
        }
    }

    if options.decode_entities {
        out = decode_html_entities(&out).into_owned();
    }
    if options.escape_braces {
        out = out.replace('{', "\\{");
    }
    if options.trim {
        out = out.trim().to_string();
    }
    out
}
