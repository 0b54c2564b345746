use super::inline::{FontWeight, ImageRun, Inline, LinkRun, StyledRun};
use super::strip::strip_tags;
use super::tokenizer::{Tag, TagName, Token, Tokenizer};
use crate::entities::unescape_run_entities;
use regex::Regex;
use std::collections::VecDeque;
use std::sync::OnceLock;
use url::Url;

/// At most this many consecutive breaks are emitted between two text runs.
const MAX_CONSECUTIVE_BREAKS: u8 = 2;

fn repeated_spaces_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r" {2,}").expect("valid regex"))
}

#[derive(Debug, Default)]
struct FlowState {
    bold: bool,
    italic: bool,
    unordered: bool,
    ordered: bool,
    next_number: Option<u32>,
    list_item_pending: bool,
    href: Option<Url>,
    consecutive_breaks: u8,
}

impl FlowState {
    fn in_list(&self) -> bool {
        self.unordered || self.ordered
    }

    fn weight(&self) -> FontWeight {
        if self.bold {
            FontWeight::SemiBold
        } else {
            FontWeight::Normal
        }
    }

    fn take_list_prefix(&mut self) -> Option<String> {
        if !self.list_item_pending {
            return None;
        }
        if self.unordered {
            self.list_item_pending = false;
            return Some("\u{2022}  ".to_string());
        }
        if self.ordered {
            self.list_item_pending = false;
            let n = self.next_number.unwrap_or(1);
            self.next_number = Some(n + 1);
            return Some(format!("{n}.  "));
        }
        None
    }
}

/// Streaming conversion of restricted popup HTML into styled inlines.
///
/// Created by [`html_inlines`]. Unknown markup is stripped from text, and malformed link or
/// image URLs degrade to plain text or nothing.
#[derive(Debug)]
pub struct HtmlInlines<'a> {
    tokens: Tokenizer<'a>,
    state: FlowState,
    out: VecDeque<Inline>,
}

pub fn html_inlines(html: &str) -> HtmlInlines<'_> {
    HtmlInlines {
        tokens: Tokenizer::new(html),
        state: FlowState::default(),
        out: VecDeque::new(),
    }
}

/// Collects [`html_inlines`] into a vector.
pub fn to_styled_runs(html: &str) -> Vec<Inline> {
    html_inlines(html).collect()
}

impl Iterator for HtmlInlines<'_> {
    type Item = Inline;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(inline) = self.out.pop_front() {
                return Some(inline);
            }
            match self.tokens.next()? {
                Token::Tag(tag) => self.on_tag(tag),
                Token::Text(text) => self.on_text(text),
            }
        }
    }
}

impl HtmlInlines<'_> {
    fn line_break(&mut self) {
        if self.state.consecutive_breaks < MAX_CONSECUTIVE_BREAKS {
            self.out.push_back(Inline::LineBreak);
            self.state.consecutive_breaks += 1;
        }
    }

    fn paragraph_break(&mut self) {
        if !self.state.in_list() {
            self.line_break();
        }
    }

    fn on_tag(&mut self, tag: Tag<'_>) {
        match (tag.name, tag.closing) {
            (TagName::Br, _) | (TagName::P, _) | (TagName::Div, true) => self.paragraph_break(),
            (TagName::Div, false) | (TagName::Span, _) => {}
            (TagName::Bold, closing) => self.state.bold = !closing,
            (TagName::Italic, closing) => self.state.italic = !closing,
            (TagName::Ul, false) => {
                self.line_break();
                self.state.unordered = true;
            }
            (TagName::Ul, true) => self.state.unordered = false,
            (TagName::Ol, false) => {
                self.line_break();
                self.state.ordered = true;
                self.state.next_number = Some(1);
            }
            (TagName::Ol, true) => {
                self.state.ordered = false;
                self.state.next_number = None;
            }
            (TagName::Li, false) => self.state.list_item_pending = true,
            (TagName::Li, true) => {
                self.state.list_item_pending = false;
                self.line_break();
            }
            (TagName::Anchor, true) => self.state.href = None,
            (TagName::Anchor, false) => {
                self.state.href = tag.attribute("href").and_then(|href| {
                    Url::parse(href.trim())
                        .inspect_err(|err| {
                            tracing::debug!(href, %err, "link href is not an absolute URL");
                        })
                        .ok()
                });
            }
            (TagName::Img, true) => {}
            (TagName::Img, false) => {
                let Some(src) = tag.attribute("src") else {
                    return;
                };
                match Url::parse(src.trim()) {
                    Ok(src) => {
                        self.out.push_back(Inline::Image(ImageRun { src }));
                        self.line_break();
                        self.line_break();
                    }
                    Err(err) => tracing::debug!(src, %err, "dropping image with invalid source"),
                }
            }
        }
    }

    fn on_text(&mut self, text: &str) {
        if text.trim().is_empty() {
            return;
        }
        let stripped = strip_tags(text);
        if stripped.trim().is_empty() {
            return;
        }
        let collapsed = repeated_spaces_regex().replace_all(&stripped, " ");
        let text = unescape_run_entities(&collapsed).into_owned();

        let prefix = self.state.take_list_prefix();
        let weight = self.state.weight();
        let italic = self.state.italic;

        match self.state.href.clone() {
            Some(href) => {
                if let Some(prefix) = prefix {
                    self.out.push_back(Inline::Run(StyledRun {
                        text: prefix,
                        weight,
                        italic,
                    }));
                }
                for word in text.split_inclusive([' ', '/']) {
                    self.out.push_back(Inline::Link(LinkRun {
                        text: word.to_string(),
                        href: href.clone(),
                    }));
                }
            }
            None => {
                let text = match prefix {
                    Some(prefix) => prefix + &text,
                    None => text,
                };
                self.out.push_back(Inline::Run(StyledRun {
                    text,
                    weight,
                    italic,
                }));
            }
        }
        self.state.consecutive_breaks = 0;
    }
}
