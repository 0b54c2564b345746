//! Splits popup HTML into recognized tags and the text between them.
//!
//! Only a fixed tag set is recognized (`br`, `p`, `div`, `span`, `b`/`bold`, `i`, `ul`, `ol`,
//! `li`, `a`, `img`, plus the bracket form `[br/]`). Anything else that looks like markup stays in
//! the text tokens and is removed later by the tag stripper.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName {
    Br,
    P,
    Div,
    Span,
    Bold,
    Italic,
    Ul,
    Ol,
    Li,
    Anchor,
    Img,
}

impl TagName {
    fn from_ascii(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        Some(match name.as_str() {
            "br" => Self::Br,
            "p" => Self::P,
            "div" => Self::Div,
            "span" => Self::Span,
            "b" | "bold" => Self::Bold,
            "i" => Self::Italic,
            "ul" => Self::Ul,
            "ol" => Self::Ol,
            "li" => Self::Li,
            "a" => Self::Anchor,
            "img" => Self::Img,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: TagName,
    pub closing: bool,
    pub self_closing: bool,
    /// Everything between the tag name and the closing `>`, in original case.
    attrs: &'a str,
}

impl<'a> Tag<'a> {
    /// Tags that end a visual line in plain-text output.
    pub fn breaks_line(&self) -> bool {
        match self.name {
            TagName::Br | TagName::P | TagName::Img => true,
            TagName::Div | TagName::Li => self.closing,
            TagName::Ul | TagName::Ol => !self.closing,
            TagName::Span | TagName::Bold | TagName::Italic | TagName::Anchor => false,
        }
    }

    /// Case-insensitive attribute lookup. Values may be single-quoted, double-quoted or bare;
    /// the returned slice keeps the original case.
    pub fn attribute(&self, name: &str) -> Option<&'a str> {
        let lower = self.attrs.to_ascii_lowercase();
        let bytes = self.attrs.as_bytes();
        let mut from = 0;
        while let Some(found) = lower[from..].find(name) {
            let start = from + found;
            from = start + name.len();
            let at_boundary = start == 0 || bytes[start - 1].is_ascii_whitespace();
            if !at_boundary {
                continue;
            }
            let rest = self.attrs[from..].trim_start();
            let Some(rest) = rest.strip_prefix('=') else {
                continue;
            };
            let rest = rest.trim_start();
            return Some(match rest.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let body = &rest[1..];
                    match body.find(quote) {
                        Some(end) => &body[..end],
                        None => body,
                    }
                }
                _ => {
                    let end = rest
                        .find(|c: char| c.is_whitespace() || c == '>')
                        .unwrap_or(rest.len());
                    rest[..end].trim_end_matches('/')
                }
            });
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    Text(&'a str),
    Tag(Tag<'a>),
}

#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    pending: Option<Tag<'a>>,
    dead_ends: DeadEnds,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            pending: None,
            dead_ends: DeadEnds::default(),
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(tag) = self.pending.take() {
            return Some(Token::Tag(tag));
        }
        if self.pos >= self.input.len() {
            return None;
        }

        let input = self.input;
        let rest = &input[self.pos..];
        for (offset, ch) in rest.char_indices() {
            if ch != '<' && ch != '[' {
                continue;
            }
            let Some((tag, len)) = parse_tag(input, self.pos + offset, &mut self.dead_ends) else {
                continue;
            };
            self.pos += offset + len;
            if offset == 0 {
                return Some(Token::Tag(tag));
            }
            self.pending = Some(tag);
            return Some(Token::Text(&rest[..offset]));
        }

        self.pos = input.len();
        Some(Token::Text(rest))
    }
}

/// Quote state while searching for the `>` that closes a tag.
type Quote = Option<char>;

fn quote_after(quote: Quote, c: char) -> Quote {
    match quote {
        Some(q) if c == q => None,
        Some(q) => Some(q),
        None if c == '"' || c == '\'' => Some(c),
        None => None,
    }
}

/// `(byte offset, quote state)` pairs from which the search for a closing `>` is known to run off
/// the end of the input. Each pair is marked at most once, which keeps tokenizing linear on
/// unterminated markup.
#[derive(Debug, Clone, Default)]
struct DeadEnds {
    marks: Vec<u8>,
}

impl DeadEnds {
    fn bit(quote: Quote) -> u8 {
        match quote {
            None => 1,
            Some('"') => 2,
            Some(_) => 4,
        }
    }

    fn contains(&self, at: usize, quote: Quote) -> bool {
        self.marks
            .get(at)
            .is_some_and(|m| m & Self::bit(quote) != 0)
    }

    fn insert(&mut self, len: usize, at: usize, quote: Quote) {
        if self.marks.len() < len {
            self.marks.resize(len, 0);
        }
        self.marks[at] |= Self::bit(quote);
    }
}

/// Absolute offset of the unquoted `>` closing a tag whose attributes start at `from`.
fn find_tag_end(input: &str, from: usize, dead_ends: &mut DeadEnds) -> Option<usize> {
    let mut quote = None;
    for (i, c) in input[from..].char_indices() {
        if dead_ends.contains(from + i, quote) {
            break;
        }
        if quote.is_none() && c == '>' {
            return Some(from + i);
        }
        quote = quote_after(quote, c);
    }

    let mut quote = None;
    for (i, c) in input[from..].char_indices() {
        if dead_ends.contains(from + i, quote) {
            break;
        }
        dead_ends.insert(input.len(), from + i, quote);
        quote = quote_after(quote, c);
    }
    None
}

/// Parses a recognized tag starting at byte `start`, returning it with its byte length.
fn parse_tag<'a>(
    input: &'a str,
    start: usize,
    dead_ends: &mut DeadEnds,
) -> Option<(Tag<'a>, usize)> {
    let s = &input[start..];
    if s.starts_with('[') {
        return parse_bracket_break(s);
    }

    let body = s.strip_prefix('<')?;
    let (closing, body) = match body.strip_prefix('/') {
        Some(rest) => (true, rest),
        None => (false, body),
    };
    let name_len = body
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(body.len());
    if name_len == 0 || name_len > 4 {
        return None;
    }
    let name = TagName::from_ascii(&body[..name_len])?;
    let after_name = &body[name_len..];
    match after_name.chars().next() {
        Some('>' | '/') => {}
        Some(c) if c.is_whitespace() => {}
        _ => return None,
    }

    let attrs_start = input.len() - after_name.len();
    let end = find_tag_end(input, attrs_start, dead_ends)?;
    let inner = &input[attrs_start..end];
    let tag = Tag {
        name,
        closing,
        self_closing: inner.trim_end().ends_with('/'),
        attrs: inner,
    };
    Some((tag, end + 1 - start))
}

fn parse_bracket_break(s: &str) -> Option<(Tag<'_>, usize)> {
    let head = s.get(..3)?;
    if !head.eq_ignore_ascii_case("[br") {
        return None;
    }
    let rest = &s[3..];
    let trimmed = rest.trim_start_matches(' ');
    let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let trimmed = trimmed.strip_prefix(']')?;
    let tag = Tag {
        name: TagName::Br,
        closing: false,
        self_closing: true,
        attrs: "",
    };
    Some((tag, s.len() - trimmed.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(input: &str) -> Vec<String> {
        Tokenizer::new(input)
            .map(|t| match t {
                Token::Text(s) => format!("text:{s}"),
                Token::Tag(tag) => format!(
                    "{}{:?}",
                    if tag.closing { "/" } else { "" },
                    tag.name
                ),
            })
            .collect()
    }

    #[test]
    fn recognizes_whitelisted_tags_case_insensitively() {
        assert_eq!(
            names("<P>a<BR/>b</p>"),
            vec!["P", "text:a", "Br", "text:b", "/P"]
        );
    }

    #[test]
    fn leaves_unknown_markup_in_text() {
        assert_eq!(
            names("<pre>x</pre><b>y</b>"),
            vec!["text:<pre>x</pre>", "Bold", "text:y", "/Bold"]
        );
    }

    #[test]
    fn bracket_breaks_and_bold_alias() {
        assert_eq!(
            names("a[br/]b[BR]c<bold>d</bold>"),
            vec![
                "text:a", "Br", "text:b", "Br", "text:c", "Bold", "text:d", "/Bold"
            ]
        );
    }

    #[test]
    fn quoted_gt_does_not_end_the_tag() {
        let tokens: Vec<_> = Tokenizer::new(r#"<a href="x>y">t</a>"#).collect();
        let Token::Tag(tag) = tokens[0] else {
            panic!("expected tag, got {:?}", tokens[0]);
        };
        assert_eq!(tag.attribute("href"), Some("x>y"));
        assert_eq!(tokens[1], Token::Text("t"));
    }

    #[test]
    fn attribute_forms() {
        let tokens: Vec<_> =
            Tokenizer::new(r#"<a HREF='http://A.com/X' target=_blank><img src=http://i.png/>"#)
                .collect();
        let (Token::Tag(a), Token::Tag(img)) = (tokens[0], tokens[1]) else {
            panic!("expected two tags");
        };
        assert_eq!(a.attribute("href"), Some("http://A.com/X"));
        assert_eq!(a.attribute("target"), Some("_blank"));
        assert_eq!(a.attribute("rel"), None);
        assert_eq!(img.attribute("src"), Some("http://i.png"));
        assert!(img.self_closing);
    }

    #[test]
    fn unterminated_tag_is_text() {
        assert_eq!(names("a <b"), vec!["text:a <b"]);
    }

    #[test]
    fn tag_after_unterminated_quote_is_still_found() {
        assert_eq!(
            names("<a href='x <b>y"),
            vec!["text:<a href='x ", "Bold", "text:y"]
        );
        assert_eq!(
            names(r#"<b "x<i>"#),
            vec![r#"text:<b "x"#, "Italic"]
        );
    }

    #[test]
    fn many_unterminated_tags_stay_one_text_token() {
        let input = "<b ".repeat(20_000);
        let tokens: Vec<_> = Tokenizer::new(&input).collect();
        assert_eq!(tokens, vec![Token::Text(input.as_str())]);
    }

    /// Tag-end search without memoization.
    fn naive_tag_end(s: &str) -> Option<usize> {
        let mut quote = None;
        for (i, c) in s.char_indices() {
            if quote.is_none() && c == '>' {
                return Some(i);
            }
            quote = quote_after(quote, c);
        }
        None
    }

    #[test]
    fn memoized_search_matches_plain_scan() {
        let inputs = [
            r#"<b "<i '>x"#,
            r#"<a href="a'b>c'>d<b>"#,
            "<b '<i \"<p '>\">",
            "<b <i <p '> '>",
            "<a '>",
        ];
        for input in inputs {
            let mut dead_ends = DeadEnds::default();
            for start in (0..input.len()).filter(|i| input.as_bytes()[*i] == b'<') {
                let from = start + 1;
                assert_eq!(
                    find_tag_end(input, from, &mut dead_ends),
                    naive_tag_end(&input[from..]).map(|i| i + from),
                    "{input:?} at {from}"
                );
            }
        }
    }
}
