use std::borrow::Cow;

/// Undoes the five XML escapes that map services apply to stored popup templates.
///
/// Replacement is sequential, so `&amp;lt;` decodes all the way to `<`.
pub fn unescape_template_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(
        input
            .replace("&amp;", "&")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&apos;", "'")
            .replace("&quot;", "\""),
    )
}

/// The two entities that survive in rendered popup text runs.
pub(crate) fn unescape_run_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(input.replace("&quot;", "\"").replace("&nbsp;", " "))
}

/// Full HTML entity decoding (`&nbsp;`, `&#9829;`, `&infin;`, ...).
pub fn decode_html_entities(input: &str) -> Cow<'_, str> {
    if !input.contains('&') {
        return Cow::Borrowed(input);
    }
    Cow::Owned(htmlize::unescape(input).into_owned())
}
