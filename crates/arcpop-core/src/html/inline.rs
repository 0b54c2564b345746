use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    #[default]
    Normal,
    SemiBold,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyledRun {
    pub text: String,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub italic: bool,
}

impl StyledRun {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            weight: FontWeight::Normal,
            italic: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkRun {
    pub text: String,
    pub href: Url,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageRun {
    pub src: Url,
}

/// One element of a rendered rich-text flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Inline {
    Run(StyledRun),
    LineBreak,
    Image(ImageRun),
    Link(LinkRun),
}

impl Inline {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::Run(StyledRun::plain(text))
    }

    /// Visible text of the inline; breaks read as `\n` and images as nothing.
    pub fn text(&self) -> &str {
        match self {
            Self::Run(run) => &run.text,
            Self::Link(link) => &link.text,
            Self::LineBreak => "\n",
            Self::Image(_) => "",
        }
    }
}

/// Concatenated visible text of an inline flow.
pub fn inlines_to_text(inlines: &[Inline]) -> String {
    inlines.iter().map(Inline::text).collect()
}
