//! Restricted HTML as found in popup descriptions.

mod inline;
mod inlines;
mod strip;
pub mod tokenizer;

pub use inline::{FontWeight, ImageRun, Inline, LinkRun, StyledRun, inlines_to_text};
pub use inlines::{HtmlInlines, html_inlines, to_styled_runs};
pub use strip::{StripOptions, strip_to_plain_text, strip_to_plain_text_with};
pub(crate) use strip::strip_tags;
