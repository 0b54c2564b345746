#![forbid(unsafe_code)]

//! Feature popup model for ArcGIS web maps (headless).
//!
//! - `{FIELD}` attribute templates resolved against a feature's attributes
//! - restricted popup HTML turned into styled inline runs or plain text
//! - chart series extracted from attribute fields, with optional normalization
//! - per-feature popup assembly with the usual title fallbacks

pub mod attributes;
pub mod config;
pub mod entities;
pub mod error;
pub mod html;
pub mod popup;
pub mod series;
pub mod template;

pub use attributes::{AttributeMap, AttributeValue};
pub use config::PopupConfig;
pub use error::{Error, Result};
pub use html::{
    FontWeight, HtmlInlines, ImageRun, Inline, LinkRun, StripOptions, StyledRun, html_inlines,
    inlines_to_text, strip_to_plain_text, strip_to_plain_text_with, to_styled_runs,
};
pub use popup::{
    AttributeRow, AttributeRowValue, ChartMedia, FieldInfo, ImageMedia, MediaBody, MediaContent,
    MediaInfo, MediaType, MediaValue, PopupContent, PopupInfo, build_popup, popup_summary_title,
};
pub use series::{
    ChartFields, ChartKind, FieldLabels, NORMALIZE_SEPARATOR, Series, extract_series,
};
pub use template::{
    LINE_BREAK_MARKER, TemplateSegment, parse_template, resolve_template, resolve_template_uri,
    template_to_inlines,
};

/// Parses a popup definition and an attribute document, then assembles the popup.
pub fn build_popup_from_json(info_json: &str, attributes_json: &str) -> Result<PopupContent> {
    let info = PopupInfo::from_json_str(info_json)?;
    let attributes = AttributeMap::from_json_str(attributes_json)?;
    Ok(build_popup(&info, Some(&attributes)))
}

#[cfg(test)]
mod tests;
