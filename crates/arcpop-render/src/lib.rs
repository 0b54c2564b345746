#![forbid(unsafe_code)]

//! Headless layout for popup charts: bar, column, line and pie charts become flat lists of
//! drawable primitives in a fixed pixel box, which [`svg::render_chart_svg`] can serialize.

mod axis;
pub mod bar;
pub mod column;
pub mod format;
pub mod line;
pub mod model;
pub mod pie;
pub mod popup;
pub mod range;
pub mod style;
pub mod svg;
pub mod text;

use crate::model::ChartLayout;
use crate::style::ChartStyle;
use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use arcpop_core::{AttributeMap, ChartFields, ChartKind, PopupConfig, Series, extract_series};
use std::sync::Arc;

pub use popup::layout_popup;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] arcpop_core::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
    pub style: ChartStyle,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
            style: ChartStyle::default(),
        }
    }
}

impl LayoutOptions {
    pub fn from_config(config: &PopupConfig) -> Self {
        Self {
            style: ChartStyle::from_config(config),
            ..Self::default()
        }
    }
}

pub fn layout_chart(kind: ChartKind, series: &Series, options: &LayoutOptions) -> ChartLayout {
    let measurer = options.text_measurer.as_ref();
    match kind {
        ChartKind::Bar => bar::layout_bar_chart(series, &options.style, measurer),
        ChartKind::Column => column::layout_column_chart(series, &options.style, measurer),
        ChartKind::Line => line::layout_line_chart(series, &options.style, measurer),
        ChartKind::Pie => pie::layout_pie_chart(series, &options.style),
    }
}

/// Extracts the series named by a chart field parameter from an attribute document and lays it
/// out.
pub fn layout_chart_from_json(
    kind: &str,
    fields: &str,
    attributes_json: &str,
    options: &LayoutOptions,
) -> Result<ChartLayout> {
    let kind: ChartKind = kind.parse()?;
    let attributes = AttributeMap::from_json_str(attributes_json)?;
    let series = extract_series(&attributes, &ChartFields::parse(fields), None);
    Ok(layout_chart(kind, &series, options))
}
