#![forbid(unsafe_code)]

//! `arcpop` is a headless model of ArcGIS web map feature popups.
//!
//! The core (always available) resolves `{FIELD}` templates, converts restricted popup HTML into
//! styled runs or plain text, extracts chart series and assembles per-feature popups.
//!
//! # Features
//!
//! - `render`: enable chart layout + SVG rendering (`arcpop::render`)

pub use arcpop_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use arcpop_render::model::{ChartLayout, ChartPrimitive, MediaLayout, PopupLayout};
    pub use arcpop_render::style::ChartStyle;
    pub use arcpop_render::svg::{SvgRenderOptions, render_chart_svg};
    pub use arcpop_render::text::{DeterministicTextMeasurer, TextMeasurer};
    pub use arcpop_render::{LayoutOptions, layout_chart, layout_popup};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Parse(#[from] arcpop_core::Error),
        #[error(transparent)]
        Render(#[from] arcpop_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token, so several charts can be
    /// inlined into the same document.
    ///
    /// Unsupported characters become `-`, runs of `-` collapse, and ids that do not start with an
    /// ASCII letter get a `c-` prefix.
    pub fn sanitize_chart_id(raw: &str) -> String {
        let raw = raw.trim();
        let mut out = String::with_capacity(raw.len() + 2);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }
        if !out.starts_with(|c: char| c.is_ascii_alphabetic()) {
            out.insert_str(0, "c-");
        }
        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "c" {
            return "c-untitled".to_string();
        }
        out.to_string()
    }

    /// Parses a popup definition and attributes, assembles the popup and lays out its charts.
    pub fn layout_popup_from_json(
        info_json: &str,
        attributes_json: &str,
        options: &LayoutOptions,
    ) -> Result<PopupLayout> {
        let content = arcpop_core::build_popup_from_json(info_json, attributes_json)?;
        Ok(layout_popup(&content, options))
    }

    /// Extracts the series named by `fields` from an attribute document and lays out a `kind`
    /// chart.
    pub fn layout_chart_from_json(
        kind: &str,
        fields: &str,
        attributes_json: &str,
        options: &LayoutOptions,
    ) -> Result<ChartLayout> {
        Ok(arcpop_render::layout_chart_from_json(
            kind,
            fields,
            attributes_json,
            options,
        )?)
    }

    /// Bundles layout and SVG options for repeated chart rendering.
    #[derive(Clone, Default)]
    pub struct ChartRenderer {
        pub layout: LayoutOptions,
        pub svg: SvgRenderOptions,
    }

    impl ChartRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_config(mut self, config: &arcpop_core::PopupConfig) -> Self {
            self.layout = LayoutOptions::from_config(config);
            self
        }

        pub fn layout(
            &self,
            kind: arcpop_core::ChartKind,
            series: &arcpop_core::Series,
        ) -> ChartLayout {
            layout_chart(kind, series, &self.layout)
        }

        pub fn render_svg(
            &self,
            kind: arcpop_core::ChartKind,
            series: &arcpop_core::Series,
        ) -> String {
            render_chart_svg(&self.layout(kind, series), &self.svg)
        }

        /// `kind` and `fields` use the chart media notation, e.g. `"pie"` and `"A,B_::_TOTAL"`.
        pub fn render_svg_from_json(
            &self,
            kind: &str,
            fields: &str,
            attributes_json: &str,
        ) -> Result<String> {
            let layout = layout_chart_from_json(kind, fields, attributes_json, &self.layout)?;
            Ok(render_chart_svg(&layout, &self.svg))
        }

        pub fn render_svg_with_chart_id(
            &self,
            kind: arcpop_core::ChartKind,
            series: &arcpop_core::Series,
            chart_id: &str,
        ) -> String {
            let mut svg = self.svg.clone();
            svg.chart_id = Some(sanitize_chart_id(chart_id));
            render_chart_svg(&self.layout(kind, series), &svg)
        }
    }
}
