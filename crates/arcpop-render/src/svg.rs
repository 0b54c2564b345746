//! Standalone SVG for a chart layout.

use crate::format::fmt_coord;
use crate::model::{ChartLayout, ChartPrimitive, TextAnchor, TextBaseline};
use std::fmt::Write as _;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Root element id. Defaults to `arcpop-<kind>`.
    pub chart_id: Option<String>,
    /// Optional background fill painted under the chart.
    pub background: Option<String>,
    /// When true, tooltips are emitted as `<title>` children.
    pub include_tooltips: bool,
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn close_with_tooltip(
    out: &mut String,
    element: &str,
    tooltip: Option<&str>,
    options: &SvgRenderOptions,
) {
    match tooltip.filter(|_| options.include_tooltips) {
        Some(t) => {
            let _ = write!(out, "><title>{}</title></{element}>", escape_xml(t));
        }
        None => out.push_str("/>"),
    }
}

pub fn render_chart_svg(layout: &ChartLayout, options: &SvgRenderOptions) -> String {
    let id = options
        .chart_id
        .clone()
        .unwrap_or_else(|| format!("arcpop-{}", layout.kind));
    let w = fmt_coord(layout.width);
    let h = fmt_coord(layout.height);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id}" xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-roledescription="{kind} chart">"#,
        id = escape_xml(&id),
        kind = layout.kind,
    );
    if let Some(bg) = options.background.as_deref() {
        let _ = write!(
            &mut out,
            r#"<rect x="0" y="0" width="{w}" height="{h}" fill="{}"/>"#,
            escape_xml(bg)
        );
    }

    for primitive in &layout.primitives {
        match primitive {
            ChartPrimitive::Rect(r) => {
                let _ = write!(
                    &mut out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
                    fmt_coord(r.x),
                    fmt_coord(r.y),
                    fmt_coord(r.width),
                    fmt_coord(r.height),
                    escape_xml(&r.fill)
                );
                close_with_tooltip(&mut out, "rect", r.tooltip.as_deref(), options);
            }
            ChartPrimitive::Line(l) => {
                let _ = write!(
                    &mut out,
                    r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" stroke-opacity="{}"/>"#,
                    fmt_coord(l.x1),
                    fmt_coord(l.y1),
                    fmt_coord(l.x2),
                    fmt_coord(l.y2),
                    escape_xml(&l.stroke),
                    fmt_coord(l.stroke_width),
                    fmt_coord(l.opacity)
                );
            }
            ChartPrimitive::Ellipse(e) => {
                let _ = write!(
                    &mut out,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}" fill="{}""#,
                    fmt_coord(e.cx),
                    fmt_coord(e.cy),
                    fmt_coord(e.rx),
                    fmt_coord(e.ry),
                    escape_xml(&e.fill)
                );
                if let Some(stroke) = e.stroke.as_deref() {
                    let _ = write!(
                        &mut out,
                        r#" stroke="{}" stroke-width="{}""#,
                        escape_xml(stroke),
                        fmt_coord(e.stroke_width)
                    );
                }
                close_with_tooltip(&mut out, "ellipse", e.tooltip.as_deref(), options);
            }
            ChartPrimitive::Text(t) => {
                let anchor = match t.anchor {
                    TextAnchor::Start => "start",
                    TextAnchor::Middle => "middle",
                    TextAnchor::End => "end",
                };
                let baseline = match t.baseline {
                    TextBaseline::Top => "hanging",
                    TextBaseline::Middle => "central",
                    TextBaseline::Bottom => "alphabetic",
                };
                let _ = write!(
                    &mut out,
                    r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="{baseline}">{}</text>"#,
                    fmt_coord(t.x),
                    fmt_coord(t.y),
                    fmt_coord(t.font_size),
                    escape_xml(&t.fill),
                    escape_xml(&t.text)
                );
            }
            ChartPrimitive::Path(p) => {
                let (tx, ty, sx, sy) = p.transform();
                let _ = write!(
                    &mut out,
                    r#"<path d="{}" transform="translate({},{}) scale({},{})" fill="{}""#,
                    escape_xml(&p.d),
                    fmt_coord(tx),
                    fmt_coord(ty),
                    fmt_coord(sx),
                    fmt_coord(sy),
                    p.fill.as_deref().map(escape_xml).unwrap_or_else(|| "none".to_string())
                );
                if let Some(stroke) = p.stroke.as_deref() {
                    let _ = write!(
                        &mut out,
                        r#" stroke="{}" stroke-width="{}" vector-effect="non-scaling-stroke""#,
                        escape_xml(stroke),
                        fmt_coord(p.stroke_width)
                    );
                }
                if p.round_join {
                    out.push_str(r#" stroke-linejoin="round""#);
                }
                close_with_tooltip(&mut out, "path", p.tooltip.as_deref(), options);
            }
        }
    }

    out.push_str("</svg>");
    out
}
