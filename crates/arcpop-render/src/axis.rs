//! Axis lines, ticks and value labels shared by the bar, column and line layouts.

use crate::format::format_value;
use crate::model::{ChartPrimitive, Frame, LinePrimitive, TextAnchor, TextBaseline, TextPrimitive};
use crate::range::AxisScale;
use crate::style::ChartStyle;
use crate::text::{TextMeasurer, TextStyle};

/// Gap between a tick and its label text.
const LABEL_GAP: f64 = 2.0;

pub(crate) fn text_style(style: &ChartStyle) -> TextStyle {
    TextStyle {
        font_family: None,
        font_size: style.font_size,
    }
}

pub(crate) fn tooltip(label: &str, value: &str) -> String {
    format!("{label} : {value}")
}

pub(crate) fn axis_line(style: &ChartStyle, x1: f64, y1: f64, x2: f64, y2: f64) -> ChartPrimitive {
    ChartPrimitive::Line(LinePrimitive {
        x1,
        y1,
        x2,
        y2,
        stroke: style.foreground.clone(),
        stroke_width: style.axis_thickness,
        opacity: style.axis_opacity,
    })
}

fn tick(style: &ChartStyle, x1: f64, y1: f64, x2: f64, y2: f64) -> ChartPrimitive {
    ChartPrimitive::Line(LinePrimitive {
        x1,
        y1,
        x2,
        y2,
        stroke: style.foreground.clone(),
        stroke_width: 1.0,
        opacity: style.axis_opacity,
    })
}

fn label_text(
    style: &ChartStyle,
    x: f64,
    y: f64,
    text: String,
    anchor: TextAnchor,
    baseline: TextBaseline,
) -> ChartPrimitive {
    ChartPrimitive::Text(TextPrimitive {
        x,
        y,
        text,
        font_size: style.font_size,
        fill: style.foreground.clone(),
        anchor,
        baseline,
    })
}

/// Height of the tick-and-label band under a horizontal value axis.
pub(crate) fn horizontal_label_band(style: &ChartStyle, measurer: &dyn TextMeasurer) -> f64 {
    style.tick_length + measurer.measure("0", &text_style(style)).height
}

/// Width of the label-and-tick band left of a vertical value axis.
pub(crate) fn vertical_label_band(
    scale: &AxisScale,
    style: &ChartStyle,
    measurer: &dyn TextMeasurer,
) -> f64 {
    let ts = text_style(style);
    let widest = scale
        .labels
        .iter()
        .map(|v| measurer.measure(&format_value(*v), &ts).width)
        .fold(0.0, f64::max);
    widest + LABEL_GAP + style.tick_length
}

/// Ticks hanging below `plot` with centered labels, for values running left to right.
pub(crate) fn push_horizontal_labels(
    out: &mut Vec<ChartPrimitive>,
    scale: &AxisScale,
    plot: Frame,
    style: &ChartStyle,
) {
    let y = plot.bottom();
    for &v in &scale.labels {
        let x = plot.x + scale.range.fraction(v) * plot.width;
        out.push(tick(style, x, y, x, y + style.tick_length));
        out.push(label_text(
            style,
            x,
            y + style.tick_length,
            format_value(v),
            TextAnchor::Middle,
            TextBaseline::Top,
        ));
    }
}

/// Ticks left of `plot` with right-aligned labels, for values running bottom to top.
pub(crate) fn push_vertical_labels(
    out: &mut Vec<ChartPrimitive>,
    scale: &AxisScale,
    plot: Frame,
    style: &ChartStyle,
) {
    for &v in &scale.labels {
        let y = plot.y + (1.0 - scale.range.fraction(v)) * plot.height;
        out.push(label_text(
            style,
            plot.x - style.tick_length - LABEL_GAP,
            y,
            format_value(v),
            TextAnchor::End,
            TextBaseline::Middle,
        ));
        out.push(tick(style, plot.x - style.tick_length, y, plot.x, y));
    }
}
