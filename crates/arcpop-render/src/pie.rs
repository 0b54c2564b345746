//! Pie chart over the positive entries of a series.

use crate::axis::tooltip;
use crate::format::{fmt_coord, format_percent, format_value};
use crate::model::{
    ChartLayout, ChartPrimitive, EllipsePrimitive, Frame, PathPrimitive, Stretch, ViewBox,
};
use crate::style::ChartStyle;
use arcpop_core::{ChartKind, Series};
use std::f64::consts::TAU;

/// Angle of the first wedge edge, in radians clockwise from 3 o'clock.
const START_ANGLE: f64 = 0.0;

/// Zero-length figures pinning the path bounds to the 2x2 box around the unit circle.
const CIRCLE_ANCHORS: &str = "M0,0L0,0M2,2L2,2";

fn circle_point(angle: f64) -> (String, String) {
    (fmt_coord(angle.cos() + 1.0), fmt_coord(angle.sin() + 1.0))
}

fn wedge_path(a0: f64, a1: f64, large_arc: bool) -> String {
    let (x0, y0) = circle_point(a0);
    let (x1, y1) = circle_point(a1);
    let large = u8::from(large_arc);
    format!("{CIRCLE_ANCHORS}M1,1L{x0},{y0}A1,1,0,{large},1,{x1},{y1}L1,1Z")
}

fn outline_path(a0: f64) -> String {
    let (x0, y0) = circle_point(a0);
    format!("{CIRCLE_ANCHORS}M1,1L{x0},{y0}")
}

/// Wedges are sized by each positive value's share of the positive total. Non-positive entries
/// are skipped but still consume their palette color, so wedge colors stay tied to series
/// position. A lone positive value is drawn as a full circle in the first palette color.
pub fn layout_pie_chart(series: &Series, style: &ChartStyle) -> ChartLayout {
    let positive: Vec<(usize, &str, f64)> = series
        .iter()
        .enumerate()
        .filter(|(_, (_, v))| *v > 0.0)
        .map(|(i, (label, v))| (i, label, v))
        .collect();
    let total: f64 = positive.iter().map(|(_, _, v)| v).sum();
    if positive.is_empty() || !(total > 0.0) || !total.is_finite() {
        tracing::debug!(entries = series.len(), "pie chart has no positive values");
        return ChartLayout::empty(ChartKind::Pie, style.width, style.height);
    }

    let frame = Frame {
        x: 0.0,
        y: 0.0,
        width: style.width,
        height: style.height,
    };
    let mut primitives = Vec::with_capacity(positive.len() * 2);

    if let [(_, label, v)] = positive.as_slice() {
        let radius = style.width.min(style.height) / 2.0;
        primitives.push(ChartPrimitive::Ellipse(EllipsePrimitive {
            cx: frame.x + frame.width / 2.0,
            cy: frame.y + frame.height / 2.0,
            rx: radius,
            ry: radius,
            fill: style.color(0).to_string(),
            stroke: None,
            stroke_width: 0.0,
            tooltip: Some(tooltip(label, &format!("{} (100%)", format_value(*v)))),
        }));
    } else {
        let mut current = 0.0;
        for &(index, label, v) in &positive {
            let fraction = v / total;
            let a0 = TAU * current + START_ANGLE;
            let a1 = TAU * (current + fraction) + START_ANGLE;
            let value_text = format!("{} ({})", format_value(v), format_percent(fraction));
            primitives.push(ChartPrimitive::Path(PathPrimitive {
                d: wedge_path(a0, a1, fraction > 0.5),
                view_box: ViewBox {
                    width: 2.0,
                    height: 2.0,
                },
                frame,
                stretch: Stretch::Uniform,
                fill: Some(style.color(index).to_string()),
                stroke: None,
                stroke_width: 0.0,
                round_join: false,
                tooltip: Some(tooltip(label, &value_text)),
            }));
            primitives.push(ChartPrimitive::Path(PathPrimitive {
                d: outline_path(a0),
                view_box: ViewBox {
                    width: 2.0,
                    height: 2.0,
                },
                frame,
                stretch: Stretch::Uniform,
                fill: None,
                stroke: Some(style.slice_outline.clone()),
                stroke_width: 1.0,
                round_join: false,
                tooltip: None,
            }));
            current += fraction;
        }
    }

    ChartLayout {
        kind: ChartKind::Pie,
        width: style.width,
        height: style.height,
        range: None,
        labels: Vec::new(),
        primitives,
    }
}
