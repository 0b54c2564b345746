//! Line chart: a polyline through one point per series entry, with a marker at each point.

use crate::axis::{axis_line, push_vertical_labels, tooltip};
use crate::column::vertical_plot;
use crate::format::{fmt_coord, format_value};
use crate::model::{
    ChartLayout, ChartPrimitive, EllipsePrimitive, PathPrimitive, Stretch, ViewBox,
};
use crate::range::AxisScale;
use crate::style::ChartStyle;
use crate::text::TextMeasurer;
use arcpop_core::{ChartKind, Series};
use std::fmt::Write as _;

/// Zero-length figures pinning the path bounds to the unit box.
const UNIT_ANCHORS: &str = "M0,0L0,0M1,1L1,1";

pub fn layout_line_chart(
    series: &Series,
    style: &ChartStyle,
    measurer: &dyn TextMeasurer,
) -> ChartLayout {
    if series.is_empty() {
        return ChartLayout::empty(ChartKind::Line, style.width, style.height);
    }

    let scale = AxisScale::for_values(series.values(), style.line_label_count);
    let plot = vertical_plot(&scale, style, measurer);
    let n = series.len() as f64;
    let zero_y = plot.y + (1.0 - scale.range.fraction(0.0)) * plot.height;

    let mut primitives = Vec::with_capacity(3 + scale.labels.len() * 2 + series.len());
    primitives.push(axis_line(
        style,
        plot.x - style.axis_overhang,
        zero_y,
        plot.right() + style.axis_overhang,
        zero_y,
    ));
    primitives.push(axis_line(
        style,
        plot.x,
        plot.y - style.axis_overhang,
        plot.x,
        plot.bottom() + style.axis_overhang,
    ));
    push_vertical_labels(&mut primitives, &scale, plot, style);

    let points: Vec<(f64, f64)> = series
        .iter()
        .enumerate()
        .map(|(i, (_, v))| {
            let ux = (2.0 * i as f64 + 1.0) / (2.0 * n);
            let uy = 1.0 - scale.range.fraction(v);
            (ux, uy)
        })
        .collect();

    let mut d = String::from(UNIT_ANCHORS);
    for (i, (ux, uy)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(&mut d, "{cmd}{},{}", fmt_coord(*ux), fmt_coord(*uy));
    }
    primitives.push(ChartPrimitive::Path(PathPrimitive {
        d,
        view_box: ViewBox {
            width: 1.0,
            height: 1.0,
        },
        frame: plot,
        stretch: Stretch::Fill,
        fill: None,
        stroke: Some(style.color(0).to_string()),
        stroke_width: style.line_width,
        round_join: true,
        tooltip: None,
    }));

    for ((label, v), (ux, uy)) in series.iter().zip(points) {
        primitives.push(ChartPrimitive::Ellipse(EllipsePrimitive {
            cx: plot.x + ux * plot.width,
            cy: plot.y + uy * plot.height,
            rx: style.point_radius,
            ry: style.point_radius,
            fill: style.color(0).to_string(),
            stroke: Some(style.foreground.clone()),
            stroke_width: 1.0,
            tooltip: Some(tooltip(label, &format_value(v))),
        }));
    }

    ChartLayout {
        kind: ChartKind::Line,
        width: style.width,
        height: style.height,
        range: Some(scale.range),
        labels: scale.labels,
        primitives,
    }
}
