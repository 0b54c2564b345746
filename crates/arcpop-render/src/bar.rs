//! Horizontal bar chart: one row per series entry, values along the x axis.

use crate::axis::{axis_line, horizontal_label_band, push_horizontal_labels, tooltip};
use crate::format::format_value;
use crate::model::{ChartLayout, ChartPrimitive, Frame, RectPrimitive};
use crate::range::AxisScale;
use crate::style::ChartStyle;
use crate::text::TextMeasurer;
use arcpop_core::{ChartKind, Series};

const MARGIN_LEFT: f64 = 10.0;
const MARGIN_RIGHT: f64 = 20.0;

pub fn layout_bar_chart(
    series: &Series,
    style: &ChartStyle,
    measurer: &dyn TextMeasurer,
) -> ChartLayout {
    if series.is_empty() {
        return ChartLayout::empty(ChartKind::Bar, style.width, style.height);
    }

    let scale = AxisScale::for_values(series.values(), style.bar_label_count);
    let band = horizontal_label_band(style, measurer);
    let plot = Frame {
        x: MARGIN_LEFT,
        y: 0.0,
        width: (style.width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
        height: (style.height - band).max(0.0),
    };
    let x_at = |v: f64| plot.x + scale.range.fraction(v) * plot.width;

    let mut primitives = Vec::with_capacity(3 + scale.labels.len() * 2 + series.len() * 2);
    primitives.push(axis_line(
        style,
        plot.x - style.axis_overhang,
        plot.bottom(),
        plot.right() + style.axis_overhang,
        plot.bottom(),
    ));
    push_horizontal_labels(&mut primitives, &scale, plot, style);

    let row_height = plot.height / series.len() as f64;
    let zero_x = x_at(0.0);
    for (i, (label, v)) in series.iter().enumerate() {
        let row_y = plot.y + i as f64 * row_height;
        let mut start = x_at(v.min(0.0));
        let mut end = x_at(v.max(0.0));
        if end - start < style.min_bar_size {
            if v > 0.0 || (v == 0.0 && scale.range.min >= 0.0) {
                end = start + style.min_bar_size;
            } else {
                start = end - style.min_bar_size;
            }
        }
        primitives.push(ChartPrimitive::Rect(RectPrimitive {
            x: start,
            y: row_y + style.bar_margin,
            width: end - start,
            height: (row_height - 2.0 * style.bar_margin).max(0.0),
            fill: style.color(0).to_string(),
            tooltip: Some(tooltip(label, &format_value(v))),
        }));
        primitives.push(axis_line(
            style,
            zero_x,
            row_y - style.axis_overhang,
            zero_x,
            row_y + row_height + style.axis_overhang,
        ));
    }

    ChartLayout {
        kind: ChartKind::Bar,
        width: style.width,
        height: style.height,
        range: Some(scale.range),
        labels: scale.labels,
        primitives,
    }
}
