//! Vertical column chart: one column per series entry, values along the y axis.

use crate::axis::{axis_line, push_vertical_labels, tooltip, vertical_label_band};
use crate::format::format_value;
use crate::model::{ChartLayout, ChartPrimitive, Frame, RectPrimitive};
use crate::range::AxisScale;
use crate::style::ChartStyle;
use crate::text::TextMeasurer;
use arcpop_core::{ChartKind, Series};

const MARGIN_TOP: f64 = 10.0;
const MARGIN_BOTTOM: f64 = 10.0;

/// Plot area right of the value labels, shared with the line layout.
pub(crate) fn vertical_plot(
    scale: &AxisScale,
    style: &ChartStyle,
    measurer: &dyn TextMeasurer,
) -> Frame {
    let band = vertical_label_band(scale, style, measurer).min(style.width);
    Frame {
        x: band,
        y: MARGIN_TOP,
        width: (style.width - band).max(0.0),
        height: (style.height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
    }
}

pub fn layout_column_chart(
    series: &Series,
    style: &ChartStyle,
    measurer: &dyn TextMeasurer,
) -> ChartLayout {
    if series.is_empty() {
        return ChartLayout::empty(ChartKind::Column, style.width, style.height);
    }

    let scale = AxisScale::for_values(series.values(), style.column_label_count);
    let plot = vertical_plot(&scale, style, measurer);
    let y_at = |v: f64| plot.y + (1.0 - scale.range.fraction(v)) * plot.height;

    let mut primitives = Vec::with_capacity(1 + scale.labels.len() * 2 + series.len() * 2);
    primitives.push(axis_line(
        style,
        plot.x,
        plot.y - style.axis_overhang,
        plot.x,
        plot.bottom() + style.axis_overhang,
    ));
    push_vertical_labels(&mut primitives, &scale, plot, style);

    let column_width = plot.width / series.len() as f64;
    let zero_y = y_at(0.0);
    for (i, (label, v)) in series.iter().enumerate() {
        let col_x = plot.x + i as f64 * column_width;
        let mut top = y_at(v.max(0.0));
        let mut bottom = y_at(v.min(0.0));
        if bottom - top < style.min_bar_size {
            if v > 0.0 || (v == 0.0 && scale.range.min >= 0.0) {
                top = bottom - style.min_bar_size;
            } else {
                bottom = top + style.min_bar_size;
            }
        }
        primitives.push(ChartPrimitive::Rect(RectPrimitive {
            x: col_x + style.bar_margin,
            y: top,
            width: (column_width - 2.0 * style.bar_margin).max(0.0),
            height: bottom - top,
            fill: style.color(0).to_string(),
            tooltip: Some(tooltip(label, &format_value(v))),
        }));
        primitives.push(axis_line(
            style,
            col_x - style.axis_overhang,
            zero_y,
            col_x + column_width + style.axis_overhang,
            zero_y,
        ));
    }

    ChartLayout {
        kind: ChartKind::Column,
        width: style.width,
        height: style.height,
        range: Some(scale.range),
        labels: scale.labels,
        primitives,
    }
}
