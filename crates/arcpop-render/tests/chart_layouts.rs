use arcpop_core::{ChartKind, Series};
use arcpop_render::model::{ChartPrimitive, EllipsePrimitive, PathPrimitive, RectPrimitive, Stretch};
use arcpop_render::range::Range;
use arcpop_render::style::DEFAULT_PALETTE;
use arcpop_render::{LayoutOptions, layout_chart};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn series(points: &[(&str, f64)]) -> Series {
    points.iter().map(|(k, v)| (*k, *v)).collect()
}

fn rects(primitives: &[ChartPrimitive]) -> Vec<&RectPrimitive> {
    primitives
        .iter()
        .filter_map(|p| match p {
            ChartPrimitive::Rect(r) => Some(r),
            _ => None,
        })
        .collect()
}

fn paths(primitives: &[ChartPrimitive]) -> Vec<&PathPrimitive> {
    primitives
        .iter()
        .filter_map(|p| match p {
            ChartPrimitive::Path(r) => Some(r),
            _ => None,
        })
        .collect()
}

fn ellipses(primitives: &[ChartPrimitive]) -> Vec<&EllipsePrimitive> {
    primitives
        .iter()
        .filter_map(|p| match p {
            ChartPrimitive::Ellipse(e) => Some(e),
            _ => None,
        })
        .collect()
}

fn texts(primitives: &[ChartPrimitive]) -> Vec<&str> {
    primitives
        .iter()
        .filter_map(|p| match p {
            ChartPrimitive::Text(t) => Some(t.text.as_str()),
            _ => None,
        })
        .collect()
}

#[test]
fn empty_series_gives_empty_layout() {
    let opts = LayoutOptions::default();
    for kind in ChartKind::ALL {
        let layout = layout_chart(kind, &Series::new(), &opts);
        assert!(layout.is_empty(), "{kind} should be empty");
        assert_eq!(layout.range, None);
        assert_eq!((layout.width, layout.height), (200.0, 200.0));
    }
}

#[test]
fn bar_chart_scales_rows_against_nice_labels() {
    let layout = layout_chart(
        ChartKind::Bar,
        &series(&[("A", 500.0), ("B", 800.0)]),
        &LayoutOptions::default(),
    );
    assert_eq!(layout.labels, vec![0.0, 500.0, 1000.0]);
    assert_eq!(layout.range, Some(Range::new(0.0, 1000.0)));
    assert_eq!(texts(&layout.primitives), vec!["0", "500", "1,000"]);

    let bars = rects(&layout.primitives);
    assert_eq!(bars.len(), 2);
    // Plot spans x 10..180, rows split 183px of height.
    assert!(approx(bars[0].x, 10.0));
    assert!(approx(bars[0].width, 85.0));
    assert!(approx(bars[0].y, 2.0));
    assert!(approx(bars[0].height, 87.5));
    assert!(approx(bars[1].width, 136.0));
    assert!(approx(bars[1].y, 93.5));
    assert_eq!(bars[0].fill, DEFAULT_PALETTE[0]);
    assert_eq!(bars[1].fill, DEFAULT_PALETTE[0]);
    assert_eq!(bars[1].tooltip.as_deref(), Some("B : 800"));
}

#[test]
fn negative_bars_end_at_zero_and_small_bars_get_min_width() {
    let opts = LayoutOptions::default();
    let layout = layout_chart(ChartKind::Bar, &series(&[("A", -5.0)]), &opts);
    assert_eq!(layout.labels, vec![0.0, -5.0]);
    let bar = rects(&layout.primitives)[0];
    assert!(approx(bar.x, 10.0));
    assert!(approx(bar.x + bar.width, 180.0));

    let layout = layout_chart(ChartKind::Bar, &series(&[("A", 0.0), ("B", 100.0)]), &opts);
    let bar = rects(&layout.primitives)[0];
    assert!(approx(bar.width, 2.0));
    assert!(approx(bar.x, 10.0));
}

#[test]
fn zero_bars_grow_into_the_plot() {
    let opts = LayoutOptions::default();
    let layout = layout_chart(ChartKind::Bar, &series(&[("A", 0.0), ("B", -100.0)]), &opts);
    let bar = rects(&layout.primitives)[0];
    assert!(approx(bar.width, 2.0));
    assert!(approx(bar.x + bar.width, 180.0));

    let layout = layout_chart(ChartKind::Column, &series(&[("A", 0.0), ("B", 20.0)]), &opts);
    let col = rects(&layout.primitives)[0];
    assert!(approx(col.height, 2.0));
    assert!(approx(col.y + col.height, 190.0));

    let layout = layout_chart(ChartKind::Column, &series(&[("A", 0.0), ("B", -20.0)]), &opts);
    let col = rects(&layout.primitives)[0];
    assert!(approx(col.height, 2.0));
    assert!(approx(col.y, 10.0));
}

#[test]
fn column_chart_reserves_label_band() {
    let layout = layout_chart(
        ChartKind::Column,
        &series(&[("A", 10.0), ("B", 20.0)]),
        &LayoutOptions::default(),
    );
    assert_eq!(layout.labels, vec![0.0, 10.0, 20.0]);
    let cols = rects(&layout.primitives);
    // Label band: widest label "10" (12px) + gap 2 + tick 5.
    assert!(approx(cols[0].x, 21.0));
    assert!(approx(cols[0].width, 86.5));
    assert!(approx(cols[0].y, 100.0));
    assert!(approx(cols[0].height, 90.0));
    assert!(approx(cols[1].y, 10.0));
    assert!(approx(cols[1].height, 180.0));
}

#[test]
fn negative_columns_hang_below_zero() {
    let layout = layout_chart(
        ChartKind::Column,
        &series(&[("A", 20.0), ("B", -20.0)]),
        &LayoutOptions::default(),
    );
    let cols = rects(&layout.primitives);
    assert!(approx(cols[0].y + cols[0].height, cols[1].y));
    assert!(cols[1].height > 2.0);
}

#[test]
fn line_chart_path_uses_unit_box_with_anchors() {
    let layout = layout_chart(
        ChartKind::Line,
        &series(&[("A", 1.0), ("B", 3.0)]),
        &LayoutOptions::default(),
    );
    assert_eq!(layout.labels, vec![0.0, 1.0, 2.0, 3.0]);

    let path = paths(&layout.primitives)[0];
    assert_eq!(path.d, "M0,0L0,0M1,1L1,1M0.25,0.667L0.75,0");
    assert_eq!(path.stretch, Stretch::Fill);
    assert!(path.round_join);
    assert!(path.fill.is_none());
    assert!(approx(path.frame.x, 13.0));
    assert!(approx(path.frame.width, 187.0));

    let points = ellipses(&layout.primitives);
    assert_eq!(points.len(), 2);
    assert!(approx(points[0].cx, 13.0 + 0.25 * 187.0));
    assert!(approx(points[0].cy, 130.0));
    assert!(approx(points[1].cy, 10.0));
    assert_eq!(points[0].rx, 5.0);
    assert_eq!(points[1].tooltip.as_deref(), Some("B : 3"));
}

#[test]
fn pie_wedges_follow_cumulative_fractions() {
    let layout = layout_chart(
        ChartKind::Pie,
        &series(&[("A", 1.0), ("B", 1.0), ("C", 2.0)]),
        &LayoutOptions::default(),
    );
    let paths = paths(&layout.primitives);
    assert_eq!(paths.len(), 6);
    assert_eq!(paths[0].d, "M0,0L0,0M2,2L2,2M1,1L2,1A1,1,0,0,1,1,2L1,1Z");
    assert_eq!(paths[1].d, "M0,0L0,0M2,2L2,2M1,1L2,1");
    assert_eq!(paths[1].stroke.as_deref(), Some("#FFFFFF"));
    assert_eq!(paths[4].tooltip.as_deref(), Some("C : 2 (50%)"));
    assert_eq!(paths[4].fill.as_deref(), Some(DEFAULT_PALETTE[2]));
    assert!(paths.iter().all(|p| p.stretch == Stretch::Uniform));
}

#[test]
fn pie_large_arc_flag_for_majority_slice() {
    let layout = layout_chart(
        ChartKind::Pie,
        &series(&[("A", 3.0), ("B", 1.0)]),
        &LayoutOptions::default(),
    );
    let paths = paths(&layout.primitives);
    assert!(paths[0].d.contains("A1,1,0,1,1,"));
    assert!(paths[2].d.contains("A1,1,0,0,1,"));
    assert_eq!(paths[0].tooltip.as_deref(), Some("A : 3 (75%)"));
}

#[test]
fn pie_skips_non_positive_entries_but_keeps_their_colors() {
    let layout = layout_chart(
        ChartKind::Pie,
        &series(&[("A", -1.0), ("B", 3.0), ("C", 1.0)]),
        &LayoutOptions::default(),
    );
    let paths = paths(&layout.primitives);
    assert_eq!(paths.len(), 4);
    assert_eq!(paths[0].fill.as_deref(), Some(DEFAULT_PALETTE[1]));
    assert_eq!(paths[2].fill.as_deref(), Some(DEFAULT_PALETTE[2]));
}

#[test]
fn pie_with_single_positive_value_is_a_circle() {
    let layout = layout_chart(
        ChartKind::Pie,
        &series(&[("A", 0.0), ("B", -1.0), ("C", 5.0)]),
        &LayoutOptions::default(),
    );
    assert_eq!(layout.primitives.len(), 1);
    let circle = ellipses(&layout.primitives)[0];
    assert_eq!((circle.cx, circle.cy, circle.rx, circle.ry), (100.0, 100.0, 100.0, 100.0));
    assert_eq!(circle.fill, DEFAULT_PALETTE[0]);
    assert_eq!(circle.tooltip.as_deref(), Some("C : 5 (100%)"));
}

#[test]
fn pie_without_positive_values_is_empty() {
    let layout = layout_chart(
        ChartKind::Pie,
        &series(&[("A", 0.0), ("B", -2.0)]),
        &LayoutOptions::default(),
    );
    assert!(layout.is_empty());
}
