use serde_json::json;

#[test]
fn core_api_is_reexported() {
    let attrs = arcpop::AttributeMap::from_json_value(&json!({ "NAME": "Oak" })).unwrap();
    assert_eq!(
        arcpop::resolve_template(Some(&attrs), Some("Tree: {NAME}")).as_deref(),
        Some("Tree: Oak")
    );
    assert_eq!(arcpop::strip_to_plain_text("a<br>b"), "a$LINEBREAK$b");
}

#[cfg(feature = "render")]
mod render {
    use arcpop::render::{ChartRenderer, sanitize_chart_id};
    use arcpop::{ChartKind, Series};

    #[test]
    fn chart_ids_are_sanitized() {
        assert_eq!(sanitize_chart_id("  my chart "), "my-chart");
        assert_eq!(sanitize_chart_id("1st"), "c-1st");
        assert_eq!(sanitize_chart_id("///"), "c-untitled");
    }

    #[test]
    fn renderer_uses_chart_id() {
        let series: Series = [("A", 1.0), ("B", 2.0)].into_iter().collect();
        let svg = ChartRenderer::new().render_svg_with_chart_id(ChartKind::Pie, &series, "pie 1");
        assert!(svg.starts_with(r#"<svg id="pie-1""#));
    }

    #[test]
    fn renderer_reports_unknown_kinds() {
        let err = ChartRenderer::new()
            .render_svg_from_json("radar", "A", r#"{"A": 1}"#)
            .unwrap_err();
        assert!(err.to_string().contains("radar"));
    }
}
