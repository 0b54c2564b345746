use crate::*;
use serde_json::json;

fn park() -> AttributeMap {
    AttributeMap::from_json_value(&json!({
        "NAME": "Park",
        "POP": 1200,
        "URL": "http://example.com",
        "WEB": "not a link",
        "SITE": "https://parks.example.com/p/5",
        "A": 1,
        "B": 2,
        "ID": 5
    }))
    .unwrap()
}

fn info(value: serde_json::Value) -> PopupInfo {
    PopupInfo::from_json_value(value).unwrap()
}

#[test]
fn description_mode_renders_html_and_skips_rows() {
    let info = info(json!({
        "title": "{NAME}",
        "description": "<b>{NAME}</b> pop {POP}",
        "fieldInfos": [{ "fieldName": "NAME", "label": "Name", "visible": true }]
    }));
    let content = build_popup(&info, Some(&park()));
    assert_eq!(content.title, vec![Inline::plain("Park")]);
    assert_eq!(
        content.description,
        Some(vec![
            Inline::Run(StyledRun {
                text: "Park".to_string(),
                weight: FontWeight::SemiBold,
                italic: false,
            }),
            Inline::plain(" pop 1200"),
        ])
    );
    assert!(content.attributes.is_empty());
}

#[test]
fn description_supplies_title_when_title_is_blank() {
    let info = info(json!({ "title": "  ", "description": "{NAME}<br/>more" }));
    let content = build_popup(&info, Some(&park()));
    assert_eq!(
        content.title,
        vec![Inline::plain("Park"), Inline::LineBreak, Inline::plain("more")]
    );
}

#[test]
fn attribute_list_mode_rows_and_links() {
    let info = info(json!({
        "fieldInfos": [
            { "fieldName": "NAME", "label": "Name" },
            { "fieldName": "POP", "visible": false },
            { "fieldName": "URL", "label": "" },
            { "fieldName": "WEB", "label": "Web" },
            { "fieldName": "SITE", "label": "Site" },
            { "fieldName": "MISSING", "label": "Missing" }
        ]
    }));
    let content = build_popup(&info, Some(&park()));
    assert_eq!(content.title, vec![Inline::plain("Park")]);
    assert_eq!(content.description, None);

    let rows: Vec<(&str, &str)> = content
        .attributes
        .iter()
        .map(|r| (r.label.as_str(), r.value.text()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Name", "Park"),
            ("URL", "http://example.com"),
            ("Web", "not a link"),
            ("Site", "https://parks.example.com/p/5"),
            ("Missing", ""),
        ]
    );
    assert!(matches!(
        &content.attributes[1].value,
        AttributeRowValue::Link { href, .. } if href.as_str() == "http://example.com/"
    ));
    assert!(matches!(
        content.attributes[2].value,
        AttributeRowValue::Text { .. }
    ));
    assert!(matches!(
        content.attributes[3].value,
        AttributeRowValue::Link { .. }
    ));
}

#[test]
fn chart_media_builds_field_parameter_and_series() {
    let info = info(json!({
        "title": "{NAME}",
        "fieldInfos": [{ "fieldName": "A", "label": "Alpha", "visible": false }],
        "mediaInfos": [{
            "title": "Counts for {NAME}",
            "type": "columnchart",
            "value": { "fields": ["A", "B"], "normalizeField": "null" }
        }]
    }));
    let content = build_popup(&info, Some(&park()));
    assert_eq!(content.media.len(), 1);
    let media = &content.media[0];
    assert_eq!(media.title.as_deref(), Some("Counts for Park"));
    let Some(MediaBody::Chart(chart)) = &media.body else {
        panic!("expected chart media, got {:?}", media.body);
    };
    assert_eq!(chart.kind, ChartKind::Column);
    assert_eq!(chart.fields, "A,B");
    let points: Vec<(&str, f64)> = chart.series.iter().collect();
    assert_eq!(points, vec![("Alpha", 1.0), ("B", 2.0)]);
}

#[test]
fn normalized_chart_field_parameter() {
    let info = info(json!({
        "mediaInfos": [{
            "type": "piechart",
            "value": { "fields": ["A"], "normalizeField": "B" }
        }]
    }));
    let content = build_popup(&info, Some(&park()));
    let Some(MediaBody::Chart(chart)) = &content.media[0].body else {
        panic!("expected chart media");
    };
    assert_eq!(chart.fields, "A_::_B");
    assert_eq!(chart.series.get("A"), Some(0.5));
}

#[test]
fn image_media_and_media_title_fallback() {
    let info = info(json!({
        "mediaInfos": [
            { "type": "video" },
            {
                "caption": "Photo of {NAME}",
                "type": "image",
                "value": {
                    "sourceURL": "http://img.example.com/{ID}.png",
                    "linkURL": "relative/{ID}"
                }
            }
        ]
    }));
    let content = build_popup(&info, Some(&park()));
    assert_eq!(content.title, vec![Inline::plain("Photo of Park")]);
    assert_eq!(content.media[0].body, None);
    let Some(MediaBody::Image(image)) = &content.media[1].body else {
        panic!("expected image media");
    };
    assert_eq!(
        image.source.as_ref().map(|u| u.as_str()),
        Some("http://img.example.com/5.png")
    );
    assert_eq!(image.link, None);
}

#[test]
fn summary_title_prefers_title_then_first_media_title() {
    let attrs = park();
    let with_title = info(json!({ "title": "{NAME}", "mediaInfos": [{ "title": "m", "type": "image" }] }));
    assert_eq!(
        popup_summary_title(&with_title, Some(&attrs)).as_deref(),
        Some("Park")
    );
    let media_only = info(json!({ "mediaInfos": [{ "title": "Pop {POP}", "type": "image" }] }));
    assert_eq!(
        popup_summary_title(&media_only, Some(&attrs)).as_deref(),
        Some("Pop 1200")
    );
    assert_eq!(popup_summary_title(&PopupInfo::default(), Some(&attrs)), None);
}

#[test]
fn missing_attributes_yield_empty_content() {
    let info = info(json!({ "title": "{NAME}", "description": "x" }));
    let content = build_popup(&info, None);
    assert!(content.title.is_empty());
    assert_eq!(content.description, Some(Vec::new()));
}

#[test]
fn popup_from_json_documents() {
    let content = build_popup_from_json(
        r#"{ "title": "{NAME}" }"#,
        r#"{ "NAME": "Lake" }"#,
    )
    .unwrap();
    assert_eq!(inlines_to_text(&content.title), "Lake");

    assert!(matches!(
        build_popup_from_json("[]", "{}").unwrap_err(),
        Error::InvalidPopupInfo { found: "an array" }
    ));
    assert!(matches!(
        build_popup_from_json("{}", "\"x\"").unwrap_err(),
        Error::InvalidAttributes { found: "a string" }
    ));
}
