//! Property-based invariant tests for popup HTML and templates.
//!
//! Verifies:
//! 1. The inline builder never emits more than two consecutive line breaks
//! 2. Plain-text stripping escapes every `{` when brace escaping is on
//! 3. Stripped text never contains a recognized tag
//! 4. Templates without braces, entities or markers resolve to themselves
//! 5. Series extraction keeps labels unique and values finite

use arcpop_core::{
    AttributeMap, AttributeValue, ChartFields, Inline, extract_series, resolve_template,
    strip_to_plain_text, to_styled_runs,
};
use proptest::prelude::*;

// ── Strategy helpers ──────────────────────────────────────────────────

fn arb_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("<br/>".to_string()),
        Just("[br/]".to_string()),
        Just("<p>".to_string()),
        Just("</p>".to_string()),
        Just("<div>".to_string()),
        Just("</div>".to_string()),
        Just("<b>".to_string()),
        Just("</b>".to_string()),
        Just("<ul>".to_string()),
        Just("</ul>".to_string()),
        Just("<ol>".to_string()),
        Just("</ol>".to_string()),
        Just("<li>".to_string()),
        Just("</li>".to_string()),
        Just("<a href='http://example.com/x'>".to_string()),
        Just("</a>".to_string()),
        Just("<img src='http://example.com/i.png'/>".to_string()),
        Just("<font>".to_string()),
        Just("{".to_string()),
        Just("<".to_string()),
        "[a-z /&;]{0,12}",
    ]
}

fn arb_html() -> impl Strategy<Value = String> {
    prop::collection::vec(arb_fragment(), 0..24).prop_map(|parts| parts.concat())
}

fn arb_attribute() -> impl Strategy<Value = AttributeValue> {
    prop_oneof![
        Just(AttributeValue::Null),
        any::<bool>().prop_map(AttributeValue::Bool),
        (-1.0e9f64..1.0e9).prop_map(AttributeValue::Number),
        "[0-9,. a-z-]{0,8}".prop_map(AttributeValue::Text),
    ]
}

proptest! {
    #[test]
    fn inline_breaks_are_capped(html in arb_html()) {
        let inlines = to_styled_runs(&html);
        let mut run = 0;
        for inline in &inlines {
            if matches!(inline, Inline::LineBreak) {
                run += 1;
                prop_assert!(run <= 2, "more than two breaks in {:?}", inlines);
            } else if !matches!(inline, Inline::Image(_)) {
                run = 0;
            }
        }
    }

    #[test]
    fn stripped_braces_are_escaped(html in arb_html()) {
        let text = strip_to_plain_text(&html);
        let chars: Vec<char> = text.chars().collect();
        for (i, c) in chars.iter().enumerate() {
            if *c == '{' {
                prop_assert!(i > 0 && chars[i - 1] == '\\');
            }
        }
    }

    #[test]
    fn stripped_text_has_no_recognized_tags(html in arb_html()) {
        let text = strip_to_plain_text(&html).to_ascii_lowercase();
        for tag in ["<br/>", "<p>", "</p>", "<b>", "<li>", "</a>", "<font>"] {
            prop_assert!(!text.contains(tag), "{tag} survived in {text:?}");
        }
    }

    #[test]
    fn plain_templates_resolve_to_themselves(template in "[a-zA-Z0-9 .,:!?]{1,40}") {
        prop_assume!(!template.trim().is_empty());
        let attrs = AttributeMap::new();
        prop_assert_eq!(resolve_template(Some(&attrs), Some(&template)), Some(template.clone()));
    }

    #[test]
    fn series_labels_unique_and_values_finite(
        values in prop::collection::vec(arb_attribute(), 0..10),
        normalize in arb_attribute(),
    ) {
        let mut attrs: AttributeMap = values
            .into_iter()
            .enumerate()
            .map(|(i, v)| (format!("F{i}"), v))
            .collect();
        attrs.insert("NORM", normalize);
        let names: Vec<String> = attrs.iter().map(|(k, _)| k.to_string()).collect();
        let fields = ChartFields::from_parts(&names, Some("NORM"));
        let series = extract_series(&attrs, &fields, None);
        prop_assert!(series.len() <= names.len());
        for (_, v) in series.iter() {
            prop_assert!(v.is_finite());
        }
    }
}
