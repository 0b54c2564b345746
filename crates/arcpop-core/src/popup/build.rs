use super::model::{
    AttributeRow, AttributeRowValue, ChartMedia, ImageMedia, MediaBody, MediaContent, MediaInfo,
    MediaType, PopupContent, PopupInfo,
};
use crate::attributes::{AttributeMap, AttributeValue};
use crate::html::{Inline, to_styled_runs};
use crate::series::{ChartFields, FieldLabels, extract_series};
use crate::template::{resolve_template, resolve_template_uri, template_to_inlines};
use url::Url;

fn non_blank(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.trim().is_empty())
}

/// Assembles the popup for one feature.
///
/// With a description template the body is the rendered description and no attribute list is
/// produced; otherwise every visible field becomes a row. The title falls back, in order, to the
/// description, the first visible field's value, and the first media title or caption.
pub fn build_popup(info: &PopupInfo, attributes: Option<&AttributeMap>) -> PopupContent {
    let mut content = PopupContent::default();
    let mut has_title = false;

    if let Some(title) = non_blank(&info.title) {
        content.title = template_to_inlines(attributes, Some(title));
        has_title = true;
    }

    match non_blank(&info.description) {
        Some(description) => {
            if !has_title {
                content.title = template_to_inlines(attributes, Some(description));
                has_title = true;
            }
            let html = resolve_template(attributes, Some(description));
            content.description = Some(html.as_deref().map(to_styled_runs).unwrap_or_default());
        }
        None => {
            for field in info.field_infos.iter().filter(|f| f.visible) {
                let value = attributes.and_then(|a| a.get(&field.field_name));
                if !has_title {
                    let text = value.map(ToString::to_string).unwrap_or_default();
                    if !text.is_empty() {
                        content.title = vec![Inline::plain(text)];
                    }
                    has_title = true;
                }
                content.attributes.push(AttributeRow {
                    field_name: field.field_name.clone(),
                    label: field.display_label().to_string(),
                    value: row_value(&field.field_name, value),
                });
            }
        }
    }

    let labels: FieldLabels = info
        .field_infos
        .iter()
        .map(|f| (f.field_name.clone(), f.display_label().to_string()))
        .collect();

    for media in &info.media_infos {
        let item = build_media(media, attributes, &labels);
        if !has_title {
            for text in [media.title.as_deref(), media.caption.as_deref()] {
                let inlines = template_to_inlines(attributes, text);
                if !inlines.is_empty() {
                    content.title = inlines;
                    has_title = true;
                    break;
                }
            }
        }
        content.media.push(item);
    }

    if !has_title {
        tracing::debug!("popup has no title source");
    }
    content
}

fn row_value(field_name: &str, value: Option<&AttributeValue>) -> AttributeRowValue {
    let text = value.map(ToString::to_string).unwrap_or_default();
    let looks_like_link = matches!(value, Some(AttributeValue::Text(s)) if s.starts_with("http"))
        || field_name.eq_ignore_ascii_case("url");
    if looks_like_link {
        match Url::parse(text.trim()) {
            Ok(href) => return AttributeRowValue::Link { text, href },
            Err(err) => tracing::debug!(field = field_name, %err, "link attribute is not a URL"),
        }
    }
    AttributeRowValue::Text { text }
}

fn build_media(
    media: &MediaInfo,
    attributes: Option<&AttributeMap>,
    labels: &FieldLabels,
) -> MediaContent {
    let title = resolve_template(attributes, media.title.as_deref());
    let caption = resolve_template(attributes, media.caption.as_deref());

    let body = if let Some(kind) = media.media_type.chart_kind() {
        let fields =
            ChartFields::from_parts(&media.value.fields, media.value.normalize_field.as_deref());
        let series = attributes
            .map(|a| extract_series(a, &fields, Some(labels)))
            .unwrap_or_default();
        Some(MediaBody::Chart(ChartMedia {
            kind,
            fields: fields.to_string(),
            labels: labels.clone(),
            series,
        }))
    } else if media.media_type == MediaType::Image {
        Some(MediaBody::Image(ImageMedia {
            source: resolve_template_uri(attributes, media.value.source_url.as_deref()),
            link: resolve_template_uri(attributes, media.value.link_url.as_deref()),
        }))
    } else {
        tracing::debug!(media_type = ?media.media_type, "unsupported media type");
        None
    };

    MediaContent {
        title,
        caption,
        body,
    }
}

/// Short title for a popup in list views: the title template, or the first media title when the
/// popup has none.
pub fn popup_summary_title(info: &PopupInfo, attributes: Option<&AttributeMap>) -> Option<String> {
    let template = non_blank(&info.title)
        .or_else(|| info.media_infos.first().and_then(|m| non_blank(&m.title)))?;
    resolve_template(attributes, Some(template))
}
