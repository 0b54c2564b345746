use crate::model::{MediaLayout, PopupLayout};
use crate::{LayoutOptions, layout_chart};
use arcpop_core::{MediaBody, PopupContent};

/// Lays out every chart in a popup; text and image content pass through unchanged.
pub fn layout_popup(content: &PopupContent, options: &LayoutOptions) -> PopupLayout {
    let media = content
        .media
        .iter()
        .map(|m| {
            let (image, chart) = match &m.body {
                Some(MediaBody::Image(image)) => (Some(image.clone()), None),
                Some(MediaBody::Chart(chart)) => {
                    (None, Some(layout_chart(chart.kind, &chart.series, options)))
                }
                None => (None, None),
            };
            MediaLayout {
                title: m.title.clone(),
                caption: m.caption.clone(),
                image,
                chart,
            }
        })
        .collect();

    PopupLayout {
        title: content.title.clone(),
        description: content.description.clone(),
        attributes: content.attributes.clone(),
        media,
    }
}
