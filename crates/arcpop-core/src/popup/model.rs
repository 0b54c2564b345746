use crate::error::{Error, Result, json_kind};
use crate::html::Inline;
use crate::series::{ChartKind, FieldLabels, Series};
use serde::{Deserialize, Serialize};
use url::Url;

/// Popup definition attached to a web map layer (`popupInfo`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub field_infos: Vec<FieldInfo>,
    #[serde(default)]
    pub media_infos: Vec<MediaInfo>,
}

impl PopupInfo {
    pub fn from_json_value(value: serde_json::Value) -> Result<Self> {
        if !value.is_object() {
            return Err(Error::InvalidPopupInfo {
                found: json_kind(&value),
            });
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json_value(serde_json::from_str(text)?)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub field_name: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

impl FieldInfo {
    /// The label, or the field name when no label is set.
    pub fn display_label(&self) -> &str {
        match self.label.as_deref() {
            Some(label) if !label.is_empty() => label,
            _ => &self.field_name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    BarChart,
    ColumnChart,
    LineChart,
    PieChart,
    #[serde(other)]
    Unknown,
}

impl MediaType {
    pub fn chart_kind(self) -> Option<ChartKind> {
        match self {
            Self::BarChart => Some(ChartKind::Bar),
            Self::ColumnChart => Some(ChartKind::Column),
            Self::LineChart => Some(ChartKind::Line),
            Self::PieChart => Some(ChartKind::Pie),
            Self::Image | Self::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(rename = "type")]
    pub media_type: MediaType,
    #[serde(default)]
    pub value: MediaValue,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaValue {
    #[serde(default)]
    pub fields: Vec<String>,
    #[serde(default)]
    pub normalize_field: Option<String>,
    #[serde(default, rename = "sourceURL")]
    pub source_url: Option<String>,
    #[serde(default, rename = "linkURL")]
    pub link_url: Option<String>,
}

/// Popup content for one feature, ready for presentation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupContent {
    pub title: Vec<Inline>,
    /// Set when the popup uses a description template instead of an attribute list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<Inline>>,
    pub attributes: Vec<AttributeRow>,
    pub media: Vec<MediaContent>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AttributeRow {
    pub field_name: String,
    pub label: String,
    pub value: AttributeRowValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum AttributeRowValue {
    Text { text: String },
    Link { text: String, href: Url },
}

impl AttributeRowValue {
    pub fn text(&self) -> &str {
        match self {
            Self::Text { text } | Self::Link { text, .. } => text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<MediaBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MediaBody {
    Image(ImageMedia),
    Chart(ChartMedia),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageMedia {
    pub source: Option<Url>,
    pub link: Option<Url>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMedia {
    pub kind: ChartKind,
    /// Field parameter as accepted by [`crate::series::ChartFields::parse`].
    pub fields: String,
    pub labels: FieldLabels,
    pub series: Series,
}
