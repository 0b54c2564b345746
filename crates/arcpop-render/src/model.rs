use crate::range::Range;
use arcpop_core::{AttributeRow, ChartKind, ImageMedia, Inline};
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in chart pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

/// How path geometry in its view box is fitted into the target frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stretch {
    /// Scale each axis independently.
    Fill,
    /// Keep the aspect ratio and center.
    Uniform,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TextBaseline {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectPrimitive {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EllipsePrimitive {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
    pub fill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPrimitive {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub font_size: f64,
    pub fill: String,
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
}

/// Path data drawn in an abstract view box and fitted into `frame`.
///
/// Path figures may include zero-length anchor segments at the view box corners so that the
/// geometry bounds always equal the view box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PathPrimitive {
    pub d: String,
    pub view_box: ViewBox,
    pub frame: Frame,
    pub stretch: Stretch,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    #[serde(default)]
    pub stroke_width: f64,
    #[serde(default)]
    pub round_join: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

impl PathPrimitive {
    /// `(translate_x, translate_y, scale_x, scale_y)` mapping view box units into pixels.
    pub fn transform(&self) -> (f64, f64, f64, f64) {
        let vb_w = if self.view_box.width > 0.0 { self.view_box.width } else { 1.0 };
        let vb_h = if self.view_box.height > 0.0 { self.view_box.height } else { 1.0 };
        let sx = self.frame.width / vb_w;
        let sy = self.frame.height / vb_h;
        match self.stretch {
            Stretch::Fill => (self.frame.x, self.frame.y, sx, sy),
            Stretch::Uniform => {
                let s = sx.min(sy);
                (
                    self.frame.x + (self.frame.width - vb_w * s) / 2.0,
                    self.frame.y + (self.frame.height - vb_h * s) / 2.0,
                    s,
                    s,
                )
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChartPrimitive {
    Rect(RectPrimitive),
    Line(LinePrimitive),
    Ellipse(EllipsePrimitive),
    Text(TextPrimitive),
    Path(PathPrimitive),
}

/// Drawable chart in a `width` x `height` pixel box, painted in primitive order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartLayout {
    pub kind: ChartKind,
    pub width: f64,
    pub height: f64,
    /// Value range of the axis, when the chart has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<Range>,
    #[serde(default)]
    pub labels: Vec<f64>,
    pub primitives: Vec<ChartPrimitive>,
}

impl ChartLayout {
    pub fn empty(kind: ChartKind, width: f64, height: f64) -> Self {
        Self {
            kind,
            width,
            height,
            range: None,
            labels: Vec::new(),
            primitives: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopupLayout {
    pub title: Vec<Inline>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<Vec<Inline>>,
    pub attributes: Vec<AttributeRow>,
    pub media: Vec<MediaLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaLayout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartLayout>,
}
