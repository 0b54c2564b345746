//! Popup definitions and per-feature popup assembly.

mod build;
mod model;

pub use build::{build_popup, popup_summary_title};
pub use model::{
    AttributeRow, AttributeRowValue, ChartMedia, FieldInfo, ImageMedia, MediaBody, MediaContent,
    MediaInfo, MediaType, MediaValue, PopupContent, PopupInfo,
};
