//! Chart series extraction from feature attributes.

use crate::attributes::AttributeMap;
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separates the field list from the normalization field in a chart field parameter:
/// `POP_A,POP_B_::_POP_TOTAL`.
pub const NORMALIZE_SEPARATOR: &str = "_::_";

/// Field label overrides: field name to display label.
pub type FieldLabels = IndexMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChartKind {
    Bar,
    Column,
    Line,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [Self::Bar, Self::Column, Self::Line, Self::Pie];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bar => "bar",
            Self::Column => "column",
            Self::Line => "line",
            Self::Pie => "pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    /// Accepts both the short names (`bar`) and popup media type names (`barchart`).
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_suffix("chart").unwrap_or(&lower);
        match name {
            "bar" => Ok(Self::Bar),
            "column" => Ok(Self::Column),
            "line" => Ok(Self::Line),
            "pie" => Ok(Self::Pie),
            _ => Err(Error::UnknownChartKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Parsed chart field parameter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChartFields {
    pub fields: Vec<String>,
    pub normalize_field: Option<String>,
}

impl ChartFields {
    /// Parses `"F1,F2"` or `"F1,F2_::_NORM"`. The last separator wins, and a separator at the very
    /// start is treated as part of a field name.
    pub fn parse(parameter: &str) -> Self {
        let (list, normalize_field) = match parameter.rfind(NORMALIZE_SEPARATOR) {
            Some(idx) if idx > 0 => (
                &parameter[..idx],
                Some(parameter[idx + NORMALIZE_SEPARATOR.len()..].trim().to_string()),
            ),
            _ => (parameter, None),
        };
        let fields = list
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            fields,
            normalize_field,
        }
    }

    /// Builds the field parameter for a chart. The normalize field is dropped when it is empty or
    /// the literal `null`.
    pub fn from_parts<S: AsRef<str>>(fields: &[S], normalize_field: Option<&str>) -> Self {
        let normalize_field = normalize_field
            .map(str::trim)
            .filter(|n| !n.is_empty() && *n != "null")
            .map(str::to_string);
        Self {
            fields: fields.iter().map(|f| f.as_ref().to_string()).collect(),
            normalize_field,
        }
    }
}

impl fmt::Display for ChartFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fields.join(","))?;
        if let Some(norm) = &self.normalize_field {
            write!(f, "{NORMALIZE_SEPARATOR}{norm}")?;
        }
        Ok(())
    }
}

/// Ordered label/value pairs. Labels are unique; the first occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series(IndexMap<String, f64>);

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a point. Returns `false` (and keeps the existing point) if the label is taken.
    /// Non-finite values are stored as `0`.
    pub fn push(&mut self, label: impl Into<String>, value: f64) -> bool {
        match self.0.entry(label.into()) {
            indexmap::map::Entry::Occupied(_) => false,
            indexmap::map::Entry::Vacant(slot) => {
                slot.insert(if value.is_finite() { value } else { 0.0 });
                true
            }
        }
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.get(label).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        self.0.values().copied()
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for Series {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        let mut series = Self::new();
        for (label, value) in iter {
            series.push(label, value);
        }
        series
    }
}

/// Builds the series for a chart from one feature's attributes.
///
/// Fields the feature does not have are skipped. Values that do not convert to a number read as
/// `0`. When a normalize field is given and its value is non-zero, every value is divided by it.
pub fn extract_series(
    attributes: &AttributeMap,
    fields: &ChartFields,
    labels: Option<&FieldLabels>,
) -> Series {
    let normalize = fields
        .normalize_field
        .as_deref()
        .and_then(|name| attributes.get(name))
        .map(|v| v.to_f64())
        .unwrap_or(0.0);

    let mut series = Series::new();
    for field in &fields.fields {
        let Some(value) = attributes.get(field) else {
            tracing::trace!(field = field.as_str(), "chart field missing from attributes");
            continue;
        };
        let mut v = value.to_f64();
        if normalize != 0.0 {
            v /= normalize;
        }
        let label = labels
            .and_then(|l| l.get(field))
            .map(String::as_str)
            .unwrap_or(field.as_str());
        if !series.push(label, v) {
            tracing::debug!(label, "duplicate chart label; keeping the first value");
        }
    }
    series
}
