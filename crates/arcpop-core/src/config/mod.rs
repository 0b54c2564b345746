use crate::error::{Error, Result, json_kind};
use serde_json::{Map, Value};

/// Site-level overrides for popup presentation, kept as a JSON object addressed by dotted paths
/// (`chart.width`, `chart.palette`, `strip.escapeBraces`, ...).
///
/// Configs are layered with [`PopupConfig::merge`]; single keys are changed with
/// [`PopupConfig::set`] or a `key.path=value` assignment via [`PopupConfig::apply_override`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PopupConfig(Map<String, Value>);

impl PopupConfig {
    pub fn empty_object() -> Self {
        Self::default()
    }

    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(Error::InvalidConfig {
                found: json_kind(&other),
            }),
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(text)?)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut segments = dotted_path.split('.');
        let mut cur = self.0.get(segments.next()?)?;
        for segment in segments {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_bool(&self, dotted_path: &str) -> Option<bool> {
        self.get(dotted_path)?.as_bool()
    }

    /// Numbers may be given as JSON numbers or numeric strings (`"200"`, `"12px"` is rejected).
    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        match self.get(dotted_path)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
        .filter(|v| v.is_finite())
    }

    /// Layers `overrides` on top of this config. Objects merge key by key, other values replace,
    /// and `null` removes the key so the built-in default applies again.
    pub fn merge(&mut self, overrides: &PopupConfig) {
        merge_into(&mut self.0, &overrides.0);
    }

    /// Sets one dotted path, creating intermediate objects and replacing non-object values on
    /// the way. Setting `null` removes the key.
    pub fn set(&mut self, dotted_path: &str, value: Value) -> Result<()> {
        let segments: Vec<&str> = dotted_path.split('.').map(str::trim).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(Error::InvalidConfigOverride {
                text: dotted_path.to_string(),
            });
        }

        let mut nested = value;
        for segment in segments.iter().rev() {
            let mut map = Map::new();
            map.insert((*segment).to_string(), nested);
            nested = Value::Object(map);
        }
        if let Value::Object(overrides) = nested {
            merge_into(&mut self.0, &overrides);
        }
        Ok(())
    }

    /// Applies a `key.path=value` assignment. The value is read as JSON when it parses
    /// (`320`, `true`, `["#111111"]`) and as a plain string otherwise.
    pub fn apply_override(&mut self, assignment: &str) -> Result<()> {
        let Some((path, raw)) = assignment.split_once('=') else {
            return Err(Error::InvalidConfigOverride {
                text: assignment.to_string(),
            });
        };
        let raw = raw.trim();
        let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
        tracing::debug!(path = path.trim(), %value, "config override");
        self.set(path, value)
    }
}

fn merge_into(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        if value.is_null() {
            base.remove(key);
            continue;
        }
        if let (Some(Value::Object(inner)), Value::Object(incoming)) = (base.get_mut(key), value) {
            merge_into(inner, incoming);
            continue;
        }
        base.insert(key.clone(), value.clone());
    }
}
