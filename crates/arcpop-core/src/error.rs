pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Attribute document must be a JSON object, found {found}")]
    InvalidAttributes { found: &'static str },

    #[error("Popup definition must be a JSON object, found {found}")]
    InvalidPopupInfo { found: &'static str },

    #[error("Config document must be a JSON object, found {found}")]
    InvalidConfig { found: &'static str },

    #[error("Config override must look like `key.path=value`, got {text:?}")]
    InvalidConfigOverride { text: String },

    #[error("Unknown chart kind: {name}")]
    UnknownChartKind { name: String },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
