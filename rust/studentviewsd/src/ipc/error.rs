use serde_json::json;
use thiserror::Error;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Reply for a line that could not be decoded, so no id is known.
pub fn bad_json(message: impl Into<String>) -> serde_json::Value {
    json!({
        "ok": false,
        "error": {
            "code": "bad_json",
            "message": message.into(),
        }
    })
}

/// Problems decoding `params`. All of them surface as `bad_params`.
#[derive(Debug, Error)]
pub enum ParamError {
    #[error("missing params.{0}")]
    Missing(&'static str),

    #[error("params.{key} must be {expected}")]
    WrongType { key: String, expected: &'static str },

    #[error("invalid params.{key}: {message}")]
    InvalidRecord { key: String, message: String },

    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

impl ParamError {
    pub fn code(&self) -> &'static str {
        "bad_params"
    }

    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Self::Missing(key) => Some(json!({ "param": key })),
            Self::WrongType { key, .. } | Self::InvalidRecord { key, .. } => {
                Some(json!({ "param": key }))
            }
            Self::UnknownLocale(_) => Some(json!({ "param": "locale", "allowed": ["ar", "en"] })),
        }
    }
}

pub fn from_result(id: &str, result: Result<serde_json::Value, ParamError>) -> serde_json::Value {
    match result {
        Ok(v) => ok(id, v),
        Err(e) => {
            tracing::debug!(request = id, error = %e, "rejecting params");
            err(id, e.code(), e.to_string(), e.details())
        }
    }
}
