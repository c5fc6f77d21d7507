use crate::config::Config;
use crate::ipc::error::{from_result, ok, ParamError};
use crate::ipc::types::{AppState, Request};
use crate::views::Locale;
use serde_json::{json, Value};

fn handle_health(state: &mut AppState, req: &Request) -> Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "locale": state.config.locale.code(),
        }),
    )
}

fn config_json(cfg: &Config) -> Result<Value, ParamError> {
    serde_json::to_value(cfg).map_err(|e| ParamError::InvalidRecord {
        key: "config".to_string(),
        message: e.to_string(),
    })
}

fn handle_config_get(state: &mut AppState, req: &Request) -> Value {
    from_result(&req.id, config_json(&state.config))
}

/// Patch semantics: keys that are absent keep their current value; a null
/// `title` clears it.
fn apply_config_patch(cfg: &Config, patch: &Value) -> Result<Config, ParamError> {
    let Some(obj) = patch.as_object() else {
        return Err(ParamError::WrongType {
            key: "params".to_string(),
            expected: "an object",
        });
    };
    let mut next = cfg.clone();

    if let Some(v) = obj.get("locale") {
        let Some(s) = v.as_str() else {
            return Err(ParamError::WrongType {
                key: "locale".to_string(),
                expected: "a string",
            });
        };
        next.locale = Locale::parse(s).ok_or_else(|| ParamError::UnknownLocale(s.to_string()))?;
    }
    if let Some(v) = obj.get("routesBase") {
        let Some(s) = v.as_str() else {
            return Err(ParamError::WrongType {
                key: "routesBase".to_string(),
                expected: "a string",
            });
        };
        next.routes_base = s.trim().to_string();
    }
    if let Some(v) = obj.get("title") {
        next.title = match v {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            Value::String(s) => Some(s.trim().to_string()),
            _ => {
                return Err(ParamError::WrongType {
                    key: "title".to_string(),
                    expected: "a string or null",
                })
            }
        };
    }
    Ok(next)
}

fn handle_config_update(state: &mut AppState, req: &Request) -> Value {
    let result = apply_config_patch(&state.config, &req.params).and_then(|next| {
        let out = config_json(&next)?;
        tracing::info!(
            locale = next.locale.code(),
            routes_base = %next.routes_base,
            "config updated"
        );
        state.config = next;
        Ok(out)
    });
    from_result(&req.id, result)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "config.get" => Some(handle_config_get(state, req)),
        "config.update" => Some(handle_config_update(state, req)),
        _ => None,
    }
}
