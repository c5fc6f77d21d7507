use crate::ipc::error::ParamError;
use crate::student::{StudentField, StudentRecord};
use crate::views::FormState;
use serde_json::Value;

pub fn opt_str(params: &Value, key: &'static str) -> Result<Option<String>, ParamError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(ParamError::WrongType {
            key: key.to_string(),
            expected: "a string",
        }),
    }
}

pub fn student(params: &Value, key: &'static str) -> Result<StudentRecord, ParamError> {
    let raw = params.get(key).ok_or(ParamError::Missing(key))?;
    decode_student(raw, key.to_string())
}

pub fn students(params: &Value, key: &'static str) -> Result<Vec<StudentRecord>, ParamError> {
    let raw = params.get(key).ok_or(ParamError::Missing(key))?;
    let Some(items) = raw.as_array() else {
        return Err(ParamError::WrongType {
            key: key.to_string(),
            expected: "an array",
        });
    };
    items
        .iter()
        .enumerate()
        .map(|(i, v)| decode_student(v, format!("{key}[{i}]")))
        .collect()
}

fn decode_student(raw: &Value, key: String) -> Result<StudentRecord, ParamError> {
    if !raw.is_object() {
        return Err(ParamError::WrongType {
            key,
            expected: "an object",
        });
    }
    serde_json::from_value(raw.clone()).map_err(|e| ParamError::InvalidRecord {
        key,
        message: e.to_string(),
    })
}

/// `errors` maps a field to a message or a list of messages (first shown);
/// `old` maps a field to the submitted text. Unknown fields are ignored.
pub fn form_state(params: &Value) -> Result<FormState, ParamError> {
    let mut state = FormState::default();

    for (name, v) in object_entries(params, "errors")? {
        let Some(field) = known_field(name) else {
            continue;
        };
        let message = match v {
            Value::String(s) => Some(s.clone()),
            Value::Array(items) => items.iter().find_map(|m| m.as_str().map(str::to_string)),
            Value::Null => None,
            _ => {
                return Err(ParamError::WrongType {
                    key: format!("errors.{name}"),
                    expected: "a string or an array of strings",
                })
            }
        };
        if let Some(m) = message {
            state.set_error(field, m);
        }
    }

    for (name, v) in object_entries(params, "old")? {
        let Some(field) = known_field(name) else {
            continue;
        };
        let value = match v {
            Value::String(s) => s.clone(),
            Value::Number(n) => n.to_string(),
            Value::Null => continue,
            _ => {
                return Err(ParamError::WrongType {
                    key: format!("old.{name}"),
                    expected: "a string",
                })
            }
        };
        state.set_old(field, value);
    }

    Ok(state)
}

fn object_entries<'a>(
    params: &'a Value,
    key: &'static str,
) -> Result<Vec<(&'a str, &'a Value)>, ParamError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(Value::Object(map)) => Ok(map.iter().map(|(k, v)| (k.as_str(), v)).collect()),
        Some(_) => Err(ParamError::WrongType {
            key: key.to_string(),
            expected: "an object",
        }),
    }
}

fn known_field(name: &str) -> Option<StudentField> {
    let field = StudentField::parse(name);
    if field.is_none() {
        tracing::debug!(field = name, "ignoring unknown form field");
    }
    field
}
