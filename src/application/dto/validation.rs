//! Schema validation of raw tool arguments.
//!
//! Arguments are checked against the input schemas `tools/list` publishes.
//! Every violation is reported, each located by a path such as
//! `deps[2].name`.

use crate::application::tool_catalog::input_schema;
use crate::shared::error::{FieldError, SbomError};
use jsonschema::error::ValidationErrorKind;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Validates `arguments` for `tool`, then deserializes them into `T`
pub(super) fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: &Value,
) -> Result<T, SbomError> {
    validate(tool, arguments)?;
    serde_json::from_value(arguments.clone()).map_err(|e| SbomError::InvalidInput {
        message: format!("Arguments for {} could not be read", tool),
        details: vec![FieldError::new("arguments", e.to_string())],
    })
}

fn validate(tool: &str, arguments: &Value) -> Result<(), SbomError> {
    let schema = input_schema(tool).ok_or_else(|| SbomError::InvalidSchema {
        tool: tool.to_string(),
        details: "no input schema registered".to_string(),
    })?;
    let validator = jsonschema::options()
        .build(&schema)
        .map_err(|e| SbomError::InvalidSchema {
            tool: tool.to_string(),
            details: e.to_string(),
        })?;

    let mut details: Vec<FieldError> = validator.iter_errors(arguments).map(field_error).collect();
    if details.is_empty() {
        return Ok(());
    }

    details.sort_by(|a, b| a.path.cmp(&b.path));
    Err(SbomError::InvalidInput {
        message: format!(
            "{} argument(s) for {} failed validation",
            details.len(),
            tool
        ),
        details,
    })
}

fn field_error(error: jsonschema::ValidationError<'_>) -> FieldError {
    let path = field_path(&error.instance_path.to_string());
    match &error.kind {
        ValidationErrorKind::Required { property } => {
            let property = property
                .as_str()
                .map(str::to_string)
                .unwrap_or_else(|| property.to_string());
            FieldError::new(join(&path, &property), "is required")
        }
        ValidationErrorKind::MinItems { .. } => {
            FieldError::new(or_root(path), "must contain at least 1 item")
        }
        ValidationErrorKind::MinLength { .. } => FieldError::new(or_root(path), "must not be empty"),
        _ => FieldError::new(or_root(path), error.to_string()),
    }
}

/// JSON pointer (`/deps/0/name`) to field path (`deps[0].name`)
fn field_path(pointer: &str) -> String {
    pointer
        .split('/')
        .skip(1)
        .fold(String::new(), |path, segment| {
            let segment = segment.replace("~1", "/").replace("~0", "~");
            if segment.parse::<usize>().is_ok() {
                format!("{}[{}]", path, segment)
            } else {
                join(&path, &segment)
            }
        })
}

fn join(path: &str, field: &str) -> String {
    if path.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", path, field)
    }
}

fn or_root(path: String) -> String {
    if path.is_empty() {
        "arguments".to_string()
    } else {
        path
    }
}
