//! Catalog validation - rejects missing fields, warns about unknown ones

use serde_json::{Map, Value};
use tracing::warn;

const CATALOG_KEYS: &[&str] = &["categories"];
const CATEGORY_KEYS: &[&str] = &["name", "applications"];
const APPLICATION_KEYS: &[&str] = &["name", "path", "arguments"];

/// A required field that is missing or has the wrong type
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SchemaViolation {
    /// Path to the offending value, e.g. `categories[0].applications[2].path`
    pub location: String,
    pub problem: String,
}

impl SchemaViolation {
    fn missing(location: String) -> Self {
        Self {
            location,
            problem: "missing required field".to_string(),
        }
    }

    fn wrong_type(location: String, expected: &str, found: &Value) -> Self {
        Self {
            location,
            problem: format!("expected {expected}, found {}", type_name(found)),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check that every required field is present with the right type.
///
/// Stops at the first violation, in document order.
pub(crate) fn check_schema(value: &Value) -> Result<(), SchemaViolation> {
    let root = as_object(value, "$")?;
    let categories = require_array(root, "", "categories")?;

    for (i, category) in categories.iter().enumerate() {
        let location = format!("categories[{i}]");
        let category = as_object(category, &location)?;
        require_string(category, &location, "name")?;
        let applications = require_array(category, &location, "applications")?;

        for (j, app) in applications.iter().enumerate() {
            let location = format!("{location}.applications[{j}]");
            let app = as_object(app, &location)?;
            for key in APPLICATION_KEYS {
                require_string(app, &location, key)?;
            }
        }
    }

    Ok(())
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

fn as_object<'a>(value: &'a Value, location: &str) -> Result<&'a Map<String, Value>, SchemaViolation> {
    value
        .as_object()
        .ok_or_else(|| SchemaViolation::wrong_type(location.to_string(), "object", value))
}

fn require_array<'a>(
    obj: &'a Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<&'a Vec<Value>, SchemaViolation> {
    let location = join(prefix, key);
    match obj.get(key) {
        None => Err(SchemaViolation::missing(location)),
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(SchemaViolation::wrong_type(location, "array", other)),
    }
}

fn require_string(
    obj: &Map<String, Value>,
    prefix: &str,
    key: &str,
) -> Result<(), SchemaViolation> {
    let location = join(prefix, key);
    match obj.get(key) {
        None => Err(SchemaViolation::missing(location)),
        Some(Value::String(_)) => Ok(()),
        Some(other) => Err(SchemaViolation::wrong_type(location, "string", other)),
    }
}

/// Warn about fields the launcher does not understand.
///
/// Call only after [`check_schema`] has succeeded.
pub(crate) fn warn_unknown_fields(value: &Value, config_name: &str) {
    for path in find_unknown_keys(value) {
        warn!("Unknown config field in {config_name}: {path}");
    }
}

/// Returns paths like `categories[1].icon` for unknown fields.
fn find_unknown_keys(value: &Value) -> Vec<String> {
    let mut unknowns = Vec::new();

    let Value::Object(root) = value else {
        return unknowns;
    };
    collect_unknown(root, CATALOG_KEYS, "", &mut unknowns);

    let categories = root.get("categories").and_then(Value::as_array);
    for (i, category) in categories.into_iter().flatten().enumerate() {
        let Value::Object(category) = category else {
            continue;
        };
        let prefix = format!("categories[{i}]");
        collect_unknown(category, CATEGORY_KEYS, &prefix, &mut unknowns);

        let applications = category.get("applications").and_then(Value::as_array);
        for (j, app) in applications.into_iter().flatten().enumerate() {
            if let Value::Object(app) = app {
                let prefix = format!("{prefix}.applications[{j}]");
                collect_unknown(app, APPLICATION_KEYS, &prefix, &mut unknowns);
            }
        }
    }

    unknowns
}

fn collect_unknown(
    obj: &Map<String, Value>,
    expected: &[&str],
    prefix: &str,
    out: &mut Vec<String>,
) {
    for key in obj.keys() {
        if !expected.contains(&key.as_str()) {
            out.push(join(prefix, key));
        }
    }
}
