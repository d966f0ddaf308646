//! JSON Schema → Gemini response schema conversion
//!
//! Gemini accepts a subset of OpenAPI 3 schema keywords and rejects the
//! rest (`additionalProperties`, `$schema`, ...), so unknown keys are dropped.

use serde_json::{Map, Value};

const SUPPORTED_KEYWORDS: &[&str] = &[
    "type",
    "format",
    "description",
    "nullable",
    "enum",
    "minItems",
    "maxItems",
    "required",
];

pub fn to_gemini_schema(schema: &Value) -> Value {
    let Value::Object(map) = schema else {
        return schema.clone();
    };

    let mut out = Map::new();
    for (key, value) in map {
        match key.as_str() {
            "properties" => {
                if let Value::Object(props) = value {
                    let converted = props
                        .iter()
                        .map(|(name, prop)| (name.clone(), to_gemini_schema(prop)))
                        .collect();
                    out.insert(key.clone(), Value::Object(converted));
                }
            }
            "items" => {
                out.insert(key.clone(), to_gemini_schema(value));
            }
            k if SUPPORTED_KEYWORDS.contains(&k) => {
                out.insert(key.clone(), value.clone());
            }
            _ => {}
        }
    }
    Value::Object(out)
}
