use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Closed description of the JSON shape requested from the completion service.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseSchema {
    String,
    Integer,
    Number,
    Boolean,
    /// A string restricted to the listed values.
    Enum(Vec<&'static str>),
    Array(Box<ResponseSchema>),
    Object {
        properties: Vec<(&'static str, ResponseSchema)>,
        required: Vec<&'static str>,
    },
}

impl ResponseSchema {
    /// Object whose properties are all required.
    pub fn object(properties: Vec<(&'static str, ResponseSchema)>) -> Self {
        let required = properties.iter().map(|(name, _)| *name).collect();
        ResponseSchema::Object {
            properties,
            required,
        }
    }

    pub fn array_of(items: ResponseSchema) -> Self {
        ResponseSchema::Array(Box::new(items))
    }

    /// Drop `names` from the required list of an object schema.
    pub fn with_optional(self, names: &[&str]) -> Self {
        match self {
            ResponseSchema::Object {
                properties,
                required,
            } => ResponseSchema::Object {
                properties,
                required: required
                    .into_iter()
                    .filter(|name| !names.contains(name))
                    .collect(),
            },
            other => other,
        }
    }

    /// Wire form understood by the generative-language API.
    pub fn to_json(&self) -> Value {
        match self {
            ResponseSchema::String => json!({ "type": "STRING" }),
            ResponseSchema::Integer => json!({ "type": "INTEGER" }),
            ResponseSchema::Number => json!({ "type": "NUMBER" }),
            ResponseSchema::Boolean => json!({ "type": "BOOLEAN" }),
            ResponseSchema::Enum(values) => json!({ "type": "STRING", "enum": values }),
            ResponseSchema::Array(items) => json!({ "type": "ARRAY", "items": items.to_json() }),
            ResponseSchema::Object {
                properties,
                required,
            } => {
                let mut props = Map::new();
                for (name, schema) in properties {
                    props.insert((*name).to_string(), schema.to_json());
                }
                let ordering: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
                json!({
                    "type": "OBJECT",
                    "properties": props,
                    "required": required,
                    "propertyOrdering": ordering,
                })
            }
        }
    }
}

impl Serialize for ResponseSchema {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
