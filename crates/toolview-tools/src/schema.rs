use schemars::JsonSchema;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputSchema {
    pub properties: serde_json::Map<String, Value>,
    pub required: Vec<String>,
    #[serde(rename = "type")]
    pub schema_type: String,
}

impl From<schemars::Schema> for InputSchema {
    fn from(schema: schemars::Schema) -> Self {
        let schema_value =
            serde_json::to_value(&schema).unwrap_or_else(|_| serde_json::Value::Null);
        let summary = SchemaSummary::from_value(&schema_value);
        Self {
            properties: summary.properties,
            required: summary.required.into_iter().collect(),
            schema_type: summary.schema_type,
        }
    }
}

struct SchemaSummary {
    properties: serde_json::Map<String, Value>,
    required: BTreeSet<String>,
    schema_type: String,
}

impl SchemaSummary {
    fn from_value(schema: &Value) -> Self {
        let mut summary = Self {
            properties: serde_json::Map::new(),
            required: BTreeSet::new(),
            schema_type: schema
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string(),
        };
        summary.merge(schema);
        summary
    }

    fn merge(&mut self, schema: &Value) {
        let Some(obj) = schema.as_object() else {
            return;
        };

        if let Some(prop_obj) = obj.get("properties").and_then(|v| v.as_object()) {
            for (key, value) in prop_obj {
                self.properties
                    .entry(key.clone())
                    .or_insert_with(|| value.clone());
            }
        }

        if let Some(req) = obj.get("required").and_then(|v| v.as_array()) {
            self.required
                .extend(req.iter().filter_map(|item| item.as_str()).map(String::from));
        }

        // Flattened structs show up as allOf branches
        if let Some(all_of) = obj.get("allOf").and_then(|v| v.as_array()) {
            for sub in all_of {
                self.merge(sub);
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    pub description: String,
    pub input_schema: InputSchema,
}

pub trait ToolSpec {
    type Params: DeserializeOwned + JsonSchema + Send;
    type Result: DeserializeOwned + Send;

    const NAME: &'static str;
    const DISPLAY_NAME: &'static str;
    const DESCRIPTION: &'static str;

    fn schema() -> ToolSchema {
        ToolSchema {
            name: Self::NAME.to_string(),
            display_name: Self::DISPLAY_NAME.to_string(),
            description: Self::DESCRIPTION.to_string(),
            input_schema: schemars::schema_for!(Self::Params).into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::upsert_system::UpsertSystemToolSpec;

    #[test]
    fn upsert_system_schema_lists_every_field() {
        let schema = UpsertSystemToolSpec::schema();

        assert_eq!(schema.name, "upsert_system");
        assert_eq!(schema.input_schema.schema_type, "object");
        for key in [
            "assistantName",
            "mainInstruction",
            "inlineOptionsInstruction",
            "mainOptionsInstruction",
        ] {
            assert!(
                schema.input_schema.properties.contains_key(key),
                "missing property {key}"
            );
        }
    }

    #[test]
    fn all_of_branches_are_merged() {
        let value = serde_json::json!({
            "type": "object",
            "properties": { "a": { "type": "string" } },
            "required": ["a"],
            "allOf": [
                { "properties": { "b": { "type": "integer" } }, "required": ["b"] }
            ]
        });

        let summary = SchemaSummary::from_value(&value);

        assert!(summary.properties.contains_key("a"));
        assert!(summary.properties.contains_key("b"));
        assert_eq!(
            summary.required.into_iter().collect::<Vec<_>>(),
            vec!["a".to_string(), "b".to_string()]
        );
    }
}
