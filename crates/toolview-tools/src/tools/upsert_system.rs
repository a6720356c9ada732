use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::ToolSpec;
use crate::error::{Result, ToolError};

pub const UPSERT_SYSTEM_TOOL_NAME: &str = "upsert_system";

pub struct UpsertSystemToolSpec;

impl ToolSpec for UpsertSystemToolSpec {
    type Params = UpsertSystemParams;
    type Result = UpsertSystemResult;

    const NAME: &'static str = UPSERT_SYSTEM_TOOL_NAME;
    const DISPLAY_NAME: &'static str = "Update Assistant";
    const DESCRIPTION: &'static str =
        "Create or update the assistant's name and system instructions.";
}

/// Configuration of the assistant as sent by the model.
///
/// Arguments stream in chunk by chunk, so every field defaults to the empty
/// string until the model has produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertSystemParams {
    /// Display name of the assistant
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub assistant_name: String,
    /// The main system instruction
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub main_instruction: String,
    /// Instruction used when generating inline options
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub inline_options_instruction: String,
    /// Instruction used when generating the main options
    #[serde(deserialize_with = "null_as_empty")]
    #[schemars(with = "String")]
    pub main_options_instruction: String,
}

/// `null` reads as the empty string, like a missing field.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl UpsertSystemParams {
    pub fn parse(value: &Value) -> Result<Self> {
        serde_json::from_value(value.clone())
            .map_err(|e| ToolError::invalid_params(UPSERT_SYSTEM_TOOL_NAME, e.to_string()))
    }

    /// Lenient parse for arguments that may still be streaming.
    ///
    /// `null` and other non-object values mean nothing has arrived yet. Each
    /// field is read on its own: a field that is missing, `null` or not text
    /// is empty without affecting the others.
    pub fn from_streaming(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| match fields.get(key) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => {
                tracing::debug!(field = key, value = %other, "Ignoring non-text streaming argument");
                String::new()
            }
        };

        Self {
            assistant_name: text("assistantName"),
            main_instruction: text("mainInstruction"),
            inline_options_instruction: text("inlineOptionsInstruction"),
            main_options_instruction: text("mainOptionsInstruction"),
        }
    }

    /// True while neither the name nor the main instruction has arrived.
    pub fn is_awaiting_data(&self) -> bool {
        self.assistant_name.is_empty() && self.main_instruction.is_empty()
    }
}

/// Payload returned by the tool backend once the update has been applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertSystemResult {
    pub success: bool,
    #[serde(flatten)]
    pub current: UpsertSystemParams,
    pub old: UpsertSystemParams,
}

impl UpsertSystemResult {
    /// Parses the JSON payload. Both `success` and `old` must be present.
    pub fn from_payload(payload: &str) -> Result<Self> {
        serde_json::from_str(payload)
            .map_err(|e| ToolError::invalid_result(UPSERT_SYSTEM_TOOL_NAME, e.to_string()))
    }

    pub fn old_state(&self) -> AssistantState {
        AssistantState::from(&self.old)
    }

    pub fn new_state(&self) -> AssistantState {
        AssistantState::from(&self.current)
    }
}

/// The slice of the configuration shown in the diff.
///
/// `mainOptionsInstruction` is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistantState {
    pub assistant_name: String,
    pub main_instruction: String,
    pub inline_options_instruction: String,
}

impl AssistantState {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ToolError::serialization("assistant state", e.to_string()))
    }
}

impl From<&UpsertSystemParams> for AssistantState {
    fn from(params: &UpsertSystemParams) -> Self {
        Self {
            assistant_name: params.assistant_name.clone(),
            main_instruction: params.main_instruction.clone(),
            inline_options_instruction: params.inline_options_instruction.clone(),
        }
    }
}
