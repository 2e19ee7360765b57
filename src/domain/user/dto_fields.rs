use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

/// User fields exactly as a client sent them; the create / update request body.
///
/// Every field is kept as raw JSON so that type mismatches can be reported
/// alongside rule violations instead of failing deserialization. A JSON
/// `null` deserializes to `None`. Unknown keys are ignored. On create `name`,
/// `email` and `age` are required; on update every field is optional.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct UserFields {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "John Doe")]
    pub name: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "john@example.com")]
    pub email: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<u64>, example = 30)]
    pub age: Option<Value>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Engineering")]
    pub department: Option<Value>,
}
