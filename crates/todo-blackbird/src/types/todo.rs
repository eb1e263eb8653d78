//! ToDo item types

use derive_builder::Builder;
use serde::{Deserialize, Deserializer, Serialize};

/// A task record as exchanged with the API.
///
/// Every field is optional: the server assigns `id` and dates, and request
/// bodies only carry the fields an operation needs. Absent fields are left out
/// of the serialized JSON entirely, so a body built without a name really has
/// no `Name` key.
///
/// # Example
///
/// ```rust
/// use todo_blackbird::ToDoItem;
///
/// let item = ToDoItem::builder()
///     .name("Test Task")
///     .description("Test Description")
///     .build()
///     .unwrap();
///
/// let json = serde_json::to_string(&item).unwrap();
/// assert_eq!(json, r#"{"Name":"Test Task","Description":"Test Description"}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Builder)]
#[builder(setter(into, strip_option), default)]
pub struct ToDoItem {
    /// Server-assigned identifier
    #[serde(rename = "id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Short label
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Free text
    #[serde(
        rename = "Description",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,

    /// Creation date, formatted by the server
    #[serde(
        rename = "Date_Create",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_create: Option<String>,

    /// Completion date, formatted by the server
    #[serde(
        rename = "Date_Finish",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub date_finish: Option<String>,

    /// Status code as text, e.g. `"2"`
    #[serde(
        rename = "Status",
        default,
        deserialize_with = "deserialize_text_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,

    /// `false` once the item has been soft-deleted
    #[serde(rename = "IsActive", default, skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

impl ToDoItem {
    /// Create a new builder.
    pub fn builder() -> ToDoItemBuilder {
        ToDoItemBuilder::default()
    }

    /// Body for a create request.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: Some(description.into()),
            ..Default::default()
        }
    }

    /// Set the id, as required by the update endpoint.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Whether the item is still active (missing flag counts as active).
    pub fn is_active(&self) -> bool {
        self.is_active.unwrap_or(true)
    }
}

/// Body of the status-only update: `{"Status": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusUpdate {
    /// New status code
    #[serde(rename = "Status")]
    pub status: String,
}

impl StatusUpdate {
    /// Create a status update.
    pub fn new(status: impl Into<String>) -> Self {
        Self {
            status: status.into(),
        }
    }
}

/// Accept `"2"` or `2` and keep it as text.
fn deserialize_text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum TextOrNumber {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}
