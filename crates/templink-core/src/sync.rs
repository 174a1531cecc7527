//! Schema synchronization: typed field changes emitted to the external store.

use crate::document::TemplateDocument;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Schema field addressed by a change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "width")]
    Width,
    #[serde(rename = "height")]
    Height,
    #[serde(rename = "position.y")]
    PositionY,
    #[serde(rename = "position.x")]
    PositionX,
    #[serde(rename = "data")]
    Data,
}

impl FieldKey {
    /// The wire key string used by the schema store.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKey::Width => "width",
            FieldKey::Height => "height",
            FieldKey::PositionY => "position.y",
            FieldKey::PositionX => "position.x",
            FieldKey::Data => "data",
        }
    }
}

/// One committed field change, keyed by the owning element's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub key: FieldKey,
    pub value: Value,
    #[serde(rename = "schemaId")]
    pub schema_id: String,
}

impl FieldChange {
    /// A geometry change carrying a rounded logical quantity.
    pub fn geometry(key: FieldKey, value: f64, schema_id: impl Into<String>) -> Self {
        Self {
            key,
            value: Value::from(value),
            schema_id: schema_id.into(),
        }
    }

    /// A content change from the schema editing widgets.
    pub fn data(value: impl Into<String>, schema_id: impl Into<String>) -> Self {
        Self {
            key: FieldKey::Data,
            value: Value::from(value.into()),
            schema_id: schema_id.into(),
        }
    }
}

/// Receiver for committed field changes (the external schema store).
///
/// A completed gesture produces exactly one `change_schemas` call no matter
/// how many elements it touched, so a group gesture lands atomically instead
/// of as N racing updates.
pub trait SchemaSink {
    fn change_schemas(&mut self, changes: Vec<FieldChange>);
}

/// Forward a batch to the sink. Empty batches are swallowed so that a
/// gesture end without a matching start stays a no-op.
pub fn emit(sink: &mut dyn SchemaSink, changes: Vec<FieldChange>) {
    if changes.is_empty() {
        return;
    }
    log::debug!("committing {} field change(s)", changes.len());
    sink.change_schemas(changes);
}

/// The document itself can act as the schema store: geometry values are
/// applied with the non-negative clamp, content changes replace the field
/// data, and unknown ids are ignored.
impl SchemaSink for TemplateDocument {
    fn change_schemas(&mut self, changes: Vec<FieldChange>) {
        for change in changes {
            let Some(element) = self.element_mut(&change.schema_id) else {
                log::warn!("change for unknown element {}", change.schema_id);
                continue;
            };
            match change.key {
                FieldKey::Data => {
                    if let Value::String(s) = change.value {
                        element.data = s;
                    }
                }
                key => {
                    let Some(v) = change.value.as_f64() else {
                        log::warn!("non-numeric value for {}", key.as_str());
                        continue;
                    };
                    match key {
                        FieldKey::Width => element.set_width(v),
                        FieldKey::Height => element.set_height(v),
                        FieldKey::PositionY => element.set_y(v),
                        FieldKey::PositionX => element.set_x(v),
                        FieldKey::Data => unreachable!(),
                    }
                }
            }
        }
    }
}

/// Sink that records every batch it receives. Used in tests to assert
/// batching and ordering.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    pub batches: Vec<Vec<FieldChange>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All changes across batches, flattened.
    pub fn changes(&self) -> Vec<&FieldChange> {
        self.batches.iter().flatten().collect()
    }
}

impl SchemaSink for RecordingSink {
    fn change_schemas(&mut self, changes: Vec<FieldChange>) {
        self.batches.push(changes);
    }
}
