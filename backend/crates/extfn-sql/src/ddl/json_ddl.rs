//! JSON payloads for DDL statements

use crate::ddl::DdlOptions;
use serde::Serialize;
use serde_json::Value;

/// A parsed DDL statement with a stable JSON representation.
///
/// Implementors build their payload from an explicit field list; `Display`
/// for every node prints the same JSON.
pub trait JsonSerializableDdl {
    /// Command identity, fixed per statement kind (e.g. `RESTORE_TABLE`)
    fn command(&self) -> &'static str;

    fn to_json_value(&self) -> Value;

    /// Compact JSON text with fields in declaration order
    fn to_json_string(&self) -> String;
}

/// Wire payload shared by statements that move a table to or from a file
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TableFilePayload<'a> {
    pub command: &'a str,
    pub table_name: &'a str,
    pub file_path: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<&'a DdlOptions>,
}

impl TableFilePayload<'_> {
    pub(crate) fn to_json_value(&self) -> Value {
        match serde_json::to_value(self) {
            Ok(value) => value,
            Err(e) => {
                log::error!("Failed to encode {} payload: {}", self.command, e);
                panic!("{} payload encoding failed: {}", self.command, e);
            }
        }
    }

    pub(crate) fn to_json_string(&self) -> String {
        match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                log::error!("Failed to encode {} payload: {}", self.command, e);
                panic!("{} payload encoding failed: {}", self.command, e);
            }
        }
    }
}
