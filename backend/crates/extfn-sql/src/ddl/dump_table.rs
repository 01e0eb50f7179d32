//! DUMP TABLE statement parser
//!
//! Parses SQL statements like:
//! - DUMP TABLE t1 TO '/data/t1.backup'
//! - DUMP TABLE t1 TO '/data/t1.backup' WITH (compression = 'lz4')

use crate::ddl::json_ddl::{JsonSerializableDdl, TableFilePayload};
use crate::ddl::parsing::{normalize_path_literal, parse_table_file_statement};
use crate::ddl::{DdlOptions, DdlResult};
use serde_json::Value;
use std::fmt;

/// DUMP TABLE statement (the backup counterpart of RESTORE TABLE)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpTableStatement {
    pub table_name: String,

    /// Archive destination (quotes already stripped)
    pub file_path: String,

    pub options: Option<DdlOptions>,
}

impl DumpTableStatement {
    pub const COMMAND: &'static str = "DUMP_TABLE";

    pub fn new(
        table_name: impl Into<String>,
        raw_file_path: &str,
        options: Option<DdlOptions>,
    ) -> Self {
        Self {
            table_name: table_name.into(),
            file_path: normalize_path_literal(raw_file_path),
            options,
        }
    }

    /// Parse a DUMP TABLE statement from SQL
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let (table_name, raw_path, options) = parse_table_file_statement(sql, "DUMP TABLE", "TO")?;

        let statement = Self::new(table_name, raw_path, options);
        if statement.file_path.is_empty() {
            return Err("Dump file path cannot be empty".to_string());
        }

        Ok(statement)
    }
}

impl DumpTableStatement {
    fn payload(&self) -> TableFilePayload<'_> {
        TableFilePayload {
            command: Self::COMMAND,
            table_name: &self.table_name,
            file_path: &self.file_path,
            options: self.options.as_ref(),
        }
    }
}

impl JsonSerializableDdl for DumpTableStatement {
    fn command(&self) -> &'static str {
        Self::COMMAND
    }

    fn to_json_value(&self) -> Value {
        self.payload().to_json_value()
    }

    fn to_json_string(&self) -> String {
        self.payload().to_json_string()
    }
}

impl fmt::Display for DumpTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
