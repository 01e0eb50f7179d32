//! RESTORE TABLE statement parser
//!
//! Parses SQL statements like:
//! - RESTORE TABLE t1 FROM '/data/t1.backup'
//! - RESTORE TABLE t1 FROM '/data/t1.backup' WITH (compression = 'gzip')

use crate::ddl::json_ddl::{JsonSerializableDdl, TableFilePayload};
use crate::ddl::parsing::{normalize_path_literal, parse_table_file_statement};
use crate::ddl::{DdlOptions, DdlResult};
use serde_json::Value;
use std::fmt;

/// RESTORE TABLE statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestoreTableStatement {
    /// Table to restore into
    pub table_name: String,

    /// Backup archive to restore from (quotes already stripped)
    pub file_path: String,

    /// `WITH (...)` options, `None` when the clause is absent
    pub options: Option<DdlOptions>,
}

impl RestoreTableStatement {
    pub const COMMAND: &'static str = "RESTORE_TABLE";

    /// Build from parser output; `raw_file_path` is the literal as written.
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

    /// Parse a RESTORE TABLE statement from SQL
    ///
    /// Supports syntax:
    /// - RESTORE TABLE table FROM 'path'
    /// - RESTORE TABLE table FROM 'path' WITH (key = 'value', ...)
    pub fn parse(sql: &str) -> DdlResult<Self> {
        let (table_name, raw_path, options) =
            parse_table_file_statement(sql, "RESTORE TABLE", "FROM")?;

        let statement = Self::new(table_name, raw_path, options);
        if statement.file_path.is_empty() {
            return Err("Restore file path cannot be empty".to_string());
        }

        Ok(statement)
    }
}

impl RestoreTableStatement {
    fn payload(&self) -> TableFilePayload<'_> {
        TableFilePayload {
            command: Self::COMMAND,
            table_name: &self.table_name,
            file_path: &self.file_path,
            options: self.options.as_ref(),
        }
    }
}

impl JsonSerializableDdl for RestoreTableStatement {
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

impl fmt::Display for RestoreTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json_string())
    }
}
