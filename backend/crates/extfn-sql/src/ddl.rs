//! DDL statement nodes handed from the parser to the execution engine.
//!
//! Each node exposes a fixed set of serializable fields and renders itself
//! as a JSON payload (see [`JsonSerializableDdl`]).

pub mod parsing;

pub mod dump_table;
pub mod json_ddl;
pub mod restore_table;

use std::collections::BTreeMap;

/// Result type used by the DDL parsers.
pub type DdlResult<T> = Result<T, String>;

/// `WITH (...)` options; keys sorted so the JSON payload is deterministic.
pub type DdlOptions = BTreeMap<String, String>;

pub use dump_table::DumpTableStatement;
pub use json_ddl::JsonSerializableDdl;
pub use restore_table::RestoreTableStatement;
