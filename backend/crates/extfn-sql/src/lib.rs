//! extfn-sql
//!
//! Extension function signatures and DDL statement payloads of the SQL front end:
//!
//! - [`ExtensionFunction`]: argument types plus a return type (UDF) or output
//!   types (UDTF), with the SQL-level signature used for overload resolution
//! - signature JSON for the catalog and the native code generator
//! - [`ExtensionFunctionRegistry`]: validated overloads by function name
//! - DDL nodes ([`RestoreTableStatement`], [`DumpTableStatement`]) with their JSON payloads
//!
//! # Example
//!
//! ```
//! use extfn_commons::{ExtArgumentType, SqlTypeFamily};
//! use extfn_sql::ExtensionFunction;
//!
//! // A pointer argument is followed by its implicit length
//! let sig = ExtensionFunction::row(
//!     vec![ExtArgumentType::PInt32, ExtArgumentType::Int64],
//!     ExtArgumentType::Int64,
//! );
//! assert_eq!(sig.to_sql_signature(), vec![SqlTypeFamily::Array]);
//! assert_eq!(sig.to_json("array_sum"), r#"{"name":"array_sum","ret":"i64","args":["i32*","i64"]}"#);
//! ```

pub mod ddl;
pub mod signature;

pub use ddl::{DdlOptions, DdlResult, DumpTableStatement, JsonSerializableDdl, RestoreTableStatement};
pub use signature::{ExtensionFunction, ExtensionFunctionRegistry, FunctionKind};
