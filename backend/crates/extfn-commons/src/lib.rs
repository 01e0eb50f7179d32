//! extfn-commons
//!
//! Shared type universe for extension functions (UDFs and UDTFs):
//!
//! - [`ExtArgumentType`]: every native argument/return category a function may declare
//! - classification helpers (pointer / column / column list) and value-type projection
//! - the codegen type-name encoding consumed by the native code generator
//! - the SQL catalog mapping ([`SqlTypeName`], [`SqlTypeFamily`]) used for overload resolution
//!
//! All mappings are exhaustive `match` expressions, so adding a variant to
//! [`ExtArgumentType`] fails to compile until every table is updated.

pub mod errors;
pub mod models;

pub use errors::{Result, SignatureError};
pub use models::{ExtArgumentType, SqlTypeFamily, SqlTypeName};
