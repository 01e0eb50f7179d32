//! Extension function type models.

pub mod ext_argument_type;
pub mod sql_type;

pub use ext_argument_type::ExtArgumentType;
pub use sql_type::{SqlTypeFamily, SqlTypeName};
