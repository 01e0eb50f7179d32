//! SQL catalog types and type families as seen by the SQL validator.

use std::fmt;

/// SQL catalog type an extension argument maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlTypeName {
    Boolean,
    TinyInt,
    SmallInt,
    Integer,
    BigInt,
    Float,
    Double,
    Varchar,
    Timestamp,
    Array,
    Geometry,
    Cursor,
    Column,
    ColumnList,
}

/// Coarse type-compatibility class used for overload resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SqlTypeFamily {
    Boolean,
    Numeric,
    Character,
    Timestamp,
    Array,
    Geo,
    Cursor,
    Column,
    ColumnList,
}

impl SqlTypeName {
    /// Type family used when matching call-site operands against a signature.
    pub fn family(self) -> SqlTypeFamily {
        match self {
            SqlTypeName::Boolean => SqlTypeFamily::Boolean,
            SqlTypeName::TinyInt
            | SqlTypeName::SmallInt
            | SqlTypeName::Integer
            | SqlTypeName::BigInt
            | SqlTypeName::Float
            | SqlTypeName::Double => SqlTypeFamily::Numeric,
            SqlTypeName::Varchar => SqlTypeFamily::Character,
            SqlTypeName::Timestamp => SqlTypeFamily::Timestamp,
            SqlTypeName::Array => SqlTypeFamily::Array,
            SqlTypeName::Geometry => SqlTypeFamily::Geo,
            SqlTypeName::Cursor => SqlTypeFamily::Cursor,
            SqlTypeName::Column => SqlTypeFamily::Column,
            SqlTypeName::ColumnList => SqlTypeFamily::ColumnList,
        }
    }

    pub fn sql_name(self) -> &'static str {
        match self {
            SqlTypeName::Boolean => "BOOLEAN",
            SqlTypeName::TinyInt => "TINYINT",
            SqlTypeName::SmallInt => "SMALLINT",
            SqlTypeName::Integer => "INTEGER",
            SqlTypeName::BigInt => "BIGINT",
            SqlTypeName::Float => "FLOAT",
            SqlTypeName::Double => "DOUBLE",
            SqlTypeName::Varchar => "VARCHAR",
            SqlTypeName::Timestamp => "TIMESTAMP",
            SqlTypeName::Array => "ARRAY",
            SqlTypeName::Geometry => "GEOMETRY",
            SqlTypeName::Cursor => "CURSOR",
            SqlTypeName::Column => "COLUMN",
            SqlTypeName::ColumnList => "COLUMN_LIST",
        }
    }
}

impl fmt::Display for SqlTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}
