//! ExtArgumentType - native argument/return categories of extension functions
//!
//! Every variant has exactly one codegen type name (the string handed to the
//! native code generator) and, `Void` aside, exactly one SQL catalog type.

use crate::errors::{Result, SignatureError};
use crate::models::sql_type::SqlTypeName;
use serde::{Serialize, Serializer};
use std::fmt;

/// Native argument/return type of an extension function.
///
/// Families:
/// - scalar: `Int8`..`Int64`, `Float`, `Double`, `Bool`, `Void`
/// - pointer-to-scalar: `PInt8`..`PBool` (row functions pass an implicit length after each)
/// - fixed array: `ArrayInt8`..`ArrayBool`
/// - column: `ColumnInt8`..`ColumnTextEncodingDict` (one input column of a table function)
/// - column list: `ColumnListInt8`..`ColumnListTextEncodingDict`
/// - geometry: `GeoPoint`, `GeoLineString`, `GeoPolygon`, `GeoMultiPolygon`
/// - other: `Cursor`, `TextEncodingNone`, `TextEncodingDict`, `Timestamp`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ExtArgumentType {
    Int8,
    Int16,
    Int32,
    Int64,
    Float,
    Double,
    Void,
    PInt8,
    PInt16,
    PInt32,
    PInt64,
    PFloat,
    PDouble,
    PBool,
    Bool,
    ArrayInt8,
    ArrayInt16,
    ArrayInt32,
    ArrayInt64,
    ArrayFloat,
    ArrayDouble,
    ArrayBool,
    ColumnInt8,
    ColumnInt16,
    ColumnInt32,
    ColumnInt64,
    ColumnFloat,
    ColumnDouble,
    ColumnBool,
    ColumnTimestamp,
    GeoPoint,
    GeoLineString,
    Cursor,
    GeoPolygon,
    GeoMultiPolygon,
    TextEncodingNone,
    TextEncodingDict,
    Timestamp,
    ColumnListInt8,
    ColumnListInt16,
    ColumnListInt32,
    ColumnListInt64,
    ColumnListFloat,
    ColumnListDouble,
    ColumnListBool,
    ColumnTextEncodingDict,
    ColumnListTextEncodingDict,
}

impl ExtArgumentType {
    /// Every variant, in declaration order.
    pub const ALL: [ExtArgumentType; 47] = [
        ExtArgumentType::Int8,
        ExtArgumentType::Int16,
        ExtArgumentType::Int32,
        ExtArgumentType::Int64,
        ExtArgumentType::Float,
        ExtArgumentType::Double,
        ExtArgumentType::Void,
        ExtArgumentType::PInt8,
        ExtArgumentType::PInt16,
        ExtArgumentType::PInt32,
        ExtArgumentType::PInt64,
        ExtArgumentType::PFloat,
        ExtArgumentType::PDouble,
        ExtArgumentType::PBool,
        ExtArgumentType::Bool,
        ExtArgumentType::ArrayInt8,
        ExtArgumentType::ArrayInt16,
        ExtArgumentType::ArrayInt32,
        ExtArgumentType::ArrayInt64,
        ExtArgumentType::ArrayFloat,
        ExtArgumentType::ArrayDouble,
        ExtArgumentType::ArrayBool,
        ExtArgumentType::ColumnInt8,
        ExtArgumentType::ColumnInt16,
        ExtArgumentType::ColumnInt32,
        ExtArgumentType::ColumnInt64,
        ExtArgumentType::ColumnFloat,
        ExtArgumentType::ColumnDouble,
        ExtArgumentType::ColumnBool,
        ExtArgumentType::ColumnTimestamp,
        ExtArgumentType::GeoPoint,
        ExtArgumentType::GeoLineString,
        ExtArgumentType::Cursor,
        ExtArgumentType::GeoPolygon,
        ExtArgumentType::GeoMultiPolygon,
        ExtArgumentType::TextEncodingNone,
        ExtArgumentType::TextEncodingDict,
        ExtArgumentType::Timestamp,
        ExtArgumentType::ColumnListInt8,
        ExtArgumentType::ColumnListInt16,
        ExtArgumentType::ColumnListInt32,
        ExtArgumentType::ColumnListInt64,
        ExtArgumentType::ColumnListFloat,
        ExtArgumentType::ColumnListDouble,
        ExtArgumentType::ColumnListBool,
        ExtArgumentType::ColumnTextEncodingDict,
        ExtArgumentType::ColumnListTextEncodingDict,
    ];

    /// True for the seven pointer-to-scalar variants.
    pub fn is_pointer(self) -> bool {
        matches!(
            self,
            ExtArgumentType::PInt8
                | ExtArgumentType::PInt16
                | ExtArgumentType::PInt32
                | ExtArgumentType::PInt64
                | ExtArgumentType::PFloat
                | ExtArgumentType::PDouble
                | ExtArgumentType::PBool
        )
    }

    /// True for single-column buffers, including timestamp and dict-encoded text columns.
    pub fn is_column(self) -> bool {
        matches!(
            self,
            ExtArgumentType::ColumnInt8
                | ExtArgumentType::ColumnInt16
                | ExtArgumentType::ColumnInt32
                | ExtArgumentType::ColumnInt64
                | ExtArgumentType::ColumnFloat
                | ExtArgumentType::ColumnDouble
                | ExtArgumentType::ColumnBool
                | ExtArgumentType::ColumnTextEncodingDict
                | ExtArgumentType::ColumnTimestamp
        )
    }

    /// True for the multi-column list variants.
    pub fn is_column_list(self) -> bool {
        matches!(
            self,
            ExtArgumentType::ColumnListInt8
                | ExtArgumentType::ColumnListInt16
                | ExtArgumentType::ColumnListInt32
                | ExtArgumentType::ColumnListInt64
                | ExtArgumentType::ColumnListFloat
                | ExtArgumentType::ColumnListDouble
                | ExtArgumentType::ColumnListBool
                | ExtArgumentType::ColumnListTextEncodingDict
        )
    }

    pub fn is_array(self) -> bool {
        matches!(
            self,
            ExtArgumentType::ArrayInt8
                | ExtArgumentType::ArrayInt16
                | ExtArgumentType::ArrayInt32
                | ExtArgumentType::ArrayInt64
                | ExtArgumentType::ArrayFloat
                | ExtArgumentType::ArrayDouble
                | ExtArgumentType::ArrayBool
        )
    }

    /// Scalar element type, or `None` for variants without one
    /// (`Void`, geometry, `Cursor`, `TextEncodingNone`).
    pub fn try_value_type(self) -> Option<ExtArgumentType> {
        use ExtArgumentType::*;

        let value = match self {
            Int8 | PInt8 | ArrayInt8 | ColumnInt8 | ColumnListInt8 => Int8,
            Int16 | PInt16 | ArrayInt16 | ColumnInt16 | ColumnListInt16 => Int16,
            Int32 | PInt32 | ArrayInt32 | ColumnInt32 | ColumnListInt32 => Int32,
            Int64 | PInt64 | ArrayInt64 | ColumnInt64 | ColumnListInt64 => Int64,
            Float | PFloat | ArrayFloat | ColumnFloat | ColumnListFloat => Float,
            Double | PDouble | ArrayDouble | ColumnDouble | ColumnListDouble => Double,
            Bool | PBool | ArrayBool | ColumnBool | ColumnListBool => Bool,
            TextEncodingDict | ColumnTextEncodingDict | ColumnListTextEncodingDict => {
                TextEncodingDict
            }
            Timestamp | ColumnTimestamp => Timestamp,
            Void | GeoPoint | GeoLineString | GeoPolygon | GeoMultiPolygon | Cursor
            | TextEncodingNone => return None,
        };
        Some(value)
    }

    /// Scalar element type of a pointer, array, column or column list.
    /// Scalars, `TextEncodingDict` and `Timestamp` map to themselves.
    ///
    /// # Panics
    ///
    /// For `Void`, geometry, `Cursor` and `TextEncodingNone`; callers must
    /// never ask these for a value type.
    pub fn value_type(self) -> ExtArgumentType {
        match self.try_value_type() {
            Some(value) => value,
            None => {
                log::error!("value_type: no value type for {:?}", self);
                panic!("ExtArgumentType::{:?} has no value type", self);
            }
        }
    }

    /// Codegen type name, used verbatim by the native code generator.
    pub fn type_name(self) -> &'static str {
        match self {
            ExtArgumentType::Bool => "i1",
            ExtArgumentType::Int8 => "i8",
            ExtArgumentType::Int16 => "i16",
            ExtArgumentType::Int32 => "i32",
            ExtArgumentType::Int64 => "i64",
            ExtArgumentType::Float => "float",
            ExtArgumentType::Double => "double",
            ExtArgumentType::Void => "void",
            ExtArgumentType::PInt8 => "i8*",
            ExtArgumentType::PInt16 => "i16*",
            ExtArgumentType::PInt32 => "i32*",
            ExtArgumentType::PInt64 => "i64*",
            ExtArgumentType::PFloat => "float*",
            ExtArgumentType::PDouble => "double*",
            ExtArgumentType::PBool => "i1*",
            ExtArgumentType::ArrayInt8 => "Array<i8>",
            ExtArgumentType::ArrayInt16 => "Array<i16>",
            ExtArgumentType::ArrayInt32 => "Array<i32>",
            ExtArgumentType::ArrayInt64 => "Array<i64>",
            ExtArgumentType::ArrayFloat => "Array<float>",
            ExtArgumentType::ArrayDouble => "Array<double>",
            ExtArgumentType::ArrayBool => "Array<bool>",
            ExtArgumentType::ColumnInt8 => "Column<i8>",
            ExtArgumentType::ColumnInt16 => "Column<i16>",
            ExtArgumentType::ColumnInt32 => "Column<i32>",
            ExtArgumentType::ColumnInt64 => "Column<i64>",
            ExtArgumentType::ColumnFloat => "Column<float>",
            ExtArgumentType::ColumnDouble => "Column<double>",
            ExtArgumentType::ColumnBool => "Column<bool>",
            ExtArgumentType::ColumnTextEncodingDict => "Column<TextEncodingDict>",
            ExtArgumentType::ColumnTimestamp => "Column<timestamp>",
            ExtArgumentType::GeoPoint => "geo_point",
            ExtArgumentType::Cursor => "cursor",
            ExtArgumentType::GeoLineString => "geo_linestring",
            ExtArgumentType::GeoPolygon => "geo_polygon",
            ExtArgumentType::GeoMultiPolygon => "geo_multi_polygon",
            ExtArgumentType::Timestamp => "timestamp",
            ExtArgumentType::TextEncodingNone => "TextEncodingNone",
            ExtArgumentType::TextEncodingDict => "TextEncodingDict",
            ExtArgumentType::ColumnListInt8 => "ColumnList<i8>",
            ExtArgumentType::ColumnListInt16 => "ColumnList<i16>",
            ExtArgumentType::ColumnListInt32 => "ColumnList<i32>",
            ExtArgumentType::ColumnListInt64 => "ColumnList<i64>",
            ExtArgumentType::ColumnListFloat => "ColumnList<float>",
            ExtArgumentType::ColumnListDouble => "ColumnList<double>",
            ExtArgumentType::ColumnListBool => "ColumnList<bool>",
            ExtArgumentType::ColumnListTextEncodingDict => "ColumnList<TextEncodingDict>",
        }
    }

    /// Decode a codegen type name (inverse of [`ExtArgumentType::type_name`]).
    pub fn from_type_name(name: &str) -> Result<Self> {
        let ty = match name.trim() {
            "i1" => ExtArgumentType::Bool,
            "i8" => ExtArgumentType::Int8,
            "i16" => ExtArgumentType::Int16,
            "i32" => ExtArgumentType::Int32,
            "i64" => ExtArgumentType::Int64,
            "float" => ExtArgumentType::Float,
            "double" => ExtArgumentType::Double,
            "void" => ExtArgumentType::Void,
            "i8*" => ExtArgumentType::PInt8,
            "i16*" => ExtArgumentType::PInt16,
            "i32*" => ExtArgumentType::PInt32,
            "i64*" => ExtArgumentType::PInt64,
            "float*" => ExtArgumentType::PFloat,
            "double*" => ExtArgumentType::PDouble,
            "i1*" => ExtArgumentType::PBool,
            "Array<i8>" => ExtArgumentType::ArrayInt8,
            "Array<i16>" => ExtArgumentType::ArrayInt16,
            "Array<i32>" => ExtArgumentType::ArrayInt32,
            "Array<i64>" => ExtArgumentType::ArrayInt64,
            "Array<float>" => ExtArgumentType::ArrayFloat,
            "Array<double>" => ExtArgumentType::ArrayDouble,
            "Array<bool>" => ExtArgumentType::ArrayBool,
            "Column<i8>" => ExtArgumentType::ColumnInt8,
            "Column<i16>" => ExtArgumentType::ColumnInt16,
            "Column<i32>" => ExtArgumentType::ColumnInt32,
            "Column<i64>" => ExtArgumentType::ColumnInt64,
            "Column<float>" => ExtArgumentType::ColumnFloat,
            "Column<double>" => ExtArgumentType::ColumnDouble,
            "Column<bool>" => ExtArgumentType::ColumnBool,
            "Column<TextEncodingDict>" => ExtArgumentType::ColumnTextEncodingDict,
            "Column<timestamp>" => ExtArgumentType::ColumnTimestamp,
            "geo_point" => ExtArgumentType::GeoPoint,
            "cursor" => ExtArgumentType::Cursor,
            "geo_linestring" => ExtArgumentType::GeoLineString,
            "geo_polygon" => ExtArgumentType::GeoPolygon,
            "geo_multi_polygon" => ExtArgumentType::GeoMultiPolygon,
            "timestamp" => ExtArgumentType::Timestamp,
            "TextEncodingNone" => ExtArgumentType::TextEncodingNone,
            "TextEncodingDict" => ExtArgumentType::TextEncodingDict,
            "ColumnList<i8>" => ExtArgumentType::ColumnListInt8,
            "ColumnList<i16>" => ExtArgumentType::ColumnListInt16,
            "ColumnList<i32>" => ExtArgumentType::ColumnListInt32,
            "ColumnList<i64>" => ExtArgumentType::ColumnListInt64,
            "ColumnList<float>" => ExtArgumentType::ColumnListFloat,
            "ColumnList<double>" => ExtArgumentType::ColumnListDouble,
            "ColumnList<bool>" => ExtArgumentType::ColumnListBool,
            "ColumnList<TextEncodingDict>" => ExtArgumentType::ColumnListTextEncodingDict,
            other => return Err(SignatureError::UnknownTypeName(other.to_string())),
        };
        Ok(ty)
    }

    /// SQL catalog type, `None` only for `Void`.
    pub fn sql_type(self) -> Option<SqlTypeName> {
        use ExtArgumentType::*;

        let sql = match self {
            Bool => SqlTypeName::Boolean,
            Int8 => SqlTypeName::TinyInt,
            Int16 => SqlTypeName::SmallInt,
            Int32 => SqlTypeName::Integer,
            Int64 => SqlTypeName::BigInt,
            Float => SqlTypeName::Float,
            Double => SqlTypeName::Double,
            PInt8 | PInt16 | PInt32 | PInt64 | PFloat | PDouble | PBool | ArrayInt8
            | ArrayInt16 | ArrayInt32 | ArrayInt64 | ArrayFloat | ArrayDouble | ArrayBool => {
                SqlTypeName::Array
            }
            GeoPoint | GeoLineString | GeoPolygon | GeoMultiPolygon => SqlTypeName::Geometry,
            Cursor => SqlTypeName::Cursor,
            TextEncodingNone | TextEncodingDict => SqlTypeName::Varchar,
            Timestamp => SqlTypeName::Timestamp,
            ColumnInt8 | ColumnInt16 | ColumnInt32 | ColumnInt64 | ColumnFloat | ColumnDouble
            | ColumnBool | ColumnTimestamp | ColumnTextEncodingDict => SqlTypeName::Column,
            ColumnListInt8 | ColumnListInt16 | ColumnListInt32 | ColumnListInt64
            | ColumnListFloat | ColumnListDouble | ColumnListBool
            | ColumnListTextEncodingDict => SqlTypeName::ColumnList,
            // Void-returning functions are declared by the operator table, never here
            Void => return None,
        };
        Some(sql)
    }

    /// SQL catalog type of an operand or output.
    ///
    /// # Panics
    ///
    /// For `Void`, which is only valid as a row function's return type.
    pub fn to_sql_type_name(self) -> SqlTypeName {
        match self.sql_type() {
            Some(sql) => sql,
            None => {
                log::error!("to_sql_type_name: {:?} has no SQL type", self);
                panic!("ExtArgumentType::{:?} cannot be mapped to a SQL type", self);
            }
        }
    }
}

impl fmt::Display for ExtArgumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

impl std::str::FromStr for ExtArgumentType {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_type_name(s)
    }
}

impl Serialize for ExtArgumentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.type_name())
    }
}
