//! Extension function signature
//!
//! A signature is either a row function (UDF: one return type) or a table
//! function (UDTF: an ordered list of output column types). It is built once
//! at registration time and only read afterwards.

use extfn_commons::{ExtArgumentType, Result, SignatureError, SqlTypeFamily, SqlTypeName};
use std::collections::HashMap;

/// Row vs. table function, each carrying only what its mode uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctionKind {
    /// One scalar value per input row
    Row { ret: ExtArgumentType },
    /// A relation with one column per output type
    Table { outs: Vec<ExtArgumentType> },
}

/// Type signature of a UDF or UDTF
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFunction {
    args: Vec<ExtArgumentType>,
    kind: FunctionKind,
    /// Argument names followed by output names
    names: Option<Vec<String>>,
    options: Option<HashMap<String, String>>,
}

impl ExtensionFunction {
    /// Row function (UDF) signature
    pub fn row(args: Vec<ExtArgumentType>, ret: ExtArgumentType) -> Self {
        Self {
            args,
            kind: FunctionKind::Row { ret },
            names: None,
            options: None,
        }
    }

    /// Table function (UDTF) signature
    pub fn table(args: Vec<ExtArgumentType>, outs: Vec<ExtArgumentType>) -> Self {
        Self {
            args,
            kind: FunctionKind::Table { outs },
            names: None,
            options: None,
        }
    }

    /// Attach the combined name list: one name per argument, then one per output.
    pub fn with_names(mut self, names: Vec<String>) -> Result<Self> {
        let expected = self.args.len() + self.declared_outs().len();
        if names.len() != expected {
            return Err(SignatureError::NameCountMismatch {
                expected,
                actual: names.len(),
            });
        }
        self.names = Some(names);
        Ok(self)
    }

    pub fn with_options(mut self, options: HashMap<String, String>) -> Self {
        self.options = Some(options);
        self
    }

    pub fn args(&self) -> &[ExtArgumentType] {
        &self.args
    }

    pub fn kind(&self) -> &FunctionKind {
        &self.kind
    }

    pub fn is_row_udf(&self) -> bool {
        matches!(self.kind, FunctionKind::Row { .. })
    }

    pub fn is_table_udf(&self) -> bool {
        !self.is_row_udf()
    }

    /// Return type of a row function.
    ///
    /// # Panics
    ///
    /// When called on a table function.
    pub fn ret(&self) -> ExtArgumentType {
        match &self.kind {
            FunctionKind::Row { ret } => *ret,
            FunctionKind::Table { .. } => {
                log::error!("ret() called on a table function signature");
                panic!("ExtensionFunction::ret called on a table function");
            }
        }
    }

    /// Output types of a table function.
    ///
    /// # Panics
    ///
    /// When called on a row function.
    pub fn outs(&self) -> &[ExtArgumentType] {
        match &self.kind {
            FunctionKind::Table { outs } => outs.as_slice(),
            FunctionKind::Row { .. } => {
                log::error!("outs() called on a row function signature");
                panic!("ExtensionFunction::outs called on a row function");
            }
        }
    }

    /// Outputs for either mode; empty for row functions.
    fn declared_outs(&self) -> &[ExtArgumentType] {
        match &self.kind {
            FunctionKind::Table { outs } => outs.as_slice(),
            FunctionKind::Row { .. } => &[],
        }
    }

    pub fn names(&self) -> Option<&[String]> {
        self.names.as_deref()
    }

    pub fn arg_names(&self) -> Option<&[String]> {
        self.names.as_deref().map(|names| &names[..self.args.len()])
    }

    /// Argument names without any array suffix (`"values[3]"` becomes `"values"`).
    pub fn pretty_arg_names(&self) -> Option<Vec<String>> {
        self.arg_names().map(|names| {
            names
                .iter()
                .map(|name| name.split('[').next().unwrap_or_default().to_string())
                .collect()
        })
    }

    pub fn out_names(&self) -> Option<&[String]> {
        self.names.as_deref().map(|names| &names[self.args.len()..])
    }

    pub fn options(&self) -> Option<&HashMap<String, String>> {
        self.options.as_ref()
    }

    /// SQL return type of a row function, `None` for a `Void` return.
    ///
    /// # Panics
    ///
    /// When called on a table function.
    pub fn sql_ret(&self) -> Option<SqlTypeName> {
        self.ret().sql_type()
    }

    /// SQL column types of a table function's output relation, in declared order.
    ///
    /// # Panics
    ///
    /// When called on a row function, or when an output has no value type.
    pub fn sql_outs(&self) -> Vec<SqlTypeName> {
        self.outs()
            .iter()
            .map(|out| out.value_type().to_sql_type_name())
            .collect()
    }

    /// SQL type families of the operands as seen at the call site.
    ///
    /// Row functions pass an implicit length after every pointer argument; that
    /// argument never appears in SQL, so it is consumed here. Table functions
    /// map every declared argument one-to-one.
    pub fn to_sql_signature(&self) -> Vec<SqlTypeFamily> {
        let mut sql_sig = Vec::with_capacity(self.args.len());
        let mut args = self.args.iter();

        while let Some(arg) = args.next() {
            sql_sig.push(arg.to_sql_type_name().family());
            if self.is_row_udf() && arg.is_pointer() {
                args.next();
            }
        }

        sql_sig
    }

    /// Registration-time checks that keep the SQL mappings total.
    ///
    /// `Void` is rejected as an argument or output, and every table function
    /// output must have a value type so `sql_outs` cannot fault. With
    /// `strict_pointer_args`, every pointer argument of a row function must be
    /// followed by an integer scalar (`Int8`..`Int64`) length argument.
    pub fn validate(&self, function: &str, strict_pointer_args: bool) -> Result<()> {
        let void_position = self
            .args
            .iter()
            .chain(self.declared_outs())
            .position(|ty| *ty == ExtArgumentType::Void);
        if let Some(index) = void_position {
            return Err(SignatureError::VoidOperand {
                function: function.to_string(),
                index,
            });
        }

        if let FunctionKind::Table { outs } = &self.kind {
            if let Some(index) = outs.iter().position(|out| out.try_value_type().is_none()) {
                return Err(SignatureError::OutputWithoutValueType {
                    function: function.to_string(),
                    index,
                    type_name: outs[index].type_name().to_string(),
                });
            }
        }

        if strict_pointer_args && self.is_row_udf() {
            let mut idx = 0;
            while idx < self.args.len() {
                if !self.args[idx].is_pointer() {
                    idx += 1;
                    continue;
                }
                match self.args.get(idx + 1) {
                    Some(len) if is_length_type(*len) => idx += 2,
                    _ => {
                        return Err(SignatureError::PointerWithoutLength {
                            function: function.to_string(),
                            index: idx,
                        })
                    }
                }
            }
        }

        Ok(())
    }
}

fn is_length_type(ty: ExtArgumentType) -> bool {
    matches!(
        ty,
        ExtArgumentType::Int8
            | ExtArgumentType::Int16
            | ExtArgumentType::Int32
            | ExtArgumentType::Int64
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ExtArgumentType::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_pointer_consumes_length_argument() {
        let sig = ExtensionFunction::row(vec![PInt32, Int32, Double], Double);
        assert_eq!(
            sig.to_sql_signature(),
            vec![SqlTypeFamily::Array, SqlTypeFamily::Numeric]
        );
    }

    #[test]
    fn test_multiple_pointer_pairs() {
        let sig = ExtensionFunction::row(vec![Bool, PDouble, Int64, PInt8, Int64], Int32);
        assert_eq!(
            sig.to_sql_signature(),
            vec![
                SqlTypeFamily::Boolean,
                SqlTypeFamily::Array,
                SqlTypeFamily::Array
            ]
        );
    }

    #[test]
    fn test_arrays_do_not_consume() {
        let sig = ExtensionFunction::row(vec![ArrayInt32, Int32], Int32);
        assert_eq!(
            sig.to_sql_signature(),
            vec![SqlTypeFamily::Array, SqlTypeFamily::Numeric]
        );
    }

    #[test]
    fn test_table_function_maps_every_argument() {
        let sig = ExtensionFunction::table(vec![ColumnInt32, ColumnDouble], vec![Int64]);
        assert_eq!(
            sig.to_sql_signature(),
            vec![SqlTypeFamily::Column, SqlTypeFamily::Column]
        );

        // No pointer/length convention for table functions
        let sig = ExtensionFunction::table(vec![PInt32, Int32], vec![Int64]);
        assert_eq!(
            sig.to_sql_signature(),
            vec![SqlTypeFamily::Array, SqlTypeFamily::Numeric]
        );
    }

    #[test]
    fn test_sql_outs_project_value_types() {
        let sig = ExtensionFunction::table(
            vec![Cursor, Int32],
            vec![ColumnInt64, ColumnFloat, ColumnTextEncodingDict, ColumnTimestamp],
        );
        assert_eq!(
            sig.sql_outs(),
            vec![
                SqlTypeName::BigInt,
                SqlTypeName::Float,
                SqlTypeName::Varchar,
                SqlTypeName::Timestamp
            ]
        );
    }

    #[test]
    fn test_sql_ret() {
        assert_eq!(
            ExtensionFunction::row(vec![Int32], Double).sql_ret(),
            Some(SqlTypeName::Double)
        );
        assert_eq!(ExtensionFunction::row(vec![], Void).sql_ret(), None);
    }

    #[test]
    #[should_panic(expected = "called on a row function")]
    fn test_sql_outs_on_row_function_panics() {
        ExtensionFunction::row(vec![Int32], Int32).sql_outs();
    }

    #[test]
    #[should_panic(expected = "called on a table function")]
    fn test_ret_on_table_function_panics() {
        ExtensionFunction::table(vec![ColumnInt32], vec![Int32]).ret();
    }

    #[test]
    #[should_panic(expected = "called on a row function")]
    fn test_outs_on_row_function_panics() {
        ExtensionFunction::row(vec![Int32], Int32).outs();
    }

    #[test]
    fn test_name_split() {
        let sig = ExtensionFunction::table(vec![ColumnInt32, Int32], vec![ColumnInt64])
            .with_names(names(&["input", "multiplier", "out0"]))
            .unwrap();

        assert_eq!(sig.arg_names().unwrap(), &names(&["input", "multiplier"])[..]);
        assert_eq!(sig.out_names().unwrap(), &names(&["out0"])[..]);
    }

    #[test]
    fn test_row_function_names() {
        let sig = ExtensionFunction::row(vec![ArrayInt32, Int32], Int32)
            .with_names(names(&["values[10]", "n"]))
            .unwrap();

        assert_eq!(sig.pretty_arg_names().unwrap(), names(&["values", "n"]));
        assert!(sig.out_names().unwrap().is_empty());
    }

    #[test]
    fn test_names_absent() {
        let sig = ExtensionFunction::row(vec![Int32], Int32);
        assert!(sig.arg_names().is_none());
        assert!(sig.pretty_arg_names().is_none());
        assert!(sig.out_names().is_none());
        assert!(sig.options().is_none());
    }

    #[test]
    fn test_name_count_mismatch() {
        let result = ExtensionFunction::table(vec![ColumnInt32, Int32], vec![ColumnInt64])
            .with_names(names(&["input", "out0"]));
        assert_eq!(
            result.unwrap_err(),
            SignatureError::NameCountMismatch {
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_options() {
        let mut options = HashMap::new();
        options.insert("filter_table_function_transpose".to_string(), "on".to_string());
        let sig = ExtensionFunction::table(vec![ColumnInt32], vec![ColumnInt32])
            .with_options(options.clone());
        assert_eq!(sig.options(), Some(&options));
    }

    #[test]
    fn test_validate_pointer_rules() {
        assert!(ExtensionFunction::row(vec![PInt32, Int64, Double], Double)
            .validate("ok", true)
            .is_ok());

        let trailing = ExtensionFunction::row(vec![Double, PInt32], Double);
        assert_eq!(
            trailing.validate("f", true).unwrap_err(),
            SignatureError::PointerWithoutLength {
                function: "f".to_string(),
                index: 1
            }
        );
        assert!(trailing.validate("f", false).is_ok());

        let adjacent = ExtensionFunction::row(vec![PInt32, PInt32, Int64], Double);
        assert!(matches!(
            adjacent.validate("g", true),
            Err(SignatureError::PointerWithoutLength { index: 0, .. })
        ));

        // Length must be an integer scalar
        let float_length = ExtensionFunction::row(vec![PInt32, Double], Double);
        assert!(matches!(
            float_length.validate("h", true),
            Err(SignatureError::PointerWithoutLength { index: 0, .. })
        ));
        assert!(float_length.validate("h", false).is_ok());

        // Table functions have no pointer/length convention
        assert!(ExtensionFunction::table(vec![PInt32], vec![Int32])
            .validate("tf", true)
            .is_ok());
    }

    #[test]
    fn test_validate_void_operands() {
        assert!(ExtensionFunction::row(vec![Int32], Void).validate("f", true).is_ok());

        let err = ExtensionFunction::row(vec![Int32, Void], Int32)
            .validate("f", true)
            .unwrap_err();
        assert!(matches!(err, SignatureError::VoidOperand { index: 1, .. }));

        let err = ExtensionFunction::table(vec![ColumnInt32], vec![Void])
            .validate("tf", true)
            .unwrap_err();
        assert!(matches!(err, SignatureError::VoidOperand { index: 1, .. }));
    }

    #[test]
    fn test_validate_outputs_need_value_type() {
        for out in [TextEncodingNone, Cursor, GeoPoint, GeoMultiPolygon] {
            let err = ExtensionFunction::table(vec![ColumnInt32], vec![ColumnInt64, out])
                .validate("tf", true)
                .unwrap_err();
            assert_eq!(
                err,
                SignatureError::OutputWithoutValueType {
                    function: "tf".to_string(),
                    index: 1,
                    type_name: out.type_name().to_string(),
                }
            );
        }

        // Array outputs project to their element type
        assert!(ExtensionFunction::table(vec![ColumnInt32], vec![ArrayDouble])
            .validate("tf", true)
            .is_ok());
    }
}
