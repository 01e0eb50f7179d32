//! Extension function registry
//!
//! Holds every registered overload by function name. Built once while the
//! catalog loads, then shared read-only (`&self`) across compilation requests.

use super::extension_function::ExtensionFunction;
use super::json::{encode, SignatureDocument, SignatureWire};
use extfn_commons::{Result, SignatureError, SqlTypeFamily};
use extfn_configs::RegistryConfig;
use log::LevelFilter;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct FunctionOverloads {
    /// Spelling of the first registration, used when writing JSON
    name: String,
    signatures: Vec<ExtensionFunction>,
}

/// Registered UDF/UDTF signatures, looked up case-insensitively by name
#[derive(Debug, Clone)]
pub struct ExtensionFunctionRegistry {
    config: RegistryConfig,
    log_level: LevelFilter,
    functions: HashMap<String, FunctionOverloads>,
}

impl Default for ExtensionFunctionRegistry {
    fn default() -> Self {
        Self::new(RegistryConfig::default())
    }
}

impl ExtensionFunctionRegistry {
    pub fn new(config: RegistryConfig) -> Self {
        let log_level = config.logging.level_filter();
        Self {
            config,
            log_level,
            functions: HashMap::new(),
        }
    }

    /// Validate and add one overload of `name`.
    pub fn register(&mut self, name: &str, signature: ExtensionFunction) -> Result<()> {
        signature.validate(name, self.config.validation.strict_pointer_args)?;

        let key = name.to_lowercase();
        let allow_duplicates = self.config.validation.allow_duplicate_overloads;
        let entry = self
            .functions
            .entry(key)
            .or_insert_with(|| FunctionOverloads {
                name: name.to_string(),
                signatures: Vec::new(),
            });

        let duplicate = entry
            .signatures
            .iter()
            .any(|existing| existing.args() == signature.args() && existing.kind() == signature.kind());
        if duplicate && !allow_duplicates {
            return Err(SignatureError::DuplicateOverload(name.to_string()));
        }

        if self.log_level >= LevelFilter::Debug {
            log::debug!(
                target: self.config.logging.target.as_str(),
                "Registered extension function {}",
                signature.to_json(name)
            );
        }
        entry.signatures.push(signature);
        Ok(())
    }

    /// Register every signature object of a JSON array; returns how many were added.
    ///
    /// Stops at the first invalid entry; entries before it stay registered.
    pub fn load_json(&mut self, json: &str) -> Result<usize> {
        let documents: Vec<SignatureDocument> = serde_json::from_str(json)
            .map_err(|e| SignatureError::Malformed(e.to_string()))?;

        let mut loaded = 0;
        for document in documents {
            let (name, signature) = document.into_function()?;
            self.register(&name, signature)?;
            loaded += 1;
        }

        if self.log_level >= LevelFilter::Info {
            log::info!(
                target: self.config.logging.target.as_str(),
                "Loaded {} extension function signatures",
                loaded
            );
        }
        Ok(loaded)
    }

    /// All overloads of `name`, empty when unknown.
    pub fn overloads(&self, name: &str) -> &[ExtensionFunction] {
        self.functions
            .get(&name.to_lowercase())
            .map(|overloads| overloads.signatures.as_slice())
            .unwrap_or(&[])
    }

    /// First overload whose SQL signature matches the call-site operand families.
    pub fn resolve(&self, name: &str, operands: &[SqlTypeFamily]) -> Option<&ExtensionFunction> {
        let found = self
            .overloads(name)
            .iter()
            .find(|signature| signature.to_sql_signature() == operands);

        if found.is_none() && self.log_level >= LevelFilter::Debug {
            log::debug!(
                target: self.config.logging.target.as_str(),
                "No overload of '{}' matches {:?}",
                name,
                operands
            );
        }
        found
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(&name.to_lowercase())
    }

    /// Registered function names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .functions
            .values()
            .map(|overloads| overloads.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Total number of overloads.
    pub fn len(&self) -> usize {
        self.functions
            .values()
            .map(|overloads| overloads.signatures.len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// JSON array of every overload, names sorted, overloads in registration order.
    pub fn to_json(&self) -> String {
        let mut entries: Vec<&FunctionOverloads> = self.functions.values().collect();
        entries.sort_unstable_by(|a, b| a.name.cmp(&b.name));

        let wire: Vec<SignatureWire<'_>> = entries
            .iter()
            .flat_map(|overloads| {
                overloads
                    .signatures
                    .iter()
                    .map(|signature| SignatureWire::new(&overloads.name, signature))
            })
            .collect();
        encode(&wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use extfn_commons::ExtArgumentType::*;

    fn registry() -> ExtensionFunctionRegistry {
        ExtensionFunctionRegistry::default()
    }

    #[test]
    fn test_register_and_lookup_case_insensitive() {
        let mut reg = registry();
        reg.register("Array_Sum", ExtensionFunction::row(vec![PInt32, Int64], Int64))
            .unwrap();

        assert!(reg.contains("array_sum"));
        assert_eq!(reg.overloads("ARRAY_SUM").len(), 1);
        assert_eq!(reg.names(), vec!["Array_Sum"]);
        assert!(reg.overloads("missing").is_empty());
    }

    #[test]
    fn test_register_rejects_invalid_signature() {
        let mut reg = registry();
        let err = reg
            .register("bad", ExtensionFunction::row(vec![Double, PInt32], Double))
            .unwrap_err();
        assert!(matches!(err, SignatureError::PointerWithoutLength { index: 1, .. }));
        assert!(reg.is_empty());
    }

    #[test]
    fn test_lenient_pointer_config() {
        let mut config = RegistryConfig::default();
        config.validation.strict_pointer_args = false;
        let mut reg = ExtensionFunctionRegistry::new(config);
        assert!(reg
            .register("lenient", ExtensionFunction::row(vec![Double, PInt32], Double))
            .is_ok());
    }

    #[test]
    fn test_duplicate_overloads() {
        let mut reg = registry();
        reg.register("f", ExtensionFunction::row(vec![Int32], Int32)).unwrap();
        assert_eq!(
            reg.register("F", ExtensionFunction::row(vec![Int32], Int32)),
            Err(SignatureError::DuplicateOverload("F".to_string()))
        );
        // Same arguments, different return type is a distinct overload
        reg.register("f", ExtensionFunction::row(vec![Int32], Int64)).unwrap();
        assert_eq!(reg.len(), 2);

        let mut config = RegistryConfig::default();
        config.validation.allow_duplicate_overloads = true;
        let mut reg = ExtensionFunctionRegistry::new(config);
        reg.register("f", ExtensionFunction::row(vec![Int32], Int32)).unwrap();
        reg.register("f", ExtensionFunction::row(vec![Int32], Int32)).unwrap();
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn test_resolve_by_sql_signature() {
        let mut reg = registry();
        reg.register("dist", ExtensionFunction::row(vec![GeoPoint, GeoPoint], Double))
            .unwrap();
        reg.register("dist", ExtensionFunction::row(vec![PDouble, Int64, Double], Double))
            .unwrap();

        let resolved = reg
            .resolve("dist", &[SqlTypeFamily::Array, SqlTypeFamily::Numeric])
            .unwrap();
        assert_eq!(resolved.args(), &[PDouble, Int64, Double]);

        let resolved = reg
            .resolve("DIST", &[SqlTypeFamily::Geo, SqlTypeFamily::Geo])
            .unwrap();
        assert_eq!(resolved.args(), &[GeoPoint, GeoPoint]);

        assert!(reg.resolve("dist", &[SqlTypeFamily::Numeric]).is_none());
    }

    #[test]
    fn test_load_json_and_write_back() {
        let mut reg = registry();
        let loaded = reg
            .load_json(
                r#"[
                    {"name":"myudtf","outs":["i64","float"],"args":["Column<i32>"]},
                    {"name":"myudf","ret":"i32","args":["i32","double"]}
                ]"#,
            )
            .unwrap();
        assert_eq!(loaded, 2);

        assert_eq!(
            reg.to_json(),
            concat!(
                r#"[{"name":"myudf","ret":"i32","args":["i32","double"]},"#,
                r#"{"name":"myudtf","outs":["i64","float"],"args":["Column<i32>"]}]"#
            )
        );
    }

    #[test]
    fn test_load_json_errors() {
        let mut reg = registry();
        assert!(matches!(
            reg.load_json("{not json"),
            Err(SignatureError::Malformed(_))
        ));
        assert!(matches!(
            reg.load_json(r#"[{"name":"f","ret":"i32","args":["Column<u8>"]}]"#),
            Err(SignatureError::UnknownTypeName(_))
        ));
        assert!(reg.is_empty());
    }
}
