//! Signature JSON transport format
//!
//! Row function:   `{"name":"myudf","ret":"i32","args":["i32","double"]}`
//! Table function: `{"name":"myudtf","outs":["i64","float"],"args":["Column<i32>"]}`
//!
//! Every type is written with its codegen type name. The wire object lists
//! its fields explicitly; nothing else on [`ExtensionFunction`] reaches JSON.

use super::extension_function::{ExtensionFunction, FunctionKind};
use extfn_commons::{ExtArgumentType, Result, SignatureError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outgoing signature object
#[derive(Debug, Serialize)]
pub(crate) struct SignatureWire<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    ret: Option<ExtArgumentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    outs: Option<&'a [ExtArgumentType]>,
    args: &'a [ExtArgumentType],
}

impl<'a> SignatureWire<'a> {
    pub(crate) fn new(name: &'a str, function: &'a ExtensionFunction) -> Self {
        let (ret, outs) = match function.kind() {
            FunctionKind::Row { ret } => (Some(*ret), None),
            FunctionKind::Table { outs } => (None, Some(outs.as_slice())),
        };
        Self {
            name,
            ret,
            outs,
            args: function.args(),
        }
    }
}

/// Incoming signature object, as written by the registration path.
///
/// Type names stay strings here so an unknown name is reported as
/// [`SignatureError::UnknownTypeName`] rather than a generic decode error.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SignatureDocument {
    name: String,
    #[serde(default)]
    ret: Option<String>,
    #[serde(default)]
    outs: Option<Vec<String>>,
    args: Vec<String>,
    #[serde(default)]
    names: Option<Vec<String>>,
    #[serde(default)]
    options: Option<HashMap<String, String>>,
}

impl SignatureDocument {
    pub(crate) fn into_function(self) -> Result<(String, ExtensionFunction)> {
        if self.name.trim().is_empty() {
            return Err(SignatureError::Malformed(
                "signature name cannot be empty".to_string(),
            ));
        }

        let args = decode_types(&self.args)?;
        let function = match (self.ret, self.outs) {
            (Some(ret), None) => {
                ExtensionFunction::row(args, ExtArgumentType::from_type_name(&ret)?)
            }
            (None, Some(outs)) => ExtensionFunction::table(args, decode_types(&outs)?),
            (Some(_), Some(_)) => {
                return Err(SignatureError::Malformed(format!(
                    "'{}' declares both \"ret\" and \"outs\"",
                    self.name
                )))
            }
            (None, None) => {
                return Err(SignatureError::Malformed(format!(
                    "'{}' declares neither \"ret\" nor \"outs\"",
                    self.name
                )))
            }
        };

        let function = match self.names {
            Some(names) => function.with_names(names)?,
            None => function,
        };
        let function = match self.options {
            Some(options) => function.with_options(options),
            None => function,
        };

        Ok((self.name, function))
    }
}

fn decode_types(names: &[String]) -> Result<Vec<ExtArgumentType>> {
    names
        .iter()
        .map(|name| ExtArgumentType::from_type_name(name))
        .collect()
}

pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            // String keys and string values only; failure means the wire types drifted
            log::error!("Failed to encode signature JSON: {}", e);
            panic!("signature JSON encoding failed: {}", e);
        }
    }
}

impl ExtensionFunction {
    /// Serialize this signature under `name` for the catalog and code generator.
    pub fn to_json(&self, name: &str) -> String {
        log::debug!("ExtensionFunction::to_json: {}", name);
        encode(&SignatureWire::new(name, self))
    }

    /// Parse one signature object, returning its name and signature.
    ///
    /// Accepts the [`ExtensionFunction::to_json`] shape plus optional
    /// `"names"` and `"options"` members.
    pub fn from_json(json: &str) -> Result<(String, ExtensionFunction)> {
        let document: SignatureDocument = serde_json::from_str(json)
            .map_err(|e| SignatureError::Malformed(e.to_string()))?;
        document.into_function()
    }
}
