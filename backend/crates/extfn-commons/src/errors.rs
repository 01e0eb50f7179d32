//! Error types for extension function signatures.
//!
//! Only boundary-facing operations (decoding type names, parsing signature
//! JSON, registering a signature) return these errors. Mapping a variant
//! that has no counterpart in a table is a programming error and panics.
//!
//! ## Example Usage
//!
//! ```rust
//! use extfn_commons::{ExtArgumentType, SignatureError};
//!
//! let err = ExtArgumentType::from_type_name("i128").unwrap_err();
//! assert!(matches!(err, SignatureError::UnknownTypeName(_)));
//! ```

use thiserror::Error;

/// Result alias used across the extension function crates.
pub type Result<T> = std::result::Result<T, SignatureError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// A codegen type string that no [`crate::ExtArgumentType`] encodes to
    #[error("Unknown extension argument type name: '{0}'")]
    UnknownTypeName(String),

    /// Signature text that is not a valid signature object
    #[error("Malformed signature: {0}")]
    Malformed(String),

    /// Name list length does not match the declared arguments (and outputs)
    #[error("Signature declares {expected} types but {actual} names")]
    NameCountMismatch { expected: usize, actual: usize },

    /// Row function whose pointer argument has no implicit length argument after it
    #[error("Pointer argument {index} of '{function}' must be followed by a length argument")]
    PointerWithoutLength { function: String, index: usize },

    /// Void appears somewhere other than a row function's return type
    #[error("Void is only valid as a return type ('{function}', position {index})")]
    VoidOperand { function: String, index: usize },

    /// Table function output that has no value type and so no SQL column type
    #[error("Output {index} of '{function}' has no SQL column type ({type_name})")]
    OutputWithoutValueType {
        function: String,
        index: usize,
        type_name: String,
    },

    /// Identical overload registered twice under the same name
    #[error("Overload of '{0}' with the same argument types is already registered")]
    DuplicateOverload(String),
}
