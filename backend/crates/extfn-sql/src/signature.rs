//! Extension function signatures shared by the validator, the catalog and the code generator.

pub mod extension_function;
pub mod json;
pub mod registry;

pub use extension_function::{ExtensionFunction, FunctionKind};
pub use registry::ExtensionFunctionRegistry;
