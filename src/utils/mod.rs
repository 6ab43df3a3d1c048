//! Shared utilities: code generation and URL acceptance rules.

pub mod code_generator;
pub mod url_policy;
