//! Library side of the `ocm-model` tool.
//!
//! The binary decodes OCM model documents with the typed model of
//! `ocm-api-model`, so everything it prints went through the same encoding
//! rules as a client would use.

pub mod cli;
pub mod commands;
pub mod document;
pub mod error;
pub mod input;

pub use cli::{Cli, Commands, run};
pub use document::DocumentKind;
pub use error::CliError;
