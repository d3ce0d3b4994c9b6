//! Command modules for the gxlt CLI.
//!
//! Each subcommand is implemented in its own file following the pattern set
//! by [`traits::Command`].

pub mod common;
pub mod traits;

pub mod catalog;
pub mod tokenize;

// Re-export command types and functions
pub use catalog::{run_catalog, CatalogArgs};
pub use common::OutputFormat;
pub use tokenize::{run_tokenize, InputSource, TokenizeArgs, TokenizeOutput};
