//! Catalog command implementation.
//!
//! Prints the token kinds in the order the lexer tries them.

use gxl_lex::{trial_order, value_kinds, TokenCategory, TokenDef, TokenKind};
use serde::Serialize;

use crate::commands::common::{to_json, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Arguments for the catalog command.
#[derive(Debug, Clone, Default)]
pub struct CatalogArgs {
    /// Only list the value kinds.
    pub values_only: bool,
    /// Output format.
    pub format: OutputFormat,
}

/// One row of the catalog listing.
#[derive(Debug, Clone, Serialize)]
struct CatalogEntry {
    kind: TokenKind,
    category: TokenCategory,
    representation: Option<&'static str>,
}

impl From<&TokenDef> for CatalogEntry {
    fn from(def: &TokenDef) -> Self {
        Self {
            kind: def.kind,
            category: def.category,
            representation: def.representation,
        }
    }
}

/// Catalog command handler.
pub struct CatalogCommand {
    args: CatalogArgs,
}

impl Command for CatalogCommand {
    type Args = CatalogArgs;
    type Output = String;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let defs = if self.args.values_only {
            value_kinds()
        } else {
            trial_order()
        };
        let entries: Vec<CatalogEntry> = defs.iter().map(|def| CatalogEntry::from(*def)).collect();

        match self.args.format {
            OutputFormat::Json => to_json(&entries),
            OutputFormat::Table => Ok(entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    format!(
                        "{:>2}  {:<10} {:<26} {}\n",
                        index + 1,
                        entry.category.name(),
                        entry.kind.name(),
                        entry.representation.unwrap_or("-")
                    )
                })
                .collect()),
        }
    }

    fn name() -> &'static str {
        "catalog"
    }
}

/// Run the catalog command.
pub fn run_catalog(args: CatalogArgs) -> Result<String> {
    CatalogCommand::new(args).execute()
}
