//! Common types and utilities for gxlt commands.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::Result;

// ============================================================================
// Output Format
// ============================================================================

/// Supported output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One aligned line per item
    #[default]
    Table,
    /// Pretty-printed JSON array
    Json,
}

/// Renders `items` as a pretty JSON array followed by a newline.
pub fn to_json<T: Serialize>(items: &[T]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(items)?;
    out.push('\n');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_format_is_table() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_format_from_cli_value() {
        assert_eq!(OutputFormat::from_str("json", true), Ok(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("TABLE", true), Ok(OutputFormat::Table));
        assert!(OutputFormat::from_str("yaml", true).is_err());
    }

    #[test]
    fn test_to_json() {
        assert_eq!(to_json(&[1, 2]).unwrap(), "[\n  1,\n  2\n]\n");
    }
}
