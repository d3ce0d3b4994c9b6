//! Lexer configuration.
//!
//! The only tunable of the scanner is which characters count as whitespace
//! between tokens and as terminators of numeric literals. A newline always
//! separates tokens, whether or not it appears in the set.

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref DEFAULT_CONFIG: LexerConfig = LexerConfig::default();
}

/// Settings applied to one lexing run.
///
/// # Example
///
/// ```
/// use gxl_lex::LexerConfig;
///
/// let config = LexerConfig::default();
/// assert!(config.is_whitespace(' '));
/// assert!(config.is_whitespace('\t'));
/// assert!(!config.is_whitespace('\r'));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexerConfig {
    /// Characters treated as whitespace.
    #[serde(default = "default_whitespace")]
    pub whitespace: Vec<char>,
}

fn default_whitespace() -> Vec<char> {
    vec![' ', '\t']
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            whitespace: default_whitespace(),
        }
    }
}

impl LexerConfig {
    /// Creates a configuration with an explicit whitespace set.
    pub fn with_whitespace(whitespace: impl IntoIterator<Item = char>) -> Self {
        Self {
            whitespace: whitespace.into_iter().collect(),
        }
    }

    /// Returns the process-wide default configuration.
    pub fn shared_default() -> &'static LexerConfig {
        &DEFAULT_CONFIG
    }

    /// Returns true if `c` belongs to the configured whitespace set.
    #[inline]
    pub fn is_whitespace(&self, c: char) -> bool {
        self.whitespace.contains(&c)
    }
}
