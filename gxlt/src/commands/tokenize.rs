//! Tokenize command implementation.
//!
//! Reads an expression from the command line, a file or standard input and
//! prints its token stream.

use std::io::Read;
use std::path::PathBuf;

use gxl_lex::{tokenize_with_config, LexerConfig, Token};
use tracing::{debug, info};

use crate::commands::common::{to_json, OutputFormat};
use crate::commands::traits::Command;
use crate::error::Result;

/// Where the source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Expression given inline.
    Expr(String),
    /// Path of a file to read.
    File(PathBuf),
    /// Standard input.
    Stdin,
}

/// Arguments for the tokenize command.
#[derive(Debug, Clone)]
pub struct TokenizeArgs {
    /// Source of the text to tokenize.
    pub input: InputSource,
    /// Output format.
    pub format: OutputFormat,
    /// Drop comment tokens from the output.
    pub strip_comments: bool,
    /// Lexer settings.
    pub lexer: LexerConfig,
}

/// Outcome of a tokenize run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizeOutput {
    /// Rendered token stream for standard output.
    Tokens(String),
    /// Rendered diagnostics for standard error.
    Failed(String),
}

/// Tokenize command handler.
pub struct TokenizeCommand {
    args: TokenizeArgs,
}

impl TokenizeCommand {
    fn read_source(&self) -> Result<String> {
        match &self.args.input {
            InputSource::Expr(expr) => Ok(expr.clone()),
            InputSource::File(path) => {
                debug!(path = %path.display(), "reading source file");
                Ok(std::fs::read_to_string(path)?)
            },
            InputSource::Stdin => {
                let mut source = String::new();
                std::io::stdin().read_to_string(&mut source)?;
                Ok(source)
            },
        }
    }

    fn render(&self, tokens: &[Token]) -> Result<String> {
        let tokens: Vec<&Token> = tokens
            .iter()
            .filter(|token| !self.args.strip_comments || token.is_visible())
            .collect();

        match self.args.format {
            OutputFormat::Json => to_json(&tokens),
            OutputFormat::Table => Ok(render_table(&tokens)),
        }
    }
}

/// One line per token: one-based position, category, kind and quoted text.
fn render_table(tokens: &[&Token]) -> String {
    tokens
        .iter()
        .map(|token| {
            let position = format!("{}:{}", token.row + 1, token.col + 1);
            format!(
                "{:<8} {:<10} {:<26} {:?}\n",
                position,
                token.category.name(),
                token.kind.name(),
                token.text
            )
        })
        .collect()
}

impl Command for TokenizeCommand {
    type Args = TokenizeArgs;
    type Output = TokenizeOutput;

    fn new(args: Self::Args) -> Self {
        Self { args }
    }

    fn execute(&self) -> Result<Self::Output> {
        let source = self.read_source()?;

        match tokenize_with_config(&source, &self.args.lexer) {
            Ok(tokens) => {
                info!(tokens = tokens.len(), "tokenized input");
                Ok(TokenizeOutput::Tokens(self.render(&tokens)?))
            },
            Err(err) => Ok(TokenizeOutput::Failed(err.to_diagnostic().render())),
        }
    }

    fn name() -> &'static str {
        "tokenize"
    }
}

/// Run the tokenize command.
pub fn run_tokenize(args: TokenizeArgs) -> Result<TokenizeOutput> {
    let command = TokenizeCommand::new(args);
    debug!(command = TokenizeCommand::name(), "executing");
    command.execute()
}
