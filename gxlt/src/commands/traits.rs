//! Command trait for the gxlt CLI.

use crate::error::Result;

/// Standard command trait that all gxlt commands implement.
///
/// Commands return their rendered output instead of printing it, so the
/// caller decides where it goes.
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}
