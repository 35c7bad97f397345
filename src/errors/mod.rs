//! Diagnostics produced while parsing.
//!
//! This module defines the error types recorded by the parser. It includes:
//!
//! - Specific error variants for token-sequence and literal problems
//! - Error formatting and display functionality
//! - Helpful suggestions for the interactive shell

pub mod errors;

#[cfg(test)]
mod tests;
