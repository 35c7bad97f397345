//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (let bindings, returns, blocks, expression statements)
//! - Expression parsing (prefix and infix operators, calls, `if`, `fn`)
//! - Error recovery and reporting
//!
//! The parser dispatches on token kind through prefix and infix handler
//! tables, with a precedence per infix token.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
