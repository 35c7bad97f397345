#![allow(clippy::module_inception)]

//! Front end for the Monkey scripting language: a byte-level lexer and a
//! Pratt parser producing an owned AST.
//!
//! ```
//! use monkey::parser::parser::parse;
//!
//! let (parser, program) = parse(String::from("let x = 1 + 2 * 3;"));
//! assert!(parser.errors().is_empty());
//! assert_eq!(program.to_string(), "let x = (1 + (2 * 3));");
//! ```

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
