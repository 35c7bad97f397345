//! Lexical analysis for the Monkey front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Byte-at-a-time scanning with a single byte of lookahead
//! - Recognition of keywords, identifiers, integer literals and operators
//! - Permissive handling of unknown bytes, which become `Illegal` tokens

pub mod lexer;
pub mod tokens;
