use std::collections::HashMap;

use crate::{
    ast::ast::{Expression, Statement},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding strength of an operator, weakest first.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum Precedence {
    Lowest,
    Equals,      // == !=
    LessGreater, // < >
    Sum,         // + -
    Product,     // * /
    Prefix,      // -x !x
    Call,        // f(x)
}

impl Precedence {
    /// One level weaker. Right-associative operators parse their right-hand
    /// side at this level so an operator of equal strength keeps binding.
    pub fn lower(self) -> Precedence {
        match self {
            Precedence::Lowest | Precedence::Equals => Precedence::Lowest,
            Precedence::LessGreater => Precedence::Equals,
            Precedence::Sum => Precedence::LessGreater,
            Precedence::Product => Precedence::Sum,
            Precedence::Prefix => Precedence::Product,
            Precedence::Call => Precedence::Prefix,
        }
    }
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Associativity {
    Left,
    Right,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Statement>;
pub type PrefixHandler = fn(&mut Parser) -> Option<Expression>;
pub type InfixHandler = fn(&mut Parser, Expression) -> Option<Expression>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and comparison
    parser.register_infix(
        TokenKind::Equals,
        Precedence::Equals,
        Associativity::Left,
        parse_infix_expr,
    );
    parser.register_infix(
        TokenKind::NotEquals,
        Precedence::Equals,
        Associativity::Left,
        parse_infix_expr,
    );
    parser.register_infix(
        TokenKind::Less,
        Precedence::LessGreater,
        Associativity::Left,
        parse_infix_expr,
    );
    parser.register_infix(
        TokenKind::Greater,
        Precedence::LessGreater,
        Associativity::Left,
        parse_infix_expr,
    );

    // Additive and multiplicative
    parser.register_infix(
        TokenKind::Plus,
        Precedence::Sum,
        Associativity::Left,
        parse_infix_expr,
    );
    parser.register_infix(
        TokenKind::Minus,
        Precedence::Sum,
        Associativity::Left,
        parse_infix_expr,
    );
    parser.register_infix(
        TokenKind::Asterisk,
        Precedence::Product,
        Associativity::Left,
        parse_infix_expr,
    );
    parser.register_infix(
        TokenKind::Slash,
        Precedence::Product,
        Associativity::Left,
        parse_infix_expr,
    );

    parser.register_infix(
        TokenKind::OpenParen,
        Precedence::Call,
        Associativity::Left,
        parse_call_expr,
    );

    // Literals and symbols
    parser.register_prefix(TokenKind::Identifier, parse_identifier);
    parser.register_prefix(TokenKind::Integer, parse_integer_literal);
    parser.register_prefix(TokenKind::True, parse_boolean);
    parser.register_prefix(TokenKind::False, parse_boolean);
    parser.register_prefix(TokenKind::Bang, parse_prefix_expr);
    parser.register_prefix(TokenKind::Minus, parse_prefix_expr);
    parser.register_prefix(TokenKind::OpenParen, parse_grouping_expr);
    parser.register_prefix(TokenKind::If, parse_if_expr);
    parser.register_prefix(TokenKind::Fn, parse_function_literal);

    // Statements
    parser.register_stmt(TokenKind::Let, parse_let_stmt);
    parser.register_stmt(TokenKind::Return, parse_return_stmt);
    parser.register_stmt(TokenKind::OpenCurly, parse_block_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type PrefixLookup = HashMap<TokenKind, PrefixHandler>;
pub type InfixLookup = HashMap<TokenKind, InfixHandler>;
pub type PrecedenceLookup = HashMap<TokenKind, (Precedence, Associativity)>;
