//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and its token cursor. The
//! parser pulls tokens from a [`Lexer`] one at a time and keeps exactly two
//! of them: the current token and the peek token.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - Prefix handlers, for tokens that start an expression
//! - Infix handlers, for tokens that continue one
//! - Precedence and associativity of every infix token
//!
//! Nothing here fails outright. Problems are recorded as diagnostics and the
//! parser carries on with the next statement.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{
        create_token_lookups, Associativity, InfixHandler, InfixLookup, Precedence,
        PrecedenceLookup, PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// How many expressions and blocks may enclose one another before the
/// parser gives up on the statement.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// Source of tokens
    lexer: Lexer,
    /// The token under examination
    cur_token: Token,
    /// One token of lookahead
    peek_token: Token,
    /// Diagnostics in the order they were found
    errors: Vec<Error>,
    /// `{` minus `}` over every token that has reached the current slot
    brace_depth: isize,
    /// Expressions and blocks currently being parsed
    nesting: usize,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix precedence and associativity
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a parser over `lexer` with the standard grammar registered
    /// and both token slots filled.
    pub fn new(lexer: Lexer) -> Self {
        let mut parser = Parser {
            lexer,
            cur_token: Token {
                kind: TokenKind::EOF,
                literal: String::new(),
            },
            peek_token: Token {
                kind: TokenKind::EOF,
                literal: String::new(),
            },
            errors: vec![],
            brace_depth: 0,
            nesting: 0,
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);

        parser.next_token();
        parser.next_token();
        parser
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.cur_token
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.cur_token.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek_token
    }

    /// Shifts the peek token into the current slot and pulls a fresh one.
    pub fn next_token(&mut self) {
        self.cur_token = std::mem::replace(&mut self.peek_token, self.lexer.next_token());

        match self.cur_token.kind {
            TokenKind::OpenCurly => self.brace_depth += 1,
            TokenKind::CloseCurly => self.brace_depth -= 1,
            _ => {}
        }
    }

    /// Brace depth including the current token, so a current `{` has
    /// already raised it and a current `}` has already lowered it.
    pub fn brace_depth(&self) -> isize {
        self.brace_depth
    }

    /// Brace depth just before the current token was read.
    pub fn depth_before_current(&self) -> isize {
        match self.cur_token.kind {
            TokenKind::OpenCurly => self.brace_depth - 1,
            TokenKind::CloseCurly => self.brace_depth + 1,
            _ => self.brace_depth,
        }
    }

    /// Claims one level of nesting. Past [`MAX_NESTING_DEPTH`] records a
    /// diagnostic and returns `false`; the caller must then give up without
    /// calling [`Parser::leave_nesting`].
    pub fn enter_nesting(&mut self) -> bool {
        if self.nesting >= MAX_NESTING_DEPTH {
            self.push_error(ErrorImpl::NestingTooDeep {
                limit: MAX_NESTING_DEPTH,
            });
            return false;
        }

        self.nesting += 1;
        true
    }

    pub fn leave_nesting(&mut self) {
        self.nesting = self.nesting.saturating_sub(1);
    }

    pub fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.cur_token.kind == kind
    }

    pub fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek_token.kind == kind
    }

    /// Advances if the peek token is `kind`. Otherwise records
    /// `expected next token to be <kind>, got <peek> instead` and leaves the
    /// cursor where it is.
    pub fn expect_peek(&mut self, kind: TokenKind) -> bool {
        if self.peek_token_is(kind) {
            self.next_token();
            true
        } else {
            self.push_error(ErrorImpl::ExpectedToken {
                expected: kind,
                got: self.peek_token.kind,
            });
            false
        }
    }

    /// Precedence and associativity registered for `kind`; tokens that are
    /// not infix operators bind at `Lowest`.
    pub fn binding(&self, kind: TokenKind) -> (Precedence, Associativity) {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or((Precedence::Lowest, Associativity::Left))
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.binding(self.peek_token.kind).0
    }

    pub fn push_error(&mut self, error: ErrorImpl) {
        self.errors.push(error.into());
    }

    /// Rendered diagnostics, in the order they were recorded.
    pub fn errors(&self) -> Vec<String> {
        self.errors.iter().map(|e| e.to_string()).collect()
    }

    pub fn diagnostics(&self) -> &[Error] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `precedence` - How tightly the operator binds
    /// * `associativity` - Which side an equal-precedence chain groups to
    /// * `infix_fn` - The handler, called with the already-parsed left operand
    pub fn register_infix(
        &mut self,
        kind: TokenKind,
        precedence: Precedence,
        associativity: Associativity,
        infix_fn: InfixHandler,
    ) {
        self.precedence_lookup.insert(kind, (precedence, associativity));
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn register_prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn register_stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Skips the rest of a malformed statement that started at brace depth
    /// `depth`. Braces opened by the statement itself are skipped whole.
    ///
    /// Stops at end of input and on a `}` closing the enclosing block. At the
    /// statement's own depth it also stops on `;` and before a `}`.
    pub fn synchronize(&mut self, depth: isize) {
        loop {
            if self.cur_token_is(TokenKind::EOF) || self.peek_token_is(TokenKind::EOF) {
                return;
            }
            if self.brace_depth < depth {
                return;
            }
            if self.brace_depth == depth
                && (self.cur_token_is(TokenKind::Semicolon)
                    || self.peek_token_is(TokenKind::CloseCurly))
            {
                return;
            }
            self.next_token();
        }
    }

    /// Parses statements until end of input. Always returns a tree; check
    /// [`Parser::errors`] before trusting it.
    pub fn parse_program(&mut self) -> Program {
        let mut statements = vec![];

        while !self.cur_token_is(TokenKind::EOF) {
            if let Some(stmt) = parse_stmt(self) {
                statements.push(stmt);
            }
            self.next_token();
        }

        Program { statements }
    }
}

/// Tokenizes and parses `source` in one go.
///
/// # Returns
///
/// A tuple containing:
/// - The Parser instance, holding any diagnostics
/// - The (possibly partial) Program
pub fn parse(source: String) -> (Parser, Program) {
    let mut parser = Parser::new(Lexer::new(source));
    let program = parser.parse_program();

    (parser, program)
}
