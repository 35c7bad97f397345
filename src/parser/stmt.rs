use crate::{
    ast::{
        ast::Statement,
        expressions::Identifier,
        statements::{BlockStatement, LetStatement, ReturnStatement},
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::Precedence},
};

use super::{lookups::StmtHandler, parser::Parser};

/// Parses one statement starting at the current token and leaves the cursor
/// on its last token. A statement that cannot be parsed is skipped.
pub fn parse_stmt(parser: &mut Parser) -> Option<Statement> {
    let depth = parser.depth_before_current();
    let handler = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
        .unwrap_or(parse_expression_stmt as StmtHandler);

    let stmt = handler(parser);
    if stmt.is_none() {
        parser.synchronize(depth);
    }

    stmt
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Option<Statement> {
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(expr.into_stmt())
}

/// `let <name> = <value>;`
pub fn parse_let_stmt(parser: &mut Parser) -> Option<Statement> {
    if !parser.expect_peek(TokenKind::Identifier) {
        return None;
    }
    let name = Identifier::new(parser.current_token().literal.clone());

    if !parser.expect_peek(TokenKind::Assign) {
        return None;
    }
    parser.next_token();

    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Statement::Let(LetStatement { name, value }))
}

/// `return;`, `return <value>;`, or a bare `return` closing a block.
pub fn parse_return_stmt(parser: &mut Parser) -> Option<Statement> {
    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
        return Some(Statement::Return(ReturnStatement { value: None }));
    }

    if parser.peek_token_is(TokenKind::CloseCurly) || parser.peek_token_is(TokenKind::EOF) {
        return Some(Statement::Return(ReturnStatement { value: None }));
    }

    parser.next_token();
    let value = parse_expr(parser, Precedence::Lowest)?;

    if parser.peek_token_is(TokenKind::Semicolon) {
        parser.next_token();
    }

    Some(Statement::Return(ReturnStatement { value: Some(value) }))
}

/// A nested `{ ... }` in statement position.
pub fn parse_block_stmt(parser: &mut Parser) -> Option<Statement> {
    Some(Statement::Block(parse_block(parser)?))
}

/// Expects `{` in the current slot and leaves the cursor on the matching `}`
/// (or on `EOF`, after recording that the brace is missing). Returns `None`
/// only when blocks nest too deeply.
pub fn parse_block(parser: &mut Parser) -> Option<BlockStatement> {
    if !parser.enter_nesting() {
        return None;
    }
    let block = parse_block_statements(parser);
    parser.leave_nesting();

    Some(block)
}

fn parse_block_statements(parser: &mut Parser) -> BlockStatement {
    let depth = parser.brace_depth();
    parser.next_token();

    let mut statements = Vec::new();
    while !parser.cur_token_is(TokenKind::CloseCurly) && !parser.cur_token_is(TokenKind::EOF) {
        match parse_stmt(parser) {
            Some(stmt) => statements.push(stmt),
            None => {
                // the failed statement stopped on this block's closing brace
                if parser.cur_token_is(TokenKind::CloseCurly) && parser.brace_depth() < depth {
                    break;
                }
            }
        }
        parser.next_token();
    }

    if parser.cur_token_is(TokenKind::EOF) {
        parser.push_error(ErrorImpl::ExpectedToken {
            expected: TokenKind::CloseCurly,
            got: TokenKind::EOF,
        });
    }

    BlockStatement { statements }
}
