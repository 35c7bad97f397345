use crate::{
    ast::{
        ast::Expression,
        expressions::{
            BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
            InfixExpression, IntegerLiteral, PrefixExpression,
        },
    },
    errors::errors::ErrorImpl,
    lexer::tokens::TokenKind,
};

use super::{
    lookups::{Associativity, Precedence},
    parser::Parser,
    stmt::parse_block,
};

/// Pratt loop. Expects the first token of the expression in the current
/// slot and leaves the cursor on its last token.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    if !parser.enter_nesting() {
        return None;
    }
    let expr = parse_operand_chain(parser, precedence);
    parser.leave_nesting();

    expr
}

fn parse_operand_chain(parser: &mut Parser, precedence: Precedence) -> Option<Expression> {
    let kind = parser.current_token_kind();
    let prefix = match parser.get_prefix_lookup().get(&kind) {
        Some(prefix) => *prefix,
        None => {
            let literal = parser.current_token().literal.clone();
            parser.push_error(ErrorImpl::NoPrefixParseFn { kind, literal });
            return None;
        }
    };

    let mut left = prefix(parser)?;

    // Keep folding while the next operator binds tighter than the caller's
    while precedence < parser.peek_precedence() {
        let infix = match parser.get_infix_lookup().get(&parser.peek_token().kind) {
            Some(infix) => *infix,
            None => return Some(left),
        };

        parser.next_token();
        left = infix(parser, left)?;
    }

    Some(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Identifier(Identifier::new(
        parser.current_token().literal.clone(),
    )))
}

pub fn parse_integer_literal(parser: &mut Parser) -> Option<Expression> {
    let literal = parser.current_token().literal.clone();

    match literal.parse::<i64>() {
        Ok(value) => Some(Expression::Integer(IntegerLiteral { value })),
        Err(_) => {
            parser.push_error(ErrorImpl::IntegerParseError { literal });
            None
        }
    }
}

pub fn parse_boolean(parser: &mut Parser) -> Option<Expression> {
    Some(Expression::Boolean(BooleanLiteral {
        value: parser.cur_token_is(TokenKind::True),
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Option<Expression> {
    let operator = parser.current_token().literal.clone();
    parser.next_token();

    let operand = parse_expr(parser, Precedence::Prefix)?;

    Some(Expression::Prefix(PrefixExpression {
        operator,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Option<Expression> {
    let operator = parser.current_token().literal.clone();
    let (precedence, associativity) = parser.binding(parser.current_token_kind());
    parser.next_token();

    let right_precedence = match associativity {
        Associativity::Left => precedence,
        Associativity::Right => precedence.lower(),
    };
    let right = parse_expr(parser, right_precedence)?;

    Some(Expression::Infix(InfixExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Option<Expression> {
    parser.next_token();
    let expr = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(expr)
}

/// `if (<condition>) { ... } else { ... }`
pub fn parse_if_expr(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    parser.next_token();
    let condition = parse_expr(parser, Precedence::Lowest)?;

    if !parser.expect_peek(TokenKind::CloseParen) || !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let consequence = parse_block(parser)?;

    let alternative = if parser.peek_token_is(TokenKind::Else) {
        parser.next_token();
        if !parser.expect_peek(TokenKind::OpenCurly) {
            return None;
        }
        Some(parse_block(parser)?)
    } else {
        None
    };

    Some(Expression::If(IfExpression {
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

/// `fn(<parameters>) { ... }`
pub fn parse_function_literal(parser: &mut Parser) -> Option<Expression> {
    if !parser.expect_peek(TokenKind::OpenParen) {
        return None;
    }
    let parameters = parse_function_parameters(parser)?;

    if !parser.expect_peek(TokenKind::OpenCurly) {
        return None;
    }
    let body = parse_block(parser)?;

    Some(Expression::Function(FunctionLiteral { parameters, body }))
}

fn parse_function_parameters(parser: &mut Parser) -> Option<Vec<Identifier>> {
    let mut parameters = vec![];

    if parser.peek_token_is(TokenKind::CloseParen) {
        parser.next_token();
        return Some(parameters);
    }

    loop {
        if !parser.expect_peek(TokenKind::Identifier) {
            return None;
        }
        parameters.push(Identifier::new(parser.current_token().literal.clone()));

        if !parser.peek_token_is(TokenKind::Comma) {
            break;
        }
        parser.next_token();
    }

    if !parser.expect_peek(TokenKind::CloseParen) {
        return None;
    }

    Some(parameters)
}

pub fn parse_call_expr(parser: &mut Parser, callee: Expression) -> Option<Expression> {
    let arguments = parse_expression_list(parser, TokenKind::CloseParen)?;

    Some(Expression::Call(CallExpression {
        callee: Box::new(callee),
        arguments,
    }))
}

/// Comma-separated expressions up to `end`. Expects the opening delimiter in
/// the current slot and leaves the cursor on `end`.
fn parse_expression_list(parser: &mut Parser, end: TokenKind) -> Option<Vec<Expression>> {
    let mut items = vec![];

    if parser.peek_token_is(end) {
        parser.next_token();
        return Some(items);
    }

    parser.next_token();
    items.push(parse_expr(parser, Precedence::Lowest)?);

    while parser.peek_token_is(TokenKind::Comma) {
        parser.next_token();
        parser.next_token();
        items.push(parse_expr(parser, Precedence::Lowest)?);
    }

    if !parser.expect_peek(end) {
        return None;
    }

    Some(items)
}
