use std::{fmt::Display, slice::Iter};

use super::{
    expressions::{
        BooleanLiteral, CallExpression, FunctionLiteral, Identifier, IfExpression,
        InfixExpression, IntegerLiteral, PrefixExpression,
    },
    statements::{BlockStatement, ExpressionStatement, LetStatement, ReturnStatement},
};

/// Statement Types
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum StmtType {
    LetStmt,
    ReturnStmt,
    ExpressionStmt,
    BlockStmt,
}

/// Statement
///
/// Anything that occupies a statement position. Each variant owns its node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Let(LetStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
    Block(BlockStatement),
}

impl Statement {
    /// Returns the type of the statement.
    pub fn get_stmt_type(&self) -> StmtType {
        match self {
            Statement::Let(_) => StmtType::LetStmt,
            Statement::Return(_) => StmtType::ReturnStmt,
            Statement::Expression(_) => StmtType::ExpressionStmt,
            Statement::Block(_) => StmtType::BlockStmt,
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Let(stmt) => Display::fmt(stmt, f),
            Statement::Return(stmt) => Display::fmt(stmt, f),
            Statement::Expression(stmt) => Display::fmt(stmt, f),
            Statement::Block(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Identifier,
    Integer,
    Boolean,
    Prefix,
    Infix,
    If,
    Function,
    Call,
}

/// Expression
///
/// Anything that produces a value. Children are boxed, so the tree has
/// exactly one owner per node and no cycles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Function(FunctionLiteral),
    Call(CallExpression),
}

impl Expression {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expression::Identifier(_) => ExprType::Identifier,
            Expression::Integer(_) => ExprType::Integer,
            Expression::Boolean(_) => ExprType::Boolean,
            Expression::Prefix(_) => ExprType::Prefix,
            Expression::Infix(_) => ExprType::Infix,
            Expression::If(_) => ExprType::If,
            Expression::Function(_) => ExprType::Function,
            Expression::Call(_) => ExprType::Call,
        }
    }

    pub fn into_stmt(self) -> Statement {
        Statement::Expression(ExpressionStatement { expr: self })
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expression::Identifier(expr) => Display::fmt(expr, f),
            Expression::Integer(expr) => Display::fmt(expr, f),
            Expression::Boolean(expr) => Display::fmt(expr, f),
            Expression::Prefix(expr) => Display::fmt(expr, f),
            Expression::Infix(expr) => Display::fmt(expr, f),
            Expression::If(expr) => Display::fmt(expr, f),
            Expression::Function(expr) => Display::fmt(expr, f),
            Expression::Call(expr) => Display::fmt(expr, f),
        }
    }
}

/// Program
///
/// The root of the tree. An empty program is syntactically valid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl<'a> IntoIterator for &'a Program {
    type Item = &'a Statement;
    type IntoIter = Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}
