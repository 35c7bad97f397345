/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The statement and expression sum types and the program root
/// - expressions: Node definitions for each expression kind
/// - statements: Node definitions for each statement kind
pub mod ast;
pub mod expressions;
pub mod statements;
