/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Expr` tree and its canonical rendering
/// - expressions: Node payloads and binary operators
pub mod ast;
pub mod expressions;

#[cfg(test)]
mod tests;
