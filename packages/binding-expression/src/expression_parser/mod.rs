/**
 * Expression Parser Module
 *
 * Scanner, grammar, AST, unparser and cache for binding expressions
 */
pub mod ast;
pub mod cache;
pub mod lexer;
pub mod parser;
pub mod unparser;

use serde::{Deserialize, Serialize};

pub use ast::*;
pub use cache::ExpressionParser;
pub use lexer::{Lexer, Scanner, Token};
pub use parser::parse_expression;
pub use unparser::{unparse, Unparser};

/// Which sub-grammar applies to a parse. Chosen by the caller per binding
/// command, never inferred from the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GrammarMode {
    None,
    /// Literal text with `${expression}` holes.
    Interpolation,
    /// `declaration of iterable`, with an optional `; ...` trailing clause.
    IsIterator,
    /// Expression that may be followed by `;` and more text.
    IsChainable,
    IsFunction,
    #[default]
    IsProperty,
    /// Opaque text kept verbatim.
    IsCustom,
}
