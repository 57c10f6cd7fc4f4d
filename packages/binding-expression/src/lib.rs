#![deny(clippy::all)]

/**
 * Binding Expression Parser
 *
 * Parses the JavaScript-like expressions found in template bindings into an
 * immutable AST, serializes trees back to text and memoizes parses
 */

pub mod chars;
pub mod config;
pub mod error;
pub mod expression_parser;

pub use config::ParserConfig;
pub use error::{ErrorCode, ParseError, Result};
pub use expression_parser::{
    parse_expression, unparse, Expr, ExpressionKind, ExpressionParser, GrammarMode,
};
