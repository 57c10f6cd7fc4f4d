/**
 * Parse Errors
 *
 * Error taxonomy shared by the scanner and the parser
 */

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes. The numeric value is part of the public contract and
/// never changes between releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    InvalidStartOfExpression,
    InvalidSpreadOp,
    ExpectedIdentifier,
    InvalidMemberExpression,
    UnexpectedEndOfExpression,
    UnconsumedToken,
    InvalidEmptyExpression,
    LhsNotAssignable,
    ExpectedValueConverterIdentifier,
    ExpectedBindingBehaviorIdentifier,
    UnexpectedOfKeyword,
    UnexpectedImportKeyword,
    InvalidLhsBindingIdentifierInForOf,
    InvalidPropDefInObjLiteral,
    UnterminatedStringLiteral,
    UnterminatedTemplateLiteral,
    MissingExpectedToken,
    UnexpectedCharacter,
    InvalidUnicodeEscape,
    UnexpectedTokenInDestructuring,
    UnexpectedTokenInOptionalChain,
    InvalidTaggedTemplateOnOptionalChain,
    InvalidArrowParameterList,
    DefaultParamsInArrowFn,
    DestructuringParamsInArrowFn,
    RestParamsMustBeLast,
    FunctionBodyInArrowFn,
    UnexpectedDoubleDot,
}

impl ErrorCode {
    pub fn code(self) -> u16 {
        match self {
            ErrorCode::InvalidStartOfExpression => 151,
            ErrorCode::InvalidSpreadOp => 152,
            ErrorCode::ExpectedIdentifier => 153,
            ErrorCode::InvalidMemberExpression => 154,
            ErrorCode::UnexpectedEndOfExpression => 155,
            ErrorCode::UnconsumedToken => 156,
            ErrorCode::InvalidEmptyExpression => 157,
            ErrorCode::LhsNotAssignable => 158,
            ErrorCode::ExpectedValueConverterIdentifier => 159,
            ErrorCode::ExpectedBindingBehaviorIdentifier => 160,
            ErrorCode::UnexpectedOfKeyword => 161,
            ErrorCode::UnexpectedImportKeyword => 162,
            ErrorCode::InvalidLhsBindingIdentifierInForOf => 163,
            ErrorCode::InvalidPropDefInObjLiteral => 164,
            ErrorCode::UnterminatedStringLiteral => 165,
            ErrorCode::UnterminatedTemplateLiteral => 166,
            ErrorCode::MissingExpectedToken => 167,
            ErrorCode::UnexpectedCharacter => 168,
            ErrorCode::InvalidUnicodeEscape => 169,
            ErrorCode::UnexpectedTokenInDestructuring => 170,
            ErrorCode::UnexpectedTokenInOptionalChain => 171,
            ErrorCode::InvalidTaggedTemplateOnOptionalChain => 172,
            ErrorCode::InvalidArrowParameterList => 173,
            ErrorCode::DefaultParamsInArrowFn => 174,
            ErrorCode::DestructuringParamsInArrowFn => 175,
            ErrorCode::RestParamsMustBeLast => 176,
            ErrorCode::FunctionBodyInArrowFn => 178,
            ErrorCode::UnexpectedDoubleDot => 179,
        }
    }

    /// Human readable summary used as the default error message.
    pub fn description(self) -> &'static str {
        match self {
            ErrorCode::InvalidStartOfExpression => "Invalid start of expression",
            ErrorCode::InvalidSpreadOp => "Spread operator is not supported",
            ErrorCode::ExpectedIdentifier => "Expected identifier",
            ErrorCode::InvalidMemberExpression => "Invalid member expression",
            ErrorCode::UnexpectedEndOfExpression => "Unexpected end of expression",
            ErrorCode::UnconsumedToken => "Unconsumed token",
            ErrorCode::InvalidEmptyExpression => "Invalid empty expression",
            ErrorCode::LhsNotAssignable => "Left hand side of expression is not assignable",
            ErrorCode::ExpectedValueConverterIdentifier => {
                "Expected identifier to come after value converter operator"
            }
            ErrorCode::ExpectedBindingBehaviorIdentifier => {
                "Expected identifier to come after binding behavior operator"
            }
            ErrorCode::UnexpectedOfKeyword => "Unexpected keyword \"of\"",
            ErrorCode::UnexpectedImportKeyword => "Unexpected keyword \"import\"",
            ErrorCode::InvalidLhsBindingIdentifierInForOf => {
                "Invalid BindingIdentifier at left hand side of \"of\""
            }
            ErrorCode::InvalidPropDefInObjLiteral => "Invalid or unsupported property definition in object literal",
            ErrorCode::UnterminatedStringLiteral => "Unterminated quote in string literal",
            ErrorCode::UnterminatedTemplateLiteral => "Unterminated template string",
            ErrorCode::MissingExpectedToken => "Missing expected token",
            ErrorCode::UnexpectedCharacter => "Unexpected character",
            ErrorCode::InvalidUnicodeEscape => "Invalid unicode escape",
            ErrorCode::UnexpectedTokenInDestructuring => "Unexpected token in destructuring expression",
            ErrorCode::UnexpectedTokenInOptionalChain => "Unexpected token in optional chain",
            ErrorCode::InvalidTaggedTemplateOnOptionalChain => {
                "Invalid tagged template on optional chain"
            }
            ErrorCode::InvalidArrowParameterList => "Invalid arrow parameter list",
            ErrorCode::DefaultParamsInArrowFn => "Arrow functions with default parameters are not supported",
            ErrorCode::DestructuringParamsInArrowFn => {
                "Arrow functions with destructuring parameters are not supported"
            }
            ErrorCode::RestParamsMustBeLast => "Rest parameter must be last formal parameter in arrow function",
            ErrorCode::FunctionBodyInArrowFn => "Arrow functions with function bodies are not supported",
            ErrorCode::UnexpectedDoubleDot => "Unexpected double dot token",
        }
    }
}

/// A syntax error raised while scanning or parsing an expression.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}{} in expression [{expression}]", at_column(.offset))]
pub struct ParseError {
    pub code: ErrorCode,
    pub message: String,
    /// The full source text that was being parsed.
    pub expression: String,
    /// Byte offset in `expression` where the error was detected.
    pub offset: Option<usize>,
}

impl ParseError {
    pub fn new(code: ErrorCode, expression: &str, offset: Option<usize>) -> Self {
        ParseError {
            code,
            message: code.description().to_string(),
            expression: expression.to_string(),
            offset,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

fn at_column(offset: &Option<usize>) -> String {
    offset.map(|o| format!(" at column {}", o)).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, ParseError>;
