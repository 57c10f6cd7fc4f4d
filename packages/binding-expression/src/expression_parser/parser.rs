/**
 * Binding Expression Parser
 *
 * Precedence-climbing recursive descent parser for binding expressions
 */

use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use super::ast::*;
use super::lexer::{Checkpoint, Precedence, Scanner, Token, TokenFlags, TokenValue};
use super::GrammarMode;
use crate::error::{ErrorCode, ParseError, Result};

/// Lookahead deciding whether an iterator declaration starting with `[` is a
/// binding pattern.
static OF_PROBE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+of\s+").unwrap());

/// Parse `text` in the given grammar mode without consulting a cache.
pub fn parse_expression(text: &str, mode: GrammarMode) -> Result<Arc<Expr>> {
    if text.is_empty() {
        return match mode {
            GrammarMode::IsProperty | GrammarMode::IsFunction => Ok(Expr::empty_string()),
            _ => Err(ParseError::new(ErrorCode::InvalidEmptyExpression, text, None)),
        };
    }

    match mode {
        GrammarMode::IsCustom => Ok(Arc::new(Expr::Custom(Custom {
            value: text.to_string(),
        }))),
        GrammarMode::Interpolation => ParseContext::new(text).parse_interpolation(),
        _ => ParseContext::new(text).parse_root(mode),
    }
}

/// Where a parenthesized parameter list stopped looking like one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArrowParams {
    Valid,
    Invalid,
    Default,
    Destructuring,
}

/// Iterator declaration before it is lowered to a binding pattern or a
/// destructuring.
enum Pattern {
    Array(Vec<PatternElement>),
    Object(Vec<(String, PatternElement)>),
}

enum PatternElement {
    Hole,
    Binding {
        name: String,
        initializer: Option<Arc<Expr>>,
    },
    Nested {
        pattern: Pattern,
        initializer: Option<Arc<Expr>>,
    },
}

impl Pattern {
    fn is_simple(&self) -> bool {
        let simple = |element: &PatternElement| {
            matches!(
                element,
                PatternElement::Hole
                    | PatternElement::Binding {
                        initializer: None,
                        ..
                    }
            )
        };
        match self {
            Pattern::Array(elements) => elements.iter().all(simple),
            Pattern::Object(props) => props.iter().all(|(_, element)| simple(element)),
        }
    }
}

/// Parser state for one `parse` call. Nested entry points (arrow bodies,
/// template holes, interpolation holes) save and restore the fields they
/// change.
pub struct ParseContext<'a> {
    scanner: Scanner<'a>,
    /// The expression just parsed can be an assignment target.
    assignable: bool,
    /// Inside an optional chain.
    optional: bool,
    /// Number of enclosing arrow function bodies.
    scope_depth: u32,
    semicolon_index: Option<usize>,
}

impl<'a> ParseContext<'a> {
    pub fn new(text: &'a str) -> Self {
        ParseContext {
            scanner: Scanner::new(text),
            assignable: false,
            optional: false,
            scope_depth: 0,
            semicolon_index: None,
        }
    }

    /// Parse the whole input as one expression of the given mode.
    pub fn parse_root(mut self, mode: GrammarMode) -> Result<Arc<Expr>> {
        self.next()?;
        if self.token().is(TokenFlags::EXPRESSION_TERMINAL) {
            return Err(self.error(ErrorCode::InvalidStartOfExpression));
        }

        if mode == GrammarMode::IsIterator {
            return self.parse_for_of();
        }

        let result = self.parse(Precedence::Variadic)?;
        self.expect_end(mode)?;
        Ok(result)
    }

    /// Parse literal text with `${expression}` holes.
    pub fn parse_interpolation(mut self) -> Result<Arc<Expr>> {
        let input = self.scanner.input();
        let mut parts = Vec::new();
        let mut expressions = Vec::new();
        let mut part = String::new();

        while self.scanner.index() < input.len() {
            let index = self.scanner.index();
            let ch = self.scanner.current_char();

            if input[index..].starts_with("${") {
                parts.push(std::mem::take(&mut part));
                self.scanner.seek(index + 2);
                self.next()?;
                if self.token().is(TokenFlags::EXPRESSION_TERMINAL) {
                    return Err(self.error(ErrorCode::InvalidStartOfExpression));
                }
                expressions.push(self.parse(Precedence::Variadic)?);
                self.expect_hole_end()?;
            } else if ch == crate::chars::BACKSLASH {
                self.scanner.advance();
                if self.scanner.index() < input.len() {
                    part.push(crate::chars::unescape(self.scanner.current_char()));
                    self.scanner.advance();
                }
            } else {
                part.push(ch);
                self.scanner.advance();
            }
        }
        parts.push(part);

        Ok(Arc::new(Expr::Interpolation(Interpolation {
            parts,
            expressions,
        })))
    }

    // Token helpers

    fn token(&self) -> Token {
        self.scanner.token()
    }

    fn next(&mut self) -> Result<Token> {
        self.scanner.next_token()
    }

    fn error(&self, code: ErrorCode) -> ParseError {
        self.scanner.error(code)
    }

    fn missing(&self, expected: Token) -> ParseError {
        self.error(ErrorCode::MissingExpectedToken)
            .with_message(format!("Missing expected token '{}'", expected.as_str()))
    }

    fn expect(&mut self, expected: Token) -> Result<()> {
        if self.token() != expected {
            return Err(self.missing(expected));
        }
        self.next()?;
        Ok(())
    }

    fn take_name(&mut self) -> String {
        match self.scanner.take_value() {
            TokenValue::Str(name) => name,
            _ => String::new(),
        }
    }

    /// Check that the top-level expression consumed everything it should.
    fn expect_end(&mut self, mode: GrammarMode) -> Result<()> {
        match self.token() {
            Token::Eof => Ok(()),
            Token::Semicolon if mode == GrammarMode::IsChainable => {
                if self.scanner.index() >= self.scanner.input().len() {
                    return Err(self.error(ErrorCode::UnconsumedToken));
                }
                self.semicolon_index = Some(self.scanner.start());
                Ok(())
            }
            Token::OfKeyword => Err(self.error(ErrorCode::UnexpectedOfKeyword)),
            _ => Err(self.error(ErrorCode::UnconsumedToken)),
        }
    }

    /// Same as [`expect_end`](Self::expect_end) for an interpolation hole,
    /// which ends at `}`.
    fn expect_hole_end(&mut self) -> Result<()> {
        match self.token() {
            Token::CloseBrace => Ok(()),
            Token::Eof => Err(self.missing(Token::CloseBrace)),
            Token::OfKeyword => Err(self.error(ErrorCode::UnexpectedOfKeyword)),
            _ => Err(self.error(ErrorCode::UnconsumedToken)),
        }
    }

    // Expressions

    /// Parse an expression made of operators binding tighter than `min`.
    /// `Variadic` admits value converters and binding behaviors, `Assign`
    /// admits assignment and conditionals, `LeftHandSide` admits only a
    /// (possibly prefixed) member expression.
    fn parse(&mut self, min: Precedence) -> Result<Arc<Expr>> {
        let mut result = if self
            .token()
            .is(TokenFlags::UNARY_OP | TokenFlags::UPDATE_OP)
        {
            self.parse_prefix()?
        } else {
            let primary = self.parse_primary()?;
            self.parse_member_chain(primary)?
        };

        if min < Precedence::Binary {
            result = self.parse_binary(result, min)?;
        }

        if min <= Precedence::Conditional && self.token() == Token::Question {
            self.next()?;
            let yes = self.parse(Precedence::Assign)?;
            self.expect(Token::Colon)?;
            let no = self.parse(Precedence::Assign)?;
            result = Arc::new(Expr::Conditional(Conditional {
                condition: result,
                yes,
                no,
            }));
            self.assignable = false;
        }

        if min <= Precedence::Assign && self.token().is(TokenFlags::ASSIGN_OP) {
            result = self.parse_assignment(result)?;
        }

        if min <= Precedence::Variadic {
            result = self.parse_pipeline(result)?;
        }

        Ok(result)
    }

    fn parse_prefix(&mut self) -> Result<Arc<Expr>> {
        let token = self.token();
        let start = self.scanner.start();
        let operation = match UnaryOperator::from_token(token) {
            Some(operation) => operation,
            None => return Err(self.error(ErrorCode::InvalidStartOfExpression)),
        };
        self.next()?;

        let expression = self.parse(Precedence::LeftHandSide)?;
        if token.is(TokenFlags::UPDATE_OP) && !self.assignable {
            return Err(self.scanner.error_at(ErrorCode::LhsNotAssignable, start));
        }
        self.assignable = false;

        Ok(Arc::new(Expr::Unary(Unary {
            operation,
            expression,
            position: UnaryPosition::Prefix,
        })))
    }

    fn parse_binary(&mut self, mut left: Arc<Expr>, min: Precedence) -> Result<Arc<Expr>> {
        while self.token().is(TokenFlags::BINARY_OP) {
            let token = self.token();
            let precedence = token.precedence();
            if precedence <= min {
                break;
            }
            let operation = match BinaryOperator::from_token(token) {
                Some(operation) => operation,
                None => break,
            };
            self.next()?;

            // `**` is right-associative.
            let right_min = if operation == BinaryOperator::Exponent {
                Precedence::Multiplicative
            } else {
                precedence
            };
            let right = self.parse(right_min)?;
            left = Arc::new(Expr::Binary(Binary {
                operation,
                left,
                right,
            }));
            self.assignable = false;
        }
        Ok(left)
    }

    fn parse_assignment(&mut self, target: Arc<Expr>) -> Result<Arc<Expr>> {
        let start = self.scanner.start();
        let op = match AssignmentOperator::from_token(self.token()) {
            Some(op) => op,
            None => return Ok(target),
        };

        let target = match target.as_ref() {
            Expr::ArrayLiteral(_) | Expr::ObjectLiteral(_) if op == AssignmentOperator::Assign => {
                self.literal_to_destructuring(&target, None, None, start)?
            }
            _ if self.assignable => target,
            _ => return Err(self.scanner.error_at(ErrorCode::LhsNotAssignable, start)),
        };
        self.next()?;

        let value = self.parse(Precedence::Assign)?;
        self.assignable = false;
        Ok(Arc::new(Expr::Assign(Assign { target, value, op })))
    }

    fn parse_pipeline(&mut self, mut result: Arc<Expr>) -> Result<Arc<Expr>> {
        while self.token() == Token::Bar {
            self.next()?;
            if self.token() != Token::Identifier {
                return Err(self.error(ErrorCode::ExpectedValueConverterIdentifier));
            }
            let name = self.take_name();
            self.next()?;
            let args = self.parse_pipeline_args()?;
            result = Arc::new(Expr::ValueConverter(ValueConverter {
                expression: result,
                name,
                args,
            }));
            self.assignable = false;
        }

        while self.token() == Token::Ampersand {
            self.next()?;
            if self.token() != Token::Identifier {
                return Err(self.error(ErrorCode::ExpectedBindingBehaviorIdentifier));
            }
            let name = self.take_name();
            self.next()?;
            let args = self.parse_pipeline_args()?;
            result = Arc::new(Expr::BindingBehavior(BindingBehavior::new(result, name, args)));
            self.assignable = false;
        }

        Ok(result)
    }

    fn parse_pipeline_args(&mut self) -> Result<Vec<Arc<Expr>>> {
        let mut args = Vec::new();
        while self.token() == Token::Colon {
            self.next()?;
            args.push(self.parse(Precedence::Assign)?);
        }
        Ok(args)
    }

    // Primary expressions

    fn parse_primary(&mut self) -> Result<Arc<Expr>> {
        self.assignable = false;
        match self.token() {
            Token::Identifier => self.parse_identifier(),
            Token::ParentScope => self.parse_parent_scope(),
            Token::ThisScope => self.parse_this_scope(),
            Token::ThisKeyword => {
                self.next()?;
                Ok(Expr::boundary())
            }
            Token::NullKeyword => self.literal(Expr::null()),
            Token::UndefinedKeyword => self.literal(Expr::undefined()),
            Token::TrueKeyword => self.literal(Expr::true_()),
            Token::FalseKeyword => self.literal(Expr::false_()),
            Token::StringLiteral => {
                let value = self.take_name();
                self.literal(Expr::string(value))
            }
            Token::NumericLiteral => {
                let value = match self.scanner.value() {
                    TokenValue::Number(value) => *value,
                    _ => 0.0,
                };
                self.literal(Expr::number(value))
            }
            Token::TemplateTail | Token::TemplateContinuation => self.parse_template(None),
            Token::OpenParen => self.parse_paren_or_arrow(),
            Token::OpenBracket => self.parse_array_literal(),
            Token::OpenBrace => self.parse_object_literal(),
            Token::NewKeyword => self.parse_new(),
            Token::DotDot => Err(self.error(ErrorCode::UnexpectedDoubleDot)),
            Token::DotDotDot => Err(self.error(ErrorCode::InvalidSpreadOp)),
            Token::OfKeyword => Err(self.error(ErrorCode::UnexpectedOfKeyword)),
            Token::Eof => Err(self.error(ErrorCode::UnexpectedEndOfExpression)),
            _ => Err(self.error(ErrorCode::InvalidStartOfExpression)),
        }
    }

    fn literal(&mut self, value: Arc<Expr>) -> Result<Arc<Expr>> {
        self.next()?;
        Ok(value)
    }

    /// A bare name: a scope access, a global, or a single-parameter arrow.
    fn parse_identifier(&mut self) -> Result<Arc<Expr>> {
        let name = self.take_name();
        if name == "import" {
            return Err(self.error(ErrorCode::UnexpectedImportKeyword));
        }
        self.next()?;

        if self.token() == Token::Arrow {
            return self.parse_arrow_body(vec![BindingIdentifier { name }], false);
        }
        Ok(self.scope_access(name))
    }

    fn scope_access(&mut self, name: String) -> Arc<Expr> {
        if is_global_name(&name) {
            self.assignable = false;
            Arc::new(Expr::AccessGlobal(AccessGlobal { name }))
        } else {
            self.assignable = true;
            Arc::new(Expr::AccessScope(AccessScope { name, ancestor: 0 }))
        }
    }

    /// `$parent`, `$parent.$parent`, `$parent.name`.
    fn parse_parent_scope(&mut self) -> Result<Arc<Expr>> {
        let mut ancestor = self.scope_depth;
        loop {
            ancestor += 1;
            self.next()?;

            if self.token() == Token::Dot {
                self.next()?;
                match self.token() {
                    Token::ParentScope => continue,
                    token if token.is(TokenFlags::IDENTIFIER_NAME) => {
                        let name = self.take_name();
                        self.next()?;
                        self.assignable = true;
                        return Ok(Arc::new(Expr::AccessScope(AccessScope { name, ancestor })));
                    }
                    Token::Eof => return Err(self.error(ErrorCode::UnexpectedEndOfExpression)),
                    _ => return Err(self.error(ErrorCode::InvalidMemberExpression)),
                }
            }

            if self.token().is(TokenFlags::ACCESS_SCOPE_TERMINAL) {
                return Ok(Expr::access_this(ancestor));
            }
            return Err(self.error(ErrorCode::InvalidMemberExpression));
        }
    }

    /// `$this`, `$this.name`, `$this?.name`, `$this[key]`.
    fn parse_this_scope(&mut self) -> Result<Arc<Expr>> {
        self.next()?;
        let ancestor = self.scope_depth;

        if self.token() == Token::Dot {
            self.next()?;
            if !self.token().is(TokenFlags::IDENTIFIER_NAME) {
                return Err(self.error(ErrorCode::InvalidMemberExpression));
            }
            let name = self.take_name();
            self.next()?;
            self.assignable = true;
            return Ok(Arc::new(Expr::AccessScope(AccessScope { name, ancestor })));
        }

        if self.token().is(TokenFlags::ACCESS_SCOPE_TERMINAL) {
            return Ok(Expr::access_this(ancestor));
        }
        Err(self.error(ErrorCode::InvalidMemberExpression))
    }

    // Member expressions

    fn parse_member_chain(&mut self, mut result: Arc<Expr>) -> Result<Arc<Expr>> {
        let outer_optional = std::mem::replace(&mut self.optional, false);

        loop {
            match self.token() {
                Token::Dot => {
                    self.next()?;
                    if !self.token().is(TokenFlags::IDENTIFIER_NAME) {
                        return Err(self.error(ErrorCode::ExpectedIdentifier));
                    }
                    let name = self.take_name();
                    self.next()?;
                    result = self.member(result, name, false);
                }
                Token::QuestionDot => {
                    self.optional = true;
                    self.next()?;
                    match self.token() {
                        token if token.is(TokenFlags::IDENTIFIER_NAME) => {
                            let name = self.take_name();
                            self.next()?;
                            result = self.member(result, name, true);
                        }
                        Token::OpenBracket => result = self.parse_keyed(result, true)?,
                        Token::OpenParen => result = self.parse_call(result, true)?,
                        Token::TemplateTail | Token::TemplateContinuation => {
                            return Err(self.error(ErrorCode::InvalidTaggedTemplateOnOptionalChain));
                        }
                        _ => return Err(self.error(ErrorCode::UnexpectedTokenInOptionalChain)),
                    }
                }
                Token::OpenBracket => result = self.parse_keyed(result, false)?,
                Token::OpenParen => result = self.parse_call(result, false)?,
                Token::TemplateTail | Token::TemplateContinuation => {
                    if self.optional {
                        return Err(self.error(ErrorCode::InvalidTaggedTemplateOnOptionalChain));
                    }
                    result = self.parse_template(Some(result))?;
                }
                Token::PlusPlus | Token::MinusMinus => {
                    if !self.assignable || self.optional {
                        return Err(self.error(ErrorCode::LhsNotAssignable));
                    }
                    let operation = if self.token() == Token::PlusPlus {
                        UnaryOperator::Increment
                    } else {
                        UnaryOperator::Decrement
                    };
                    self.next()?;
                    result = Arc::new(Expr::Unary(Unary {
                        operation,
                        expression: result,
                        position: UnaryPosition::Postfix,
                    }));
                    self.assignable = false;
                    break;
                }
                Token::DotDot => return Err(self.error(ErrorCode::UnexpectedDoubleDot)),
                _ => break,
            }
        }

        if self.optional {
            self.assignable = false;
        }
        self.optional = outer_optional;
        Ok(result)
    }

    fn member(&mut self, object: Arc<Expr>, name: String, optional: bool) -> Arc<Expr> {
        self.assignable = true;
        Arc::new(Expr::AccessMember(AccessMember {
            access_global: object.access_global(),
            object,
            name,
            optional,
        }))
    }

    fn parse_keyed(&mut self, object: Arc<Expr>, optional: bool) -> Result<Arc<Expr>> {
        self.next()?;
        let key = self.parse_nested(Precedence::Assign)?;
        self.expect(Token::CloseBracket)?;
        self.assignable = true;
        Ok(Arc::new(Expr::AccessKeyed(AccessKeyed {
            access_global: object.access_global(),
            object,
            key,
            optional,
        })))
    }

    fn parse_call(&mut self, callee: Arc<Expr>, optional: bool) -> Result<Arc<Expr>> {
        let args = self.parse_arguments()?;
        self.assignable = false;

        let call = match callee.as_ref() {
            Expr::AccessScope(scope) => Expr::CallScope(CallScope {
                name: scope.name.clone(),
                args,
                ancestor: scope.ancestor,
                optional,
            }),
            Expr::AccessMember(member) => Expr::CallMember(CallMember {
                object: member.object.clone(),
                name: member.name.clone(),
                args,
                optional_member: member.optional,
                optional_call: optional,
            }),
            Expr::AccessGlobal(global) if !optional => Expr::CallGlobal(CallGlobal {
                name: global.name.clone(),
                args,
            }),
            _ => Expr::CallFunction(CallFunction {
                func: callee,
                args,
                optional,
            }),
        };
        Ok(Arc::new(call))
    }

    /// `(arg, arg)`, starting at the open paren.
    fn parse_arguments(&mut self) -> Result<Vec<Arc<Expr>>> {
        self.next()?;
        let mut args = Vec::new();
        if self.token() == Token::CloseParen {
            self.next()?;
            return Ok(args);
        }

        loop {
            args.push(self.parse_nested(Precedence::Assign)?);
            match self.token() {
                Token::Comma => {
                    self.next()?;
                }
                Token::CloseParen => {
                    self.next()?;
                    return Ok(args);
                }
                _ => return Err(self.missing(Token::CloseParen)),
            }
        }
    }

    /// Parse a sub-expression that starts its own optional chain.
    fn parse_nested(&mut self, min: Precedence) -> Result<Arc<Expr>> {
        let optional = std::mem::replace(&mut self.optional, false);
        let result = self.parse(min);
        self.optional = optional;
        result
    }

    /// Template literal starting at its first segment token. With a tag the
    /// result is a tagged template.
    fn parse_template(&mut self, tag: Option<Arc<Expr>>) -> Result<Arc<Expr>> {
        let mut cooked = Vec::new();
        let mut raw = Vec::new();
        let mut expressions = Vec::new();

        loop {
            let token = self.token();
            match self.scanner.take_value() {
                TokenValue::Template { cooked: c, raw: r } => {
                    cooked.push(c);
                    raw.push(r);
                }
                _ => {
                    cooked.push(String::new());
                    raw.push(String::new());
                }
            }
            if token == Token::TemplateTail {
                break;
            }

            self.next()?;
            expressions.push(self.parse_nested(Precedence::Assign)?);
            match self.token() {
                Token::CloseBrace => {
                    self.scanner.scan_template_continuation()?;
                }
                Token::Eof => return Err(self.error(ErrorCode::UnterminatedTemplateLiteral)),
                _ => return Err(self.missing(Token::CloseBrace)),
            }
        }
        self.next()?;
        self.assignable = false;

        let template = match tag {
            Some(func) => Expr::TaggedTemplate(TaggedTemplate {
                cooked,
                raw,
                func,
                expressions,
            }),
            None if expressions.is_empty() && cooked.len() == 1 && cooked[0].is_empty() => {
                return Ok(Expr::empty_template());
            }
            None => Expr::Template(Template {
                cooked,
                expressions,
            }),
        };
        Ok(Arc::new(template))
    }

    /// `(` starts either a parenthesized expression or an arrow parameter
    /// list. Scan ahead as a parameter list, and rewind when no `=>` follows.
    fn parse_paren_or_arrow(&mut self) -> Result<Arc<Expr>> {
        let checkpoint: Checkpoint = self.scanner.checkpoint();
        self.next()?;

        let mut params: SmallVec<[BindingIdentifier; 4]> = SmallVec::new();
        let mut state = ArrowParams::Valid;
        let mut rest = false;

        loop {
            match self.token() {
                Token::CloseParen => break,
                Token::DotDotDot => {
                    self.next()?;
                    if self.token() != Token::Identifier {
                        state = ArrowParams::Invalid;
                        break;
                    }
                    params.push(BindingIdentifier {
                        name: self.take_name(),
                    });
                    rest = true;
                    self.next()?;
                    match self.token() {
                        Token::CloseParen => break,
                        Token::Comma => return Err(self.error(ErrorCode::RestParamsMustBeLast)),
                        _ => {
                            state = ArrowParams::Invalid;
                            break;
                        }
                    }
                }
                Token::Identifier => {
                    params.push(BindingIdentifier {
                        name: self.take_name(),
                    });
                    self.next()?;
                    match self.token() {
                        Token::Comma => {
                            self.next()?;
                        }
                        Token::CloseParen => break,
                        Token::Equals => {
                            state = ArrowParams::Default;
                            break;
                        }
                        _ => {
                            state = ArrowParams::Invalid;
                            break;
                        }
                    }
                }
                Token::OpenBracket | Token::OpenBrace => {
                    state = ArrowParams::Destructuring;
                    break;
                }
                _ => {
                    state = ArrowParams::Invalid;
                    break;
                }
            }
        }

        if state == ArrowParams::Valid && self.token() == Token::CloseParen {
            self.next()?;
            if self.token() == Token::Arrow {
                return self.parse_arrow_body(params.into_vec(), rest);
            }
            if params.is_empty() {
                return Err(self.missing(Token::Arrow));
            }
        }

        self.scanner.restore(checkpoint);
        self.next()?;
        let result = self.parse_nested(Precedence::Variadic)?;
        self.expect(Token::CloseParen)?;

        if self.token() == Token::Arrow {
            let code = match state {
                ArrowParams::Default => ErrorCode::DefaultParamsInArrowFn,
                ArrowParams::Destructuring => ErrorCode::DestructuringParamsInArrowFn,
                _ => ErrorCode::InvalidArrowParameterList,
            };
            return Err(self.error(code));
        }
        Ok(result)
    }

    /// Body of an arrow function, starting at `=>`.
    fn parse_arrow_body(
        &mut self,
        params: Vec<BindingIdentifier>,
        rest: bool,
    ) -> Result<Arc<Expr>> {
        self.next()?;
        if self.token() == Token::OpenBrace {
            return Err(self.error(ErrorCode::FunctionBodyInArrowFn));
        }

        let optional = std::mem::replace(&mut self.optional, false);
        self.scope_depth += 1;
        let body = self.parse(Precedence::Assign);
        self.scope_depth -= 1;
        self.optional = optional;

        self.assignable = false;
        Ok(Arc::new(Expr::ArrowFunction(ArrowFunction {
            params,
            body: body?,
            rest,
        })))
    }

    fn parse_array_literal(&mut self) -> Result<Arc<Expr>> {
        self.next()?;
        let mut elements = Vec::new();

        loop {
            match self.token() {
                Token::CloseBracket => break,
                Token::Comma => {
                    elements.push(Expr::undefined());
                    self.next()?;
                    continue;
                }
                _ => {}
            }

            elements.push(self.parse_nested(Precedence::Assign)?);
            match self.token() {
                Token::Comma => {
                    self.next()?;
                }
                Token::CloseBracket => break,
                _ => return Err(self.missing(Token::CloseBracket)),
            }
        }
        self.next()?;
        self.assignable = false;

        if elements.is_empty() {
            return Ok(Expr::empty_array());
        }
        Ok(Arc::new(Expr::ArrayLiteral(ArrayLiteral { elements })))
    }

    fn parse_object_literal(&mut self) -> Result<Arc<Expr>> {
        self.next()?;
        let mut keys = Vec::new();
        let mut values = Vec::new();

        while self.token() != Token::CloseBrace {
            let token = self.token();
            let key = match token {
                Token::StringLiteral => PropertyKey::Name(self.take_name()),
                Token::NumericLiteral => match self.scanner.value() {
                    TokenValue::Number(value) => PropertyKey::Number(*value),
                    _ => PropertyKey::Number(0.0),
                },
                token if token.is(TokenFlags::IDENTIFIER_NAME) => PropertyKey::Name(self.take_name()),
                _ => return Err(self.error(ErrorCode::InvalidPropDefInObjLiteral)),
            };
            self.next()?;

            let value = match (self.token(), &key) {
                (Token::Colon, _) => {
                    self.next()?;
                    self.parse_nested(Precedence::Assign)?
                }
                (_, PropertyKey::Name(name)) if token == Token::Identifier => {
                    self.scope_access(name.clone())
                }
                _ => return Err(self.error(ErrorCode::InvalidPropDefInObjLiteral)),
            };
            keys.push(key);
            values.push(value);

            match self.token() {
                Token::Comma => {
                    self.next()?;
                }
                Token::CloseBrace => break,
                _ => return Err(self.missing(Token::CloseBrace)),
            }
        }
        self.next()?;
        self.assignable = false;

        if keys.is_empty() {
            return Ok(Expr::empty_object());
        }
        Ok(Arc::new(Expr::ObjectLiteral(ObjectLiteral { keys, values })))
    }

    /// `new Callee(args)`. The callee takes member access but no calls, and
    /// the argument list may be omitted.
    fn parse_new(&mut self) -> Result<Arc<Expr>> {
        self.next()?;
        let mut func = self.parse_primary()?;
        loop {
            match self.token() {
                Token::Dot => {
                    self.next()?;
                    if !self.token().is(TokenFlags::IDENTIFIER_NAME) {
                        return Err(self.error(ErrorCode::ExpectedIdentifier));
                    }
                    let name = self.take_name();
                    self.next()?;
                    func = self.member(func, name, false);
                }
                Token::OpenBracket => func = self.parse_keyed(func, false)?,
                _ => break,
            }
        }

        let args = if self.token() == Token::OpenParen {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        self.assignable = false;
        Ok(Arc::new(Expr::New(New { func, args })))
    }

    // Iteration

    fn parse_for_of(mut self) -> Result<Arc<Expr>> {
        let start = self.scanner.start();
        let declaration = match self.token() {
            Token::Identifier => {
                let name = self.take_name();
                self.next()?;
                Arc::new(Expr::BindingIdentifier(BindingIdentifier { name }))
            }
            Token::OpenBracket if OF_PROBE.is_match(self.scanner.rest()) => {
                let pattern = self.parse_pattern()?;
                lower_pattern(pattern, None, None)
            }
            Token::OpenBrace => {
                let pattern = self.parse_pattern()?;
                lower_pattern(pattern, None, None)
            }
            _ => self.parse(Precedence::LeftHandSide)?,
        };

        let is_declaration = matches!(
            declaration.kind(),
            ExpressionKind::ArrayBindingPattern
                | ExpressionKind::ObjectBindingPattern
                | ExpressionKind::BindingIdentifier
                | ExpressionKind::ArrayDestructuring
                | ExpressionKind::ObjectDestructuring
        );
        if !is_declaration || self.token() != Token::OfKeyword {
            return Err(self
                .scanner
                .error_at(ErrorCode::InvalidLhsBindingIdentifierInForOf, start));
        }
        self.next()?;

        if self.token().is(TokenFlags::EXPRESSION_TERMINAL) {
            return Err(self.error(ErrorCode::InvalidStartOfExpression));
        }
        let iterable = self.parse(Precedence::Variadic)?;
        self.expect_end(GrammarMode::IsChainable)?;

        Ok(Arc::new(Expr::ForOfStatement(ForOfStatement {
            declaration,
            iterable,
            semicolon_index: self.semicolon_index,
        })))
    }

    fn parse_pattern(&mut self) -> Result<Pattern> {
        match self.token() {
            Token::OpenBracket => {
                self.next()?;
                let mut elements = Vec::new();
                loop {
                    match self.token() {
                        Token::CloseBracket => break,
                        Token::Comma => {
                            elements.push(PatternElement::Hole);
                            self.next()?;
                            continue;
                        }
                        _ => {}
                    }
                    elements.push(self.parse_pattern_element()?);
                    match self.token() {
                        Token::Comma => {
                            self.next()?;
                        }
                        Token::CloseBracket => break,
                        _ => return Err(self.error(ErrorCode::UnexpectedTokenInDestructuring)),
                    }
                }
                self.next()?;
                Ok(Pattern::Array(elements))
            }
            Token::OpenBrace => {
                self.next()?;
                let mut props = Vec::new();
                while self.token() != Token::CloseBrace {
                    let token = self.token();
                    if token == Token::DotDotDot {
                        return Err(self.error(ErrorCode::InvalidSpreadOp));
                    }
                    if token != Token::StringLiteral && !token.is(TokenFlags::IDENTIFIER_NAME) {
                        return Err(self.error(ErrorCode::UnexpectedTokenInDestructuring));
                    }
                    let key = self.take_name();
                    self.next()?;

                    let element = if self.token() == Token::Colon {
                        self.next()?;
                        self.parse_pattern_element()?
                    } else if token == Token::Identifier {
                        PatternElement::Binding {
                            name: key.clone(),
                            initializer: self.parse_pattern_initializer()?,
                        }
                    } else {
                        return Err(self.error(ErrorCode::UnexpectedTokenInDestructuring));
                    };
                    props.push((key, element));

                    match self.token() {
                        Token::Comma => {
                            self.next()?;
                        }
                        Token::CloseBrace => break,
                        _ => return Err(self.error(ErrorCode::UnexpectedTokenInDestructuring)),
                    }
                }
                self.next()?;
                Ok(Pattern::Object(props))
            }
            Token::DotDotDot => Err(self.error(ErrorCode::InvalidSpreadOp)),
            _ => Err(self.error(ErrorCode::UnexpectedTokenInDestructuring)),
        }
    }

    fn parse_pattern_element(&mut self) -> Result<PatternElement> {
        match self.token() {
            Token::Identifier => {
                let name = self.take_name();
                self.next()?;
                Ok(PatternElement::Binding {
                    name,
                    initializer: self.parse_pattern_initializer()?,
                })
            }
            Token::OpenBracket | Token::OpenBrace => {
                let pattern = self.parse_pattern()?;
                Ok(PatternElement::Nested {
                    pattern,
                    initializer: self.parse_pattern_initializer()?,
                })
            }
            Token::DotDotDot => Err(self.error(ErrorCode::InvalidSpreadOp)),
            _ => Err(self.error(ErrorCode::UnexpectedTokenInDestructuring)),
        }
    }

    fn parse_pattern_initializer(&mut self) -> Result<Option<Arc<Expr>>> {
        if self.token() != Token::Equals {
            return Ok(None);
        }
        self.next()?;
        Ok(Some(self.parse_nested(Precedence::Assign)?))
    }

    /// Turn the array or object literal on the left of `=` into a
    /// destructuring target.
    fn literal_to_destructuring(
        &self,
        literal: &Arc<Expr>,
        source: Option<Arc<Expr>>,
        initializer: Option<Arc<Expr>>,
        start: usize,
    ) -> Result<Arc<Expr>> {
        let not_assignable = || self.scanner.error_at(ErrorCode::LhsNotAssignable, start);
        let mut list = Vec::new();

        match literal.as_ref() {
            Expr::ArrayLiteral(array) => {
                for (index, element) in array.elements.iter().enumerate() {
                    if Arc::ptr_eq(element, &Expr::undefined()) {
                        continue;
                    }
                    let source = this_keyed(index as f64);
                    list.push(self.destructuring_item(element, source, start)?);
                }
                Ok(Arc::new(Expr::ArrayDestructuring(Destructuring {
                    list,
                    source,
                    initializer,
                })))
            }
            Expr::ObjectLiteral(object) => {
                for (key, value) in object.keys.iter().zip(&object.values) {
                    let source = match key {
                        PropertyKey::Name(name) => this_member(name.clone()),
                        PropertyKey::Number(number) => this_keyed(*number),
                    };
                    list.push(self.destructuring_item(value, source, start)?);
                }
                Ok(Arc::new(Expr::ObjectDestructuring(Destructuring {
                    list,
                    source,
                    initializer,
                })))
            }
            _ => Err(not_assignable()),
        }
    }

    fn destructuring_item(
        &self,
        element: &Arc<Expr>,
        source: Arc<Expr>,
        start: usize,
    ) -> Result<Arc<Expr>> {
        let (target, initializer) = match element.as_ref() {
            Expr::Assign(assign) if assign.op == AssignmentOperator::Assign => {
                (&assign.target, Some(assign.value.clone()))
            }
            _ => (element, None),
        };

        match target.as_ref() {
            Expr::AccessScope(scope) => Ok(Arc::new(Expr::DestructuringAssignmentSingle(
                DestructuringAssignmentSingle {
                    target: this_member(scope.name.clone()),
                    source,
                    initializer,
                },
            ))),
            Expr::ArrayLiteral(_) | Expr::ObjectLiteral(_) => {
                self.literal_to_destructuring(target, Some(source), initializer, start)
            }
            Expr::ArrayDestructuring(nested) => Ok(Arc::new(Expr::ArrayDestructuring(
                Destructuring {
                    list: nested.list.clone(),
                    source: Some(source),
                    initializer,
                },
            ))),
            Expr::ObjectDestructuring(nested) => Ok(Arc::new(Expr::ObjectDestructuring(
                Destructuring {
                    list: nested.list.clone(),
                    source: Some(source),
                    initializer,
                },
            ))),
            _ => Err(self.scanner.error_at(ErrorCode::LhsNotAssignable, start)),
        }
    }
}

/// `$this.name`
fn this_member(name: String) -> Arc<Expr> {
    Arc::new(Expr::AccessMember(AccessMember {
        object: Expr::this_scope(),
        name,
        optional: false,
        access_global: false,
    }))
}

/// `$this[index]`
fn this_keyed(index: f64) -> Arc<Expr> {
    Arc::new(Expr::AccessKeyed(AccessKeyed {
        object: Expr::this_scope(),
        key: Expr::number(index),
        optional: false,
        access_global: false,
    }))
}

fn lower_pattern(
    pattern: Pattern,
    source: Option<Arc<Expr>>,
    initializer: Option<Arc<Expr>>,
) -> Arc<Expr> {
    if source.is_none() && pattern.is_simple() {
        return match pattern {
            Pattern::Array(elements) => {
                let elements = elements
                    .into_iter()
                    .map(|element| match element {
                        PatternElement::Binding { name, .. } => {
                            Arc::new(Expr::BindingIdentifier(BindingIdentifier { name }))
                        }
                        _ => Expr::undefined(),
                    })
                    .collect();
                Arc::new(Expr::ArrayBindingPattern(ArrayBindingPattern { elements }))
            }
            Pattern::Object(props) => {
                let mut keys = Vec::with_capacity(props.len());
                let mut values = Vec::with_capacity(props.len());
                for (key, element) in props {
                    if let PatternElement::Binding { name, .. } = element {
                        keys.push(PropertyKey::Name(key));
                        values.push(Arc::new(Expr::BindingIdentifier(BindingIdentifier { name })));
                    }
                }
                Arc::new(Expr::ObjectBindingPattern(ObjectBindingPattern { keys, values }))
            }
        };
    }

    let lower_element = |element: PatternElement, source: Arc<Expr>| match element {
        PatternElement::Hole => None,
        PatternElement::Binding { name, initializer } => Some(Arc::new(
            Expr::DestructuringAssignmentSingle(DestructuringAssignmentSingle {
                target: this_member(name),
                source,
                initializer,
            }),
        )),
        PatternElement::Nested {
            pattern,
            initializer,
        } => Some(lower_pattern(pattern, Some(source), initializer)),
    };

    match pattern {
        Pattern::Array(elements) => {
            let list = elements
                .into_iter()
                .enumerate()
                .filter_map(|(index, element)| lower_element(element, this_keyed(index as f64)))
                .collect();
            Arc::new(Expr::ArrayDestructuring(Destructuring {
                list,
                source,
                initializer,
            }))
        }
        Pattern::Object(props) => {
            let list = props
                .into_iter()
                .filter_map(|(key, element)| lower_element(element, this_member(key)))
                .collect();
            Arc::new(Expr::ObjectDestructuring(Destructuring {
                list,
                source,
                initializer,
            }))
        }
    }
}
