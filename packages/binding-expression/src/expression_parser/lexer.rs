/**
 * Binding Expression Lexer
 *
 * Scans binding expressions one token at a time for the parser
 */

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::chars::{self, CharClass};
use crate::error::{ErrorCode, ParseError, Result};

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Token {
    Eof,

    // Punctuation
    OpenParen,
    CloseParen,
    OpenBracket,
    CloseBracket,
    OpenBrace,
    CloseBrace,
    Comma,
    Colon,
    Semicolon,
    Dot,
    DotDot,
    DotDotDot,
    Question,
    QuestionDot,
    Arrow,
    Bar,
    Ampersand,

    // Operators
    Exclamation,
    Plus,
    Minus,
    Asterisk,
    Slash,
    Percent,
    AsteriskAsterisk,
    PlusPlus,
    MinusMinus,
    LessThan,
    GreaterThan,
    LessThanEquals,
    GreaterThanEquals,
    EqualsEquals,
    ExclamationEquals,
    EqualsEqualsEquals,
    ExclamationEqualsEquals,
    AmpersandAmpersand,
    BarBar,
    QuestionQuestion,

    // Assignment
    Equals,
    PlusEquals,
    MinusEquals,
    AsteriskEquals,
    SlashEquals,

    // Literals
    Identifier,
    StringLiteral,
    NumericLiteral,
    TemplateTail,
    TemplateContinuation,

    // Keywords
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    UndefinedKeyword,
    NewKeyword,
    ThisKeyword,
    ThisScope,
    ParentScope,
    InKeyword,
    InstanceOfKeyword,
    TypeofKeyword,
    VoidKeyword,
    OfKeyword,
}

bitflags! {
    /// Categories a token belongs to. The parser tests these instead of
    /// enumerating token kinds.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const BINARY_OP = 1 << 0;
        const ASSIGN_OP = 1 << 1;
        const UNARY_OP = 1 << 2;
        const UPDATE_OP = 1 << 3;
        const KEYWORD = 1 << 4;
        /// Valid as a member name after `.`.
        const IDENTIFIER_NAME = 1 << 5;
        /// Continues a member expression (`.`, `?.`, `[`, `(`, templates).
        const LEFT_HAND_SIDE = 1 << 6;
        /// Cannot start an expression.
        const EXPRESSION_TERMINAL = 1 << 7;
        /// May directly follow a bare `$this` / `$parent` reference.
        const ACCESS_SCOPE_TERMINAL = 1 << 8;
    }
}

/// Binding strength used by the precedence-climbing loop. Variants are
/// declared weakest first so the derived `Ord` is the grammar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precedence {
    Variadic,
    Assign,
    Conditional,
    NullishCoalescing,
    LogicalOr,
    LogicalAnd,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Exponentiation,
    Binary,
    LeftHandSide,
    Primary,
    Unary,
}

impl Token {
    pub fn as_str(self) -> &'static str {
        match self {
            Token::Eof => "<EOF>",
            Token::OpenParen => "(",
            Token::CloseParen => ")",
            Token::OpenBracket => "[",
            Token::CloseBracket => "]",
            Token::OpenBrace => "{",
            Token::CloseBrace => "}",
            Token::Comma => ",",
            Token::Colon => ":",
            Token::Semicolon => ";",
            Token::Dot => ".",
            Token::DotDot => "..",
            Token::DotDotDot => "...",
            Token::Question => "?",
            Token::QuestionDot => "?.",
            Token::Arrow => "=>",
            Token::Bar => "|",
            Token::Ampersand => "&",
            Token::Exclamation => "!",
            Token::Plus => "+",
            Token::Minus => "-",
            Token::Asterisk => "*",
            Token::Slash => "/",
            Token::Percent => "%",
            Token::AsteriskAsterisk => "**",
            Token::PlusPlus => "++",
            Token::MinusMinus => "--",
            Token::LessThan => "<",
            Token::GreaterThan => ">",
            Token::LessThanEquals => "<=",
            Token::GreaterThanEquals => ">=",
            Token::EqualsEquals => "==",
            Token::ExclamationEquals => "!=",
            Token::EqualsEqualsEquals => "===",
            Token::ExclamationEqualsEquals => "!==",
            Token::AmpersandAmpersand => "&&",
            Token::BarBar => "||",
            Token::QuestionQuestion => "??",
            Token::Equals => "=",
            Token::PlusEquals => "+=",
            Token::MinusEquals => "-=",
            Token::AsteriskEquals => "*=",
            Token::SlashEquals => "/=",
            Token::Identifier => "<identifier>",
            Token::StringLiteral => "<string>",
            Token::NumericLiteral => "<number>",
            Token::TemplateTail => "<template>",
            Token::TemplateContinuation => "<template head>",
            Token::TrueKeyword => "true",
            Token::FalseKeyword => "false",
            Token::NullKeyword => "null",
            Token::UndefinedKeyword => "undefined",
            Token::NewKeyword => "new",
            Token::ThisKeyword => "this",
            Token::ThisScope => "$this",
            Token::ParentScope => "$parent",
            Token::InKeyword => "in",
            Token::InstanceOfKeyword => "instanceof",
            Token::TypeofKeyword => "typeof",
            Token::VoidKeyword => "void",
            Token::OfKeyword => "of",
        }
    }

    pub fn flags(self) -> TokenFlags {
        const TERMINAL: TokenFlags =
            TokenFlags::EXPRESSION_TERMINAL.union(TokenFlags::ACCESS_SCOPE_TERMINAL);
        const BINARY: TokenFlags = TokenFlags::BINARY_OP.union(TokenFlags::ACCESS_SCOPE_TERMINAL);
        const ASSIGN: TokenFlags = TokenFlags::ASSIGN_OP.union(TokenFlags::ACCESS_SCOPE_TERMINAL);
        const KEYWORD: TokenFlags = TokenFlags::KEYWORD.union(TokenFlags::IDENTIFIER_NAME);

        match self {
            Token::Eof
            | Token::CloseParen
            | Token::CloseBracket
            | Token::CloseBrace
            | Token::Comma
            | Token::Colon
            | Token::Semicolon
            | Token::Arrow
            | Token::Bar
            | Token::Ampersand
            | Token::Question => TERMINAL,
            Token::OpenParen | Token::TemplateTail | Token::TemplateContinuation => {
                TokenFlags::LEFT_HAND_SIDE
            }
            Token::OpenBracket | Token::QuestionDot => {
                TokenFlags::LEFT_HAND_SIDE | TokenFlags::ACCESS_SCOPE_TERMINAL
            }
            Token::Dot => TokenFlags::LEFT_HAND_SIDE,
            Token::OpenBrace | Token::DotDot | Token::DotDotDot => TokenFlags::empty(),
            Token::Exclamation => TokenFlags::UNARY_OP,
            Token::Plus | Token::Minus => BINARY | TokenFlags::UNARY_OP,
            Token::PlusPlus | Token::MinusMinus => {
                TokenFlags::UPDATE_OP | TokenFlags::ACCESS_SCOPE_TERMINAL
            }
            Token::Asterisk
            | Token::Slash
            | Token::Percent
            | Token::AsteriskAsterisk
            | Token::LessThan
            | Token::GreaterThan
            | Token::LessThanEquals
            | Token::GreaterThanEquals
            | Token::EqualsEquals
            | Token::ExclamationEquals
            | Token::EqualsEqualsEquals
            | Token::ExclamationEqualsEquals
            | Token::AmpersandAmpersand
            | Token::BarBar
            | Token::QuestionQuestion => BINARY,
            Token::Equals
            | Token::PlusEquals
            | Token::MinusEquals
            | Token::AsteriskEquals
            | Token::SlashEquals => ASSIGN,
            Token::Identifier => TokenFlags::IDENTIFIER_NAME,
            Token::StringLiteral | Token::NumericLiteral => TokenFlags::empty(),
            Token::InKeyword | Token::InstanceOfKeyword => KEYWORD | BINARY,
            Token::TypeofKeyword | Token::VoidKeyword => KEYWORD | TokenFlags::UNARY_OP,
            Token::TrueKeyword
            | Token::FalseKeyword
            | Token::NullKeyword
            | Token::UndefinedKeyword
            | Token::NewKeyword
            | Token::ThisKeyword
            | Token::ThisScope
            | Token::ParentScope
            | Token::OfKeyword => KEYWORD,
        }
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Token::Bar | Token::Ampersand => Precedence::Variadic,
            Token::Equals
            | Token::PlusEquals
            | Token::MinusEquals
            | Token::AsteriskEquals
            | Token::SlashEquals
            | Token::Arrow => Precedence::Assign,
            Token::Question => Precedence::Conditional,
            Token::QuestionQuestion => Precedence::NullishCoalescing,
            Token::BarBar => Precedence::LogicalOr,
            Token::AmpersandAmpersand => Precedence::LogicalAnd,
            Token::EqualsEquals
            | Token::ExclamationEquals
            | Token::EqualsEqualsEquals
            | Token::ExclamationEqualsEquals => Precedence::Equality,
            Token::LessThan
            | Token::GreaterThan
            | Token::LessThanEquals
            | Token::GreaterThanEquals
            | Token::InKeyword
            | Token::InstanceOfKeyword => Precedence::Relational,
            Token::Plus | Token::Minus => Precedence::Additive,
            Token::Asterisk | Token::Slash | Token::Percent => Precedence::Multiplicative,
            Token::AsteriskAsterisk => Precedence::Exponentiation,
            Token::Dot
            | Token::QuestionDot
            | Token::OpenBracket
            | Token::OpenParen
            | Token::TemplateTail
            | Token::TemplateContinuation => Precedence::LeftHandSide,
            Token::Exclamation
            | Token::TypeofKeyword
            | Token::VoidKeyword
            | Token::PlusPlus
            | Token::MinusMinus => Precedence::Unary,
            _ => Precedence::Primary,
        }
    }

    #[inline]
    pub fn is(self, flags: TokenFlags) -> bool {
        self.flags().intersects(flags)
    }
}

fn keyword(name: &str) -> Option<Token> {
    let token = match name {
        "true" => Token::TrueKeyword,
        "false" => Token::FalseKeyword,
        "null" => Token::NullKeyword,
        "undefined" => Token::UndefinedKeyword,
        "new" => Token::NewKeyword,
        "this" => Token::ThisKeyword,
        "$this" => Token::ThisScope,
        "$parent" => Token::ParentScope,
        "in" => Token::InKeyword,
        "instanceof" => Token::InstanceOfKeyword,
        "typeof" => Token::TypeofKeyword,
        "void" => Token::VoidKeyword,
        "of" => Token::OfKeyword,
        _ => return None,
    };
    Some(token)
}

/// Whether `name` scans as a keyword rather than an identifier.
pub fn is_keyword(name: &str) -> bool {
    keyword(name).is_some()
}

/// Literal payload of the current token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    None,
    /// Identifier name, keyword text or cooked string literal.
    Str(String),
    Number(f64),
    /// A template segment: cooked text and the raw source between delimiters.
    Template { cooked: String, raw: String },
}

impl TokenValue {
    pub fn as_str(&self) -> &str {
        match self {
            TokenValue::Str(s) => s,
            TokenValue::Template { cooked, .. } => cooked,
            _ => "",
        }
    }
}

/// Saved scanner position, restored when a speculative parse is abandoned.
#[derive(Debug, Clone)]
pub struct Checkpoint {
    index: usize,
    ch: char,
    start: usize,
    token: Token,
    value: TokenValue,
}

/// On-demand scanner. Holds the current token and scans the next one when
/// asked.
pub struct Scanner<'a> {
    input: &'a str,
    /// Offset of `ch`.
    index: usize,
    ch: char,
    /// Offset where the current token starts.
    start: usize,
    token: Token,
    value: TokenValue,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str) -> Self {
        Scanner {
            input,
            index: 0,
            ch: input.chars().next().unwrap_or(chars::EOF),
            start: 0,
            token: Token::Eof,
            value: TokenValue::None,
        }
    }

    pub fn input(&self) -> &'a str {
        self.input
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn value(&self) -> &TokenValue {
        &self.value
    }

    pub fn take_value(&mut self) -> TokenValue {
        std::mem::replace(&mut self.value, TokenValue::None)
    }

    /// Offset of the first character of the current token.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Offset just past the current token.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Source text of the current token.
    pub fn raw(&self) -> &'a str {
        &self.input[self.start..self.index]
    }

    /// Input from the start of the current token to the end.
    pub fn rest(&self) -> &'a str {
        &self.input[self.start..]
    }

    pub fn current_char(&self) -> char {
        self.ch
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            index: self.index,
            ch: self.ch,
            start: self.start,
            token: self.token,
            value: self.value.clone(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.index = checkpoint.index;
        self.ch = checkpoint.ch;
        self.start = checkpoint.start;
        self.token = checkpoint.token;
        self.value = checkpoint.value;
    }

    /// Move the raw cursor to `index` without scanning a token.
    pub fn seek(&mut self, index: usize) {
        self.index = index;
        self.ch = self.char_at(index);
    }

    pub fn error(&self, code: ErrorCode) -> ParseError {
        ParseError::new(code, self.input, Some(self.start))
    }

    pub fn error_at(&self, code: ErrorCode, offset: usize) -> ParseError {
        ParseError::new(code, self.input, Some(offset))
    }

    pub fn advance(&mut self) {
        if self.index < self.input.len() {
            self.index += self.ch.len_utf8();
            self.ch = self.char_at(self.index);
        }
    }

    fn char_at(&self, index: usize) -> char {
        self.input
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(chars::EOF)
    }

    fn peek(&self) -> char {
        self.char_at(self.index + self.ch.len_utf8())
    }

    fn at_end(&self) -> bool {
        self.index >= self.input.len()
    }

    /// Scan the next token, replacing the current one.
    pub fn next_token(&mut self) -> Result<Token> {
        loop {
            self.start = self.index;
            if self.at_end() {
                self.token = Token::Eof;
                self.value = TokenValue::None;
                return Ok(Token::Eof);
            }

            self.value = TokenValue::None;
            let token = match chars::classify(self.ch) {
                CharClass::Whitespace => {
                    self.advance();
                    continue;
                }
                CharClass::IdentifierStart => self.scan_identifier(),
                CharClass::Digit => self.scan_number(false),
                CharClass::Quote => self.scan_string()?,
                CharClass::Backtick => {
                    self.advance();
                    self.scan_template()?
                }
                CharClass::Period => self.scan_period(),
                CharClass::Punctuator => self.scan_punctuator(),
                CharClass::Invalid => {
                    return Err(self
                        .error(ErrorCode::UnexpectedCharacter)
                        .with_message(format!("Unexpected character [{}]", self.ch)));
                }
            };

            self.token = token;
            return Ok(token);
        }
    }

    /// Resume a template after the `}` closing one of its holes.
    pub fn scan_template_continuation(&mut self) -> Result<Token> {
        self.start = self.index;
        let token = self.scan_template()?;
        self.token = token;
        Ok(token)
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.index;
        self.advance();
        while chars::is_identifier_part(self.ch) {
            self.advance();
        }
        let name = &self.input[start..self.index];
        self.value = TokenValue::Str(name.to_string());
        keyword(name).unwrap_or(Token::Identifier)
    }

    fn scan_number(&mut self, leading_dot: bool) -> Token {
        let start = self.start;
        if !leading_dot {
            while chars::is_digit(self.ch) {
                self.advance();
            }
            if self.ch != chars::PERIOD {
                return self.number_token(start, self.index);
            }
            let dot = self.index;
            self.advance();
            if self.at_end() || !(chars::is_digit(self.ch) || chars::is_identifier_start(self.ch)) {
                // `1.`, `1. ` and `1..a` end the number after the dot.
                return self.number_token(start, dot);
            }
            if !chars::is_digit(self.ch) {
                // `1.foo` is a member access on `1`.
                self.seek(dot);
                return self.number_token(start, dot);
            }
        }
        while chars::is_digit(self.ch) {
            self.advance();
        }
        self.number_token(start, self.index)
    }

    fn number_token(&mut self, start: usize, end: usize) -> Token {
        let value = self.input[start..end].parse::<f64>().unwrap_or(0.0);
        self.value = TokenValue::Number(value);
        Token::NumericLiteral
    }

    fn scan_period(&mut self) -> Token {
        self.advance();
        if chars::is_digit(self.ch) {
            return self.scan_number(true);
        }
        if self.ch != chars::PERIOD {
            return Token::Dot;
        }
        self.advance();
        if self.ch != chars::PERIOD {
            return Token::DotDot;
        }
        self.advance();
        Token::DotDotDot
    }

    fn scan_string(&mut self) -> Result<Token> {
        let quote = self.ch;
        self.advance();

        let mut buffer = String::new();
        loop {
            if self.at_end() {
                return Err(self.error(ErrorCode::UnterminatedStringLiteral));
            }
            let ch = self.ch;
            if ch == quote {
                self.advance();
                break;
            }
            if ch == chars::BACKSLASH {
                self.advance();
                buffer.push(self.scan_escape()?);
            } else {
                buffer.push(ch);
                self.advance();
            }
        }

        self.value = TokenValue::Str(buffer);
        Ok(Token::StringLiteral)
    }

    /// Decode the escape whose backslash was just consumed.
    fn scan_escape(&mut self) -> Result<char> {
        if self.at_end() {
            return Err(self.error(ErrorCode::UnterminatedStringLiteral));
        }
        if self.ch != 'u' {
            let ch = chars::unescape(self.ch);
            self.advance();
            return Ok(ch);
        }

        let escape_start = self.index - 1;
        self.advance();
        let hex_start = self.index;
        for _ in 0..4 {
            if !chars::is_ascii_hex_digit(self.ch) {
                return Err(self.error_at(ErrorCode::InvalidUnicodeEscape, escape_start));
            }
            self.advance();
        }
        u32::from_str_radix(&self.input[hex_start..self.index], 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error_at(ErrorCode::InvalidUnicodeEscape, escape_start))
    }

    /// Scan a template segment up to the closing backtick or the next `${`.
    fn scan_template(&mut self) -> Result<Token> {
        let raw_start = self.index;
        let mut cooked = String::new();

        loop {
            if self.at_end() {
                return Err(self.error(ErrorCode::UnterminatedTemplateLiteral));
            }
            match self.ch {
                chars::BT => {
                    let raw = self.input[raw_start..self.index].to_string();
                    self.advance();
                    self.value = TokenValue::Template { cooked, raw };
                    return Ok(Token::TemplateTail);
                }
                chars::DOLLAR if self.peek() == chars::LBRACE => {
                    let raw = self.input[raw_start..self.index].to_string();
                    self.advance();
                    self.advance();
                    self.value = TokenValue::Template { cooked, raw };
                    return Ok(Token::TemplateContinuation);
                }
                chars::BACKSLASH => {
                    self.advance();
                    if self.at_end() {
                        return Err(self.error(ErrorCode::UnterminatedTemplateLiteral));
                    }
                    cooked.push(self.scan_escape()?);
                }
                ch => {
                    cooked.push(ch);
                    self.advance();
                }
            }
        }
    }

    fn scan_punctuator(&mut self) -> Token {
        let ch = self.ch;
        self.advance();
        match ch {
            chars::LPAREN => Token::OpenParen,
            chars::RPAREN => Token::CloseParen,
            chars::LBRACKET => Token::OpenBracket,
            chars::RBRACKET => Token::CloseBracket,
            chars::LBRACE => Token::OpenBrace,
            chars::RBRACE => Token::CloseBrace,
            chars::COMMA => Token::Comma,
            chars::COLON => Token::Colon,
            chars::SEMICOLON => Token::Semicolon,
            chars::PERCENT => Token::Percent,
            chars::QUESTION => match self.ch {
                // `a?.5:1` is a conditional, not an optional chain.
                chars::PERIOD if !chars::is_digit(self.peek()) => {
                    self.advance();
                    Token::QuestionDot
                }
                chars::QUESTION => {
                    self.advance();
                    Token::QuestionQuestion
                }
                _ => Token::Question,
            },
            chars::BANG => {
                if self.eat(chars::EQ) {
                    if self.eat(chars::EQ) {
                        Token::ExclamationEqualsEquals
                    } else {
                        Token::ExclamationEquals
                    }
                } else {
                    Token::Exclamation
                }
            }
            chars::EQ => {
                if self.eat(chars::GT) {
                    Token::Arrow
                } else if self.eat(chars::EQ) {
                    if self.eat(chars::EQ) {
                        Token::EqualsEqualsEquals
                    } else {
                        Token::EqualsEquals
                    }
                } else {
                    Token::Equals
                }
            }
            chars::LT => {
                if self.eat(chars::EQ) {
                    Token::LessThanEquals
                } else {
                    Token::LessThan
                }
            }
            chars::GT => {
                if self.eat(chars::EQ) {
                    Token::GreaterThanEquals
                } else {
                    Token::GreaterThan
                }
            }
            chars::PLUS => {
                if self.eat(chars::PLUS) {
                    Token::PlusPlus
                } else if self.eat(chars::EQ) {
                    Token::PlusEquals
                } else {
                    Token::Plus
                }
            }
            chars::MINUS => {
                if self.eat(chars::MINUS) {
                    Token::MinusMinus
                } else if self.eat(chars::EQ) {
                    Token::MinusEquals
                } else {
                    Token::Minus
                }
            }
            chars::STAR => {
                if self.eat(chars::STAR) {
                    Token::AsteriskAsterisk
                } else if self.eat(chars::EQ) {
                    Token::AsteriskEquals
                } else {
                    Token::Asterisk
                }
            }
            chars::SLASH => {
                if self.eat(chars::EQ) {
                    Token::SlashEquals
                } else {
                    Token::Slash
                }
            }
            chars::AMPERSAND => {
                if self.eat(chars::AMPERSAND) {
                    Token::AmpersandAmpersand
                } else {
                    Token::Ampersand
                }
            }
            chars::BAR => {
                if self.eat(chars::BAR) {
                    Token::BarBar
                } else {
                    Token::Bar
                }
            }
            // The classifier only routes the characters above here.
            _ => Token::Eof,
        }
    }

    fn eat(&mut self, ch: char) -> bool {
        if self.ch == ch {
            self.advance();
            true
        } else {
            false
        }
    }
}

/// A token as reported by [`Lexer::tokenize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannedToken {
    pub token: Token,
    /// Source text of the token.
    pub text: String,
    pub offset: usize,
}

/// Whole-input tokenizer used for diagnostics. The parser drives [`Scanner`]
/// directly.
pub struct Lexer;

impl Lexer {
    pub fn new() -> Self {
        Lexer
    }

    pub fn tokenize(&self, text: &str) -> Result<Vec<ScannedToken>> {
        let mut scanner = Scanner::new(text);
        let mut tokens = Vec::new();
        // Brace depth at which each open template hole resumes the template.
        let mut holes: Vec<usize> = Vec::new();
        let mut depth = 0usize;

        let mut token = scanner.next_token()?;
        while token != Token::Eof {
            tokens.push(ScannedToken {
                token,
                text: scanner.raw().to_string(),
                offset: scanner.start(),
            });

            token = match token {
                Token::TemplateContinuation => {
                    holes.push(depth);
                    scanner.next_token()?
                }
                Token::OpenBrace => {
                    depth += 1;
                    scanner.next_token()?
                }
                Token::CloseBrace if holes.last() == Some(&depth) => {
                    holes.pop();
                    scanner.scan_template_continuation()?
                }
                Token::CloseBrace => {
                    depth = depth.saturating_sub(1);
                    scanner.next_token()?
                }
                _ => scanner.next_token()?,
            };
        }

        Ok(tokens)
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}
