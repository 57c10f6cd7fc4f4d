/*
 * Character Codes
 *
 * Character constants and the classifier table driving the expression scanner
 */
//! Character constants used by the scanner, and the classifier that maps every
//! code point to the scanning routine responsible for it.

// Special characters
pub const EOF: char = '\0';
pub const BSPACE: char = '\x08';
pub const TAB: char = '\t';
pub const LF: char = '\n';
pub const VTAB: char = '\x0B';
pub const FF: char = '\x0C';
pub const CR: char = '\r';
pub const SPACE: char = ' ';

// Punctuation
pub const BANG: char = '!';
pub const DQ: char = '"';
pub const DOLLAR: char = '$';
pub const PERCENT: char = '%';
pub const AMPERSAND: char = '&';
pub const SQ: char = '\'';
pub const LPAREN: char = '(';
pub const RPAREN: char = ')';
pub const STAR: char = '*';
pub const PLUS: char = '+';
pub const COMMA: char = ',';
pub const MINUS: char = '-';
pub const PERIOD: char = '.';
pub const SLASH: char = '/';
pub const COLON: char = ':';
pub const SEMICOLON: char = ';';
pub const LT: char = '<';
pub const EQ: char = '=';
pub const GT: char = '>';
pub const QUESTION: char = '?';

// Brackets
pub const LBRACKET: char = '[';
pub const BACKSLASH: char = '\\';
pub const RBRACKET: char = ']';
pub const UNDERSCORE: char = '_';
pub const BT: char = '`';

// Braces
pub const LBRACE: char = '{';
pub const BAR: char = '|';
pub const RBRACE: char = '}';

// Digits
pub const ZERO: char = '0';
pub const NINE: char = '9';

/// What the scanner does when it meets a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// No token starts with this character.
    Invalid,
    /// Skipped between tokens.
    Whitespace,
    IdentifierStart,
    Digit,
    /// `'` or `"`.
    Quote,
    Backtick,
    /// `.`: member access, spread or a leading-dot number.
    Period,
    /// Any character that starts a punctuator or operator token.
    Punctuator,
}

const ASCII_CLASSES: [CharClass; 128] = {
    let mut table = [CharClass::Invalid; 128];
    let mut i = 0;

    while i < 128 {
        let c = i as u8;
        table[i] = match c {
            0..=0x20 | 0x7F => CharClass::Whitespace,
            b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'$' => CharClass::IdentifierStart,
            b'0'..=b'9' => CharClass::Digit,
            b'\'' | b'"' => CharClass::Quote,
            b'`' => CharClass::Backtick,
            b'.' => CharClass::Period,
            b'(' | b')' | b'[' | b']' | b'{' | b'}' | b',' | b':' | b';' | b'?' | b'!'
            | b'=' | b'<' | b'>' | b'+' | b'-' | b'*' | b'/' | b'%' | b'&' | b'|' => {
                CharClass::Punctuator
            }
            _ => CharClass::Invalid,
        };
        i += 1;
    }

    table
};

/// Classify a code point. ASCII goes through the lookup table, everything else
/// through the Unicode whitespace and ID_Start tables.
#[inline]
pub fn classify(ch: char) -> CharClass {
    if ch.is_ascii() {
        ASCII_CLASSES[ch as usize]
    } else if ch.is_whitespace() || ch == '\u{FEFF}' {
        CharClass::Whitespace
    } else if unicode_ident::is_xid_start(ch) {
        CharClass::IdentifierStart
    } else {
        CharClass::Invalid
    }
}

/// Check if character is whitespace
pub fn is_whitespace(ch: char) -> bool {
    classify(ch) == CharClass::Whitespace
}

/// Check if character is a digit
pub fn is_digit(ch: char) -> bool {
    ch >= ZERO && ch <= NINE
}

/// Check if character is ASCII hex digit
pub fn is_ascii_hex_digit(ch: char) -> bool {
    ch.is_ascii_hexdigit()
}

/// Check if character can start an identifier
pub fn is_identifier_start(ch: char) -> bool {
    classify(ch) == CharClass::IdentifierStart
}

/// Check if character can be part of an identifier
pub fn is_identifier_part(ch: char) -> bool {
    if ch.is_ascii() {
        matches!(
            ASCII_CLASSES[ch as usize],
            CharClass::IdentifierStart | CharClass::Digit
        )
    } else {
        unicode_ident::is_xid_continue(ch) || ch == '\u{200C}' || ch == '\u{200D}'
    }
}

/// Resolve the character following a backslash inside a string or template.
pub fn unescape(ch: char) -> char {
    match ch {
        'b' => BSPACE,
        't' => TAB,
        'n' => LF,
        'v' => VTAB,
        'f' => FF,
        'r' => CR,
        other => other,
    }
}
