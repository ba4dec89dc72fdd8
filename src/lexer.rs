//! Lexer for the Boiling configuration language.
//!
//! Turns raw configuration text into a flat, ordered sequence of typed
//! tokens. The grammar is line-oriented: `[Section]` headers, `key=value`
//! pairs and `#` comments. The lexer is fail-fast; the first malformed
//! construct aborts the whole run with the line it was found on.

use crate::constants::{MAX_KEY_NAME_LEN, MAX_SECTION_NAME_LEN, MAX_VALUE_LEN};
use crate::error::{Error, Result};

/// The kind of a configuration token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Section,
    Key,
    Value,
}

/// A single token in document order. A `Key` token is always immediately
/// followed by its `Value` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    fn new(kind: TokenKind, text: String) -> Self {
        Self { kind, text }
    }
}

/// Lexes the full configuration text into a token sequence.
///
/// # Errors
/// * `Error::LexError` on any malformed section, key or value
pub fn lex(input: &str) -> Result<Vec<Token>> {
    Lexer::new(input).run()
}

struct Lexer {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    // Kind of the last emitted token. A key may only start immediately
    // after a section header or after a completed value.
    context: TokenKind,
    tokens: Vec<Token>,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
            line: 1,
            context: TokenKind::Section,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\n' => {
                    self.bump();
                }
                '#' => self.skip_comment(),
                '[' => self.lex_section()?,
                _ => self.lex_pair()?,
            }
        }
        Ok(self.tokens)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek();
        if let Some(c) = c {
            self.pos += 1;
            if c == '\n' {
                self.line += 1;
            }
        }
        c
    }

    fn err(&self, line: usize, message: impl Into<String>) -> Error {
        Error::LexError { line, message: message.into() }
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    fn lex_section(&mut self) -> Result<()> {
        let line = self.line;
        self.bump(); // consume `[`

        let mut name = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(self.err(line, "section has start but no end"));
                }
                Some(' ') => {
                    return Err(self.err(line, "section name must not contain spaces"));
                }
                Some(']') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    name.push(c);
                    self.bump();
                }
            }
        }

        if name.chars().count() > MAX_SECTION_NAME_LEN {
            return Err(self.err(
                line,
                format!("section name is too long (max {} chars)", MAX_SECTION_NAME_LEN),
            ));
        }

        self.tokens.push(Token::new(TokenKind::Section, name));
        self.context = TokenKind::Section;
        Ok(())
    }

    fn lex_pair(&mut self) -> Result<()> {
        let line = self.line;

        // Defensive: unreachable while key and value are lexed as one unit,
        // kept so a future change to the scan loop fails loudly.
        if self.context == TokenKind::Key {
            return Err(self.err(line, "expected a value, found the start of a key"));
        }

        let mut key = String::new();
        loop {
            match self.peek() {
                None | Some('\n') => {
                    return Err(self.err(line, "configuration key but no value"));
                }
                Some(' ') => {
                    return Err(self.err(line, "key must not contain spaces"));
                }
                Some('=') => {
                    self.bump();
                    break;
                }
                Some(c) => {
                    key.push(c);
                    self.bump();
                }
            }
        }

        if key.chars().count() > MAX_KEY_NAME_LEN {
            return Err(self.err(
                line,
                format!("key name is too long (max {} chars)", MAX_KEY_NAME_LEN),
            ));
        }

        self.tokens.push(Token::new(TokenKind::Key, key));
        self.context = TokenKind::Key;

        if self.peek() == Some(' ') {
            return Err(self.err(line, "there must be no space after `=`"));
        }

        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            value.push(c);
            self.bump();
        }

        if value.chars().count() > MAX_VALUE_LEN {
            return Err(self.err(
                line,
                format!("value is too long (max {} chars)", MAX_VALUE_LEN),
            ));
        }

        let value = value.trim_end_matches(' ').to_string();
        self.tokens.push(Token::new(TokenKind::Value, value));
        self.context = TokenKind::Value;
        Ok(())
    }
}
