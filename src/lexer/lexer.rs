use crate::MK_TOKEN;

use super::tokens::{lookup_identifier, Token, TokenKind, SINGLE_CHAR_LOOKUP};

/// Byte-at-a-time scanner over an owned source string.
///
/// `ch` is the byte under examination (`0` once the cursor is past the end),
/// `pos` is where it starts and `read_pos` is where the next byte starts.
#[derive(Clone, Debug)]
pub struct Lexer {
    source: String,
    pos: usize,
    read_pos: usize,
    ch: u8,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        let mut lexer = Lexer {
            source,
            pos: 0,
            read_pos: 0,
            ch: 0,
        };
        lexer.read_char();
        lexer
    }

    fn read_char(&mut self) {
        self.ch = self.peek_char();
        self.pos = self.read_pos;
        if self.read_pos < self.source.len() {
            self.read_pos += 1;
        }
    }

    fn peek_char(&self) -> u8 {
        self.source
            .as_bytes()
            .get(self.read_pos)
            .copied()
            .unwrap_or(0)
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn skip_whitespace(&mut self) {
        while !self.at_eof() && matches!(self.ch, b' ' | b'\t' | b'\n' | b'\r') {
            self.read_char();
        }
    }

    fn read_while(&mut self, accept: fn(u8) -> bool) -> String {
        let start = self.pos;
        while !self.at_eof() && accept(self.ch) {
            self.read_char();
        }
        self.source[start..self.pos].to_string()
    }

    /// Scans the next token. Once the input is exhausted every call returns
    /// `EOF` without moving the cursor.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        if self.at_eof() {
            return MK_TOKEN!(TokenKind::EOF, String::new());
        }

        let token = match self.ch {
            b'=' if self.peek_char() == b'=' => {
                self.read_char();
                MK_TOKEN!(TokenKind::Equals, String::from("=="))
            }
            b'=' => MK_TOKEN!(TokenKind::Assign, String::from("=")),
            b'!' if self.peek_char() == b'=' => {
                self.read_char();
                MK_TOKEN!(TokenKind::NotEquals, String::from("!="))
            }
            b'!' => MK_TOKEN!(TokenKind::Bang, String::from("!")),
            ch if is_identifier_start(ch) => {
                // read_while leaves the cursor on the first byte after the word
                let word = self.read_while(is_identifier_part);
                return MK_TOKEN!(lookup_identifier(&word), word);
            }
            ch if ch.is_ascii_digit() => {
                let digits = self.read_while(|c| c.is_ascii_digit());
                return MK_TOKEN!(TokenKind::Integer, digits);
            }
            ch => match SINGLE_CHAR_LOOKUP.get(&ch) {
                Some(kind) => MK_TOKEN!(*kind, (ch as char).to_string()),
                None => MK_TOKEN!(TokenKind::Illegal, (ch as char).to_string()),
            },
        };

        self.read_char();
        token
    }
}

fn is_identifier_start(ch: u8) -> bool {
    ch.is_ascii_alphabetic() || ch == b'_'
}

fn is_identifier_part(ch: u8) -> bool {
    ch.is_ascii_alphanumeric() || ch == b'_'
}

/// Yields every token up to, but not including, the first `EOF`.
impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is(TokenKind::EOF) {
            None
        } else {
            Some(token)
        }
    }
}

/// Drains `source` into a token vector terminated by a single `EOF`.
pub fn tokenize(source: String) -> Vec<Token> {
    let mut lex = Lexer::new(source);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.is(TokenKind::EOF);
        tokens.push(token);
        if done {
            break;
        }
    }

    tokens
}
