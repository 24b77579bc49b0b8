//! Parser for the list columns of the TMDB tables, which are stored as Python
//! literals (`[{'id': 18, 'name': 'Drama'}, {'id': 35, 'name': "Bob's"}]`).
//!
//! The parser only understands the literal subset those columns use: lists,
//! tuples, dicts, single or double quoted strings, numbers and the `None`,
//! `True`, `False` constants. The result is a `serde_json::Value` so callers
//! can pull typed entries out of it with serde.

use serde::de::DeserializeOwned;
use serde_json::{Map, Number, Value};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum LiteralError {
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    #[error("Unexpected character {found:?} at offset {offset}")]
    UnexpectedChar { found: char, offset: usize },

    #[error("Invalid number {0:?}")]
    InvalidNumber(String),

    #[error("Invalid escape sequence at offset {0}")]
    InvalidEscape(usize),

    #[error("Unsupported dictionary key at offset {0}")]
    UnsupportedKey(usize),

    #[error("Trailing characters at offset {0}")]
    TrailingCharacters(usize),

    #[error("Literal does not have the expected shape: {0}")]
    UnexpectedShape(String),

    #[error("Nesting deeper than {MAX_DEPTH} levels at offset {0}")]
    TooDeep(usize),
}

/// Deepest list, tuple or dict nesting the parser accepts.
const MAX_DEPTH: usize = 128;

pub fn parse_literal(input: &str) -> Result<Value, LiteralError> {
    let mut parser = Parser {
        chars: input.chars().collect(),
        pos: 0,
        depth: 0,
    };
    let value = parser.parse_value()?;
    parser.skip_whitespace();
    if parser.pos < parser.chars.len() {
        return Err(LiteralError::TrailingCharacters(parser.pos));
    }
    Ok(value)
}

/// Parses `input` and deserializes the resulting value into `T`.
pub fn parse_literal_as<T: DeserializeOwned>(input: &str) -> Result<T, LiteralError> {
    let value = parse_literal(input)?;
    serde_json::from_value(value).map_err(|err| LiteralError::UnexpectedShape(err.to_string()))
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next(&mut self) -> Result<char, LiteralError> {
        let c = self.peek().ok_or(LiteralError::UnexpectedEnd)?;
        self.pos += 1;
        Ok(c)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.pos += 1;
        }
    }

    fn unexpected(&self, found: char) -> LiteralError {
        LiteralError::UnexpectedChar {
            found,
            offset: self.pos,
        }
    }

    fn parse_value(&mut self) -> Result<Value, LiteralError> {
        self.skip_whitespace();
        match self.peek() {
            None => Err(LiteralError::UnexpectedEnd),
            Some('[') => self.parse_sequence(']'),
            Some('(') => self.parse_sequence(')'),
            Some('{') => self.parse_dict(),
            Some(q @ ('\'' | '"')) => {
                self.pos += 1;
                self.parse_string(q).map(Value::String)
            }
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => self.parse_number(),
            Some(c) if c.is_ascii_alphabetic() => self.parse_constant(),
            Some(c) => Err(self.unexpected(c)),
        }
    }

    fn enter(&mut self) -> Result<(), LiteralError> {
        if self.depth == MAX_DEPTH {
            return Err(LiteralError::TooDeep(self.pos));
        }
        self.depth += 1;
        // opening bracket
        self.pos += 1;
        Ok(())
    }

    fn leave<T>(&mut self, value: T) -> Result<T, LiteralError> {
        self.depth -= 1;
        Ok(value)
    }

    fn parse_sequence(&mut self, close: char) -> Result<Value, LiteralError> {
        self.enter()?;
        let mut items = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some(close) {
                self.pos += 1;
                return self.leave(Value::Array(items));
            }
            items.push(self.parse_value()?);
            self.skip_whitespace();
            match self.next()? {
                ',' => continue,
                c if c == close => return self.leave(Value::Array(items)),
                c => {
                    self.pos -= 1;
                    return Err(self.unexpected(c));
                }
            }
        }
    }

    fn parse_dict(&mut self) -> Result<Value, LiteralError> {
        self.enter()?;
        let mut map = Map::new();
        loop {
            self.skip_whitespace();
            if self.peek() == Some('}') {
                self.pos += 1;
                return self.leave(Value::Object(map));
            }
            let key_offset = self.pos;
            let key = match self.parse_value()? {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                _ => return Err(LiteralError::UnsupportedKey(key_offset)),
            };
            self.skip_whitespace();
            match self.next()? {
                ':' => {}
                c => {
                    self.pos -= 1;
                    return Err(self.unexpected(c));
                }
            }
            let value = self.parse_value()?;
            map.insert(key, value);
            self.skip_whitespace();
            match self.next()? {
                ',' => continue,
                '}' => return self.leave(Value::Object(map)),
                c => {
                    self.pos -= 1;
                    return Err(self.unexpected(c));
                }
            }
        }
    }

    fn parse_string(&mut self, quote: char) -> Result<String, LiteralError> {
        let mut out = String::new();
        loop {
            let c = self.next()?;
            if c == quote {
                return Ok(out);
            }
            if c != '\\' {
                out.push(c);
                continue;
            }
            let escape_offset = self.pos - 1;
            match self.next()? {
                '\\' => out.push('\\'),
                '\'' => out.push('\''),
                '"' => out.push('"'),
                'n' => out.push('\n'),
                't' => out.push('\t'),
                'r' => out.push('\r'),
                '0' => out.push('\0'),
                // line continuation
                '\n' => {}
                'x' => out.push(self.parse_code_point(2, escape_offset)?),
                'u' => out.push(self.parse_code_point(4, escape_offset)?),
                'U' => out.push(self.parse_code_point(8, escape_offset)?),
                // unknown escapes keep the backslash, like Python does
                other => {
                    out.push('\\');
                    out.push(other);
                }
            }
        }
    }

    fn parse_code_point(&mut self, digits: usize, offset: usize) -> Result<char, LiteralError> {
        let mut hex = String::with_capacity(digits);
        for _ in 0..digits {
            hex.push(self.next()?);
        }
        u32::from_str_radix(&hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or(LiteralError::InvalidEscape(offset))
    }

    fn parse_number(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(
            self.peek(),
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E' | '_')
        ) {
            self.pos += 1;
        }
        let raw: String = self.chars[start..self.pos]
            .iter()
            .filter(|c| **c != '_')
            .collect();
        let is_float = raw.contains(['.', 'e', 'E']);
        let number = if is_float {
            raw.parse::<f64>().ok().and_then(Number::from_f64)
        } else {
            raw.parse::<i64>().ok().map(Number::from)
        };
        number
            .map(Value::Number)
            .ok_or(LiteralError::InvalidNumber(raw))
    }

    fn parse_constant(&mut self) -> Result<Value, LiteralError> {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphanumeric() || c == '_') {
            self.pos += 1;
        }
        let word: String = self.chars[start..self.pos].iter().collect();
        match word.as_str() {
            "None" | "null" => Ok(Value::Null),
            "True" | "true" => Ok(Value::Bool(true)),
            "False" | "false" => Ok(Value::Bool(false)),
            _ => {
                self.pos = start;
                Err(self.unexpected(self.chars[start]))
            }
        }
    }
}
