//! Parser for HCL-style `.tfvars` files
//!
//! Handles the subset used for flat variable files: one `key = value`
//! assignment per entry, where the value is a quoted string, a bare scalar
//! (number, bool) or a heredoc. Lists and maps are rejected.

use std::fmt;

use super::VarEntry;

/// Parse failure with the 1-based line it occurred on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.message)
    }
}

type ParseResult<T> = std::result::Result<T, ParseError>;

/// Parse `.tfvars` content into entries, in file order
///
/// A key assigned more than once keeps its first position and its last value.
pub fn parse_tfvars(content: &str) -> ParseResult<Vec<VarEntry>> {
    let mut parser = Parser::new(content);
    let mut entries: Vec<VarEntry> = Vec::new();

    loop {
        parser.skip_trivia()?;
        if parser.at_end() {
            break;
        }

        let key = parser.parse_key()?;
        parser.skip_inline_whitespace();
        if !parser.eat('=') {
            return Err(parser.error(format!("expected '=' after key '{}'", key)));
        }
        parser.skip_inline_whitespace();

        let value = parser.parse_value(&key)?;
        parser.expect_end_of_entry()?;

        match entries.iter_mut().find(|e| e.key == key) {
            Some(existing) => existing.value = value,
            None => entries.push(VarEntry { key, value }),
        }
    }

    Ok(entries)
}

struct Parser {
    chars: Vec<char>,
    pos: usize,
    line: usize,
}

impl Parser {
    fn new(content: &str) -> Self {
        Self {
            chars: content.chars().collect(),
            pos: 0,
            line: 1,
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError {
            line: self.line,
            message: message.into(),
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn at_comment(&self) -> bool {
        matches!(
            (self.peek(), self.peek_at(1)),
            (Some('#'), _) | (Some('/'), Some('/')) | (Some('/'), Some('*'))
        )
    }

    fn skip_inline_whitespace(&mut self) {
        while matches!(self.peek(), Some(' ') | Some('\t') | Some('\r')) {
            self.bump();
        }
    }

    /// Skip whitespace, newlines and comments between entries
    fn skip_trivia(&mut self) -> ParseResult<()> {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.bump();
                }
                _ if self.at_comment() => self.skip_comment()?,
                _ => return Ok(()),
            }
        }
    }

    fn skip_comment(&mut self) -> ParseResult<()> {
        if self.peek() == Some('/') && self.peek_at(1) == Some('*') {
            let start_line = self.line;
            self.pos += 2;
            loop {
                match self.bump() {
                    Some('*') if self.peek() == Some('/') => {
                        self.bump();
                        return Ok(());
                    }
                    Some(_) => {}
                    None => {
                        return Err(ParseError {
                            line: start_line,
                            message: "unterminated block comment".to_string(),
                        })
                    }
                }
            }
        }

        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
        Ok(())
    }

    fn parse_key(&mut self) -> ParseResult<String> {
        if self.peek() == Some('"') {
            let key = self.parse_string()?;
            if key.is_empty() {
                return Err(self.error("empty variable name"));
            }
            return Ok(key);
        }

        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            Some(c) => {
                return Err(self.error(format!(
                    "invalid variable name starting with '{}'",
                    c
                )))
            }
            None => return Err(self.error("expected variable name")),
        }

        let mut key = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                key.push(c);
                self.bump();
            } else {
                break;
            }
        }
        Ok(key)
    }

    fn parse_value(&mut self, key: &str) -> ParseResult<String> {
        match self.peek() {
            Some('"') => self.parse_string(),
            Some('<') if self.peek_at(1) == Some('<') => self.parse_heredoc(),
            Some('[') | Some('{') => Err(self.error(format!(
                "value of '{}' is a list or map; only strings, numbers and bools are supported",
                key
            ))),
            _ => self.parse_bare(key),
        }
    }

    fn parse_string(&mut self) -> ParseResult<String> {
        let start_line = self.line;
        self.bump();

        let mut value = String::new();
        loop {
            match self.bump() {
                Some('"') => return Ok(value),
                Some('\\') => match self.bump() {
                    Some('"') => value.push('"'),
                    Some('\\') => value.push('\\'),
                    Some('n') => value.push('\n'),
                    Some('r') => value.push('\r'),
                    Some('t') => value.push('\t'),
                    Some(c) => {
                        return Err(self.error(format!("invalid escape sequence '\\{}'", c)))
                    }
                    None => break,
                },
                Some('\n') | None => break,
                Some(c) => value.push(c),
            }
        }

        Err(ParseError {
            line: start_line,
            message: "unterminated string".to_string(),
        })
    }

    fn parse_heredoc(&mut self) -> ParseResult<String> {
        let start_line = self.line;
        self.pos += 2;
        let indented = self.eat('-');

        let mut marker = String::new();
        while let Some(c) = self.peek() {
            if c.is_ascii_alphanumeric() || c == '_' {
                marker.push(c);
                self.bump();
            } else {
                break;
            }
        }
        if marker.is_empty() {
            return Err(self.error("heredoc is missing its marker"));
        }

        self.skip_inline_whitespace();
        if !self.eat('\n') {
            return Err(self.error(format!(
                "expected newline after heredoc marker '{}'",
                marker
            )));
        }

        let mut lines: Vec<String> = Vec::new();
        loop {
            if self.at_end() {
                return Err(ParseError {
                    line: start_line,
                    message: format!("unterminated heredoc, missing closing '{}'", marker),
                });
            }

            let mut line = String::new();
            while let Some(c) = self.peek() {
                if c == '\n' {
                    break;
                }
                line.push(c);
                self.bump();
            }

            if line.trim() == marker {
                break;
            }
            self.bump();
            lines.push(line.trim_end_matches('\r').to_string());
        }

        if indented {
            let indent = lines
                .iter()
                .filter(|l| !l.trim().is_empty())
                .map(|l| l.len() - l.trim_start().len())
                .min()
                .unwrap_or(0);
            for line in lines.iter_mut() {
                let cut = indent.min(line.len() - line.trim_start().len());
                line.replace_range(..cut, "");
            }
        }

        let mut value = lines.join("\n");
        if !lines.is_empty() {
            value.push('\n');
        }
        Ok(value)
    }

    fn parse_bare(&mut self, key: &str) -> ParseResult<String> {
        let mut value = String::new();
        while let Some(c) = self.peek() {
            if c.is_whitespace() || self.at_comment() {
                break;
            }
            value.push(c);
            self.bump();
        }

        if value.is_empty() {
            return Err(self.error(format!("missing value for '{}'", key)));
        }
        Ok(value)
    }

    fn expect_end_of_entry(&mut self) -> ParseResult<()> {
        self.skip_inline_whitespace();
        match self.peek() {
            None | Some('\n') => Ok(()),
            _ if self.at_comment() => Ok(()),
            Some(c) => Err(self.error(format!("unexpected '{}' after value", c))),
        }
    }
}
