use std::rc::Rc;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::rules::RULES;
use super::tokens::{Token, TokenKind};

pub struct Lexer {
    source: String,
    pos: usize,
    line: u32,
    column: u32,
    indent_stack: Vec<usize>,
    tokens: Vec<Token>,
    file: Rc<String>,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("shell"))
        };

        Lexer {
            source,
            pos: 0,
            line: 1,
            column: 1,
            // bottom entry is always 0
            indent_stack: vec![0],
            tokens: vec![],
            file: file_name,
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.column, Rc::clone(&self.file))
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();

            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    // Matched text never contains a line break, so columns advance by the
    // character count alone.
    pub fn advance_str(&mut self, text: &str) {
        self.pos += text.len();
        self.column += text.chars().count() as u32;
    }

    fn skip_whitespace(&mut self) -> bool {
        let mut skipped = false;
        while let Some(c) = self.peek() {
            if c == '\n' || !c.is_whitespace() {
                break;
            }
            self.advance();
            skipped = true;
        }

        skipped
    }

    fn skip_comment(&mut self) -> bool {
        if self.peek() != Some('#') {
            return false;
        }

        // up to, not including, the line break
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.advance();
        }

        true
    }

    fn handle_newline(&mut self) -> Result<(), Error> {
        self.push(MK_TOKEN!(
            TokenKind::Newline,
            String::from("\n"),
            self.position()
        ));
        self.advance();

        // width of the run of literal spaces; a tab or any other character
        // ends the run
        let mut width = 0;
        while self.peek() == Some(' ') {
            width += 1;
            self.advance();
        }

        // blank and comment-only lines never touch the stack
        match self.peek() {
            None | Some('\n') | Some('#') => return Ok(()),
            _ => {}
        }

        let current = self.indent_stack.last().copied().unwrap_or(0);

        if width > current {
            self.indent_stack.push(width);
            self.push(MK_TOKEN!(TokenKind::Indent, String::new(), self.position()));
        } else if width < current {
            while let Some(top) = self.indent_stack.last().copied() {
                if top <= width {
                    break;
                }
                self.indent_stack.pop();
                self.push(MK_TOKEN!(TokenKind::Dedent, String::new(), self.position()));
            }

            // a dedent must land on a width already on the stack
            if self.indent_stack.last().copied().unwrap_or(0) != width {
                return Err(Error::new(
                    ErrorImpl::IndentationMismatch { width },
                    self.position(),
                ));
            }
        }

        Ok(())
    }

    fn handle_final_indentation(&mut self) {
        while self.indent_stack.len() > 1 {
            self.indent_stack.pop();
            self.push(MK_TOKEN!(TokenKind::Dedent, String::new(), self.position()));
        }
    }
}

pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while !lex.at_eof() {
        if lex.skip_whitespace() {
            continue;
        }

        if lex.skip_comment() {
            continue;
        }

        if lex.peek() == Some('\n') {
            lex.handle_newline()?;
            continue;
        }

        let mut matched = false;

        for pattern in RULES.iter() {
            if pattern.regex.find(lex.remainder()).is_some() {
                (pattern.handler)(&mut lex, &pattern.regex)?;
                matched = true;
                break;
            }
        }

        if !matched {
            let character = lex.peek().unwrap_or_default();
            return Err(Error::new(
                ErrorImpl::UnrecognisedCharacter { character },
                lex.position(),
            ));
        }
    }

    lex.handle_final_indentation();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), lex.position()));
    Ok(lex.tokens)
}
