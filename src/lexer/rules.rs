//! The classification rule table.
//!
//! Each rule pairs a `\A`-anchored regex with a handler, so a find against
//! the unscanned remainder is always a match at the cursor. The table is
//! ordered by priority and the order is load-bearing:
//!
//! 1. Numbers - the greedy optional fraction makes `3.14` one token.
//! 2. Strings - triggered on the quote, fully matched by the handler so an
//!    unterminated literal is its own error instead of a failed match.
//! 3. Two-character operators (`==` `!=` `>=` `<=` `=>`) strictly before
//!    their one-character prefixes, so matching is greedy across classes.
//! 4. One-character operators and delimiters.
//! 5. Identifiers - reserved words resolve through `RESERVED_LOOKUP` on the
//!    matched word, which gives them word-boundary semantics for free:
//!    `loopback` is one identifier, never `loop` plus `back`.
//!
//! The table is read-only and shared by every tokenization call.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::lexer::Lexer;
use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, &Regex) -> Result<(), Error>;

pub struct RegexPattern {
    pub regex: Regex,
    pub handler: RegexHandler,
}

lazy_static! {
    pub static ref RULES: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"\A[0-9]+(\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new(r#"\A["']"#).unwrap(), handler: string_handler },
        RegexPattern { regex: Regex::new(r"\A==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==") },
        RegexPattern { regex: Regex::new(r"\A!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEquals, "!=") },
        RegexPattern { regex: Regex::new(r"\A>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals, ">=") },
        RegexPattern { regex: Regex::new(r"\A<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals, "<=") },
        RegexPattern { regex: Regex::new(r"\A=>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Arrow, "=>") },
        RegexPattern { regex: Regex::new(r"\A\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+") },
        RegexPattern { regex: Regex::new(r"\A-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-") },
        RegexPattern { regex: Regex::new(r"\A\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*") },
        RegexPattern { regex: Regex::new(r"\A/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/") },
        RegexPattern { regex: Regex::new(r"\A=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=") },
        RegexPattern { regex: Regex::new(r"\A>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater, ">") },
        RegexPattern { regex: Regex::new(r"\A<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less, "<") },
        RegexPattern { regex: Regex::new(r"\A\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(") },
        RegexPattern { regex: Regex::new(r"\A\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")") },
        RegexPattern { regex: Regex::new(r"\A\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket, "[") },
        RegexPattern { regex: Regex::new(r"\A\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket, "]") },
        RegexPattern { regex: Regex::new(r"\A,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",") },
        RegexPattern { regex: Regex::new(r"\A;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";") },
        RegexPattern { regex: Regex::new(r"\A:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":") },
        RegexPattern { regex: Regex::new(r"\A\.").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dot, ".") },
        RegexPattern { regex: Regex::new(r"\A[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
    ];

    // String literals never span a line break, so the column arithmetic in
    // `advance_str` stays valid for their text.
    static ref DOUBLE_QUOTED: Regex = Regex::new(r#"\A"[^"\n]*""#).unwrap();
    static ref SINGLE_QUOTED: Regex = Regex::new(r"\A'[^'\n]*'").unwrap();
}

fn number_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = match regex.find(lexer.remainder()) {
        Some(found) => found.as_str().to_string(),
        None => return Ok(()),
    };

    lexer.push(MK_TOKEN!(TokenKind::Number, matched.clone(), lexer.position()));
    lexer.advance_str(&matched);
    Ok(())
}

fn string_handler(lexer: &mut Lexer, _regex: &Regex) -> Result<(), Error> {
    let quote = match lexer.peek() {
        Some(c) => c,
        None => return Ok(()),
    };

    let pattern: &Regex = if quote == '"' { &DOUBLE_QUOTED } else { &SINGLE_QUOTED };

    // Quote characters stay in the token text.
    let matched = match pattern.find(lexer.remainder()) {
        Some(found) => found.as_str().to_string(),
        None => {
            return Err(Error::new(
                ErrorImpl::UnterminatedString { quote },
                lexer.position(),
            ))
        }
    };

    lexer.push(MK_TOKEN!(TokenKind::String, matched.clone(), lexer.position()));
    lexer.advance_str(&matched);
    Ok(())
}

fn symbol_handler(lexer: &mut Lexer, regex: &Regex) -> Result<(), Error> {
    let matched = match regex.find(lexer.remainder()) {
        Some(found) => found.as_str().to_string(),
        None => return Ok(()),
    };

    if let Some(kind) = RESERVED_LOOKUP.get(matched.as_str()) {
        lexer.push(MK_TOKEN!(*kind, matched.clone(), lexer.position()));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, matched.clone(), lexer.position()));
    }

    lexer.advance_str(&matched);
    Ok(())
}
