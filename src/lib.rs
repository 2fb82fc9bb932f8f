#![allow(clippy::module_inception)]

use std::{fs, io, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn new(line: u32, column: u32, file: Rc<String>) -> Self {
        Position { line, column, file }
    }

    pub fn null() -> Self {
        Position {
            line: 0,
            column: 0,
            file: Rc::new(String::from("<null>")),
        }
    }
}

/// Returns the text of the given 1-based line, without its line break.
pub fn source_line(source: &str, line: u32) -> Option<&str> {
    if line == 0 {
        return None;
    }

    source.split('\n').nth(line as usize - 1)
}

/// Strips the trailing line break of every line and drops lines that are
/// exactly a single space character. Empty lines and lines of any other
/// whitespace pass through, so line numbers shift only where a `" "` line
/// was removed.
pub fn filter_lines(contents: &str) -> String {
    contents
        .lines()
        .filter(|line| *line != " ")
        .collect::<Vec<&str>>()
        .join("\n")
}

pub fn read_source(path: &Path) -> io::Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(filter_lines(&contents))
}

pub fn display_error(error: &Error, source: &str) {
    /*
        error: message
        -> final.aqua
           |
        20 | let a = @
           | --------^
    */

    let position = error.get_position();

    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    if let ErrorTip::None = error.get_tip() {
        println!("Error: {}", error.get_error_name());
    } else {
        println!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    println!("-> {}", position.file);
    println!("{:>padding$}", "|");

    let line_text = source_line(source, position.line).unwrap_or("");
    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    println!("{} | {}", line_string, line_text_removed.trim());

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);

    println!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_source_line() {
        let source = "func main()\n    let x = 1\n    let y = 2\n";
        assert_eq!(super::source_line(source, 1), Some("func main()"));
        assert_eq!(super::source_line(source, 3), Some("    let y = 2"));
        assert_eq!(super::source_line(source, 9), None);
        assert_eq!(super::source_line(source, 0), None);
    }

    #[test]
    fn test_filter_lines_drops_single_space_lines() {
        let contents = "let x = 1\n \nlet y = 2\n";
        assert_eq!(super::filter_lines(contents), "let x = 1\nlet y = 2");
    }

    #[test]
    fn test_filter_lines_keeps_empty_and_wider_whitespace_lines() {
        let contents = "let x = 1\n\n  \nlet y = 2\n";
        assert_eq!(super::filter_lines(contents), "let x = 1\n\n  \nlet y = 2");
    }

    #[test]
    fn test_remove_starting_whitespace() {
        let (text, removed) = super::remove_starting_whitespace("    let x = 1");
        assert_eq!(text, "let x = 1");
        assert_eq!(removed, 4);
    }
}
