#![allow(clippy::module_inception)]

use tracing::debug;

use crate::{
    ast::ast::Ast,
    errors::errors::{Error, ErrorTip},
    lexer::{lexer::tokenize, tokens::TokenStream},
    parser::parser::parse,
};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod type_checker;

extern crate regex;

/// Byte offsets `[start, end)` into the source buffer of a compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'s>(&self, source: &'s str) -> &'s str {
        &source[self.start..self.end]
    }
}

/// Front end settings for one compilation unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Deepest allowed nesting of statements and expressions.
    pub max_nesting_depth: usize,
    /// Initial slot count of the type environment.
    pub type_env_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            max_nesting_depth: 256,
            type_env_capacity: type_checker::environment::DEFAULT_CAPACITY,
        }
    }
}

/// Output of the front end: the token stream and the statements parsed from it.
#[derive(Debug, Clone)]
pub struct Unit {
    pub tokens: TokenStream,
    pub ast: Ast,
}

/// Runs the lexer and then the parser over `source`.
///
/// Either both stages succeed or the first error is returned; there is no
/// partial AST.
pub fn analyze(source: &str, config: &Config) -> Result<Unit, Error> {
    let tokens = tokenize(source)?;
    let ast = parse(&tokens, source, config)?;

    debug!(tokens = tokens.len(), statements = ast.len(), "analyzed unit");
    Ok(Unit { tokens, ast })
}

/// Finds the line containing byte `position`.
///
/// Returns the 1-based line number, the line text and the offset of
/// `position` within that line.
pub fn get_line_at_position(source: &str, position: usize) -> Option<(usize, &str, usize)> {
    let mut start = 0;

    for (index, line) in source.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line, position - start));
        }

        start = end;
    }

    None
}

/// Finds the text of the 1-based `line`, without its newline.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source.lines().nth((line as usize).checked_sub(1)?)
}


/// Renders an error as a diagnostic pointing into `source`.
///
/// ```text
/// error: UnexpectedToken (expected `Semicolon`, found `}`)
/// -> main.morl
///   |
/// 2 | x: i32 = 4 }
///   | -----------^
/// ```
pub fn format_error(error: &Error, source: &str, file_name: &str) -> String {
    let line = error.get_line();
    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!("error: {} ({})\n", error.get_error_name(), error.get_tip()));
    }
    out.push_str(&format!("-> {}\n", file_name));
    out.push_str(&format!("{:>padding$}\n", "|"));

    let located = error
        .get_span()
        .and_then(|span| get_line_at_position(source, span.start));

    match located {
        Some((_, line_text, line_pos)) => {
            let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
            out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

            let arrows = line_pos - removed_whitespace + 1;
            out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));
        }
        None => {
            let line_text = get_line(source, line).unwrap_or_default();
            out.push_str(&format!("{} | {}\n", line_string, line_text.trim()));
        }
    }

    out
}

fn remove_starting_whitespace(string: &str) -> (&str, usize) {
    let start = string.len() - string.trim_start_matches(' ').len();
    (&string[start..], start)
}
