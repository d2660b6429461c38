//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_SPAN!` - Creates a Span from a start offset and a length
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$span` - The source span
/// * `$line` - The line the token starts on
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, MK_SPAN!(0, 2), 1);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $span:expr, $line:expr) => {
        Token {
            kind: $kind,
            span: $span,
            line: $line,
        }
    };
}

/// Creates a Span covering `$len` bytes starting at `$start`.
#[macro_export]
macro_rules! MK_SPAN {
    ($start:expr, $len:expr) => {
        Span {
            start: $start,
            end: $start + $len,
        }
    };
}
