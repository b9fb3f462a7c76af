//! Utility macros for the front end.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_DEFAULT_HANDLER!` - Creates a default lexer handler for fixed-lexeme tokens
//!
//! These macros reduce boilerplate in the lexer pattern table.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$value` - The token's string value
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::Number, "42".to_string(), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a default lexer handler for a fixed-lexeme token.
///
/// The generated handler turns the matched text into a token of the given
/// kind spanning the match. The lexer advances past the match itself.
///
/// # Example
///
/// ```ignore
/// RegexPattern {
///     regex: pattern("\\+"),
///     handler: MK_DEFAULT_HANDLER!(TokenKind::Plus),
/// }
/// ```
#[macro_export]
macro_rules! MK_DEFAULT_HANDLER {
    ($kind:expr) => {{
        fn handler(lexer: &Lexer, matched: &str) -> Option<Token> {
            Some(MK_TOKEN!($kind, String::from(matched), lexer.span_of(matched)))
        }
        handler as RegexHandler
    }};
}
