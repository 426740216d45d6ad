//! Shared chumsky parser utilities
//!
//! Common combinators used by the UML line grammars and the Java source parser.

use chumsky::prelude::*;

/// Parser extras for grammars that report positioned errors
pub type RichExtra<'src> = extra::Err<Rich<'src, char>>;

/// Parse inline whitespace only (spaces and tabs, no newlines).
pub fn inline_whitespace<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().ignored()
}

/// Parse at least one space or tab.
pub fn inline_whitespace_required<'src>() -> impl Parser<'src, &'src str, ()> + Clone {
    one_of(" \t").repeated().at_least(1).ignored()
}

/// A word made of ASCII letters, digits and underscores, like regex `\w+`.
///
/// Unlike `text::ident` it may start with a digit, so enum values like `0`
/// are accepted.
pub fn word<'src>() -> impl Parser<'src, &'src str, &'src str> + Clone {
    any()
        .filter(|c: &char| c.is_ascii_alphanumeric() || *c == '_')
        .repeated()
        .at_least(1)
        .to_slice()
}

/// Parse a Java line comment (`//` to end of line).
pub fn line_comment<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
    just("//").ignore_then(none_of("\n").repeated()).ignored()
}

/// Parse a Java block comment, including Javadoc.
pub fn block_comment<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
    just("/*")
        .ignore_then(any().and_is(just("*/").not()).repeated())
        .then_ignore(just("*/"))
        .ignored()
}

/// Whitespace interleaved with Java comments, possibly empty.
pub fn java_trivia<'src>() -> impl Parser<'src, &'src str, (), RichExtra<'src>> + Clone {
    one_of(" \t\n\r")
        .ignored()
        .or(line_comment())
        .or(block_comment())
        .repeated()
        .ignored()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_whitespace() {
        let parser = inline_whitespace().then(just("test")).then_ignore(end());
        assert!(parser.parse("test").into_result().is_ok());
        assert!(parser.parse("\ttest").into_result().is_ok());
        // Should NOT consume newlines
        assert!(parser.parse("\ntest").into_result().is_err());
    }

    #[test]
    fn test_word() {
        let parser = word().then_ignore(end());
        assert_eq!(parser.parse("PROP_1").into_result().ok(), Some("PROP_1"));
        assert_eq!(parser.parse("0").into_result().ok(), Some("0"));
        assert!(parser.parse("a-b").into_result().is_err());
        assert!(parser.parse("").into_result().is_err());
    }

    #[test]
    fn test_java_trivia() {
        let parser = java_trivia().then(just("class")).then_ignore(end());
        assert!(parser.parse("class").into_result().is_ok());
        assert!(parser.parse("// header\nclass").into_result().is_ok());
        assert!(parser
            .parse("/** Javadoc\n * text */\n  // more\nclass")
            .into_result()
            .is_ok());
        assert!(parser.parse("/* unterminated class").into_result().is_err());
    }
}
