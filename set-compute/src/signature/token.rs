use logos::{Lexer, Logos};
use std::ops::Range;

/// The different kinds of tokens that can appear in a textual signature.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\r\n]+")]
    Whitespace,

    #[token("U")]
    Union,

    #[token("&")]
    Intersection,

    #[token("-")]
    Difference,

    #[token("^")]
    Complement,

    #[token("VACIO")]
    Empty,

    #[token("UNIVERSO")]
    Universe,

    /// A set name enclosed in braces, such as `{A}`.
    #[regex(r"\{[^{}]*\}")]
    Braced,

    /// A bare set name, only valid for a signature consisting of a single set.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", priority = 1)]
    Name,

    #[regex(r".", priority = 0)]
    Symbol,
}

/// A token produced by the tokenizer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns every non-whitespace token in the input. Text that cannot be tokenized is returned as
/// a [`TokenKind::Symbol`] token.
pub fn tokenize_complete(input: &str) -> Vec<Token> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.unwrap_or(TokenKind::Symbol);
        if kind == TokenKind::Whitespace {
            continue;
        }

        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input);
        let actual = tokens.iter()
            .map(|token| (token.kind, token.lexeme))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected.to_vec());
    }

    #[test]
    fn binary_signature() {
        compare_tokens(
            "U {A} & {B} {C}",
            [
                (TokenKind::Union, "U"),
                (TokenKind::Braced, "{A}"),
                (TokenKind::Intersection, "&"),
                (TokenKind::Braced, "{B}"),
                (TokenKind::Braced, "{C}"),
            ],
        );
    }

    #[test]
    fn complements_and_atoms() {
        compare_tokens(
            "^^{U} VACIO UNIVERSO Uno",
            [
                (TokenKind::Complement, "^"),
                (TokenKind::Complement, "^"),
                (TokenKind::Braced, "{U}"),
                (TokenKind::Empty, "VACIO"),
                (TokenKind::Universe, "UNIVERSO"),
                (TokenKind::Name, "Uno"),
            ],
        );
    }

    #[test]
    fn unknown_symbol() {
        compare_tokens("| {A}", [(TokenKind::Symbol, "|"), (TokenKind::Braced, "{A}")]);
    }
}
