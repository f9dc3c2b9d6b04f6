use logos::Logos;

use crate::{
    error::{ParseError, ParseResult},
    rpn::{Op, Term},
};

/// Represents a lexical token in the expression text.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized lexemes of the expression grammar.
///
/// Matching is maximal-munch: at every position the longest matching lexeme
/// wins, so `**` is never read as two `*` and `//` is never read as two `/`.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `3.14`. Literals are always
    /// unsigned; signs are separate tokens.
    #[regex(r"[0-9]+\.[0-9]+", parse_number)]
    #[regex(r"[0-9]+", parse_number)]
    Number(f64),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `%`
    #[token("%")]
    Percent,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs and feeds. Whitespace is never significant.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Parses a numeric literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid number.
fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits an infix expression into its resolved token sequence.
///
/// Scans the text left to right, skipping whitespace, then resolves every
/// `+`/`-` lexeme into unary or binary form. A unary `-` becomes the
/// [`Op::Negate`] operator; a unary `+` is dropped entirely.
///
/// # Parameters
/// - `expr`: The expression text.
///
/// # Returns
/// The resolved token sequence in infix order.
///
/// # Errors
/// - `EmptyExpression` if the text contains no tokens at all.
/// - `UnknownToken` if any input characters match no lexeme.
/// - `InvalidOperatorSequence` if three `+`/`-` lexemes appear in a row.
/// - `ChainedUnaryOperator` if a binary-position sign directly follows
///   another sign.
///
/// # Example
/// ```
/// use shunta::{
///     interpreter::lexer::tokenize,
///     rpn::{Op, Term},
/// };
///
/// let terms = tokenize("2 * -5").unwrap();
/// assert_eq!(terms,
///            vec![Term::Number(2.0),
///                 Term::Operator(Op::Mul),
///                 Term::Operator(Op::Negate),
///                 Term::Number(5.0)]);
/// ```
pub fn tokenize(expr: &str) -> ParseResult<Vec<Term>> {
    let mut raw = Vec::new();
    let mut lexer = Token::lexer(expr);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            raw.push(tok);
        } else {
            return Err(ParseError::UnknownToken { token: lexer.slice().to_string() });
        }
    }

    if raw.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    check_sign_runs(&raw)?;
    resolve_signs(&raw)
}

/// Rejects runs of three or more consecutive `+`/`-` lexemes.
///
/// The check runs on the raw lexeme sequence, before any sign is resolved
/// into unary or binary form.
fn check_sign_runs(raw: &[Token]) -> ParseResult<()> {
    let is_sign = |token: &Token| matches!(token, Token::Plus | Token::Minus);

    if raw.windows(3).any(|window| window.iter().all(is_sign)) {
        return Err(ParseError::InvalidOperatorSequence);
    }

    Ok(())
}

/// Resolves each raw lexeme into a [`Term`], classifying signs on the way.
///
/// A `+`/`-` lexeme is unary when it is the first lexeme or directly
/// follows `(` or a binary operator lexeme. Classification of lexeme `i`
/// looks only at the raw lexeme at `i - 1`, never at the resolved output,
/// so `2 * -5` resolves the `-` as unary while `2 - -5` is rejected.
fn resolve_signs(raw: &[Token]) -> ParseResult<Vec<Term>> {
    let mut terms = Vec::with_capacity(raw.len());

    for (i, token) in raw.iter().enumerate() {
        let term = match token {
            Token::Number(value) => Term::Number(*value),
            Token::LParen => Term::LeftParen,
            Token::RParen => Term::RightParen,
            Token::Star => Term::Operator(Op::Mul),
            Token::Slash => Term::Operator(Op::Div),
            Token::DoubleSlash => Term::Operator(Op::IntDiv),
            Token::Percent => Term::Operator(Op::Mod),
            Token::DoubleStar => Term::Operator(Op::Pow),
            Token::Plus | Token::Minus => {
                if in_unary_position(raw, i) {
                    if matches!(token, Token::Plus) {
                        // Unary plus never changes its operand.
                        continue;
                    }
                    Term::Operator(Op::Negate)
                } else if i > 0 && matches!(raw[i - 1], Token::Plus | Token::Minus) {
                    return Err(ParseError::ChainedUnaryOperator { operator: sign_char(*token),
                                                                  previous: sign_char(raw[i - 1]), });
                } else if matches!(token, Token::Plus) {
                    Term::Operator(Op::Add)
                } else {
                    Term::Operator(Op::Sub)
                }
            },
            Token::Ignored => continue,
        };

        terms.push(term);
    }

    Ok(terms)
}

/// Returns `true` when the lexeme at `i` sits in unary position: at the
/// start of the expression, or directly after `(` or a binary operator.
fn in_unary_position(raw: &[Token], i: usize) -> bool {
    i == 0
    || matches!(raw[i - 1],
                Token::LParen
                | Token::Star
                | Token::Slash
                | Token::DoubleSlash
                | Token::Percent
                | Token::DoubleStar)
}

/// Returns the sign character of a `Plus`/`Minus` lexeme.
const fn sign_char(token: Token) -> char {
    match token {
        Token::Plus => '+',
        _ => '-',
    }
}
