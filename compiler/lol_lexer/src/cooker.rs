//! Cooking: raw tokens to final tokens.
//!
//! Stitches runs of words into keyword phrases (longest match), turns the
//! remaining words into identifiers, folds `,` into `Newline`, and appends
//! the `Eof` token.

use lol_ir::{Span, Token, TokenKind, TokenList};

use crate::lex_error::{LexError, LexErrorKind};
use crate::phrase::PhraseTable;
use crate::raw_token::RawToken;

pub(crate) fn cook(source: &str, raw: Vec<(RawToken, Span)>) -> Result<TokenList, LexError> {
    let table = PhraseTable::global();
    let spans: Vec<Span> = raw.iter().map(|(_, span)| *span).collect();
    let words: Vec<Option<&str>> = raw
        .iter()
        .map(|(token, span)| matches!(token, RawToken::Word).then(|| &source[span.to_range()]))
        .collect();

    let mut tokens = TokenList::new();
    let mut resume_at = 0;

    for (i, (token, span)) in raw.into_iter().enumerate() {
        if i < resume_at {
            continue;
        }
        let kind = match token {
            RawToken::Word => {
                if let Some((keyword, len)) = table.longest_match(&words[i..]) {
                    resume_at = i + len;
                    let span = span.merge(spans[i + len - 1]);
                    tokens.push(Token::new(TokenKind::Keyword(keyword), span));
                    continue;
                }
                identifier(&source[span.to_range()], span)?
            }
            RawToken::Numbr(n) => TokenKind::Numbr(n),
            RawToken::Numbar(f) => TokenKind::Numbar(f.to_bits()),
            RawToken::Yarn(text) => TokenKind::Yarn(text),
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::Newline | RawToken::Comma => TokenKind::Newline,
            RawToken::LineComment | RawToken::BlockComment => continue,
        };
        tokens.push(Token::new(kind, span));
    }

    let eof = u32::try_from(source.len()).unwrap_or(u32::MAX);
    tokens.push(Token::new(TokenKind::Eof, Span::point(eof)));
    Ok(tokens)
}

fn identifier(word: &str, span: Span) -> Result<TokenKind, LexError> {
    if word.ends_with('?') {
        return Err(LexError::new(
            LexErrorKind::InvalidIdentifier(word.to_owned()),
            span,
        ));
    }
    Ok(TokenKind::Ident(word.to_owned()))
}
