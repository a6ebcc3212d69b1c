//! Token types produced by the lexer.
//!
//! Keywords in LOLCODE are phrases (`I HAS A`, `IM IN YR`), so a single
//! [`Keyword`] token may span several source words. The lexer resolves the
//! phrases; the parser only ever sees whole keywords.

use super::Span;
use std::fmt;
use std::hash::Hash;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds.
///
/// `NUMBAR` literals store their bits so the enum stays `Eq + Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// A keyword phrase, resolved by longest match.
    Keyword(Keyword),
    /// Any word that is not part of a keyword phrase.
    Ident(String),
    /// Integer literal, sign included.
    Numbr(i64),
    /// Float literal stored as `f64::to_bits`.
    Numbar(u64),
    /// String literal with escapes already resolved.
    Yarn(String),
    LParen,
    RParen,
    /// Line break or `,` soft break.
    Newline,
    Eof,
}

impl TokenKind {
    /// Human-readable description used in "expected X, found Y" errors.
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Keyword(kw) => format!("`{kw}`"),
            TokenKind::Ident(name) => format!("identifier `{name}`"),
            TokenKind::Numbr(n) => format!("number `{n}`"),
            TokenKind::Numbar(bits) => format!("number `{}`", f64::from_bits(*bits)),
            TokenKind::Yarn(_) => "string literal".to_owned(),
            TokenKind::LParen => "`(`".to_owned(),
            TokenKind::RParen => "`)`".to_owned(),
            TokenKind::Newline => "end of line".to_owned(),
            TokenKind::Eof => "end of input".to_owned(),
        }
    }

    #[inline]
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(kw) => write!(f, "Keyword({kw})"),
            TokenKind::Ident(name) => write!(f, "Ident({name})"),
            TokenKind::Numbr(n) => write!(f, "Numbr({n})"),
            TokenKind::Numbar(bits) => write!(f, "Numbar({})", f64::from_bits(*bits)),
            TokenKind::Yarn(s) => write!(f, "Yarn({s:?})"),
            TokenKind::LParen => write!(f, "LParen"),
            TokenKind::RParen => write!(f, "RParen"),
            TokenKind::Newline => write!(f, "Newline"),
            TokenKind::Eof => write!(f, "Eof"),
        }
    }
}

/// The closed set of keyword phrases.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Keyword {
    // Declarations and assignment
    IHasA,
    Itz,
    R,
    IsNowA,

    // Operators
    SumOf,
    DiffOf,
    BothSaem,
    SmallrThan,
    BiggrThan,
    Smoosh,
    AnyOf,
    AllOf,
    An,
    Mkay,
    Maek,
    A,

    // Literals and types
    Win,
    Fail,
    Noob,
    Numbr,
    Numbar,
    Yarn,
    Troof,

    // Conditionals
    ORly,
    YaRly,
    Mebbe,
    NoWai,
    Oic,

    // Loops
    ImInYr,
    ImOuttaYr,
    Uppin,
    Nerfin,
    Yr,
    Wile,

    // Functions
    HowDuzI,
    AnYr,
    IfUSaySo,

    // Statements
    Visible,
    ONvm,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 39] = [
        Keyword::IHasA,
        Keyword::Itz,
        Keyword::R,
        Keyword::IsNowA,
        Keyword::SumOf,
        Keyword::DiffOf,
        Keyword::BothSaem,
        Keyword::SmallrThan,
        Keyword::BiggrThan,
        Keyword::Smoosh,
        Keyword::AnyOf,
        Keyword::AllOf,
        Keyword::An,
        Keyword::Mkay,
        Keyword::Maek,
        Keyword::A,
        Keyword::Win,
        Keyword::Fail,
        Keyword::Noob,
        Keyword::Numbr,
        Keyword::Numbar,
        Keyword::Yarn,
        Keyword::Troof,
        Keyword::ORly,
        Keyword::YaRly,
        Keyword::Mebbe,
        Keyword::NoWai,
        Keyword::Oic,
        Keyword::ImInYr,
        Keyword::ImOuttaYr,
        Keyword::Uppin,
        Keyword::Nerfin,
        Keyword::Yr,
        Keyword::Wile,
        Keyword::HowDuzI,
        Keyword::AnYr,
        Keyword::IfUSaySo,
        Keyword::Visible,
        Keyword::ONvm,
    ];

    /// The whitespace-separated words making up this phrase.
    pub fn words(self) -> &'static [&'static str] {
        match self {
            Keyword::IHasA => &["I", "HAS", "A"],
            Keyword::Itz => &["ITZ"],
            Keyword::R => &["R"],
            Keyword::IsNowA => &["IS", "NOW", "A"],
            Keyword::SumOf => &["SUM", "OF"],
            Keyword::DiffOf => &["DIFF", "OF"],
            Keyword::BothSaem => &["BOTH", "SAEM"],
            Keyword::SmallrThan => &["SMALLR", "THAN"],
            Keyword::BiggrThan => &["BIGGR", "THAN"],
            Keyword::Smoosh => &["SMOOSH"],
            Keyword::AnyOf => &["ANY", "OF"],
            Keyword::AllOf => &["ALL", "OF"],
            Keyword::An => &["AN"],
            Keyword::Mkay => &["MKAY"],
            Keyword::Maek => &["MAEK"],
            Keyword::A => &["A"],
            Keyword::Win => &["WIN"],
            Keyword::Fail => &["FAIL"],
            Keyword::Noob => &["NOOB"],
            Keyword::Numbr => &["NUMBR"],
            Keyword::Numbar => &["NUMBAR"],
            Keyword::Yarn => &["YARN"],
            Keyword::Troof => &["TROOF"],
            Keyword::ORly => &["O", "RLY?"],
            Keyword::YaRly => &["YA", "RLY"],
            Keyword::Mebbe => &["MEBBE"],
            Keyword::NoWai => &["NO", "WAI"],
            Keyword::Oic => &["OIC"],
            Keyword::ImInYr => &["IM", "IN", "YR"],
            Keyword::ImOuttaYr => &["IM", "OUTTA", "YR"],
            Keyword::Uppin => &["UPPIN"],
            Keyword::Nerfin => &["NERFIN"],
            Keyword::Yr => &["YR"],
            Keyword::Wile => &["WILE"],
            Keyword::HowDuzI => &["HOW", "DUZ", "I"],
            Keyword::AnYr => &["AN", "YR"],
            Keyword::IfUSaySo => &["IF", "U", "SAY", "SO"],
            Keyword::Visible => &["VISIBLE"],
            Keyword::ONvm => &["O", "NVM"],
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, word) in self.words().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
        }
        Ok(())
    }
}

/// Ordered token sequence, always terminated by [`TokenKind::Eof`].
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Token kinds only, for tests and debug dumps.
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|t| t.kind.clone()).collect()
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.tokens).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
