use super::*;
use std::collections::HashSet;

#[test]
fn keyword_display_joins_words() {
    assert_eq!(Keyword::IHasA.to_string(), "I HAS A");
    assert_eq!(Keyword::ORly.to_string(), "O RLY?");
    assert_eq!(Keyword::IfUSaySo.to_string(), "IF U SAY SO");
    assert_eq!(Keyword::Mkay.to_string(), "MKAY");
}

#[test]
fn keyword_phrases_are_unique() {
    let phrases: HashSet<_> = Keyword::ALL.iter().map(|kw| kw.words()).collect();
    assert_eq!(phrases.len(), Keyword::ALL.len());
}

#[test]
fn is_keyword_matches_only_that_keyword() {
    let kind = TokenKind::Keyword(Keyword::An);
    assert!(kind.is_keyword(Keyword::An));
    assert!(!kind.is_keyword(Keyword::AnYr));
    assert!(!TokenKind::Ident("AN".to_owned()).is_keyword(Keyword::An));
}

#[test]
fn describe_is_readable() {
    assert_eq!(TokenKind::Keyword(Keyword::Oic).describe(), "`OIC`");
    assert_eq!(TokenKind::Ident("x".to_owned()).describe(), "identifier `x`");
    assert_eq!(TokenKind::Numbar(2.5f64.to_bits()).describe(), "number `2.5`");
    assert_eq!(TokenKind::Eof.describe(), "end of input");
}

#[test]
fn token_list_kinds() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::new(TokenKind::Numbr(1), Span::new(0, 1)));
    list.push(Token::new(TokenKind::Eof, Span::point(1)));
    assert_eq!(list.len(), 2);
    assert_eq!(list.kinds(), vec![TokenKind::Numbr(1), TokenKind::Eof]);
}
