//! Keyword phrase table.
//!
//! Phrases are indexed by their first word; each bucket is sorted longest
//! first, so the first phrase that matches is the longest one. Built once
//! per process.

use std::sync::OnceLock;

use lol_ir::Keyword;
use rustc_hash::FxHashMap;

type Phrase = (&'static [&'static str], Keyword);

pub(crate) struct PhraseTable {
    by_head: FxHashMap<&'static str, Vec<Phrase>>,
}

impl PhraseTable {
    fn new() -> Self {
        let mut by_head: FxHashMap<&'static str, Vec<Phrase>> = FxHashMap::default();
        for kw in Keyword::ALL {
            let words = kw.words();
            by_head.entry(words[0]).or_default().push((words, kw));
        }
        for bucket in by_head.values_mut() {
            bucket.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        }
        PhraseTable { by_head }
    }

    /// The process-wide table.
    pub(crate) fn global() -> &'static PhraseTable {
        static TABLE: OnceLock<PhraseTable> = OnceLock::new();
        TABLE.get_or_init(PhraseTable::new)
    }

    /// Longest keyword phrase starting at `words[0]`.
    ///
    /// `None` entries are non-word tokens; no phrase crosses them.
    pub(crate) fn longest_match(&self, words: &[Option<&str>]) -> Option<(Keyword, usize)> {
        let head = words.first().copied().flatten()?;
        self.by_head
            .get(head)?
            .iter()
            .find(|(phrase, _)| {
                phrase.len() <= words.len()
                    && phrase.iter().zip(words).all(|(p, w)| *w == Some(*p))
            })
            .map(|(phrase, kw)| (*kw, phrase.len()))
    }
}
