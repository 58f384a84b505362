use std::collections::HashMap;

/// Anything the aligner can compare. Display is not required here; the
/// report renderer asks for it separately.
pub trait Token: PartialEq + Clone + Send + Sync {}

impl<T: PartialEq + Clone + Send + Sync> Token for T {}

/// Ordered sequence of comparable tokens (words, characters or integer ids).
pub type TokenSequence<T> = Vec<T>;

/// One scored unit: a reference and a hypothesis sharing an utterance id.
#[derive(Debug, PartialEq, Eq)]
pub struct Utterance<'a, T> {
    pub id: &'a str,
    pub reference: &'a [T],
    pub hypothesis: &'a [T],
}

impl<T> Clone for Utterance<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Utterance<'_, T> {}

/// Utterance id -> token sequence, iterated in insertion order.
///
/// Re-inserting an existing id replaces its tokens but keeps its original
/// position.
#[derive(Debug, Clone)]
pub struct Corpus<T> {
    entries: Vec<(String, TokenSequence<T>)>,
    index: HashMap<String, usize>,
}

impl<T> Corpus<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn insert(&mut self, id: impl Into<String>, tokens: TokenSequence<T>) {
        let id = id.into();
        if let Some(&pos) = self.index.get(&id) {
            self.entries[pos].1 = tokens;
            return;
        }
        self.index.insert(id.clone(), self.entries.len());
        self.entries.push((id, tokens));
    }

    pub fn get(&self, id: &str) -> Option<&[T]> {
        self.index
            .get(id)
            .map(|&pos| self.entries[pos].1.as_slice())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[T])> {
        self.entries
            .iter()
            .map(|(id, tokens)| (id.as_str(), tokens.as_slice()))
    }
}

impl<T> Default for Corpus<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, S: Into<String>> FromIterator<(S, TokenSequence<T>)> for Corpus<T> {
    fn from_iter<I: IntoIterator<Item = (S, TokenSequence<T>)>>(iter: I) -> Self {
        let mut corpus = Self::new();
        for (id, tokens) in iter {
            corpus.insert(id, tokens);
        }
        corpus
    }
}
