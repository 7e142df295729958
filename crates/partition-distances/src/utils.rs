//! Utility functions for the crate.

use std::collections::HashMap;

use crate::Token;

/// Assigns dense integer ids to tokens, in order of first appearance.
///
/// Tokens need only be hashable, so sets of token pairs and clusters are
/// compared through their ids.
#[derive(Debug)]
pub struct Interner<'a, T> {
    /// Token to id.
    ids: HashMap<&'a T, usize>,
}

impl<'a, T: Token> Default for Interner<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T: Token> Interner<'a, T> {
    /// Creates an empty interner.
    pub fn new() -> Self {
        Self { ids: HashMap::new() }
    }

    /// The id of `token`, assigning the next one if it is new.
    pub fn id(&mut self, token: &'a T) -> usize {
        let next = self.ids.len();
        *self.ids.entry(token).or_insert(next)
    }

    /// The sorted, deduplicated ids of some tokens.
    pub fn ids<I: IntoIterator<Item = &'a T>>(&mut self, tokens: I) -> Vec<usize> {
        let mut ids = tokens.into_iter().map(|t| self.id(t)).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        ids
    }

    /// An unordered pair of tokens as an ordered pair of ids.
    pub fn pair(&mut self, a: &'a T, b: &'a T) -> (usize, usize) {
        let (a, b) = (self.id(a), self.id(b));
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// The number of unordered pairs among `n` items.
pub const fn comb_2(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}
