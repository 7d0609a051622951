//! Simultaneous-rewriting grammar engine.
//!
//! A [`Generator`] holds the current symbol sequence of an L-System and the
//! production rules that grow it. Every [`update`](Generator::update)
//! rewrites the whole sequence at once: each symbol is replaced by its rule
//! expansion, computed entirely from the previous generation. Symbols
//! without a rule are terminal and carry over unchanged.

use std::collections::{HashMap, HashSet};

/// An L-System generator: a symbol sequence plus its production rules.
///
/// Deterministic for a fixed `(start, rules)` pair; there is no internal
/// randomness or hidden counter, so two generators built from the same
/// inputs produce identical sequences forever.
#[derive(Clone, Debug)]
pub struct Generator {
    rules: HashMap<char, String>,
    current: String,
    /// Largest single-symbol expansion, used to pre-size generation buffers.
    max_expansion: usize,
}

impl Generator {
    /// Creates a generator at generation zero.
    pub fn new(start: impl Into<String>, rules: HashMap<char, String>) -> Self {
        let max_expansion = rules
            .values()
            .map(|replacement| replacement.chars().count())
            .max()
            .unwrap_or(1)
            .max(1);
        Self {
            rules,
            current: start.into(),
            max_expansion,
        }
    }

    /// The current generation's symbol sequence.
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Rewrites the sequence once.
    ///
    /// Replacement is simultaneous: rule output is never re-expanded within
    /// the same call. The new generation is assembled in one linear pass
    /// into a pre-sized buffer.
    pub fn update(&mut self) {
        let mut next = String::with_capacity(self.current.len() * self.max_expansion);
        for symbol in self.current.chars() {
            match self.rules.get(&symbol) {
                Some(replacement) => next.push_str(replacement),
                None => next.push(symbol),
            }
        }
        self.current = next;
    }

    /// Applies [`update`](Self::update) `n` times in sequence.
    ///
    /// Generation `i + 1` is always derived from generation `i`; there is no
    /// closed-form shortcut.
    pub fn run(&mut self, n: u32) {
        for _ in 0..n {
            self.update();
        }
    }

    /// Every symbol reachable from the current sequence under full rule
    /// expansion.
    ///
    /// This is the alphabet a dispatcher can encounter in any future
    /// generation, so action bindings can be checked before a run starts.
    pub fn expanded_alphabet(&self) -> HashSet<char> {
        let mut alphabet: HashSet<char> = HashSet::new();
        let mut pending: Vec<char> = self.current.chars().collect();

        while let Some(symbol) = pending.pop() {
            if !alphabet.insert(symbol) {
                continue;
            }
            if let Some(replacement) = self.rules.get(&symbol) {
                pending.extend(replacement.chars());
            }
        }

        alphabet
    }
}
