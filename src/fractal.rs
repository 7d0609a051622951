//! Declarative fractal definitions and their validation.
//!
//! A [`FractalDefinition`] binds together everything one fractal type needs:
//! the grammar's start sequence and production rules, the action each symbol
//! performs, an iteration count, and a name for the rendered artifact. The
//! three built-ins ([`ccurve`](FractalDefinition::ccurve),
//! [`sierpinski`](FractalDefinition::sierpinski),
//! [`dragon_curve`](FractalDefinition::dragon_curve)) carry the exact
//! literal angles each curve was tuned with; they are not normalized to a
//! shared left/right convention.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grammar::Generator;
use crate::turtle::TurtleOp;

/// Errors produced while validating or dispatching a fractal run.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum CurveError {
    /// A generated symbol reached the dispatcher without an action binding.
    #[error("symbol '{symbol}' at position {position} has no bound action")]
    UnboundSymbol { symbol: char, position: usize },

    /// A symbol reachable from the start sequence has no action binding.
    /// Caught by [`FractalDefinition::validate`] before a run begins.
    #[error("symbol '{0}' is reachable through the rules but has no bound action")]
    UnboundInAlphabet(char),

    /// An injected renderer failed to produce an image.
    #[error("render failed: {0}")]
    Render(String),

    /// An injected assembler failed to produce the animated artifact.
    #[error("assembly failed: {0}")]
    Assembly(String),
}

/// A declarative binding of grammar, actions, and iteration count for one
/// fractal type. Immutable; one value per curve.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FractalDefinition {
    /// Initial symbol sequence (generation zero).
    pub start: String,

    /// Production rules; symbols absent from the map are terminal.
    pub rules: HashMap<char, String>,

    /// Action bound to each symbol the grammar can produce.
    pub actions: HashMap<char, TurtleOp>,

    /// Number of generations a full run produces.
    pub iterations: u32,

    /// Identifier used to name rendered artifacts.
    pub name: String,
}

impl FractalDefinition {
    /// Creates a definition from its parts.
    ///
    /// No validation happens here; call [`validate`](Self::validate) (or
    /// let the run loop do it) to check the bindings against the full
    /// expansion alphabet.
    pub fn new(
        start: impl Into<String>,
        rules: HashMap<char, String>,
        actions: HashMap<char, TurtleOp>,
        iterations: u32,
        name: impl Into<String>,
    ) -> Self {
        Self {
            start: start.into(),
            rules,
            actions,
            iterations,
            name: name.into(),
        }
    }

    /// Looks up the action bound to `symbol`.
    pub fn action_for(&self, symbol: char) -> Option<TurtleOp> {
        self.actions.get(&symbol).copied()
    }

    /// Checks that every symbol reachable from `start` under full rule
    /// expansion carries an action binding.
    ///
    /// Surfaces a missing binding before any generation work, instead of
    /// mid-parse deep into a long run. The smallest unbound symbol is
    /// reported so the error is stable across runs.
    pub fn validate(&self) -> Result<(), CurveError> {
        let generator = Generator::new(self.start.clone(), self.rules.clone());
        let mut alphabet: Vec<char> = generator.expanded_alphabet().into_iter().collect();
        alphabet.sort_unstable();

        for symbol in alphabet {
            if !self.actions.contains_key(&symbol) {
                return Err(CurveError::UnboundInAlphabet(symbol));
            }
        }
        Ok(())
    }

    /// The Lévy C curve.
    pub fn ccurve() -> Self {
        Self::new(
            "F",
            HashMap::from([('F', "+F--F+".to_string())]),
            HashMap::from([
                ('F', TurtleOp::Draw(1.0)),
                ('+', TurtleOp::Turn(45.0)),
                ('-', TurtleOp::Turn(315.0)),
            ]),
            12,
            "ccurve",
        )
    }

    /// The Sierpinski arrowhead curve.
    pub fn sierpinski() -> Self {
        Self::new(
            "A",
            HashMap::from([
                ('A', "B-A-B".to_string()),
                ('B', "A+B+A".to_string()),
            ]),
            HashMap::from([
                ('A', TurtleOp::Draw(1.0)),
                ('B', TurtleOp::Draw(1.0)),
                ('+', TurtleOp::Turn(60.0)),
                ('-', TurtleOp::Turn(300.0)),
            ]),
            9,
            "sierpinski",
        )
    }

    /// The Heighway dragon curve.
    pub fn dragon_curve() -> Self {
        Self::new(
            "FX",
            HashMap::from([
                ('X', "X+YF+".to_string()),
                ('Y', "-FX-Y".to_string()),
            ]),
            HashMap::from([
                ('F', TurtleOp::Draw(1.0)),
                ('-', TurtleOp::Turn(270.0)),
                ('+', TurtleOp::Turn(90.0)),
                ('X', TurtleOp::NoOp),
                ('Y', TurtleOp::NoOp),
            ]),
            15,
            "dragon_curve",
        )
    }

    /// All built-in definitions, in a stable order.
    pub fn builtins() -> Vec<Self> {
        vec![Self::ccurve(), Self::sierpinski(), Self::dragon_curve()]
    }
}
