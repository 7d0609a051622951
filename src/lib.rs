//! # lsystem-curves
//!
//! A renderer-agnostic crate that grows self-similar fractal curves from
//! [L-System](https://en.wikipedia.org/wiki/L-system) grammars and interprets
//! them as 2D turtle-graphics polylines.
//!
//! It decouples the *grammar* (simultaneous symbol rewriting) from the
//! *geometry* (turtle-traced points), producing per-generation [`CurveFrame`]
//! structures that can be ingested by plotting backends, GIF assemblers, or
//! pen plotters.

pub mod fractal;
pub mod frame;
pub mod grammar;
pub mod interpreter;
pub mod turtle;

pub use fractal::*;
pub use frame::*;
pub use grammar::*;
pub use interpreter::*;
pub use turtle::*;
