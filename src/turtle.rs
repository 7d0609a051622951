//! Turtle state and the tagged actions that drive it.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Canonical starting position.
const START_POSITION: DVec2 = DVec2::ZERO;

/// Canonical starting heading (facing negative X).
const START_HEADING: DVec2 = DVec2::NEG_X;

/// The state of the drawing turtle.
///
/// Tracks position, heading, and the ordered trace of visited points. The
/// heading is stored as a unit vector rather than an accumulated angle;
/// every [`turn`](Self::turn) rotates the vector directly.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Turtle {
    /// Current world-space position of the cursor.
    pub position: DVec2,

    /// Current forward direction (unit vector).
    pub heading: DVec2,

    /// Every point visited since the last reset, starting at the origin.
    trace: Vec<DVec2>,
}

impl Default for Turtle {
    fn default() -> Self {
        Self {
            position: START_POSITION,
            heading: START_HEADING,
            trace: vec![START_POSITION],
        }
    }
}

impl Turtle {
    /// Creates a turtle in the canonical start state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves `steps` lengths along the current heading and traces the new
    /// position.
    pub fn draw(&mut self, steps: f64) {
        self.position += steps * self.heading;
        self.trace.push(self.position);
    }

    /// Rotates the heading clockwise by `degrees`.
    ///
    /// Any real angle is accepted, including negatives and values beyond a
    /// full revolution; the trigonometry normalizes, nothing else does.
    pub fn turn(&mut self, degrees: f64) {
        self.heading = DVec2::from_angle(degrees.to_radians()).rotate(self.heading);
    }

    /// Applies a single tagged action.
    pub fn apply(&mut self, op: TurtleOp) {
        match op {
            TurtleOp::Draw(steps) => self.draw(steps),
            TurtleOp::Turn(degrees) => self.turn(degrees),
            TurtleOp::NoOp => {}
        }
    }

    /// The points visited since the last reset, in visit order.
    pub fn trace(&self) -> &[DVec2] {
        &self.trace
    }

    /// X coordinates of the trace, in visit order.
    pub fn xs(&self) -> Vec<f64> {
        self.trace.iter().map(|point| point.x).collect()
    }

    /// Y coordinates of the trace, in visit order.
    pub fn ys(&self) -> Vec<f64> {
        self.trace.iter().map(|point| point.y).collect()
    }

    /// Restores the canonical start state, discarding all accumulated
    /// motion.
    pub fn reset(&mut self) {
        self.position = START_POSITION;
        self.heading = START_HEADING;
        self.trace.clear();
        self.trace.push(START_POSITION);
    }
}

/// Tagged actions a fractal definition can bind to a symbol.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum TurtleOp {
    /// Move forward the given number of step lengths, tracing the endpoint.
    Draw(f64),
    /// Rotate the heading clockwise by the given degrees.
    Turn(f64),
    /// Symbol participates in the grammar but moves nothing.
    NoOp,
}
