//! Per-generation output model handed to external renderers.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Fixed padding that keeps an all-equal coordinate set from collapsing to
/// a zero-width interval.
const LIMIT_EPSILON: f64 = 1e-7;

/// Padded `(low, high)` axis limits framing a coordinate set.
///
/// The padding on each side is the square root of the value range plus
/// [`LIMIT_EPSILON`]. Applied independently to the x and y coordinates of a
/// trace.
pub fn axis_limits(values: &[f64]) -> (f64, f64) {
    let (min, max) = values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        // Empty input: frame the origin.
        return (-LIMIT_EPSILON, LIMIT_EPSILON);
    }
    let distance = (max - min).abs().sqrt();
    (min - distance - LIMIT_EPSILON, max + distance + LIMIT_EPSILON)
}

/// The polyline and framing for one generation of a fractal run.
///
/// This structure is the crate's hand-off point: a renderer needs nothing
/// beyond the points and the two limit pairs to produce an image.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CurveFrame {
    /// 0-indexed iteration this frame belongs to.
    pub generation: u32,

    /// Points visited by the turtle, in draw order.
    pub points: Vec<DVec2>,

    /// Padded (low, high) limits of the x coordinates.
    pub x_limits: (f64, f64),

    /// Padded (low, high) limits of the y coordinates.
    pub y_limits: (f64, f64),
}

impl CurveFrame {
    /// Frames `points` as generation `generation`, computing both axis
    /// limit pairs.
    pub fn new(generation: u32, points: Vec<DVec2>) -> Self {
        let xs: Vec<f64> = points.iter().map(|point| point.x).collect();
        let ys: Vec<f64> = points.iter().map(|point| point.y).collect();
        Self {
            generation,
            x_limits: axis_limits(&xs),
            y_limits: axis_limits(&ys),
            points,
        }
    }
}
