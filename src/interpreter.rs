//! Dispatches generated symbol sequences against a turtle and drives the
//! per-generation animation pipeline.
//!
//! The entry points are [`parse`] for a single sequence,
//! [`generate_frames`] for a full validated run, and [`render_animation`]
//! to wire the run into injected [`FrameRenderer`] / [`CurveAssembler`]
//! collaborators. The core never touches the filesystem or spawns a
//! process; those concerns live behind the two traits.

use crate::fractal::{CurveError, FractalDefinition};
use crate::frame::CurveFrame;
use crate::grammar::Generator;
use crate::turtle::Turtle;

/// Settings for assembling rendered generations into one animation.
#[derive(Clone, Debug)]
pub struct AnimationConfig {
    /// Delay between frames, in milliseconds.
    pub frame_delay_ms: u32,

    /// Whether the finished animation loops forever.
    pub loop_forever: bool,

    /// How many times the final generation's image appears in the
    /// assembled sequence.
    pub final_frame_hold: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            frame_delay_ms: 100,
            loop_forever: true,
            final_frame_hold: 5,
        }
    }
}

/// Renders a single [`CurveFrame`] to an opaque image handle.
///
/// The handle can be anything the paired assembler understands: a file
/// path, an encoded buffer, a texture id.
pub trait FrameRenderer {
    /// Handle to one rendered image.
    type Image;

    fn render(&mut self, frame: &CurveFrame) -> Result<Self::Image, CurveError>;
}

/// Assembles an ordered list of images into one animated artifact.
pub trait CurveAssembler {
    /// Image handle accepted from the renderer.
    type Image;

    /// Reference to the finished artifact.
    type Output;

    fn assemble(
        &mut self,
        images: Vec<Self::Image>,
        config: &AnimationConfig,
        name: &str,
    ) -> Result<Self::Output, CurveError>;
}

/// Walks `sequence` left to right, applying each symbol's bound action to
/// `turtle`.
///
/// Each action completes before the next symbol is examined. The first
/// symbol without a binding aborts the parse with
/// [`CurveError::UnboundSymbol`]; actions already applied are not rolled
/// back.
pub fn parse(
    sequence: &str,
    definition: &FractalDefinition,
    turtle: &mut Turtle,
) -> Result<(), CurveError> {
    for (position, symbol) in sequence.chars().enumerate() {
        let op = definition
            .action_for(symbol)
            .ok_or(CurveError::UnboundSymbol { symbol, position })?;
        turtle.apply(op);
    }
    Ok(())
}

/// Runs `definition` for its full iteration count, capturing one
/// [`CurveFrame`] per generation.
///
/// The definition is validated up front, so an unbindable alphabet fails
/// before any expansion work. Each generation's frame is independent: the
/// turtle is reset after every capture.
pub fn generate_frames(definition: &FractalDefinition) -> Result<Vec<CurveFrame>, CurveError> {
    definition.validate()?;

    let mut generator = Generator::new(definition.start.clone(), definition.rules.clone());
    let mut turtle = Turtle::new();
    let mut frames = Vec::with_capacity(definition.iterations as usize);

    for generation in 0..definition.iterations {
        generator.update();
        parse(generator.current(), definition, &mut turtle)?;
        tracing::debug!(
            "{}: generation {} traced {} symbols into {} points",
            definition.name,
            generation,
            generator.current().len(),
            turtle.trace().len()
        );
        frames.push(CurveFrame::new(generation, turtle.trace().to_vec()));
        turtle.reset();
    }

    Ok(frames)
}

/// Full pipeline: generate every frame, render each, and hand the ordered
/// images to the assembler.
///
/// The final generation's image is repeated `config.final_frame_hold`
/// times in the assembled sequence.
pub fn render_animation<R, A>(
    definition: &FractalDefinition,
    renderer: &mut R,
    assembler: &mut A,
    config: &AnimationConfig,
) -> Result<A::Output, CurveError>
where
    R: FrameRenderer,
    R::Image: Clone,
    A: CurveAssembler<Image = R::Image>,
{
    let frames = generate_frames(definition)?;
    let hold = config.final_frame_hold.max(1) as usize;
    let mut images = Vec::with_capacity(frames.len() + hold - 1);

    let last = frames.len().saturating_sub(1);
    for (index, frame) in frames.iter().enumerate() {
        let image = renderer.render(frame)?;
        if index == last {
            for _ in 1..hold {
                images.push(image.clone());
            }
        }
        images.push(image);
    }

    assembler.assemble(images, config, &definition.name)
}
