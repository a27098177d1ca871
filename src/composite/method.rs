use crate::blend::mode::BlendMode;
use crate::composite::op::CompositeOp;
use crate::composite::porter_duff::{PorterDuff, PorterDuffArg};
use crate::foundation::core::{ColorBlendFn, Rgba, TRANSPARENT};

/// A compositing operator, still waiting for its color blend function.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeMethod {
    /// Always transparent black.
    Clear,
    /// The source (above) pixel, unchanged.
    Copy,
    /// The backdrop (below) pixel, unchanged.
    Destination,
    /// General Porter-Duff compositing with a blend step.
    PorterDuff(PorterDuff),
}

impl CompositeMethod {
    /// Porter-Duff method from two coefficient selectors.
    pub const fn porter_duff(fa: PorterDuffArg, fb: PorterDuffArg) -> Self {
        CompositeMethod::PorterDuff(PorterDuff::new(fa, fb))
    }

    /// Bind a color blend function, producing a per-pixel method.
    pub fn with_blend(self, blend: ColorBlendFn) -> BlendMethod {
        BlendMethod {
            composite: self,
            blend,
        }
    }

    /// Composite one pixel pair. `Clear`, `Copy` and `Destination` ignore `blend`.
    pub fn apply(self, blend: ColorBlendFn, below: Rgba, above: Rgba) -> Rgba {
        match self {
            CompositeMethod::Clear => TRANSPARENT,
            CompositeMethod::Copy => above,
            CompositeMethod::Destination => below,
            CompositeMethod::PorterDuff(pd) => pd.apply(blend, below, above),
        }
    }
}

impl From<PorterDuff> for CompositeMethod {
    fn from(pd: PorterDuff) -> Self {
        CompositeMethod::PorterDuff(pd)
    }
}

/// A composite method bound to a color blend function: `(below, above) -> out`.
///
/// Stateless and `Copy`; one value can drive any number of merges, from any thread.
#[derive(Debug, Clone, Copy)]
pub struct BlendMethod {
    /// Compositing operator.
    pub composite: CompositeMethod,
    /// Color mixing applied where both layers are present.
    pub blend: ColorBlendFn,
}

impl BlendMethod {
    /// Look up a named operator and blend mode.
    pub fn new(op: CompositeOp, mode: BlendMode) -> Self {
        op.method().with_blend(mode.color_fn())
    }

    /// Composite `above` onto `below`.
    pub fn apply(&self, below: Rgba, above: Rgba) -> Rgba {
        self.composite.apply(self.blend, below, above)
    }
}

impl Default for BlendMethod {
    /// `source-over` with `normal` blending.
    fn default() -> Self {
        Self::new(CompositeOp::SourceOver, BlendMode::Normal)
    }
}

/// Anything that can combine a backdrop pixel with a source pixel.
///
/// Implemented by [`BlendMethod`] and by plain closures
/// `Fn(Rgba, Rgba) -> Rgba`, so custom per-pixel functions can be merged too.
pub trait PixelBlend {
    /// Combine `below` (backdrop) and `above` (source) into the output pixel.
    fn blend_pixel(&self, below: Rgba, above: Rgba) -> Rgba;
}

impl PixelBlend for BlendMethod {
    fn blend_pixel(&self, below: Rgba, above: Rgba) -> Rgba {
        self.apply(below, above)
    }
}

impl<F> PixelBlend for F
where
    F: Fn(Rgba, Rgba) -> Rgba,
{
    fn blend_pixel(&self, below: Rgba, above: Rgba) -> Rgba {
        self(below, above)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/method.rs"]
mod tests;
