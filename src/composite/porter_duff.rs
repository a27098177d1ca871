//! Porter-Duff compositing with a blend step, after
//! <https://www.w3.org/TR/compositing-1/#advancedcompositing>.

use crate::foundation::core::{ColorBlendFn, Rgba, TRANSPARENT};
use crate::util::{rgb, weight, weight_sum};

/// One Porter-Duff coefficient: a constant, or a reference to one of the two alphas.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PorterDuffArg {
    /// Fixed coefficient.
    Constant(f32),
    /// Alpha of the source (above) pixel.
    AboveAlpha,
    /// Alpha of the backdrop (below) pixel.
    BelowAlpha,
    /// `1 - ` alpha of the source (above) pixel.
    AboveComplement,
    /// `1 - ` alpha of the backdrop (below) pixel.
    BelowComplement,
}

impl PorterDuffArg {
    /// Resolve the coefficient against a concrete pixel pair.
    pub fn resolve(self, below: Rgba, above: Rgba) -> f32 {
        match self {
            PorterDuffArg::Constant(v) => v,
            PorterDuffArg::AboveAlpha => above[3],
            PorterDuffArg::BelowAlpha => below[3],
            PorterDuffArg::AboveComplement => 1.0 - above[3],
            PorterDuffArg::BelowComplement => 1.0 - below[3],
        }
    }
}

impl From<f32> for PorterDuffArg {
    fn from(v: f32) -> Self {
        PorterDuffArg::Constant(v)
    }
}

/// A Porter-Duff operator given by its two coefficients `Fa` (source) and `Fb` (backdrop).
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PorterDuff {
    /// Source coefficient.
    pub fa: PorterDuffArg,
    /// Backdrop coefficient.
    pub fb: PorterDuffArg,
}

impl PorterDuff {
    /// `source-over`: `Fa = 1`, `Fb = 1 - αs`.
    pub const SOURCE_OVER: Self = Self::new(
        PorterDuffArg::Constant(1.0),
        PorterDuffArg::AboveComplement,
    );
    /// `destination-over`: `Fa = 1 - αb`, `Fb = 1`.
    pub const DESTINATION_OVER: Self = Self::new(
        PorterDuffArg::BelowComplement,
        PorterDuffArg::Constant(1.0),
    );
    /// `source-in`: `Fa = αb`, `Fb = 0`.
    pub const SOURCE_IN: Self = Self::new(PorterDuffArg::BelowAlpha, PorterDuffArg::Constant(0.0));
    /// `destination-in`: `Fa = 0`, `Fb = αs`.
    pub const DESTINATION_IN: Self = Self::new(
        PorterDuffArg::Constant(0.0),
        PorterDuffArg::AboveAlpha,
    );
    /// `source-out`: `Fa = 1 - αb`, `Fb = 0`.
    pub const SOURCE_OUT: Self = Self::new(
        PorterDuffArg::BelowComplement,
        PorterDuffArg::Constant(0.0),
    );
    /// `destination-out`: `Fa = 0`, `Fb = 1 - αs`.
    pub const DESTINATION_OUT: Self = Self::new(
        PorterDuffArg::Constant(0.0),
        PorterDuffArg::AboveComplement,
    );
    /// `source-atop`: `Fa = αb`, `Fb = 1 - αs`.
    pub const SOURCE_ATOP: Self = Self::new(
        PorterDuffArg::BelowAlpha,
        PorterDuffArg::AboveComplement,
    );
    /// `destination-atop`: `Fa = 1 - αb`, `Fb = αs`.
    pub const DESTINATION_ATOP: Self = Self::new(
        PorterDuffArg::BelowComplement,
        PorterDuffArg::AboveAlpha,
    );
    /// `xor`: `Fa = 1 - αb`, `Fb = 1 - αs`.
    pub const XOR: Self = Self::new(PorterDuffArg::BelowComplement, PorterDuffArg::AboveComplement);
    /// `lighter`: `Fa = 1`, `Fb = 1`.
    pub const LIGHTER: Self = Self::new(PorterDuffArg::Constant(1.0), PorterDuffArg::Constant(1.0));

    /// Build an operator from its two coefficient selectors.
    pub const fn new(fa: PorterDuffArg, fb: PorterDuffArg) -> Self {
        Self { fa, fb }
    }

    /// Composite `above` onto `below`, mixing colors with `blend` first.
    pub fn apply(self, blend: ColorBlendFn, below: Rgba, above: Rgba) -> Rgba {
        let fa = self.fa.resolve(below, above);
        let fb = self.fb.resolve(below, above);
        raw_porter_duff(fa, fb, blend, below, above)
    }
}

/// General Porter-Duff equation with resolved coefficients.
///
/// ```text
/// αo = αs·Fa + αb·Fb
/// Cm = (1 - αb)·Cs + αb·B(Cb, Cs)
/// co = αs·Fa·Cm + αb·Fb·Cb
/// ```
///
/// Returns straight color `co / αo`, or transparent black when `αo == 0`.
pub fn raw_porter_duff(fa: f32, fb: f32, blend: ColorBlendFn, below: Rgba, above: Rgba) -> Rgba {
    let aa = above[3];
    let ab = below[3];
    let ca = rgb(above);
    let cb = rgb(below);

    let ao = aa * fa + ab * fb;
    if ao == 0.0 {
        return TRANSPARENT;
    }
    let cm = weight_sum(1.0 - ab, ca, ab, blend(cb, ca));
    let co = weight_sum(aa * fa, cm, ab * fb, cb);
    let [r, g, b] = weight(1.0 / ao, co);
    [r, g, b, ao]
}

#[cfg(test)]
#[path = "../../tests/unit/composite/porter_duff.rs"]
mod tests;
