use crate::base::ParamMaterial;

/// Implements the Hill48 yield function for plane-stress conditions
///
/// In stresses normalized by the flow stress, the yield function reads:
///
/// ```text
/// f(x1, x2, s) = H (x1 - x2)² + G x1² + F x2² + 2 N s²
/// ```
///
/// where `x1 = σ11/σy`, `x2 = σ22/σy`, and `s = σ12/σy`. The yield locus is `f = 1`.
///
/// # Reference
///
/// * Hill R (1948) A theory of the yielding and plastic flow of anisotropic metals.
///   Proceedings of the Royal Society of London A, 193(1033), 281-297
#[derive(Clone, Copy, Debug)]
pub struct Hill48 {
    ff: f64, // F coefficient
    gg: f64, // G coefficient
    hh: f64, // H coefficient
    nn: f64, // N coefficient
}

impl Hill48 {
    /// Allocates a new instance
    pub fn new(ff: f64, gg: f64, hh: f64, nn: f64) -> Self {
        Hill48 { ff, gg, hh, nn }
    }

    /// Allocates a new instance from the material parameters (G = 1 - H)
    pub fn from_param(param: &ParamMaterial) -> Self {
        Hill48::new(param.ff, param.gg(), param.hh, param.nn)
    }

    /// Evaluates the yield function
    #[inline]
    pub fn value(&self, x1: f64, x2: f64, shear: f64) -> f64 {
        self.hh * (x1 - x2) * (x1 - x2) + self.gg * x1 * x1 + self.ff * x2 * x2 + 2.0 * self.nn * shear * shear
    }

    /// Indicates whether the curve f(x1, x2, s) = level exists for the given shear
    ///
    /// With non-negative F, G, H the in-plane part is a non-negative quadratic form, hence
    /// a closed curve is only possible if `2 N s² < level`.
    pub fn has_locus(&self, shear: f64, level: f64) -> bool {
        2.0 * self.nn * shear * shear < level
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
