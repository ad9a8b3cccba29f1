use crate::base::{Error, ParamMaterial};

/// Implements the Swift isotropic hardening law
///
/// ```text
/// σy = K (ε0 + εp)ⁿ
/// ```
///
/// where εp is the equivalent plastic strain.
#[derive(Clone, Copy, Debug)]
pub struct SwiftHardening {
    /// Strength coefficient K
    kk: f64,

    /// Pre-strain ε0
    eps0: f64,

    /// Hardening exponent n
    n: f64,
}

impl SwiftHardening {
    /// Allocates a new instance
    pub fn new(kk: f64, eps0: f64, n: f64) -> Self {
        SwiftHardening { kk, eps0, n }
    }

    /// Allocates a new instance from the material parameters
    pub fn from_param(param: &ParamMaterial) -> Self {
        SwiftHardening::new(param.kk, param.eps0, param.n_swift)
    }

    /// Calculates the flow stress σy for a single equivalent plastic strain
    ///
    /// # Input
    ///
    /// * `index` -- the sample index, reported in case of error
    /// * `strain` -- the equivalent plastic strain εp
    ///
    /// # Errors
    ///
    /// Returns [Error::Domain] if `ε0 + εp` is NaN, or negative with a non-integer exponent.
    pub fn flow_stress(&self, index: usize, strain: f64) -> Result<f64, Error> {
        let base = self.eps0 + strain;
        if base.is_nan() || (base < 0.0 && self.n.fract() != 0.0) {
            return Err(Error::Domain {
                index,
                base,
                exponent: self.n,
            });
        }
        Ok(self.kk * f64::powf(base, self.n))
    }

    /// Calculates the flow stress for each equivalent plastic strain in the series
    pub fn flow_stress_series(&self, strains: &[f64]) -> Result<Vec<f64>, Error> {
        strains
            .iter()
            .enumerate()
            .map(|(i, strain)| self.flow_stress(i, *strain))
            .collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
