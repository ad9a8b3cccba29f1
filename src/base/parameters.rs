use super::GRID_MAX_POINTS_PER_AXIS;
use serde::{Deserialize, Serialize};

/// Holds the parameters of the Hill48 yield criterion and the Swift hardening law
///
/// The parameters are usually given as the ordered vector:
///
/// ```text
/// [F, H, N, K, eps0, n_swift]
/// ```
///
/// and the remaining Hill48 coefficient is derived from `G = 1 - H`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParamMaterial {
    /// Hill48 anisotropy coefficient F
    pub ff: f64,

    /// Hill48 anisotropy coefficient H
    pub hh: f64,

    /// Hill48 shear coefficient N
    pub nn: f64,

    /// Swift hardening strength coefficient K
    pub kk: f64,

    /// Swift hardening pre-strain ε0
    pub eps0: f64,

    /// Swift hardening exponent n
    pub n_swift: f64,
}

impl ParamMaterial {
    /// Allocates a new instance from the ordered vector `[F, H, N, K, eps0, n_swift]`
    pub fn from_vector(values: &[f64; 6]) -> Self {
        ParamMaterial {
            ff: values[0],
            hh: values[1],
            nn: values[2],
            kk: values[3],
            eps0: values[4],
            n_swift: values[5],
        }
    }

    /// Allocates a new instance from a slice that must have exactly 6 entries
    pub fn from_slice(values: &[f64]) -> Option<Self> {
        let array: &[f64; 6] = values.try_into().ok()?;
        Some(ParamMaterial::from_vector(array))
    }

    /// Returns the ordered vector `[F, H, N, K, eps0, n_swift]`
    pub fn to_vector(&self) -> [f64; 6] {
        [self.ff, self.hh, self.nn, self.kk, self.eps0, self.n_swift]
    }

    /// Returns the derived Hill48 coefficient G = 1 - H
    pub fn gg(&self) -> f64 {
        1.0 - self.hh
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let names = ["F", "H", "N", "K", "eps0", "n_swift"];
        for (name, value) in names.iter().zip(self.to_vector()) {
            if !value.is_finite() {
                return Some(format!("{} = {:?} is incorrect; it must be finite", name, value));
            }
        }
        None
    }
}

/// Holds the sampling of the (x1, x2) stress grid used to evaluate the yield function
///
/// The coordinates follow the half-open convention `[min, max)`, e.g., the defaults
/// produce 200 points per axis: -10.0, -9.9, ..., 9.9.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Minimum x1 coordinate
    pub x1_min: f64,

    /// Maximum (excluded) x1 coordinate
    pub x1_max: f64,

    /// Minimum x2 coordinate
    pub x2_min: f64,

    /// Maximum (excluded) x2 coordinate
    pub x2_max: f64,

    /// Spacing between grid points along both axes
    pub step: f64,
}

impl GridSpec {
    /// Allocates a new instance with the default [-10, 10) x [-10, 10) domain and 0.1 spacing
    pub fn new() -> Self {
        GridSpec {
            x1_min: -10.0,
            x1_max: 10.0,
            x2_min: -10.0,
            x2_max: 10.0,
            step: 0.1,
        }
    }

    /// Allocates a new square grid
    pub fn square(min: f64, max: f64, step: f64) -> Self {
        GridSpec {
            x1_min: min,
            x1_max: max,
            x2_min: min,
            x2_max: max,
            step,
        }
    }

    /// Returns the number of points along x1
    pub fn n1(&self) -> usize {
        count_points(self.x1_min, self.x1_max, self.step)
    }

    /// Returns the number of points along x2
    pub fn n2(&self) -> usize {
        count_points(self.x2_min, self.x2_max, self.step)
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if !(self.step > 0.0) || !self.step.is_finite() {
            return Some(format!("step = {:?} is incorrect; it must be > 0.0", self.step));
        }
        if !(self.x1_max > self.x1_min) {
            return Some(format!(
                "x1_max = {:?} is incorrect; it must be > x1_min = {:?}",
                self.x1_max, self.x1_min
            ));
        }
        if !(self.x2_max > self.x2_min) {
            return Some(format!(
                "x2_max = {:?} is incorrect; it must be > x2_min = {:?}",
                self.x2_max, self.x2_min
            ));
        }
        if self.n1() < 2 || self.n2() < 2 {
            return Some(format!(
                "step = {:?} is incorrect; the grid must have at least 2 points along each axis",
                self.step
            ));
        }
        if self.n1() > GRID_MAX_POINTS_PER_AXIS || self.n2() > GRID_MAX_POINTS_PER_AXIS {
            return Some(format!(
                "step = {:?} is incorrect; the grid must have at most {} points along each axis",
                self.step, GRID_MAX_POINTS_PER_AXIS
            ));
        }
        None
    }
}

/// Returns the number of points of `[min, max)` with the given spacing
fn count_points(min: f64, max: f64, step: f64) -> usize {
    if !(step > 0.0) || !(max > min) {
        return 0;
    }
    f64::ceil((max - min) / step - 1e-10) as usize
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{GridSpec, ParamMaterial};

    #[test]
    fn param_material_works() {
        let param = ParamMaterial::from_vector(&[0.5, 0.4, 1.5, 500.0, 0.005, 0.2]);
        assert_eq!(param.ff, 0.5);
        assert_eq!(param.hh, 0.4);
        assert_eq!(param.nn, 1.5);
        assert_eq!(param.kk, 500.0);
        assert_eq!(param.eps0, 0.005);
        assert_eq!(param.n_swift, 0.2);
        assert_eq!(param.gg(), 0.6);
        assert_eq!(param.to_vector(), [0.5, 0.4, 1.5, 500.0, 0.005, 0.2]);
        assert_eq!(param.validate(), None);
        assert_eq!(ParamMaterial::from_slice(&[1.0, 2.0]), None);
        assert_eq!(ParamMaterial::from_slice(&param.to_vector()), Some(param));
    }

    #[test]
    fn param_material_validate_captures_errors() {
        let mut param = ParamMaterial::from_vector(&[0.5, 0.5, 1.5, 500.0, 0.005, 0.2]);
        param.kk = f64::NAN;
        assert_eq!(
            param.validate(),
            Some("K = NaN is incorrect; it must be finite".to_string())
        );
    }

    #[test]
    fn grid_spec_works() {
        let grid = GridSpec::new();
        assert_eq!(grid.n1(), 200);
        assert_eq!(grid.n2(), 200);
        assert_eq!(grid.validate(), None);
        let grid = GridSpec::square(-2.0, 2.0, 0.5);
        assert_eq!(grid.n1(), 8);
        let grid = GridSpec::square(0.0, 1.0, 0.3);
        assert_eq!(grid.n1(), 4); // 0.0, 0.3, 0.6, 0.9
    }

    #[test]
    fn grid_spec_validate_captures_errors() {
        let mut grid = GridSpec::new();
        grid.step = 0.0;
        assert_eq!(
            grid.validate(),
            Some("step = 0.0 is incorrect; it must be > 0.0".to_string())
        );
        grid.step = 0.1;
        grid.x1_max = -10.0;
        assert_eq!(
            grid.validate(),
            Some("x1_max = -10.0 is incorrect; it must be > x1_min = -10.0".to_string())
        );
        grid.x1_max = 10.0;
        grid.x2_min = 20.0;
        assert_eq!(
            grid.validate(),
            Some("x2_max = 10.0 is incorrect; it must be > x2_min = 20.0".to_string())
        );
        let grid = GridSpec::square(0.0, 1.0, 1.0);
        assert_eq!(
            grid.validate(),
            Some("step = 1.0 is incorrect; the grid must have at least 2 points along each axis".to_string())
        );
        let grid = GridSpec::square(-10.0, 10.0, 0.001);
        assert_eq!(
            grid.validate(),
            Some("step = 0.001 is incorrect; the grid must have at most 10000 points along each axis".to_string())
        );
        let mut grid = GridSpec::new();
        grid.x2_max = f64::INFINITY;
        assert_eq!(
            grid.validate(),
            Some("step = 0.1 is incorrect; the grid must have at most 10000 points along each axis".to_string())
        );
        assert_eq!(GridSpec::square(0.0, 500.0, 0.1).validate(), None);
    }
}
