use super::Hill48;
use crate::base::{Error, GridSpec};
use crate::util::{contour_lines, Polyline};
use log::{debug, warn};
use russell_lab::Vector;

/// Holds the yield locus extracted at one out-of-plane shear level
#[derive(Clone, Debug)]
pub struct YieldLocusCurve {
    /// Shear level σ12/σy
    pub shear: f64,

    /// Pieces of the curve f(x1, x2, shear) = level; empty if the level is not reached
    pub polylines: Vec<Polyline>,
}

/// Holds the Hill48 yield function evaluated over a (x1, x2) grid at several shear levels
pub struct YieldSurfaceGrid {
    /// Coordinates along x1 = σ11/σy (n1)
    pub x1: Vector,

    /// Coordinates along x2 = σ22/σy (n2)
    pub x2: Vector,

    /// Shear levels σ12/σy
    pub shear_levels: Vec<f64>,

    /// Yield function values; `fields[k][j][i] = f(x1[i], x2[j], shear_levels[k])`
    pub fields: Vec<Vec<Vec<f64>>>,
}

impl YieldSurfaceGrid {
    /// Evaluates the yield function over the grid
    ///
    /// # Input
    ///
    /// * `hill` -- the yield function
    /// * `grid` -- the grid sampling; the resolution trades smoothness for computation cost
    /// * `shear_levels` -- the out-of-plane shear levels σ12/σy
    pub fn new(hill: &Hill48, grid: &GridSpec, shear_levels: &[f64]) -> Result<Self, Error> {
        if let Some(message) = grid.validate() {
            return Err(Error::Config(message));
        }
        let (n1, n2) = (grid.n1(), grid.n2());
        let mut x1 = Vector::new(n1);
        let mut x2 = Vector::new(n2);
        for i in 0..n1 {
            x1[i] = grid.x1_min + (i as f64) * grid.step;
        }
        for j in 0..n2 {
            x2[j] = grid.x2_min + (j as f64) * grid.step;
        }
        let fields = shear_levels
            .iter()
            .map(|shear| {
                (0..n2)
                    .map(|j| (0..n1).map(|i| hill.value(x1[i], x2[j], *shear)).collect())
                    .collect()
            })
            .collect();
        debug!("yield function evaluated on a {} x {} grid", n1, n2);
        Ok(YieldSurfaceGrid {
            x1,
            x2,
            shear_levels: shear_levels.to_vec(),
            fields,
        })
    }

    /// Extracts the iso-curves f = level for every shear level
    ///
    /// **Note:** A shear level whose curve does not cross the grid produces an empty set of polylines.
    pub fn loci(&self, level: f64) -> Result<Vec<YieldLocusCurve>, Error> {
        let mut curves = Vec::with_capacity(self.shear_levels.len());
        for (shear, field) in self.shear_levels.iter().zip(&self.fields) {
            let polylines = contour_lines(self.x1.as_data(), self.x2.as_data(), field, level)?;
            if polylines.is_empty() {
                warn!("the yield locus for σ12/σy = {} does not cross the grid", shear);
            } else {
                let n_point: usize = polylines.iter().map(|p| p.len()).sum();
                debug!(
                    "yield locus for σ12/σy = {}: {} polyline(s) with {} points",
                    shear,
                    polylines.len(),
                    n_point
                );
            }
            curves.push(YieldLocusCurve {
                shear: *shear,
                polylines,
            });
        }
        Ok(curves)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
