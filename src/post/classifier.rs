use crate::base::Error;

/// Holds a group of normalized stress points
#[derive(Clone, Debug, PartialEq)]
pub struct PointGroup {
    /// Indices of the samples in the slices given to [ClassifiedPoints::new]
    ///
    /// When samples with zero flow stress are excluded, these index the filtered
    /// `YieldLocusAnalysis::series`, not the rows of the loaded files.
    pub indices: Vec<usize>,

    /// σxx/σy
    pub xx: Vec<f64>,

    /// σyy/σy
    pub yy: Vec<f64>,

    /// Equivalent plastic strain of each point
    pub strain: Vec<f64>,
}

impl PointGroup {
    fn new() -> Self {
        PointGroup {
            indices: Vec::new(),
            xx: Vec::new(),
            yy: Vec::new(),
            strain: Vec::new(),
        }
    }

    fn push(&mut self, index: usize, xx: f64, yy: f64, strain: f64) {
        self.indices.push(index);
        self.xx.push(xx);
        self.yy.push(yy);
        self.strain.push(strain);
    }

    /// Returns the number of points
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Indicates that the group has no points
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Splits the samples into elastic and plastic points
///
/// A sample is elastic if its equivalent plastic strain is **exactly** zero; no tolerance is
/// applied because the solver writes exact zeros for points that never yielded.
#[derive(Clone, Debug)]
pub struct ClassifiedPoints {
    /// Points with zero equivalent plastic strain (may be empty)
    pub elastic: PointGroup,

    /// Points with non-zero equivalent plastic strain (may be empty)
    pub plastic: PointGroup,
}

impl ClassifiedPoints {
    /// Classifies the samples
    ///
    /// # Input
    ///
    /// * `strain` -- the equivalent plastic strain
    /// * `xx` -- the normalized σxx/σy
    /// * `yy` -- the normalized σyy/σy
    pub fn new(strain: &[f64], xx: &[f64], yy: &[f64]) -> Result<Self, Error> {
        let n = strain.len();
        for (what, series) in [("normalized xx", xx), ("normalized yy", yy)] {
            if series.len() != n {
                return Err(Error::LengthMismatch {
                    what,
                    expected: n,
                    actual: series.len(),
                });
            }
        }
        let mut elastic = PointGroup::new();
        let mut plastic = PointGroup::new();
        for i in 0..n {
            if strain[i] == 0.0 {
                elastic.push(i, xx[i], yy[i], strain[i]);
            } else {
                plastic.push(i, xx[i], yy[i], strain[i]);
            }
        }
        Ok(ClassifiedPoints { elastic, plastic })
    }

    /// Returns the total number of points
    pub fn len(&self) -> usize {
        self.elastic.len() + self.plastic.len()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ClassifiedPoints;
    use crate::base::Error;

    #[test]
    fn new_captures_errors() {
        assert!(matches!(
            ClassifiedPoints::new(&[0.0, 0.1], &[1.0], &[1.0, 2.0]),
            Err(Error::LengthMismatch { what: "normalized xx", .. })
        ));
        assert!(matches!(
            ClassifiedPoints::new(&[0.0, 0.1], &[1.0, 2.0], &[]),
            Err(Error::LengthMismatch { what: "normalized yy", .. })
        ));
    }

    #[test]
    fn new_works() {
        let strain = [0.0, 0.0, 0.01, 0.05];
        let xx = [0.1, 0.2, 0.3, 0.4];
        let yy = [-0.1, -0.2, -0.3, -0.4];
        let points = ClassifiedPoints::new(&strain, &xx, &yy).unwrap();
        assert_eq!(points.len(), 4);
        assert_eq!(points.elastic.indices, &[0, 1]);
        assert_eq!(points.elastic.xx, &[0.1, 0.2]);
        assert_eq!(points.elastic.yy, &[-0.1, -0.2]);
        assert_eq!(points.plastic.indices, &[2, 3]);
        assert_eq!(points.plastic.xx, &[0.3, 0.4]);
        assert_eq!(points.plastic.yy, &[-0.3, -0.4]);
        assert_eq!(points.plastic.strain, &[0.01, 0.05]);
    }

    #[test]
    fn partition_is_complete_and_disjoint() {
        let strain = [0.3, 0.0, 1e-300, -0.0, 0.0, 2.0, -1e-12];
        let values = [0.0; 7];
        let points = ClassifiedPoints::new(&strain, &values, &values).unwrap();
        let mut all: Vec<_> = points.elastic.indices.iter().chain(&points.plastic.indices).copied().collect();
        all.sort();
        assert_eq!(all, (0..7).collect::<Vec<_>>());
        assert_eq!(points.elastic.indices, &[1, 3, 4]);
        assert_eq!(points.plastic.indices, &[0, 2, 5, 6]);
    }

    #[test]
    fn empty_groups_are_explicit() {
        let points = ClassifiedPoints::new(&[0.0, 0.0], &[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert_eq!(points.elastic.len(), 2);
        assert!(points.plastic.is_empty());

        let points = ClassifiedPoints::new(&[0.1, 0.2], &[1.0, 2.0], &[3.0, 4.0]).unwrap();
        assert!(points.elastic.is_empty());
        assert_eq!(points.plastic.len(), 2);

        let points = ClassifiedPoints::new(&[], &[], &[]).unwrap();
        assert!(points.elastic.is_empty());
        assert!(points.plastic.is_empty());
    }
}
