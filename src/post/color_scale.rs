/// Holds the color scale of the plastic points (equivalent plastic strain)
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    /// Lower bound of the scale (always zero)
    pub min: f64,

    /// Upper bound of the scale: the largest |εp|, or 1.0 if all strains are zero
    pub max: f64,

    /// Number of discrete colors
    pub n_colors: usize,

    /// Tick values evenly spaced from min to max
    pub ticks: Vec<f64>,
}

impl ColorScale {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `strains` -- the equivalent plastic strains of all samples
    /// * `n_colors` -- the number of discrete colors
    /// * `n_ticks` -- the number of ticks (≥ 2)
    pub fn new(strains: &[f64], n_colors: usize, n_ticks: usize) -> Self {
        let largest = strains.iter().fold(0.0, |acc: f64, s| acc.max(s.abs()));
        let max = if largest > 0.0 { largest } else { 1.0 };
        let n_ticks = usize::max(n_ticks, 2);
        let ticks = (0..n_ticks)
            .map(|i| max * (i as f64) / ((n_ticks - 1) as f64))
            .collect();
        ColorScale {
            min: 0.0,
            max,
            n_colors,
            ticks,
        }
    }

    /// Returns the tick labels with two decimal places
    pub fn tick_labels(&self) -> Vec<String> {
        self.ticks.iter().map(|t| format!("{:.2}", t)).collect()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::ColorScale;
    use russell_lab::array_approx_eq;

    #[test]
    fn new_works() {
        let scale = ColorScale::new(&[0.0, 0.0, 0.01, 0.2, -0.4], 12, 5);
        assert_eq!(scale.min, 0.0);
        assert_eq!(scale.max, 0.4);
        assert_eq!(scale.n_colors, 12);
        array_approx_eq(&scale.ticks, &[0.0, 0.1, 0.2, 0.3, 0.4], 1e-15);
        assert_eq!(scale.tick_labels(), &["0.00", "0.10", "0.20", "0.30", "0.40"]);
    }

    #[test]
    fn new_handles_degenerate_range() {
        let scale = ColorScale::new(&[0.0, 0.0], 12, 3);
        assert_eq!(scale.max, 1.0);
        assert_eq!(scale.ticks, &[0.0, 0.5, 1.0]);
        let scale = ColorScale::new(&[], 12, 1);
        assert_eq!(scale.ticks, &[0.0, 1.0]);
    }
}
