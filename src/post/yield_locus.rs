use super::{shear_levels_annotation, ClassifiedPoints, ColorScale, NormalizedStress, Plotter};
use super::{SampleSeries, SeriesLoader};
use crate::base::{Config, Error, FilePath, YIELD_LEVEL};
use crate::material::{Hill48, SwiftHardening, YieldLocusCurve, YieldSurfaceGrid};
use log::{debug, info, warn};
use std::path::PathBuf;

/// Holds the results of the analysis of one test
#[derive(Clone, Debug)]
pub struct YieldLocusAnalysis {
    /// Samples used in the analysis
    pub series: SampleSeries,

    /// Swift flow stress σy of each sample
    pub flow_stress: Vec<f64>,

    /// Stress components divided by the flow stress
    pub normalized: NormalizedStress,

    /// Elastic and plastic points; their indices refer to `series`
    pub points: ClassifiedPoints,

    /// Yield locus curves, one per shear level
    pub curves: Vec<YieldLocusCurve>,

    /// Color scale of the plastic points
    pub color_scale: ColorScale,

    /// Hill48 yield function of each normalized sample (including its own shear)
    pub yield_values: Vec<f64>,

    /// Number of samples dropped because their flow stress is zero
    pub n_excluded: usize,
}

/// Computes and renders the yield locus of one test
///
/// The stages run in sequence: loading, hardening, normalization, classification, yield surface
/// evaluation, and rendering. The figure is only published after all stages succeed.
pub struct YieldLocus {
    /// Configuration of the run
    config: Config,

    /// Reads the series
    loader: SeriesLoader,

    /// Computes the flow stress
    hardening: SwiftHardening,

    /// Computes the yield function
    hill: Hill48,
}

impl YieldLocus {
    /// Allocates a new instance
    ///
    /// Returns [Error::Config] if the configuration is inconsistent.
    pub fn new(config: &Config) -> Result<Self, Error> {
        if let Some(message) = config.validate() {
            return Err(Error::Config(message));
        }
        Ok(YieldLocus {
            config: config.clone(),
            loader: SeriesLoader::new(config.schema, config.delimiter)?,
            hardening: SwiftHardening::from_param(&config.material),
            hill: Hill48::from_param(&config.material),
        })
    }

    /// Returns the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the path of the figure
    pub fn figure_path(&self) -> PathBuf {
        FilePath::figure(&self.config.output_dir, &self.config.test_id, &self.config.render.extension)
    }

    /// Loads the series of the test and analyzes them
    pub fn analyze(&self) -> Result<YieldLocusAnalysis, Error> {
        let series = self.loader.load(&self.config.results_dir, &self.config.test_id)?;
        self.analyze_series(series)
    }

    /// Analyzes the given series
    pub fn analyze_series(&self, mut series: SampleSeries) -> Result<YieldLocusAnalysis, Error> {
        series.check_lengths()?;
        let mut flow_stress = self.hardening.flow_stress_series(&series.eq_plastic_strain)?;

        let mut n_excluded = 0;
        if self.config.exclude_zero_flow_stress {
            let keep: Vec<bool> = flow_stress.iter().map(|sig_y| *sig_y != 0.0).collect();
            n_excluded = keep.iter().filter(|k| !**k).count();
            if n_excluded > 0 {
                warn!("{} sample(s) with zero flow stress excluded from the analysis", n_excluded);
                series = series.select(&keep)?;
                flow_stress = flow_stress.into_iter().filter(|sig_y| *sig_y != 0.0).collect();
            }
        }

        let normalized = NormalizedStress::new(&series, &flow_stress)?;
        let points = ClassifiedPoints::new(&series.eq_plastic_strain, &normalized.xx, &normalized.yy)?;
        info!(
            "{} elastic and {} plastic points",
            points.elastic.len(),
            points.plastic.len()
        );

        let yield_values: Vec<f64> = (0..normalized.xx.len())
            .map(|i| self.hill.value(normalized.xx[i], normalized.yy[i], normalized.xy[i]))
            .collect();
        if let Some(largest) = yield_values.iter().copied().reduce(f64::max) {
            debug!("largest yield function value of the samples = {}", largest);
        }

        let surface = YieldSurfaceGrid::new(&self.hill, &self.config.grid, &self.config.shear_levels)?;
        let curves = surface.loci(YIELD_LEVEL)?;

        let render = &self.config.render;
        let color_scale = ColorScale::new(&points.plastic.strain, render.n_colors, render.n_ticks);

        Ok(YieldLocusAnalysis {
            series,
            flow_stress,
            normalized,
            points,
            curves,
            color_scale,
            yield_values,
            n_excluded,
        })
    }

    /// Renders the figure and returns its path
    pub fn render(&self, analysis: &YieldLocusAnalysis) -> Result<PathBuf, Error> {
        let render = &self.config.render;
        let annotation = match &render.annotation {
            Some(text) => text.clone(),
            None => shear_levels_annotation(&self.config.shear_levels),
        };
        let plotter = Plotter::new(render);
        let mut plot = plotter.draw(&analysis.points, &analysis.curves, &analysis.color_scale, &annotation);
        let path = self.figure_path();
        plotter.save(&mut plot, &path, self.config.show_plot)?;
        info!("figure saved to {}", path.display());
        Ok(path)
    }

    /// Runs all stages and returns the path of the figure
    pub fn run(&self) -> Result<PathBuf, Error> {
        let analysis = self.analyze()?;
        self.render(&analysis)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::YieldLocus;
    use crate::base::{Config, Error, ParamMaterial, DEFAULT_TEST_DIR};
    use crate::post::testing::{write_sample_files, SampleRow};
    use crate::post::SampleSeries;
    use russell_lab::{approx_eq, array_approx_eq};

    fn scenario_series() -> SampleSeries {
        let mut series = SampleSeries::new();
        series.eq_plastic_strain = vec![0.0, 0.0, 0.01, 0.05];
        series.stress_xx = vec![100.0, 150.0, 300.0, 320.0];
        series.stress_yy = vec![0.0, 50.0, 100.0, 120.0];
        series.stress_xy = vec![0.0, 0.0, 0.0, 0.0];
        series.min_principal = vec![0.0, 50.0, 100.0, 120.0];
        series.max_principal = vec![100.0, 150.0, 300.0, 320.0];
        series
    }

    fn config(test_id: &str) -> Config {
        let mut config = Config::new();
        config.test_id = test_id.to_string();
        config.results_dir = format!("{}/pipeline", DEFAULT_TEST_DIR);
        config.output_dir = format!("{}/pipeline/figures", DEFAULT_TEST_DIR);
        config
    }

    #[test]
    fn new_captures_errors() {
        let mut config = config("");
        assert!(matches!(YieldLocus::new(&config), Err(Error::Config(..))));
        config.test_id = "UT_00".to_string();
        config.material.kk = f64::NAN;
        assert!(matches!(YieldLocus::new(&config), Err(Error::Config(..))));
    }

    #[test]
    fn figure_path_works() {
        let pipeline = YieldLocus::new(&config("UT_00")).unwrap();
        assert_eq!(
            pipeline.figure_path().to_string_lossy(),
            "/tmp/yieldlocus/test/pipeline/figures/UT_00_YieldSurface_MaterialDir.png"
        );
        assert_eq!(pipeline.config().test_id, "UT_00");
    }

    #[test]
    fn analyze_series_works() {
        let pipeline = YieldLocus::new(&config("scenario")).unwrap();
        let analysis = pipeline.analyze_series(scenario_series()).unwrap();

        // flow stress
        let sig_y_0 = 500.0 * f64::powf(0.005, 0.2);
        approx_eq(analysis.flow_stress[0], sig_y_0, 1e-12);
        approx_eq(analysis.flow_stress[0], 173.28621078878658, 1e-12);
        approx_eq(analysis.flow_stress[2], 215.8679941883277, 1e-12);
        approx_eq(analysis.flow_stress[3], 279.9255513201079, 1e-12);

        // normalized stress
        approx_eq(analysis.normalized.xx[0], 100.0 / sig_y_0, 1e-15);
        approx_eq(analysis.normalized.xx[0], 0.5770799623628855, 1e-14);
        approx_eq(analysis.normalized.xx[1], 0.8656199435443283, 1e-14);
        approx_eq(analysis.normalized.xx[2], 1.3897382107431535, 1e-14);
        approx_eq(analysis.normalized.xx[3], 1.1431610958374612, 1e-14);
        assert_eq!(analysis.normalized.yy[0], 0.0);

        // classification
        assert_eq!(analysis.points.elastic.indices, &[0, 1]);
        assert_eq!(analysis.points.plastic.indices, &[2, 3]);
        assert_eq!(analysis.points.plastic.strain, &[0.01, 0.05]);
        assert_eq!(analysis.n_excluded, 0);

        // color scale
        assert_eq!(analysis.color_scale.max, 0.05);
        assert_eq!(analysis.color_scale.n_colors, 12);
        assert_eq!(analysis.color_scale.ticks.len(), 5);

        // curves
        assert_eq!(analysis.curves.len(), 4);
        assert!(!analysis.curves[0].polylines.is_empty());
        assert!(analysis.curves[3].polylines.is_empty()); // 2 N s² = 1.08 > 1

        // yield function at the samples: H (x1 - x2)² + G x1² + F x2² with F = G = H = 0.5
        let (x1, x2) = (analysis.normalized.xx[1], analysis.normalized.yy[1]);
        let expected = 0.5 * (x1 - x2) * (x1 - x2) + 0.5 * x1 * x1 + 0.5 * x2 * x2;
        approx_eq(analysis.yield_values[1], expected, 1e-14);
    }

    #[test]
    fn analyze_series_handles_zero_flow_stress() {
        let mut config = config("zero_flow_stress");
        config.material = ParamMaterial::from_vector(&[0.5, 0.5, 1.5, 500.0, 0.0, 0.2]);
        let pipeline = YieldLocus::new(&config).unwrap();
        assert!(matches!(
            pipeline.analyze_series(scenario_series()),
            Err(Error::DivisionByZero { index: 0 })
        ));

        config.exclude_zero_flow_stress = true;
        let pipeline = YieldLocus::new(&config).unwrap();
        let analysis = pipeline.analyze_series(scenario_series()).unwrap();
        assert_eq!(analysis.n_excluded, 2);
        assert_eq!(analysis.series.len(), 2);
        assert_eq!(analysis.flow_stress.len(), 2);
        assert!(analysis.points.elastic.is_empty());
        assert_eq!(analysis.points.plastic.indices, &[0, 1]);
        array_approx_eq(&analysis.series.stress_xx, &[300.0, 320.0], 1e-15);

        // indices refer to the filtered series
        for (k, i) in analysis.points.plastic.indices.iter().enumerate() {
            assert_eq!(analysis.series.eq_plastic_strain[*i], analysis.points.plastic.strain[k]);
            assert_eq!(analysis.normalized.xx[*i], analysis.points.plastic.xx[k]);
        }
    }

    #[test]
    fn analyze_reads_files() {
        let config = config("analyze_reads_files");
        let rows = vec![
            SampleRow::new(0.0, 100.0, 0.0, 0.0, 0.0, 100.0),
            SampleRow::new(0.0, 150.0, 50.0, 0.0, 50.0, 150.0),
            SampleRow::new(0.01, 300.0, 100.0, 0.0, 100.0, 300.0),
            SampleRow::new(0.05, 320.0, 120.0, 0.0, 120.0, 320.0),
        ];
        write_sample_files(&config.results_dir, &config.test_id, 4, &rows);
        let pipeline = YieldLocus::new(&config).unwrap();
        let analysis = pipeline.analyze().unwrap();
        assert_eq!(analysis.series.len(), 4);
        approx_eq(analysis.normalized.xx[0], 0.5770799623628855, 1e-14);
        assert_eq!(analysis.points.elastic.indices, &[0, 1]);
        assert_eq!(analysis.points.plastic.indices, &[2, 3]);
    }

    #[test]
    fn run_writes_no_figure_on_failure() {
        let mut config = config("run_fails");
        config.results_dir = "/tmp/yieldlocus/__not_found__".to_string();
        let pipeline = YieldLocus::new(&config).unwrap();
        assert!(matches!(pipeline.run(), Err(Error::DataFormat { .. })));
        assert!(!pipeline.figure_path().exists());
    }
}
