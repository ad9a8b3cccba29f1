use super::{ColumnSchema, Error, GridSpec, ParamMaterial, RenderConfig};
use super::{DEFAULT_OUT_DIR, DEFAULT_RESULTS_DIR, DEFAULT_SHEAR_LEVELS};
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration of a yield locus run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Test identifier, e.g., "UT_00"; it defines the input and output filenames
    pub test_id: String,

    /// Directory with the exported simulation results
    pub results_dir: String,

    /// Directory where the figure is saved
    pub output_dir: String,

    /// Material parameters
    pub material: ParamMaterial,

    /// Out-of-plane shear levels σ12/σy of the yield locus curves
    pub shear_levels: Vec<f64>,

    /// Sampling of the stress grid used to evaluate the yield function
    pub grid: GridSpec,

    /// Column layout of the all-steps file
    pub schema: ColumnSchema,

    /// Field delimiter of the CSV files
    pub delimiter: char,

    /// Drops samples with zero flow stress instead of failing the run
    pub exclude_zero_flow_stress: bool,

    /// Shows the figure in a window after saving it
    pub show_plot: bool,

    /// Styling of the figure
    pub render: RenderConfig,
}

impl Config {
    /// Allocates a new instance with default values
    ///
    /// **Note:** The test identifier is empty and must be set before running.
    pub fn new() -> Self {
        Config {
            test_id: String::new(),
            results_dir: DEFAULT_RESULTS_DIR.to_string(),
            output_dir: DEFAULT_OUT_DIR.to_string(),
            material: ParamMaterial::from_vector(&[0.5, 0.5, 1.5, 500.0, 0.005, 0.2]),
            shear_levels: DEFAULT_SHEAR_LEVELS.to_vec(),
            grid: GridSpec::new(),
            schema: ColumnSchema::new(),
            delimiter: ',',
            exclude_zero_flow_stress: false,
            show_plot: false,
            render: RenderConfig::new(),
        }
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        if self.test_id.is_empty() {
            return Some("test_id must not be empty".to_string());
        }
        if !self.delimiter.is_ascii() {
            return Some(format!("delimiter = {:?} is incorrect; it must be an ASCII character", self.delimiter));
        }
        if self.shear_levels.is_empty() {
            return Some("shear_levels must have at least one value".to_string());
        }
        for shear in &self.shear_levels {
            if !shear.is_finite() {
                return Some(format!("shear level = {:?} is incorrect; it must be finite", shear));
            }
        }
        if let Some(message) = self.material.validate() {
            return Some(message);
        }
        if let Some(message) = self.grid.validate() {
            return Some(message);
        }
        if let Some(message) = self.schema.validate() {
            return Some(message);
        }
        self.render.validate()
    }

    /// Reads a JSON file containing the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn read_json<P>(full_path: &P) -> Result<Self, Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let display = path.to_string_lossy().to_string();
        let file = File::open(&path).map_err(|e| Error::io(&display, e))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader)
            .map_err(|e| Error::Config(format!("cannot parse {}: {}", display, e)))?;
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    ///
    /// # Input
    ///
    /// * `full_path` -- may be a String, &str, or Path
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), Error>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let display = path.to_string_lossy().to_string();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|e| Error::io(&display, e))?;
        }
        let mut file = File::create(&path).map_err(|e| Error::io(&display, e))?;
        serde_json::to_writer_pretty(&mut file, &self)
            .map_err(|e| Error::Config(format!("cannot write {}: {}", display, e)))?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "test_id = {:?}\n", self.test_id)?;
        write!(f, "results_dir = {:?}\n", self.results_dir)?;
        write!(f, "output_dir = {:?}\n", self.output_dir)?;
        write!(f, "material = {:?}\n", self.material.to_vector())?;
        write!(f, "shear_levels = {:?}\n", self.shear_levels)?;
        write!(
            f,
            "grid = [{:?}, {:?}) x [{:?}, {:?}) with step {:?}\n",
            self.grid.x1_min, self.grid.x1_max, self.grid.x2_min, self.grid.x2_max, self.grid.step
        )?;
        write!(f, "exclude_zero_flow_stress = {:?}\n", self.exclude_zero_flow_stress)?;
        write!(f, "show_plot = {:?}\n", self.show_plot)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::base::{Error, DEFAULT_TEST_DIR};

    #[test]
    fn new_works() {
        let config = Config::new();
        assert_eq!(config.test_id, "");
        assert_eq!(config.results_dir, "Results/FEA_results");
        assert_eq!(config.output_dir, "Results/YieldLocus");
        assert_eq!(config.material.to_vector(), [0.5, 0.5, 1.5, 500.0, 0.005, 0.2]);
        assert_eq!(config.shear_levels, &[0.0, 0.2, 0.4, 0.6]);
        assert_eq!(config.delimiter, ',');
        assert_eq!(config.exclude_zero_flow_stress, false);
        assert_eq!(config.show_plot, false);
    }

    #[test]
    fn validate_works() {
        let mut config = Config::new();
        assert_eq!(config.validate(), Some("test_id must not be empty".to_string()));
        config.test_id = "UT_00".to_string();
        assert_eq!(config.validate(), None);

        config.shear_levels = Vec::new();
        assert_eq!(
            config.validate(),
            Some("shear_levels must have at least one value".to_string())
        );
        config.shear_levels = vec![0.0, f64::INFINITY];
        assert_eq!(
            config.validate(),
            Some("shear level = inf is incorrect; it must be finite".to_string())
        );
        config.shear_levels = vec![0.0];

        config.delimiter = 'σ';
        assert_eq!(
            config.validate(),
            Some("delimiter = 'σ' is incorrect; it must be an ASCII character".to_string())
        );
        config.delimiter = ';';

        config.grid.step = -0.1;
        assert_eq!(
            config.validate(),
            Some("step = -0.1 is incorrect; it must be > 0.0".to_string())
        );
        config.grid.step = 0.1;

        config.schema.stress_yy = 3;
        assert_eq!(
            config.validate(),
            Some("stress_xx and stress_yy cannot share the same column 3".to_string())
        );
    }

    #[test]
    fn read_and_write_json_work() {
        let mut config = Config::new();
        config.test_id = "UT_00".to_string();
        config.show_plot = true;
        let path = format!("{}/config_read_and_write.json", DEFAULT_TEST_DIR);
        config.write_json(&path).unwrap();
        let read = Config::read_json(&path).unwrap();
        assert_eq!(read, config);
    }

    #[test]
    fn read_json_captures_errors() {
        let res = Config::read_json("/tmp/yieldlocus/__not_found__.json");
        assert!(matches!(res, Err(Error::Io { .. })));
    }

    #[test]
    fn display_works() {
        let mut config = Config::new();
        config.test_id = "UT_00".to_string();
        let text = format!("{}", config);
        assert!(text.contains("test_id = \"UT_00\""));
        assert!(text.contains("material = [0.5, 0.5, 1.5, 500.0, 0.005, 0.2]"));
        assert!(text.contains("grid = [-10.0, 10.0) x [-10.0, 10.0) with step 0.1"));
    }
}
