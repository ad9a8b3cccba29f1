use super::{ALL_STEPS_SUFFIX, FIGURE_SUFFIX};
use std::path::{Path, PathBuf};

/// Assists in generating the input and output file paths
pub struct FilePath {}

impl FilePath {
    /// Returns the filepath of the per-load-step summary file (.csv)
    ///
    /// # Input
    ///
    /// * `results_dir` -- the directory with the exported simulation results
    /// * `test_id` -- the test identifier; ".csv" will be added
    pub fn summary(results_dir: &str, test_id: &str) -> PathBuf {
        let mut filename = String::from(test_id);
        filename.push_str(".csv");
        Path::new(results_dir).join(filename)
    }

    /// Returns the filepath of the file with the results of all load steps (.csv)
    ///
    /// # Input
    ///
    /// * `results_dir` -- the directory with the exported simulation results
    /// * `test_id` -- the test identifier; "_AllSteps.csv" will be added
    pub fn all_steps(results_dir: &str, test_id: &str) -> PathBuf {
        let mut filename = String::from(test_id);
        filename.push_str(ALL_STEPS_SUFFIX);
        filename.push_str(".csv");
        Path::new(results_dir).join(filename)
    }

    /// Returns the filepath of the yield locus figure
    ///
    /// # Input
    ///
    /// * `output_dir` -- the directory to save the figure
    /// * `test_id` -- the test identifier; "_YieldSurface_MaterialDir" will be added
    /// * `extension` -- the image format, e.g., "png"
    pub fn figure(output_dir: &str, test_id: &str, extension: &str) -> PathBuf {
        let mut filename = String::from(test_id);
        filename.push_str(FIGURE_SUFFIX);
        filename.push('.');
        filename.push_str(extension);
        Path::new(output_dir).join(filename)
    }

    /// Returns the sibling path used to write the figure before publishing it
    ///
    /// For example, `dir/test.png` becomes `dir/test.partial.png`
    pub fn partial(path: &Path) -> PathBuf {
        let stem = path.file_stem().map(|s| s.to_string_lossy().to_string()).unwrap_or_default();
        let mut filename = stem;
        filename.push_str(".partial");
        if let Some(ext) = path.extension() {
            filename.push('.');
            filename.push_str(&ext.to_string_lossy());
        }
        path.with_file_name(filename)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
