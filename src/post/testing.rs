use crate::base::FilePath;
use std::fs;

/// Holds the quantities of one row of the all-steps file
#[allow(dead_code)]
pub(crate) struct SampleRow {
    strain: f64,
    xx: f64,
    yy: f64,
    xy: f64,
    min: f64,
    max: f64,
}

#[allow(dead_code)]
impl SampleRow {
    pub(crate) fn new(strain: f64, xx: f64, yy: f64, xy: f64, min: f64, max: f64) -> Self {
        SampleRow {
            strain,
            xx,
            yy,
            xy,
            min,
            max,
        }
    }

    /// Returns the row with the layout: label, x, y, σxx, σyy, σxy, PEEQ, σ_min, σ_max
    fn to_line(&self, label: usize) -> String {
        format!(
            "{},{},{},{},{},{},{},{},{}\n",
            label,
            0.1 * label as f64,
            0.2 * label as f64,
            self.xx,
            self.yy,
            self.xy,
            self.strain,
            self.min,
            self.max
        )
    }
}

/// Writes the summary and all-steps files of a synthetic test
///
/// The summary file holds `n_first_step` rows (plus headers and a last row); hence the all-steps
/// file receives `n_first_step + 1` rows before the samples, and a trailing row after them.
#[allow(dead_code)]
pub(crate) fn write_sample_files(dir: &str, test_id: &str, n_first_step: usize, samples: &[SampleRow]) {
    fs::create_dir_all(dir).unwrap();
    let header = "Node Label,X,Y,S-S11,S-S22,S-S12,PEEQ,S-Min. Principal,S-Max. Principal\n";

    let mut summary = String::from("Step-1 summary\n");
    summary.push_str(header);
    for i in 0..n_first_step {
        summary.push_str(&format!("{},0.0,0.0\n", i + 1));
    }
    summary.push_str("end\n");
    fs::write(FilePath::summary(dir, test_id), summary).unwrap();

    let mut all = String::from("All steps\n");
    all.push_str(header);
    let skipped = SampleRow::new(0.0, -1.0, -1.0, -1.0, -1.0, -1.0);
    for i in 0..(n_first_step + 1) {
        all.push_str(&skipped.to_line(i + 1));
    }
    for (i, sample) in samples.iter().enumerate() {
        all.push_str(&sample.to_line(n_first_step + 2 + i));
    }
    all.push_str(&skipped.to_line(0));
    fs::write(FilePath::all_steps(dir, test_id), all).unwrap();
}
