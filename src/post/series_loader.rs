use crate::base::{ColumnSchema, Error, FilePath, N_HEADER_ROWS};
use csv::StringRecord;
use log::info;
use std::path::Path;

/// Holds the index-aligned time series of one simulation
///
/// All series have the same length; entry `i` of every series belongs to sample `i`.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSeries {
    /// Equivalent plastic strain (PEEQ)
    pub eq_plastic_strain: Vec<f64>,

    /// σxx stress component
    pub stress_xx: Vec<f64>,

    /// σyy stress component
    pub stress_yy: Vec<f64>,

    /// σxy stress component
    pub stress_xy: Vec<f64>,

    /// Minimum principal stress
    pub min_principal: Vec<f64>,

    /// Maximum principal stress
    pub max_principal: Vec<f64>,
}

impl SampleSeries {
    /// Allocates a new instance with empty series
    pub fn new() -> Self {
        SampleSeries {
            eq_plastic_strain: Vec::new(),
            stress_xx: Vec::new(),
            stress_yy: Vec::new(),
            stress_xy: Vec::new(),
            min_principal: Vec::new(),
            max_principal: Vec::new(),
        }
    }

    /// Returns the number of samples
    pub fn len(&self) -> usize {
        self.eq_plastic_strain.len()
    }

    /// Indicates that there are no samples
    pub fn is_empty(&self) -> bool {
        self.eq_plastic_strain.is_empty()
    }

    /// Checks that all series have the same length
    pub fn check_lengths(&self) -> Result<(), Error> {
        let expected = self.len();
        let others = [
            ("stress_xx", &self.stress_xx),
            ("stress_yy", &self.stress_yy),
            ("stress_xy", &self.stress_xy),
            ("min_principal", &self.min_principal),
            ("max_principal", &self.max_principal),
        ];
        for (what, series) in others {
            if series.len() != expected {
                return Err(Error::LengthMismatch {
                    what,
                    expected,
                    actual: series.len(),
                });
            }
        }
        Ok(())
    }

    /// Returns a copy with the samples flagged by `keep`
    pub fn select(&self, keep: &[bool]) -> Result<Self, Error> {
        self.check_lengths()?;
        if keep.len() != self.len() {
            return Err(Error::LengthMismatch {
                what: "selection flags",
                expected: self.len(),
                actual: keep.len(),
            });
        }
        let pick = |series: &Vec<f64>| -> Vec<f64> {
            series.iter().zip(keep).filter(|(_, k)| **k).map(|(v, _)| *v).collect()
        };
        Ok(SampleSeries {
            eq_plastic_strain: pick(&self.eq_plastic_strain),
            stress_xx: pick(&self.stress_xx),
            stress_yy: pick(&self.stress_yy),
            stress_xy: pick(&self.stress_xy),
            min_principal: pick(&self.min_principal),
            max_principal: pick(&self.max_principal),
        })
    }
}

/// Reads the stress and strain series exported by the simulation
///
/// Two files are read from the results directory:
///
/// * `<test_id>.csv` -- results of the first load step; only the number of rows is used
/// * `<test_id>_AllSteps.csv` -- results of all load steps
///
/// Both files start with two header rows. The rows of the all-steps file belonging to the
/// first load step and the last row are discarded.
pub struct SeriesLoader {
    /// Column layout of the all-steps file
    schema: ColumnSchema,

    /// Field delimiter
    delimiter: u8,
}

impl SeriesLoader {
    /// Allocates a new instance
    pub fn new(schema: ColumnSchema, delimiter: char) -> Result<Self, Error> {
        if let Some(message) = schema.validate() {
            return Err(Error::Config(message));
        }
        if !delimiter.is_ascii() {
            return Err(Error::Config(format!(
                "delimiter = {:?} is incorrect; it must be an ASCII character",
                delimiter
            )));
        }
        Ok(SeriesLoader {
            schema,
            delimiter: delimiter as u8,
        })
    }

    /// Reads the series of a test
    ///
    /// # Input
    ///
    /// * `results_dir` -- the directory with the exported simulation results
    /// * `test_id` -- the test identifier
    pub fn load(&self, results_dir: &str, test_id: &str) -> Result<SampleSeries, Error> {
        let n_points_load = self.points_per_load_step(&FilePath::summary(results_dir, test_id))?;
        let series = self.read_all_steps(&FilePath::all_steps(results_dir, test_id), n_points_load)?;
        info!(
            "loaded {} samples of test {} (skipped {} rows of the first load step)",
            series.len(),
            test_id,
            n_points_load
        );
        Ok(series)
    }

    /// Returns the number of rows of the all-steps file that belong to the first load step
    ///
    /// This is the number of rows of the summary file, without the header rows and the last row,
    /// plus one.
    pub fn points_per_load_step(&self, path: &Path) -> Result<usize, Error> {
        let rows = self.read_rows(path)?;
        let n_data = rows.len() - N_HEADER_ROWS - 1;
        Ok(n_data + 1)
    }

    /// Reads the series from the all-steps file
    ///
    /// # Input
    ///
    /// * `path` -- the path of the all-steps file
    /// * `n_points_load` -- the number of data rows to skip (see [SeriesLoader::points_per_load_step])
    pub fn read_all_steps(&self, path: &Path, n_points_load: usize) -> Result<SampleSeries, Error> {
        let display = path.to_string_lossy().to_string();
        let rows = self.read_rows(path)?;
        let data = &rows[N_HEADER_ROWS..];
        let end = data.len() - 1;
        if n_points_load >= end {
            return Err(Error::data_format(
                &display,
                format!(
                    "no samples remain after skipping {} of {} data rows and the last row",
                    n_points_load,
                    data.len()
                ),
            ));
        }
        let required = self.schema.required_width();
        let mut series = SampleSeries::new();
        for (k, record) in data[n_points_load..end].iter().enumerate() {
            // one-based line in the file; blank lines are skipped by the reader but still counted
            let row = match record.position() {
                Some(position) => position.line() as usize,
                None => N_HEADER_ROWS + n_points_load + k + 1,
            };
            if record.len() < required {
                return Err(Error::Schema {
                    path: display.clone(),
                    row,
                    width: record.len(),
                    required,
                });
            }
            let cell = |column: usize| parse_cell(&display, record, row, column);
            series.eq_plastic_strain.push(cell(self.schema.eq_plastic_strain)?);
            series.stress_xx.push(cell(self.schema.stress_xx)?);
            series.stress_yy.push(cell(self.schema.stress_yy)?);
            series.stress_xy.push(cell(self.schema.stress_xy)?);
            series.min_principal.push(cell(self.schema.min_principal)?);
            series.max_principal.push(cell(self.schema.max_principal)?);
        }
        Ok(series)
    }

    /// Reads all rows of a delimited file; at least three rows are required
    fn read_rows(&self, path: &Path) -> Result<Vec<StringRecord>, Error> {
        let display = path.to_string_lossy().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.delimiter)
            .from_path(path)
            .map_err(|e| Error::data_format(&display, format!("cannot open file: {}", e)))?;
        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| Error::data_format(&display, format!("cannot read row: {}", e)))?;
            rows.push(record);
        }
        if rows.len() < N_HEADER_ROWS + 1 {
            return Err(Error::data_format(
                &display,
                format!("found {} rows but at least {} are required", rows.len(), N_HEADER_ROWS + 1),
            ));
        }
        Ok(rows)
    }
}

/// Parses a cell as a floating-point number
fn parse_cell(path: &str, record: &StringRecord, row: usize, column: usize) -> Result<f64, Error> {
    let text = record.get(column).unwrap_or("").trim();
    text.parse::<f64>().map_err(|_| {
        Error::data_format(
            path,
            format!("cannot parse {:?} at row {}, column {} as a number", text, row, column),
        )
    })
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
