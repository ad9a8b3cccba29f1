use serde::{Deserialize, Serialize};

/// Holds the (zero-based) column indices of the quantities in the all-steps CSV file
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Column of the σxx stress component
    pub stress_xx: usize,

    /// Column of the σyy stress component
    pub stress_yy: usize,

    /// Column of the σxy stress component
    pub stress_xy: usize,

    /// Column of the equivalent plastic strain (PEEQ)
    pub eq_plastic_strain: usize,

    /// Column of the minimum principal stress
    pub min_principal: usize,

    /// Column of the maximum principal stress
    pub max_principal: usize,
}

impl ColumnSchema {
    /// Allocates a new instance with the layout of the exported simulation results
    ///
    /// ```text
    /// col:  3    4    5    6     7       8
    ///      σxx  σyy  σxy  PEEQ  σ_min  σ_max
    /// ```
    pub fn new() -> Self {
        ColumnSchema {
            stress_xx: 3,
            stress_yy: 4,
            stress_xy: 5,
            eq_plastic_strain: 6,
            min_principal: 7,
            max_principal: 8,
        }
    }

    /// Returns all (name, column) pairs
    pub fn columns(&self) -> [(&'static str, usize); 6] {
        [
            ("stress_xx", self.stress_xx),
            ("stress_yy", self.stress_yy),
            ("stress_xy", self.stress_xy),
            ("eq_plastic_strain", self.eq_plastic_strain),
            ("min_principal", self.min_principal),
            ("max_principal", self.max_principal),
        ]
    }

    /// Returns the minimum number of columns that a data row must have
    pub fn required_width(&self) -> usize {
        self.columns().iter().map(|(_, c)| *c).max().unwrap_or(0) + 1
    }

    /// Validates all data
    ///
    /// Returns a message with the inconsistent data, or returns None if everything is all right.
    pub fn validate(&self) -> Option<String> {
        let columns = self.columns();
        for i in 0..columns.len() {
            for j in (i + 1)..columns.len() {
                if columns[i].1 == columns[j].1 {
                    return Some(format!(
                        "{} and {} cannot share the same column {}",
                        columns[i].0, columns[j].0, columns[i].1
                    ));
                }
            }
        }
        None
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
