use super::SampleSeries;
use crate::base::Error;

/// Divides each raw value by the flow stress of the same sample
///
/// # Errors
///
/// * [Error::LengthMismatch] if the series have different lengths
/// * [Error::DivisionByZero] if a flow stress is zero; no infinity is ever produced
pub fn normalize(raw: &[f64], flow_stress: &[f64]) -> Result<Vec<f64>, Error> {
    if raw.len() != flow_stress.len() {
        return Err(Error::LengthMismatch {
            what: "flow stress",
            expected: raw.len(),
            actual: flow_stress.len(),
        });
    }
    raw.iter()
        .zip(flow_stress)
        .enumerate()
        .map(|(index, (value, sig_y))| {
            if *sig_y == 0.0 {
                Err(Error::DivisionByZero { index })
            } else {
                Ok(value / sig_y)
            }
        })
        .collect()
}

/// Holds the stress components normalized by the flow stress
#[derive(Clone, Debug)]
pub struct NormalizedStress {
    /// σxx/σy
    pub xx: Vec<f64>,

    /// σyy/σy
    pub yy: Vec<f64>,

    /// σxy/σy
    pub xy: Vec<f64>,
}

impl NormalizedStress {
    /// Normalizes the in-plane stress components of all samples
    pub fn new(series: &SampleSeries, flow_stress: &[f64]) -> Result<Self, Error> {
        series.check_lengths()?;
        Ok(NormalizedStress {
            xx: normalize(&series.stress_xx, flow_stress)?,
            yy: normalize(&series.stress_yy, flow_stress)?,
            xy: normalize(&series.stress_xy, flow_stress)?,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
