//! Makes available common structures needed to draw a yield locus
//!
//! You may write `use yieldlocus::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ColumnSchema, Config, Error, GridSpec, ParamMaterial, RenderConfig};
pub use crate::base::{DEFAULT_OUT_DIR, DEFAULT_RESULTS_DIR, DEFAULT_SHEAR_LEVELS, DEFAULT_TEST_DIR};
pub use crate::material::{Hill48, SwiftHardening, YieldLocusCurve, YieldSurfaceGrid};
pub use crate::post::{ClassifiedPoints, SampleSeries, SeriesLoader, YieldLocus, YieldLocusAnalysis};
