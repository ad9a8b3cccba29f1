/// Defines the directory where the simulation result files are read from
pub const DEFAULT_RESULTS_DIR: &str = "Results/FEA_results";

/// Defines the directory where the yield locus figures are saved
pub const DEFAULT_OUT_DIR: &str = "Results/YieldLocus";

/// Defines an auxiliary directory where the test files are saved
pub const DEFAULT_TEST_DIR: &str = "/tmp/yieldlocus/test";

/// Defines the out-of-plane shear levels (σ12/σy) of the yield locus curves
pub const DEFAULT_SHEAR_LEVELS: [f64; 4] = [0.0, 0.2, 0.4, 0.6];

/// Defines the level of the yield function that represents the yield locus
pub const YIELD_LEVEL: f64 = 1.0;

/// Defines the number of header rows in the exported CSV files
pub const N_HEADER_ROWS: usize = 2;

/// Defines the suffix of the CSV file with the results of all load steps
pub const ALL_STEPS_SUFFIX: &str = "_AllSteps";

/// Defines the suffix of the yield locus figure
pub const FIGURE_SUFFIX: &str = "_YieldSurface_MaterialDir";

/// Defines the largest number of points along each axis of the yield function grid
pub const GRID_MAX_POINTS_PER_AXIS: usize = 10_000;
