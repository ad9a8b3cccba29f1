//! Yieldlocus draws the Hill48 yield locus together with the stress history of a finite element simulation
//!
//! The stresses exported by the simulation are normalized by the current (Swift) flow stress and
//! plotted against the curves f(σ11/σy, σ22/σy, σ12/σy) = 1 of the Hill48 yield function at
//! several out-of-plane shear levels. Points that never yielded are drawn in grey; the others
//! are colored by the equivalent plastic strain.
//!
//! # Example
//!
//! ```no_run
//! use yieldlocus::prelude::*;
//!
//! fn main() -> Result<(), Error> {
//!     let mut config = Config::new();
//!     config.test_id = "UT_00".to_string();
//!     let path = YieldLocus::new(&config)?.run()?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod material;
pub mod post;
pub mod prelude;
pub mod util;
