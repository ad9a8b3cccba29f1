//! Implements the material models: Hill48 yield function and Swift hardening

mod hill48;
mod swift_hardening;
mod yield_surface;
pub use crate::material::hill48::*;
pub use crate::material::swift_hardening::*;
pub use crate::material::yield_surface::*;
