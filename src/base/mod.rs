//! Implements the base structures: configuration, parameters, errors, and file paths

mod config;
mod constants;
mod error;
mod filepath;
mod parameters;
mod render_config;
mod schema;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::error::*;
pub use crate::base::filepath::*;
pub use crate::base::parameters::*;
pub use crate::base::render_config::*;
pub use crate::base::schema::*;
