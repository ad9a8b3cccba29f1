//! Implements the post-processing of the simulation results: loading, normalization, classification, and plotting

mod classifier;
mod color_scale;
mod normalizer;
mod plotter;
mod series_loader;
#[cfg(test)]
pub(crate) mod testing;
mod yield_locus;
pub use crate::post::classifier::*;
pub use crate::post::color_scale::*;
pub use crate::post::normalizer::*;
pub use crate::post::plotter::*;
pub use crate::post::series_loader::*;
pub use crate::post::yield_locus::*;
