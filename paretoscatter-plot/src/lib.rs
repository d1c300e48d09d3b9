//! Scatter plots of multi-objective fronts
//!
//! This crate turns a [`PointMatrix`](paretoscatter_core::PointMatrix) into a
//! 2-D or 3-D scatter plot:
//! - a retained figure/axes model
//! - the [`PlotEngine`] seam the renderer builds through
//! - a `plotters`-backed engine writing SVG

pub mod camera;
pub mod engine;
pub mod figure;
pub mod renderer;
pub mod scatter;

pub use camera::*;
pub use engine::*;
pub use figure::*;
pub use renderer::*;
pub use scatter::*;
