//! Core data structures for paretoscatter
//!
//! This crate provides the types shared by the plotting and I/O crates:
//! the point matrix, marker and label styles, the per-call scatter
//! configuration and the table of recommended camera angles.

pub mod camera;
pub mod config;
pub mod error;
pub mod matrix;
pub mod style;

pub use camera::*;
pub use config::*;
pub use error::*;
pub use matrix::*;
pub use style::*;

/// Re-export of the array type backing [`PointMatrix`]
pub use ndarray::Array2;
