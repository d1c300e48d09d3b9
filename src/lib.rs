//! # paretoscatter
//!
//! Scatter plots of multi-objective Pareto fronts.
//!
//! This is the umbrella crate that re-exports the workspace crates in one
//! place:
//!
//! - **Core**: point matrix, styles, scatter configuration, camera angles
//! - **Plot**: figure/axes model, the scatter renderer and the plotters engine
//! - **I/O**: reading and writing front files
//!
//! ## Quick Start
//!
//! ```rust
//! use paretoscatter::prelude::*;
//!
//! let points = PointMatrix::from_rows(&[
//!     vec![0.0, 1.0],
//!     vec![0.5, 0.5],
//!     vec![1.0, 0.0],
//! ]).unwrap();
//!
//! let mut engine = PlottersEngine::new();
//! let config = ScatterConfig::default().with_title("Front");
//! let (figure, axes) = render(&points, Some(&mut engine), 4.0, DEFAULT_COLOR, &config).unwrap();
//! assert_eq!(axes.xaxis().label(), Some("$f_1$"));
//!
//! let svg = engine.to_svg_string(&figure, &axes).unwrap();
//! assert!(svg.contains("Front"));
//! ```
//!
//! ## Feature Flags
//!
//! - `io` (default): front file reading and writing

// Re-export core functionality
pub use paretoscatter_core::*;

pub use paretoscatter_plot as plot;

#[cfg(feature = "io")]
pub use paretoscatter_io as io;

/// Convenient imports for common use cases
pub mod prelude {
    pub use paretoscatter_core::*;
    pub use paretoscatter_plot::*;

    #[cfg(feature = "io")]
    pub use paretoscatter_io::{read_front, write_front};
}
