//! Plotting engine seam

use crate::figure::{Autoscale, Axes2D, Axes3D, Figure};

/// A plotting context that creates figures and axes.
///
/// The scatter renderer only builds the figure/axes model through this
/// trait; drawing it is up to the engine.
pub trait PlotEngine {
    /// Create a new, empty figure
    fn figure(&mut self) -> Figure;

    /// Bound policy applied to axes created by this engine
    fn autoscale(&self) -> Autoscale {
        Autoscale::default()
    }

    /// Standard 2-D axes on `figure`
    fn axes_2d(&self, figure: &Figure) -> Axes2D {
        Axes2D::new(figure.id(), self.autoscale())
    }

    /// 3-D axes on `figure`
    fn axes_3d(&self, figure: &Figure) -> Axes3D {
        Axes3D::new(figure.id(), self.autoscale())
    }
}

impl<E: PlotEngine + ?Sized> PlotEngine for Box<E> {
    fn figure(&mut self) -> Figure {
        (**self).figure()
    }

    fn autoscale(&self) -> Autoscale {
        (**self).autoscale()
    }

    fn axes_2d(&self, figure: &Figure) -> Axes2D {
        (**self).axes_2d(figure)
    }

    fn axes_3d(&self, figure: &Figure) -> Axes3D {
        (**self).axes_3d(figure)
    }
}
