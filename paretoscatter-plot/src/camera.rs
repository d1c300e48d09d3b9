//! Camera utilities for 3-D scatter plots

use paretoscatter_core::ViewAngle;
use plotters::coord::ranged3d::{ProjectionMatrix, ProjectionMatrixBuilder};

/// Projection parameters handed to the 3-D chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Rotation about the vertical axis, radians
    pub yaw: f64,
    /// Rotation above the horizontal plane, radians
    pub pitch: f64,
    /// Zoom applied after rotation
    pub scale: f64,
}

impl Camera {
    /// Camera looking along `view` (azimuth and elevation in degrees)
    pub fn from_view(view: ViewAngle) -> Self {
        Self {
            yaw: view.azimuth.to_radians(),
            pitch: view.elevation.to_radians(),
            scale: 0.8,
        }
    }

    /// Apply this camera to a chart's projection builder
    pub fn project(&self, mut pb: ProjectionMatrixBuilder) -> ProjectionMatrix {
        pb.yaw = self.yaw;
        pb.pitch = self.pitch;
        pb.scale = self.scale;
        pb.into_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_view(ViewAngle::default())
    }
}
