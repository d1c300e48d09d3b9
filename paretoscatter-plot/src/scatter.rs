//! Scatter plots of multi-objective points

use crate::engine::PlotEngine;
use crate::figure::{Axes, Figure};
use log::{debug, trace};
use paretoscatter_core::{ColorSpec, Error, MarkerSize, PointMatrix, Result, ScatterConfig};

/// Scatter-plot `points` on a new figure created by `engine`.
///
/// Matrices with fewer than three columns get 2-D axes showing columns
/// `config.axes[0]` and `config.axes[1]`. Anything wider gets 3-D axes
/// showing the three columns named by `config.axes`; the rest are not drawn.
/// Axis `k` is labelled with `config.label_prefix` formatted with the
/// 1-based column number.
///
/// Fails with [`Error::InvalidArgument`] when `engine` is `None`. Column
/// indices and per-point size/color lengths are checked by the matrix and
/// the axes as the data is handed over, not here.
pub fn render<E>(
    points: &PointMatrix,
    engine: Option<&mut E>,
    size: impl Into<MarkerSize>,
    color: impl Into<ColorSpec>,
    config: &ScatterConfig,
) -> Result<(Figure, Axes)>
where
    E: PlotEngine + ?Sized,
{
    let engine = engine.ok_or_else(|| {
        Error::InvalidArgument("a valid plotting engine must be provided".to_string())
    })?;
    let size = size.into();
    let color = color.into();
    let [a0, a1, a2] = config.axes;
    let fontsize = config.label_fontsize;

    let mut figure = engine.figure();
    if let Some(title) = &config.title {
        figure.suptitle(title.clone());
    }

    if points.ncols() < 3 {
        debug!(
            "2-D scatter of {} points, columns ({}, {})",
            points.nrows(),
            a0,
            a1
        );
        let mut ax = engine.axes_2d(&figure);
        ax.scatter(points.column_vec(a0)?, points.column_vec(a1)?, size, color)?;

        let xbound = config.xbound.unwrap_or_else(|| ax.xaxis().bound());
        let ybound = config.ybound.unwrap_or_else(|| ax.yaxis().bound());
        trace!("bounds x={:?} y={:?}", xbound, ybound);
        ax.xaxis_mut().set_bound(xbound);
        ax.yaxis_mut().set_bound(ybound);

        ax.xaxis_mut().set_label(config.axis_label(a0), fontsize);
        ax.yaxis_mut().set_label(config.axis_label(a1), fontsize);
        Ok((figure, Axes::Planar(ax)))
    } else {
        if points.ncols() > 3 {
            debug!(
                "{} columns given, showing only ({}, {}, {})",
                points.ncols(),
                a0,
                a1,
                a2
            );
        }
        debug!(
            "3-D scatter of {} points, columns ({}, {}, {})",
            points.nrows(),
            a0,
            a1,
            a2
        );
        let mut ax = engine.axes_3d(&figure);
        ax.scatter(
            points.column_vec(a0)?,
            points.column_vec(a1)?,
            points.column_vec(a2)?,
            size,
            color,
        )?;

        let xbound = config.xbound.unwrap_or_else(|| ax.xaxis().bound());
        let ybound = config.ybound.unwrap_or_else(|| ax.yaxis().bound());
        let zbound = config.zbound.unwrap_or_else(|| ax.zaxis().bound());
        trace!("bounds x={:?} y={:?} z={:?}", xbound, ybound, zbound);
        ax.xaxis_mut().set_bound(xbound);
        ax.yaxis_mut().set_bound(ybound);
        ax.zaxis_mut().set_bound(zbound);

        ax.xaxis_mut().set_label(config.axis_label(a0), fontsize);
        ax.yaxis_mut().set_label(config.axis_label(a1), fontsize);
        ax.zaxis_mut().set_label(config.axis_label(a2), fontsize);
        ax.xaxis_mut().set_rotate_label(false);
        ax.yaxis_mut().set_rotate_label(false);
        ax.zaxis_mut().set_rotate_label(false);

        ax.view_init(config.euler.elevation, config.euler.azimuth);
        Ok((figure, Axes::Spatial(ax)))
    }
}
