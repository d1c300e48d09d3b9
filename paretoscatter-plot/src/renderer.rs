//! Rendering engine backed by plotters

use crate::camera::Camera;
use crate::engine::PlotEngine;
use crate::figure::{Autoscale, Axes, Axes2D, Axes3D, Axis, Figure};
use log::debug;
use paretoscatter_core::{Bound, Error, Result, Rgba};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;
use std::ops::Range;
use std::path::Path;

const FONT_FAMILY: &str = "sans-serif";
/// Figure title size, in points
const TITLE_POINTS: f64 = 14.0;
/// Space around the plotting area, in points
const MARGIN_POINTS: f64 = 10.0;

/// Plot engine that draws figures with `plotters`.
///
/// Defaults to a 6.4 x 4.8 inch canvas at 100 DPI.
#[derive(Debug, Clone)]
pub struct PlottersEngine {
    next_id: usize,
    width: u32,
    height: u32,
    dpi: f64,
    autoscale: Autoscale,
}

impl Default for PlottersEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl PlottersEngine {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            width: 640,
            height: 480,
            dpi: 100.0,
            autoscale: Autoscale::default(),
        }
    }

    /// Canvas size in pixels for new figures
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_dpi(mut self, dpi: f64) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn with_autoscale(mut self, autoscale: Autoscale) -> Self {
        self.autoscale = autoscale;
        self
    }

    /// Render to an SVG document held in memory
    pub fn to_svg_string(&self, figure: &Figure, axes: &Axes) -> Result<String> {
        check_owner(figure, axes)?;
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, figure.size()).into_drawing_area();
            self.draw(&root, figure, axes)?;
            root.present().map_err(render_err)?;
        }
        Ok(svg)
    }

    pub fn save_svg<P: AsRef<Path>>(&self, figure: &Figure, axes: &Axes, path: P) -> Result<()> {
        check_owner(figure, axes)?;
        let path = path.as_ref();
        let root = SVGBackend::new(path, figure.size()).into_drawing_area();
        self.draw(&root, figure, axes)?;
        root.present().map_err(render_err)?;
        debug!("wrote {}", path.display());
        Ok(())
    }

    /// Save to `path`, which must carry an `svg` extension
    pub fn save<P: AsRef<Path>>(&self, figure: &Figure, axes: &Axes, path: P) -> Result<()> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s.to_ascii_lowercase());
        match ext.as_deref() {
            Some("svg") => self.save_svg(figure, axes, path),
            _ => Err(Error::InvalidArgument(format!(
                "unsupported output format: {}",
                path.display()
            ))),
        }
    }

    fn draw<DB: DrawingBackend>(
        &self,
        root: &DrawingArea<DB, Shift>,
        figure: &Figure,
        axes: &Axes,
    ) -> Result<()> {
        root.fill(&WHITE).map_err(render_err)?;
        match figure.title() {
            Some(title) => {
                let style = (FONT_FAMILY, figure.points_to_pixels(TITLE_POINTS)).into_font();
                let area = root.titled(title, style).map_err(render_err)?;
                self.draw_axes(&area, figure, axes)
            }
            None => self.draw_axes(root, figure, axes),
        }
    }

    fn draw_axes<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        figure: &Figure,
        axes: &Axes,
    ) -> Result<()> {
        match axes {
            Axes::Planar(ax) => self.draw_2d(area, figure, ax),
            Axes::Spatial(ax) => self.draw_3d(area, figure, ax),
        }
    }

    fn draw_2d<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        figure: &Figure,
        ax: &Axes2D,
    ) -> Result<()> {
        let label_px = label_pixels(figure, ax.xaxis());
        let margin = figure.points_to_pixels(MARGIN_POINTS) as u32;
        let (xb, yb) = (ax.xaxis().bound(), ax.yaxis().bound());

        let mut chart = ChartBuilder::on(area)
            .margin(margin)
            .x_label_area_size((label_px * 3.0) as u32)
            .y_label_area_size((label_px * 4.0) as u32)
            .build_cartesian_2d(drawable_range(xb), drawable_range(yb))
            .map_err(render_err)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_desc(ax.xaxis().label().unwrap_or_default())
            .y_desc(ax.yaxis().label().unwrap_or_default())
            .axis_desc_style((FONT_FAMILY, label_px).into_font())
            .draw()
            .map_err(render_err)?;

        for collection in ax.collections() {
            let (xs, ys) = (collection.column(0), collection.column(1));
            let markers = (0..collection.len())
                .filter(|&i| xb.contains(xs[i]) && yb.contains(ys[i]))
                .map(|i| {
                    Circle::new(
                        (xs[i], ys[i]),
                        marker_radius(figure, collection.size(i)),
                        plotters_color(collection.color(i)).filled(),
                    )
                });
            chart.draw_series(markers).map_err(render_err)?;
        }
        Ok(())
    }

    fn draw_3d<DB: DrawingBackend>(
        &self,
        area: &DrawingArea<DB, Shift>,
        figure: &Figure,
        ax: &Axes3D,
    ) -> Result<()> {
        let margin = figure.points_to_pixels(MARGIN_POINTS) as u32;
        let (xb, yb, zb) = (ax.xaxis().bound(), ax.yaxis().bound(), ax.zaxis().bound());

        // plotters keeps its second axis vertical, so data z goes there
        let mut chart = ChartBuilder::on(area)
            .margin(margin)
            .build_cartesian_3d(drawable_range(xb), drawable_range(zb), drawable_range(yb))
            .map_err(render_err)?;
        let camera = Camera::from_view(ax.view());
        chart.with_projection(|pb| camera.project(pb));

        chart.configure_axes().draw().map_err(render_err)?;

        let (x0, y0, z0) = (xb.min, yb.min, zb.min);
        let labels = [
            (ax.xaxis(), (xb.max, z0, y0)),
            (ax.yaxis(), (x0, z0, yb.max)),
            (ax.zaxis(), (x0, zb.max, y0)),
        ];
        let texts = labels.iter().filter_map(|(axis, at)| {
            let label = axis.label()?;
            let mut style = (FONT_FAMILY, label_pixels(figure, axis))
                .into_font()
                .color(&BLACK);
            if axis.rotate_label() {
                style = style.transform(FontTransform::Rotate270);
            }
            Some(Text::new(label.to_string(), *at, style))
        });
        chart.draw_series(texts).map_err(render_err)?;

        for collection in ax.collections() {
            let (xs, ys, zs) = (collection.column(0), collection.column(1), collection.column(2));
            let markers = (0..collection.len())
                .filter(|&i| xb.contains(xs[i]) && yb.contains(ys[i]) && zb.contains(zs[i]))
                .map(|i| {
                    Circle::new(
                        (xs[i], zs[i], ys[i]),
                        marker_radius(figure, collection.size(i)),
                        plotters_color(collection.color(i)).filled(),
                    )
                });
            chart.draw_series(markers).map_err(render_err)?;
        }
        Ok(())
    }
}

impl PlotEngine for PlottersEngine {
    fn figure(&mut self) -> Figure {
        self.next_id += 1;
        Figure::new(self.next_id, self.width, self.height, self.dpi)
    }

    fn autoscale(&self) -> Autoscale {
        self.autoscale
    }
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

fn check_owner(figure: &Figure, axes: &Axes) -> Result<()> {
    if axes.figure_id() != figure.id() {
        return Err(Error::InvalidArgument(format!(
            "axes belong to figure {}, not figure {}",
            axes.figure_id(),
            figure.id()
        )));
    }
    Ok(())
}

fn plotters_color(c: Rgba) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, c.alpha())
}

fn label_pixels(figure: &Figure, axis: &Axis) -> f64 {
    figure.points_to_pixels(axis.label_fontsize().points())
}

/// Pixel radius for a marker of `area` points squared
fn marker_radius(figure: &Figure, area: f64) -> u32 {
    let radius = figure.points_to_pixels(area.max(0.0).sqrt() / 2.0);
    (radius.round() as u32).max(1)
}

/// Coordinate range plotters can map: finite and non-empty
fn drawable_range(bound: Bound) -> Range<f64> {
    if !bound.min.is_finite() || !bound.max.is_finite() {
        return 0.0..1.0;
    }
    if bound.span() > 0.0 {
        bound.min..bound.max
    } else {
        (bound.min - 0.5)..(bound.max + 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_radius() {
        let figure = Figure::new(1, 640, 480, 72.0);
        assert_eq!(marker_radius(&figure, 1.0), 1);
        assert_eq!(marker_radius(&figure, 36.0), 3);
        assert_eq!(marker_radius(&figure, -4.0), 1);
    }

    #[test]
    fn test_drawable_range() {
        assert_eq!(drawable_range(Bound::new(0.0, 2.0)), 0.0..2.0);
        assert_eq!(drawable_range(Bound::new(1.0, 1.0)), 0.5..1.5);
        assert_eq!(drawable_range(Bound::new(f64::NAN, 1.0)), 0.0..1.0);
    }

    #[test]
    fn test_engine_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<PlottersEngine>();
    }

    #[test]
    fn test_figure_ids_increase() {
        let mut engine = PlottersEngine::new().with_size(300, 200);
        let a = engine.figure();
        let b = engine.figure();
        assert!(b.id() > a.id());
        assert_eq!(a.size(), (300, 200));
        assert_eq!(a.dpi(), 100.0);
    }

    #[test]
    fn test_rejects_foreign_axes() {
        let mut engine = PlottersEngine::new();
        let figure = engine.figure();
        let other = engine.figure();
        let axes = Axes::Planar(engine.axes_2d(&other));
        assert!(matches!(
            engine.to_svg_string(&figure, &axes),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_save_rejects_unknown_extension() {
        let mut engine = PlottersEngine::new();
        let figure = engine.figure();
        let axes = Axes::Planar(engine.axes_2d(&figure));
        let result = engine.save(&figure, &axes, "plot.gif");
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }
}
