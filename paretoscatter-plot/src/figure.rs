//! Retained figure and axes model
//!
//! A [`Figure`] is the canvas (size, resolution, title) and an [`Axes`] the
//! coordinate system drawn on it, holding the scatter collections plus the
//! per-axis labels and bounds. Both are plain data owned by the caller; an
//! engine turns them into pixels.

use itertools::{Itertools, MinMaxResult};
use paretoscatter_core::{Bound, ColorSpec, Error, FontSize, MarkerSize, Result, Rgba, ViewAngle};

/// A figure: the top-level canvas
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    id: usize,
    title: Option<String>,
    width: u32,
    height: u32,
    dpi: f64,
}

impl Figure {
    pub fn new(id: usize, width: u32, height: u32, dpi: f64) -> Self {
        Self {
            id,
            title: None,
            width,
            height,
            dpi,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Set the figure-level title
    pub fn suptitle(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Canvas size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn dpi(&self) -> f64 {
        self.dpi
    }

    /// Convert a length in points to pixels at this figure's resolution
    pub fn points_to_pixels(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }
}

/// How an engine picks a bound for data when none is requested
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Autoscale {
    /// Fraction of the data span added on both sides
    pub margin: f64,
}

impl Default for Autoscale {
    fn default() -> Self {
        Self { margin: 0.05 }
    }
}

impl Autoscale {
    /// Bound covering the finite `values`. No data gives `(0, 1)`; a single
    /// distinct value is widened around itself.
    pub fn bound(&self, values: impl IntoIterator<Item = f64>) -> Bound {
        match values.into_iter().filter(|v| v.is_finite()).minmax() {
            MinMaxResult::NoElements => Bound::new(0.0, 1.0),
            MinMaxResult::OneElement(v) => self.widen(v, v),
            MinMaxResult::MinMax(lo, hi) => self.widen(lo, hi),
        }
    }

    fn widen(&self, lo: f64, hi: f64) -> Bound {
        let span = hi - lo;
        if span > 0.0 {
            let pad = span * self.margin;
            return Bound::new(lo - pad, hi + pad);
        }
        let pad = if lo == 0.0 { 0.5 } else { lo.abs() * 0.5 };
        Bound::new(lo - pad, hi + pad)
    }
}

/// One axis of an [`Axes`]
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    label: Option<String>,
    label_fontsize: FontSize,
    bound: Bound,
    rotate_label: bool,
}

impl Default for Axis {
    fn default() -> Self {
        Self {
            label: None,
            label_fontsize: FontSize::default(),
            bound: Bound::new(0.0, 1.0),
            rotate_label: true,
        }
    }
}

impl Axis {
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn label_fontsize(&self) -> FontSize {
        self.label_fontsize
    }

    pub fn set_label(&mut self, label: impl Into<String>, fontsize: FontSize) {
        self.label = Some(label.into());
        self.label_fontsize = fontsize;
    }

    pub fn bound(&self) -> Bound {
        self.bound
    }

    /// Set the displayed range, stored in increasing order
    pub fn set_bound(&mut self, bound: Bound) {
        self.bound = bound.ordered();
    }

    /// Whether the engine may rotate the label to follow the axis direction
    pub fn rotate_label(&self) -> bool {
        self.rotate_label
    }

    pub fn set_rotate_label(&mut self, rotate: bool) {
        self.rotate_label = rotate;
    }
}

/// Markers added by one scatter call
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterCollection {
    coords: Vec<Vec<f64>>,
    sizes: MarkerSize,
    colors: ColorSpec,
}

impl ScatterCollection {
    /// `coords` holds one vector per displayed axis.
    ///
    /// Per-point sizes or colors must match the number of points.
    pub fn new(coords: Vec<Vec<f64>>, sizes: MarkerSize, colors: ColorSpec) -> Result<Self> {
        let n = coords.first().map_or(0, Vec::len);
        if coords.iter().any(|c| c.len() != n) {
            return Err(Error::ShapeMismatch(
                "x, y and z must be the same size".to_string(),
            ));
        }
        if let Some(len) = sizes.len() {
            if len != n {
                return Err(Error::ShapeMismatch(format!(
                    "{} marker sizes given for {} points",
                    len, n
                )));
            }
        }
        if let Some(len) = colors.len() {
            if len != n {
                return Err(Error::ShapeMismatch(format!(
                    "{} colors given for {} points",
                    len, n
                )));
            }
        }
        Ok(Self {
            coords,
            sizes,
            colors,
        })
    }

    /// Number of markers
    pub fn len(&self) -> usize {
        self.coords.first().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of coordinates per marker (2 or 3)
    pub fn dims(&self) -> usize {
        self.coords.len()
    }

    /// Values along axis `k`
    pub fn column(&self, k: usize) -> &[f64] {
        &self.coords[k]
    }

    /// Coordinates of marker `i`
    pub fn point(&self, i: usize) -> Vec<f64> {
        self.coords.iter().map(|c| c[i]).collect()
    }

    /// Marker area of point `i`, in points squared
    pub fn size(&self, i: usize) -> f64 {
        self.sizes.get(i).unwrap_or(1.0)
    }

    pub fn color(&self, i: usize) -> Rgba {
        self.colors.get(i).unwrap_or(paretoscatter_core::DEFAULT_COLOR)
    }

    pub fn sizes(&self) -> &MarkerSize {
        &self.sizes
    }

    pub fn colors(&self) -> &ColorSpec {
        &self.colors
    }
}

fn autoscale_axis(axis: &mut Axis, autoscale: &Autoscale, collections: &[ScatterCollection], k: usize) {
    let bound = autoscale.bound(collections.iter().flat_map(|c| c.column(k).iter().copied()));
    axis.set_bound(bound);
}

/// Standard 2-D axes
#[derive(Debug, Clone, PartialEq)]
pub struct Axes2D {
    figure_id: usize,
    autoscale: Autoscale,
    x: Axis,
    y: Axis,
    collections: Vec<ScatterCollection>,
}

impl Axes2D {
    pub fn new(figure_id: usize, autoscale: Autoscale) -> Self {
        Self {
            figure_id,
            autoscale,
            x: Axis::default(),
            y: Axis::default(),
            collections: Vec::new(),
        }
    }

    /// Add markers at `(xs[i], ys[i])` and rescale both axes to the data
    pub fn scatter(
        &mut self,
        xs: Vec<f64>,
        ys: Vec<f64>,
        sizes: MarkerSize,
        colors: ColorSpec,
    ) -> Result<&ScatterCollection> {
        let collection = ScatterCollection::new(vec![xs, ys], sizes, colors)?;
        self.collections.push(collection);
        autoscale_axis(&mut self.x, &self.autoscale, &self.collections, 0);
        autoscale_axis(&mut self.y, &self.autoscale, &self.collections, 1);
        Ok(&self.collections[self.collections.len() - 1])
    }

    pub fn figure_id(&self) -> usize {
        self.figure_id
    }

    pub fn xaxis(&self) -> &Axis {
        &self.x
    }

    pub fn yaxis(&self) -> &Axis {
        &self.y
    }

    pub fn xaxis_mut(&mut self) -> &mut Axis {
        &mut self.x
    }

    pub fn yaxis_mut(&mut self) -> &mut Axis {
        &mut self.y
    }

    pub fn collections(&self) -> &[ScatterCollection] {
        &self.collections
    }
}

/// 3-D axes with a camera orientation
#[derive(Debug, Clone, PartialEq)]
pub struct Axes3D {
    figure_id: usize,
    autoscale: Autoscale,
    x: Axis,
    y: Axis,
    z: Axis,
    view: ViewAngle,
    collections: Vec<ScatterCollection>,
}

impl Axes3D {
    pub fn new(figure_id: usize, autoscale: Autoscale) -> Self {
        Self {
            figure_id,
            autoscale,
            x: Axis::default(),
            y: Axis::default(),
            z: Axis::default(),
            view: ViewAngle::default(),
            collections: Vec::new(),
        }
    }

    /// Add markers at `(xs[i], ys[i], zs[i])` and rescale all three axes
    pub fn scatter(
        &mut self,
        xs: Vec<f64>,
        ys: Vec<f64>,
        zs: Vec<f64>,
        sizes: MarkerSize,
        colors: ColorSpec,
    ) -> Result<&ScatterCollection> {
        let collection = ScatterCollection::new(vec![xs, ys, zs], sizes, colors)?;
        self.collections.push(collection);
        autoscale_axis(&mut self.x, &self.autoscale, &self.collections, 0);
        autoscale_axis(&mut self.y, &self.autoscale, &self.collections, 1);
        autoscale_axis(&mut self.z, &self.autoscale, &self.collections, 2);
        Ok(&self.collections[self.collections.len() - 1])
    }

    /// Orient the camera, angles in degrees
    pub fn view_init(&mut self, elevation: f64, azimuth: f64) {
        self.view = ViewAngle::new(azimuth, elevation);
    }

    pub fn view(&self) -> ViewAngle {
        self.view
    }

    pub fn figure_id(&self) -> usize {
        self.figure_id
    }

    pub fn xaxis(&self) -> &Axis {
        &self.x
    }

    pub fn yaxis(&self) -> &Axis {
        &self.y
    }

    pub fn zaxis(&self) -> &Axis {
        &self.z
    }

    pub fn xaxis_mut(&mut self) -> &mut Axis {
        &mut self.x
    }

    pub fn yaxis_mut(&mut self) -> &mut Axis {
        &mut self.y
    }

    pub fn zaxis_mut(&mut self) -> &mut Axis {
        &mut self.z
    }

    pub fn collections(&self) -> &[ScatterCollection] {
        &self.collections
    }
}

/// Axes returned by the scatter renderer
#[derive(Debug, Clone, PartialEq)]
pub enum Axes {
    Planar(Axes2D),
    Spatial(Axes3D),
}

impl Axes {
    pub fn is_3d(&self) -> bool {
        matches!(self, Axes::Spatial(_))
    }

    pub fn figure_id(&self) -> usize {
        match self {
            Axes::Planar(ax) => ax.figure_id(),
            Axes::Spatial(ax) => ax.figure_id(),
        }
    }

    pub fn xaxis(&self) -> &Axis {
        match self {
            Axes::Planar(ax) => ax.xaxis(),
            Axes::Spatial(ax) => ax.xaxis(),
        }
    }

    pub fn yaxis(&self) -> &Axis {
        match self {
            Axes::Planar(ax) => ax.yaxis(),
            Axes::Spatial(ax) => ax.yaxis(),
        }
    }

    /// The Z axis, present only on 3-D axes
    pub fn zaxis(&self) -> Option<&Axis> {
        match self {
            Axes::Planar(_) => None,
            Axes::Spatial(ax) => Some(ax.zaxis()),
        }
    }

    /// Camera orientation, present only on 3-D axes
    pub fn view(&self) -> Option<ViewAngle> {
        match self {
            Axes::Planar(_) => None,
            Axes::Spatial(ax) => Some(ax.view()),
        }
    }

    pub fn collections(&self) -> &[ScatterCollection] {
        match self {
            Axes::Planar(ax) => ax.collections(),
            Axes::Spatial(ax) => ax.collections(),
        }
    }

    pub fn as_2d(&self) -> Option<&Axes2D> {
        match self {
            Axes::Planar(ax) => Some(ax),
            Axes::Spatial(_) => None,
        }
    }

    pub fn as_3d(&self) -> Option<&Axes3D> {
        match self {
            Axes::Planar(_) => None,
            Axes::Spatial(ax) => Some(ax),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_autoscale_margin() {
        let b = Autoscale::default().bound(vec![0.0, 1.0, 0.5]);
        assert_relative_eq!(b.min, -0.05);
        assert_relative_eq!(b.max, 1.05);
    }

    #[test]
    fn test_autoscale_degenerate() {
        let empty = Autoscale::default().bound(Vec::new());
        assert_eq!(empty, Bound::new(0.0, 1.0));

        let single = Autoscale::default().bound(vec![2.0, 2.0]);
        assert_relative_eq!(single.min, 1.0);
        assert_relative_eq!(single.max, 3.0);

        let zero = Autoscale::default().bound(vec![0.0]);
        assert_eq!(zero, Bound::new(-0.5, 0.5));
    }

    #[test]
    fn test_autoscale_skips_non_finite() {
        let b = Autoscale { margin: 0.0 }.bound(vec![f64::NAN, 1.0, f64::INFINITY, 3.0]);
        assert_eq!(b, Bound::new(1.0, 3.0));
    }

    #[test]
    fn test_collection_shape_checks() {
        let ok = ScatterCollection::new(
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            MarkerSize::from(vec![1.0, 2.0]),
            ColorSpec::default(),
        )
        .unwrap();
        assert_eq!(ok.len(), 2);
        assert_eq!(ok.point(1), vec![1.0, 3.0]);
        assert_eq!(ok.size(1), 2.0);

        let ragged = ScatterCollection::new(
            vec![vec![0.0, 1.0], vec![2.0]],
            MarkerSize::default(),
            ColorSpec::default(),
        );
        assert!(matches!(ragged, Err(Error::ShapeMismatch(_))));

        let sizes = ScatterCollection::new(
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            MarkerSize::from(vec![1.0]),
            ColorSpec::default(),
        );
        assert!(matches!(sizes, Err(Error::ShapeMismatch(_))));

        let colors = ScatterCollection::new(
            vec![vec![0.0, 1.0], vec![2.0, 3.0]],
            MarkerSize::default(),
            ColorSpec::from(vec![paretoscatter_core::DEFAULT_COLOR; 3]),
        );
        assert!(matches!(colors, Err(Error::ShapeMismatch(_))));
    }

    #[test]
    fn test_scatter_rescales_axes() {
        let mut ax = Axes2D::new(0, Autoscale { margin: 0.0 });
        ax.scatter(vec![0.0, 2.0], vec![1.0, 5.0], MarkerSize::default(), ColorSpec::default())
            .unwrap();
        assert_eq!(ax.xaxis().bound(), Bound::new(0.0, 2.0));
        ax.scatter(vec![-1.0], vec![3.0], MarkerSize::default(), ColorSpec::default())
            .unwrap();
        assert_eq!(ax.xaxis().bound(), Bound::new(-1.0, 2.0));
        assert_eq!(ax.yaxis().bound(), Bound::new(1.0, 5.0));
        assert_eq!(ax.collections().len(), 2);
    }

    #[test]
    fn test_axis_bound_ordered() {
        let mut axis = Axis::default();
        axis.set_bound(Bound::new(3.0, 1.0));
        assert_eq!(axis.bound(), Bound::new(1.0, 3.0));
        assert!(axis.rotate_label());
    }

    #[test]
    fn test_view_init() {
        let mut ax = Axes3D::new(7, Autoscale::default());
        ax.view_init(30.0, -60.0);
        assert_eq!(ax.view(), ViewAngle::new(-60.0, 30.0));
        assert_eq!(Axes::Spatial(ax).figure_id(), 7);
    }
}
