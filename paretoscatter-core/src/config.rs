//! Per-call scatter plot configuration
//!
//! Every setting has a default, so `ScatterConfig::default()` reproduces the
//! stock plot: labels `$f_1$`, `$f_2$`, ..., `large` label text, the first
//! three columns, azimuth -60 and elevation 30, automatic bounds, no title.

use crate::style::FontSize;
use serde::{Deserialize, Serialize};

/// Replacement fields that take the axis index
const INDEX_FIELDS: [&str; 4] = ["{0:d}", "{:d}", "{0}", "{}"];

/// Axis label template with one integer replacement field, written `{}`,
/// `{0}`, `{:d}` or `{0:d}`. Literal braces are escaped as `{{` and `}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelTemplate(String);

impl LabelTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// Substitute `index` into the first replacement field and unescape
    /// doubled braces. Later fields are kept as written.
    pub fn format(&self, index: usize) -> String {
        let mut out = String::with_capacity(self.0.len() + 4);
        let mut rest = self.0.as_str();
        let mut replaced = false;

        while let Some(pos) = rest.find(['{', '}']) {
            out.push_str(&rest[..pos]);
            let tail = &rest[pos..];
            if tail.starts_with("{{") || tail.starts_with("}}") {
                out.push_str(&tail[..1]);
                rest = &tail[2..];
                continue;
            }
            if !replaced {
                if let Some(field) = INDEX_FIELDS.iter().find(|f| tail.starts_with(**f)) {
                    out.push_str(&index.to_string());
                    rest = &tail[field.len()..];
                    replaced = true;
                    continue;
                }
            }
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
        out.push_str(rest);
        out
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LabelTemplate {
    fn default() -> Self {
        Self::new("$f_{}$")
    }
}

impl From<&str> for LabelTemplate {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// 3-D camera orientation in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewAngle {
    pub azimuth: f64,
    pub elevation: f64,
}

impl ViewAngle {
    pub const fn new(azimuth: f64, elevation: f64) -> Self {
        Self { azimuth, elevation }
    }
}

impl Default for ViewAngle {
    fn default() -> Self {
        Self::new(-60.0, 30.0)
    }
}

impl From<(f64, f64)> for ViewAngle {
    /// `(azimuth, elevation)`
    fn from((azimuth, elevation): (f64, f64)) -> Self {
        Self::new(azimuth, elevation)
    }
}

/// Numeric range displayed along one axis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The same range with its ends in increasing order
    pub fn ordered(self) -> Self {
        if self.min <= self.max {
            self
        } else {
            Self::new(self.max, self.min)
        }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn contains(&self, v: f64) -> bool {
        v >= self.min && v <= self.max
    }
}

impl From<(f64, f64)> for Bound {
    fn from((min, max): (f64, f64)) -> Self {
        Self::new(min, max)
    }
}

/// Options for a single scatter call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScatterConfig {
    /// Axis label template, default `$f_{}$`
    pub label_prefix: LabelTemplate,
    /// Label font size, default `large`
    pub label_fontsize: FontSize,
    /// Columns shown on the x, y and z axes, default `[0, 1, 2]`
    pub axes: [usize; 3],
    /// Camera orientation for 3-D plots, default azimuth -60, elevation 30
    pub euler: ViewAngle,
    /// X-axis bound, default automatic
    pub xbound: Option<Bound>,
    /// Y-axis bound, default automatic
    pub ybound: Option<Bound>,
    /// Z-axis bound, default automatic
    pub zbound: Option<Bound>,
    /// Figure title, default none
    pub title: Option<String>,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            label_prefix: LabelTemplate::default(),
            label_fontsize: FontSize::default(),
            axes: [0, 1, 2],
            euler: ViewAngle::default(),
            xbound: None,
            ybound: None,
            zbound: None,
            title: None,
        }
    }
}

impl ScatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.label_prefix = LabelTemplate::new(prefix);
        self
    }

    pub fn with_label_fontsize(mut self, size: FontSize) -> Self {
        self.label_fontsize = size;
        self
    }

    pub fn with_axes(mut self, axes: [usize; 3]) -> Self {
        self.axes = axes;
        self
    }

    pub fn with_euler(mut self, euler: impl Into<ViewAngle>) -> Self {
        self.euler = euler.into();
        self
    }

    pub fn with_xbound(mut self, bound: impl Into<Bound>) -> Self {
        self.xbound = Some(bound.into());
        self
    }

    pub fn with_ybound(mut self, bound: impl Into<Bound>) -> Self {
        self.ybound = Some(bound.into());
        self
    }

    pub fn with_zbound(mut self, bound: impl Into<Bound>) -> Self {
        self.zbound = Some(bound.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Label for the axis showing column `column` (0-based)
    pub fn axis_label(&self, column: usize) -> String {
        self.label_prefix.format(column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NamedFontSize;

    #[test]
    fn test_label_template() {
        assert_eq!(LabelTemplate::default().format(1), "$f_1$");
        assert_eq!(LabelTemplate::new("$f_{:d}$").format(12), "$f_12$");
        assert_eq!(LabelTemplate::new("obj {} of {}").format(2), "obj 2 of {}");
        assert_eq!(LabelTemplate::new("cost").format(3), "cost");
    }

    #[test]
    fn test_label_template_escaped_braces() {
        assert_eq!(LabelTemplate::new("$f_{{{:d}}}$").format(12), "$f_{12}$");
        assert_eq!(LabelTemplate::new("$f_{{{}}}$").format(3), "$f_{3}$");
        assert_eq!(LabelTemplate::new("{{x}}").format(1), "{x}");
    }

    #[test]
    fn test_label_template_positional_field() {
        assert_eq!(LabelTemplate::new("$f_{0}$").format(1), "$f_1$");
        assert_eq!(LabelTemplate::new("$f_{0:d}$").format(7), "$f_7$");
        assert_eq!(LabelTemplate::new("{1} {}").format(2), "{1} 2");
    }

    #[test]
    fn test_default_config() {
        let config = ScatterConfig::default();
        assert_eq!(config.axes, [0, 1, 2]);
        assert_eq!(config.euler, ViewAngle::new(-60.0, 30.0));
        assert_eq!(config.label_fontsize, FontSize::Named(NamedFontSize::Large));
        assert!(config.xbound.is_none());
        assert!(config.ybound.is_none());
        assert!(config.zbound.is_none());
        assert!(config.title.is_none());
        assert_eq!(config.axis_label(0), "$f_1$");
    }

    #[test]
    fn test_builder() {
        let config = ScatterConfig::new()
            .with_axes([3, 1, 0])
            .with_euler((45.0, 15.0))
            .with_xbound((0.0, 1.5))
            .with_title("Front");
        assert_eq!(config.axes, [3, 1, 0]);
        assert_eq!(config.euler.azimuth, 45.0);
        assert_eq!(config.euler.elevation, 15.0);
        assert_eq!(config.xbound, Some(Bound::new(0.0, 1.5)));
        assert_eq!(config.title.as_deref(), Some("Front"));
    }

    #[test]
    fn test_deserialize_partial() {
        let json = r#"{
            "axes": [1, 0, 2],
            "label_prefix": "$g_{}$",
            "label_fontsize": "small",
            "xbound": {"min": 0.0, "max": 1.0},
            "title": "Front"
        }"#;
        let config: ScatterConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.axes, [1, 0, 2]);
        assert_eq!(config.axis_label(1), "$g_2$");
        assert_eq!(config.label_fontsize, FontSize::Named(NamedFontSize::Small));
        assert_eq!(config.xbound, Some(Bound::new(0.0, 1.0)));
        assert_eq!(config.euler, ViewAngle::default());
        assert!(config.zbound.is_none());
    }

    #[test]
    fn test_bound_ordered() {
        assert_eq!(Bound::new(2.0, -1.0).ordered(), Bound::new(-1.0, 2.0));
        assert_eq!(Bound::new(0.0, 1.0).ordered(), Bound::new(0.0, 1.0));
        assert!(Bound::new(0.0, 1.0).contains(0.5));
    }
}
