//! Marker colors, marker sizes and label font sizes

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha channel in `[0, 1]`
    pub fn alpha(&self) -> f64 {
        self.a as f64 / 255.0
    }

    /// Parse `#rrggbb` or `#rrggbbaa`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex
            .strip_prefix('#')
            .ok_or_else(|| Error::InvalidData(format!("color '{}' must start with '#'", hex)))?;
        if !digits.is_ascii() || (digits.len() != 6 && digits.len() != 8) {
            return Err(Error::InvalidData(format!(
                "color '{}' must have 6 or 8 hex digits",
                hex
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| Error::InvalidData(format!("invalid hex color '{}'", hex)))
        };
        let a = if digits.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::rgba(channel(0)?, channel(2)?, channel(4)?, a))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Accepts hex strings and the Tableau palette names (`tab:blue`, ...)
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Rgba::from_hex(s);
        }
        tableau_color(s).ok_or_else(|| Error::InvalidData(format!("unknown color '{}'", s)))
    }
}

/// The Tableau 10 palette
pub const TABLEAU_COLORS: [(&str, Rgba); 10] = [
    ("tab:blue", Rgba::rgb(0x1f, 0x77, 0xb4)),
    ("tab:orange", Rgba::rgb(0xff, 0x7f, 0x0e)),
    ("tab:green", Rgba::rgb(0x2c, 0xa0, 0x2c)),
    ("tab:red", Rgba::rgb(0xd6, 0x27, 0x28)),
    ("tab:purple", Rgba::rgb(0x94, 0x67, 0xbd)),
    ("tab:brown", Rgba::rgb(0x8c, 0x56, 0x4b)),
    ("tab:pink", Rgba::rgb(0xe3, 0x77, 0xc2)),
    ("tab:gray", Rgba::rgb(0x7f, 0x7f, 0x7f)),
    ("tab:olive", Rgba::rgb(0xbc, 0xbd, 0x22)),
    ("tab:cyan", Rgba::rgb(0x17, 0xbe, 0xcf)),
];

/// Default marker color, `tab:blue`
pub const DEFAULT_COLOR: Rgba = TABLEAU_COLORS[0].1;

/// Look up a Tableau palette color by name
pub fn tableau_color(name: &str) -> Option<Rgba> {
    // matplotlib accepts both spellings of gray
    let name = if name == "tab:grey" { "tab:gray" } else { name };
    TABLEAU_COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
}

/// Marker color: one for all points, or one per point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Single(Rgba),
    PerPoint(Vec<Rgba>),
}

impl ColorSpec {
    /// Color of point `i`, if there is one
    pub fn get(&self, i: usize) -> Option<Rgba> {
        match self {
            ColorSpec::Single(c) => Some(*c),
            ColorSpec::PerPoint(colors) => colors.get(i).copied(),
        }
    }

    /// Number of explicit entries, `None` for a single color
    pub fn len(&self) -> Option<usize> {
        match self {
            ColorSpec::Single(_) => None,
            ColorSpec::PerPoint(colors) => Some(colors.len()),
        }
    }
}

impl Default for ColorSpec {
    fn default() -> Self {
        ColorSpec::Single(DEFAULT_COLOR)
    }
}

impl From<Rgba> for ColorSpec {
    fn from(c: Rgba) -> Self {
        ColorSpec::Single(c)
    }
}

impl From<Vec<Rgba>> for ColorSpec {
    fn from(colors: Vec<Rgba>) -> Self {
        ColorSpec::PerPoint(colors)
    }
}

/// Marker area in points squared: one for all points, or one per point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Uniform(f64),
    PerPoint(Vec<f64>),
}

impl MarkerSize {
    pub fn get(&self, i: usize) -> Option<f64> {
        match self {
            MarkerSize::Uniform(s) => Some(*s),
            MarkerSize::PerPoint(sizes) => sizes.get(i).copied(),
        }
    }

    /// Number of explicit entries, `None` for a uniform size
    pub fn len(&self) -> Option<usize> {
        match self {
            MarkerSize::Uniform(_) => None,
            MarkerSize::PerPoint(sizes) => Some(sizes.len()),
        }
    }
}

impl Default for MarkerSize {
    fn default() -> Self {
        MarkerSize::Uniform(1.0)
    }
}

impl From<f64> for MarkerSize {
    fn from(s: f64) -> Self {
        MarkerSize::Uniform(s)
    }
}

impl From<Vec<f64>> for MarkerSize {
    fn from(sizes: Vec<f64>) -> Self {
        MarkerSize::PerPoint(sizes)
    }
}

/// Base font size the named tokens are relative to, in points
pub const BASE_FONT_SIZE: f64 = 10.0;

/// Font size for axis labels: a named size token or an absolute size in points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FontSize {
    Named(NamedFontSize),
    Points(f64),
}

/// Relative font size tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedFontSize {
    XxSmall,
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
    XxLarge,
}

impl NamedFontSize {
    /// Scale relative to [`BASE_FONT_SIZE`]
    pub fn scale(&self) -> f64 {
        match self {
            NamedFontSize::XxSmall => 0.579,
            NamedFontSize::XSmall => 0.694,
            NamedFontSize::Small => 0.833,
            NamedFontSize::Medium => 1.0,
            NamedFontSize::Large => 1.2,
            NamedFontSize::XLarge => 1.44,
            NamedFontSize::XxLarge => 1.728,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamedFontSize::XxSmall => "xx-small",
            NamedFontSize::XSmall => "x-small",
            NamedFontSize::Small => "small",
            NamedFontSize::Medium => "medium",
            NamedFontSize::Large => "large",
            NamedFontSize::XLarge => "x-large",
            NamedFontSize::XxLarge => "xx-large",
        }
    }
}

impl FontSize {
    /// Absolute size in points
    pub fn points(&self) -> f64 {
        match self {
            FontSize::Named(named) => BASE_FONT_SIZE * named.scale(),
            FontSize::Points(pt) => *pt,
        }
    }
}

impl Default for FontSize {
    fn default() -> Self {
        FontSize::Named(NamedFontSize::Large)
    }
}

impl FromStr for FontSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let named = match s.trim().to_ascii_lowercase().as_str() {
            "xx-small" => NamedFontSize::XxSmall,
            "x-small" => NamedFontSize::XSmall,
            "small" => NamedFontSize::Small,
            "medium" => NamedFontSize::Medium,
            "large" => NamedFontSize::Large,
            "x-large" => NamedFontSize::XLarge,
            "xx-large" => NamedFontSize::XxLarge,
            other => {
                return other
                    .parse::<f64>()
                    .ok()
                    .filter(|pt| *pt > 0.0)
                    .map(FontSize::Points)
                    .ok_or_else(|| Error::InvalidArgument(format!("invalid font size '{}'", s)));
            }
        };
        Ok(FontSize::Named(named))
    }
}
