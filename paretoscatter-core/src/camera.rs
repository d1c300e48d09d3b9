//! Recommended 3-D camera angles for common benchmark fronts
//!
//! Reference data for filling [`ScatterConfig::euler`](crate::ScatterConfig);
//! nothing in the renderer reads it implicitly.

use crate::config::ViewAngle;

const fn v(azimuth: f64, elevation: f64) -> ViewAngle {
    ViewAngle::new(azimuth, elevation)
}

/// `(problem, [(dimensionality label, angle)])`, angles as `(azimuth, elevation)`
pub static CAMERA_ANGLES: &[(&str, &[(&str, ViewAngle)])] = &[
    ("dtlz2", &[("3d", v(60.0, 20.0)), ("4d", v(-60.0, 30.0)), ("8d", v(22.0, 21.0))]),
    ("dtlz2-nbi", &[("3d", v(60.0, 20.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("debmdk", &[("3d", v(-30.0, 15.0)), ("4d", v(-20.0, 32.0)), ("8d", v(-60.0, 30.0))]),
    ("debmdk-nbi", &[("3d", v(-60.0, 30.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("debmdk-all", &[("3d", v(-60.0, 30.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("debmdk-all-nbi", &[("3d", v(-60.0, 30.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    (
        "dtlz8",
        &[("3d", v(-60.0, 30.0)), ("4d", v(-60.0, 30.0)), ("6d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))],
    ),
    (
        "dtlz8-nbi",
        &[("3d", v(-60.0, 30.0)), ("4d", v(-60.0, 30.0)), ("6d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))],
    ),
    (
        "c2dtlz2",
        &[("3d", v(45.0, 15.0)), ("4d", v(-20.0, 40.0)), ("5d", v(-25.0, 30.0)), ("8d", v(-25.0, 30.0))],
    ),
    (
        "c2dtlz2-nbi",
        &[("3d", v(45.0, 15.0)), ("4d", v(-20.0, 40.0)), ("5d", v(-25.0, 30.0)), ("8d", v(-25.0, 30.0))],
    ),
    ("cdebmdk", &[("3d", v(20.0, 15.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("cdebmdk-nbi", &[("3d", v(20.0, 15.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("c0dtlz2", &[("3d", v(20.0, 25.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("c0dtlz2-nbi", &[("3d", v(20.0, 25.0)), ("4d", v(-60.0, 30.0)), ("8d", v(-60.0, 30.0))]),
    ("crash-nbi", &[("3d", v(30.0, 25.0))]),
    ("crash-c1-nbi", &[("3d", v(30.0, 25.0))]),
    ("crash-c2-nbi", &[("3d", v(30.0, 25.0))]),
    ("gaa", &[("10d", v(-60.0, 30.0))]),
    ("gaa-nbi", &[("10d", v(-60.0, 30.0))]),
];

/// Recommended angle for `problem` at dimensionality `label` (e.g. `"3d"`)
pub fn camera_angle(problem: &str, label: &str) -> Option<ViewAngle> {
    CAMERA_ANGLES
        .iter()
        .find(|(name, _)| *name == problem)
        .and_then(|(_, angles)| angles.iter().find(|(l, _)| *l == label))
        .map(|(_, angle)| *angle)
}

/// Same as [`camera_angle`], keyed by the number of objectives
pub fn camera_angle_for_dim(problem: &str, dims: usize) -> Option<ViewAngle> {
    camera_angle(problem, &format!("{}d", dims))
}

/// Problem names present in the table
pub fn camera_problems() -> impl Iterator<Item = &'static str> {
    CAMERA_ANGLES.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(camera_angle("dtlz2", "3d"), Some(ViewAngle::new(60.0, 20.0)));
        assert_eq!(camera_angle("dtlz2", "8d"), Some(ViewAngle::new(22.0, 21.0)));
        assert_eq!(camera_angle("c2dtlz2", "5d"), Some(ViewAngle::new(-25.0, 30.0)));
        assert_eq!(camera_angle_for_dim("gaa", 10), Some(ViewAngle::new(-60.0, 30.0)));
        assert_eq!(camera_angle_for_dim("crash-c1-nbi", 3), Some(ViewAngle::new(30.0, 25.0)));
    }

    #[test]
    fn test_lookup_missing() {
        assert_eq!(camera_angle("dtlz2", "5d"), None);
        assert_eq!(camera_angle("zdt1", "3d"), None);
    }

    #[test]
    fn test_problem_names_unique() {
        let mut names: Vec<_> = camera_problems().collect();
        assert_eq!(names.len(), 19);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 19);
    }
}
