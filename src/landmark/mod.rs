pub mod names;

use std::collections::BTreeMap;

use crate::math::{Point3, Rotation3};

/// Mapping from landmark name to an optional recorded position.
///
/// A name that is known but has no recorded position is stored as `None`,
/// never as a sentinel point. Lookups of unknown names and of unplaced
/// landmarks both yield `None`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamedLandmarkSet {
    points: BTreeMap<String, Option<Point3>>,
}

impl NamedLandmarkSet {
    /// Creates a new, empty landmark set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a set containing every name in `catalog`, all unplaced.
    #[must_use]
    pub fn with_catalog<'a>(catalog: impl IntoIterator<Item = &'a str>) -> Self {
        let points = catalog.into_iter().map(|n| (n.to_owned(), None)).collect();
        Self { points }
    }

    /// Records (or replaces) the position of a landmark.
    pub fn insert(&mut self, name: impl Into<String>, point: Point3) -> Option<Point3> {
        self.points.insert(name.into(), Some(point)).flatten()
    }

    /// Clears the recorded position of a landmark, keeping its name.
    pub fn reset(&mut self, name: &str) -> Option<Point3> {
        self.points.get_mut(name).and_then(Option::take)
    }

    /// Returns the recorded position of a landmark, if placed.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Point3> {
        self.points.get(name).and_then(Option::as_ref)
    }

    /// Returns `true` if the name is part of the set, placed or not.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.points.contains_key(name)
    }

    /// Number of names in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Names of landmarks that have no recorded position.
    pub fn unplaced(&self) -> impl Iterator<Item = &str> {
        self.points
            .iter()
            .filter(|(_, p)| p.is_none())
            .map(|(n, _)| n.as_str())
    }

    /// Iterates over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&Point3>)> {
        self.points.iter().map(|(n, p)| (n.as_str(), p.as_ref()))
    }

    /// Returns a copy with every placed point rotated about the RAS origin.
    ///
    /// Unplaced landmarks stay unplaced.
    #[must_use]
    pub fn rotated(&self, rotation: &Rotation3) -> Self {
        let points = self
            .points
            .iter()
            .map(|(n, p)| (n.clone(), p.map(|p| rotation * p)))
            .collect();
        Self { points }
    }
}

impl<S: Into<String>> FromIterator<(S, Point3)> for NamedLandmarkSet {
    fn from_iter<I: IntoIterator<Item = (S, Point3)>>(iter: I) -> Self {
        let points = iter.into_iter().map(|(n, p)| (n.into(), Some(p))).collect();
        Self { points }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use approx::assert_relative_eq;

    use super::*;
    use crate::math::Vector3;

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    #[test]
    fn catalog_names_start_unplaced() {
        let set = NamedLandmarkSet::with_catalog(names::FH_LANDMARKS);
        assert_eq!(set.len(), 3);
        assert!(set.contains_name(names::LEFT_EAR_FH));
        assert!(set.get(names::LEFT_EAR_FH).is_none());
        assert_eq!(set.unplaced().count(), 3);
    }

    #[test]
    fn names_are_case_sensitive() {
        let set: NamedLandmarkSet = [(names::NASION, p(0.0, 80.0, 0.0))].into_iter().collect();
        assert!(set.get("Nasion").is_some());
        assert!(set.get("nasion").is_none());
    }

    #[test]
    fn reset_keeps_name() {
        let mut set = NamedLandmarkSet::new();
        set.insert(names::HYOID, p(0.0, 10.0, -40.0));
        assert_eq!(set.reset(names::HYOID), Some(p(0.0, 10.0, -40.0)));
        assert!(set.contains_name(names::HYOID));
        assert!(set.get(names::HYOID).is_none());
    }

    #[test]
    fn rotated_moves_placed_points_only() {
        let mut set = NamedLandmarkSet::with_catalog([names::NASION, names::BASION]);
        set.insert(names::NASION, p(1.0, 0.0, 0.0));
        let quarter = Rotation3::from_axis_angle(&Vector3::z_axis(), FRAC_PI_2);

        let rotated = set.rotated(&quarter);
        assert_relative_eq!(*rotated.get(names::NASION).unwrap(), p(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert!(rotated.contains_name(names::BASION));
        assert!(rotated.get(names::BASION).is_none());
    }
}
