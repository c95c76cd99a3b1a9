//! What mesh and discretization code reads from spatial-variable leaves

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, warn};

use crate::symbol::{Symbol, SymbolKind, TreeError};

/// Coordinate system of a spatial variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CoordinateSystem {
    #[default]
    Cartesian,
    CylindricalPolar,
    SphericalPolar,
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            CoordinateSystem::Cartesian => "cartesian",
            CoordinateSystem::CylindricalPolar => "cylindrical polar",
            CoordinateSystem::SphericalPolar => "spherical polar",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for CoordinateSystem {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cartesian" => Ok(CoordinateSystem::Cartesian),
            "cylindrical polar" => Ok(CoordinateSystem::CylindricalPolar),
            "spherical polar" => Ok(CoordinateSystem::SphericalPolar),
            other => Err(TreeError::UnknownCoordinateSystem(other.to_string())),
        }
    }
}

/// Number of mesh points per spatial variable, keyed by the variable's id.
///
/// Any structurally equal copy of a spatial variable finds the same entry,
/// including the copies attached inside larger expressions.
#[derive(Debug, Clone, Default)]
pub struct PointCounts {
    counts: HashMap<u64, usize>,
}

impl PointCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `points` for `variable`, returning the previous count if any.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::NotASpatialVariable`] for any other kind of symbol.
    pub fn insert(&mut self, variable: &Symbol, points: usize) -> Result<Option<usize>, TreeError> {
        if !matches!(variable.kind(), SymbolKind::SpatialVariable { .. }) {
            warn!(
                "Cannot assign point count to '{}' of kind {}",
                variable,
                variable.kind().tag()
            );
            return Err(TreeError::NotASpatialVariable {
                name: variable.name().to_string(),
                kind: variable.kind().tag(),
            });
        }

        debug!("Assigning {} points to '{}'", points, variable);
        Ok(self.counts.insert(variable.id(), points))
    }

    pub fn get(&self, variable: &Symbol) -> Option<usize> {
        self.counts.get(&variable.id()).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_system_round_trip_names() {
        assert_eq!(
            "spherical polar".parse::<CoordinateSystem>(),
            Ok(CoordinateSystem::SphericalPolar)
        );
        assert_eq!(CoordinateSystem::CylindricalPolar.to_string(), "cylindrical polar");
        assert_eq!(CoordinateSystem::default(), CoordinateSystem::Cartesian);
    }

    #[test]
    fn test_unknown_coordinate_system() {
        let result = "polar".parse::<CoordinateSystem>();
        assert_eq!(
            result,
            Err(TreeError::UnknownCoordinateSystem("polar".to_string()))
        );
    }

    #[test]
    fn test_point_counts_lookup_by_structure() {
        let r = Symbol::spatial_variable(
            "r",
            vec!["negative particle"],
            CoordinateSystem::SphericalPolar,
        );
        let mut counts = PointCounts::new();
        assert!(counts.is_empty());
        assert_eq!(counts.insert(&r, 20), Ok(None));

        // A separately built but identical variable finds the same entry
        let same_r = Symbol::spatial_variable(
            "r",
            vec!["negative particle"],
            CoordinateSystem::SphericalPolar,
        );
        assert_eq!(counts.get(&same_r), Some(20));

        // So does the copy attached inside an expression
        let expr = &r * &Symbol::scalar(2.0);
        assert_eq!(counts.get(&expr.children()[0]), Some(20));

        assert_eq!(counts.insert(&r, 30), Ok(Some(20)));
        assert_eq!(counts.len(), 1);
    }

    #[test]
    fn test_point_counts_rejects_other_kinds() {
        let mut counts = PointCounts::new();
        let c = Symbol::variable("c", vec!["negative electrode"]);
        let result = counts.insert(&c, 10);
        assert!(matches!(
            result,
            Err(TreeError::NotASpatialVariable { kind: "Variable", .. })
        ));
        assert!(counts.is_empty());
    }

    #[test]
    fn test_spatial_variable_metadata() {
        let y = Symbol::spatial_variable("y", vec!["current collector"], CoordinateSystem::Cartesian);
        assert_eq!(y.name(), "y");
        assert_eq!(y.coord_sys(), Some(CoordinateSystem::Cartesian));
        assert_eq!(y.domain(), &["current collector".to_string()][..]);
        assert_eq!(Symbol::parameter("a").coord_sys(), None);
    }
}
