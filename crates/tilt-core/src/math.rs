use nalgebra::{Matrix3, Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};

pub type Real = f64;

pub type Vec3 = Vector3<Real>;
pub type UnitVec3 = Unit<Vec3>;
pub type Mat3 = Matrix3<Real>;
pub type Rot3 = Rotation3<Real>;

/// Unit of angle values crossing the API boundary.
///
/// Angles are stored in radians internally; this flag only matters where
/// values enter or leave, and conversion happens exactly once at that point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

impl AngleUnit {
    /// Convert a value given in this unit to radians.
    pub fn to_radians(self, value: Real) -> Real {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_radians(),
        }
    }

    /// Convert a value in radians to this unit.
    pub fn from_radians(self, value: Real) -> Real {
        match self {
            AngleUnit::Radians => value,
            AngleUnit::Degrees => value.to_degrees(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn degree_conversion_roundtrip() {
        let unit = AngleUnit::Degrees;
        assert!((unit.to_radians(180.0) - PI).abs() < 1e-12);
        assert!((unit.from_radians(PI) - 180.0).abs() < 1e-12);
    }

    #[test]
    fn radians_are_passed_through() {
        let unit = AngleUnit::Radians;
        assert_eq!(unit.to_radians(0.25), 0.25);
        assert_eq!(unit.from_radians(0.25), 0.25);
    }
}
