//! Plane angle units.
//!
//! Angles have no SI dimension of their own; they carry the "other"
//! dimension and are told apart from currencies by their family.

use std::f64::consts::PI;

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family};

define_kind!(Angle => Family::ANGLE);

define_unit!(Radian, Radians {
    kind: Angle,
    name: "radian",
    sense: Dimension::OTHER,
    factor: 1.0,
    symbols: ["rad"],
});

define_unit!(Degree, Degrees {
    kind: Angle,
    name: "degree",
    sense: Dimension::OTHER,
    factor: 180.0 / PI,
    symbols: ["°", "deg"],
    format: "{value}{symbol}",
});

define_unit!(Arcminute, Arcminutes {
    kind: Angle,
    name: "arcminute",
    sense: Dimension::OTHER,
    factor: 10_800.0 / PI,
    symbols: ["′", "arcmin"],
    format: "{value}{symbol}",
});

define_unit!(Arcsecond, Arcseconds {
    kind: Angle,
    name: "arcsecond",
    sense: Dimension::OTHER,
    factor: 648_000.0 / PI,
    symbols: ["″", "arcsec"],
    format: "{value}{symbol}",
});

define_unit!(Gradian, Gradians {
    kind: Angle,
    name: "gradian",
    sense: Dimension::OTHER,
    factor: 200.0 / PI,
    symbols: ["gon", "grad"],
});

define_unit!(
    /// Full revolution
    Turn, Turns {
        kind: Angle,
        name: "turn",
        sense: Dimension::OTHER,
        factor: 0.5 / PI,
        symbols: ["tr", "rev"],
    }
);

impl_unit_conversions!(Radian, Degree, Arcminute, Arcsecond, Gradian, Turn);
