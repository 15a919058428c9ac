//! Time and frequency units.

use crate::{define_kind, define_unit, impl_unit_conversions, Dimension, Family};

define_kind!(
    /// Durations
    Time => Family::TIME
);
define_kind!(Frequency => Family::FREQUENCY);

define_unit!(
    /// SI base unit of time
    Second, Seconds {
        kind: Time,
        name: "second",
        sense: Dimension::TIME,
        factor: 1.0,
        symbols: ["s", "sec"],
    }
);

define_unit!(Millisecond, Milliseconds {
    kind: Time,
    name: "millisecond",
    sense: Dimension::TIME,
    factor: 1e3,
    symbols: ["ms"],
});

define_unit!(Minute, Minutes {
    kind: Time,
    name: "minute",
    sense: Dimension::TIME,
    factor: 1.0 / 60.0,
    symbols: ["min"],
});

define_unit!(Hour, Hours {
    kind: Time,
    name: "hour",
    sense: Dimension::TIME,
    factor: 1.0 / 3600.0,
    symbols: ["h", "hr"],
});

define_unit!(Day, Days {
    kind: Time,
    name: "day",
    sense: Dimension::TIME,
    factor: 1.0 / 86_400.0,
    symbols: ["d"],
});

define_unit!(Week, Weeks {
    kind: Time,
    name: "week",
    sense: Dimension::TIME,
    factor: 1.0 / 604_800.0,
    symbols: ["wk"],
});

define_unit!(Hertz, Hertzes {
    kind: Frequency,
    name: "hertz",
    sense: Dimension::FREQUENCY,
    factor: 1.0,
    symbols: ["Hz"],
});

define_unit!(Kilohertz, Kilohertzes {
    kind: Frequency,
    name: "kilohertz",
    sense: Dimension::FREQUENCY,
    factor: 1e-3,
    symbols: ["kHz"],
});

define_unit!(Megahertz, Megahertzes {
    kind: Frequency,
    name: "megahertz",
    sense: Dimension::FREQUENCY,
    factor: 1e-6,
    symbols: ["MHz"],
});

define_unit!(
    /// Revolutions per minute, counted as plain cycles
    RevolutionPerMinute, RevolutionsPerMinute {
        kind: Frequency,
        name: "revolution_per_minute",
        sense: Dimension::FREQUENCY,
        factor: 60.0,
        symbols: ["rpm"],
    }
);

impl_unit_conversions!(Second, Millisecond, Minute, Hour, Day, Week);
impl_unit_conversions!(Hertz, Kilohertz, Megahertz, RevolutionPerMinute);
