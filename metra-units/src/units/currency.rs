//! Currencies.
//!
//! Currency factors are exchange rates: units of the currency per euro.
//! They are `VOLATILE`; the values below are defaults and a
//! [`ConversionContext`](crate::ConversionContext) supplies current rates.
//! Currencies have no `From` conversions between each other, since those
//! would bake the default rates in.

use crate::{define_kind, define_unit, Dimension, Family};

define_kind!(Currency => Family::CURRENCY);

define_unit!(
    /// Reference currency
    Eur, Euros {
        kind: Currency,
        name: "EUR",
        sense: Dimension::OTHER,
        factor: 1.0,
        symbols: ["€", "EUR"],
        volatile: true,
    }
);

define_unit!(Usd, Dollars {
    kind: Currency,
    name: "USD",
    sense: Dimension::OTHER,
    factor: 1.08,
    symbols: ["$", "USD"],
    format: "{symbol}{value}",
    volatile: true,
});

define_unit!(Gbp, PoundsSterling {
    kind: Currency,
    name: "GBP",
    sense: Dimension::OTHER,
    factor: 0.85,
    symbols: ["£", "GBP"],
    format: "{symbol}{value}",
    volatile: true,
});

define_unit!(Chf, SwissFrancs {
    kind: Currency,
    name: "CHF",
    sense: Dimension::OTHER,
    factor: 0.95,
    symbols: ["CHF", "Fr."],
    volatile: true,
});

define_unit!(Jpy, Yen {
    kind: Currency,
    name: "JPY",
    sense: Dimension::OTHER,
    factor: 160.0,
    symbols: ["¥", "JPY"],
    format: "{symbol}{value}",
    volatile: true,
});
