#![warn(missing_docs)]
//! Saturation vapor pressure of water over a plane surface of liquid water or ice.
//!
//! The pressure is calculated with one of several published formulas (WMO, Hyland-Wexler,
//! Goff-Gratch, Magnus-Tetens, Buck, ...), each evaluated with its own coefficients exactly as
//! published. Temperatures are taken as any of the [metfor](https://crates.io/crates/metfor)
//! temperature types and results are in hPa.
//!
//! ```rust
//! use metfor::{Celsius, Quantity};
//! use sat_vapor_pressure::{vapor_pressure, Formula, Phase};
//!
//! let e = vapor_pressure(Celsius(25.0), Phase::Liquid, Formula::WMO).unwrap();
//! assert!((e.unpack() - 31.67).abs() < 0.01);
//! ```

//
// API
//
pub use crate::{
    calculator::{vapor_pressure, vapor_pressure_default, Calculator, Equation},
    compare::{compare_formulas, formula_spread, FormulaSpread},
    error::{Result, VaporPressureError},
    formulas::ValidRange,
    keys::{Formula, Phase},
    profile::vapor_pressure_profile,
};

//
// Internal use only
//
mod calculator;
mod compare;
mod error;
mod formulas;
mod keys;
mod profile;
