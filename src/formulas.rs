//! The closed form saturation vapor pressure equations and the table mapping a phase and formula
//! to one of them.
//!
//! Every equation takes a temperature in Celsius, converts it internally where the publication
//! works in Kelvin, and returns the pressure in hPa. The coefficients are kept local to each
//! equation exactly as published.

use crate::{
    error::{Result, VaporPressureError},
    keys::{Formula, Phase},
};
use metfor::{Celsius, HectoPascal, Quantity};

mod ice;
mod liquid;

/// The temperature range over which an equation is documented to be valid, inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidRange {
    /// Lowest valid temperature.
    pub min: Celsius,
    /// Highest valid temperature.
    pub max: Celsius,
}

impl ValidRange {
    const fn new(min: f64, max: f64) -> Self {
        ValidRange {
            min: Celsius(min),
            max: Celsius(max),
        }
    }

    /// Whether `temperature` falls inside the range.
    pub fn contains(&self, temperature: Celsius) -> bool {
        temperature >= self.min && temperature <= self.max
    }

    /// Build the error reported when `temperature` is outside of this range.
    pub(crate) fn out_of_range(
        &self,
        formula: Formula,
        phase: Phase,
        temperature: Celsius,
    ) -> VaporPressureError {
        VaporPressureError::OutOfRange {
            formula,
            phase,
            temperature: temperature.unpack(),
            min: self.min.unpack(),
            max: self.max.unpack(),
        }
    }
}

/// Whether there is an equation for this combination.
pub(crate) fn has_equation(phase: Phase, formula: Formula) -> bool {
    valid_range(phase, formula).is_some()
}

/// The documented range of each equation, `None` if the formula has no equation for the phase.
pub(crate) fn valid_range(phase: Phase, formula: Formula) -> Option<ValidRange> {
    use Formula::*;

    let range = match phase {
        Phase::Liquid => match formula {
            MartiMauersberger => return None,
            // 173.15 K to 473.15 K
            HylandWexler => ValidRange::new(-100.0, 200.0),
            Hardy => ValidRange::new(-100.0, 100.0),
            // 190 K to 300 K
            Preining => ValidRange::new(-83.15, 26.85),
            Wexler => ValidRange::new(0.0, 100.0),
            GoffGratch | WMO | WMO2000 => ValidRange::new(-50.0, 102.0),
            CIMO => ValidRange::new(-45.0, 60.0),
            MagnusTetens => ValidRange::new(-50.0, 50.0),
            Buck => ValidRange::new(-40.0, 50.0),
            Buck2 => ValidRange::new(-80.0, 50.0),
            Sonntag => ValidRange::new(-100.0, 100.0),
            Bolton => ValidRange::new(-35.0, 35.0),
            Fukuta => FUKUTA_RANGE,
            // Triple point to the critical point, 273.16 K to 647.096 K
            IAPWS => ValidRange::new(0.01, 373.946),
            // 123 K to 332 K
            MurphyKoop => ValidRange::new(-150.15, 58.85),
            McIDAS => ValidRange::new(-50.0, 50.0),
        },
        Phase::Ice => match formula {
            Preining | Bolton | Fukuta | IAPWS => return None,
            // 170 K to 250 K
            MartiMauersberger => ValidRange::new(-103.15, -23.15),
            HylandWexler | Wexler | Hardy | GoffGratch | WMO | WMO2000 | Sonntag => {
                ValidRange::new(-100.0, 0.01)
            }
            MagnusTetens | McIDAS => ValidRange::new(-50.0, 0.01),
            Buck | Buck2 => ValidRange::new(-80.0, 0.01),
            CIMO => ValidRange::new(-65.0, 0.01),
            // Above 110 K
            MurphyKoop => ValidRange::new(-163.15, 0.01),
        },
    };

    Some(range)
}

/// The Fukuta correction is a polynomial fit to measurements from -39 C to 0 C and has no value
/// below that.
const FUKUTA_RANGE: ValidRange = ValidRange::new(-39.0, 0.0);

/// Evaluate the equation published for `formula` over `phase` at `temperature`.
///
/// No substitution happens here, a combination without its own equation is an
/// `UnsupportedCombination` error. The only temperature check is the hard lower limit of the
/// Fukuta correction.
pub(crate) fn evaluate(phase: Phase, formula: Formula, temperature: Celsius) -> Result<HectoPascal> {
    use Formula::*;

    let unsupported = || VaporPressureError::UnsupportedCombination { formula, phase };

    let pressure = match phase {
        Phase::Liquid => match formula {
            MartiMauersberger => return Err(unsupported()),
            HylandWexler => liquid::hyland_wexler(temperature),
            Hardy => liquid::hardy(temperature),
            Preining => liquid::preining(temperature),
            Wexler => liquid::wexler(temperature),
            GoffGratch => liquid::goff_gratch(temperature),
            CIMO => liquid::cimo(temperature),
            MagnusTetens => liquid::magnus_tetens(temperature),
            Buck => liquid::buck(temperature),
            Buck2 => liquid::buck2(temperature),
            WMO => liquid::wmo(temperature),
            WMO2000 => liquid::wmo2000(temperature),
            Sonntag => liquid::sonntag(temperature),
            Bolton => liquid::bolton(temperature),
            Fukuta => liquid::fukuta(temperature)
                .ok_or_else(|| FUKUTA_RANGE.out_of_range(formula, phase, temperature))?,
            IAPWS => liquid::iapws(temperature),
            MurphyKoop => liquid::murphy_koop(temperature),
            McIDAS => liquid::mcidas(temperature),
        },
        Phase::Ice => match formula {
            Preining | Bolton | Fukuta | IAPWS => return Err(unsupported()),
            MartiMauersberger => ice::marti_mauersberger(temperature),
            HylandWexler => ice::hyland_wexler(temperature),
            Wexler => ice::wexler(temperature),
            Hardy => ice::hardy(temperature),
            GoffGratch => ice::goff_gratch(temperature),
            MagnusTetens => ice::magnus_tetens(temperature),
            Buck => ice::buck(temperature),
            Buck2 => ice::buck2(temperature),
            CIMO => ice::cimo(temperature),
            // There is no typo issue in the WMO formulation for ice.
            WMO | WMO2000 => ice::wmo(temperature),
            Sonntag => ice::sonntag(temperature),
            MurphyKoop => ice::murphy_koop(temperature),
            McIDAS => ice::mcidas(temperature),
        },
    };

    Ok(pressure)
}
