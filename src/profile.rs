//! Saturation vapor pressure profiles.
//!
//! Profiles are vectors of `Optioned` values as they come out of a sounding, missing values in
//! give missing values out at the same level.

use crate::{
    calculator::{above_freezing_fallback, Calculator},
    error::{Result, VaporPressureError},
    keys::{Formula, Phase},
};
use metfor::{Celsius, HectoPascal};
use optional::{none, some, Optioned};

impl Calculator {
    /// Calculate a saturation vapor pressure profile from a temperature profile.
    ///
    /// A formula that has no equation for the phase fails the whole profile, even if every level
    /// is missing. Levels where the equation has no value (Fukuta below -39 C) are missing in the
    /// output, but with strict range checking enabled any level outside the valid range of the
    /// equation is an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::Celsius;
    /// use optional::{none, some};
    /// use sat_vapor_pressure::{Calculator, Formula, Phase};
    ///
    /// let temperatures = vec![some(Celsius(20.0)), none(), some(Celsius(-5.0))];
    /// let e = Calculator::new()
    ///     .profile(&temperatures, Phase::Liquid, Formula::WMO)
    ///     .unwrap();
    ///
    /// assert_eq!(e.len(), 3);
    /// assert!(e[0].is_some());
    /// assert!(e[1].is_none());
    /// assert!(e[0].unpack() > e[2].unpack());
    /// ```
    pub fn profile(
        &self,
        temperatures: &[Optioned<Celsius>],
        phase: Phase,
        formula: Formula,
    ) -> Result<Vec<Optioned<HectoPascal>>> {
        let formula = self.substitute(phase, formula)?;

        temperatures
            .iter()
            .map(|t_opt| {
                if t_opt.is_none() {
                    return Ok(none());
                }

                let temperature = t_opt.unpack();
                let equation = above_freezing_fallback(temperature, phase, formula);

                match self.evaluate(equation, temperature) {
                    Ok(e) => Ok(some(e)),
                    Err(VaporPressureError::OutOfRange { .. }) if !self.strict_range() => {
                        Ok(none())
                    }
                    Err(err) => Err(err),
                }
            })
            .collect()
    }
}

/// Calculate a saturation vapor pressure profile with the default [`Calculator`].
#[inline]
pub fn vapor_pressure_profile(
    temperatures: &[Optioned<Celsius>],
    phase: Phase,
    formula: Formula,
) -> Result<Vec<Optioned<HectoPascal>>> {
    Calculator::default().profile(temperatures, phase, formula)
}
