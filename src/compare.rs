//! Compare the formulas with each other at a single temperature.

use crate::{
    calculator::Calculator,
    error::Result,
    keys::{Formula, Phase},
};
use itertools::{Itertools, MinMaxResult};
use metfor::{Celsius, HectoPascal, Quantity};
use std::cmp::Ordering;
use strum::IntoEnumIterator;

/// The lowest and highest saturation vapor pressure over all the formulas at a temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormulaSpread {
    /// Formula giving the lowest value and that value.
    pub min: (Formula, HectoPascal),
    /// Formula giving the highest value and that value.
    pub max: (Formula, HectoPascal),
}

impl FormulaSpread {
    /// Difference between the highest and lowest value.
    pub fn range(&self) -> HectoPascal {
        HectoPascal(self.max.1.unpack() - self.min.1.unpack())
    }
}

impl Calculator {
    /// Evaluate every formula with its own equation for `phase` at `temperature`.
    ///
    /// Formulas only available through substitution are left out, they would duplicate the
    /// formula substituted for them.
    pub fn compare_formulas<T>(
        &self,
        temperature: T,
        phase: Phase,
    ) -> Vec<(Formula, Result<HectoPascal>)>
    where
        T: metfor::Temperature,
        Celsius: From<T>,
    {
        let temperature = Celsius::from(temperature);

        Formula::iter()
            .filter(|formula| formula.supports(phase))
            .map(|formula| (formula, self.compute_celsius(temperature, phase, formula)))
            .collect()
    }

    /// The spread of the formulas at `temperature`. Formulas that fail, e.g. because of strict
    /// range checking, are ignored. Returns `None` if every formula failed.
    pub fn formula_spread<T>(&self, temperature: T, phase: Phase) -> Option<FormulaSpread>
    where
        T: metfor::Temperature,
        Celsius: From<T>,
    {
        let minmax = self
            .compare_formulas(temperature, phase)
            .into_iter()
            .filter_map(|(formula, result)| result.ok().map(|e| (formula, e)))
            .filter(|(_, e)| e.unpack().is_finite())
            .minmax_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));

        match minmax {
            MinMaxResult::NoElements => None,
            MinMaxResult::OneElement(val) => Some(FormulaSpread { min: val, max: val }),
            MinMaxResult::MinMax(min, max) => Some(FormulaSpread { min, max }),
        }
    }
}

/// Evaluate every formula over `phase` at `temperature` with the default [`Calculator`].
///
/// # Examples
///
/// ```rust
/// use metfor::Celsius;
/// use sat_vapor_pressure::{compare_formulas, Formula, Phase};
///
/// let results = compare_formulas(Celsius(-10.0), Phase::Ice);
/// assert!(results.iter().all(|(_, e)| e.is_ok()));
/// assert!(results.iter().all(|(f, _)| *f != Formula::Bolton));
/// ```
#[inline]
pub fn compare_formulas<T>(temperature: T, phase: Phase) -> Vec<(Formula, Result<HectoPascal>)>
where
    T: metfor::Temperature,
    Celsius: From<T>,
{
    Calculator::default().compare_formulas(temperature, phase)
}

/// The spread of the formulas over `phase` at `temperature` with the default [`Calculator`].
#[inline]
pub fn formula_spread<T>(temperature: T, phase: Phase) -> Option<FormulaSpread>
where
    T: metfor::Temperature,
    Celsius: From<T>,
{
    Calculator::default().formula_spread(temperature, phase)
}
