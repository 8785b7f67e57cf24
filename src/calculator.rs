//! Select and evaluate the saturation vapor pressure equation for a phase and formula.

use crate::{
    error::{Result, VaporPressureError},
    formulas,
    keys::{Formula, Phase},
};
use metfor::{Celsius, HectoPascal, Quantity};
use tracing::{debug, warn};

/// The equation that is actually evaluated for a request. It differs from the request when a
/// formula is substituted, or when an ice request is above freezing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Equation {
    /// Phase of the equation.
    pub phase: Phase,
    /// Formula the equation comes from.
    pub formula: Formula,
}

/// Options for computing the saturation vapor pressure.
///
/// By default temperatures outside of an equation's documented valid range are computed anyway,
/// and formulas missing an equation for the requested phase are substituted where a
/// substitution is well established (Goff-Gratch for Marti-Mauersberger over liquid water and
/// for IAPWS over ice).
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, Quantity};
/// use sat_vapor_pressure::{Calculator, Formula, Phase};
///
/// let calc = Calculator::new();
/// let e = calc.compute(Celsius(25.0), Phase::Liquid, Formula::WMO).unwrap();
/// assert!((e.unpack() - 31.668).abs() < 0.001);
///
/// // Sonntag (1994) is documented from -100 C to 100 C over liquid water.
/// let strict = Calculator::new().with_strict_range(true);
/// assert!(strict.compute(Celsius(120.0), Phase::Liquid, Formula::Sonntag).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    strict_range: bool,
    phase_substitution: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator {
            strict_range: false,
            phase_substitution: true,
        }
    }
}

impl Calculator {
    /// Create a calculator with the default options. This is a proxy for default with a clearer
    /// name.
    #[inline]
    pub fn new() -> Self {
        Calculator::default()
    }

    /// Fail with `OutOfRange` when the temperature is outside the documented valid range of the
    /// equation instead of computing it anyway.
    #[inline]
    pub fn with_strict_range(self, strict_range: bool) -> Self {
        Calculator {
            strict_range,
            ..self
        }
    }

    /// Allow substituting Goff-Gratch for formulas that do not publish an equation for the
    /// requested phase. When disabled those requests fail with `UnsupportedCombination`.
    #[inline]
    pub fn with_phase_substitution(self, phase_substitution: bool) -> Self {
        Calculator {
            phase_substitution,
            ..self
        }
    }

    /// Whether strict range checking is enabled.
    #[inline]
    pub fn strict_range(&self) -> bool {
        self.strict_range
    }

    /// Whether phase substitution is enabled.
    #[inline]
    pub fn phase_substitution(&self) -> bool {
        self.phase_substitution
    }

    /// Find the equation that will be evaluated for this request.
    ///
    /// Over ice, temperatures above freezing always use the Hyland-Wexler equation over liquid
    /// water, the ice curve is meaningless there.
    pub fn resolve<T>(&self, temperature: T, phase: Phase, formula: Formula) -> Result<Equation>
    where
        T: metfor::Temperature,
        Celsius: From<T>,
    {
        let formula = self.substitute(phase, formula)?;

        Ok(above_freezing_fallback(Celsius::from(temperature), phase, formula))
    }

    /// Calculate the saturation vapor pressure (hPa) over `phase` with `formula`.
    pub fn compute<T>(&self, temperature: T, phase: Phase, formula: Formula) -> Result<HectoPascal>
    where
        T: metfor::Temperature,
        Celsius: From<T>,
    {
        self.compute_celsius(Celsius::from(temperature), phase, formula)
    }

    pub(crate) fn compute_celsius(
        &self,
        temperature: Celsius,
        phase: Phase,
        formula: Formula,
    ) -> Result<HectoPascal> {
        let formula = self.substitute(phase, formula)?;
        let equation = above_freezing_fallback(temperature, phase, formula);

        self.evaluate(equation, temperature)
    }

    /// Evaluate an already resolved equation, checking the valid range in strict mode.
    pub(crate) fn evaluate(&self, equation: Equation, temperature: Celsius) -> Result<HectoPascal> {
        if self.strict_range {
            // Every resolved equation has a range.
            if let Some(range) = equation.formula.valid_range(equation.phase) {
                if !range.contains(temperature) {
                    return Err(range.out_of_range(equation.formula, equation.phase, temperature));
                }
            }
        }

        formulas::evaluate(equation.phase, equation.formula, temperature)
    }

    /// Calculate the saturation vapor pressure (hPa) with the default formula for `phase`.
    pub fn compute_default<T>(&self, temperature: T, phase: Phase) -> Result<HectoPascal>
    where
        T: metfor::Temperature,
        Celsius: From<T>,
    {
        self.compute_celsius(Celsius::from(temperature), phase, Formula::default_for(phase))
    }

    /// Calculate the saturation vapor pressure (hPa) with the phase and formula given by name,
    /// e.g. `"liquid"` and `"WMO"`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metfor::Celsius;
    /// use sat_vapor_pressure::{Calculator, VaporPressureError};
    ///
    /// let calc = Calculator::new();
    /// assert!(calc.compute_by_name(Celsius(-10.0), "ice", "Buck").is_ok());
    /// assert_eq!(
    ///     calc.compute_by_name(Celsius(-10.0), "ice", "NOT_A_FORMULA"),
    ///     Err(VaporPressureError::UnknownFormula("NOT_A_FORMULA".to_owned()))
    /// );
    /// ```
    pub fn compute_by_name<T>(
        &self,
        temperature: T,
        phase: &str,
        formula: &str,
    ) -> Result<HectoPascal>
    where
        T: metfor::Temperature,
        Celsius: From<T>,
    {
        let phase = Phase::from_name(phase)?;
        let formula = Formula::from_name(formula)?;

        self.compute_celsius(Celsius::from(temperature), phase, formula)
    }

    /// The formula whose equation is used for `phase`, warning when it is a substitute.
    pub(crate) fn substitute(&self, phase: Phase, formula: Formula) -> Result<Formula> {
        if formula.supports(phase) {
            return Ok(formula);
        }

        let substitute = match (phase, formula) {
            (Phase::Liquid, Formula::MartiMauersberger) | (Phase::Ice, Formula::IAPWS)
                if self.phase_substitution =>
            {
                Formula::GoffGratch
            }
            _ => return Err(VaporPressureError::UnsupportedCombination { formula, phase }),
        };

        warn!(
            %formula,
            %phase,
            "no equation for this phase, using {} instead", substitute
        );

        Ok(substitute)
    }
}

/// Over ice above freezing the liquid Hyland-Wexler equation is used.
pub(crate) fn above_freezing_fallback(
    temperature: Celsius,
    phase: Phase,
    formula: Formula,
) -> Equation {
    if phase == Phase::Ice && temperature.unpack() > 0.0 {
        debug!(
            %formula,
            temperature = temperature.unpack(),
            "above freezing over ice, using HylandWexler over liquid water"
        );
        return Equation {
            phase: Phase::Liquid,
            formula: Formula::HylandWexler,
        };
    }

    Equation { phase, formula }
}

/// Calculate the saturation vapor pressure (hPa) with the default [`Calculator`].
///
/// # Examples
///
/// ```rust
/// use metfor::{Celsius, Kelvin, Quantity};
/// use sat_vapor_pressure::{vapor_pressure, Formula, Phase};
///
/// let e_c = vapor_pressure(Celsius(-10.0), Phase::Ice, Formula::GoffGratch).unwrap();
/// let e_k = vapor_pressure(Kelvin(263.15), Phase::Ice, Formula::GoffGratch).unwrap();
/// assert!((e_c.unpack() - e_k.unpack()).abs() < 1.0e-9);
/// ```
#[inline]
pub fn vapor_pressure<T>(temperature: T, phase: Phase, formula: Formula) -> Result<HectoPascal>
where
    T: metfor::Temperature,
    Celsius: From<T>,
{
    Calculator::default().compute(temperature, phase, formula)
}

/// Calculate the saturation vapor pressure (hPa) with the default formula for the phase,
/// Hyland-Wexler over liquid water and Goff-Gratch over ice.
#[inline]
pub fn vapor_pressure_default<T>(temperature: T, phase: Phase) -> Result<HectoPascal>
where
    T: metfor::Temperature,
    Celsius: From<T>,
{
    Calculator::default().compute_default(temperature, phase)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test_tools::approx_equal;
    use metfor::Kelvin;
    use strum::IntoEnumIterator;

    #[test]
    fn test_substitutions() {
        let calc = Calculator::new();

        let eq = calc
            .resolve(Celsius(10.0), Phase::Liquid, Formula::MartiMauersberger)
            .unwrap();
        assert_eq!(eq, Equation { phase: Phase::Liquid, formula: Formula::GoffGratch });

        let eq = calc.resolve(Celsius(-10.0), Phase::Ice, Formula::IAPWS).unwrap();
        assert_eq!(eq, Equation { phase: Phase::Ice, formula: Formula::GoffGratch });

        let mm = calc.compute(Celsius(10.0), Phase::Liquid, Formula::MartiMauersberger).unwrap();
        let gg = calc.compute(Celsius(10.0), Phase::Liquid, Formula::GoffGratch).unwrap();
        assert_eq!(mm, gg);
    }

    #[test]
    fn test_substitutions_disabled() {
        let calc = Calculator::new().with_phase_substitution(false);
        assert!(!calc.phase_substitution());

        assert_eq!(
            calc.compute(Celsius(10.0), Phase::Liquid, Formula::MartiMauersberger),
            Err(VaporPressureError::UnsupportedCombination {
                formula: Formula::MartiMauersberger,
                phase: Phase::Liquid,
            })
        );
        assert_eq!(
            calc.compute(Celsius(-10.0), Phase::Ice, Formula::IAPWS),
            Err(VaporPressureError::UnsupportedCombination {
                formula: Formula::IAPWS,
                phase: Phase::Ice,
            })
        );
    }

    #[test]
    fn test_liquid_only_formulas_over_ice() {
        let calc = Calculator::new();

        for &formula in &[Formula::Preining, Formula::Bolton, Formula::Fukuta] {
            // Even above freezing, where the ice request would use the liquid curve.
            for &t in &[-10.0, 10.0] {
                assert_eq!(
                    calc.compute(Celsius(t), Phase::Ice, formula),
                    Err(VaporPressureError::UnsupportedCombination {
                        formula,
                        phase: Phase::Ice,
                    })
                );
            }
        }
    }

    #[test]
    fn test_ice_above_freezing_uses_liquid_curve() {
        let calc = Calculator::new();
        let hw = calc.compute(Celsius(5.0), Phase::Liquid, Formula::HylandWexler).unwrap();

        for formula in Formula::iter().filter(|f| f.supports(Phase::Ice)) {
            let e = calc.compute(Celsius(5.0), Phase::Ice, formula).unwrap();
            assert_eq!(e, hw, "{}", formula);
        }

        // At freezing the ice equation is still used.
        let eq = calc.resolve(Celsius(0.0), Phase::Ice, Formula::Buck).unwrap();
        assert_eq!(eq, Equation { phase: Phase::Ice, formula: Formula::Buck });
        let e = calc.compute(Celsius(0.0), Phase::Ice, Formula::Buck).unwrap();
        assert!(approx_equal(e.unpack(), 6.1115, 1.0e-12));
    }

    #[test]
    fn test_strict_range() {
        let calc = Calculator::new().with_strict_range(true);
        assert!(calc.strict_range());

        assert!(calc.compute(Celsius(30.0), Phase::Liquid, Formula::Bolton).is_ok());
        assert_eq!(
            calc.compute(Celsius(40.0), Phase::Liquid, Formula::Bolton),
            Err(VaporPressureError::OutOfRange {
                formula: Formula::Bolton,
                phase: Phase::Liquid,
                temperature: 40.0,
                min: -35.0,
                max: 35.0,
            })
        );

        // Marti-Mauersberger was only measured between 170 K and 250 K.
        assert!(calc.compute(Celsius(0.0), Phase::Ice, Formula::MartiMauersberger).is_err());
        assert!(calc.compute(Celsius(-50.0), Phase::Ice, Formula::MartiMauersberger).is_ok());

        // Permissive by default.
        let calc = Calculator::new();
        assert!(calc.compute(Celsius(40.0), Phase::Liquid, Formula::Bolton).is_ok());
        assert!(calc.compute(Celsius(0.0), Phase::Ice, Formula::MartiMauersberger).is_ok());
    }

    #[test]
    fn test_fukuta_has_no_value_below_limit() {
        for calc in &[Calculator::new(), Calculator::new().with_strict_range(true)] {
            assert!(matches!(
                calc.compute(Celsius(-45.0), Phase::Liquid, Formula::Fukuta),
                Err(VaporPressureError::OutOfRange { .. })
            ));
        }
    }

    #[test]
    fn test_temperature_units() {
        let e_c = vapor_pressure(Celsius(20.0), Phase::Liquid, Formula::Sonntag).unwrap();
        let e_k = vapor_pressure(Kelvin(293.15), Phase::Liquid, Formula::Sonntag).unwrap();
        assert!(approx_equal(e_c.unpack(), e_k.unpack(), 1.0e-9));
    }

    #[test]
    fn test_defaults() {
        let e = vapor_pressure_default(Celsius(25.0), Phase::Liquid).unwrap();
        assert!(approx_equal(e.unpack(), 31.692164701436276, 1.0e-9));

        let e = vapor_pressure_default(Celsius(-40.0), Phase::Ice).unwrap();
        assert!(approx_equal(e.unpack(), 0.1281781610807646, 1.0e-10));
    }

    #[test]
    fn test_compute_by_name() {
        let calc = Calculator::new();
        let e = calc.compute_by_name(Celsius(25.0), "liquid", "WMO").unwrap();
        assert!(approx_equal(e.unpack(), 31.66824419121551, 1.0e-9));

        assert_eq!(
            calc.compute_by_name(Celsius(25.0), "plasma", "WMO"),
            Err(VaporPressureError::UnknownPhase("plasma".to_owned()))
        );
        assert_eq!(
            calc.compute_by_name(Celsius(25.0), "liquid", "NOT_A_FORMULA"),
            Err(VaporPressureError::UnknownFormula("NOT_A_FORMULA".to_owned()))
        );
    }
}
