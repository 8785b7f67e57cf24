//! Error types for the sat-vapor-pressure crate.
use crate::keys::{Formula, Phase};
use thiserror::Error;

/// Error type for the crate.
#[derive(Clone, PartialEq, Debug, Error)]
pub enum VaporPressureError {
    /// The formula name is not one of the supported formulas.
    #[error("Unknown saturation vapor pressure formula: {0}")]
    UnknownFormula(String),
    /// The phase name is neither liquid nor ice.
    #[error("Unknown phase of water: {0}, must be either `liquid` or `ice`")]
    UnknownPhase(String),
    /// The formula is known, but it does not define an equation for the phase.
    #[error("The {formula} formula has no saturation vapor pressure equation over {phase}")]
    UnsupportedCombination {
        /// The requested formula.
        formula: Formula,
        /// The requested phase.
        phase: Phase,
    },
    /// The temperature (C) is outside the documented domain of the equation.
    #[error(
        "{temperature} C is outside the valid range of the {formula} formula over {phase} \
         ({min} C to {max} C)"
    )]
    OutOfRange {
        /// The formula whose equation was evaluated.
        formula: Formula,
        /// The phase whose equation was evaluated.
        phase: Phase,
        /// The offending temperature in C.
        temperature: f64,
        /// Lower limit of the valid range in C.
        min: f64,
        /// Upper limit of the valid range in C.
        max: f64,
    },
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, VaporPressureError>;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = VaporPressureError::UnknownFormula("NOT_A_FORMULA".to_owned());
        assert!(err.to_string().contains("NOT_A_FORMULA"));

        let err = VaporPressureError::UnsupportedCombination {
            formula: Formula::Bolton,
            phase: Phase::Ice,
        };
        let msg = err.to_string();
        assert!(msg.contains("Bolton"));
        assert!(msg.contains("ice"));

        let err = VaporPressureError::OutOfRange {
            formula: Formula::Fukuta,
            phase: Phase::Liquid,
            temperature: -45.0,
            min: -39.0,
            max: 0.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("-45"));
        assert!(msg.contains("Fukuta"));
        assert!(msg.contains("liquid"));
    }
}
